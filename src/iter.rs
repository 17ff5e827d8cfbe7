use crate::node::{Arena, NodeId};

/// An in-order walk over the [`NodeId`] of every node in a subtree.
#[derive(Debug)]
pub(crate) struct InOrder<'a, K, V> {
    arena: &'a Arena<K, V>,
    stack: Vec<NodeId>,
}

impl<'a, K, V> InOrder<'a, K, V> {
    pub(crate) fn new(arena: &'a Arena<K, V>, root: NodeId) -> Self {
        let mut this = Self {
            arena,
            stack: vec![],
        };

        // Descend down the left side of the tree.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: NodeId) {
        let mut ptr = subtree_root;

        while !ptr.is_nil() {
            self.stack.push(ptr);
            ptr = self.arena.left(ptr);
        }
    }
}

impl<K, V> Iterator for InOrder<'_, K, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        self.push_subtree(self.arena.right(v));

        Some(v)
    }
}

/// Consumes every node in a subtree in order, freeing each slot as its key
/// and value are yielded.
#[derive(Debug)]
pub(crate) struct Drain<'a, K, V> {
    arena: &'a mut Arena<K, V>,
    stack: Vec<NodeId>,
}

impl<'a, K, V> Drain<'a, K, V> {
    pub(crate) fn new(arena: &'a mut Arena<K, V>, root: NodeId) -> Self {
        let mut this = Self {
            arena,
            stack: vec![],
        };

        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: NodeId) {
        let mut ptr = subtree_root;

        while !ptr.is_nil() {
            self.stack.push(ptr);
            ptr = self.arena.left(ptr);
        }
    }
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // The left subtree of v has already been yielded, so once the right
        // child is on the stack nothing refers to v.
        let right = self.arena.right(v);
        self.push_subtree(right);

        Some(self.arena.free(v).into_tuple())
    }
}
