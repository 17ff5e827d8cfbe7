use slab::Slab;

/// The index of a [`Node`] slot within an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// The sentinel: stands in for every absent child and for the root's parent.
///
/// It never maps to a slot in the arena, so it can never be written to, and
/// reading its colour always yields [`Color::Black`].
pub(crate) const NIL: NodeId = NodeId(usize::MAX);

impl NodeId {
    #[inline]
    pub(crate) fn is_nil(self) -> bool {
        self == NIL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Identifies one of the two children of a node.
///
/// The balancing code is written once against a [`Side`] and its
/// [`Side::opposite()`] rather than as two mirrored copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) parent: NodeId,

    pub(crate) color: Color,

    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Node<K, V> {
    /// Initialise a new red, childless [`Node`].
    fn new(key: K, value: V, parent: NodeId) -> Self {
        Self {
            left: NIL,
            right: NIL,
            parent,
            color: Color::Red,
            key,
            value,
        }
    }

    /// Explode this [`Node`] into the key and value it contains.
    pub(crate) fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// Dense storage for the nodes of a single tree.
///
/// Nodes are allocated one at a time and vacated slots are reused by later
/// allocations.
///
/// Accessing the links or payload of [`NIL`] (or any freed id) panics; only
/// [`Arena::color()`] accepts the sentinel.
#[derive(Debug)]
pub(crate) struct Arena<K, V> {
    nodes: Slab<Node<K, V>>,
}

impl<K, V> Default for Arena<K, V> {
    fn default() -> Self {
        Self { nodes: Slab::new() }
    }
}

impl<K, V> Arena<K, V> {
    /// Allocate a red node linked to `parent`, with both children set to
    /// [`NIL`].
    pub(crate) fn alloc(&mut self, key: K, value: V, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.insert(Node::new(key, value, parent)));
        debug_assert!(!id.is_nil());
        id
    }

    /// Release the slot for `id`, returning the node it held.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not allocated.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<K, V> {
        self.nodes.remove(id.0)
    }

    /// The number of allocated nodes.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.0]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.0]
    }

    #[inline]
    pub(crate) fn color(&self, id: NodeId) -> Color {
        if id.is_nil() {
            return Color::Black;
        }
        self.node(id).color
    }

    #[inline]
    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        self.color(id) == Color::Red
    }

    #[inline]
    pub(crate) fn is_black(&self, id: NodeId) -> bool {
        self.color(id) == Color::Black
    }

    /// Set the colour of `id`.
    ///
    /// Painting [`NIL`] black is accepted as a no-op, as the sentinel is
    /// black by definition.
    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        if id.is_nil() {
            debug_assert_eq!(color, Color::Black, "attempt to paint the sentinel red");
            return;
        }
        self.node_mut(id).color = color;
    }

    #[inline]
    pub(crate) fn parent(&self, id: NodeId) -> NodeId {
        self.node(id).parent
    }

    /// Set the parent of `id`, ignoring writes to [`NIL`].
    #[inline]
    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        if !id.is_nil() {
            self.node_mut(id).parent = parent;
        }
    }

    #[inline]
    pub(crate) fn child(&self, id: NodeId, side: Side) -> NodeId {
        let n = self.node(id);
        match side {
            Side::Left => n.left,
            Side::Right => n.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: NodeId) {
        let n = self.node_mut(id);
        match side {
            Side::Left => n.left = child,
            Side::Right => n.right = child,
        }
    }

    #[inline]
    pub(crate) fn left(&self, id: NodeId) -> NodeId {
        self.child(id, Side::Left)
    }

    #[inline]
    pub(crate) fn right(&self, id: NodeId) -> NodeId {
        self.child(id, Side::Right)
    }

    /// Return which child of its parent `id` is.
    ///
    /// `id` must have a parent.
    #[inline]
    pub(crate) fn side_of(&self, id: NodeId) -> Side {
        let parent = self.parent(id);
        if self.left(parent) == id {
            Side::Left
        } else {
            debug_assert_eq!(self.right(parent), id);
            Side::Right
        }
    }

    /// Descend from `id` strictly along `side` until the next node on that
    /// side is [`NIL`].
    pub(crate) fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        debug_assert!(!id.is_nil());
        loop {
            let next = self.child(id, side);
            if next.is_nil() {
                return id;
            }
            id = next;
        }
    }

    /// The node with the smallest key in the subtree rooted at `id`.
    pub(crate) fn minimum(&self, id: NodeId) -> NodeId {
        self.extreme(id, Side::Left)
    }

    /// The node with the largest key in the subtree rooted at `id`.
    pub(crate) fn maximum(&self, id: NodeId) -> NodeId {
        self.extreme(id, Side::Right)
    }

    /// The in-order successor of `id`, or [`NIL`] if `id` holds the largest
    /// key in the tree.
    pub(crate) fn successor(&self, mut id: NodeId) -> NodeId {
        let right = self.right(id);
        if !right.is_nil() {
            return self.minimum(right);
        }

        // Climb until arriving at a parent from its left subtree.
        let mut parent = self.parent(id);
        while !parent.is_nil() && self.right(parent) == id {
            id = parent;
            parent = self.parent(id);
        }
        parent
    }

    /// Exchange the keys and values held by `id` and `other`, leaving their
    /// links and colours untouched.
    pub(crate) fn swap_payload(&mut self, id: NodeId, other: &mut Node<K, V>) {
        let n = self.node_mut(id);
        std::mem::swap(&mut n.key, &mut other.key);
        std::mem::swap(&mut n.value, &mut other.value);
    }
}
