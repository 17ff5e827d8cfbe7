use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
};

use compare::{Compare, Natural};
use log::debug;

use crate::{
    balance,
    dispose::{Dispose, DropKey},
    dot::Dot,
    error::{DuplicateKey, InvariantViolation},
    iter::{Drain, InOrder},
    node::{Arena, NodeId, Side, NIL},
    validate,
};

/// An ordered map backed by a red-black tree.
///
/// Keys are ordered by the comparator `C` (by default their [`Ord`] impl),
/// and every insert, removal and lookup completes in O(log n) time
/// regardless of insertion order.
///
/// Keys removed through [`RbTree::delete()`] are handed to the disposal hook
/// `D` (by default, dropped). Values are always returned to the caller.
///
/// ```
/// use redblack::RbTree;
///
/// let mut t = RbTree::new();
///
/// t.insert(2, "bananas").unwrap();
/// t.insert(1, "platanos").unwrap();
///
/// // Duplicate keys are rejected, returning the key and value.
/// let err = t.insert(2, "apples").unwrap_err();
/// assert_eq!(err.into_inner(), (2, "apples"));
///
/// assert_eq!(t.get(&2), Some(&"bananas"));
/// assert_eq!(t.minimum(), &"platanos");
///
/// assert_eq!(t.remove(&1), Some((1, "platanos")));
/// assert_eq!(t.len(), 1);
/// ```
pub struct RbTree<K, V, C = Natural<K>, D = DropKey> {
    pub(crate) arena: Arena<K, V>,
    pub(crate) root: NodeId,

    cmp: C,
    disposer: D,
}

impl<K, V> RbTree<K, V>
where
    K: Ord,
{
    /// Initialise an empty tree ordering keys by their [`Ord`] impl.
    pub fn new() -> Self {
        Self::with_comparator(compare::natural())
    }
}

impl<K, V> Default for RbTree<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> RbTree<K, V, C>
where
    C: Compare<K>,
{
    /// Initialise an empty tree ordering keys with `cmp`.
    ///
    /// `cmp` must define a total order that is consistent across calls.
    ///
    /// ```
    /// use redblack::RbTree;
    ///
    /// let mut t = RbTree::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// for k in [1, 3, 2] {
    ///     t.insert(k, ()).unwrap();
    /// }
    ///
    /// let mut keys = vec![];
    /// t.visit(|k, _v| keys.push(*k));
    /// assert_eq!(keys, [3, 2, 1]);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_hooks(cmp, DropKey)
    }
}

impl<K, V, C, D> RbTree<K, V, C, D>
where
    C: Compare<K>,
{
    /// Initialise an empty tree ordering keys with `cmp`, and passing keys
    /// removed by [`RbTree::delete()`] to `disposer`.
    pub fn with_hooks(cmp: C, disposer: D) -> Self {
        Self {
            arena: Arena::default(),
            root: NIL,
            cmp,
            disposer,
        }
    }

    /// Return a reference to the value for `key`, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Return the stored key equal to `key` and its value, if any.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let id = self.find(key);
        if id.is_nil() {
            return None;
        }

        let n = self.arena.node(id);
        Some((&n.key, &n.value))
    }

    /// Return a mutable reference to the value for `key`, if any.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find(key);
        if id.is_nil() {
            return None;
        }

        Some(&mut self.arena.node_mut(id).value)
    }

    /// Return true if the tree holds a key equal to `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        !self.find(key).is_nil()
    }

    /// Insert `value` for `key`.
    ///
    /// If the tree already holds an equal key nothing is modified, and the
    /// [`DuplicateKey`] error hands `key` and `value` back to the caller.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), DuplicateKey<K, V>> {
        // Descend to the leaf position for key.
        let mut parent = NIL;
        let mut side = Side::Left;
        let mut ptr = self.root;

        while !ptr.is_nil() {
            let n = self.arena.node(ptr);
            side = match self.cmp.compare(&key, &n.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Err(DuplicateKey { key, value }),
            };
            parent = ptr;
            ptr = self.arena.child(ptr, side);
        }

        let id = self.arena.alloc(key, value, parent);
        if parent.is_nil() {
            self.root = id;
        } else {
            self.arena.set_child(parent, side, id);
        }

        balance::insert_fixup(&mut self.arena, &mut self.root, id);

        self.assert_invariants();
        Ok(())
    }

    /// Remove `key` from the tree, returning the stored key and its value.
    ///
    /// The disposal hook is not called; ownership of both the key and value
    /// passes to the caller.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let id = self.find(key);
        if id.is_nil() {
            return None;
        }

        let removed = balance::unlink(&mut self.arena, &mut self.root, id);

        self.assert_invariants();
        Some(removed.into_tuple())
    }

    /// Check every red-black tree property, returning the black-height of
    /// the tree (the number of black nodes on any path from the root to a
    /// leaf sentinel, counting the sentinel but not the root).
    ///
    /// An error is only ever returned if a comparator is inconsistent.
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        validate::check(&self.arena, self.root, &self.cmp)
    }

    /// Return the node holding `key`, or [`NIL`].
    fn find(&self, key: &K) -> NodeId {
        let mut ptr = self.root;

        while !ptr.is_nil() {
            let n = self.arena.node(ptr);
            ptr = match self.cmp.compare(key, &n.key) {
                Ordering::Less => n.left,
                Ordering::Greater => n.right,
                Ordering::Equal => return ptr,
            };
        }

        NIL
    }

    #[inline]
    fn assert_invariants(&self) {
        if cfg!(feature = "check_invariants") {
            if let Err(e) = self.validate() {
                panic!("red-black tree invariant violated: {e}");
            }
        }
    }
}

impl<K, V, C, D> RbTree<K, V, C, D>
where
    C: Compare<K>,
    D: Dispose<K>,
{
    /// Remove `key` from the tree, passing the stored key to the disposal
    /// hook and returning the value.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let (key, value) = self.remove(key)?;
        self.disposer.dispose(key);
        Some(value)
    }
}

impl<K, V, C, D> RbTree<K, V, C, D> {
    /// The number of entries in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Return true if the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_nil()
    }

    /// Return the entry with the smallest key, if any.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        if self.is_empty() {
            return None;
        }
        let n = self.arena.node(self.arena.minimum(self.root));
        Some((&n.key, &n.value))
    }

    /// Return the entry with the largest key, if any.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        if self.is_empty() {
            return None;
        }
        let n = self.arena.node(self.arena.maximum(self.root));
        Some((&n.key, &n.value))
    }

    /// Return the value of the smallest key.
    ///
    /// # Panics
    ///
    /// Panics if the tree is empty. Use [`RbTree::first_key_value()`] to
    /// avoid guarding the call.
    pub fn minimum(&self) -> &V {
        match self.first_key_value() {
            Some((_, v)) => v,
            None => panic!("minimum() called on an empty tree"),
        }
    }

    /// Return the value of the largest key.
    ///
    /// # Panics
    ///
    /// Panics if the tree is empty. Use [`RbTree::last_key_value()`] to
    /// avoid guarding the call.
    pub fn maximum(&self) -> &V {
        match self.last_key_value() {
            Some((_, v)) => v,
            None => panic!("maximum() called on an empty tree"),
        }
    }

    /// Call `visitor` with every key and value, in ascending key order.
    pub fn visit<F>(&self, mut visitor: F)
    where
        F: FnMut(&K, &V),
    {
        for id in InOrder::new(&self.arena, self.root) {
            let n = self.arena.node(id);
            visitor(&n.key, &n.value);
        }
    }

    /// Consume the tree, passing ownership of every key and value to
    /// `visitor` in ascending key order.
    ///
    /// Pass a no-op visitor (`|_, _| {}`) to simply drop every entry.
    pub fn destroy<F>(mut self, mut visitor: F)
    where
        F: FnMut(K, V),
    {
        debug!("destroying tree with {} nodes", self.len());

        let root = std::mem::replace(&mut self.root, NIL);
        for (k, v) in Drain::new(&mut self.arena, root) {
            visitor(k, v);
        }

        debug_assert_eq!(self.arena.len(), 0);
    }

    /// Render the structure and colouring of the tree in the [Graphviz] dot
    /// language, labelling nodes with the result of `label`.
    ///
    /// ```
    /// use redblack::RbTree;
    ///
    /// let mut t = RbTree::new();
    /// t.insert(1, "one").unwrap();
    /// t.insert(2, "two").unwrap();
    ///
    /// let dot = t.dot(|k| k.to_string()).to_string();
    /// assert!(dot.starts_with("digraph RBT {"));
    /// assert!(dot.contains(r#""1" -> "2";"#));
    /// ```
    ///
    /// [Graphviz]: https://graphviz.org/
    pub fn dot<F, L>(&self, label: F) -> Dot<'_, K, V, C, D, F>
    where
        F: Fn(&K) -> L,
        L: Display,
    {
        Dot::new(self, label)
    }
}

impl<K, V, C, D> Debug for RbTree<K, V, C, D>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut m = f.debug_map();
        self.visit(|k, v| {
            m.entry(k, v);
        });
        m.finish()
    }
}
