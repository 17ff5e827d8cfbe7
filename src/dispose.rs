/// A hook invoked with each key removed by
/// [`RbTree::delete()`](crate::RbTree::delete).
///
/// Implemented for any `FnMut(K)` closure, and by [`DropKey`], which simply
/// drops the key.
///
/// ```
/// use redblack::RbTree;
///
/// let mut released = Vec::new();
/// let mut t = RbTree::with_hooks(compare::natural(), |k: u32| released.push(k));
///
/// t.insert(1, "one").unwrap();
/// t.insert(2, "two").unwrap();
///
/// assert_eq!(t.delete(&2), Some("two"));
/// assert_eq!(t.delete(&3), None);
///
/// drop(t);
/// assert_eq!(released, [2]);
/// ```
pub trait Dispose<K> {
    /// Release `key`, which is no longer referenced by the tree.
    fn dispose(&mut self, key: K);
}

/// The default [`Dispose`] hook, dropping keys in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct DropKey;

impl<K> Dispose<K> for DropKey {
    #[inline]
    fn dispose(&mut self, key: K) {
        drop(key);
    }
}

impl<K, F> Dispose<K> for F
where
    F: FnMut(K),
{
    #[inline]
    fn dispose(&mut self, key: K) {
        self(key)
    }
}
