//! The red-black balancing engine.
//!
//! Everything here operates on [`NodeId`] links and colour bits only; keys
//! and values are never inspected.

use log::trace;

use crate::node::{Arena, Color, Node, NodeId, Side, NIL};

/// Rotate the subtree rooted at `x` so that `x` moves down towards `dir`,
/// and its child on the opposite side (the pivot `P`) takes its place.
///
/// A left rotation (`dir` = [`Side::Left`]):
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// and the mirrored right rotation (`dir` = [`Side::Right`]):
///
/// ```text
///          x
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    y     x
///      y   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// The in-order sequence of the subtree is unchanged, as are all colours.
/// `root` is updated if `x` was the root.
///
/// # Panics
///
/// Panics if `x` has no child on the side opposite `dir`.
pub(crate) fn rotate<K, V>(arena: &mut Arena<K, V>, root: &mut NodeId, x: NodeId, dir: Side) {
    let pivot_side = dir.opposite();
    let p = arena.child(x, pivot_side);
    debug_assert!(!p.is_nil(), "rotation requires a pivot");

    // The inner subtree of the pivot moves across to x.
    let inner = arena.child(p, dir);
    arena.set_child(x, pivot_side, inner);
    arena.set_parent(inner, x);

    // Link the pivot into the position previously held by x.
    let parent = arena.parent(x);
    arena.set_parent(p, parent);
    if parent.is_nil() {
        *root = p;
    } else {
        let side = arena.side_of(x);
        arena.set_child(parent, side, p);
    }

    arena.set_child(p, dir, x);
    arena.set_parent(x, p);
}

/// Restore the red-black properties after linking the red leaf `node` into
/// the tree.
///
/// The only property a new red leaf can break is "no red node has a red
/// child" (or "the root is black" if it is the root).
pub(crate) fn insert_fixup<K, V>(arena: &mut Arena<K, V>, root: &mut NodeId, mut node: NodeId) {
    while node != *root && arena.is_red(arena.parent(node)) {
        let mut parent = arena.parent(node);

        // The parent is red, so it cannot be the root and the grandparent
        // exists.
        let grandparent = arena.parent(parent);
        debug_assert!(!grandparent.is_nil());

        let side = arena.side_of(parent);
        let uncle = arena.child(grandparent, side.opposite());

        if arena.is_red(uncle) {
            // Push the blackness of the grandparent down one level and
            // continue from the (now red) grandparent.
            trace!("insert fixup: red uncle, recolouring");
            arena.set_color(parent, Color::Black);
            arena.set_color(uncle, Color::Black);
            arena.set_color(grandparent, Color::Red);
            node = grandparent;
            continue;
        }

        if arena.child(parent, side.opposite()) == node {
            // The inner grandchild is first rotated into the outer position.
            trace!("insert fixup: inner grandchild, rotating at parent");
            rotate(arena, root, parent, side);
            node = parent;
            parent = arena.parent(node);
        }

        trace!("insert fixup: outer grandchild, rotating at grandparent");
        arena.set_color(parent, Color::Black);
        arena.set_color(grandparent, Color::Red);
        rotate(arena, root, grandparent, side.opposite());

        // The parent of node is now black, terminating the loop.
        debug_assert!(arena.is_black(arena.parent(node)));
    }

    let r = *root;
    arena.set_color(r, Color::Black);
}

/// Unlink `target` from the tree, rebalance, and return the freed [`Node`]
/// carrying the key and value originally held by `target`.
///
/// If `target` has two children its in-order successor is spliced out in its
/// place: the successor's slot is the one physically freed, and its payload
/// is moved into `target`'s slot.
pub(crate) fn unlink<K, V>(arena: &mut Arena<K, V>, root: &mut NodeId, target: NodeId) -> Node<K, V> {
    // The node to physically splice out of the tree has at most one child.
    let spliced = if arena.left(target).is_nil() || arena.right(target).is_nil() {
        target
    } else {
        // The successor is the minimum of the right subtree and has no left
        // child.
        let s = arena.successor(target);
        debug_assert!(arena.left(s).is_nil());
        s
    };

    let child = match arena.left(spliced) {
        v if v.is_nil() => arena.right(spliced),
        v => v,
    };

    let parent = arena.parent(spliced);
    arena.set_parent(child, parent);
    if parent.is_nil() {
        *root = child;
    } else {
        let side = arena.side_of(spliced);
        arena.set_child(parent, side, child);
    }

    let removed_color = arena.color(spliced);
    let mut removed = arena.free(spliced);

    if spliced != target {
        // Relocate the successor's payload into the target's slot, handing
        // the target's payload back to the caller.
        arena.swap_payload(target, &mut removed);
    }

    // Removing a red node never changes a black-height.
    if removed_color == Color::Black {
        delete_fixup(arena, root, child, parent);
    }

    removed
}

/// Restore the red-black properties after a black node was spliced out of
/// the tree.
///
/// `node` is the child that took the removed node's place and carries an
/// "extra black". It may be [`NIL`], which is why the `parent` of its
/// position is passed explicitly instead of being read from `node`.
pub(crate) fn delete_fixup<K, V>(
    arena: &mut Arena<K, V>,
    root: &mut NodeId,
    mut node: NodeId,
    mut parent: NodeId,
) {
    while node != *root && arena.is_black(node) {
        debug_assert!(!parent.is_nil());

        // Determine which side of the parent the deficient position is on.
        //
        // If node is NIL and on the right, then the left child of parent is
        // the (non-NIL) sibling, so this comparison is unambiguous.
        let side = if arena.left(parent) == node {
            Side::Left
        } else {
            Side::Right
        };
        let far = side.opposite();

        // The sibling subtree has a black-height of at least 1, so it always
        // exists.
        let mut sibling = arena.child(parent, far);
        debug_assert!(!sibling.is_nil());

        if arena.is_red(sibling) {
            // Convert to one of the black sibling cases.
            trace!("delete fixup: red sibling, rotating at parent");
            arena.set_color(sibling, Color::Black);
            arena.set_color(parent, Color::Red);
            rotate(arena, root, parent, side);
            sibling = arena.child(parent, far);
        }

        if arena.is_black(arena.left(sibling)) && arena.is_black(arena.right(sibling)) {
            // Remove one black from both sides and push the deficiency up.
            trace!("delete fixup: black sibling with black children, moving up");
            arena.set_color(sibling, Color::Red);
            node = parent;
            parent = arena.parent(node);
            continue;
        }

        if arena.is_black(arena.child(sibling, far)) {
            // The near child is red: rotate it into the far position.
            trace!("delete fixup: red near nephew, rotating at sibling");
            let near = arena.child(sibling, side);
            arena.set_color(near, Color::Black);
            arena.set_color(sibling, Color::Red);
            rotate(arena, root, sibling, far);
            sibling = arena.child(parent, far);
        }

        trace!("delete fixup: red far nephew, rotating at parent");
        let parent_color = arena.color(parent);
        arena.set_color(sibling, parent_color);
        arena.set_color(parent, Color::Black);
        let far_nephew = arena.child(sibling, far);
        arena.set_color(far_nephew, Color::Black);
        rotate(arena, root, parent, side);

        node = *root;
        parent = NIL;
    }

    arena.set_color(node, Color::Black);
}
