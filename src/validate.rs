use std::cmp::Ordering;

use compare::Compare;

use crate::{
    error::InvariantViolation,
    iter::InOrder,
    node::{Arena, NodeId},
};

/// Check every red-black and binary search tree property of the tree rooted
/// at `root`, returning the black-height of the root.
pub(crate) fn check<K, V, C>(
    arena: &Arena<K, V>,
    root: NodeId,
    cmp: &C,
) -> Result<usize, InvariantViolation>
where
    C: Compare<K>,
{
    if root.is_nil() {
        return match arena.len() {
            0 => Ok(0),
            allocated => Err(InvariantViolation::Leaked {
                reachable: 0,
                allocated,
            }),
        };
    }

    if arena.is_red(root) {
        return Err(InvariantViolation::RedRoot);
    }
    if !arena.parent(root).is_nil() {
        return Err(InvariantViolation::RootHasParent);
    }

    let black_height = check_subtree(arena, root, 0)?;

    // An in-order walk must yield strictly ascending keys, which covers the
    // ordering of every key in a subtree, not just the direct children.
    let mut reachable = 0;
    let mut prev: Option<&K> = None;
    for (position, id) in InOrder::new(arena, root).enumerate() {
        let key = &arena.node(id).key;
        if let Some(prev) = prev {
            if cmp.compare(prev, key) != Ordering::Less {
                return Err(InvariantViolation::OutOfOrder { position });
            }
        }
        prev = Some(key);
        reachable += 1;
    }

    if reachable != arena.len() {
        return Err(InvariantViolation::Leaked {
            reachable,
            allocated: arena.len(),
        });
    }

    Ok(black_height)
}

/// Validate the colouring and links of the subtree rooted at the real node
/// `id`, returning its black-height: the number of black nodes on a path to
/// a descendant sentinel, counting the sentinel but not `id` itself.
fn check_subtree<K, V>(
    arena: &Arena<K, V>,
    id: NodeId,
    depth: usize,
) -> Result<usize, InvariantViolation> {
    // A sentinel child contributes itself.
    let mut heights = [1; 2];

    for (i, child) in [arena.left(id), arena.right(id)].into_iter().enumerate() {
        if child.is_nil() {
            continue;
        }

        if arena.parent(child) != id {
            return Err(InvariantViolation::ParentLink { depth });
        }

        if arena.is_red(id) && arena.is_red(child) {
            return Err(InvariantViolation::RedRed { depth });
        }

        heights[i] = check_subtree(arena, child, depth + 1)? + usize::from(arena.is_black(child));
    }

    let [left, right] = heights;
    if left != right {
        return Err(InvariantViolation::BlackHeight { depth, left, right });
    }

    Ok(left)
}
