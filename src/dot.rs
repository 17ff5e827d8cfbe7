use std::fmt::{self, Display};

use crate::{
    node::{Arena, Color, NodeId},
    RbTree,
};

/// A [Graphviz] rendering of the structure and colouring of an [`RbTree`],
/// returned by [`RbTree::dot()`].
///
/// Every node is labelled with the output of the caller-provided label
/// function, which must produce a unique label per key.
///
/// [Graphviz]: https://graphviz.org/
pub struct Dot<'a, K, V, C, D, F> {
    tree: &'a RbTree<K, V, C, D>,
    label: F,
}

impl<'a, K, V, C, D, F> Dot<'a, K, V, C, D, F> {
    pub(crate) fn new(tree: &'a RbTree<K, V, C, D>, label: F) -> Self {
        Self { tree, label }
    }
}

impl<K, V, C, D, F> fmt::Debug for Dot<'_, K, V, C, D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dot")
            .field("len", &self.tree.len())
            .finish_non_exhaustive()
    }
}

impl<K, V, C, D, F, L> Display for Dot<'_, K, V, C, D, F>
where
    F: Fn(&K) -> L,
    L: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arena = &self.tree.arena;
        let root = self.tree.root;

        writeln!(f, "digraph RBT {{")?;

        if !root.is_nil() {
            write_nodes(arena, root, &self.label, f)?;
            write_edges(arena, root, &self.label, f)?;
        }

        writeln!(f, "}}")
    }
}

fn write_nodes<K, V, F, L>(
    arena: &Arena<K, V>,
    id: NodeId,
    label: &F,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result
where
    F: Fn(&K) -> L,
    L: Display,
{
    if id.is_nil() {
        return Ok(());
    }

    let fill = match arena.color(id) {
        Color::Red => "red",
        Color::Black => "black",
    };
    writeln!(
        f,
        "\t\"{}\" [style=\"filled\" fontname=\"Arial\" fontcolor=\"white\" fillcolor=\"{}\"];",
        label(&arena.node(id).key),
        fill,
    )?;

    write_nodes(arena, arena.left(id), label, f)?;
    write_nodes(arena, arena.right(id), label, f)
}

fn write_edges<K, V, F, L>(
    arena: &Arena<K, V>,
    id: NodeId,
    label: &F,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result
where
    F: Fn(&K) -> L,
    L: Display,
{
    for child in [arena.left(id), arena.right(id)] {
        if child.is_nil() {
            continue;
        }
        writeln!(
            f,
            "\t\"{}\" -> \"{}\";",
            label(&arena.node(id).key),
            label(&arena.node(child).key),
        )?;
        write_edges(arena, child, label, f)?;
    }

    Ok(())
}
