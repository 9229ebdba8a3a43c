use std::fmt;

use super::node::{Color, NodeId};
use super::Tree;

/// Diagnostic text rendering of a [`Tree`]'s shape, created by [`Tree::dump`].
///
/// One line per node in pre-order, indented four spaces per level. Children are prefixed
/// with `L` or `R`, and every node shows its color and `bh`, the number of black nodes from
/// it down to a sentinel counting both ends.
///
/// ```
/// use rbt::Tree;
///
/// let tree: Tree<_> = [2, 1, 3, 4].into_iter().collect();
/// assert_eq!(
///     tree.dump().to_string(),
///     "\
/// 2 (black, bh=3)
///     L 1 (black, bh=2)
///     R 3 (black, bh=2)
///         R 4 (red, bh=1)
/// "
/// );
/// ```
pub struct Dump<'a, K> {
    tree: &'a Tree<K>,
}

impl<K> Tree<K> {
    /// Renders the tree's shape for debugging. See [`Dump`].
    pub fn dump(&self) -> Dump<'_, K> {
        Dump { tree: self }
    }
}

impl<K: fmt::Display> fmt::Display for Dump<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree;
        if tree.root.is_nil() {
            return writeln!(f, "(empty)");
        }

        let heights = tree.black_heights();
        let mut stack = vec![(tree.root, 0, "")];
        while let Some((id, depth, side)) = stack.pop() {
            let color = match tree.color(id) {
                Color::Red => "red",
                Color::Black => "black",
            };
            writeln!(
                f,
                "{:indent$}{side}{} ({color}, bh={})",
                "",
                tree.key(id),
                heights[id.index()],
                indent = depth * 4,
            )?;

            // Right first so the left subtree prints first.
            let children: [(NodeId, &str); 2] = [(tree.right(id), "R "), (tree.left(id), "L ")];
            for (child, label) in children {
                if !child.is_nil() {
                    stack.push((child, depth + 1, label));
                }
            }
        }
        Ok(())
    }
}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
