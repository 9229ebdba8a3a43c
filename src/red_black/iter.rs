use std::iter::FusedIterator;

use super::node::{NodeId, Side};
use super::Tree;

/// Borrowing in-order iterator over a [`Tree`]'s keys, created by [`Tree::iter`].
///
/// Steps by following parent links to each node's in-order neighbor, so it needs neither
/// recursion nor a stack.
pub struct Iter<'a, K> {
    tree: &'a Tree<K>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(super) fn new(tree: &'a Tree<K>) -> Self {
        let (front, back) = if tree.root.is_nil() {
            (NodeId::NIL, NodeId::NIL)
        } else {
            (
                tree.extreme(tree.root, Side::Left),
                tree.extreme(tree.root, Side::Right),
            )
        };
        Self {
            tree,
            front,
            back,
            remaining: tree.len(),
        }
    }
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let id = self.front;
        self.front = self.tree.neighbor(id, Side::Right);
        Some(self.tree.key(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> DoubleEndedIterator for Iter<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let id = self.back;
        self.back = self.tree.neighbor(id, Side::Left);
        Some(self.tree.key(id))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
