//! Invariant checks. These walk the whole tree so they're O(n) and meant for tests and
//! debugging; no mutation ever calls them.

use super::node::{Color, NodeId};
use super::Tree;
use crate::error::Violation;

impl<K: Ord> Tree<K> {
    /// Whether the keys are in order: everything in a node's left subtree is no greater than
    /// the node's key and everything in its right subtree is no smaller.
    pub fn assert_bst_property(&self) -> bool {
        self.check_order().is_ok()
    }

    /// Checks every invariant and reports the first one found broken.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbt::Tree;
    ///
    /// let tree: Tree<_> = (0..100).collect();
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), Violation> {
        self.check_coloring()?;
        self.check_order()
    }

    /// In-order walk down child links (parent links aren't trusted here) comparing each key
    /// with the one before it.
    fn check_order(&self) -> Result<(), Violation> {
        let mut stack = Vec::new();
        let mut id = self.root;
        let mut previous: Option<&K> = None;
        let mut counted = 0;

        loop {
            while !id.is_nil() {
                stack.push(id);
                id = self.left(id);
                if stack.len() > self.len() {
                    return Err(Violation::LengthMismatch {
                        counted: stack.len(),
                        recorded: self.len(),
                    });
                }
            }
            let Some(top) = stack.pop() else {
                return Ok(());
            };

            counted += 1;
            if counted > self.len() {
                return Err(Violation::LengthMismatch {
                    counted,
                    recorded: self.len(),
                });
            }

            let key = self.key(top);
            if previous.is_some_and(|previous| previous > key) {
                return Err(Violation::OutOfOrder);
            }
            previous = Some(key);
            id = self.right(top);
        }
    }
}

impl<K> Tree<K> {
    /// Whether the coloring is valid: black root and sentinel, no red node with a red child,
    /// and equal black heights below both sides of every node.
    pub fn assert_rbt_property(&self) -> bool {
        self.check_coloring().is_ok()
    }

    fn check_coloring(&self) -> Result<(), Violation> {
        if self.is_red(NodeId::NIL) {
            return Err(Violation::RedSentinel);
        }
        if self.is_red(self.root) {
            return Err(Violation::RedRoot);
        }
        if !self.root.is_nil() && !self.parent(self.root).is_nil() {
            return Err(Violation::BrokenParentLink);
        }

        let order = self.post_order();
        if order.len() != self.len() {
            return Err(Violation::LengthMismatch {
                counted: order.len(),
                recorded: self.len(),
            });
        }

        let mut heights = vec![0; self.len()];
        for id in order {
            let (left, right) = (self.left(id), self.right(id));
            for child in [left, right] {
                if child.is_nil() {
                    continue;
                }
                if self.parent(child) != id {
                    return Err(Violation::BrokenParentLink);
                }
                if self.is_red(id) && self.is_red(child) {
                    return Err(Violation::RedRedEdge);
                }
            }

            // Compared, not assumed: a broken tree can have different heights on each side.
            let left_height = self.stacked_height(&heights, left);
            let right_height = self.stacked_height(&heights, right);
            if left_height != right_height {
                return Err(Violation::BlackHeightMismatch {
                    left: left_height,
                    right: right_height,
                });
            }
            heights[id.index()] = left_height + self.own_black(id);
        }

        Ok(())
    }

    /// Black nodes from each node down to a sentinel, counting both ends, indexed by arena
    /// slot. Takes the taller side where the two disagree.
    pub(super) fn black_heights(&self) -> Vec<usize> {
        let mut heights = vec![0; self.len()];
        for id in self.post_order() {
            let left = self.stacked_height(&heights, self.left(id));
            let right = self.stacked_height(&heights, self.right(id));
            heights[id.index()] = left.max(right) + self.own_black(id);
        }
        heights
    }

    fn stacked_height(&self, heights: &[usize], id: NodeId) -> usize {
        if id.is_nil() {
            1
        } else {
            heights[id.index()]
        }
    }

    fn own_black(&self, id: NodeId) -> usize {
        usize::from(self.color(id) == Color::Black)
    }

    /// Nodes reachable from the root with children before their parents. Gives up after
    /// `len() + 1` nodes so a corrupt tree with a cycle still terminates.
    fn post_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if id.is_nil() {
                continue;
            }
            if order.len() > self.len() {
                break;
            }
            order.push(id);
            stack.push(self.left(id));
            stack.push(self.right(id));
        }
        // Pushed as node, right subtree, left subtree.
        order.reverse();
        order
    }
}
