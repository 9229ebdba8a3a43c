use std::cmp::Ordering;

use super::node::{Color, Node, NodeId, Side};
use super::Tree;

/// The shapes insert-fixup distinguishes while `z` and its parent are both red. Each has
/// a mirror image depending on which side of the grandparent the parent hangs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InsertCase {
    /// The uncle is red. Recolor and move the problem up two levels.
    RedUncle,
    /// The uncle is black and `z` is an inner grandchild. Rotate it into an outer one.
    InnerGrandchild,
    /// The uncle is black and `z` is an outer grandchild. Recolor and rotate the
    /// grandparent, which finishes the fixup.
    OuterGrandchild,
}

impl<K: Ord> Tree<K> {
    /// Inserts `key` into the tree. Returns `false`, and leaves the tree as it was, if the key
    /// was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbt::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let mut parent = NodeId::NIL;
        let mut side = Side::Left;
        let mut id = self.root;
        while !id.is_nil() {
            side = match key.cmp(self.key(id)) {
                Ordering::Less => Side::Left,
                Ordering::Equal => {
                    log::debug!("insert of a present key is a no-op");
                    return false;
                }
                Ordering::Greater => Side::Right,
            };
            parent = id;
            id = self.child(id, side);
        }

        let z = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(key, parent));
        if parent.is_nil() {
            self.root = z;
        } else {
            self.set_child(parent, side, z);
        }

        self.insert_fixup(z);
        self.debug_check_colors();
        true
    }
}

impl<K> Tree<K> {
    fn insert_case(&self, z: NodeId, parent_side: Side, uncle: NodeId) -> InsertCase {
        if self.is_red(uncle) {
            InsertCase::RedUncle
        } else if self.side_of(z) != parent_side {
            InsertCase::InnerGrandchild
        } else {
            InsertCase::OuterGrandchild
        }
    }

    /// Restores the red-black invariants after `z` was attached as a red leaf. The only one
    /// that can break is "a red node has black children", between `z` and its parent.
    fn insert_fixup(&mut self, mut z: NodeId) {
        while self.is_red(self.parent(z)) {
            // A red parent is never the root, so the grandparent is a real node.
            let parent = self.parent(z);
            let grandparent = self.parent(parent);
            let parent_side = self.side_of(parent);
            let uncle = self.child(grandparent, parent_side.opposite());

            let case = self.insert_case(z, parent_side, uncle);
            log::trace!("insert fixup at {z:?}: {case:?} ({parent_side:?})");
            match case {
                InsertCase::RedUncle => {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    z = grandparent;
                }
                InsertCase::InnerGrandchild => {
                    // Afterwards the old parent is an outer grandchild under the same
                    // grandparent, so the next pass takes `OuterGrandchild`.
                    z = parent;
                    self.rotate(z, parent_side);
                }
                InsertCase::OuterGrandchild => {
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate(grandparent, parent_side.opposite());
                }
            }
        }

        // `RedUncle` can paint the root red.
        let root = self.root;
        self.set_color(root, Color::Black);
    }
}
