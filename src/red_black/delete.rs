use super::node::{Color, NodeId, Side};
use super::Tree;

/// The shapes delete-fixup distinguishes while `x` carries an extra black. Named for `x`'s
/// sibling `w` and `w`'s children (the nephews). Each has a mirror image depending on
/// which side of its parent `x` is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DeleteCase {
    /// `w` is red. Rotate so `x` gets a black sibling, then pick again.
    RedSibling,
    /// `w` and both nephews are black. Paint `w` red and move the extra black up.
    BlackNephews,
    /// `w` is black, its far child black and its near child red. Rotate `w` so the red
    /// nephew ends up far.
    NearRedNephew,
    /// `w` is black and its far child red. Recolor and rotate the parent, which finishes
    /// the fixup.
    FarRedNephew,
}

impl<K: Ord> Tree<K> {
    /// Deletes `key` from the tree. Returns `false`, and leaves the tree as it was, if the key
    /// wasn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbt::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// assert!(!tree.search(&1));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Deletes `key` from the tree and returns the stored key, or `None` if it wasn't
    /// present.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let z = self.find(key);
        if z.is_nil() {
            log::debug!("delete of an absent key is a no-op");
            return None;
        }

        self.unlink(z);
        self.debug_check_colors();
        Some(self.release(z))
    }
}

impl<K> Tree<K> {
    /// Replaces the subtree rooted at `u` with the one rooted at `v` in `u`'s parent (or as the
    /// root). `v`'s parent is set even when `v` is the sentinel so delete-fixup can walk up
    /// from it.
    pub(crate) fn transplant(&mut self, u: NodeId, v: NodeId) {
        let parent = self.parent(u);
        if parent.is_nil() {
            self.root = v;
        } else {
            let side = self.side_of(u);
            self.set_child(parent, side, v);
        }
        self.set_parent(v, parent);
    }

    /// Detaches `z` from the tree and rebalances. `z` stays in the arena, unreferenced.
    fn unlink(&mut self, z: NodeId) {
        // The color that left the tree. Removing a red node can't break anything.
        let mut removed_color = self.color(z);
        // Whatever moved into the vacated spot. It may be the sentinel.
        let x;

        if self.left(z).is_nil() {
            x = self.right(z);
            self.transplant(z, x);
        } else if self.right(z).is_nil() {
            x = self.left(z);
            self.transplant(z, x);
        } else {
            // Replace `z` by its successor `y`, which has no left child.
            let y = self.extreme(self.right(z), Side::Left);
            removed_color = self.color(y);
            x = self.right(y);

            if self.parent(y) == z {
                // `x` might be the sentinel and still has to point at `y`.
                self.set_parent(x, y);
            } else {
                self.transplant(y, x);
                let right = self.right(z);
                self.set_child(y, Side::Right, right);
                self.set_parent(right, y);
            }

            self.transplant(z, y);
            let left = self.left(z);
            self.set_child(y, Side::Left, left);
            self.set_parent(left, y);
            self.set_color(y, self.color(z));
        }

        if removed_color == Color::Black {
            self.delete_fixup(x);
        }
        self.set_parent(NodeId::NIL, NodeId::NIL);
    }

    fn delete_case(&self, sibling: NodeId, side: Side) -> DeleteCase {
        let near = self.child(sibling, side);
        let far = self.child(sibling, side.opposite());
        if self.is_red(sibling) {
            DeleteCase::RedSibling
        } else if self.is_black(near) && self.is_black(far) {
            DeleteCase::BlackNephews
        } else if self.is_black(far) {
            DeleteCase::NearRedNephew
        } else {
            DeleteCase::FarRedNephew
        }
    }

    /// Restores the red-black invariants after a black node left the tree. `x` took its
    /// place and counts one black more than its color says; the loop pushes that extra black
    /// up until it lands on a red node or the root, or a rotation absorbs it.
    fn delete_fixup(&mut self, mut x: NodeId) {
        while x != self.root && self.is_black(x) {
            let parent = self.parent(x);
            let side = self.side_of(x);
            let far_side = side.opposite();
            // `x` is short one black so its sibling is a real node.
            let w = self.child(parent, far_side);

            let case = self.delete_case(w, side);
            log::trace!("delete fixup at {x:?}: {case:?} ({side:?})");
            match case {
                DeleteCase::RedSibling => {
                    self.set_color(w, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate(parent, side);
                }
                DeleteCase::BlackNephews => {
                    self.set_color(w, Color::Red);
                    x = parent;
                }
                DeleteCase::NearRedNephew => {
                    let near = self.child(w, side);
                    self.set_color(near, Color::Black);
                    self.set_color(w, Color::Red);
                    self.rotate(w, far_side);
                }
                DeleteCase::FarRedNephew => {
                    let far = self.child(w, far_side);
                    self.set_color(w, self.color(parent));
                    self.set_color(parent, Color::Black);
                    self.set_color(far, Color::Black);
                    self.rotate(parent, side);
                    x = self.root;
                }
            }
        }

        self.set_color(x, Color::Black);
    }

    /// Removes the detached node `z` from the arena and returns its key. The last node in the
    /// arena moves into `z`'s slot, so the links pointing at it are rewritten.
    fn release(&mut self, z: NodeId) -> K {
        let last = NodeId::new(self.nodes.len() - 1);
        let removed = self.nodes.swap_remove(z.index());

        if last != z {
            let moved = *self.links(z);
            if moved.parent.is_nil() {
                self.root = z;
            } else if self.left(moved.parent) == last {
                self.set_child(moved.parent, Side::Left, z);
            } else {
                self.set_child(moved.parent, Side::Right, z);
            }
            if !moved.left.is_nil() {
                self.set_parent(moved.left, z);
            }
            if !moved.right.is_nil() {
                self.set_parent(moved.right, z);
            }
        }

        removed.key
    }
}
