use super::node::{NodeId, Side};
use super::Tree;

impl<K> Tree<K> {
    /// Rotate `x` toward `side`. This moves the child on the opposite side up vertically and
    /// `x` down vertically into its place. `Side::Left` is a left rotation, `Side::Right` is a
    /// right rotation. Key order is unchanged, only the shape. Returns the node that took
    /// `x`'s place.
    ///
    /// ## Panics
    ///
    /// When `x` has no child on the opposite side to lift. The fixups only rotate where that
    /// child is guaranteed to exist so hitting this means the tree is corrupt.
    ///
    /// # Diagram
    ///
    /// For `side == Side::Left`, roughly speaking, we want to perform this transformation:
    ///
    /// ```text
    ///   parent                 parent
    ///     |                      |
    ///     x                      y
    ///    / \                    / \
    ///   a   y     rotate ->    x   c
    ///      / \                / \
    ///     b   c              a   b
    /// ```
    pub(crate) fn rotate(&mut self, x: NodeId, side: Side) -> NodeId {
        let rising = side.opposite();
        let y = self.child(x, rising);
        assert!(
            !y.is_nil(),
            "Rotating {side:?} requires a {rising:?} child."
        );
        log::trace!("rotate {side:?} at {x:?}");

        // `b` changes parents from `y` to `x`.
        let inner = self.child(y, side);
        self.set_child(x, rising, inner);
        if !inner.is_nil() {
            self.set_parent(inner, x);
        }

        self.transplant(x, y);

        self.set_child(y, side, x);
        self.set_parent(x, y);
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds `2` with children `1` and `4`, where `4` has children `3` and `5`. Inserting in
    /// this order keeps the red-black fixups from reshaping it.
    fn right_heavy() -> Tree<i32> {
        [2, 1, 4, 3, 5].into_iter().collect()
    }

    fn assert_linked(tree: &Tree<i32>, parent: i32, side: Side, child: i32) {
        let p = tree.find(&parent);
        let c = tree.find(&child);
        assert_eq!(tree.child(p, side), c, "{child} should be {side:?} of {parent}");
        assert_eq!(tree.parent(c), p, "{child} should link back to {parent}");
    }

    #[test]
    fn rotate_left_lifts_right_child() {
        let mut tree = right_heavy();
        let two = tree.find(&2);

        let four = tree.rotate(two, Side::Left);

        assert_eq!(tree.key(four), &4);
        assert_eq!(tree.root, four);
        assert!(tree.parent(four).is_nil());
        assert_linked(&tree, 4, Side::Left, 2);
        assert_linked(&tree, 4, Side::Right, 5);
        assert_linked(&tree, 2, Side::Left, 1);
        assert_linked(&tree, 2, Side::Right, 3);
        assert!(tree.assert_bst_property());
    }

    #[test]
    fn rotate_right_undoes_rotate_left() {
        let mut tree = right_heavy();
        let before = tree.dump().to_string();

        let four = tree.rotate(tree.find(&2), Side::Left);
        tree.rotate(four, Side::Right);

        assert_eq!(tree.dump().to_string(), before);
    }

    #[test]
    fn rotate_below_root_fixes_grandparent_link() {
        let mut tree = right_heavy();
        let four = tree.find(&4);

        let three = tree.rotate(four, Side::Right);

        assert_eq!(tree.key(three), &3);
        assert_linked(&tree, 2, Side::Right, 3);
        assert_linked(&tree, 3, Side::Right, 4);
        assert_linked(&tree, 4, Side::Right, 5);
        assert!(tree.left(three).is_nil());
        assert!(tree.left(tree.find(&4)).is_nil());
        assert!(tree.assert_bst_property());
    }

    #[test]
    fn rotation_does_not_touch_sentinel_parent() {
        let mut tree = right_heavy();
        let one = tree.find(&1);
        tree.set_parent(NodeId::NIL, one);

        // `5` has no children so moving it around links sentinels on both sides.
        let four = tree.find(&4);
        tree.rotate(four, Side::Left);

        assert_eq!(tree.parent(NodeId::NIL), one);
    }

    #[test]
    #[should_panic(expected = "Rotating Left requires a Right child.")]
    fn rotate_left_without_right_child_panics() {
        let mut tree = right_heavy();
        let one = tree.find(&1);
        tree.rotate(one, Side::Left);
    }

    #[test]
    #[should_panic(expected = "Rotating Right requires a Left child.")]
    fn rotate_right_without_left_child_panics() {
        let mut tree = right_heavy();
        let five = tree.find(&5);
        tree.rotate(five, Side::Right);
    }
}
