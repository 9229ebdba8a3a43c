//! Property tests driving [`rbt::Tree`] through its public API against a `BTreeSet`.

mod red_black;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Delete the K from the tree
    Delete(K),
    /// Check whether the K is in the tree
    Search(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Delete(K::arbitrary(g)),
            2 => Op::Search(K::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// Routes the tree's `log` output through the test harness. Run with `--nocapture` to see
/// rotations and fixup cases for a failing input.
pub(crate) fn init_logging() {
    // Every test calls this; only the first one gets to install the logger.
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Trace, simplelog::Config::default());
}
