//! Errors surfaced by [`Tree`][crate::Tree].
//!
//! [`Error`] is what a caller can reasonably hit and recover from. [`Violation`] is
//! what the invariant checker reports when a tree is corrupt; seeing one outside of a
//! test means there is a bug in the tree itself.

/// Recoverable errors returned by tree queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The key passed to [`successor`][crate::Tree::successor] or
    /// [`predecessor`][crate::Tree::predecessor] is not stored in the tree.
    #[error("key not found")]
    KeyNotFound,
}

/// An invariant the checker found broken. See
/// [`Tree::validate`][crate::Tree::validate].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// The root is red.
    #[error("root is red")]
    RedRoot,

    /// The sentinel was painted red.
    #[error("sentinel is red")]
    RedSentinel,

    /// A red node has a red child.
    #[error("red node has a red child")]
    RedRedEdge,

    /// The two subtrees of some node have different black heights.
    #[error("black height mismatch: left {left}, right {right}")]
    BlackHeightMismatch {
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },

    /// An in-order walk saw a key greater than its successor.
    #[error("keys out of order")]
    OutOfOrder,

    /// A child's parent link doesn't point back at the node holding it.
    #[error("child does not link back to its parent")]
    BrokenParentLink,

    /// The number of reachable nodes differs from the recorded length.
    #[error("reached {counted} nodes but the tree records {recorded}")]
    LengthMismatch {
        /// Nodes reachable from the root.
        counted: usize,
        /// Nodes the tree believes it holds.
        recorded: usize,
    },
}
