//! A mutable Red-Black Tree stored in an arena.
//!
//! Every node lives in a `Vec` owned by the [`Tree`] and refers to its parent and children
//! by index. A single black sentinel, owned by each tree, stands in for every missing child
//! and for the root's parent so the rebalancing code never has to special-case "no node".
//!
//! # Examples
//!
//! ```
//! use rbt::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.search(&1));
//!
//! // Keys are unique so inserting the same key again does nothing.
//! assert!(!tree.insert(1));
//!
//! tree.extend([3, 2]);
//! assert_eq!(tree.successor(&1), Ok(Some(&2)));
//! assert_eq!(tree.successor(&3), Ok(None));
//! assert_eq!(tree.successor(&42), Err(Error::KeyNotFound));
//!
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert_eq!(tree.in_order_walk(), vec![2, 3]);
//! ```

mod check;
mod delete;
mod dump;
mod insert;
mod iter;
mod node;
mod rotate;

pub use dump::Dump;
pub use iter::Iter;

use crate::error::Error;
use node::{Links, Node, NodeId, Side};

/// A self-balancing ordered set of unique keys. This can be used for inserting, searching,
/// and deleting keys, and for walking them in order.
#[derive(Clone)]
pub struct Tree<K> {
    nodes: Vec<Node<K>>,
    root: NodeId,
    // The sentinel's color and parent link. Only its parent ever changes.
    nil: Links,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Generate a new, empty `Tree` with room for `capacity` keys before it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: NodeId::NIL,
            nil: Links::SENTINEL,
        }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = NodeId::NIL;
        self.nil = Links::SENTINEL;
    }

    /// The smallest key, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbt::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.minimum(), Some(&1));
    /// assert_eq!(Tree::<i32>::new().minimum(), None);
    /// ```
    pub fn minimum(&self) -> Option<&K> {
        self.outermost(Side::Left)
    }

    /// The largest key, or `None` if the tree is empty.
    pub fn maximum(&self) -> Option<&K> {
        self.outermost(Side::Right)
    }

    fn outermost(&self, side: Side) -> Option<&K> {
        if self.root.is_nil() {
            return None;
        }
        Some(self.key(self.extreme(self.root, side)))
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    /// Collects the keys in ascending order.
    pub fn in_order_walk(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }

    /// The number of black nodes on any path from the root down to the sentinel, counting
    /// the sentinel but not the root. An empty tree has a black height of 0.
    pub fn black_height(&self) -> usize {
        let mut height = 0;
        let mut id = self.root;
        while !id.is_nil() {
            id = self.left(id);
            if self.is_black(id) {
                height += 1;
            }
        }
        height
    }

    /// Cheap checks run after every mutation in debug builds. The full invariant check is
    /// O(n) and lives in [`Tree::validate`].
    fn debug_check_colors(&self) {
        if cfg!(debug_assertions) {
            assert!(self.is_black(NodeId::NIL));
            assert!(self.is_black(self.root));
            assert!(self.parent(self.root).is_nil());
        }
    }
}

impl<K: Ord> Tree<K> {
    /// Whether `key` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbt::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, key: &K) -> bool {
        !self.find(key).is_nil()
    }

    /// The stored key equal to `key`, if any.
    pub fn get(&self, key: &K) -> Option<&K> {
        let id = self.find(key);
        (!id.is_nil()).then(|| self.key(id))
    }

    /// The smallest key greater than `key`. `Ok(None)` means `key` is the maximum.
    ///
    /// ## Errors
    ///
    /// [`Error::KeyNotFound`] if `key` isn't in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbt::{Error, Tree};
    ///
    /// let tree: Tree<_> = [1, 5, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&1), Ok(Some(&5)));
    /// assert_eq!(tree.successor(&9), Ok(None));
    /// assert_eq!(tree.successor(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn successor(&self, key: &K) -> Result<Option<&K>, Error> {
        self.adjacent(key, Side::Right)
    }

    /// The largest key less than `key`. `Ok(None)` means `key` is the minimum.
    ///
    /// ## Errors
    ///
    /// [`Error::KeyNotFound`] if `key` isn't in the tree.
    pub fn predecessor(&self, key: &K) -> Result<Option<&K>, Error> {
        self.adjacent(key, Side::Left)
    }

    fn adjacent(&self, key: &K, side: Side) -> Result<Option<&K>, Error> {
        let id = self.find(key);
        if id.is_nil() {
            return Err(Error::KeyNotFound);
        }
        let neighbor = self.neighbor(id, side);
        Ok((!neighbor.is_nil()).then(|| self.key(neighbor)))
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
