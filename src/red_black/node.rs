//! Arena plumbing for the tree: node handles, colors, sides, and the link accessors every
//! algorithm goes through.
//!
//! Nodes are addressed by [`NodeId`] into the tree's `Vec<Node<K>>`. The reserved
//! [`NodeId::NIL`] never indexes the arena; reads and writes through it land on the tree's
//! own sentinel record instead, so the algorithms can treat "no child" and "no parent" like
//! any other black node.

use super::Tree;

/// Handle of a node in a [`Tree`]'s arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The sentinel. Stands in for every absent child and for the root's parent.
    pub(crate) const NIL: Self = Self(usize::MAX);

    pub(crate) fn new(index: usize) -> Self {
        debug_assert_ne!(index, usize::MAX);
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }

    pub(crate) fn is_nil(self) -> bool {
        self == Self::NIL
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child of its parent a node is. Every fixup case has a mirror image, so the
/// algorithms are written once in terms of a `Side` and its opposite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Color and structural links of a node, or of the sentinel.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Links {
    pub(crate) color: Color,
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

impl Links {
    /// Links of the sentinel. Its children are never read and its parent is only
    /// meaningful while a deletion is being fixed up.
    pub(crate) const SENTINEL: Self = Self {
        color: Color::Black,
        parent: NodeId::NIL,
        left: NodeId::NIL,
        right: NodeId::NIL,
    };

    fn child(&self, side: Side) -> NodeId {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut NodeId {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) links: Links,
}

impl<K> Node<K> {
    /// A freshly inserted node: red, with both children set to the sentinel.
    pub(crate) fn new(key: K, parent: NodeId) -> Self {
        Self {
            key,
            links: Links {
                color: Color::Red,
                parent,
                left: NodeId::NIL,
                right: NodeId::NIL,
            },
        }
    }
}

impl<K> Tree<K> {
    pub(crate) fn links(&self, id: NodeId) -> &Links {
        if id.is_nil() {
            &self.nil
        } else {
            &self.nodes[id.index()].links
        }
    }

    fn links_mut(&mut self, id: NodeId) -> &mut Links {
        if id.is_nil() {
            &mut self.nil
        } else {
            &mut self.nodes[id.index()].links
        }
    }

    /// ## Panics
    ///
    /// When called with the sentinel, which has no key.
    pub(crate) fn key(&self, id: NodeId) -> &K {
        assert!(!id.is_nil(), "The sentinel has no key.");
        &self.nodes[id.index()].key
    }

    pub(crate) fn color(&self, id: NodeId) -> Color {
        self.links(id).color
    }

    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        self.color(id) == Color::Red
    }

    pub(crate) fn is_black(&self, id: NodeId) -> bool {
        self.color(id) == Color::Black
    }

    /// ## Panics
    ///
    /// When asked to paint the sentinel red. Only a broken fixup would try.
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        assert!(
            !(id.is_nil() && color == Color::Red),
            "The sentinel must stay black."
        );
        self.links_mut(id).color = color;
    }

    pub(crate) fn parent(&self, id: NodeId) -> NodeId {
        self.links(id).parent
    }

    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        self.links_mut(id).parent = parent;
    }

    pub(crate) fn child(&self, id: NodeId, side: Side) -> NodeId {
        self.links(id).child(side)
    }

    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: NodeId) {
        *self.links_mut(id).child_mut(side) = child;
    }

    pub(crate) fn left(&self, id: NodeId) -> NodeId {
        self.links(id).left
    }

    pub(crate) fn right(&self, id: NodeId) -> NodeId {
        self.links(id).right
    }

    /// Which child of its parent `id` is. `id` may be the sentinel as long as the
    /// sentinel's parent link is current and that parent's other child is a real node.
    pub(crate) fn side_of(&self, id: NodeId) -> Side {
        if self.left(self.parent(id)) == id {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Follows `side` children from `id` until the next one is the sentinel. Going left
    /// finds the subtree minimum, going right finds the maximum.
    pub(crate) fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        while !self.child(id, side).is_nil() {
            id = self.child(id, side);
        }
        id
    }

    /// The in-order neighbor of `id` on `side`: its successor for [`Side::Right`], its
    /// predecessor for [`Side::Left`]. Returns the sentinel if there is none.
    pub(crate) fn neighbor(&self, mut id: NodeId, side: Side) -> NodeId {
        let child = self.child(id, side);
        if !child.is_nil() {
            return self.extreme(child, side.opposite());
        }

        let mut parent = self.parent(id);
        while !parent.is_nil() && id == self.child(parent, side) {
            id = parent;
            parent = self.parent(parent);
        }
        parent
    }
}

impl<K: Ord> Tree<K> {
    /// Finds the node holding `key`, or the sentinel.
    pub(crate) fn find(&self, key: &K) -> NodeId {
        let mut id = self.root;
        while !id.is_nil() {
            id = match key.cmp(self.key(id)) {
                std::cmp::Ordering::Less => self.left(id),
                std::cmp::Ordering::Equal => return id,
                std::cmp::Ordering::Greater => self.right(id),
            };
        }
        id
    }
}
