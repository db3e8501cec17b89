use std::fmt;
use std::num::NonZeroUsize;

/// A handle to a node stored inside a [`LinkedList`](super::LinkedList).
///
/// Handles are 1-based so that `Option<NodeId>` has the same size as a
/// `usize`. A handle is only meaningful for the list that issued it, and a
/// slot freed by a removal may later be reissued to a new node.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(NonZeroUsize);

impl NodeId {
    /// Builds the handle for arena slot `slot` (0-based).
    #[inline]
    pub(crate) fn from_slot(slot: usize) -> Self {
        match NonZeroUsize::new(slot + 1) {
            Some(raw) => Self(raw),
            None => unreachable!("slot + 1 is never zero"),
        }
    }

    /// The 0-based arena slot this handle refers to.
    #[inline]
    pub(crate) fn slot(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A singly-linked list node: a value and the handle of its successor.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NodeId>,
}

impl<T> Node<T> {
    /// Creates a detached node with no successor.
    pub fn new(value: T) -> Self {
        Node { value, next: None }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// The successor of this node, or `None` at the end of the chain.
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}
