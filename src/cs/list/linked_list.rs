//! # Singly Linked List
//!
//! An arena-backed singly linked list. Nodes live in a slot vector owned by
//! the list and refer to their successor through a [`NodeId`] handle, so a
//! chain can be rewired freely (including into a cycle, see
//! [`LinkedList::set_next`]) without shared ownership or `unsafe`.
//!
//! Operations follow the textbook "head reference" style: every structural
//! mutation records the new head in the list and also returns it, because
//! prepending or removing at index 0 changes which node is the head.
//!
//! Traversals are bounded by the number of live nodes. On an acyclic chain
//! that bound is never reached; on a cyclic chain it guarantees termination.
//! Structural mutations other than `set_next` expect an acyclic chain.
//!
//! ## Example Usage
//!
//! ```rust
//! use linklab::LinkedList;
//!
//! let mut list = LinkedList::from_slice(&[1, 2, 4, 5]);
//! list.insert_at_index(2, 3).unwrap();
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
//!
//! let middle = list.get_middle().unwrap();
//! assert_eq!(list.node(middle).map(|n| *n.value()), Some(3));
//! assert_eq!(list.get_nth_from_end(2), Some(&4));
//!
//! list.reverse();
//! assert_eq!(list.to_string(), "5 -> 4 -> 3 -> 2 -> 1");
//! ```

use std::fmt;
use std::iter::FusedIterator;

use log::{debug, trace};
use num_traits::{ToPrimitive, Zero};

use super::node::{Node, NodeId};
use crate::error::{Error, Result};

/// A singly linked list whose nodes are stored in an internal arena.
#[derive(Clone)]
pub struct LinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    /// Slots released by removals, reused by the next allocation.
    free: Vec<usize>,
    head: Option<NodeId>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        LinkedList {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
        }
    }

    /// Builds a list holding `values` in order. An empty slice yields an empty list.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        values.iter().cloned().collect()
    }

    /// Collects the values of the chain, head first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// The head node, or `None` for an empty list.
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Looks up a node by handle. Returns `None` for freed or foreign handles.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.slot()).and_then(Option::as_ref)
    }

    /// The handle of the node at 0-based position `index`.
    pub fn node_at(&self, index: usize) -> Option<NodeId> {
        self.ids().nth(index)
    }

    /// The last node of the chain.
    pub fn tail(&self) -> Option<NodeId> {
        self.ids().last()
    }

    /// Points `node`'s successor at `next`.
    ///
    /// This is the only way to rewire a chain by hand, e.g. to close it into a
    /// cycle for [`has_cycle`](LinkedList::has_cycle).
    pub fn set_next(&mut self, node: NodeId, next: Option<NodeId>) -> Result<()> {
        if let Some(target) = next {
            if self.node(target).is_none() {
                debug!("set_next: target {} is not live", target);
                return Err(Error::InvalidNode(target));
            }
        }
        match self.node_mut(node) {
            Some(n) => {
                n.next = next;
                trace!("set_next: {} -> {:?}", node, next);
                Ok(())
            }
            None => {
                debug!("set_next: source {} is not live", node);
                Err(Error::InvalidNode(node))
            }
        }
    }

    /// Iterates over the values of the chain, head first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { ids: self.ids() }
    }

    /// Number of nodes reachable from the head.
    pub fn len(&self) -> usize {
        self.ids().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Largest value in the list.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyList`] if the list has no nodes.
    pub fn get_max(&self) -> Result<T>
    where
        T: PartialOrd + Clone,
    {
        self.extreme("get_max", |candidate, best| candidate > best)
    }

    /// Smallest value in the list.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyList`] if the list has no nodes.
    pub fn get_min(&self) -> Result<T>
    where
        T: PartialOrd + Clone,
    {
        self.extreme("get_min", |candidate, best| candidate < best)
    }

    /// Sum of all values; zero for an empty list.
    pub fn get_sum(&self) -> T
    where
        T: Zero + Clone,
    {
        self.iter().fold(T::zero(), |acc, value| acc + value.clone())
    }

    /// Arithmetic mean of the values.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyList`] if the list has no nodes, [`Error::NotRepresentable`]
    /// if a value has no `f64` representation.
    pub fn get_average(&self) -> Result<f64>
    where
        T: ToPrimitive,
    {
        let mut sum = 0.0;
        let mut count = 0usize;
        for value in self.iter() {
            sum += value.to_f64().ok_or(Error::NotRepresentable)?;
            count += 1;
        }
        if count == 0 {
            debug!("get_average called on an empty list");
            return Err(Error::EmptyList {
                operation: "get_average",
            });
        }
        Ok(sum / count as f64)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Number of nodes whose value equals `value`.
    pub fn count_of(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|&v| v == value).count()
    }

    /// Value at 0-based position `k`, or `None` when `k >= len`.
    pub fn get_kth(&self, k: usize) -> Option<&T> {
        self.iter().nth(k)
    }

    /// Value `n` places from the end, 1-indexed (`n == 1` is the tail).
    ///
    /// Single pass: a lead cursor is moved `n` nodes ahead, then lead and
    /// trail advance together until lead runs off the end.
    pub fn get_nth_from_end(&self, n: usize) -> Option<&T> {
        if n == 0 {
            return None;
        }
        let mut lead = self.ids();
        for _ in 0..n {
            lead.next()?;
        }
        let mut trail = self.ids();
        let mut target = trail.next()?;
        for _ in lead {
            target = trail.next()?;
        }
        self.value_of(target)
    }

    /// The middle node; for an even length, the second of the two middles.
    ///
    /// Slow/fast cursors: fast moves two nodes per step, slow moves one.
    pub fn get_middle(&self) -> Option<NodeId> {
        let mut slow = self.head?;
        let mut fast = self.head;
        for _ in 0..self.live() {
            let Some(step) = fast.and_then(|f| self.next_of(f)) else {
                break;
            };
            slow = self.next_of(slow)?;
            fast = self.next_of(step);
        }
        Some(slow)
    }

    /// Adds `value` after the current tail and returns the head.
    pub fn append(&mut self, value: T) -> NodeId {
        let tail = self.tail();
        let id = self.alloc(value, None);
        let head = match tail {
            Some(tail) => {
                self.link(tail, Some(id));
                self.head.unwrap_or(id)
            }
            None => {
                self.head = Some(id);
                id
            }
        };
        trace!("append: {} after {:?}", id, tail);
        head
    }

    /// Adds `value` in front of the head; the new node is the returned head.
    pub fn prepend(&mut self, value: T) -> NodeId {
        let id = self.alloc(value, self.head);
        self.head = Some(id);
        trace!("prepend: new head {}", id);
        id
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// `index == 0` prepends and `index == len` appends.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index > len`; the list is left unchanged.
    pub fn insert_at_index(&mut self, index: usize, value: T) -> Result<NodeId> {
        if index == 0 {
            return Ok(self.prepend(value));
        }
        let Some(prev) = self.node_at(index - 1) else {
            let len = self.len();
            debug!("insert_at_index: index {} past length {}", index, len);
            return Err(Error::IndexOutOfRange { index, len });
        };
        let next = self.next_of(prev);
        let id = self.alloc(value, next);
        self.link(prev, Some(id));
        trace!("insert_at_index: {} at {}", id, index);
        Ok(self.head.unwrap_or(id))
    }

    /// Removes the first node (head first) whose value equals `value`.
    ///
    /// Returns the head after removal; the list is unchanged when nothing matches.
    pub fn remove_first(&mut self, value: &T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        if let Some((prev, id)) = self.locate(|_, v| v == value) {
            self.unlink(prev, id);
            trace!("remove_first: released {}", id);
        }
        self.head
    }

    /// Removes the node at 0-based position `index` and returns the new head,
    /// which is `None` once the last node is gone.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at_index(&mut self, index: usize) -> Result<Option<NodeId>> {
        match self.locate(|i, _| i == index) {
            Some((prev, id)) => {
                self.unlink(prev, id);
                trace!("remove_at_index: released {} at {}", id, index);
                Ok(self.head)
            }
            None => {
                let len = self.len();
                debug!("remove_at_index: index {} past length {}", index, len);
                Err(Error::IndexOutOfRange { index, len })
            }
        }
    }

    /// Reverses the chain in place by rewiring each `next` (previous, current,
    /// next walk) and returns the new head, the former tail.
    pub fn reverse(&mut self) -> Option<NodeId> {
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let next = self.next_of(id);
            self.link(id, prev);
            prev = Some(id);
            current = next;
        }
        self.head = prev;
        prev
    }

    /// Merges two non-decreasing lists into one non-decreasing list.
    ///
    /// `other`'s values are moved into this list's arena, then both chains are
    /// relinked in place. On ties the node from `self` comes first.
    pub fn merge_sorted(mut self, other: LinkedList<T>) -> Self
    where
        T: PartialOrd,
    {
        let adopted = self.alloc_chain(other);
        let head = self.head;
        self.head = self.merge_chains(head, adopted);
        self
    }

    pub(crate) fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.next)
    }

    pub(crate) fn ids(&self) -> Ids<'_, T> {
        Ids {
            list: self,
            cursor: self.head,
            remaining: self.live(),
        }
    }

    fn value_of(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|n| &n.value)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.slot()).and_then(Option::as_mut)
    }

    /// Number of allocated nodes, reachable or not.
    fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    fn link(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.node_mut(id) {
            node.next = next;
        }
    }

    fn alloc(&mut self, value: T, next: Option<NodeId>) -> NodeId {
        let node = Some(Node { value, next });
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = node;
                NodeId::from_slot(slot)
            }
            None => {
                self.slots.push(node);
                NodeId::from_slot(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Option<T> {
        let node = self.slots.get_mut(id.slot())?.take()?;
        self.free.push(id.slot());
        Some(node.value)
    }

    /// Allocates `values` as a detached chain and returns its head.
    fn alloc_chain<I: IntoIterator<Item = T>>(&mut self, values: I) -> Option<NodeId> {
        let mut head = None;
        let mut tail = None;
        for value in values {
            let id = self.alloc(value, None);
            self.attach(&mut head, tail, id);
            tail = Some(id);
        }
        head
    }

    /// Hangs `id` after `tail`, or makes it `head` when there is no tail yet.
    fn attach(&mut self, head: &mut Option<NodeId>, tail: Option<NodeId>, id: NodeId) {
        match tail {
            Some(tail) => self.link(tail, Some(id)),
            None => *head = Some(id),
        }
    }

    /// Detaches `id` (whose predecessor is `prev`) and frees its slot.
    fn unlink(&mut self, prev: Option<NodeId>, id: NodeId) -> Option<T> {
        let next = self.next_of(id);
        match prev {
            Some(prev) => self.link(prev, next),
            None => self.head = next,
        }
        self.release(id)
    }

    /// Finds the first node matching `pred(position, value)` along with its predecessor.
    fn locate<P>(&self, mut pred: P) -> Option<(Option<NodeId>, NodeId)>
    where
        P: FnMut(usize, &T) -> bool,
    {
        let mut prev = None;
        for (position, id) in self.ids().enumerate() {
            if self.value_of(id).is_some_and(|v| pred(position, v)) {
                return Some((prev, id));
            }
            prev = Some(id);
        }
        None
    }

    fn extreme<F>(&self, operation: &'static str, better: F) -> Result<T>
    where
        T: Clone,
        F: Fn(&T, &T) -> bool,
    {
        let mut values = self.iter();
        let Some(mut best) = values.next() else {
            debug!("{} called on an empty list", operation);
            return Err(Error::EmptyList { operation });
        };
        for value in values {
            if better(value, best) {
                best = value;
            }
        }
        Ok(best.clone())
    }

    fn merge_chains(&mut self, mut a: Option<NodeId>, mut b: Option<NodeId>) -> Option<NodeId>
    where
        T: PartialOrd,
    {
        let mut head = None;
        let mut tail = None;
        loop {
            let taken = match (a, b) {
                (Some(x), Some(y)) => {
                    // Strictly smaller to take from `b`, so ties keep `a` first.
                    if self.value_of(y) < self.value_of(x) {
                        b = self.next_of(y);
                        y
                    } else {
                        a = self.next_of(x);
                        x
                    }
                }
                (Some(rest), None) | (None, Some(rest)) => {
                    self.attach(&mut head, tail, rest);
                    return head;
                }
                (None, None) => return head,
            };
            self.attach(&mut head, tail, taken);
            tail = Some(taken);
        }
    }
}

/// Merges two non-decreasing lists; see [`LinkedList::merge_sorted`].
pub fn merge_sorted<T: PartialOrd>(a: LinkedList<T>, b: LinkedList<T>) -> LinkedList<T> {
    a.merge_sorted(b)
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.head = list.alloc_chain(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let tail = self.tail();
        let chain = self.alloc_chain(iter);
        match tail {
            Some(tail) => self.link(tail, chain),
            None => self.head = chain,
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the chain as `1 -> 2 -> 3`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Walks node handles from the head, at most once per live node.
pub(crate) struct Ids<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<T> Iterator for Ids<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cursor?;
        self.cursor = self.list.next_of(id);
        self.remaining -= 1;
        Some(id)
    }
}

impl<T> FusedIterator for Ids<'_, T> {}

/// Iterator over the values of a [`LinkedList`], created by [`LinkedList::iter`].
pub struct Iter<'a, T> {
    ids: Ids<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let list = self.ids.list;
        self.ids.next().and_then(|id| list.value_of(id))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Owning iterator that releases nodes head first.
pub struct IntoIter<T> {
    list: LinkedList<T>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cursor?;
        self.cursor = self.list.next_of(id);
        self.remaining -= 1;
        self.list.release(id)
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            cursor: self.head,
            remaining: self.live(),
            list: self,
        }
    }
}
