//! # Floyd's Cycle Detection (Tortoise and Hare)
//!
//! Cycle detection for [`LinkedList`] chains in \( O(n) \) time and \( O(1) \)
//! extra space, plus recovery of the node where the cycle begins.
//!
//! ## Overview
//!
//! Slow advances by one node at a time, fast by two. If they ever land on the
//! same node, a cycle exists; if fast runs off the end first, the chain is
//! acyclic. To find the *start* of the cycle, restart one cursor at the head
//! and advance both by one node at a time. The node where they meet is the
//! start of the cycle.
//!
//! ## Example Usage
//!
//! ```rust
//! use linklab::LinkedList;
//!
//! // 1 -> 2 -> 3 -> 4 -> 5, then close the tail back onto node 3.
//! let mut list = LinkedList::from_slice(&[1, 2, 3, 4, 5]);
//! assert!(!list.has_cycle());
//!
//! let third = list.node_at(2).unwrap();
//! let tail = list.tail().unwrap();
//! list.set_next(tail, Some(third)).unwrap();
//!
//! assert!(list.has_cycle());
//! assert_eq!(list.find_cycle_start(), Some(third));
//! ```

use log::trace;

use super::linked_list::LinkedList;
use super::node::NodeId;

impl<T> LinkedList<T> {
    /// Returns `true` if following `next` from the head revisits a node.
    ///
    /// Empty lists and a single node without a self-link report no cycle.
    pub fn has_cycle(&self) -> bool {
        self.meeting_point().is_some()
    }

    /// If a cycle exists, returns the node where it begins. If no cycle
    /// exists, returns `None`.
    pub fn find_cycle_start(&self) -> Option<NodeId> {
        let mut ptr1 = self.head()?;
        let mut ptr2 = self.meeting_point()?;
        while ptr1 != ptr2 {
            ptr1 = self.next_of(ptr1)?;
            ptr2 = self.next_of(ptr2)?;
        }
        trace!("cycle starts at {}", ptr1);
        Some(ptr1)
    }

    /// Runs the tortoise and hare until they meet or the hare falls off the end.
    fn meeting_point(&self) -> Option<NodeId> {
        let mut slow = self.head()?;
        let mut fast = slow;
        loop {
            fast = self.next_of(fast).and_then(|f| self.next_of(f))?;
            slow = self.next_of(slow)?;
            if slow == fast {
                trace!("tortoise and hare meet at {}", slow);
                return Some(slow);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close_tail_onto(list: &mut LinkedList<i32>, index: usize) -> NodeId {
        let target = list.node_at(index).unwrap();
        let tail = list.tail().unwrap();
        list.set_next(tail, Some(target)).unwrap();
        target
    }

    #[test]
    fn test_empty_list() {
        let list: LinkedList<i32> = LinkedList::new();
        assert!(!list.has_cycle());
        assert!(list.find_cycle_start().is_none());
    }

    #[test]
    fn test_single_node_no_cycle() {
        let list = LinkedList::from_slice(&[1]);
        assert!(!list.has_cycle());
        assert!(list.find_cycle_start().is_none());
    }

    #[test]
    fn test_single_node_self_loop() {
        let mut list = LinkedList::from_slice(&[1]);
        let head = close_tail_onto(&mut list, 0);
        assert!(list.has_cycle());
        assert_eq!(list.find_cycle_start(), Some(head));
    }

    #[test]
    fn test_two_nodes_no_cycle() {
        let list = LinkedList::from_slice(&[1, 2]);
        assert!(!list.has_cycle());
        assert!(list.find_cycle_start().is_none());
    }

    #[test]
    fn test_no_cycle_long_list() {
        let list = LinkedList::from_slice(&[1, 2, 3, 4, 5]);
        assert!(!list.has_cycle());
        assert!(list.find_cycle_start().is_none());
    }

    #[test]
    fn test_cycle_to_head() {
        let mut list = LinkedList::from_slice(&[1, 2, 3]);
        let head = close_tail_onto(&mut list, 0);
        assert!(list.has_cycle());
        assert_eq!(list.find_cycle_start(), Some(head));
    }

    #[test]
    fn test_cycle_to_middle() {
        // 1 -> 2 -> 3 -> 4
        //      ^---------|
        let mut list = LinkedList::from_slice(&[1, 2, 3, 4]);
        let second = close_tail_onto(&mut list, 1);
        assert!(list.has_cycle());
        assert_eq!(list.find_cycle_start(), Some(second));
    }

    #[test]
    fn test_longer_cycle() {
        let mut list = LinkedList::from_slice(&[1, 2, 3, 4, 5]);
        let third = close_tail_onto(&mut list, 2);
        assert!(list.has_cycle());
        let start = list.find_cycle_start().unwrap();
        assert_eq!(start, third);
        assert_eq!(list.node(start).map(|n| *n.value()), Some(3));
    }

    #[test]
    fn test_public_mutations_never_create_cycles() {
        let mut list = LinkedList::from_slice(&[3, 4]);
        list.append(5);
        list.prepend(1);
        list.insert_at_index(1, 2).unwrap();
        list.remove_first(&4);
        list.reverse();
        assert_eq!(list.to_vec(), vec![5, 3, 2, 1]);
        assert!(!list.has_cycle());
    }

    #[test]
    fn test_breaking_cycle_restores_acyclic_list() {
        let mut list = LinkedList::from_slice(&[1, 2, 3]);
        close_tail_onto(&mut list, 0);
        let tail = list.node_at(2).unwrap();
        list.set_next(tail, None).unwrap();
        assert!(!list.has_cycle());
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }
}
