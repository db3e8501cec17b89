pub mod floyd_cycle;
pub mod linked_list;
pub mod node;
pub mod random;

pub use linked_list::{merge_sorted, Iter, LinkedList};
pub use node::{Node, NodeId};
pub use random::{random_list, RandomListBuilder};
