pub mod cs;
pub mod error;

pub use cs::list;
pub use cs::list::{merge_sorted, random_list, LinkedList, Node, NodeId, RandomListBuilder};
pub use error::{Error, Result};
