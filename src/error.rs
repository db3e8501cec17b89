//! Error types shared by the list algorithms.

use crate::cs::list::NodeId;

/// Errors reported by list operations that are misused by the caller.
///
/// Lookups that simply find nothing (`get_kth`, `get_nth_from_end`, ...) return
/// `Option` instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("`{operation}` is undefined on an empty list")]
    EmptyList { operation: &'static str },
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{0} does not refer to a live node of this list")]
    InvalidNode(NodeId),
    #[error("list value cannot be represented as f64")]
    NotRepresentable,
    #[error("empty value range {low}..={high}")]
    EmptyRange { low: i64, high: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
