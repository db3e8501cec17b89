pub mod list;

// Re-export all modules
pub use list::*;
