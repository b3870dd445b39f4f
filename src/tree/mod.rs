//! Directory tree walking logic
//!
//! The walker reads one directory layer at a time, renders it into an
//! [`OutputBuffer`](crate::output::OutputBuffer) and recurses into each
//! subdirectory. Peak memory is bounded by what accumulates between flushes.

mod config;
mod traversal;
mod utils;
mod walker;

// Re-export public types
pub use config::TreeConfig;
pub use traversal::{DirectoryLayer, LayerEntry, OpenFailure};
pub use utils::resolve_root;
pub use walker::{CancelFlag, TreeWalker};
