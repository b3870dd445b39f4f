//! Tree line rendering and buffered output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Connectors, indentation and directory colors
//! - `buffer` - Time-flushed buffer in front of the output sink
//! - `header` - Listing header and summary footer

mod buffer;
mod config;
mod header;
mod utils;

// Re-export public types and functions
pub use buffer::OutputBuffer;
pub use config::OutputConfig;
pub use header::{format_footer, format_header};
pub use utils::{child_prefix, connector, layer_color};
