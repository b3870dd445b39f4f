//! Output configuration types

use std::time::Duration;

/// Default time between flushes of the output buffer.
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_millis(1);

/// Configuration for output formatting and buffering.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Color directory names by depth parity.
    pub use_color: bool,
    /// Minimum time between flushes. `None` only flushes once the walk ends.
    pub flush_interval: Option<Duration>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: false,
            flush_interval: Some(DEFAULT_FLUSH_INTERVAL),
        }
    }
}
