//! Twig - a directory tree printer that streams its output

pub mod error;
pub mod output;
pub mod stats;
pub mod tree;
pub mod volume;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::TreeError;
pub use output::{OutputBuffer, OutputConfig};
pub use stats::TreeStats;
pub use tree::{CancelFlag, TreeConfig, TreeWalker, resolve_root};
pub use volume::{FixedVolumeLabel, SystemVolumeLabel, VolumeLabel};
