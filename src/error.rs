//! Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a listing.
///
/// Unreadable or vanished directories are not errors: they are rendered in
/// place as markers and the walk carries on.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The output sink rejected a write or flush.
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),

    /// The root path could not be made absolute.
    #[error("cannot resolve '{}': {source}", path.display())]
    ResolvePath { path: PathBuf, source: io::Error },
}

impl TreeError {
    /// Whether the reader on the other end of the output went away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
