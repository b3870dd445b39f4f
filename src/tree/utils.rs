//! Shared utility functions for tree walking

use std::path::{Component, Path, PathBuf};

use crate::error::{Result, TreeError};

/// Make `path` absolute against the current directory and drop `.` and `..`
/// components lexically.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|source| TreeError::ResolvePath {
        path: path.to_path_buf(),
        source,
    })?;

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    Ok(resolved)
}
