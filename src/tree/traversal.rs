//! Reading a single directory layer.
//!
//! A layer is the set of immediate children of one directory. Recursion is
//! driven by the walker one layer at a time, so nothing here descends.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::config::TreeConfig;

/// Why a directory could not be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenFailure {
    /// The directory does not exist (or vanished while walking).
    NotFound,
    /// The directory exists but could not be read.
    Inaccessible,
}

impl OpenFailure {
    fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            _ => Self::Inaccessible,
        }
    }

    /// Marker rendered in place of the directory's children.
    pub fn marker(self) -> &'static str {
        match self {
            Self::NotFound => "....[Invalid Directory]",
            Self::Inaccessible => "....[Inaccessible]",
        }
    }
}

/// One child of a directory layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerEntry {
    pub name: String,
    pub path: PathBuf,
    /// Whether the walker may recurse into this entry. Always false for
    /// files and for symlinked directories unless links are followed.
    pub descend: bool,
}

impl LayerEntry {
    fn new(name: String, path: PathBuf, descend: bool) -> Self {
        Self {
            name,
            path,
            descend,
        }
    }
}

/// The immediate children of one directory, split by kind.
///
/// Both lists are sorted by file name (case-sensitive, byte order).
/// `files` stays empty unless the config includes files.
#[derive(Debug, Default)]
pub struct DirectoryLayer {
    pub dirs: Vec<LayerEntry>,
    pub files: Vec<LayerEntry>,
}

impl DirectoryLayer {
    /// Read the layer rooted at `path`.
    ///
    /// Entries that cannot be inspected are skipped; only a failure to open
    /// the directory itself is reported.
    pub fn read(path: &Path, config: &TreeConfig) -> Result<Self, OpenFailure> {
        let entries = fs::read_dir(path).map_err(|e| {
            debug!(path = %path.display(), error = %e, "cannot open directory");
            OpenFailure::from_io(&e)
        })?;

        let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|a| a.file_name());

        let mut layer = Self::default();
        for entry in entries {
            let entry_path = entry.path();
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    let name = raw.to_string_lossy().into_owned();
                    debug!(
                        path = %entry_path.display(),
                        shown = %name,
                        "name is not valid UTF-8"
                    );
                    name
                }
            };

            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    debug!(path = %entry_path.display(), error = %e, "skipping entry");
                    continue;
                }
            };

            if file_type.is_dir() {
                layer.dirs.push(LayerEntry::new(name, entry_path, true));
            } else if file_type.is_symlink() {
                // Links are listed as whatever they point at; dangling ones are dropped.
                match fs::metadata(&entry_path) {
                    Ok(meta) if meta.is_dir() => {
                        let descend = config.follow_links;
                        layer.dirs.push(LayerEntry::new(name, entry_path, descend));
                    }
                    Ok(_) => {
                        if config.include_files {
                            layer.files.push(LayerEntry::new(name, entry_path, false));
                        }
                    }
                    Err(e) => {
                        debug!(path = %entry_path.display(), error = %e, "skipping broken link");
                    }
                }
            } else if config.include_files {
                layer.files.push(LayerEntry::new(name, entry_path, false));
            }
        }

        Ok(layer)
    }

    /// Number of lines this layer renders.
    pub(crate) fn len(&self) -> usize {
        self.dirs.len() + self.files.len()
    }
}
