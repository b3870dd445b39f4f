//! Directory and file counts gathered during a walk

/// Totals for one walk. The root directory itself is never counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Directory lines emitted
    pub dirs: usize,
    /// File lines emitted (always 0 when files are not listed)
    pub files: usize,
}

impl TreeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directory line.
    pub fn record_directory(&mut self) {
        self.dirs += 1;
    }

    /// Record a file line.
    pub fn record_file(&mut self) {
        self.files += 1;
    }
}
