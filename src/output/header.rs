//! Listing header and summary footer

use std::path::Path;

use crate::stats::TreeStats;
use crate::volume::{VolumeLabel, display_label, root_marker};

/// Header block printed once before the tree, ending in a blank line.
pub fn format_header(path: &Path, volumes: &dyn VolumeLabel) -> String {
    format!(
        "Folder PATH listing for volume {}\nVolume serial number is {}\n{}\n\n",
        root_marker(path),
        display_label(volumes, path),
        path.display()
    )
}

/// Summary footer printed once after the tree, preceded by a blank line.
pub fn format_footer(stats: &TreeStats) -> String {
    format!("\n{} Dir(s), {} File(s)\n", stats.dirs, stats.files)
}
