//! TreeWalker - renders a directory tree into a time-flushed output buffer

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::error::Result;
use crate::output::{
    OutputBuffer, child_prefix, connector, format_footer, format_header, layer_color,
};
use crate::stats::TreeStats;
use crate::volume::{SystemVolumeLabel, VolumeLabel};

use super::config::TreeConfig;
use super::traversal::{DirectoryLayer, LayerEntry};

/// Shared flag that asks a running walk to stop early.
pub type CancelFlag = Arc<AtomicBool>;

/// Depth-first tree walker.
///
/// Each directory is read one layer at a time; subdirectories are listed
/// before files and every layer gives the output buffer a chance to flush.
pub struct TreeWalker {
    config: TreeConfig,
    volumes: Box<dyn VolumeLabel>,
    cancel: Option<CancelFlag>,
}

impl TreeWalker {
    pub fn new(config: TreeConfig) -> Self {
        Self {
            config,
            volumes: Box::new(SystemVolumeLabel),
            cancel: None,
        }
    }

    /// Replace the operating system volume label lookup.
    pub fn with_volume_label(mut self, volumes: impl VolumeLabel + 'static) -> Self {
        self.volumes = Box::new(volumes);
        self
    }

    /// Stop descending once `flag` is raised. The flag is checked when a
    /// layer starts, so every layer already begun is finished and the tree
    /// closes on a `└─── ` line. Whatever was rendered is still flushed,
    /// followed by the summary.
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Print the header, the tree under `root` and the summary footer,
    /// then flush everything to the sink.
    ///
    /// `root` should already be absolute. Only output failures are errors.
    pub fn walk<W: Write>(&self, root: &Path, out: &mut OutputBuffer<W>) -> Result<TreeStats> {
        out.push_str(&format_header(root, self.volumes.as_ref()));

        let mut stats = TreeStats::new();
        self.display_tree(root, "", 0, out, &mut stats)?;

        if self.cancelled() {
            warn!("listing interrupted, output is incomplete");
        }
        info!(dirs = stats.dirs, files = stats.files, "listing complete");

        out.push_str(&format_footer(&stats));
        out.write_buffer()?;
        Ok(stats)
    }

    /// Render the children of `path`, each line starting with `prefix`.
    ///
    /// `depth` is the layer being rendered; the root's children are layer 0.
    pub fn display_tree<W: Write>(
        &self,
        path: &Path,
        prefix: &str,
        depth: usize,
        out: &mut OutputBuffer<W>,
        stats: &mut TreeStats,
    ) -> Result<()> {
        if self.config.beyond_max_depth(depth) || self.cancelled() {
            return Ok(());
        }

        out.maybe_flush()?;

        let layer = match DirectoryLayer::read(path, &self.config) {
            Ok(layer) => layer,
            Err(failure) => {
                out.push_str(prefix);
                out.push_line(failure.marker());
                return Ok(());
            }
        };

        out.reserve_layer(layer.len(), prefix.len());

        self.display_directories(&layer, prefix, depth, out, stats)?;
        self.display_files(&layer.files, prefix, out, stats);
        Ok(())
    }

    fn display_directories<W: Write>(
        &self,
        layer: &DirectoryLayer,
        prefix: &str,
        depth: usize,
        out: &mut OutputBuffer<W>,
        stats: &mut TreeStats,
    ) -> Result<()> {
        let color = layer_color(depth);
        // Files follow the directories, so the last directory is only last
        // when there are no files in the layer.
        let total = layer.len();

        for (i, dir) in layer.dirs.iter().enumerate() {
            let is_last = i + 1 == total;

            out.push_str(prefix);
            out.push_str(connector(is_last));
            out.push_colored(&dir.name, color)?;
            out.push_str("\n");
            stats.record_directory();

            if dir.descend {
                let sub_prefix = child_prefix(prefix, is_last);
                self.display_tree(&dir.path, &sub_prefix, depth + 1, out, stats)?;
            }
        }
        Ok(())
    }

    fn display_files<W: Write>(
        &self,
        files: &[LayerEntry],
        prefix: &str,
        out: &mut OutputBuffer<W>,
        stats: &mut TreeStats,
    ) {
        for (i, file) in files.iter().enumerate() {
            out.push_str(prefix);
            out.push_str(connector(i + 1 == files.len()));
            out.push_line(&file.name);
            stats.record_file();
        }
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}
