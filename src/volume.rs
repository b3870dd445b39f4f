//! Volume label lookup for the listing header
//!
//! The walker never talks to the platform directly; it is handed a
//! [`VolumeLabel`] and falls back to [`UNKNOWN_LABEL`] when the lookup
//! has nothing to offer.

use std::path::{Component, Path, PathBuf};

/// Shown when no label is available.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Source of human-readable volume labels.
pub trait VolumeLabel {
    /// Label of the volume holding `path`, or `None` if it has none or the
    /// lookup failed.
    fn label(&self, path: &Path) -> Option<String>;
}

/// Resolve the label to display, substituting [`UNKNOWN_LABEL`] for missing
/// or blank labels.
pub fn display_label(volumes: &dyn VolumeLabel, path: &Path) -> String {
    volumes
        .label(path)
        .filter(|label| !label.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

/// The root component of `path`: `/` on Unix, `C:\` on Windows.
/// Empty for relative paths.
pub fn root_marker(path: &Path) -> String {
    let mut root = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => root.push(component.as_os_str()),
            _ => break,
        }
    }
    root.display().to_string()
}

/// Always answers with the same label. Useful for deterministic output.
#[derive(Debug, Clone, Default)]
pub struct FixedVolumeLabel(Option<String>);

impl FixedVolumeLabel {
    pub fn new(label: &str) -> Self {
        Self(Some(label.to_string()))
    }

    /// A lookup that never finds a label.
    pub fn none() -> Self {
        Self(None)
    }
}

impl VolumeLabel for FixedVolumeLabel {
    fn label(&self, _path: &Path) -> Option<String> {
        self.0.clone()
    }
}

/// Looks labels up from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemVolumeLabel;

impl VolumeLabel for SystemVolumeLabel {
    fn label(&self, path: &Path) -> Option<String> {
        let label = platform::volume_label(path);
        if label.is_none() {
            tracing::debug!(path = %path.display(), "no volume label");
        }
        label
    }
}

#[cfg(windows)]
mod platform {
    use std::path::Path;

    use windows::Win32::Storage::FileSystem::GetVolumeInformationW;
    use windows::core::PCWSTR;

    pub fn volume_label(path: &Path) -> Option<String> {
        let root = super::root_marker(path);
        if root.is_empty() {
            return None;
        }
        let root_wide: Vec<u16> = root.encode_utf16().chain(std::iter::once(0)).collect();

        let mut label_buf = [0u16; 256];
        let has_volume_info = unsafe {
            GetVolumeInformationW(
                PCWSTR(root_wide.as_ptr()),
                Some(&mut label_buf),
                None,
                None,
                None,
                None,
            )
            .is_ok()
        };
        if !has_volume_info {
            return None;
        }

        let len = label_buf.iter().position(|&c| c == 0).unwrap_or(label_buf.len());
        Some(String::from_utf16_lossy(&label_buf[..len]))
    }
}

#[cfg(target_os = "linux")]
mod platform {
    use std::fs;
    use std::path::{Path, PathBuf};

    const MOUNTS: &str = "/proc/self/mounts";
    const LABELS_DIR: &str = "/dev/disk/by-label";

    /// Find the block device backing `path`, then the by-label link pointing at it.
    pub fn volume_label(path: &Path) -> Option<String> {
        let path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let mounts = fs::read_to_string(MOUNTS).ok()?;
        let device = mount_device(&mounts, &path)?;
        let device = fs::canonicalize(device).ok()?;

        fs::read_dir(LABELS_DIR)
            .ok()?
            .flatten()
            .find(|entry| fs::canonicalize(entry.path()).is_ok_and(|target| target == device))
            .map(|entry| unescape(&entry.file_name().to_string_lossy()))
    }

    /// Device of the longest mount point containing `path`. Later mounts win ties.
    pub(super) fn mount_device(mounts: &str, path: &Path) -> Option<PathBuf> {
        let mut best: Option<(usize, PathBuf)> = None;
        for line in mounts.lines() {
            let mut fields = line.split_whitespace();
            let (Some(device), Some(mount_point)) = (fields.next(), fields.next()) else {
                continue;
            };
            let device = PathBuf::from(unescape(device));
            if !device.is_absolute() {
                continue;
            }
            let mount_point = PathBuf::from(unescape(mount_point));
            if !path.starts_with(&mount_point) {
                continue;
            }
            let depth = mount_point.components().count();
            if best.as_ref().is_none_or(|(d, _)| depth >= *d) {
                best = Some((depth, device));
            }
        }
        best.map(|(_, device)| device)
    }

    /// Decode `\040` (octal, mount tables) and `\x20` (hex, udev links) escapes.
    pub(super) fn unescape(s: &str) -> String {
        let bytes = s.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'\\' {
                if let Some(byte) = decode_escape(&bytes[i + 1..]) {
                    out.push(byte);
                    i += 4;
                    continue;
                }
            }
            out.push(bytes[i]);
            i += 1;
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    fn decode_escape(rest: &[u8]) -> Option<u8> {
        let (digits, radix) = match rest.first()? {
            b'x' => (rest.get(1..3)?, 16),
            _ => (rest.get(..3)?, 8),
        };
        if !digits.iter().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u8::from_str_radix(std::str::from_utf8(digits).ok()?, radix).ok()
    }
}

#[cfg(not(any(windows, target_os = "linux")))]
mod platform {
    use std::path::Path;

    pub fn volume_label(_path: &Path) -> Option<String> {
        None
    }
}
