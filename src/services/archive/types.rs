use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported export bundle kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ArchiveFormat {
    /// `.dmg`, attached read-only with `hdiutil`.
    DiskImage,
    Zip,
    /// An export that is already unpacked.
    Directory,
}

impl ArchiveFormat {
    /// Detect format from the file extension, falling back to a plain directory.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("dmg") => Some(Self::DiskImage),
            Some("zip") => Some(Self::Zip),
            _ if path.is_dir() => Some(Self::Directory),
            _ => None,
        }
    }
}
