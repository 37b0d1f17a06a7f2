/// Recursive folder scanning for image files
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File extensions accepted by the scanner (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "tiff", "bmp"];

/// Lazily enumerate all image files under `root`, recursing into every
/// subdirectory.
///
/// Traversal order is unspecified; the report is sorted later, so
/// nothing downstream depends on it. A missing or empty root simply
/// produces no paths — the batch layer turns that into "no images
/// found".
pub fn scan_images(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.path().is_file() && is_supported_image(entry.path()))
        .map(|entry| entry.into_path())
}

/// Check whether a path has one of the supported image extensions
fn is_supported_image(path: &Path) -> bool {
    if let Some(extension) = path.extension() {
        let ext = extension.to_string_lossy().to_lowercase();
        SUPPORTED_EXTENSIONS.contains(&ext.as_str())
    } else {
        false
    }
}
