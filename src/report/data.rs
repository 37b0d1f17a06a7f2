/// Shared data structures for the report pipeline
///
/// These structs represent the data that flows between the metadata
/// layer and the CSV report layer.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Coarse classification of an image's aspect ratio.
///
/// `Landscape` means strictly wider than tall; everything else,
/// including square images, is `Portrait`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Classify pixel dimensions into an orientation
    pub fn classify(width_pixels: u32, height_pixels: u32) -> Self {
        if width_pixels > height_pixels {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// One row of the final report, derived from a single image file.
///
/// Field names map to the CSV columns via serde renames, so the header
/// row is exactly `File Name,Orientation,Width (mm),Height (mm)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Filename only (e.g., "DSC_0001.jpg"), no directory components
    #[serde(rename = "File Name")]
    pub file_name: String,
    #[serde(rename = "Orientation")]
    pub orientation: Orientation,
    /// Physical width in whole millimeters
    #[serde(rename = "Width (mm)")]
    pub width_mm: u32,
    /// Physical height in whole millimeters
    #[serde(rename = "Height (mm)")]
    pub height_mm: u32,
}

/// Result of a completed report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// Number of images that made it into the report
    pub record_count: usize,
    /// Number of files skipped because they could not be read
    pub skipped_count: usize,
    /// Where the CSV was written
    pub output_path: PathBuf,
}
