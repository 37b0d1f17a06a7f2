//! # Photo Metrics
//!
//! Batch extraction of physical print dimensions from photo folders.
//!
//! This library walks a folder tree for image files, reads pixel
//! dimensions and EXIF resolution tags from each one, converts them to
//! millimeters, and writes a sorted CSV report:
//!
//! ```csv
//! File Name,Orientation,Width (mm),Height (mm)
//! DSC_0001.jpg,Landscape,254,170
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let root = Path::new("/photos/holiday");
//! let summary = photo_metrics::run_report(root, &root.join("ImageMetadata.csv"))?;
//! println!("{} images measured", summary.record_count);
//! # Ok::<(), photo_metrics::ReportError>(())
//! ```
//!
//! Files that cannot be decoded are skipped with a diagnostic on stderr;
//! only two failures reach the caller: an empty scan (`NoImagesFound`)
//! and an unwritable report (`WriteFailed`).

use std::path::Path;

pub mod error;
pub mod host;
pub mod metadata;
pub mod report;

pub use error::{ReportError, Result};
pub use report::data::{ImageRecord, Orientation, ReportSummary};

/// Scan `root` for images and write the CSV report to `output`.
///
/// Processes files one at a time: scan, read metadata per file, collect,
/// sort by file name, write. Single-threaded and synchronous throughout;
/// a failure on one file never affects the others.
///
/// # Errors
///
/// Returns [`ReportError::NoImagesFound`] if the scan produced zero
/// readable images (no file is written), or
/// [`ReportError::WriteFailed`] if the report could not be persisted.
pub fn run_report(root: &Path, output: &Path) -> Result<ReportSummary> {
    println!("🔍 Scanning folder: {}", root.display());

    let (mut records, skipped_count) =
        report::builder::collect_records(report::scanner::scan_images(root));

    if records.is_empty() {
        return Err(ReportError::NoImagesFound);
    }

    report::builder::sort_records(&mut records);
    report::builder::write_csv(&records, output)?;

    println!(
        "✅ Report complete: {} images measured, {} skipped",
        records.len(),
        skipped_count
    );

    Ok(ReportSummary {
        record_count: records.len(),
        skipped_count,
        output_path: output.to_path_buf(),
    })
}
