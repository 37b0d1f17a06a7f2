/// Per-file metadata extraction
///
/// This module opens one image file, reads its pixel dimensions from the
/// header, merges in the EXIF resolution tags, and derives the report
/// record. Any failure skips the file; it never aborts the batch.
use std::path::Path;

use crate::metadata::resolution::{self, Resolution};
use crate::report::data::{ImageRecord, Orientation};

/// Everything measured from one image before unit conversion.
/// Lives only for the duration of a single extraction.
#[derive(Debug, Clone, Copy)]
struct RawImageInfo {
    width_pixels: u32,
    height_pixels: u32,
    x_resolution: f64,
    y_resolution: f64,
}

/// Extract the report record for a single image file.
///
/// Returns `None` if the file cannot be opened or decoded as an image;
/// the cause is logged to stderr and the caller moves on to the next
/// file.
pub fn read_record(path: &Path) -> Option<ImageRecord> {
    match read_raw_info(path) {
        Ok(info) => Some(build_record(path, info)),
        Err(cause) => {
            eprintln!("⚠️  Error processing {}: {}", path.display(), cause);
            None
        }
    }
}

/// Read pixel dimensions and resolution tags from one file
fn read_raw_info(path: &Path) -> Result<RawImageInfo, String> {
    let reader = image::ImageReader::open(path)
        .map_err(|e| format!("cannot open file: {}", e))?;

    // Sniff the actual format from the file contents rather than
    // trusting the extension
    let reader = reader
        .with_guessed_format()
        .map_err(|e| format!("cannot probe format: {}", e))?;

    // Decodes only the header, not the pixel data
    let (width_pixels, height_pixels) = reader
        .into_dimensions()
        .map_err(|e| format!("cannot decode image: {}", e))?;

    if width_pixels == 0 || height_pixels == 0 {
        return Err(format!(
            "image has empty dimensions ({}x{})",
            width_pixels, height_pixels
        ));
    }

    let Resolution { x_dpi, y_dpi } = resolution::read_resolution(path);

    Ok(RawImageInfo {
        width_pixels,
        height_pixels,
        x_resolution: x_dpi,
        y_resolution: y_dpi,
    })
}

/// Derive the final record from the measured values
fn build_record(path: &Path, info: RawImageInfo) -> ImageRecord {
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    ImageRecord {
        file_name,
        orientation: Orientation::classify(info.width_pixels, info.height_pixels),
        width_mm: resolution::millimeters(info.width_pixels, info.x_resolution),
        height_mm: resolution::millimeters(info.height_pixels, info.y_resolution),
    }
}
