/// EXIF resolution tags and pixel-to-millimeter conversion
///
/// Resolution tags are read as dots-per-inch. The EXIF `ResolutionUnit`
/// tag is ignored; values are always interpreted as DPI.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{In, Tag, Value};

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Fallback DPI when an image carries no usable resolution tag
pub const DEFAULT_DPI: f64 = 72.0;

/// Horizontal and vertical print resolution of one image, in DPI.
///
/// Each axis falls back to [`DEFAULT_DPI`] independently: an image with
/// only an `XResolution` tag keeps that value for the X axis and
/// defaults the Y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub x_dpi: f64,
    pub y_dpi: f64,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            x_dpi: DEFAULT_DPI,
            y_dpi: DEFAULT_DPI,
        }
    }
}

/// Read the resolution tags from an image file.
///
/// Never fails: a file that cannot be opened, has no EXIF block, or
/// carries malformed resolution rationals simply gets the 72 DPI
/// defaults.
pub fn read_resolution(path: &Path) -> Resolution {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Resolution::default(),
    };

    let mut reader = BufReader::new(file);
    let exif = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(_) => return Resolution::default(),
    };

    Resolution {
        x_dpi: tag_dpi(&exif, Tag::XResolution).unwrap_or(DEFAULT_DPI),
        y_dpi: tag_dpi(&exif, Tag::YResolution).unwrap_or(DEFAULT_DPI),
    }
}

/// Extract one resolution tag as DPI, rejecting zero or malformed rationals
fn tag_dpi(exif: &exif::Exif, tag: Tag) -> Option<f64> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        Value::Rational(values) => values
            .first()
            .map(|rational| rational.to_f64())
            .filter(|dpi| dpi.is_finite() && *dpi > 0.0),
        _ => None,
    }
}

/// Convert a pixel extent to whole millimeters at the given DPI.
///
/// Rounds to the nearest millimeter with `f64::round`, so halves round
/// away from zero. Fractions of a millimeter are not retained.
pub fn millimeters(pixels: u32, dpi: f64) -> u32 {
    (f64::from(pixels) / dpi * MM_PER_INCH).round() as u32
}
