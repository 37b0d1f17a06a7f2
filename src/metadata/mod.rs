/// Image metadata extraction module
///
/// This module handles:
/// - Reading pixel dimensions from image headers
/// - Reading EXIF resolution tags (with 72 DPI fallback)
/// - Converting pixel extents to physical millimeters

pub mod reader;
pub mod resolution;
