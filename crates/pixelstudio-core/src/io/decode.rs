//! Raster decoding with EXIF orientation correction.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageError, ImageReader};
use thiserror::Error;

use crate::raster::Raster;

/// Errors from reading or decoding an image file.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not a recognized raster format.
    #[error("invalid or unsupported image format")]
    UnsupportedFormat,

    /// The file is recognized but damaged or truncated.
    #[error("corrupted image file: {0}")]
    Corrupted(String),

    /// The file could not be read.
    #[error("i/o error: {0}")]
    Io(String),
}

/// EXIF orientation values (1-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Orientation {
    #[default]
    Normal,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    Transpose,
    Rotate90Cw,
    Transverse,
    Rotate270Cw,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90Cw,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270Cw,
            _ => Orientation::Normal,
        }
    }
}

/// Decode raster bytes, sniffing the format from the content.
///
/// The EXIF orientation tag is honored so the returned raster is upright;
/// formats without an EXIF container (PNG, BMP) decode as stored.
///
/// # Errors
///
/// `DecodeError::UnsupportedFormat` when the bytes match no known codec,
/// `DecodeError::Corrupted` when a recognized file fails to decode.
pub fn decode_bytes(bytes: &[u8]) -> Result<Raster, DecodeError> {
    let orientation = read_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Io(e.to_string()))?;

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::UnsupportedFormat,
        other => DecodeError::Corrupted(other.to_string()),
    })?;

    let upright = apply_orientation(img, orientation);
    Ok(Raster::from_rgb_image(upright.into_rgb8()))
}

/// Read and decode the raster file at `path`.
pub fn read_raster(path: impl AsRef<Path>) -> Result<Raster, DecodeError> {
    let bytes = fs::read(path).map_err(|e| DecodeError::Io(e.to_string()))?;
    decode_bytes(&bytes)
}

/// Extract the EXIF orientation, defaulting to `Normal` when absent.
fn read_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90Cw => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270Cw => img.rotate270(),
    }
}
