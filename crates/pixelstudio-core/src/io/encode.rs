//! Raster encoding and save-by-extension.
//!
//! Encoders work on byte buffers; [`write_raster`] picks the codec from the
//! target file's extension and writes the result to disk.

use std::ffi::OsStr;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::raster::Raster;

/// JPEG quality used when saving by path.
pub const JPEG_SAVE_QUALITY: u8 = 90;

/// Errors that can occur while encoding or writing a raster.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The target extension names no supported codec.
    #[error("unsupported save format: .{0}")]
    UnsupportedFormat(String),

    /// Width or height is zero.
    #[error("invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match the dimensions.
    #[error("invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The codec rejected the image.
    #[error("encoding failed: {0}")]
    EncodingFailed(String),

    /// The target file could not be written.
    #[error("i/o error: {0}")]
    Io(String),
}

fn validate(raster: &Raster) -> Result<(), EncodeError> {
    if raster.width == 0 || raster.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: raster.width,
            height: raster.height,
        });
    }
    let expected = (raster.width as usize) * (raster.height as usize) * 3;
    if raster.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: raster.pixels.len(),
        });
    }
    Ok(())
}

/// Encode to JPEG bytes at the given quality (clamped to 1-100).
pub fn encode_jpeg(raster: &Raster, quality: u8) -> Result<Vec<u8>, EncodeError> {
    validate(raster)?;
    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(
            &raster.pixels,
            raster.width,
            raster.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode to PNG bytes (lossless).
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, EncodeError> {
    validate(raster)?;

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(
            &raster.pixels,
            raster.width,
            raster.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode to BMP bytes (lossless).
pub fn encode_bmp(raster: &Raster) -> Result<Vec<u8>, EncodeError> {
    validate(raster)?;

    let mut buffer = Cursor::new(Vec::new());
    let encoder = BmpEncoder::new(&mut buffer);
    encoder
        .write_image(
            &raster.pixels,
            raster.width,
            raster.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode `raster` in the format named by `path`'s extension and write it.
///
/// Supported extensions: `jpg`/`jpeg`, `png`, `bmp` (case-insensitive).
/// JPEG is written at [`JPEG_SAVE_QUALITY`].
///
/// # Errors
///
/// `EncodeError::UnsupportedFormat` for any other extension;
/// `EncodeError::Io` when the file cannot be written.
pub fn write_raster(path: impl AsRef<Path>, raster: &Raster) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or("")
        .to_ascii_lowercase();

    let bytes = match ext.as_str() {
        "jpg" | "jpeg" => encode_jpeg(raster, JPEG_SAVE_QUALITY)?,
        "png" => encode_png(raster)?,
        "bmp" => encode_bmp(raster)?,
        other => return Err(EncodeError::UnsupportedFormat(other.to_string())),
    };

    fs::write(path, bytes).map_err(|e| EncodeError::Io(e.to_string()))
}
