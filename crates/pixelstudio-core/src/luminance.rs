//! Luma helpers using ITU-R BT.709 coefficients.
//!
//! Shared by the grayscale transform and the edge detector's gray
//! derivation so both agree on what "brightness" means.

/// BT.709 red coefficient.
pub const LUMA_R: f32 = 0.2126;

/// BT.709 green coefficient.
pub const LUMA_G: f32 = 0.7152;

/// BT.709 blue coefficient.
pub const LUMA_B: f32 = 0.0722;

/// Luma of an 8-bit RGB triplet, rounded back to 8 bits.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    lum.clamp(0.0, 255.0).round() as u8
}

/// Luma of an 8-bit RGB triplet as an unrounded float in [0, 255].
///
/// The edge detector works on this so gradient magnitudes are not
/// quantized before thresholding.
#[inline]
pub fn luma_f32(r: u8, g: u8, b: u8) -> f32 {
    LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32
}
