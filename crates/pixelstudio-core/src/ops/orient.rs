//! Rotation and mirroring.

use image::imageops;
use serde::{Deserialize, Serialize};

use crate::ops::{require_rgb, TransformError};
use crate::raster::Raster;

/// Mirror axis for [`flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipAxis {
    /// Mirror left-right.
    Horizontal,
    /// Mirror top-bottom.
    Vertical,
}

/// Rotate clockwise by an exact multiple of 90 degrees.
///
/// 90 is a clockwise quarter turn, 270 a counter-clockwise one. Any other
/// angle (including 0) returns the input unchanged rather than erroring, so
/// a shell can pass arbitrary angle values straight through.
pub fn rotate(input: &Raster, degrees: u32) -> Result<Raster, TransformError> {
    if !matches!(degrees, 90 | 180 | 270) {
        return Ok(input.clone());
    }
    let img = require_rgb(input)?;
    let rotated = match degrees {
        90 => imageops::rotate90(&img),
        180 => imageops::rotate180(&img),
        _ => imageops::rotate270(&img),
    };
    Ok(Raster::from_rgb_image(rotated))
}

/// Mirror the image along the given axis.
pub fn flip(input: &Raster, axis: FlipAxis) -> Result<Raster, TransformError> {
    let img = require_rgb(input)?;
    let flipped = match axis {
        FlipAxis::Horizontal => imageops::flip_horizontal(&img),
        FlipAxis::Vertical => imageops::flip_vertical(&img),
    };
    Ok(Raster::from_rgb_image(flipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [u8; 3] = [255, 0, 0];
    const B: [u8; 3] = [0, 255, 0];
    const C: [u8; 3] = [0, 0, 255];
    const D: [u8; 3] = [255, 255, 0];

    /// 2x2 raster laid out as rows [A B] / [C D].
    fn quad() -> Raster {
        let mut pixels = Vec::new();
        for p in [A, B, C, D] {
            pixels.extend_from_slice(&p);
        }
        Raster::new(2, 2, pixels)
    }

    #[test]
    fn test_rotate_90_swaps_dimensions() {
        let img = Raster::filled(4, 2, [9, 9, 9]);
        let out = rotate(&img, 90).unwrap();
        assert_eq!(out.dimensions(), (2, 4));
    }

    #[test]
    fn test_rotate_90_is_clockwise() {
        // [A B]          [C A]
        // [C D] -> 90 -> [D B]
        let out = rotate(&quad(), 90).unwrap();
        assert_eq!(out.pixel(0, 0), C);
        assert_eq!(out.pixel(1, 0), A);
        assert_eq!(out.pixel(0, 1), D);
        assert_eq!(out.pixel(1, 1), B);
    }

    #[test]
    fn test_rotate_180() {
        // [A B]           [D C]
        // [C D] -> 180 -> [B A]
        let out = rotate(&quad(), 180).unwrap();
        assert_eq!(out.pixel(0, 0), D);
        assert_eq!(out.pixel(1, 0), C);
        assert_eq!(out.pixel(0, 1), B);
        assert_eq!(out.pixel(1, 1), A);
    }

    #[test]
    fn test_rotate_270_is_counter_clockwise() {
        // [A B]           [B D]
        // [C D] -> 270 -> [A C]
        let out = rotate(&quad(), 270).unwrap();
        assert_eq!(out.pixel(0, 0), B);
        assert_eq!(out.pixel(1, 0), D);
        assert_eq!(out.pixel(0, 1), A);
        assert_eq!(out.pixel(1, 1), C);
    }

    #[test]
    fn test_non_quarter_angles_pass_through() {
        let img = quad();
        for degrees in [0, 45, 91, 360, 540] {
            let out = rotate(&img, degrees).unwrap();
            assert_eq!(out, img, "angle {degrees} should be identity");
        }
    }

    #[test]
    fn test_four_quarter_turns_is_identity() {
        let img = quad();
        let mut out = img.clone();
        for _ in 0..4 {
            out = rotate(&out, 90).unwrap();
        }
        assert_eq!(out, img);
    }

    #[test]
    fn test_flip_horizontal() {
        // [A B]        [B A]
        // [C D] -> H -> [D C]
        let out = flip(&quad(), FlipAxis::Horizontal).unwrap();
        assert_eq!(out.pixel(0, 0), B);
        assert_eq!(out.pixel(1, 0), A);
        assert_eq!(out.pixel(0, 1), D);
        assert_eq!(out.pixel(1, 1), C);
    }

    #[test]
    fn test_flip_vertical() {
        // [A B]        [C D]
        // [C D] -> V -> [A B]
        let out = flip(&quad(), FlipAxis::Vertical).unwrap();
        assert_eq!(out.pixel(0, 0), C);
        assert_eq!(out.pixel(1, 0), D);
        assert_eq!(out.pixel(0, 1), A);
        assert_eq!(out.pixel(1, 1), B);
    }

    #[test]
    fn test_double_flip_is_identity() {
        let img = quad();
        for axis in [FlipAxis::Horizontal, FlipAxis::Vertical] {
            let out = flip(&flip(&img, axis).unwrap(), axis).unwrap();
            assert_eq!(out, img);
        }
    }
}
