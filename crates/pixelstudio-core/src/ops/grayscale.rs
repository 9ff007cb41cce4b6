//! Grayscale conversion.

use crate::luminance::luma_u8;
use crate::raster::Raster;

/// Convert an image to grayscale.
///
/// The luma of each pixel is written back to all three channels, so the
/// output keeps the 3-channel shape of every other snapshot. Because the
/// luma of a gray pixel is itself, applying the conversion twice yields the
/// same bytes as applying it once.
pub fn grayscale(input: &Raster) -> Raster {
    let mut pixels = Vec::with_capacity(input.byte_size());
    for chunk in input.pixels.chunks_exact(3) {
        let l = luma_u8(chunk[0], chunk[1], chunk[2]);
        pixels.extend_from_slice(&[l, l, l]);
    }
    Raster::new(input.width, input.height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_preserved() {
        let img = Raster::filled(7, 3, [200, 10, 40]);
        let gray = grayscale(&img);
        assert_eq!(gray.dimensions(), (7, 3));
        assert_eq!(gray.byte_size(), img.byte_size());
    }

    #[test]
    fn test_channels_equalized() {
        let img = Raster::filled(4, 4, [250, 30, 90]);
        let gray = grayscale(&img);
        for chunk in gray.pixels.chunks_exact(3) {
            assert_eq!(chunk[0], chunk[1]);
            assert_eq!(chunk[1], chunk[2]);
        }
    }

    #[test]
    fn test_red_pixel_luma() {
        let img = Raster::filled(1, 1, [255, 0, 0]);
        let gray = grayscale(&img);
        // 0.2126 * 255 ~ 54
        assert!((gray.pixels[0] as i32 - 54).abs() <= 1);
    }

    #[test]
    fn test_idempotent() {
        let mut pixels = Vec::new();
        for i in 0..32u32 {
            pixels.extend_from_slice(&[(i * 7 % 256) as u8, (i * 13 % 256) as u8, (i * 29 % 256) as u8]);
        }
        let img = Raster::new(8, 4, pixels);
        let once = grayscale(&img);
        let twice = grayscale(&once);
        assert_eq!(once, twice);
    }
}
