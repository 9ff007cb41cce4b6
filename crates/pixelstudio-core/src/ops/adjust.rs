//! Brightness and contrast adjustment.

use crate::raster::Raster;

/// Adjust brightness and contrast.
///
/// Each channel becomes `clamp(round(v * gain + brightness), 0, 255)` with
/// `gain = (contrast + 100) / 100`, so `contrast = 0` is neutral gain and
/// `brightness = 0` adds nothing. The nominal range for both parameters is
/// -100 to 100, but values outside it are honored as given; the output
/// clamp saturates at the 8-bit bounds either way, never wrapping.
///
/// # Example
///
/// ```ignore
/// // +50 brightness at neutral contrast
/// let brighter = adjust_brightness_contrast(&img, 50.0, 0.0);
/// ```
pub fn adjust_brightness_contrast(input: &Raster, brightness: f32, contrast: f32) -> Raster {
    let gain = (contrast + 100.0) / 100.0;
    let mut pixels = Vec::with_capacity(input.byte_size());
    for &v in &input.pixels {
        let out = (v as f32 * gain + brightness).clamp(0.0, 255.0).round() as u8;
        pixels.push(out);
    }
    Raster::new(input.width, input.height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_is_identity() {
        let img = Raster::filled(5, 5, [13, 128, 250]);
        let out = adjust_brightness_contrast(&img, 0.0, 0.0);
        assert_eq!(out, img);
    }

    #[test]
    fn test_brightness_adds() {
        let img = Raster::filled(2, 2, [100, 100, 100]);
        let out = adjust_brightness_contrast(&img, 25.0, 0.0);
        assert_eq!(out.pixel(0, 0), [125, 125, 125]);
    }

    #[test]
    fn test_brightness_clamps_high_never_wraps() {
        let img = Raster::filled(2, 2, [100, 100, 100]);
        let out = adjust_brightness_contrast(&img, 200.0, 0.0);
        // 100 + 200 saturates at 255; a wrap would land below 100.
        assert_eq!(out.pixel(0, 0), [255, 255, 255]);
    }

    #[test]
    fn test_brightness_clamps_low() {
        let img = Raster::filled(2, 2, [30, 30, 30]);
        let out = adjust_brightness_contrast(&img, -100.0, 0.0);
        assert_eq!(out.pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_contrast_gain() {
        let img = Raster::filled(1, 1, [100, 100, 100]);
        // contrast 100 doubles: gain = (100 + 100) / 100 = 2
        let out = adjust_brightness_contrast(&img, 0.0, 100.0);
        assert_eq!(out.pixel(0, 0), [200, 200, 200]);
    }

    #[test]
    fn test_contrast_minus_100_flattens_to_brightness() {
        let img = Raster::filled(1, 1, [180, 90, 45]);
        // gain 0: every channel collapses to the brightness term
        let out = adjust_brightness_contrast(&img, 64.0, -100.0);
        assert_eq!(out.pixel(0, 0), [64, 64, 64]);
    }

    #[test]
    fn test_per_channel_independence() {
        let img = Raster::filled(1, 1, [10, 128, 240]);
        let out = adjust_brightness_contrast(&img, 20.0, 0.0);
        assert_eq!(out.pixel(0, 0), [30, 148, 255]);
    }
}
