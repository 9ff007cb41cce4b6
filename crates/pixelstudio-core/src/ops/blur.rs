//! Gaussian blur with a size-derived sigma.
//!
//! The kernel is separable, so the blur runs as a horizontal pass into a
//! float plane followed by a vertical pass back to bytes; borders replicate
//! the edge pixel. Sigma is derived from the kernel size with the
//! conventional `0.3 * ((k - 1) * 0.5 - 1) + 0.8`.

use crate::raster::Raster;

/// Force a kernel size into the usable domain: at least 1, and odd.
///
/// Even sizes have no center tap, so they are bumped to the next odd value:
/// a kernel size of 4 blurs exactly like 5.
#[inline]
pub fn coerce_kernel_size(size: u32) -> u32 {
    size.max(1) | 1
}

/// Sigma for an odd kernel size when the caller leaves it unspecified.
fn sigma_for(kernel_size: u32) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Normalized 1-D Gaussian weights for an odd kernel size.
fn gaussian_weights(kernel_size: u32) -> Vec<f32> {
    let sigma = sigma_for(kernel_size);
    let radius = (kernel_size / 2) as i64;
    let denom = 2.0 * sigma * sigma;
    let mut weights: Vec<f32> = (-radius..=radius)
        .map(|i| (-((i * i) as f32) / denom).exp())
        .collect();
    let sum: f32 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

/// Blur the image with a k x k Gaussian kernel.
///
/// `kernel_size` is coerced by [`coerce_kernel_size`] first, so even and
/// out-of-range sizes are usable rather than errors. A coerced size of 1 is
/// an identity pass.
pub fn gaussian_blur(input: &Raster, kernel_size: u32) -> Raster {
    let size = coerce_kernel_size(kernel_size);
    if size == 1 || input.is_empty() {
        return input.clone();
    }

    let weights = gaussian_weights(size);
    let radius = (size / 2) as i64;
    let w = input.width as i64;
    let h = input.height as i64;

    // Horizontal pass into a float plane so the vertical pass rounds only once.
    let mut plane = vec![0.0f32; input.pixels.len()];
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f32; 3];
            for (k, weight) in weights.iter().enumerate() {
                let sx = (x + k as i64 - radius).clamp(0, w - 1);
                let idx = ((y * w + sx) * 3) as usize;
                acc[0] += input.pixels[idx] as f32 * weight;
                acc[1] += input.pixels[idx + 1] as f32 * weight;
                acc[2] += input.pixels[idx + 2] as f32 * weight;
            }
            let idx = ((y * w + x) * 3) as usize;
            plane[idx] = acc[0];
            plane[idx + 1] = acc[1];
            plane[idx + 2] = acc[2];
        }
    }

    let mut pixels = vec![0u8; input.pixels.len()];
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f32; 3];
            for (k, weight) in weights.iter().enumerate() {
                let sy = (y + k as i64 - radius).clamp(0, h - 1);
                let idx = ((sy * w + x) * 3) as usize;
                acc[0] += plane[idx] * weight;
                acc[1] += plane[idx + 1] * weight;
                acc[2] += plane[idx + 2] * weight;
            }
            let idx = ((y * w + x) * 3) as usize;
            pixels[idx] = acc[0].clamp(0.0, 255.0).round() as u8;
            pixels[idx + 1] = acc[1].clamp(0.0, 255.0).round() as u8;
            pixels[idx + 2] = acc[2].clamp(0.0, 255.0).round() as u8;
        }
    }

    Raster::new(input.width, input.height, pixels)
}
