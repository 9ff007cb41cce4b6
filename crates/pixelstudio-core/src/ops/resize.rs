//! Resampling to exact dimensions or by a uniform scale factor.

use crate::ops::{require_rgb, TransformError};
use crate::raster::Raster;

/// Resample to exact target dimensions with bilinear filtering.
///
/// # Errors
///
/// `InvalidParameter` when either target dimension is zero; targets are
/// rejected, never clamped.
pub fn resize_to(input: &Raster, width: u32, height: u32) -> Result<Raster, TransformError> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameter {
            name: "dimensions",
            reason: format!("target {width}x{height} must be positive"),
        });
    }

    // Fast path: nothing to resample.
    if width == input.width && height == input.height {
        return Ok(input.clone());
    }

    let img = require_rgb(input)?;
    let resized =
        image::imageops::resize(&img, width, height, image::imageops::FilterType::Triangle);
    Ok(Raster::from_rgb_image(resized))
}

/// Resample by a uniform scale factor.
///
/// Target dimensions are `round(original * factor)`, floored at 1 pixel per
/// side. Shrinking uses area averaging (each output pixel is the mean of the
/// source region it covers); enlarging uses bilinear filtering.
///
/// # Errors
///
/// `InvalidParameter` when `factor` is zero, negative, or not finite.
pub fn scale_by(input: &Raster, factor: f32) -> Result<Raster, TransformError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(TransformError::InvalidParameter {
            name: "scale",
            reason: format!("factor {factor} must be finite and positive"),
        });
    }

    let width = ((input.width as f64) * (factor as f64)).round().max(1.0) as u32;
    let height = ((input.height as f64) * (factor as f64)).round().max(1.0) as u32;

    if width == input.width && height == input.height {
        return Ok(input.clone());
    }
    if factor < 1.0 {
        return Ok(area_downsample(input, width, height));
    }
    resize_to(input, width, height)
}

/// Shrink by averaging the source area each output pixel covers.
///
/// Source cells straddling an output-pixel boundary contribute with
/// fractional weight, so the average is exact for non-integer ratios too.
fn area_downsample(input: &Raster, width: u32, height: u32) -> Raster {
    let sx = input.width as f64 / width as f64;
    let sy = input.height as f64 / height as f64;

    let mut pixels = Vec::with_capacity((width as usize) * (height as usize) * 3);
    for dy in 0..height {
        let y0 = dy as f64 * sy;
        let y1 = y0 + sy;
        for dx in 0..width {
            let x0 = dx as f64 * sx;
            let x1 = x0 + sx;

            let mut acc = [0.0f64; 3];
            let mut area = 0.0f64;
            let mut yy = y0.floor() as u32;
            while (yy as f64) < y1 && yy < input.height {
                let wy = ((yy as f64 + 1.0).min(y1) - (yy as f64).max(y0)).max(0.0);
                let mut xx = x0.floor() as u32;
                while (xx as f64) < x1 && xx < input.width {
                    let wx = ((xx as f64 + 1.0).min(x1) - (xx as f64).max(x0)).max(0.0);
                    let weight = wx * wy;
                    let p = input.pixel(xx, yy);
                    acc[0] += p[0] as f64 * weight;
                    acc[1] += p[1] as f64 * weight;
                    acc[2] += p[2] as f64 * weight;
                    area += weight;
                    xx += 1;
                }
                yy += 1;
            }

            for channel in acc {
                let v = if area > 0.0 { channel / area } else { 0.0 };
                pixels.push(v.round().clamp(0.0, 255.0) as u8);
            }
        }
    }

    Raster::new(width, height, pixels)
}
