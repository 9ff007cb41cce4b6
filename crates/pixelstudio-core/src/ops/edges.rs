//! Two-threshold hysteresis edge detection.
//!
//! The pipeline: luma derivation, 3x3 Sobel gradients with clamped borders,
//! non-maximum suppression along the quantized gradient direction, then a
//! double threshold with hysteresis: magnitudes at or above the high
//! threshold seed edges, and pixels between the thresholds survive only when
//! 8-connected to a seed. The result is a binary edge map (255 on edges),
//! replicated to 3 channels like every other snapshot.

use crate::luminance::luma_f32;
use crate::raster::Raster;

/// Default lower hysteresis threshold on gradient magnitude.
pub const DEFAULT_LOW_THRESHOLD: f32 = 100.0;

/// Default upper hysteresis threshold on gradient magnitude.
pub const DEFAULT_HIGH_THRESHOLD: f32 = 200.0;

const SOBEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// tan(22.5 deg): the boundary between the axis and diagonal sectors.
const TAN_22_5: f32 = 0.41421356;

const CLASS_WEAK: u8 = 1;
const CLASS_STRONG: u8 = 2;

/// Per-pixel Sobel gradients over the luma plane.
struct Gradients {
    gx: Vec<f32>,
    gy: Vec<f32>,
    mag: Vec<f32>,
}

fn sobel(gray: &[f32], w: usize, h: usize) -> Gradients {
    let mut gx = vec![0.0f32; w * h];
    let mut gy = vec![0.0f32; w * h];
    let mut mag = vec![0.0f32; w * h];

    for y in 0..h {
        let ys = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        for x in 0..w {
            let xs = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for ky in 0..3 {
                let row = ys[ky] * w;
                for kx in 0..3 {
                    let v = gray[row + xs[kx]];
                    sum_x += v * SOBEL_X[ky][kx];
                    sum_y += v * SOBEL_Y[ky][kx];
                }
            }
            let idx = y * w + x;
            gx[idx] = sum_x;
            gy[idx] = sum_y;
            mag[idx] = (sum_x * sum_x + sum_y * sum_y).sqrt();
        }
    }

    Gradients { gx, gy, mag }
}

/// The two magnitude neighbors along the quantized gradient direction.
///
/// Coordinates must lie strictly inside the image so neighbor lookups never
/// leave the buffer.
fn direction_neighbors(grad: &Gradients, w: usize, x: usize, y: usize) -> (f32, f32) {
    let idx = y * w + x;
    let gx = grad.gx[idx];
    let gy = grad.gy[idx];
    let abs_gx = gx.abs();
    let abs_gy = gy.abs();
    let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);
    let m = |xx: usize, yy: usize| grad.mag[yy * w + xx];

    if abs_gx >= abs_gy {
        if abs_gy <= abs_gx * TAN_22_5 {
            (m(x - 1, y), m(x + 1, y))
        } else if same_sign {
            (m(x + 1, y - 1), m(x - 1, y + 1))
        } else {
            (m(x - 1, y - 1), m(x + 1, y + 1))
        }
    } else if abs_gx <= abs_gy * TAN_22_5 {
        (m(x, y - 1), m(x, y + 1))
    } else if same_sign {
        (m(x + 1, y - 1), m(x - 1, y + 1))
    } else {
        (m(x - 1, y - 1), m(x + 1, y + 1))
    }
}

/// Detect edges in the image.
///
/// Multi-channel input is reduced to luma first. Threshold order does not
/// matter; the smaller value is always the lower threshold. Images smaller
/// than 3x3 produce an all-zero edge map, and the outermost 1-pixel frame is
/// never marked as an edge.
pub fn detect_edges(input: &Raster, low_threshold: f32, high_threshold: f32) -> Raster {
    let w = input.width as usize;
    let h = input.height as usize;
    let (low, high) = if low_threshold <= high_threshold {
        (low_threshold, high_threshold)
    } else {
        (high_threshold, low_threshold)
    };

    let mut edge = vec![0u8; w * h];
    if w >= 3 && h >= 3 {
        let gray: Vec<f32> = input
            .pixels
            .chunks_exact(3)
            .map(|c| luma_f32(c[0], c[1], c[2]))
            .collect();
        let grad = sobel(&gray, w, h);

        // NMS + double threshold, skipping the 1-pixel frame.
        let mut class = vec![0u8; w * h];
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                let idx = y * w + x;
                let mag = grad.mag[idx];
                if mag < low {
                    continue;
                }
                let (n1, n2) = direction_neighbors(&grad, w, x, y);
                if mag <= n1 || mag <= n2 {
                    continue;
                }
                class[idx] = if mag >= high { CLASS_STRONG } else { CLASS_WEAK };
            }
        }

        // Hysteresis: flood from strong pixels through weak 8-neighbors.
        let mut stack = Vec::new();
        for (idx, &c) in class.iter().enumerate() {
            if c == CLASS_STRONG {
                edge[idx] = 255;
                stack.push(idx);
            }
        }
        while let Some(idx) = stack.pop() {
            let x = (idx % w) as i64;
            let y = (idx / w) as i64;
            for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = x + dx;
                    let ny = y + dy;
                    if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
                        continue;
                    }
                    let nidx = (ny as usize) * w + nx as usize;
                    if class[nidx] == CLASS_WEAK && edge[nidx] == 0 {
                        edge[nidx] = 255;
                        stack.push(nidx);
                    }
                }
            }
        }
    }

    let mut pixels = Vec::with_capacity(w * h * 3);
    for &e in &edge {
        pixels.extend_from_slice(&[e, e, e]);
    }
    Raster::new(input.width, input.height, pixels)
}
