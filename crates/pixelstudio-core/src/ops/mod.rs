//! The operation catalogue.
//!
//! Every edit the editor can perform is described by an [`Operation`] value:
//! the kind of transform plus its parameters. Applying an operation is pure:
//! the input raster is never mutated, and the same input with the same
//! parameters always produces byte-identical output. Nothing in this module
//! knows about sessions or history; sequencing is the session crate's job.

mod adjust;
mod blur;
mod edges;
mod grayscale;
mod orient;
mod resize;

pub use adjust::adjust_brightness_contrast;
pub use blur::{coerce_kernel_size, gaussian_blur};
pub use edges::{detect_edges, DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD};
pub use grayscale::grayscale;
pub use orient::{flip, rotate, FlipAxis};
pub use resize::{resize_to, scale_by};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::raster::Raster;

/// Errors from applying a transform.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A parameter is outside its valid domain.
    #[error("invalid {name}: {reason}")]
    InvalidParameter {
        /// Which parameter was rejected.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// The input raster's pixel buffer does not match its dimensions.
    #[error("malformed raster: {0}")]
    MalformedRaster(String),
}

/// Convert a raster for `image` crate processing, rejecting inconsistent buffers.
pub(crate) fn require_rgb(input: &Raster) -> Result<image::RgbImage, TransformError> {
    input.to_rgb_image().ok_or_else(|| {
        TransformError::MalformedRaster(format!(
            "{}x{} with {} bytes",
            input.width,
            input.height,
            input.byte_size()
        ))
    })
}

/// A single edit, with its parameters.
///
/// Serializable so a shell can persist or replay edit sequences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// Luma conversion, stored back as 3 identical channels.
    Grayscale,
    /// Gaussian blur with a k x k kernel (coerced odd, minimum 1).
    Blur {
        /// Kernel edge length in pixels.
        kernel_size: u32,
    },
    /// Two-threshold hysteresis edge detection on the luma plane.
    DetectEdges {
        /// Gradient magnitudes below this never become edges.
        low_threshold: f32,
        /// Gradient magnitudes at or above this seed edges.
        high_threshold: f32,
    },
    /// Additive brightness and multiplicative contrast, saturating at 8 bits.
    Adjust {
        /// Added per channel, nominal range -100 to 100.
        brightness: f32,
        /// Gain control, nominal range -100 to 100 (0 is neutral).
        contrast: f32,
    },
    /// Clockwise rotation by an exact multiple of 90 degrees.
    Rotate {
        /// 90, 180 or 270; anything else passes the input through.
        degrees: u32,
    },
    /// Mirror along an axis.
    Flip {
        /// Which axis to mirror along.
        axis: FlipAxis,
    },
    /// Uniform scale; area-averaged when shrinking, bilinear when enlarging.
    ScaleBy {
        /// Scale factor, must be finite and positive.
        factor: f32,
    },
    /// Resample to exact target dimensions.
    ResizeTo {
        /// Target width, must be non-zero.
        width: u32,
        /// Target height, must be non-zero.
        height: u32,
    },
}

impl Operation {
    /// Edge detection with the default 100/200 thresholds.
    pub fn detect_edges() -> Self {
        Operation::DetectEdges {
            low_threshold: DEFAULT_LOW_THRESHOLD,
            high_threshold: DEFAULT_HIGH_THRESHOLD,
        }
    }

    /// Apply this operation to `input`, producing a new raster.
    ///
    /// # Errors
    ///
    /// `TransformError::InvalidParameter` for out-of-domain parameters
    /// (zero resize dimensions, non-positive scale factor). Operations never
    /// partially apply: on error the input is untouched and no output exists.
    pub fn apply(&self, input: &Raster) -> Result<Raster, TransformError> {
        match *self {
            Operation::Grayscale => Ok(grayscale(input)),
            Operation::Blur { kernel_size } => Ok(gaussian_blur(input, kernel_size)),
            Operation::DetectEdges {
                low_threshold,
                high_threshold,
            } => Ok(detect_edges(input, low_threshold, high_threshold)),
            Operation::Adjust {
                brightness,
                contrast,
            } => Ok(adjust_brightness_contrast(input, brightness, contrast)),
            Operation::Rotate { degrees } => rotate(input, degrees),
            Operation::Flip { axis } => flip(input, axis),
            Operation::ScaleBy { factor } => scale_by(input, factor),
            Operation::ResizeTo { width, height } => resize_to(input, width, height),
        }
    }
}
