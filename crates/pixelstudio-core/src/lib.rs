//! Pixelstudio Core - raster transforms and image I/O
//!
//! This crate provides the pure image-processing half of the editor: a
//! catalogue of deterministic raster-to-raster operations (grayscale, blur,
//! edge detection, brightness/contrast, rotation, flip, resize) and the
//! codec layer for loading and saving JPEG/PNG/BMP files.
//!
//! Nothing here holds state: every operation takes an input raster it never
//! mutates and returns a freshly materialized output. Sequencing edits into
//! an undoable timeline is the `pixelstudio-session` crate's job.

pub mod io;
pub mod luminance;
pub mod ops;
pub mod raster;

pub use ops::{FlipAxis, Operation, TransformError};
pub use raster::Raster;
