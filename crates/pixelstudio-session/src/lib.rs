//! Pixelstudio Session - the editing state machine
//!
//! This crate owns the mutable half of the editor: one [`Session`] holds the
//! canonical image, a linear history of committed snapshots for undo, and a
//! redo stack, and exposes the narrow surface a presentation shell calls
//! into (`load`, `save`, `apply`, `preview`, `undo`, `redo`, `reset` plus
//! read-only queries). Pixel work is delegated to `pixelstudio-core`.
//!
//! A shell embeds the core like this:
//!
//! ```ignore
//! use pixelstudio_core::Operation;
//! use pixelstudio_session::Session;
//!
//! let mut session = Session::new();
//! session.load("photo.jpg")?;
//! session.apply(Operation::Grayscale)?;
//! session.apply(Operation::Blur { kernel_size: 5 })?;
//! session.undo()?;
//! session.save("photo_edited.png")?;
//! ```

mod error;
mod session;

pub use error::SessionError;
pub use session::{ImageInfo, Session, DEFAULT_HISTORY_LIMIT};

// Re-export the operation surface so shells depend on one crate.
pub use pixelstudio_core::{FlipAxis, Operation, Raster};
