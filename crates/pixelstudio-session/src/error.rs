//! Error surface of the editing session.

use pixelstudio_core::io::{DecodeError, EncodeError};
use pixelstudio_core::TransformError;
use thiserror::Error;

/// Errors returned by [`Session`](crate::Session) operations.
///
/// All of these are recoverable conditions for the caller to surface to the
/// user: a failed call leaves the session exactly as it was.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A mutating operation was called before any image was loaded.
    #[error("no image is loaded")]
    NoImageLoaded,

    /// Undo was called with nothing above the load floor.
    #[error("nothing to undo")]
    NothingToUndo,

    /// Redo was called without a preceding undo.
    #[error("nothing to redo")]
    NothingToRedo,

    /// The file could not be read or decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The target file or format could not be written.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// An operation rejected its parameters.
    #[error(transparent)]
    Transform(#[from] TransformError),
}
