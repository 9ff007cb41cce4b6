//! The editing session: canonical image state plus linear undo/redo history.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pixelstudio_core::io::{read_raster, write_raster};
use pixelstudio_core::{Operation, Raster};
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Default bound on the number of committed snapshots kept for undo.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Summary of the current image, returned by mutating operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// An interactive editing session over a single image.
///
/// The session owns every piece of mutable editing state and is the only
/// thing allowed to touch it: a shell loads a file, applies operations,
/// previews slider values, undoes and redoes, and saves, always through
/// this surface, never by reaching into the stacks.
///
/// Two edit modes exist:
///
/// - **Committed** ([`apply`](Session::apply)): the result is pushed onto the
///   history as a new immutable snapshot and the redo stack is cleared.
/// - **Live preview** ([`preview`](Session::preview)): the displayed image is
///   recomputed from the *last committed snapshot* with the live parameter
///   value. History is untouched, and because every frame starts from the
///   committed snapshot rather than the previous frame, dragging a slider
///   from 0 to 50 and back to 0 lands on exactly the committed bytes. A
///   preview never auto-commits; the shell commits the final value with an
///   explicit `apply`.
///
/// Every call runs synchronously on the calling thread; embeddings are
/// expected to issue at most one call at a time.
#[derive(Debug)]
pub struct Session {
    /// The image as first loaded; never mutated, backs `reset`.
    original: Option<Arc<Raster>>,
    /// The displayed/exported image; equals the last committed snapshot
    /// except while a live preview is showing.
    current: Option<Arc<Raster>>,
    /// Committed snapshots, oldest first. Non-empty once loaded.
    history: Vec<Arc<Raster>>,
    /// Snapshots available for redo; cleared by every committed edit.
    future: Vec<Arc<Raster>>,
    /// Last path used to load or save.
    source_path: Option<PathBuf>,
    /// Bound on history growth; the oldest snapshot is evicted past this.
    history_limit: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an empty session with the default history bound.
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty session keeping at most `limit` committed snapshots.
    ///
    /// A limit below 1 is raised to 1, since the history floor (the loaded
    /// image) is always retained.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            original: None,
            current: None,
            history: Vec::new(),
            future: Vec::new(),
            source_path: None,
            history_limit: limit.max(1),
        }
    }

    // ---------- File operations ----------

    /// Load the raster at `path`, replacing all session state.
    ///
    /// On success the history collapses to a single entry (the loaded image)
    /// and the redo stack empties. On failure the session is left exactly as
    /// it was; a botched load never destroys the image being edited.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<ImageInfo, SessionError> {
        let path = path.as_ref();
        let raster = Arc::new(read_raster(path)?);

        tracing::debug!(
            path = %path.display(),
            width = raster.width,
            height = raster.height,
            "image loaded"
        );

        self.original = Some(raster.clone());
        self.current = Some(raster.clone());
        self.history = vec![raster];
        self.future.clear();
        self.source_path = Some(path.to_path_buf());
        Ok(self.current_info())
    }

    /// Write the current image to `path`, choosing the codec by extension.
    ///
    /// History is untouched; the previewed pixels are what gets written when
    /// a live preview is showing. The session remembers `path` as its new
    /// source path on success.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let path = path.as_ref();
        let current = self.current.as_ref().ok_or(SessionError::NoImageLoaded)?;
        write_raster(path, current)?;

        tracing::debug!(path = %path.display(), "image saved");
        self.source_path = Some(path.to_path_buf());
        Ok(())
    }

    // ---------- Edit operations ----------

    /// Apply `op` as a committed edit.
    ///
    /// The operation runs against the last committed snapshot (never against
    /// a live preview frame), the result becomes a new snapshot, and the
    /// redo stack is cleared. On any error nothing changes.
    pub fn apply(&mut self, op: Operation) -> Result<ImageInfo, SessionError> {
        let base = self.history.last().ok_or(SessionError::NoImageLoaded)?;
        let next = Arc::new(op.apply(base)?);

        tracing::debug!(?op, depth = self.history.len() + 1, "operation committed");

        self.history.push(next.clone());
        self.future.clear();
        self.current = Some(next);
        self.trim_history();
        Ok(self.current_info())
    }

    /// Recompute the displayed image from the last committed snapshot with a
    /// live parameter value, without committing anything.
    ///
    /// Returns the preview frame. History and the redo stack are untouched;
    /// the next committed action (apply, undo, redo, reset, load) replaces
    /// the frame.
    pub fn preview(&mut self, op: Operation) -> Result<Arc<Raster>, SessionError> {
        let base = self.history.last().ok_or(SessionError::NoImageLoaded)?;
        let frame = Arc::new(op.apply(base)?);
        self.current = Some(frame.clone());
        Ok(frame)
    }

    /// Step back to the previous committed snapshot.
    ///
    /// The load floor is never undoable: with a single history entry this
    /// fails with `NothingToUndo` and changes nothing.
    pub fn undo(&mut self) -> Result<ImageInfo, SessionError> {
        if self.current.is_none() {
            return Err(SessionError::NoImageLoaded);
        }
        if self.history.len() <= 1 {
            return Err(SessionError::NothingToUndo);
        }

        if let Some(popped) = self.history.pop() {
            self.future.push(popped);
        }
        if let Some(top) = self.history.last() {
            self.current = Some(top.clone());
        }

        tracing::debug!(
            depth = self.history.len(),
            redoable = self.future.len(),
            "undo"
        );
        Ok(self.current_info())
    }

    /// Reapply the most recently undone snapshot.
    ///
    /// Only valid while the redo stack is non-empty, i.e. after `undo` and
    /// before the next committed edit.
    pub fn redo(&mut self) -> Result<ImageInfo, SessionError> {
        if self.current.is_none() {
            return Err(SessionError::NoImageLoaded);
        }
        let restored = self.future.pop().ok_or(SessionError::NothingToRedo)?;
        self.history.push(restored.clone());
        self.current = Some(restored);

        tracing::debug!(
            depth = self.history.len(),
            redoable = self.future.len(),
            "redo"
        );
        Ok(self.current_info())
    }

    /// Discard every edit and return to the image as first loaded.
    ///
    /// The history collapses to the original snapshot and the redo stack
    /// empties.
    pub fn reset(&mut self) -> Result<ImageInfo, SessionError> {
        let original = self.original.clone().ok_or(SessionError::NoImageLoaded)?;
        self.history = vec![original.clone()];
        self.future.clear();
        self.current = Some(original);

        tracing::debug!("reset to original");
        Ok(self.current_info())
    }

    // ---------- Queries ----------

    /// The displayed image, if any.
    pub fn current_image(&self) -> Option<&Raster> {
        self.current.as_deref()
    }

    /// Width and height of the displayed image.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.current.as_ref().map(|r| r.dimensions())
    }

    /// File-name component of the source path.
    pub fn filename(&self) -> Option<String> {
        self.source_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }

    /// Last path used to load or save.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Whether an image is loaded.
    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// Whether undo would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.len() > 1
    }

    /// Whether redo would succeed.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of edits that can be undone.
    pub fn undo_steps(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    /// Number of edits that can be redone.
    pub fn redo_steps(&self) -> usize {
        self.future.len()
    }

    // ---------- Internals ----------

    fn current_info(&self) -> ImageInfo {
        let (width, height) = self.dimensions().unwrap_or((0, 0));
        ImageInfo { width, height }
    }

    /// Enforce the history bound by evicting the oldest snapshots.
    ///
    /// `reset` stays exact regardless, because the original is held outside
    /// the stack.
    fn trim_history(&mut self) {
        while self.history.len() > self.history_limit {
            self.history.remove(0);
            tracing::debug!(limit = self.history_limit, "oldest snapshot evicted");
        }
    }
}
