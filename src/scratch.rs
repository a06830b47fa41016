//! Scratch file holding the generated image until it has been uploaded.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::DrawingError;

/// A file on local disk that is removed when the guard is dropped.
///
/// The path is shared by every invocation on the same filesystem, so an
/// existing file is overwritten.
#[derive(Debug)]
pub struct ScratchImage {
    path: PathBuf,
}

impl ScratchImage {
    /// Write `data` to `path`, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn write(path: &Path, data: &[u8]) -> Result<Self, DrawingError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Guard first, so a partially written file is removed too.
        let scratch = Self { path: path.to_path_buf() };
        std::fs::write(&scratch.path, data)?;
        debug!(path = %path.display(), bytes = data.len(), "wrote scratch image");
        Ok(scratch)
    }

    /// Location of the scratch file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchImage {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed scratch image"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "failed to remove scratch image"),
        }
    }
}
