//! Replaying adapter for the `ObjectStore` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::DrawingError;
use crate::ports::object_store::{ObjectStore, UploadFuture, UploadRequest};

/// Acknowledges uploads with recorded outcomes; nothing leaves the machine.
pub struct ReplayingObjectStore {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingObjectStore {
    /// Create a replaying store backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl ObjectStore for ReplayingObjectStore {
    fn upload(&self, _request: &UploadRequest) -> UploadFuture<'_> {
        let output = next_output(&self.replayer, "object_store", "upload");
        Box::pin(async move { replay_result::<()>(output).map_err(DrawingError::Storage) })
    }
}
