//! Recording adapter for the `ObjectStore` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::object_store::{ObjectStore, UploadFuture, UploadRequest};

/// Records uploads while delegating to an inner implementation.
pub struct RecordingObjectStore {
    inner: Box<dyn ObjectStore>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingObjectStore {
    /// Wrap `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn ObjectStore>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ObjectStore for RecordingObjectStore {
    fn upload(&self, request: &UploadRequest) -> UploadFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let result = self.inner.upload(&request).await;
            record_result(&self.recorder, "object_store", "upload", &request, &result);
            result
        })
    }
}
