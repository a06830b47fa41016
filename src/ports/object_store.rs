//! Object store port for blob storage services.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::DrawingError;

/// A request to upload a local file as an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRequest {
    /// Local file to upload.
    pub path: PathBuf,
    /// Destination bucket.
    pub bucket: String,
    /// Destination object key.
    pub key: String,
}

/// Boxed future type returned by [`ObjectStore::upload`].
pub type UploadFuture<'a> = Pin<Box<dyn Future<Output = Result<(), DrawingError>> + Send + 'a>>;

/// Stores files in an external blob store.
pub trait ObjectStore: Send + Sync {
    /// Upload the file at `request.path` under `request.key`.
    fn upload(&self, request: &UploadRequest) -> UploadFuture<'_>;
}
