//! Live adapter for Amazon S3.

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tracing::debug;

use crate::error::DrawingError;
use crate::ports::object_store::{ObjectStore, UploadFuture, UploadRequest};

/// Object store that streams files into S3 with `PutObject`.
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// Create a store from shared AWS configuration.
    #[must_use]
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self { client: Client::new(config) }
    }
}

impl ObjectStore for S3ObjectStore {
    fn upload(&self, request: &UploadRequest) -> UploadFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let body = ByteStream::from_path(&request.path).await.map_err(|e| {
                DrawingError::Storage(format!("Failed to read {}: {e}", request.path.display()))
            })?;

            self.client
                .put_object()
                .bucket(&request.bucket)
                .key(&request.key)
                .content_type("image/png")
                .body(body)
                .send()
                .await
                .map_err(|e| DrawingError::Storage(DisplayErrorContext(&e).to_string()))?;

            debug!(bucket = %request.bucket, key = %request.key, "stored object");
            Ok(())
        })
    }
}
