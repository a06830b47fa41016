//! Live adapter that posts callbacks with `reqwest`.

use reqwest::Client;
use tracing::{debug, warn};

use crate::ports::callback::{CallbackFuture, CallbackReceipt, CallbackRequest, CallbackSender};

/// Callback sender that posts the JSON body over HTTP.
///
/// Non-success statuses are logged and returned in the receipt; only
/// transport failures are errors.
pub struct HttpCallbackSender {
    client: Client,
}

impl HttpCallbackSender {
    /// Create a sender with a default HTTP client.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for HttpCallbackSender {
    fn default() -> Self {
        Self::new()
    }
}

impl CallbackSender for HttpCallbackSender {
    fn send(&self, request: &CallbackRequest) -> CallbackFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let response = self.client.post(&request.url).json(&request.body).send().await?;

            let status = response.status();
            if status.is_success() {
                debug!(status = status.as_u16(), "callback accepted");
            } else {
                warn!(status = status.as_u16(), url = %request.url, "callback target returned an error status");
            }
            Ok(CallbackReceipt { status: status.as_u16() })
        })
    }
}
