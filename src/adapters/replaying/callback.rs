//! Replaying adapter for the `CallbackSender` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::DrawingError;
use crate::ports::callback::{CallbackFuture, CallbackReceipt, CallbackRequest, CallbackSender};

/// Serves recorded callback receipts from a cassette.
pub struct ReplayingCallbackSender {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingCallbackSender {
    /// Create a replaying sender backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl CallbackSender for ReplayingCallbackSender {
    fn send(&self, _request: &CallbackRequest) -> CallbackFuture<'_> {
        let output = next_output(&self.replayer, "callback", "send");
        Box::pin(async move {
            replay_result::<CallbackReceipt>(output).map_err(DrawingError::Callback)
        })
    }
}
