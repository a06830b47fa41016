//! Recording adapter for the `CallbackSender` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::callback::{CallbackFuture, CallbackRequest, CallbackSender};

/// Records callback deliveries while delegating to an inner implementation.
pub struct RecordingCallbackSender {
    inner: Box<dyn CallbackSender>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingCallbackSender {
    /// Wrap `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn CallbackSender>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl CallbackSender for RecordingCallbackSender {
    fn send(&self, request: &CallbackRequest) -> CallbackFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let result = self.inner.send(&request).await;
            record_result(&self.recorder, "callback", "send", &request, &result);
            result
        })
    }
}
