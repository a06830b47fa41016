//! Recording adapter for the `Translator` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::translator::{TranslateFuture, TranslateRequest, Translator};

/// Records translations while delegating to an inner implementation.
pub struct RecordingTranslator {
    inner: Box<dyn Translator>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingTranslator {
    /// Wrap `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn Translator>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Translator for RecordingTranslator {
    fn translate(&self, request: &TranslateRequest) -> TranslateFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let result = self.inner.translate(&request).await;
            record_result(&self.recorder, "translator", "translate", &request, &result);
            result
        })
    }
}
