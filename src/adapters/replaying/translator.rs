//! Replaying adapter for the `Translator` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::DrawingError;
use crate::ports::translator::{TranslateFuture, TranslateRequest, Translator};

/// Serves recorded translations from a cassette.
pub struct ReplayingTranslator {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingTranslator {
    /// Create a replaying translator backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl Translator for ReplayingTranslator {
    fn translate(&self, _request: &TranslateRequest) -> TranslateFuture<'_> {
        let output = next_output(&self.replayer, "translator", "translate");
        Box::pin(async move { replay_result::<String>(output).map_err(DrawingError::Translation) })
    }
}
