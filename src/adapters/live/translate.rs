//! Live adapter for Amazon Translate.

use aws_sdk_translate::error::DisplayErrorContext;
use aws_sdk_translate::Client;
use tracing::debug;

use crate::error::DrawingError;
use crate::ports::translator::{TranslateFuture, TranslateRequest, Translator};

/// Translator backed by the Amazon Translate `TranslateText` API.
pub struct AwsTranslator {
    client: Client,
}

impl AwsTranslator {
    /// Create a translator from shared AWS configuration.
    #[must_use]
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self { client: Client::new(config) }
    }
}

impl Translator for AwsTranslator {
    fn translate(&self, request: &TranslateRequest) -> TranslateFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let output = self
                .client
                .translate_text()
                .text(&request.text)
                .source_language_code(&request.source_language)
                .target_language_code(&request.target_language)
                .send()
                .await
                .map_err(|e| DrawingError::Translation(DisplayErrorContext(&e).to_string()))?;

            let translated = output.translated_text().to_string();
            debug!(
                source = %request.source_language,
                target = %request.target_language,
                chars = translated.chars().count(),
                "translated prompt"
            );
            Ok(translated)
        })
    }
}
