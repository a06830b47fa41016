//! Translator port for machine translation services.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::DrawingError;

/// Language of incoming prompts.
pub const SOURCE_LANGUAGE: &str = "ko";
/// Language the image model is prompted in.
pub const TARGET_LANGUAGE: &str = "en";

/// A request to translate text between two languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    /// Text to translate.
    pub text: String,
    /// Source language code (e.g., `"ko"`).
    pub source_language: String,
    /// Target language code (e.g., `"en"`).
    pub target_language: String,
}

impl TranslateRequest {
    /// Korean to English translation of `text`.
    #[must_use]
    pub fn korean_to_english(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_language: SOURCE_LANGUAGE.to_string(),
            target_language: TARGET_LANGUAGE.to_string(),
        }
    }
}

/// Boxed future type returned by [`Translator::translate`].
pub type TranslateFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, DrawingError>> + Send + 'a>>;

/// Translates text via an external service.
pub trait Translator: Send + Sync {
    /// Translate the request's text, returning the translated text.
    fn translate(&self, request: &TranslateRequest) -> TranslateFuture<'_>;
}
