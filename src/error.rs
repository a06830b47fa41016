//! Unified error type for bedrock-drawing.

use thiserror::Error;

/// Errors that can abort an invocation.
#[derive(Debug, Error)]
pub enum DrawingError {
    /// The translation service rejected the input or failed.
    #[error("Translation failed: {0}")]
    Translation(String),

    /// The image model failed or returned no usable artifact.
    #[error("Image generation failed: {0}")]
    Generation(String),

    /// The object could not be stored.
    #[error("Upload failed: {0}")]
    Storage(String),

    /// The callback could not be delivered.
    #[error("Callback failed: {0}")]
    Callback(String),

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// The invocation event could not be decoded.
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    /// A required setting is missing.
    #[error("Missing {setting}. Set {env_var} or add it to the config file.")]
    MissingSetting {
        /// Human-readable setting name.
        setting: String,
        /// The environment variable name.
        env_var: String,
    },

    /// The Lambda runtime loop exited with an error.
    #[error("Runtime error: {0}")]
    Runtime(String),
}
