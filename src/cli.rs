//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::Parser;

use crate::error::DrawingError;
use crate::event::InvocationRequest;

/// Korean text-to-image Lambda function.
///
/// Without `--event` the binary runs as an AWS Lambda custom runtime.
#[derive(Parser, Debug)]
#[command(name = "bedrock-drawing", version, about)]
pub struct Cli {
    /// Run one invocation locally with the JSON event in this file.
    #[arg(short, long)]
    pub event: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Read and decode the local event file, if one was given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid event.
    pub fn load_event(&self) -> Result<Option<InvocationRequest>, DrawingError> {
        let Some(ref path) = self.event else {
            return Ok(None);
        };
        let json = std::fs::read_to_string(path).map_err(|e| {
            DrawingError::InvalidEvent(format!("Failed to read {}: {e}", path.display()))
        })?;
        InvocationRequest::from_json(&json).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_lambda_mode() {
        let cli = Cli::parse_from(["bedrock-drawing"]);
        assert!(cli.event.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert!(cli.load_event().unwrap().is_none());
    }

    #[test]
    fn all_options() {
        let cli = Cli::parse_from([
            "bedrock-drawing",
            "--event",
            "event.json",
            "--config",
            "drawing.toml",
            "-v",
        ]);
        assert_eq!(cli.event, Some(PathBuf::from("event.json")));
        assert_eq!(cli.config.as_deref(), Some("drawing.toml"));
        assert!(cli.verbose);
    }

    #[test]
    fn event_file_loaded() {
        let dir = std::env::temp_dir().join("drawing_cli_event_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("event.json");
        std::fs::write(&path, r#"{"text_input": "고양이", "callback_url": "https://example.com/cb"}"#)
            .unwrap();

        let cli = Cli::parse_from(["bedrock-drawing", "-e", path.to_str().unwrap()]);
        let event = cli.load_event().unwrap().unwrap();
        assert_eq!(event.text_input, "고양이");
        assert_eq!(event.callback_url, "https://example.com/cb");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_event_file_errors() {
        let cli = Cli::parse_from(["bedrock-drawing", "--event", "/nonexistent/event.json"]);
        let err = cli.load_event().unwrap_err();
        assert!(err.to_string().contains("Failed to read /nonexistent/event.json"));
    }
}
