//! Live adapter for Stable Diffusion XL on Amazon Bedrock.

use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DrawingError;
use crate::ports::image_generator::{GenerateFuture, GeneratedImage, ImageGenerator, ImageRequest};

/// Image generator that invokes a Stability model through `InvokeModel`.
pub struct BedrockGenerator {
    client: Client,
}

impl BedrockGenerator {
    /// Create a generator from shared AWS configuration.
    #[must_use]
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self { client: Client::new(config) }
    }
}

impl ImageGenerator for BedrockGenerator {
    fn generate(&self, request: &ImageRequest) -> GenerateFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let body = serde_json::to_vec(&StabilityRequest::from(&request))
                .map_err(|e| DrawingError::Generation(format!("Failed to encode request: {e}")))?;

            let output = self
                .client
                .invoke_model()
                .model_id(&request.model_id)
                .content_type("application/json")
                .accept("application/json")
                .body(Blob::new(body))
                .send()
                .await
                .map_err(|e| DrawingError::Generation(DisplayErrorContext(&e).to_string()))?;

            let data = decode_artifact(output.body().as_ref())?;
            Ok(GeneratedImage { data, mime_type: "image/png".to_string() })
        })
    }
}

/// Decode the first image artifact of a Stability response body.
///
/// # Errors
///
/// Returns an error if the body is not a Stability response, carries no
/// artifact, or the artifact is not valid base64.
pub fn decode_artifact(body: &[u8]) -> Result<Vec<u8>, DrawingError> {
    let parsed: StabilityResponse = serde_json::from_slice(body)
        .map_err(|e| DrawingError::Generation(format!("Failed to parse response: {e}")))?;

    let artifact = parsed.artifacts.into_iter().next().ok_or_else(|| {
        let text = String::from_utf8_lossy(body);
        let truncated = if text.chars().count() > 500 {
            format!("{}...", text.chars().take(500).collect::<String>())
        } else {
            text.into_owned()
        };
        DrawingError::Generation(format!("No artifacts in response. Body: {truncated}"))
    })?;

    debug!(
        seed = ?artifact.seed,
        finish_reason = artifact.finish_reason.as_deref().unwrap_or("unknown"),
        "received image artifact"
    );

    base64::engine::general_purpose::STANDARD
        .decode(&artifact.base64)
        .map_err(|e| DrawingError::Generation(format!("Failed to decode base64: {e}")))
}

// --- Stability API wire types ---

#[derive(Debug, Serialize)]
struct StabilityRequest<'a> {
    text_prompts: Vec<TextPrompt<'a>>,
    style_preset: &'a str,
    seed: u32,
    cfg_scale: u32,
    steps: u32,
}

#[derive(Debug, Serialize)]
struct TextPrompt<'a> {
    text: &'a str,
}

impl<'a> From<&'a ImageRequest> for StabilityRequest<'a> {
    fn from(request: &'a ImageRequest) -> Self {
        Self {
            text_prompts: vec![TextPrompt { text: &request.prompt }],
            style_preset: &request.style_preset,
            seed: request.seed,
            cfg_scale: request.cfg_scale,
            steps: request.steps,
        }
    }
}

#[derive(Deserialize)]
struct StabilityResponse {
    #[serde(default)]
    artifacts: Vec<StabilityArtifact>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StabilityArtifact {
    base64: String,
    seed: Option<u64>,
    finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn image_request() -> ImageRequest {
        ImageRequest {
            model_id: "stability.stable-diffusion-xl-v1".into(),
            prompt: "Hello".into(),
            style_preset: "photographic".into(),
            seed: 4_294_967_295,
            cfg_scale: 15,
            steps: 50,
        }
    }

    #[test]
    fn request_body_shape() {
        let request = image_request();
        let body = serde_json::to_value(StabilityRequest::from(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "text_prompts": [{"text": "Hello"}],
                "style_preset": "photographic",
                "seed": 4_294_967_295_u32,
                "cfg_scale": 15,
                "steps": 50,
            })
        );
    }

    #[test]
    fn decodes_first_artifact() {
        let body = json!({
            "result": "success",
            "artifacts": [
                {"seed": 7, "base64": "iVBORw==", "finishReason": "SUCCESS"},
                {"seed": 8, "base64": "AAAA", "finishReason": "SUCCESS"}
            ]
        });
        let data = decode_artifact(body.to_string().as_bytes()).unwrap();
        assert_eq!(data, vec![0x89, 0x50, 0x4E, 0x47]);
    }

    #[test]
    fn empty_artifacts_is_generation_error() {
        let body = json!({"result": "success", "artifacts": []});
        let err = decode_artifact(body.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, DrawingError::Generation(_)));
        assert!(err.to_string().contains("No artifacts"));
    }

    #[test]
    fn missing_artifacts_is_generation_error() {
        let err = decode_artifact(br#"{"message": "throttled"}"#).unwrap_err();
        assert!(err.to_string().contains("No artifacts"));
        assert!(err.to_string().contains("throttled"));
    }

    #[test]
    fn malformed_base64_is_generation_error() {
        let body = json!({"artifacts": [{"base64": "%%%not-base64%%%"}]});
        let err = decode_artifact(body.to_string().as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Failed to decode base64"));
    }

    #[test]
    fn non_json_body_is_generation_error() {
        let err = decode_artifact(b"<html>").unwrap_err();
        assert!(err.to_string().contains("Failed to parse response"));
    }
}
