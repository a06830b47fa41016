//! Invocation event and the chat-bot callback envelope.

use serde::{Deserialize, Serialize};

use crate::error::DrawingError;

/// Alt text attached to every generated image.
pub const IMAGE_ALT_TEXT: &str = "text-to-image";

/// One text-to-image request delivered by the chat-bot skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationRequest {
    /// Korean prompt text.
    pub text_input: String,
    /// URL that receives the finished image.
    pub callback_url: String,
}

impl InvocationRequest {
    /// Decode an invocation event from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON lacks either field.
    pub fn from_json(json: &str) -> Result<Self, DrawingError> {
        serde_json::from_str(json).map_err(|e| DrawingError::InvalidEvent(e.to_string()))
    }
}

/// Skill response posted to the callback URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    /// Envelope schema version, always `"2.0"`.
    pub version: String,
    /// Whether the platform should expect another callback.
    pub use_callback: bool,
    /// Rendered outputs.
    pub template: SkillTemplate,
}

/// Output list of a skill response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTemplate {
    /// Outputs shown to the user, in order.
    pub outputs: Vec<SkillOutput>,
}

/// A single rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillOutput {
    /// Image card.
    pub simple_image: SimpleImage,
}

/// Image card referencing a public URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleImage {
    /// Public image URL.
    pub image_url: String,
    /// Alternative text.
    pub alt_text: String,
}

impl SkillResponse {
    /// Build the single-image envelope for the given public URL.
    #[must_use]
    pub fn image(image_url: impl Into<String>) -> Self {
        Self {
            version: "2.0".to_string(),
            use_callback: false,
            template: SkillTemplate {
                outputs: vec![SkillOutput {
                    simple_image: SimpleImage {
                        image_url: image_url.into(),
                        alt_text: IMAGE_ALT_TEXT.to_string(),
                    },
                }],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_event() {
        let request = InvocationRequest::from_json(
            r#"{"text_input": "안녕하세요", "callback_url": "https://example.com/cb"}"#,
        )
        .unwrap();
        assert_eq!(request.text_input, "안녕하세요");
        assert_eq!(request.callback_url, "https://example.com/cb");
    }

    #[test]
    fn event_missing_callback_url() {
        let err = InvocationRequest::from_json(r#"{"text_input": "안녕"}"#).unwrap_err();
        assert!(err.to_string().contains("callback_url"));
    }

    #[test]
    fn envelope_matches_skill_schema() {
        let body = SkillResponse::image("https://mybucket.s3.us-east-1.amazonaws.com/a.png");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "version": "2.0",
                "useCallback": false,
                "template": {
                    "outputs": [{
                        "simpleImage": {
                            "imageUrl": "https://mybucket.s3.us-east-1.amazonaws.com/a.png",
                            "altText": "text-to-image"
                        }
                    }]
                }
            })
        );
    }
}
