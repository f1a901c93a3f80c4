//! Wire types for the Gemini `generateContent` API
//!
//! Only the subset needed to request an image from a text prompt and to pull
//! the first inline image out of the response. The HTTP client lives behind
//! the `ssr` feature so the credential never reaches the browser bundle.

use serde::{Deserialize, Serialize};

use super::image_cache::ImageError;

/// MIME type assumed when the service omits one
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text prompt
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: None,
                parts: vec![Part::text(prompt)],
            }],
            generation_config: None,
        }
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: Option<&str>) -> Self {
        if let Some(ratio) = aspect_ratio.filter(|r| !r.is_empty()) {
            self.generation_config = Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: ratio.to_string(),
                }),
            });
        }
        self
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub aspect_ratio: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineImage>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }
}

/// Base64 image embedded directly in a response
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub data: String,
}

impl InlineImage {
    pub fn to_data_url(&self) -> String {
        let mime = if self.mime_type.is_empty() {
            DEFAULT_IMAGE_MIME
        } else {
            &self.mime_type
        };
        format!("data:{};base64,{}", mime, self.data)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// First inline image of the first candidate.
///
/// A candidate with no inline payload (text only, safety stop, empty parts)
/// is reported as [`ImageError::NoImagePayload`].
pub fn first_inline_image(response: &GenerateContentResponse) -> Result<&InlineImage, ImageError> {
    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|content| {
            content
                .parts
                .iter()
                .filter_map(|p| p.inline_data.as_ref())
                .find(|img| !img.data.is_empty())
        })
        .ok_or(ImageError::NoImagePayload)
}

#[cfg(feature = "ssr")]
pub use client::GeminiClient;

#[cfg(feature = "ssr")]
mod client {
    use super::*;
    use crate::core::config::Config;

    /// reqwest client for the generative image service
    #[derive(Clone)]
    pub struct GeminiClient {
        http: reqwest::Client,
        api_base: String,
        model: String,
        api_key: Option<String>,
        aspect_ratio: Option<String>,
    }

    impl GeminiClient {
        pub fn from_config(config: &Config) -> Self {
            Self {
                http: reqwest::Client::new(),
                api_base: config.image_api_base.trim_end_matches('/').to_string(),
                model: config.image_model.clone(),
                api_key: config.image_api_key.clone(),
                aspect_ratio: config.image_aspect_ratio.clone(),
            }
        }

        pub fn is_configured(&self) -> bool {
            self.api_key.as_ref().is_some_and(|k| !k.is_empty())
        }

        pub fn model(&self) -> &str {
            &self.model
        }

        fn endpoint(&self) -> String {
            format!("{}/models/{}:generateContent", self.api_base, self.model)
        }

        /// Request one image for `prompt`
        pub async fn generate(&self, prompt: &str) -> Result<InlineImage, ImageError> {
            let api_key = self
                .api_key
                .as_deref()
                .filter(|k| !k.is_empty())
                .ok_or(ImageError::MissingCredential)?;

            let body = GenerateContentRequest::from_prompt(prompt)
                .with_aspect_ratio(self.aspect_ratio.as_deref());

            let resp = self
                .http
                .post(self.endpoint())
                .header("x-goog-api-key", api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| {
                    tracing::error!("Failed to connect to image service: {}", e);
                    ImageError::Network(e.to_string())
                })?;

            let status = resp.status();
            tracing::info!("Image service response status: {}", status);

            let text = resp
                .text()
                .await
                .map_err(|e| ImageError::Network(e.to_string()))?;

            if !status.is_success() {
                tracing::warn!("Image service error response: {}", truncate(&text, 500));
                return Err(ImageError::Remote {
                    status: status.as_u16(),
                    message: truncate(&text, 200),
                });
            }

            let parsed: GenerateContentResponse =
                serde_json::from_str(&text).map_err(|e| ImageError::Malformed(e.to_string()))?;

            first_inline_image(&parsed).cloned()
        }
    }

    fn truncate(body: &str, max: usize) -> String {
        if body.len() <= max {
            return body.to_string();
        }
        let mut end = max;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, total {} bytes)", &body[..end], body.len())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use axum::{Json, Router, http::StatusCode, routing::post};

        async fn spawn_upstream(router: Router) -> String {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, router).await.unwrap();
            });
            format!("http://{}/v1beta", addr)
        }

        fn config_for(api_base: String, key: Option<&str>) -> Config {
            Config {
                image_api_key: key.map(str::to_string),
                image_api_base: api_base,
                image_model: "gemini-2.5-flash-image".to_string(),
                image_aspect_ratio: None,
            }
        }

        #[tokio::test]
        async fn test_generate_returns_first_inline_image() {
            let router = Router::new().route(
                "/v1beta/models/{call}",
                post(|| async {
                    Json(serde_json::json!({
                        "candidates": [{
                            "content": { "parts": [
                                { "text": "Here is your image" },
                                { "inlineData": { "mimeType": "image/png", "data": "AAAA" } },
                                { "inlineData": { "mimeType": "image/png", "data": "BBBB" } }
                            ]}
                        }]
                    }))
                }),
            );
            let base = spawn_upstream(router).await;
            let client = GeminiClient::from_config(&config_for(base, Some("test-key")));

            let image = client.generate("skyline").await.unwrap();
            assert_eq!(image.to_data_url(), "data:image/png;base64,AAAA");
        }

        #[tokio::test]
        async fn test_generate_maps_upstream_failure() {
            let router = Router::new().route(
                "/v1beta/models/{call}",
                post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            );
            let base = spawn_upstream(router).await;
            let client = GeminiClient::from_config(&config_for(base, Some("test-key")));

            let err = client.generate("skyline").await.unwrap_err();
            assert_eq!(
                err,
                ImageError::Remote {
                    status: 500,
                    message: "boom".to_string()
                }
            );
        }

        #[tokio::test]
        async fn test_generate_without_key_never_calls_upstream() {
            let client = GeminiClient::from_config(&config_for(
                "http://127.0.0.1:9/v1beta".to_string(),
                None,
            ));

            assert!(!client.is_configured());
            assert_eq!(
                client.generate("skyline").await.unwrap_err(),
                ImageError::MissingCredential
            );
        }

        #[test]
        fn test_truncate_respects_char_boundaries() {
            let body = "₹".repeat(10);
            let out = truncate(&body, 4);
            assert!(out.starts_with("₹"));
            assert!(out.contains("truncated"));
        }
    }
}
