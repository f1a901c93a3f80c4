//! Image generation proxy
//!
//! Wire types shared by the page and the server, plus the axum routes that
//! forward generation requests to the image service. The credential stays on
//! the server, and only prompts from the page's own content catalog are
//! accepted.

use serde::{Deserialize, Serialize};

pub const GENERATE_PATH: &str = "/api/images/generate";
pub const STATUS_PATH: &str = "/api/images/status";

/// Request body for [`GENERATE_PATH`]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateImageRequest {
    pub key: String,
    pub prompt: String,
}

/// Response body for [`GENERATE_PATH`]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateImageResponse {
    pub key: String,
    pub data_url: String,
}

/// Response body for [`STATUS_PATH`]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub enabled: bool,
}

/// Error payload returned by the image routes
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    pub code: u16,
}

#[cfg(feature = "ssr")]
pub use server::{ImageApiError, ImageApiState, image_api_router};

#[cfg(feature = "ssr")]
mod server {
    use axum::{
        Json, Router,
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::{get, post},
    };
    use std::sync::Arc;

    use super::*;
    use crate::core::config::Config;
    use crate::core::content::visual_prompt;
    use crate::core::gemini::GeminiClient;
    use crate::core::image_cache::{ImageError, ImageServiceStatus};

    /// Shared state for the image routes
    #[derive(Clone)]
    pub struct ImageApiState {
        pub client: GeminiClient,
    }

    impl ImageApiState {
        pub fn from_config(config: &Config) -> Self {
            Self {
                client: GeminiClient::from_config(config),
            }
        }

        pub fn status(&self) -> ImageServiceStatus {
            ImageServiceStatus::from_enabled(self.client.is_configured())
        }
    }

    /// Image API error types
    #[derive(Debug, thiserror::Error)]
    pub enum ImageApiError {
        #[error("Unknown visual: {0}")]
        UnknownKey(String),

        #[error("Prompt does not match visual '{0}'")]
        PromptMismatch(String),

        #[error(transparent)]
        Generation(#[from] ImageError),
    }

    impl ImageApiError {
        fn status_code(&self) -> StatusCode {
            match self {
                ImageApiError::UnknownKey(_) => StatusCode::NOT_FOUND,
                ImageApiError::PromptMismatch(_) => StatusCode::BAD_REQUEST,
                ImageApiError::Generation(e) => match e {
                    ImageError::MissingCredential => StatusCode::SERVICE_UNAVAILABLE,
                    ImageError::Network(_) | ImageError::Remote { .. } => StatusCode::BAD_GATEWAY,
                    ImageError::NoImagePayload => StatusCode::UNPROCESSABLE_ENTITY,
                    ImageError::Malformed(_) => StatusCode::BAD_GATEWAY,
                },
            }
        }
    }

    impl IntoResponse for ImageApiError {
        fn into_response(self) -> Response {
            let status = self.status_code();
            let body = ErrorResponse {
                error: ErrorDetail {
                    message: self.to_string(),
                    code: status.as_u16(),
                },
            };

            (status, Json(body)).into_response()
        }
    }

    /// Create the image API router
    pub fn image_api_router(state: ImageApiState) -> Router {
        Router::new()
            .route(GENERATE_PATH, post(generate_handler))
            .route(STATUS_PATH, get(status_handler))
            .with_state(Arc::new(state))
    }

    async fn status_handler(State(state): State<Arc<ImageApiState>>) -> Json<StatusResponse> {
        Json(StatusResponse {
            enabled: state.status().is_enabled(),
        })
    }

    async fn generate_handler(
        State(state): State<Arc<ImageApiState>>,
        Json(request): Json<GenerateImageRequest>,
    ) -> Result<Json<GenerateImageResponse>, ImageApiError> {
        let prompt = visual_prompt(&request.key)
            .ok_or_else(|| ImageApiError::UnknownKey(request.key.clone()))?;

        if request.prompt != prompt {
            return Err(ImageApiError::PromptMismatch(request.key));
        }

        tracing::info!(
            "Image generation request: key={}, model={}",
            request.key,
            state.client.model()
        );

        let image = state.client.generate(prompt).await.map_err(|e| {
            tracing::warn!("Image generation for '{}' failed: {}", request.key, e);
            ImageApiError::from(e)
        })?;

        Ok(Json(GenerateImageResponse {
            key: request.key,
            data_url: image.to_data_url(),
        }))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::core::content::{HERO_KEY, HERO_PROMPT, META_SAMPLES};
        use axum::body::Body;
        use axum::http::Request;
        use tower::ServiceExt;

        fn state(key: Option<&str>, api_base: &str) -> ImageApiState {
            ImageApiState::from_config(&Config {
                image_api_key: key.map(str::to_string),
                image_api_base: api_base.to_string(),
                image_model: "gemini-2.5-flash-image".to_string(),
                image_aspect_ratio: None,
            })
        }

        fn generate(key: &str, prompt: &str) -> Request<Body> {
            let body = serde_json::to_string(&GenerateImageRequest {
                key: key.to_string(),
                prompt: prompt.to_string(),
            })
            .unwrap();
            Request::post(GENERATE_PATH)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap()
        }

        async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            serde_json::from_slice(&bytes).unwrap()
        }

        #[tokio::test]
        async fn test_status_reports_credential() {
            let app = image_api_router(state(None, "http://127.0.0.1:9"));
            let response = app
                .oneshot(Request::get(STATUS_PATH).body(Body::empty()).unwrap())
                .await
                .unwrap();
            let status: StatusResponse = body_json(response).await;
            assert!(!status.enabled);

            let app = image_api_router(state(Some("key"), "http://127.0.0.1:9"));
            let response = app
                .oneshot(Request::get(STATUS_PATH).body(Body::empty()).unwrap())
                .await
                .unwrap();
            let status: StatusResponse = body_json(response).await;
            assert!(status.enabled);
        }

        #[tokio::test]
        async fn test_generate_without_credential_is_unavailable() {
            let app = image_api_router(state(None, "http://127.0.0.1:9"));
            let response = app.oneshot(generate(HERO_KEY, HERO_PROMPT)).await.unwrap();

            assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
            let error: ErrorResponse = body_json(response).await;
            assert_eq!(error.error.code, 503);
        }

        #[tokio::test]
        async fn test_generate_rejects_unknown_key() {
            let app = image_api_router(state(Some("key"), "http://127.0.0.1:9"));
            let response = app.oneshot(generate("g1", "anything")).await.unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }

        #[tokio::test]
        async fn test_generate_rejects_foreign_prompt() {
            let app = image_api_router(state(Some("key"), "http://127.0.0.1:9"));
            let response = app
                .oneshot(generate("m1", "a cat wearing a hat"))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        #[tokio::test]
        async fn test_generate_proxies_to_upstream() {
            let upstream = Router::new().route(
                "/v1beta/models/{call}",
                post(|| async {
                    Json(serde_json::json!({
                        "candidates": [{ "content": { "parts": [
                            { "inlineData": { "mimeType": "image/png", "data": "AAAA" } }
                        ]}}]
                    }))
                }),
            );
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, upstream).await.unwrap();
            });

            let app = image_api_router(state(Some("key"), &format!("http://{}/v1beta", addr)));
            let sample = META_SAMPLES[0];
            let response = app.oneshot(generate(sample.id, sample.prompt)).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let body: GenerateImageResponse = body_json(response).await;
            assert_eq!(body.key, "m1");
            assert_eq!(body.data_url, "data:image/png;base64,AAAA");
        }

        #[tokio::test]
        async fn test_generate_without_payload_is_unprocessable() {
            let upstream = Router::new().route(
                "/v1beta/models/{call}",
                post(|| async {
                    Json(serde_json::json!({
                        "candidates": [{ "content": { "parts": [{ "text": "I cannot draw that" }] } }]
                    }))
                }),
            );
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, upstream).await.unwrap();
            });

            let app = image_api_router(state(Some("key"), &format!("http://{}/v1beta", addr)));
            let response = app.oneshot(generate(HERO_KEY, HERO_PROMPT)).await.unwrap();

            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }
}
