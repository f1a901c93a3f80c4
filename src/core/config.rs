//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Variables checked for the image service credential, in priority order.
/// Deployment platforms name the key differently; the first non-empty one wins.
pub const CREDENTIAL_VARS: [&str; 3] = ["API_KEY", "GEMINI_API_KEY", "VITE_API_KEY"];

pub const DEFAULT_IMAGE_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the generative image service
    pub image_api_key: Option<String>,

    /// Base URL of the generative image API
    /// Example: https://generativelanguage.googleapis.com/v1beta
    pub image_api_base: String,

    /// Model used for image generation
    pub image_model: String,

    /// Optional aspect ratio passed to the image service, e.g. "16:9"
    pub image_aspect_ratio: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            image_api_key: resolve_credential(&lookup),
            image_api_base: non_empty("IMAGE_API_BASE")
                .unwrap_or_else(|| DEFAULT_IMAGE_API_BASE.to_string()),
            image_model: non_empty("IMAGE_MODEL").unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            image_aspect_ratio: non_empty("IMAGE_ASPECT_RATIO"),
        }
    }

    /// Check if the image service credential is configured
    pub fn has_image_api_key(&self) -> bool {
        self.image_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }
}

/// First non-empty credential among [`CREDENTIAL_VARS`]
pub fn resolve_credential(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    CREDENTIAL_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}
