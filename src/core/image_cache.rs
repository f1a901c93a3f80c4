//! Session-scoped cache for generated ad visuals
//!
//! Every visual on the page (the hero background and one per Meta ad sample)
//! is identified by a string key. For each key the cache guarantees:
//! - at most one generation request in flight (single-flight)
//! - once an image is stored, no further requests are issued
//! - a failed request clears the loading flag and leaves the key retryable
//!
//! The cache itself is plain data. [`ensure_image`] drives one acquisition
//! against any [`CacheHandle`] and [`ImageGenerator`], which lets the same
//! code run against a reactive store in the browser and a `RefCell` in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

/// Notice shown to visitors when a visual could not be generated
pub const GENERATION_FAILED_NOTICE: &str =
    "Failed to generate visuals. Please check API configuration.";

/// Errors produced while acquiring a generated image
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("Image generation is not configured")]
    MissingCredential,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Image service returned {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Response contained no inline image payload")]
    NoImagePayload,

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Whether the site has a usable credential for the image service
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageServiceStatus {
    Enabled,
    #[default]
    Disabled,
}

impl ImageServiceStatus {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }

    /// Parse the value rendered into the page; anything unknown disables generation
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "enabled" => Self::Enabled,
            _ => Self::Disabled,
        }
    }
}

/// One request for a generated image
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub key: String,
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            prompt: prompt.into(),
        }
    }
}

/// Cache entry for a single key
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheEntry {
    pub loading: bool,
    /// `data:` URL of the image, set at most once
    pub data: Option<String>,
}

/// What a view should render for a key
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageStatus {
    /// Nothing requested yet, or the last attempt failed
    Empty,
    Loading,
    Ready(String),
}

impl ImageStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, ImageStatus::Loading)
    }

    pub fn data_url(&self) -> Option<&str> {
        match self {
            ImageStatus::Ready(url) => Some(url),
            _ => None,
        }
    }
}

/// Single-flight, never-evicting image cache
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageCache {
    entries: HashMap<String, CacheEntry>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the right to issue a request for `key`.
    ///
    /// Returns `false` when the key already holds data or a request is in
    /// flight; otherwise marks the entry loading and returns `true`.
    pub fn try_begin(&mut self, key: &str) -> bool {
        let entry = self.entries.entry(key.to_string()).or_default();
        if entry.loading || entry.data.is_some() {
            return false;
        }
        entry.loading = true;
        true
    }

    /// Record the outcome of a request started with [`try_begin`](Self::try_begin).
    ///
    /// The first successful payload wins; later ones are ignored.
    pub fn complete(&mut self, key: &str, result: Result<String, ImageError>) {
        let entry = self.entries.entry(key.to_string()).or_default();
        entry.loading = false;
        if let Ok(data) = result
            && entry.data.is_none()
        {
            entry.data = Some(data);
        }
    }

    /// Drop an in-flight claim without storing anything
    pub fn abandon(&mut self, key: &str) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.loading = false;
        }
    }

    pub fn entry(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn status(&self, key: &str) -> ImageStatus {
        match self.entries.get(key) {
            Some(CacheEntry { loading: true, .. }) => ImageStatus::Loading,
            Some(CacheEntry {
                data: Some(data), ..
            }) => ImageStatus::Ready(data.clone()),
            _ => ImageStatus::Empty,
        }
    }

    pub fn is_loading(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|e| e.loading)
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|e| e.data.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Access to a cache that may live behind interior mutability.
///
/// Returns `None` when the backing store no longer exists (for example a
/// reactive signal whose owner was disposed).
pub trait CacheHandle {
    /// Read without notifying anyone
    fn read_cache<R>(&self, f: impl FnOnce(&ImageCache) -> R) -> Option<R>;

    fn with_cache<R>(&self, f: impl FnOnce(&mut ImageCache) -> R) -> Option<R>;
}

impl CacheHandle for RefCell<ImageCache> {
    fn read_cache<R>(&self, f: impl FnOnce(&ImageCache) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn with_cache<R>(&self, f: impl FnOnce(&mut ImageCache) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Source of generated images
#[allow(async_fn_in_trait)]
pub trait ImageGenerator {
    /// Generate an image for the request and return it as a `data:` URL
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ImageError>;
}

/// Cancellation handle tied to the lifetime of the view that asked for an image.
///
/// Responses that arrive after [`cancel`](Self::cancel) are discarded.
#[derive(Clone, Debug, Default)]
pub struct ViewLifetime {
    cancelled: Arc<AtomicBool>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Result of a single [`ensure_image`] call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// No credential configured; nothing was requested
    Disabled,
    /// The key already holds an image
    Cached,
    /// Another request for the key is in flight
    InFlight,
    /// A request was issued and its image stored
    Stored,
    /// A request was issued and failed; the key stays retryable
    Failed(ImageError),
    /// The requesting view or the cache itself went away; nothing was stored
    Discarded,
}

/// Make sure an image exists (or is being fetched) for `request.key`.
///
/// Issues at most one request per key at a time and never re-requests a key
/// that already holds data.
pub async fn ensure_image<S, G>(
    store: &S,
    generator: &G,
    service: ImageServiceStatus,
    lifetime: &ViewLifetime,
    request: GenerationRequest,
) -> EnsureOutcome
where
    S: CacheHandle,
    G: ImageGenerator,
{
    if !service.is_enabled() {
        return EnsureOutcome::Disabled;
    }

    let key = request.key.as_str();

    // Cached and in-flight keys are answered from a read so that watchers of
    // the cache are only notified when a claim actually changes it
    let busy = store.read_cache(|cache| {
        if cache.data(key).is_some() {
            Some(EnsureOutcome::Cached)
        } else if cache.is_loading(key) {
            Some(EnsureOutcome::InFlight)
        } else {
            None
        }
    });

    match busy {
        Some(Some(outcome)) => return outcome,
        Some(None) => {}
        None => return EnsureOutcome::Discarded,
    }

    match store.with_cache(|cache| cache.try_begin(key)) {
        Some(true) => {}
        Some(false) => return EnsureOutcome::InFlight,
        None => return EnsureOutcome::Discarded,
    }

    let result = generator.generate(&request).await;

    if lifetime.is_cancelled() {
        store.with_cache(|cache| cache.abandon(key));
        return EnsureOutcome::Discarded;
    }

    let outcome = match &result {
        Ok(_) => EnsureOutcome::Stored,
        Err(e) => {
            leptos::logging::warn!("Image generation for '{}' failed: {}", key, e);
            EnsureOutcome::Failed(e.clone())
        }
    };

    match store.with_cache(|cache| cache.complete(key, result)) {
        Some(()) => outcome,
        None => EnsureOutcome::Discarded,
    }
}
