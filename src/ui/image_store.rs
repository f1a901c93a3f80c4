//! Image store context
//!
//! Provides:
//! - ImageStore, the page-scoped owner of the generated-image cache
//! - Detection of whether the server has an image credential
//! - The HTTP generator that calls the server proxy from the browser
//!
//! The store is provided by the landing page and read by the views that show
//! generated visuals. Requests go through [`ensure_image`], so every key is
//! fetched at most once at a time and never again once it has data.

use leptos::prelude::*;

use crate::core::{
    CacheHandle, EnsureOutcome, GENERATION_FAILED_NOTICE, GenerationRequest, ImageCache,
    ImageGenerator, ImageServiceStatus, ImageStatus, ViewLifetime, ensure_image,
};

/// `<meta name=...>` carrying the image service status from server to browser
pub const IMAGE_SERVICE_META: &str = "ad-visuals";

impl CacheHandle for RwSignal<ImageCache> {
    fn read_cache<R>(&self, f: impl FnOnce(&ImageCache) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn with_cache<R>(&self, f: impl FnOnce(&mut ImageCache) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Reactive store for generated images
#[derive(Clone, Copy)]
pub struct ImageStore {
    cache: RwSignal<ImageCache>,
    service: ImageServiceStatus,
    /// Visitor-facing notice after a failed generation
    notice: RwSignal<Option<&'static str>>,
}

impl ImageStore {
    pub fn new(service: ImageServiceStatus) -> Self {
        Self {
            cache: RwSignal::new(ImageCache::new()),
            service,
            notice: RwSignal::new(None),
        }
    }

    pub fn service(&self) -> ImageServiceStatus {
        self.service
    }

    /// Current status of `key` (tracked)
    pub fn status(&self, key: &str) -> ImageStatus {
        self.cache.with(|cache| cache.status(key))
    }

    /// Number of keys that have ever been requested
    pub fn requested_keys(&self) -> usize {
        self.cache.with_untracked(|cache| cache.len())
    }

    /// Failure notice, if any generation failed (tracked)
    pub fn notice(&self) -> Option<&'static str> {
        self.notice.get()
    }

    /// Start fetching `request.key` unless it is cached, in flight, or the
    /// service is disabled. Returns immediately.
    pub fn ensure(&self, request: GenerationRequest, lifetime: ViewLifetime) {
        if !self.service.is_enabled() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let store = *self;
            leptos::task::spawn_local(async move {
                store.acquire(&HttpImageGenerator, request, lifetime).await;
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, lifetime);
        }
    }

    /// Run one acquisition against `generator`. Any failure, for any key,
    /// raises the page notice.
    pub async fn acquire<G: ImageGenerator>(
        &self,
        generator: &G,
        request: GenerationRequest,
        lifetime: ViewLifetime,
    ) -> EnsureOutcome {
        let outcome = ensure_image(&self.cache, generator, self.service, &lifetime, request).await;

        if let EnsureOutcome::Failed(_) = outcome {
            let _ = self.notice.try_set(Some(GENERATION_FAILED_NOTICE));
        }
        outcome
    }
}

/// Calls the server proxy at [`GENERATE_PATH`](crate::core::image_api::GENERATE_PATH)
#[cfg(feature = "hydrate")]
pub struct HttpImageGenerator;

#[cfg(feature = "hydrate")]
impl ImageGenerator for HttpImageGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<String, crate::core::ImageError> {
        use crate::core::ImageError;
        use crate::core::image_api::{
            ErrorResponse, GENERATE_PATH, GenerateImageRequest, GenerateImageResponse,
        };
        use gloo_net::http::Request;

        let body = GenerateImageRequest {
            key: request.key.clone(),
            prompt: request.prompt.clone(),
        };

        let response = Request::post(GENERATE_PATH)
            .json(&body)
            .map_err(|e| ImageError::Malformed(e.to_string()))?
            .send()
            .await
            .map_err(|e| ImageError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = match response.json::<ErrorResponse>().await {
                Ok(err) => err.error.message,
                Err(_) => response.status_text(),
            };
            return Err(ImageError::Remote { status, message });
        }

        let body: GenerateImageResponse = response
            .json()
            .await
            .map_err(|e| ImageError::Malformed(e.to_string()))?;

        Ok(body.data_url)
    }
}

/// Whether the server has an image credential.
///
/// On the server this comes from context; in the browser it is read back
/// from the `<meta>` tag the server rendered, so no request is needed.
pub fn detect_image_service() -> ImageServiceStatus {
    #[cfg(feature = "hydrate")]
    {
        let selector = format!("meta[name=\"{}\"]", IMAGE_SERVICE_META);
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&selector).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"))
            .map(|content| ImageServiceStatus::parse(&content))
            .unwrap_or_default()
    }

    #[cfg(not(feature = "hydrate"))]
    {
        use_context::<ImageServiceStatus>().unwrap_or_default()
    }
}

/// Provide the image store to the page
pub fn provide_image_store() -> ImageStore {
    let store = ImageStore::new(detect_image_service());
    provide_context(store);
    store
}

/// Get the image store from context
pub fn use_image_store() -> ImageStore {
    expect_context::<ImageStore>()
}

/// Cancellation handle that fires when the calling view is cleaned up
pub fn use_view_lifetime() -> ViewLifetime {
    let lifetime = ViewLifetime::new();
    let handle = lifetime.clone();
    on_cleanup(move || handle.cancel());
    lifetime
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ImageError;
    use crate::core::content::{HERO_KEY, HERO_PROMPT};
    use futures::executor::block_on;

    struct FixedGenerator(Result<String, ImageError>);

    impl ImageGenerator for FixedGenerator {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String, ImageError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_hero_failure_raises_notice() {
        let owner = Owner::new();
        owner.with(|| {
            let store = ImageStore::new(ImageServiceStatus::Enabled);
            let generator = FixedGenerator(Err(ImageError::Network("connection reset".into())));

            let outcome = block_on(store.acquire(
                &generator,
                GenerationRequest::new(HERO_KEY, HERO_PROMPT),
                ViewLifetime::new(),
            ));

            assert!(matches!(outcome, EnsureOutcome::Failed(_)));
            assert_eq!(store.notice(), Some(GENERATION_FAILED_NOTICE));
            assert_eq!(store.status(HERO_KEY), ImageStatus::Empty);
            assert!(!store.cache.with_untracked(|c| c.is_loading(HERO_KEY)));
        });
    }

    #[test]
    fn test_successful_acquire_stores_image_without_notice() {
        let owner = Owner::new();
        owner.with(|| {
            let store = ImageStore::new(ImageServiceStatus::Enabled);
            let generator = FixedGenerator(Ok("data:image/png;base64,AAAA".to_string()));

            block_on(store.acquire(
                &generator,
                GenerationRequest::new("m1", "prompt"),
                ViewLifetime::new(),
            ));

            assert_eq!(
                store.status("m1"),
                ImageStatus::Ready("data:image/png;base64,AAAA".to_string())
            );
            assert_eq!(store.notice(), None);
        });
    }

    #[test]
    fn test_signal_handle_updates_cache() {
        let owner = Owner::new();
        owner.with(|| {
            let cache = RwSignal::new(ImageCache::new());

            let claimed = cache.with_cache(|c| c.try_begin("m1"));
            assert_eq!(claimed, Some(true));
            assert!(cache.with_untracked(|c| c.is_loading("m1")));
        });
    }

    #[test]
    fn test_signal_handle_after_dispose() {
        let owner = Owner::new();
        owner.with(|| {
            let cache = RwSignal::new(ImageCache::new());
            cache.dispose();

            assert!(cache.with_cache(|c| c.try_begin("m1")).is_none());
        });
    }

    #[test]
    fn test_disabled_store_ignores_requests() {
        let owner = Owner::new();
        owner.with(|| {
            let store = ImageStore::new(ImageServiceStatus::Disabled);
            store.ensure(
                GenerationRequest::new("m1", "prompt"),
                ViewLifetime::new(),
            );

            assert_eq!(store.status("m1"), ImageStatus::Empty);
            assert_eq!(store.requested_keys(), 0);
            assert_eq!(store.notice(), None);
        });
    }

    #[test]
    fn test_view_lifetime_cancelled_on_cleanup() {
        let owner = Owner::new();
        let lifetime = owner.with(use_view_lifetime);
        assert!(!lifetime.is_cancelled());

        owner.cleanup();
        assert!(lifetime.is_cancelled());
    }

    #[test]
    fn test_detect_without_context_is_disabled() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(detect_image_service(), ImageServiceStatus::Disabled);
        });
    }

    #[test]
    fn test_detect_reads_server_context() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(ImageServiceStatus::Enabled);
            assert_eq!(detect_image_service(), ImageServiceStatus::Enabled);
        });
    }
}
