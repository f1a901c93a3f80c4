#[cfg(test)]
mod tests {
    use crate::core::content::{HERO_KEY, HERO_PROMPT, META_SAMPLES};
    use crate::core::gemini::{GenerateContentResponse, first_inline_image};
    use crate::core::{
        CacheHandle, EnsureOutcome, GenerationRequest, ImageCache, ImageError, ImageGenerator,
        ImageServiceStatus, ImageStatus, ViewLifetime, ensure_image,
    };
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    /// Future that is pending exactly once, so concurrent callers get a turn
    #[derive(Default)]
    struct YieldNow(bool);

    impl Future for YieldNow {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    /// Generator that records every request it sees
    struct RecordingGenerator {
        calls: Cell<usize>,
        keys: RefCell<Vec<String>>,
        response: Result<String, ImageError>,
        cancel_on_call: Option<ViewLifetime>,
    }

    impl RecordingGenerator {
        fn ok(data_url: &str) -> Self {
            Self::with_response(Ok(data_url.to_string()))
        }

        fn failing(error: ImageError) -> Self {
            Self::with_response(Err(error))
        }

        fn with_response(response: Result<String, ImageError>) -> Self {
            Self {
                calls: Cell::new(0),
                keys: RefCell::new(Vec::new()),
                response,
                cancel_on_call: None,
            }
        }

        /// Service that answers with a raw `generateContent` body
        fn from_service_body(body: &str) -> Self {
            let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
            Self::with_response(first_inline_image(&response).map(|img| img.to_data_url()))
        }

        fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    impl ImageGenerator for RecordingGenerator {
        async fn generate(&self, request: &GenerationRequest) -> Result<String, ImageError> {
            self.calls.set(self.calls.get() + 1);
            self.keys.borrow_mut().push(request.key.clone());
            if let Some(lifetime) = &self.cancel_on_call {
                lifetime.cancel();
            }
            YieldNow::default().await;
            self.response.clone()
        }
    }

    fn request(key: &str) -> GenerationRequest {
        GenerationRequest::new(key, format!("prompt for {key}"))
    }

    const ENABLED: ImageServiceStatus = ImageServiceStatus::Enabled;

    #[test]
    fn test_concurrent_calls_issue_single_request() {
        let cache = RefCell::new(ImageCache::new());
        let generator = RecordingGenerator::ok("data:image/png;base64,AAAA");
        let lifetime = ViewLifetime::new();

        let (a, b, c) = block_on(async {
            futures::join!(
                ensure_image(&cache, &generator, ENABLED, &lifetime, request("m1")),
                ensure_image(&cache, &generator, ENABLED, &lifetime, request("m1")),
                ensure_image(&cache, &generator, ENABLED, &lifetime, request("m1")),
            )
        });

        assert_eq!(generator.calls(), 1);
        assert_eq!(a, EnsureOutcome::Stored);
        assert_eq!(b, EnsureOutcome::InFlight);
        assert_eq!(c, EnsureOutcome::InFlight);
        assert_eq!(cache.borrow().data("m1"), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_two_rapid_calls_for_m2_reach_service_once() {
        let cache = RefCell::new(ImageCache::new());
        let generator = RecordingGenerator::ok("data:image/png;base64,M2");
        let lifetime = ViewLifetime::new();
        let prompt = META_SAMPLES[1].prompt;

        block_on(async {
            futures::join!(
                ensure_image(
                    &cache,
                    &generator,
                    ENABLED,
                    &lifetime,
                    GenerationRequest::new("m2", prompt)
                ),
                ensure_image(
                    &cache,
                    &generator,
                    ENABLED,
                    &lifetime,
                    GenerationRequest::new("m2", prompt)
                ),
            )
        });

        assert_eq!(*generator.keys.borrow(), vec!["m2".to_string()]);
    }

    #[test]
    fn test_cached_key_is_never_requested_again() {
        let cache = RefCell::new(ImageCache::new());
        let generator = RecordingGenerator::ok("data:image/png;base64,AAAA");
        let lifetime = ViewLifetime::new();

        let first = block_on(ensure_image(&cache, &generator, ENABLED, &lifetime, request("m1")));
        assert_eq!(first, EnsureOutcome::Stored);

        for _ in 0..5 {
            let again = block_on(ensure_image(&cache, &generator, ENABLED, &lifetime, request("m1")));
            assert_eq!(again, EnsureOutcome::Cached);
        }
        assert_eq!(generator.calls(), 1);
    }

    #[test]
    fn test_missing_credential_never_requests() {
        let cache = RefCell::new(ImageCache::new());
        let generator = RecordingGenerator::ok("data:image/png;base64,AAAA");
        let lifetime = ViewLifetime::new();

        let keys = std::iter::once(HERO_KEY).chain(META_SAMPLES.iter().map(|s| s.id));
        for key in keys {
            let outcome = block_on(ensure_image(
                &cache,
                &generator,
                ImageServiceStatus::Disabled,
                &lifetime,
                request(key),
            ));
            assert_eq!(outcome, EnsureOutcome::Disabled);
            assert_eq!(cache.borrow().status(key), ImageStatus::Empty);
        }

        assert_eq!(generator.calls(), 0);
        assert!(cache.borrow().is_empty());
    }

    #[test]
    fn test_m1_inline_png_becomes_data_url() {
        let cache = RefCell::new(ImageCache::new());
        let generator = RecordingGenerator::from_service_body(
            r#"{"candidates":[{"content":{"parts":[
                {"inlineData":{"mimeType":"image/png","data":"AAAA"}}
            ]}}]}"#,
        );
        let lifetime = ViewLifetime::new();

        let outcome = block_on(ensure_image(
            &cache,
            &generator,
            ENABLED,
            &lifetime,
            GenerationRequest::new("m1", META_SAMPLES[0].prompt),
        ));

        assert_eq!(outcome, EnsureOutcome::Stored);
        let cache = cache.borrow();
        let entry = cache.entry("m1").unwrap();
        assert_eq!(entry.data.as_deref(), Some("data:image/png;base64,AAAA"));
        assert!(!entry.loading);
    }

    #[test]
    fn test_hero_failure_clears_loading_and_keeps_data_unset() {
        let cache = RefCell::new(ImageCache::new());
        let generator = RecordingGenerator::failing(ImageError::Network("connection reset".into()));
        let lifetime = ViewLifetime::new();

        let outcome = block_on(ensure_image(
            &cache,
            &generator,
            ENABLED,
            &lifetime,
            GenerationRequest::new(HERO_KEY, HERO_PROMPT),
        ));

        assert!(matches!(outcome, EnsureOutcome::Failed(ImageError::Network(_))));
        let cache = cache.borrow();
        let entry = cache.entry(HERO_KEY).unwrap();
        assert!(entry.data.is_none());
        assert!(!entry.loading);
        // The background layer renders without an overlay
        assert!(cache.status(HERO_KEY).data_url().is_none());
    }

    #[test]
    fn test_response_without_payload_is_a_failure() {
        let cache = RefCell::new(ImageCache::new());
        let generator = RecordingGenerator::from_service_body(
            r#"{"candidates":[{"content":{"parts":[{"text":"no image"}]}}]}"#,
        );
        let lifetime = ViewLifetime::new();

        let outcome = block_on(ensure_image(&cache, &generator, ENABLED, &lifetime, request("m2")));

        assert_eq!(outcome, EnsureOutcome::Failed(ImageError::NoImagePayload));
        assert_eq!(cache.borrow().status("m2"), ImageStatus::Empty);
    }

    #[test]
    fn test_failed_key_can_be_retried() {
        let cache = RefCell::new(ImageCache::new());
        let lifetime = ViewLifetime::new();

        let failing = RecordingGenerator::failing(ImageError::Remote {
            status: 500,
            message: "overloaded".into(),
        });
        block_on(ensure_image(&cache, &failing, ENABLED, &lifetime, request("m1")));

        let working = RecordingGenerator::ok("data:image/png;base64,OK");
        let outcome = block_on(ensure_image(&cache, &working, ENABLED, &lifetime, request("m1")));

        assert_eq!(outcome, EnsureOutcome::Stored);
        assert_eq!(failing.calls() + working.calls(), 2);
    }

    #[test]
    fn test_failure_does_not_affect_other_keys() {
        let cache = RefCell::new(ImageCache::new());
        let lifetime = ViewLifetime::new();
        let ok = RecordingGenerator::ok("data:image/png;base64,M1");
        let failing = RecordingGenerator::failing(ImageError::NoImagePayload);

        block_on(async {
            futures::join!(
                ensure_image(&cache, &ok, ENABLED, &lifetime, request("m1")),
                ensure_image(&cache, &failing, ENABLED, &lifetime, request("m2")),
            )
        });

        let cache = cache.borrow();
        assert_eq!(cache.data("m1"), Some("data:image/png;base64,M1"));
        assert_eq!(cache.status("m2"), ImageStatus::Empty);
    }

    #[test]
    fn test_late_response_after_view_is_gone_is_discarded() {
        let cache = RefCell::new(ImageCache::new());
        let lifetime = ViewLifetime::new();
        let mut generator = RecordingGenerator::ok("data:image/png;base64,LATE");
        generator.cancel_on_call = Some(lifetime.clone());

        let outcome = block_on(ensure_image(&cache, &generator, ENABLED, &lifetime, request("m1")));

        assert_eq!(outcome, EnsureOutcome::Discarded);
        assert_eq!(generator.calls(), 1);
        let cache = cache.borrow();
        assert!(cache.data("m1").is_none());
        assert!(!cache.is_loading("m1"));
    }

    /// Cache handle that counts mutable accesses
    #[derive(Default)]
    struct CountingCache {
        cache: RefCell<ImageCache>,
        writes: Cell<usize>,
    }

    impl CacheHandle for CountingCache {
        fn read_cache<R>(&self, f: impl FnOnce(&ImageCache) -> R) -> Option<R> {
            self.cache.read_cache(f)
        }

        fn with_cache<R>(&self, f: impl FnOnce(&mut ImageCache) -> R) -> Option<R> {
            self.writes.set(self.writes.get() + 1);
            self.cache.with_cache(f)
        }
    }

    #[test]
    fn test_cached_and_in_flight_keys_do_not_touch_cache() {
        let store = CountingCache::default();
        let generator = RecordingGenerator::ok("data:image/png;base64,AAAA");
        let lifetime = ViewLifetime::new();

        block_on(ensure_image(&store, &generator, ENABLED, &lifetime, request("m1")));
        // claim + complete
        assert_eq!(store.writes.get(), 2);

        let again = block_on(ensure_image(&store, &generator, ENABLED, &lifetime, request("m1")));
        assert_eq!(again, EnsureOutcome::Cached);
        assert_eq!(store.writes.get(), 2);

        store.cache.borrow_mut().try_begin("m2");
        let busy = block_on(ensure_image(&store, &generator, ENABLED, &lifetime, request("m2")));
        assert_eq!(busy, EnsureOutcome::InFlight);
        assert_eq!(store.writes.get(), 2);
        assert_eq!(generator.calls(), 1);
    }
}
