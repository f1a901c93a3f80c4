//! Scroll-reveal watcher
//!
//! One `IntersectionObserver` per page watches every reveal element. Views
//! wrap content in [`Reveal`], which registers its node as soon as it mounts;
//! plain `.reveal` markup is picked up by
//! [`RevealContext::register_pending_elements`] at mount time and, when
//! `RevealOptions::rescan_interval` is set, on a fixed interval.
//!
//! The observer callback is the only place that adds the `active` class.
//!
//! Observer, closure and interval are dropped together when the providing
//! view is cleaned up.

use leptos::prelude::*;

use crate::core::reveal::REVEAL_CLASS;
use crate::core::{RevealId, RevealOptions, RevealTracker, RevealTransition};

#[cfg(feature = "hydrate")]
use crate::core::reveal::{ACTIVE_CLASS, PENDING_SELECTOR, REVEAL_ID_ATTR};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Browser-side resources of the watcher; dropping it tears everything down
#[cfg(feature = "hydrate")]
struct Watcher {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
    _rescan: Option<gloo_timers::callback::Interval>,
}

#[cfg(feature = "hydrate")]
impl Drop for Watcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reveal context shared by every reveal element on the page
#[derive(Clone, Copy)]
pub struct RevealContext {
    tracker: RwSignal<RevealTracker>,
    #[cfg(feature = "hydrate")]
    watcher: StoredValue<Option<Watcher>, LocalStorage>,
}

impl RevealContext {
    /// Whether `id` has been revealed (tracked)
    pub fn is_active(&self, id: RevealId) -> bool {
        self.tracker.with(|t| t.is_active(id))
    }

    /// Number of registered elements still waiting to be revealed
    pub fn pending_count(&self) -> usize {
        self.tracker.with_untracked(|t| t.pending_count())
    }

    /// Feed one visibility sample into the tracker
    pub fn record(&self, id: RevealId, visible_ratio: f64) -> RevealTransition {
        self.tracker
            .try_update(|t| t.observe(id, visible_ratio))
            .unwrap_or(RevealTransition::Unchanged)
    }

    /// Subscribe one element to the watcher.
    ///
    /// Returns `None` when the element is already active or registered.
    #[cfg(feature = "hydrate")]
    pub fn register_element(&self, element: &web_sys::Element) -> Option<RevealId> {
        if element.class_list().contains(ACTIVE_CLASS) || element.has_attribute(REVEAL_ID_ATTR) {
            return None;
        }

        let id = self.tracker.try_update(|t| t.register())?;
        element.set_attribute(REVEAL_ID_ATTR, &id.to_string()).ok()?;
        self.watcher.with_value(|watcher| {
            if let Some(watcher) = watcher {
                watcher.observer.observe(element);
            }
        });
        Some(id)
    }

    /// Scan the document for `.reveal` elements that are neither active nor
    /// registered yet and subscribe them. Returns how many were added.
    pub fn register_pending_elements(&self) -> usize {
        #[cfg(feature = "hydrate")]
        {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return 0;
            };
            let Ok(nodes) = document.query_selector_all(PENDING_SELECTOR) else {
                return 0;
            };

            (0..nodes.length())
                .filter_map(|i| nodes.get(i))
                .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
                .filter(|element| self.register_element(element).is_some())
                .count()
        }

        #[cfg(not(feature = "hydrate"))]
        {
            0
        }
    }

    #[cfg(feature = "hydrate")]
    fn start(&self, options: &RevealOptions) {
        let ctx = *self;
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let Some(id) = target
                        .get_attribute(REVEAL_ID_ATTR)
                        .and_then(|v| v.parse::<RevealId>().ok())
                    else {
                        continue;
                    };

                    if ctx.record(id, entry.intersection_ratio()) == RevealTransition::Activated {
                        let _ = target.class_list().add_1(ACTIVE_CLASS);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer = match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                leptos::logging::error!("Failed to create IntersectionObserver: {:?}", e);
                return;
            }
        };

        let rescan = options.rescan_interval.map(|interval| {
            gloo_timers::callback::Interval::new(interval.as_millis() as u32, move || {
                ctx.register_pending_elements();
            })
        });

        self.watcher.set_value(Some(Watcher {
            observer,
            _callback: callback,
            _rescan: rescan,
        }));
    }
}

/// Provide the reveal context to the page
pub fn provide_reveal_context(options: RevealOptions) -> RevealContext {
    let ctx = RevealContext {
        tracker: RwSignal::new(RevealTracker::new(options.threshold)),
        #[cfg(feature = "hydrate")]
        watcher: StoredValue::new_local(None),
    };

    #[cfg(feature = "hydrate")]
    {
        ctx.start(&options);

        // Initial scan once the page has mounted
        Effect::new(move |_| {
            ctx.register_pending_elements();
        });

        on_cleanup(move || {
            ctx.watcher.set_value(None);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = options;
    }

    provide_context(ctx);
    ctx
}

/// Get the reveal context from context
pub fn use_reveal_context() -> RevealContext {
    expect_context::<RevealContext>()
}

/// Container that fades in the first time it scrolls into view
#[component]
pub fn Reveal(
    /// Additional CSS classes
    #[prop(into, default = String::new())]
    class: String,
    /// Optional element id (used for in-page anchors)
    #[prop(optional)]
    id: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let ctx = use_reveal_context();
    let node_ref = NodeRef::<leptos::html::Div>::new();

    // Registration is idempotent, so a node already picked up by the
    // page-wide scan is left alone
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Some(element) = node_ref.get() {
            ctx.register_element(&element);
        }
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = ctx;

    let full_class = if class.is_empty() {
        REVEAL_CLASS.to_string()
    } else {
        format!("{} {}", REVEAL_CLASS, class)
    };

    view! {
        <div
            node_ref=node_ref
            id=id
            class=full_class
        >
            {children()}
        </div>
    }
}
