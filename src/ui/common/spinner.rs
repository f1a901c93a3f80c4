use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
) -> impl IntoView {
    view! {
        <div class="spinner-container">
            <div class=format!("spinner {}", size.class()) role="status" aria-live="polite">
                <span class="sr-only">"Loading..."</span>
            </div>
        </div>
    }
}

/// Skeleton loader for content placeholders
#[component]
pub fn Skeleton(
    /// Width of the skeleton
    #[prop(default = "100%".to_string())]
    width: String,
    /// Height of the skeleton
    #[prop(default = "1rem".to_string())]
    height: String,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "skeleton".to_string()
    } else {
        format!("skeleton {}", class)
    };

    let style = format!("width: {}; height: {}", width, height);

    view! {
        <div class=full_classes style=style aria-busy="true">
            <div class="skeleton-shimmer"></div>
        </div>
    }
}

/// Placeholder for a whole page section: a heading bar and a row of cards
#[component]
pub fn SectionSkeleton(
    /// Number of card placeholders
    #[prop(default = 3)]
    cards: usize,
) -> impl IntoView {
    view! {
        <div class="max-w-6xl mx-auto px-4 py-20">
            <div class="flex flex-col items-center gap-3 mb-12">
                <Skeleton width="40%".to_string() height="2rem".to_string() />
                <Skeleton width="60%".to_string() />
            </div>
            <div class="grid md:grid-cols-3 gap-6">
                {(0..cards).map(|_| view! {
                    <Skeleton height="12rem".to_string() class="rounded-2xl".to_string() />
                }).collect_view()}
            </div>
        </div>
    }
}

/// Renders a skeleton until the page has mounted in the browser, then the
/// children. Server output and the first client render both show the
/// skeleton, so hydration matches.
#[component]
pub fn Deferred(
    children: ChildrenFn,
    /// Card count of the fallback skeleton
    #[prop(default = 3)]
    cards: usize,
) -> impl IntoView {
    let mounted = RwSignal::new(false);
    Effect::new(move |_| mounted.set(true));

    move || {
        if mounted.get() {
            children().into_any()
        } else {
            view! { <SectionSkeleton cards=cards /> }.into_any()
        }
    }
}
