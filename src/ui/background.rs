//! Fixed page background: glow blobs, dot grid, and the generated hero
//! skyline once it is available.

use leptos::prelude::*;

use crate::core::GenerationRequest;
use crate::core::content::{HERO_KEY, HERO_PROMPT};
use crate::ui::image_store::{use_image_store, use_view_lifetime};

#[component]
pub fn BackgroundLayer() -> impl IntoView {
    let store = use_image_store();
    let lifetime = use_view_lifetime();

    // Browser only; the server render has no effects
    Effect::new(move |_| {
        store.ensure(GenerationRequest::new(HERO_KEY, HERO_PROMPT), lifetime.clone());
    });

    let overlay = move || {
        store.status(HERO_KEY).data_url().map(|url| {
            view! {
                <div
                    class="absolute inset-0 opacity-[0.18] mix-blend-overlay transition-opacity duration-1000"
                    style=format!(
                        "background-image: url({}); background-size: cover; background-position: center;",
                        url
                    )
                ></div>
            }
        })
    };

    view! {
        <div class="fixed inset-0 pointer-events-none z-0 overflow-hidden" aria-hidden="true">
            <div class="absolute top-[-10%] left-[-10%] w-[50%] h-[50%] bg-emerald-900/20 blur-[140px] rounded-full animate-pulse"></div>
            <div class="absolute bottom-[-10%] right-[-10%] w-[50%] h-[50%] bg-cyan-900/10 blur-[140px] rounded-full animate-pulse" style="animation-delay: 1s;"></div>
            {overlay}
            <div class="absolute inset-0 opacity-[0.03] bg-dot-grid"></div>
        </div>
    }
}
