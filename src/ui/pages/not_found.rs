//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::contact::GENERAL_ENQUIRY;
use crate::core::WhatsAppLink;
use crate::core::content::AGENCY_NAME;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text=format!("Page Not Found | {}", AGENCY_NAME) />

        <div class="min-h-screen bg-slate-950 text-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white/5 rounded-full flex items-center justify-center">
                    <Icon name=icons::SEARCH class="w-12 h-12 text-slate-500" />
                </div>

                <h1 class="text-6xl font-bold mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>

                <p class="text-slate-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/"
                        attr:class="px-6 py-3 bg-emerald-600 hover:bg-emerald-500 text-white font-medium rounded-lg transition-colors"
                    >
                        "Go Home"
                    </A>
                    <a
                        href=WhatsAppLink::agency(GENERAL_ENQUIRY).url()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-6 py-3 border border-white/15 hover:bg-white/5 font-medium rounded-lg transition-colors"
                    >
                        "Talk to Us"
                    </a>
                </div>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-slate-500">{format!("© 2025 {}", AGENCY_NAME)}</p>
            </div>
        </div>
    }
}
