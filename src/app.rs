use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::ImageServiceStatus;
use crate::ui::{IMAGE_SERVICE_META, LandingPage, NotFoundPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Tells the hydrated page whether generated visuals can be requested
    let image_service = use_context::<ImageServiceStatus>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=IMAGE_SERVICE_META content=image_service.as_str()/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/sr-digital.css"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}
