#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use sr_digital::app::*;
    use sr_digital::core::config::Config;
    use sr_digital::core::image_api::{ImageApiState, image_api_router};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tracing_subscriber::EnvFilter;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing, honouring RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load application config from environment variables
    let config = Config::from_env();

    // Log config status (without revealing secrets)
    tracing::info!(
        "Config loaded: image_api_key={}, image_model={}",
        config.has_image_api_key(),
        config.image_model
    );
    if !config.has_image_api_key() {
        tracing::warn!("No image API key set; generated visuals are disabled");
    }

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = match get_configuration(None) {
        Ok(conf) => conf,
        Err(e) => {
            tracing::error!("Invalid Leptos configuration: {}", e);
            std::process::exit(1);
        }
    };
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let image_state = ImageApiState::from_config(&config);
    let image_service = image_state.status();

    // Create ServeDir for pkg with pre-compressed file support
    // This serves .br (brotli) and .gz (gzip) files automatically
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    // Build the Leptos router
    let leptos_router = Router::new()
        // Serve pre-compressed static assets from /pkg
        .nest_service("/pkg", pkg_service)
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(image_service),
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler_with_context(
            move || provide_context(image_service),
            shell,
        ))
        .with_state(leptos_options);

    // Build the main application router with compression
    let app = Router::new()
        // Image generation proxy: POST /api/images/generate, GET /api/images/status
        .merge(image_api_router(image_state))
        // Leptos routes (merged after the API to avoid state conflicts)
        .merge(leptos_router)
        // Add compression with Brotli priority (best compression for web)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server error: {}", e);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
