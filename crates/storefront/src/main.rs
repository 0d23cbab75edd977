//! Perfume House Storefront - public storefront and admin dashboard.
//!
//! # Architecture
//!
//! - Axum web framework, Askama templates for server-side rendering
//! - A `PostgREST`-style data service for settings, banners and the catalog
//! - Background tasks for the bootstrap sequence, banner carousel timer and
//!   theme engine; request handlers only snapshot their output

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use tower_http::{services::ServeDir, trace::TraceLayer};

use perfume_house_storefront::bootstrap::Bootstrap;
use perfume_house_storefront::carousel;
use perfume_house_storefront::config::StorefrontConfig;
use perfume_house_storefront::gateway::{HttpGateway, SessionHub};
use perfume_house_storefront::state::AppState;
use perfume_house_storefront::theme;

#[tokio::main]
async fn main() {
    // Load .env if present, then configuration from environment
    dotenvy::dotenv().ok();
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "perfume_house_storefront=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Data service client
    let gateway = Arc::new(HttpGateway::new(&config.gateway));

    // Long-lived background state: bootstrap fetches + splash timer,
    // carousel driver, theme engine
    let bootstrap = Bootstrap::start(Arc::clone(&gateway) as _);
    let carousel = carousel::spawn(bootstrap.banners());
    tokio::spawn(theme::run_theme_engine(bootstrap.settings()));

    let sessions = SessionHub::new();
    let state = AppState::new(config.clone(), gateway, bootstrap, carousel, sessions);

    let app = perfume_house_storefront::app(state)
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
