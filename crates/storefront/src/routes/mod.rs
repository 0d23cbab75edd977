//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! POST /banners/select/{index} - Jump the banner carousel to a slide
//! GET  /category/{id}          - Products of one category
//! GET  /product/{id}           - Product detail
//! GET  /service/{id}           - Service detail
//!
//! # Admin
//! GET  /admin/login            - Login page
//! POST /admin/login            - Login action
//! POST /admin/logout           - Logout action
//! GET  /admin/dashboard        - Settings dashboard (requires session)
//! POST /admin/settings         - Save settings (requires session)
//!
//! # Ungated
//! GET  /health                 - Health check
//! ```
//!
//! Everything except `/health` sits behind the splash gate.

pub mod admin;
pub mod catalog;
pub mod home;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::middleware::splash;
use crate::state::AppState;

/// Create the public storefront router.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/banners/select/{index}", post(home::select_banner))
        .route("/category/{id}", get(catalog::category_page))
        .route("/product/{id}", get(catalog::product_page))
        .route("/service/{id}", get(catalog::service_page))
}

/// Create the admin router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(admin::login_page).post(admin::login))
        .route("/logout", post(admin::logout))
        .route("/dashboard", get(admin::dashboard))
        .route("/settings", post(admin::save_settings))
}

/// Create the complete application router.
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .nest("/admin", admin_routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            splash::splash_gate,
        ))
        .route("/health", get(health))
}

/// Health check endpoint. Deliberately outside the splash gate so probes
/// see the process as up while the bootstrap is still running.
async fn health() -> &'static str {
    "OK"
}
