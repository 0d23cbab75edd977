//! Perfume House storefront library.
//!
//! This crate provides the storefront functionality as a library, allowing
//! it to be tested and reused. The binary in `main.rs` wires it to the
//! network.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bootstrap;
pub mod carousel;
pub mod config;
pub mod error;
pub mod fade;
pub mod filters;
pub mod gateway;
pub mod layout;
pub mod middleware;
pub mod navigator;
pub mod routes;
pub mod state;
pub mod theme;

use axum::Router;

use state::AppState;

/// Build the full application router (splash-gated routes plus health).
///
/// Static file serving and the tracing layer are added by the binary; tests
/// drive this router directly with `tower::ServiceExt::oneshot`.
#[must_use]
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::session::create_session_layer(state.config());

    Router::new()
        .merge(routes::routes(&state))
        .layer(session_layer)
        .with_state(state)
}
