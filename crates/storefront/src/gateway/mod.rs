//! Client for the remote data service.
//!
//! The data service is an opaque collaborator: it owns every record and the
//! authentication session. This module defines the consuming seam
//! ([`StoreGateway`]), the production HTTP implementation
//! ([`HttpGateway`]), and the process-wide session observer
//! ([`SessionHub`]).

mod http;
mod session;

pub use http::HttpGateway;
pub use session::{SessionChanges, SessionHub};

use async_trait::async_trait;
use thiserror::Error;

use perfume_house_core::{
    AuthSession, Banner, Category, CategoryId, Product, ProductId, Service, ServiceId,
    StoreSettings,
};

/// Errors from the data service.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("gateway returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body did not parse as the expected record shape.
    #[error("failed to parse gateway response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Sign-in was rejected (wrong credentials or disabled account).
    #[error("sign-in rejected")]
    SignInRejected,

    /// The settings record has no id yet, so it cannot be addressed for
    /// update.
    #[error("settings record has no id")]
    UnaddressableSettings,
}

/// Operations the storefront consumes from the data service.
///
/// Implementations must be cheap to share (`Arc<dyn StoreGateway>`); the
/// mock used by tests lives in the integration-tests crate.
#[async_trait]
pub trait StoreGateway: Send + Sync {
    /// Fetch the singleton settings record. `Ok(None)` when absent.
    async fn fetch_settings(&self) -> Result<Option<StoreSettings>, GatewayError>;

    /// Fetch all banners, newest first.
    async fn fetch_banners(&self) -> Result<Vec<Banner>, GatewayError>;

    /// Fetch all categories, name ascending.
    async fn fetch_categories(&self) -> Result<Vec<Category>, GatewayError>;

    /// Fetch all services, newest first.
    async fn fetch_services(&self) -> Result<Vec<Service>, GatewayError>;

    /// Fetch one service by id. `Ok(None)` when absent.
    async fn fetch_service(&self, id: ServiceId) -> Result<Option<Service>, GatewayError>;

    /// Fetch one product by id. `Ok(None)` when absent.
    async fn fetch_product(&self, id: ProductId) -> Result<Option<Product>, GatewayError>;

    /// Fetch the products of one category, newest first.
    async fn fetch_products_in_category(
        &self,
        id: CategoryId,
    ) -> Result<Vec<Product>, GatewayError>;

    /// Exchange credentials for a session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, GatewayError>;

    /// Overwrite the settings record (admin edit).
    async fn update_settings(&self, settings: &StoreSettings) -> Result<(), GatewayError>;
}
