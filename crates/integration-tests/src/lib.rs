//! Test harness for Perfume House.
//!
//! Provides a scriptable in-memory data service, fixture builders, and a
//! fully wired application for driving the router with
//! `tower::ServiceExt::oneshot`. The timing tests pause the tokio clock, so
//! the harness never talks to a real network.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use secrecy::SecretString;
use url::Url;
use uuid::Uuid;

use perfume_house_core::{
    AuthSession, Banner, BannerContent, BannerId, Category, CategoryId, Price, Product, ProductId,
    Service, ServiceId, StoreSettings,
};
use perfume_house_storefront::bootstrap::Bootstrap;
use perfume_house_storefront::carousel;
use perfume_house_storefront::config::{GatewayConfig, StorefrontConfig};
use perfume_house_storefront::gateway::{GatewayError, SessionHub, StoreGateway};
use perfume_house_storefront::state::AppState;

/// How one mocked fetch behaves.
#[derive(Debug, Clone)]
pub enum Fetch<T> {
    /// Resolve immediately with this value.
    Value(T),
    /// Fail with a 500-style gateway error.
    Fail,
    /// Never resolve. Models a hung upstream.
    Never,
}

impl<T: Clone> Fetch<T> {
    async fn resolve(&self, what: &str) -> Result<T, GatewayError> {
        match self {
            Self::Value(value) => Ok(value.clone()),
            Self::Fail => Err(GatewayError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: format!("mock {what} failure"),
            }),
            Self::Never => std::future::pending().await,
        }
    }
}

/// Scriptable in-memory data service.
///
/// Catalog lookups resolve against the scripted lists; `update_settings`
/// records the write and makes later settings fetches return it, which is
/// what the refresh-after-save flow observes.
pub struct MockGateway {
    settings: Mutex<Fetch<Option<StoreSettings>>>,
    banners: Fetch<Vec<Banner>>,
    categories: Fetch<Vec<Category>>,
    services: Fetch<Vec<Service>>,
    products: Vec<Product>,
    admin_credentials: Option<(String, String)>,
    updates: Mutex<Vec<StoreSettings>>,
}

impl MockGateway {
    /// An empty store: no settings record, no banners, empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: Mutex::new(Fetch::Value(None)),
            banners: Fetch::Value(Vec::new()),
            categories: Fetch::Value(Vec::new()),
            services: Fetch::Value(Vec::new()),
            products: Vec::new(),
            admin_credentials: None,
            updates: Mutex::new(Vec::new()),
        }
    }

    /// A store whose settings and banner fetches hang forever.
    #[must_use]
    pub fn never_loading() -> Self {
        Self {
            settings: Mutex::new(Fetch::Never),
            banners: Fetch::Never,
            ..Self::new()
        }
    }

    /// A store where every fetch fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            settings: Mutex::new(Fetch::Fail),
            banners: Fetch::Fail,
            categories: Fetch::Fail,
            services: Fetch::Fail,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_settings(self, settings: StoreSettings) -> Self {
        Self {
            settings: Mutex::new(Fetch::Value(Some(settings))),
            ..self
        }
    }

    #[must_use]
    pub fn with_banners(self, banners: Vec<Banner>) -> Self {
        Self {
            banners: Fetch::Value(banners),
            ..self
        }
    }

    #[must_use]
    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        Self {
            categories: Fetch::Value(categories),
            ..self
        }
    }

    #[must_use]
    pub fn with_services(self, services: Vec<Service>) -> Self {
        Self {
            services: Fetch::Value(services),
            ..self
        }
    }

    #[must_use]
    pub fn with_products(self, products: Vec<Product>) -> Self {
        Self { products, ..self }
    }

    /// Accept exactly this email/password pair at sign-in.
    #[must_use]
    pub fn with_admin(self, email: &str, password: &str) -> Self {
        Self {
            admin_credentials: Some((email.to_string(), password.to_string())),
            ..self
        }
    }

    /// Settings writes recorded by `update_settings`, oldest first.
    #[must_use]
    pub fn recorded_updates(&self) -> Vec<StoreSettings> {
        self.updates.lock().map(|u| u.clone()).unwrap_or_default()
    }

    fn settings_fetch(&self) -> Fetch<Option<StoreSettings>> {
        self.settings
            .lock()
            .map_or(Fetch::Value(None), |f| f.clone())
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreGateway for MockGateway {
    async fn fetch_settings(&self) -> Result<Option<StoreSettings>, GatewayError> {
        self.settings_fetch().resolve("settings").await
    }

    async fn fetch_banners(&self) -> Result<Vec<Banner>, GatewayError> {
        self.banners.resolve("banners").await
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.categories.resolve("categories").await
    }

    async fn fetch_services(&self) -> Result<Vec<Service>, GatewayError> {
        self.services.resolve("services").await
    }

    async fn fetch_service(&self, id: ServiceId) -> Result<Option<Service>, GatewayError> {
        let services = self.services.resolve("services").await?;
        Ok(services.into_iter().find(|s| s.id == id))
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Option<Product>, GatewayError> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    async fn fetch_products_in_category(
        &self,
        id: CategoryId,
    ) -> Result<Vec<Product>, GatewayError> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category_id == id)
            .cloned()
            .collect())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, GatewayError> {
        match &self.admin_credentials {
            Some((e, p)) if e == email && p == password => Ok(AuthSession {
                access_token: "mock-access-token".to_string(),
                user_id: "admin-1".to_string(),
                expires_at: Utc::now() + TimeDelta::hours(1),
            }),
            _ => Err(GatewayError::SignInRejected),
        }
    }

    async fn update_settings(&self, settings: &StoreSettings) -> Result<(), GatewayError> {
        if let Ok(mut updates) = self.updates.lock() {
            updates.push(settings.clone());
        }
        if let Ok(mut current) = self.settings.lock() {
            *current = Fetch::Value(Some(settings.clone()));
        }
        Ok(())
    }
}

/// Configuration pointing at nothing routable; the mock never dials out.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        gateway: GatewayConfig {
            url: Url::parse("http://localhost:54321").expect("static url parses"),
            anon_key: "test-anon-key".to_string(),
            service_key: SecretString::from("kR9mX2vQ7pL4wN8jT3bY6fH1sD5gZ0cA".to_string()),
        },
        contact_whatsapp: None,
    }
}

/// Start the full application state against a mock gateway.
///
/// The bootstrap tasks and carousel driver spawn here; call sites control
/// time with the paused clock. The theme engine is not started, since its
/// output is process-global.
pub fn test_state(gateway: Arc<MockGateway>) -> AppState {
    let bootstrap = Bootstrap::start(Arc::clone(&gateway) as Arc<dyn StoreGateway>);
    let carousel = carousel::spawn(bootstrap.banners());
    AppState::new(
        test_config(),
        gateway,
        bootstrap,
        carousel,
        SessionHub::new(),
    )
}

/// Read a response body to a string.
pub async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads to completion");
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}

// =============================================================================
// Fixtures
// =============================================================================

/// A settings record resembling the live store.
#[must_use]
pub fn sample_settings(store_name: &str) -> StoreSettings {
    StoreSettings {
        store_name: Some(store_name.to_string()),
        store_description: Some("Fragrances and incense".to_string()),
        ..StoreSettings::default()
    }
}

/// An image banner.
#[must_use]
pub fn image_banner(title: &str, image_url: &str) -> Banner {
    Banner {
        id: BannerId::new(Uuid::new_v4()),
        content: BannerContent::Image {
            image_url: Some(image_url.to_string()),
            title: Some(title.to_string()),
            description: None,
        },
        created_at: Utc::now(),
    }
}

/// A text banner.
#[must_use]
pub fn text_banner(title: &str) -> Banner {
    Banner {
        id: BannerId::new(Uuid::new_v4()),
        content: BannerContent::Text {
            title: Some(title.to_string()),
            description: None,
        },
        created_at: Utc::now(),
    }
}

/// A category.
#[must_use]
pub fn category(name: &str) -> Category {
    Category {
        id: CategoryId::new(Uuid::new_v4()),
        name: name.to_string(),
    }
}

/// A product in the given category.
#[must_use]
pub fn product(name: &str, category_id: CategoryId) -> Product {
    Product {
        id: ProductId::new(Uuid::new_v4()),
        category_id,
        name: name.to_string(),
        description: Some(format!("{name} description")),
        image_url: None,
        price: Some(Price::new(rust_decimal_from_cents(12900))),
    }
}

/// A service.
#[must_use]
pub fn service(name: &str) -> Service {
    Service {
        id: ServiceId::new(Uuid::new_v4()),
        name: name.to_string(),
        description: Some(format!("{name} description")),
        image_url: None,
        price: None,
    }
}

fn rust_decimal_from_cents(cents: i64) -> rust_decimal::Decimal {
    rust_decimal::Decimal::new(cents, 2)
}
