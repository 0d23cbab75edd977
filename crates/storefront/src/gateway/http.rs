//! HTTP implementation of the data service client.
//!
//! Talks to a PostgREST-style REST surface (`/rest/v1/<table>` with
//! `order=`/`eq.` query parameters) plus the token endpoint for the
//! password grant. Reads use the public key; the settings update uses the
//! privileged service key.

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use perfume_house_core::{
    AuthSession, Banner, Category, CategoryId, Product, ProductId, Service, ServiceId,
    StoreSettings,
};

use crate::config::GatewayConfig;

use super::{GatewayError, StoreGateway};

/// Production data service client.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base: Url,
    anon_key: String,
    service_key: String,
}

impl HttpGateway {
    /// Create a new client from configuration.
    #[must_use]
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: config.url.clone(),
            anon_key: config.anon_key.clone(),
            service_key: config.service_key.expose_secret().to_string(),
        }
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}rest/v1/{table}", self.base)
    }

    /// Fetch all rows of `table` with the given query string.
    async fn fetch_rows<T: for<'de> Deserialize<'de>>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, GatewayError> {
        let response = self
            .client
            .get(self.rest_url(table))
            .query(query)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GatewayError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch at most one row of `table`.
    async fn fetch_one<T: for<'de> Deserialize<'de>>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, GatewayError> {
        let mut query = query.to_vec();
        query.push(("limit", "1".to_string()));
        let mut rows = self.fetch_rows::<T>(table, &query).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }
}

/// Token endpoint response for the password grant.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
    user: TokenUser,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
    id: String,
}

#[async_trait]
impl StoreGateway for HttpGateway {
    #[instrument(skip(self))]
    async fn fetch_settings(&self) -> Result<Option<StoreSettings>, GatewayError> {
        self.fetch_one("store_settings", &[("select", "*".to_string())])
            .await
    }

    #[instrument(skip(self))]
    async fn fetch_banners(&self) -> Result<Vec<Banner>, GatewayError> {
        self.fetch_rows(
            "banners",
            &[
                ("select", "*".to_string()),
                ("order", "created_at.desc".to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn fetch_categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.fetch_rows(
            "categories",
            &[
                ("select", "*".to_string()),
                ("order", "name.asc".to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn fetch_services(&self) -> Result<Vec<Service>, GatewayError> {
        self.fetch_rows(
            "services",
            &[
                ("select", "*".to_string()),
                ("order", "created_at.desc".to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn fetch_service(&self, id: ServiceId) -> Result<Option<Service>, GatewayError> {
        self.fetch_one(
            "services",
            &[("select", "*".to_string()), ("id", format!("eq.{id}"))],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn fetch_product(&self, id: ProductId) -> Result<Option<Product>, GatewayError> {
        self.fetch_one(
            "products",
            &[("select", "*".to_string()), ("id", format!("eq.{id}"))],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn fetch_products_in_category(
        &self,
        id: CategoryId,
    ) -> Result<Vec<Product>, GatewayError> {
        self.fetch_rows(
            "products",
            &[
                ("select", "*".to_string()),
                ("category_id", format!("eq.{id}")),
                ("order", "created_at.desc".to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self, password))]
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, GatewayError> {
        let url = format!("{}auth/v1/token?grant_type=password", self.base);
        let response = self
            .client
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "token endpoint rejected credentials");
            return Err(GatewayError::SignInRejected);
        }

        let token: TokenResponse = serde_json::from_str(&response.text().await?)?;
        Ok(AuthSession {
            access_token: token.access_token,
            user_id: token.user.id,
            expires_at: Utc::now() + TimeDelta::seconds(token.expires_in),
        })
    }

    #[instrument(skip(self, settings))]
    async fn update_settings(&self, settings: &StoreSettings) -> Result<(), GatewayError> {
        let id = settings.id.ok_or(GatewayError::UnaddressableSettings)?;

        let response = self
            .client
            .patch(self.rest_url("store_settings"))
            .query(&[("id", format!("eq.{id}"))])
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .json(settings)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        Ok(())
    }
}
