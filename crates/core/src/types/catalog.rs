//! Catalog reference records: categories, services, and products.

use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ProductId, ServiceId};
use super::price::Price;

/// A product category, used by the navigation menu.
///
/// Fetched name-ascending by the category navigator on every mount; never
/// cached across mounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A service offered by the store, shown on the home page grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
}

/// A product belonging to a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
}
