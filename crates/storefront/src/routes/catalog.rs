//! Category, product and service page handlers.

use std::str::FromStr;

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use perfume_house_core::{CategoryId, Product, ProductId, ServiceId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::layout::{PageChrome, Route};
use crate::routes::home::ServiceView;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            image_url: product.image_url.clone().unwrap_or_default(),
            price: product
                .price
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}

/// Category listing template.
#[derive(Template, WebTemplate)]
#[template(path = "category.html")]
pub struct CategoryTemplate {
    pub chrome: PageChrome,
    pub category_name: String,
    pub products: Vec<ProductView>,
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    pub chrome: PageChrome,
    pub product: ProductView,
}

/// Service detail template.
#[derive(Template, WebTemplate)]
#[template(path = "service.html")]
pub struct ServiceTemplate {
    pub chrome: PageChrome,
    pub service: ServiceView,
}

/// Display the products of one category.
///
/// A failed product fetch degrades to an empty grid; the page itself still
/// renders.
#[instrument(skip(state))]
pub async fn category_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<CategoryTemplate> {
    let category_id = CategoryId::from_str(&id)
        .map_err(|_| AppError::BadRequest(format!("invalid category id: {id}")))?;

    let products = state
        .gateway()
        .fetch_products_in_category(category_id)
        .await
        .map_or_else(
            |e| {
                tracing::error!("Failed to fetch category products: {e}");
                Vec::new()
            },
            |products| products.iter().map(ProductView::from).collect(),
        );

    let chrome = PageChrome::assemble(&state, &Route::Category(id.clone())).await;
    let category_name = chrome
        .categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.clone())
        .ok_or_else(|| AppError::NotFound(format!("category {id}")))?;

    Ok(CategoryTemplate {
        chrome,
        category_name,
        products,
    })
}

/// Display one product.
#[instrument(skip(state))]
pub async fn product_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ProductTemplate> {
    let product_id = ProductId::from_str(&id)
        .map_err(|_| AppError::BadRequest(format!("invalid product id: {id}")))?;

    let product = state
        .gateway()
        .fetch_product(product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductTemplate {
        chrome: PageChrome::assemble(&state, &Route::Product(id)).await,
        product: ProductView::from(&product),
    })
}

/// Display one service.
#[instrument(skip(state))]
pub async fn service_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ServiceTemplate> {
    let service_id = ServiceId::from_str(&id)
        .map_err(|_| AppError::BadRequest(format!("invalid service id: {id}")))?;

    let service = state
        .gateway()
        .fetch_service(service_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("service {id}")))?;

    Ok(ServiceTemplate {
        chrome: PageChrome::assemble(&state, &Route::Service(id)).await,
        service: ServiceView::from(&service),
    })
}
