//! Home page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::instrument;

use perfume_house_core::Service;

use crate::filters;
use crate::layout::{PageChrome, Route};
use crate::state::AppState;

/// Service display data for templates.
#[derive(Clone)]
pub struct ServiceView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: String,
}

impl From<&Service> for ServiceView {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id.to_string(),
            name: service.name.clone(),
            description: service.description.clone().unwrap_or_default(),
            image_url: service.image_url.clone().unwrap_or_default(),
            price: service
                .price
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Shared page chrome (header, carousel, footer data).
    pub chrome: PageChrome,
    /// Services for the home grid.
    pub services: Vec<ServiceView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let services = state.gateway().fetch_services().await.map_or_else(
        |e| {
            tracing::error!("Failed to fetch services: {e}");
            Vec::new()
        },
        |services| services.iter().map(ServiceView::from).collect(),
    );

    HomeTemplate {
        chrome: PageChrome::assemble(&state, &Route::Home).await,
        services,
    }
}

/// Jump the carousel to a slide. Out-of-range indices are ignored by the
/// driver; either way the browser goes back to the home page.
#[instrument(skip(state))]
pub async fn select_banner(State(state): State<AppState>, Path(index): Path<usize>) -> Redirect {
    state.carousel().select(index);
    Redirect::to("/")
}
