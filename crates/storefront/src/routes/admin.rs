//! Admin login and settings dashboard.
//!
//! The dashboard edits the singleton settings record. Saving pushes the
//! record to the data service, then re-fetches it through the bootstrap so
//! the public pages pick the change up immediately.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use perfume_house_core::{StoreSettings, ThemeSettings};

use crate::error::{AppError, Result};
use crate::filters;
use crate::gateway::GatewayError;
use crate::middleware::auth::{RequireAdmin, session_keys};
use crate::state::AppState;
use crate::theme::styles;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub store_name: String,
    pub theme_css: String,
    /// Empty when there is nothing to report.
    pub error: String,
}

/// Settings dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub store_name: String,
    pub theme_css: String,
    pub user_id: String,
    pub store_description: String,
    pub logo_url: String,
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: String,
    pub show_testimonials: bool,
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    pub background_color: String,
    pub background_gradient: String,
}

/// Login form fields.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Settings form fields. Blank inputs clear the corresponding field.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    pub store_name: Option<String>,
    pub store_description: Option<String>,
    pub logo_url: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    /// Present iff the checkbox was ticked.
    pub show_testimonials: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub font_family: Option<String>,
    pub background_color: Option<String>,
    pub background_gradient: Option<String>,
}

fn login_template(state: &AppState, error: String) -> LoginTemplate {
    let (settings, _) = state.bootstrap().snapshot();
    LoginTemplate {
        store_name: settings
            .and_then(|s| s.store_name)
            .unwrap_or_else(|| crate::layout::FALLBACK_STORE_NAME.to_string()),
        theme_css: styles::snapshot().css_custom_properties(),
        error,
    }
}

/// Display the login page.
#[instrument(skip(state))]
pub async fn login_page(State(state): State<AppState>) -> LoginTemplate {
    login_template(&state, String::new())
}

/// Handle a login attempt.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match state.gateway().sign_in(&form.email, &form.password).await {
        Ok(auth) => {
            session
                .insert(session_keys::ADMIN_SESSION, &auth)
                .await
                .map_err(|e| AppError::Internal(format!("session store failed: {e}")))?;
            state.sessions().set(Some(auth));
            Ok(Redirect::to("/admin/dashboard").into_response())
        }
        Err(GatewayError::SignInRejected) => Ok(login_template(
            &state,
            "Invalid email or password".to_string(),
        )
        .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Sign out and return to the login page.
#[instrument(skip(state, session))]
pub async fn logout(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("session store failed: {e}")))?;
    state.sessions().set(None);
    Ok(Redirect::to("/admin/login"))
}

/// Display the settings dashboard.
#[instrument(skip(state))]
pub async fn dashboard(
    RequireAdmin(auth): RequireAdmin,
    State(state): State<AppState>,
) -> DashboardTemplate {
    let (settings, _) = state.bootstrap().snapshot();
    let settings = settings.unwrap_or_default();
    let theme = &settings.theme_settings;

    DashboardTemplate {
        store_name: settings
            .store_name
            .clone()
            .unwrap_or_else(|| crate::layout::FALLBACK_STORE_NAME.to_string()),
        theme_css: styles::snapshot().css_custom_properties(),
        user_id: auth.user_id,
        store_description: settings.store_description.clone().unwrap_or_default(),
        logo_url: settings.logo_url.clone().unwrap_or_default(),
        meta_title: settings.meta_title.clone().unwrap_or_default(),
        meta_description: settings.meta_description.clone().unwrap_or_default(),
        keywords: settings.keywords.join(", "),
        show_testimonials: settings.show_testimonials,
        primary_color: theme.primary_color.clone().unwrap_or_default(),
        secondary_color: theme.secondary_color.clone().unwrap_or_default(),
        font_family: theme.font_family.clone().unwrap_or_default(),
        background_color: theme.background_color.clone().unwrap_or_default(),
        background_gradient: theme.background_gradient.clone().unwrap_or_default(),
    }
}

/// Save the settings form, then re-fetch through the bootstrap.
#[instrument(skip(state, form))]
pub async fn save_settings(
    RequireAdmin(_auth): RequireAdmin,
    State(state): State<AppState>,
    Form(form): Form<SettingsForm>,
) -> Result<Redirect> {
    let (current, _) = state.bootstrap().snapshot();
    let current = current.unwrap_or_default();

    let settings = StoreSettings {
        store_name: non_blank(form.store_name),
        store_description: non_blank(form.store_description),
        logo_url: non_blank(form.logo_url),
        meta_title: non_blank(form.meta_title),
        meta_description: non_blank(form.meta_description),
        keywords: form
            .keywords
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(ToString::to_string)
            .collect(),
        show_testimonials: form.show_testimonials.is_some(),
        theme_settings: ThemeSettings {
            primary_color: non_blank(form.primary_color),
            secondary_color: non_blank(form.secondary_color),
            font_family: non_blank(form.font_family),
            background_color: non_blank(form.background_color),
            background_gradient: non_blank(form.background_gradient),
        },
        ..current
    };

    state.gateway().update_settings(&settings).await?;
    state.bootstrap().refresh_settings().await;

    Ok(Redirect::to("/admin/dashboard"))
}

/// Treat whitespace-only form inputs as cleared fields.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
