//! Admin access: login, logout, the session cookie, and the redirect for
//! anonymous visitors.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use tokio::task::yield_now;
use tower::ServiceExt;

use perfume_house_integration_tests::{MockGateway, body_text, sample_settings, test_state};
use perfume_house_storefront::app;
use perfume_house_storefront::bootstrap::SPLASH_MIN;
use perfume_house_storefront::state::AppState;

const EMAIL: &str = "admin@example.com";
const PASSWORD: &str = "kR9mX2vQ7pL4wN8j";

async fn settle() {
    for _ in 0..8 {
        yield_now().await;
    }
}

async fn loaded_admin_state() -> AppState {
    let state = test_state(Arc::new(
        MockGateway::new()
            .with_settings(sample_settings("Perfume House"))
            .with_admin(EMAIL, PASSWORD),
    ));
    settle().await;
    tokio::time::advance(SPLASH_MIN).await;
    settle().await;
    state
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("request builds")
}

fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn session_cookie(response: &Response) -> String {
    let raw = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("login sets a session cookie");
    raw.split(';').next().expect("cookie has a value").to_string()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test(start_paused = true)]
async fn test_anonymous_dashboard_visit_redirects_to_login() {
    let state = loaded_admin_state().await;
    let router = app(state);

    let response = router
        .oneshot(get("/admin/dashboard", None))
        .await
        .expect("router ok");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
}

#[tokio::test(start_paused = true)]
async fn test_login_issues_a_session_and_admits_the_dashboard() {
    let state = loaded_admin_state().await;
    let router = app(state.clone());

    let body = format!("email=admin%40example.com&password={PASSWORD}");
    let response = router
        .clone()
        .oneshot(post_form("/admin/login", &body, None))
        .await
        .expect("router ok");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/dashboard");
    let cookie = session_cookie(&response);

    // The in-process observers see the sign-in too.
    assert!(state.sessions().current().is_some());

    let response = router
        .oneshot(get("/admin/dashboard", Some(&cookie)))
        .await
        .expect("router ok");
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("Dashboard"));
    assert!(page.contains("admin-1"));
}

#[tokio::test(start_paused = true)]
async fn test_rejected_credentials_rerender_the_login_form() {
    let state = loaded_admin_state().await;
    let router = app(state.clone());

    let response = router
        .oneshot(post_form(
            "/admin/login",
            "email=admin%40example.com&password=wrong",
            None,
        ))
        .await
        .expect("router ok");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Invalid email or password"));
    assert!(state.sessions().current().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_logout_revokes_the_cookie() {
    let state = loaded_admin_state().await;
    let router = app(state.clone());

    let body = format!("email=admin%40example.com&password={PASSWORD}");
    let response = router
        .clone()
        .oneshot(post_form("/admin/login", &body, None))
        .await
        .expect("router ok");
    let cookie = session_cookie(&response);

    let response = router
        .clone()
        .oneshot(post_form("/admin/logout", "", Some(&cookie)))
        .await
        .expect("router ok");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
    assert!(state.sessions().current().is_none());

    // The old cookie no longer admits.
    let response = router
        .oneshot(get("/admin/dashboard", Some(&cookie)))
        .await
        .expect("router ok");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
}

#[tokio::test(start_paused = true)]
async fn test_saving_settings_writes_through_and_refreshes() {
    let gateway = Arc::new(
        MockGateway::new()
            .with_settings(sample_settings("Perfume House"))
            .with_admin(EMAIL, PASSWORD),
    );
    let state = test_state(Arc::clone(&gateway));
    settle().await;
    tokio::time::advance(SPLASH_MIN).await;
    settle().await;
    let router = app(state.clone());

    let body = format!("email=admin%40example.com&password={PASSWORD}");
    let response = router
        .clone()
        .oneshot(post_form("/admin/login", &body, None))
        .await
        .expect("router ok");
    let cookie = session_cookie(&response);

    let form = "store_name=Oud+%26+Amber&primary_color=%23112233&show_testimonials=on";
    let response = router
        .oneshot(post_form("/admin/settings", form, Some(&cookie)))
        .await
        .expect("router ok");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/dashboard");

    let updates = gateway.recorded_updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].store_name.as_deref(), Some("Oud & Amber"));
    assert!(updates[0].show_testimonials);
    assert_eq!(
        updates[0].theme_settings.primary_color.as_deref(),
        Some("#112233")
    );

    // The refresh after the save republishes the new record.
    let (settings, _) = state.bootstrap().snapshot();
    assert_eq!(
        settings.and_then(|s| s.store_name),
        Some("Oud & Amber".to_string())
    );
}
