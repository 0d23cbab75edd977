//! Startup sequencing: the splash screen, the minimum display time, and
//! fetch degradation.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tokio::task::yield_now;
use tower::ServiceExt;

use perfume_house_integration_tests::{
    MockGateway, body_text, image_banner, sample_settings, test_state,
};
use perfume_house_storefront::app;
use perfume_house_storefront::bootstrap::SPLASH_MIN;

async fn settle() {
    for _ in 0..8 {
        yield_now().await;
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test(start_paused = true)]
async fn test_splash_holds_for_the_minimum_even_with_instant_fetches() {
    let state = test_state(Arc::new(
        MockGateway::new().with_settings(sample_settings("Perfume House")),
    ));
    let router = app(state);
    settle().await;

    // Fetches resolved immediately, but the splash stays up.
    let response = router.clone().oneshot(get("/")).await.expect("router ok");
    let body = body_text(response).await;
    assert!(body.contains("splash-panel"));

    tokio::time::advance(SPLASH_MIN - Duration::from_millis(1)).await;
    settle().await;
    let response = router.clone().oneshot(get("/")).await.expect("router ok");
    assert!(body_text(response).await.contains("splash-panel"));

    tokio::time::advance(Duration::from_millis(1)).await;
    settle().await;
    let response = router.oneshot(get("/")).await.expect("router ok");
    let body = body_text(response).await;
    assert!(!body.contains("splash-panel"));
    assert!(body.contains("Our Services"));
}

#[tokio::test(start_paused = true)]
async fn test_fetched_settings_show_on_the_splash_itself() {
    let state = test_state(Arc::new(
        MockGateway::new().with_settings(sample_settings("Perfume House")),
    ));
    let router = app(state);
    settle().await;

    let response = router.oneshot(get("/")).await.expect("router ok");
    let body = body_text(response).await;
    assert!(body.contains("splash-panel"));
    assert!(body.contains("Perfume House"));
}

#[tokio::test(start_paused = true)]
async fn test_splash_clears_even_when_fetches_hang() {
    let state = test_state(Arc::new(MockGateway::never_loading()));
    let router = app(state.clone());
    settle().await;

    tokio::time::advance(SPLASH_MIN).await;
    settle().await;

    assert!(state.bootstrap().is_loaded());
    let response = router.oneshot(get("/")).await.expect("router ok");
    let body = body_text(response).await;
    // Fallback store name; no banners, no carousel.
    assert!(body.contains("Perfume Store"));
    assert!(!body.contains("banner-carousel"));
}

#[tokio::test(start_paused = true)]
async fn test_failed_fetches_degrade_to_defaults() {
    let state = test_state(Arc::new(MockGateway::failing()));
    let router = app(state.clone());
    settle().await;

    tokio::time::advance(SPLASH_MIN).await;
    settle().await;

    let (settings, banners) = state.bootstrap().snapshot();
    assert!(settings.is_none());
    assert!(banners.is_empty());

    let response = router.oneshot(get("/")).await.expect("router ok");
    let response_status = response.status();
    let body = body_text(response).await;
    assert_eq!(response_status, StatusCode::OK);
    assert!(body.contains("Perfume Store"));
    assert!(!body.contains("banner-carousel"));
}

#[tokio::test(start_paused = true)]
async fn test_health_bypasses_the_splash_gate() {
    let state = test_state(Arc::new(MockGateway::never_loading()));
    let router = app(state);
    settle().await;

    let response = router.oneshot(get("/health")).await.expect("router ok");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test(start_paused = true)]
async fn test_banners_reach_the_home_page_after_load() {
    let state = test_state(Arc::new(MockGateway::new().with_banners(vec![
        image_banner("Summer Oud", "https://cdn.example/oud.jpg"),
        image_banner("Amber Nights", "https://cdn.example/amber.jpg"),
    ])));
    let router = app(state);
    settle().await;

    tokio::time::advance(SPLASH_MIN).await;
    settle().await;

    let response = router.oneshot(get("/")).await.expect("router ok");
    let body = body_text(response).await;
    assert!(body.contains("banner-carousel"));
    assert!(body.contains("https://cdn.example/oud.jpg"));
    assert!(body.contains("banner-indicator"));
}
