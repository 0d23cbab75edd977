//! Public pages: home grid, category listings, detail pages, theming.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tokio::task::yield_now;
use tower::ServiceExt;
use uuid::Uuid;

use perfume_house_core::{StoreSettings, ThemeSettings};
use perfume_house_integration_tests::{
    MockGateway, body_text, category, image_banner, product, sample_settings, service, test_state,
};
use perfume_house_storefront::app;
use perfume_house_storefront::bootstrap::SPLASH_MIN;
use perfume_house_storefront::theme::run_theme_engine;

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
async fn test_home_lists_services() {
    let state = test_state(Arc::new(
        MockGateway::new()
            .with_settings(sample_settings("Perfume House"))
            .with_services(vec![service("Gift Wrapping"), service("Scent Matching")]),
    ));
    settle().await;
    tokio::time::advance(SPLASH_MIN).await;
    settle().await;

    let response = app(state).oneshot(get("/")).await.expect("router ok");
    let status = response.status();
    let body = body_text(response).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Gift Wrapping"));
    assert!(body.contains("Scent Matching"));
}

#[tokio::test(start_paused = true)]
async fn test_theme_variables_flow_into_the_page() {
    let settings = StoreSettings {
        theme_settings: ThemeSettings {
            primary_color: Some("#112233".to_string()),
            background_gradient: Some("linear-gradient(#000, #333)".to_string()),
            ..ThemeSettings::default()
        },
        ..sample_settings("Perfume House")
    };
    let state = test_state(Arc::new(MockGateway::new().with_settings(settings)));
    tokio::spawn(run_theme_engine(state.bootstrap().settings()));
    settle().await;
    tokio::time::advance(SPLASH_MIN).await;
    settle().await;

    let response = app(state).oneshot(get("/")).await.expect("router ok");
    let body = body_text(response).await;
    assert!(body.contains("--color-primary: #112233"));
    // Gradient set, so the layout background uses it and the flat color
    // variable is absent.
    assert!(body.contains("background: linear-gradient(#000, #333)"));
    assert!(!body.contains("--background-color:"));
}

#[tokio::test(start_paused = true)]
async fn test_category_page_lists_its_products_only() {
    let oud = category("Oud");
    let amber = category("Amber");
    let in_oud = product("Royal Oud", oud.id);
    let in_amber = product("Amber Musk", amber.id);
    let oud_id = oud.id;

    let state = test_state(Arc::new(
        MockGateway::new()
            .with_categories(vec![oud, amber])
            .with_products(vec![in_oud, in_amber]),
    ));
    settle().await;
    tokio::time::advance(SPLASH_MIN).await;
    settle().await;

    let response = app(state)
        .oneshot(get(&format!("/category/{oud_id}")))
        .await
        .expect("router ok");
    let status = response.status();
    let body = body_text(response).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Oud"));
    assert!(body.contains("Royal Oud"));
    assert!(!body.contains("Amber Musk"));
}

#[tokio::test(start_paused = true)]
async fn test_product_detail_and_missing_product() {
    let oud = category("Oud");
    let royal = product("Royal Oud", oud.id);
    let royal_id = royal.id;

    let state = test_state(Arc::new(
        MockGateway::new()
            .with_categories(vec![oud])
            .with_products(vec![royal]),
    ));
    settle().await;
    tokio::time::advance(SPLASH_MIN).await;
    settle().await;
    let router = app(state);

    let response = router
        .clone()
        .oneshot(get(&format!("/product/{royal_id}")))
        .await
        .expect("router ok");
    let status = response.status();
    let body = body_text(response).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Royal Oud"));
    assert!(body.contains("129.00"));

    let missing = Uuid::new_v4();
    let response = router
        .clone()
        .oneshot(get(&format!("/product/{missing}")))
        .await
        .expect("router ok");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = router
        .oneshot(get("/product/not-a-uuid"))
        .await
        .expect("router ok");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(start_paused = true)]
async fn test_service_detail_renders() {
    let wrapping = service("Gift Wrapping");
    let wrapping_id = wrapping.id;

    let state = test_state(Arc::new(MockGateway::new().with_services(vec![wrapping])));
    settle().await;
    tokio::time::advance(SPLASH_MIN).await;
    settle().await;

    let response = app(state)
        .oneshot(get(&format!("/service/{wrapping_id}")))
        .await
        .expect("router ok");
    let status = response.status();
    let body = body_text(response).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Gift Wrapping"));
    assert!(body.contains("Gift Wrapping description"));
}

#[tokio::test(start_paused = true)]
async fn test_carousel_markup_only_on_home() {
    let oud = category("Oud");
    let oud_id = oud.id;
    let state = test_state(Arc::new(
        MockGateway::new()
            .with_banners(vec![
                image_banner("Summer Oud", "https://cdn.example/oud.jpg"),
                image_banner("Amber Nights", "https://cdn.example/amber.jpg"),
            ])
            .with_categories(vec![oud]),
    ));
    settle().await;
    tokio::time::advance(SPLASH_MIN).await;
    settle().await;
    let router = app(state);

    let response = router.clone().oneshot(get("/")).await.expect("router ok");
    assert!(body_text(response).await.contains("banner-carousel"));

    let response = router
        .oneshot(get(&format!("/category/{oud_id}")))
        .await
        .expect("router ok");
    assert!(!body_text(response).await.contains("banner-carousel"));
}
