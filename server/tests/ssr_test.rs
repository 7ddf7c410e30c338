//! SSR integration tests
//!
//! These tests verify that server-side rendering works for both pages
//! without panicking.

#![recursion_limit = "512"]
#![allow(clippy::unwrap_used)]

use app::{config::Config, db};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use server_lib::{AppState, build_router};
use tower::util::ServiceExt;

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        target_year: 2025,
        bind_address: "127.0.0.1:0".to_string(),
        run_migrations: true,
    }
}

async fn setup_test_app() -> axum::Router {
    let db = db::init_database("sqlite::memory:", 1).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    build_router(AppState::new(db, test_config()))
}

async fn get_page(uri: &str) -> (StatusCode, String) {
    let app = setup_test_app().await;
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_overview_page_ssr_no_panic() {
    let (status, body) = get_page("/").await;

    assert_eq!(status, StatusCode::OK, "Expected 200 OK for overview page SSR");
    assert!(body.contains("EV Charging Station Dashboard"));
}

#[tokio::test]
async fn test_lookup_page_ssr_no_panic() {
    let (status, body) = get_page("/stations").await;

    assert_eq!(status, StatusCode::OK, "Expected 200 OK for /stations SSR");
    assert!(body.contains("Stations by neighborhood"));
}

#[tokio::test]
async fn test_lookup_page_has_refresh_control() {
    let (_, body) = get_page("/stations").await;
    assert!(body.contains("Refresh data"));
}

#[tokio::test]
async fn test_sidebar_links_both_pages() {
    let (_, body) = get_page("/").await;

    assert!(body.contains("href=\"/stations\""));
    assert!(body.contains("Station lookup"));
}

#[tokio::test]
async fn test_pkg_miss_is_404() {
    let (status, _) = get_page("/pkg/missing.wasm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
