// SPDX-License-Identifier: MIT

use axum::body::Body;
use axum::http::{Request, StatusCode};
use octofit_dashboard::config::Config;
use octofit_dashboard::routes::create_router;
use octofit_dashboard::services::ApiClient;
use octofit_dashboard::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app pointed at the given backend origin
/// (usually a wiremock server).
#[allow(dead_code)]
pub fn create_test_app(base_url: &str) -> axum::Router {
    let config = Config {
        api_base_url: base_url.trim_end_matches('/').to_string(),
        port: 0,
    };
    let api = ApiClient::new(config.api_base_url.clone());
    create_router(Arc::new(AppState { config, api }))
}

/// GET a page and return its status and body text.
#[allow(dead_code)]
pub async fn get_page(app: axum::Router, path: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
