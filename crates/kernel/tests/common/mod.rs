#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! [`TestApp`] wraps the REAL kernel router and state around the demo site
//! from `drakkar-test-utils`, so tests exercise the same code paths as the
//! server.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use drakkar_kernel::{AppState, FileUrlGenerator, MemoryStore, routes};
use drakkar_test_utils::{demo, demo_site};

/// Cache lifetime used by the test app.
pub const CACHE_MAX_AGE: u32 = 600;

/// In-memory store loaded with the demo site.
pub fn demo_store() -> MemoryStore {
    let urls = FileUrlGenerator::new(demo::SITE_URL, demo::FILES_PATH).unwrap();
    MemoryStore::from_fixtures(demo_site(), urls)
}

/// Test application wrapper using the REAL kernel routes and state.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// An open app: no API token configured.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// An app that requires `Authorization: Bearer <token>`.
    pub fn with_token(token: &str) -> Self {
        Self::build(Some(token.to_string()))
    }

    fn build(api_token: Option<String>) -> Self {
        let state = AppState::from_store(Arc::new(demo_store()), CACHE_MAX_AGE, api_token);
        let router = routes::app(state.clone());
        Self { router, state }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// GET `uri` and decode the JSON body.
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        TestResponse::read(self.request(request).await).await
    }

    /// GET `uri` with an `Authorization` header.
    pub async fn get_with_auth(&self, uri: &str, authorization: &str) -> TestResponse {
        let request = Request::get(uri)
            .header(header::AUTHORIZATION, authorization)
            .body(Body::empty())
            .unwrap();
        TestResponse::read(self.request(request).await).await
    }
}

/// A buffered response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

impl TestResponse {
    async fn read(response: Response) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        Self {
            status,
            headers,
            json,
        }
    }
}

/// String form of one of the demo site's fixed uuids.
pub fn uuid(value: u128) -> String {
    uuid::Uuid::from_u128(value).to_string()
}
