//! Common test utilities for in-process API testing with mocks.
//!
//! The fixture assembles the real router over a synthetic catalog and a
//! scripted relevance service, so every endpoint can be exercised without
//! network access or a running model.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use gadkot_core::testing::{fixtures, MockRelevance};
use gadkot_core::{Config, Fort, FortCatalog, MemoryCatalog, RelevanceService};

// The harness compiles this module once per test binary; not every binary
// uses every helper.
#[allow(dead_code)]
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock relevance service - script ranking results
    pub relevance: Arc<MockRelevance>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a fixture over the four-fort sample catalog with a mock
    /// relevance service wired in.
    pub fn new() -> Self {
        Self::with_forts(fixtures::sample_forts())
    }

    /// Create a fixture over a custom catalog.
    pub fn with_forts(forts: Vec<Fort>) -> Self {
        let relevance = Arc::new(MockRelevance::new());
        let catalog: Arc<dyn FortCatalog> = Arc::new(MemoryCatalog::new(forts));
        let state = Arc::new(app_state(
            catalog,
            Some(relevance.clone() as Arc<dyn RelevanceService>),
        ));
        Self {
            router: gadkot_server::api::create_router(state),
            relevance,
        }
    }

    /// Create a fixture with no relevance service configured.
    pub fn without_relevance() -> Self {
        let catalog: Arc<dyn FortCatalog> =
            Arc::new(MemoryCatalog::new(fixtures::sample_forts()));
        let state = Arc::new(app_state(catalog, None));
        Self {
            router: gadkot_server::api::create_router(state),
            relevance: Arc::new(MockRelevance::new()),
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        };
        TestResponse { status, body }
    }
}

fn app_state(
    catalog: Arc<dyn FortCatalog>,
    relevance: Option<Arc<dyn RelevanceService>>,
) -> gadkot_server::state::AppState {
    gadkot_server::state::AppState::new(Config::default(), catalog, relevance)
}
