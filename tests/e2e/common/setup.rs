use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, HeaderName, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use explorer_node::config::settings::ExplorerSettings;
use explorer_node::infra::repositories::InMemoryConfigRepository;
use explorer_node::{build_app, AppState};

use crate::common::logs::init_logging;

/// Every test gets its own application and its own in-memory storage.
pub struct TestHelper {
    app: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

impl TestHelper {
    pub fn new(settings: &ExplorerSettings) -> Self {
        let state = AppState::new(settings, Arc::new(InMemoryConfigRepository::new()));
        Self {
            app: build_app(state),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let content_type = header_value(response.headers(), header::CONTENT_TYPE);
        let location = header_value(response.headers(), header::LOCATION);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            content_type,
            location,
            body: String::from_utf8(body.to_vec()).unwrap(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .map(|value| value.to_str().unwrap().to_owned())
}

#[rstest::fixture]
pub fn setup(#[from(init_logging)] _logging: ()) -> TestHelper {
    TestHelper::new(&ExplorerSettings::default())
}
