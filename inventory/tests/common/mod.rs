//! Common test utilities for integration tests.
//!
//! [`TestApp`] wraps a router backed by a store in its own temporary
//! directory, and drives it in-process with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use inventory::{api, ComponentStore, DatabaseConfig};

/// An isolated router plus the directory holding its database.
pub struct TestApp {
    pub router: Router,
    pub store: ComponentStore,
    pub temp: TempDir,
}

/// A decoded response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Creates a fresh, empty inventory.
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let store = ComponentStore::open(DatabaseConfig::in_data_dir(temp.path())).unwrap();
        Self {
            router: api::router(store.clone()),
            store,
            temp,
        }
    }

    /// Sends a request with an optional JSON body.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let request = match body {
            Some(body) => Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };
        self.send(request).await
    }

    /// Sends a raw JSON payload without parsing it first.
    pub async fn request_raw(&self, method: Method, uri: &str, payload: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
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
            serde_json::from_slice(&bytes).unwrap()
        };
        TestResponse { status, body }
    }

    /// Creates a component and returns its assigned id.
    pub async fn create(&self, body: Value) -> i64 {
        let response = self.request(Method::POST, "/components", Some(body)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["id"].as_i64().unwrap()
    }
}

/// A complete, valid request body.
pub fn arduino_body() -> Value {
    json!({
        "name": "Arduino Uno",
        "type": "Microcontroller",
        "version": "R3",
        "description": "ATmega328P board",
        "amount": 5,
        "datasheet_url": "http://example.com/uno.pdf"
    })
}

/// A valid request body without a version.
pub fn resistor_body(n: usize) -> Value {
    json!({
        "name": format!("Resistor {n}"),
        "type": "Resistor",
        "description": "1/4 W carbon film",
        "amount": 100,
        "datasheet_url": ""
    })
}
