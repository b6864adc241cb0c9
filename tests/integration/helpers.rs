//! Shared test helpers for integration tests.

use std::path::PathBuf;

use axum::Router;
use axum::body::{Body, Bytes};
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use cardhub_api::{AppState, build_app};
use cardhub_core::config::AppConfig;
use cardhub_database::Stores;
use cardhub_storage::FileManager;

const BOUNDARY: &str = "cardhub-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Upload root; removed when the app is dropped
    pub storage_root: TempDir,
}

impl TestApp {
    /// Create a new test application with empty stores and storage.
    pub async fn new() -> Self {
        let storage_root = tempfile::tempdir().expect("Failed to create storage root");

        let mut config =
            AppConfig::load_from("tests/fixtures", "test").expect("Failed to load test config");
        config.storage.root = storage_root.path().to_string_lossy().into_owned();

        let files = FileManager::new(&config.storage)
            .await
            .expect("Failed to init storage");
        let stores = Stores::connect(&config.database)
            .await
            .expect("Failed to init stores");

        let state = AppState::new(config.clone(), stores, files).expect("Failed to build app state");
        let router = build_app(state);

        Self {
            router,
            config,
            storage_root,
        }
    }

    /// Absolute path of a file under the upload root.
    pub fn storage_path(&self, relative: &str) -> PathBuf {
        self.storage_root.path().join(relative)
    }

    /// Number of entries in an upload sub-directory.
    pub fn file_count(&self, dir: &str) -> usize {
        std::fs::read_dir(self.storage_path(dir))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    /// Register a user with the given credentials.
    pub async fn register(&self, username: &str, password: &str, email: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "username": username,
                "password": password,
                "email": email,
            })),
            None,
        )
        .await
    }

    /// Login and return JWT access token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in login response")
            .to_string()
    }

    /// Register `username` with a fixed password and return a token.
    pub async fn user_token(&self, username: &str) -> String {
        let response = self
            .register(username, "password123", &format!("{username}@example.com"))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        self.login(username, "password123").await
    }

    /// Make a JSON HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await.into()
    }

    /// Send a multipart form.
    pub async fn multipart(
        &self,
        method: &str,
        path: &str,
        form: &MultipartForm,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            );

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(form.to_body()))
            .expect("Failed to build request");

        self.send(req).await.into()
    }

    /// GET a path and return the raw response.
    pub async fn get_raw(&self, path: &str) -> RawResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> RawResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        RawResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl From<RawResponse> for TestResponse {
    fn from(raw: RawResponse) -> Self {
        Self {
            status: raw.status,
            body: serde_json::from_slice(&raw.body).unwrap_or(Value::Null),
        }
    }
}

/// Unparsed response
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Hand-built `multipart/form-data` body.
#[derive(Debug, Default, Clone)]
pub struct MultipartForm {
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    /// Add a file part.
    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    fn to_body(&self) -> Vec<u8> {
        let mut body = self.body.clone();
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }
}

/// A typical card form with both files attached.
pub fn full_card_form(name: &str) -> MultipartForm {
    MultipartForm::new()
        .text("name", name)
        .text("email", "card@example.com")
        .text("birthday", "1990-05-17T00:00:00")
        .text("profession", "Engineer")
        .text("fb_link", "https://facebook.com/someone")
        .text("line_link", "https://line.me/ti/p/someone")
        .file("avatar", "face.png", "image/png", b"\x89PNG fake")
        .file("cardVcf", "me.vcf", "text/vcard", b"BEGIN:VCARD\r\nEND:VCARD\r\n")
}

/// The caller's cards.
pub async fn list_cards(app: &TestApp, token: &str) -> Vec<Value> {
    let response = app.request("GET", "/api/cards", None, Some(token)).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response
        .body
        .as_array()
        .cloned()
        .expect("card list is an array")
}
