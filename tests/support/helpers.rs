// tests/support/helpers.rs
use std::sync::Arc;

use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
    response::Response,
};
use beeshop_core::application::{
    ports::{media::AssetStore, security::TokenVerifier, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
    slugs::SlugAllocator,
};
use beeshop_core::config::AppConfig;
use beeshop_core::domain::{
    category::CategoryRepository, contact::ContactRepository, post::PostRepository,
    product::ProductRepository,
};
use beeshop_core::infrastructure::util::DefaultSlugGenerator;
use beeshop_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::ServiceExt;

use super::mocks::{
    FixedClock, InMemoryDb, RecordingAssetStore, StaleSlugIndex, StaticTokenVerifier,
};

pub const TEST_UPLOAD_MAX_BYTES: usize = 1024 * 1024;

/// Router plus handles on the doubles behind it.
pub struct TestApp {
    pub router: Router,
    pub db: Arc<InMemoryDb>,
    pub store: Arc<RecordingAssetStore>,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }
}

pub fn make_test_app() -> TestApp {
    make_test_app_with_store(RecordingAssetStore::new())
}

pub fn make_test_app_with_store(store: RecordingAssetStore) -> TestApp {
    let db = Arc::new(InMemoryDb::new());
    let category_repo: Arc<dyn CategoryRepository> = db.clone();
    let product_repo: Arc<dyn ProductRepository> = db.clone();
    assemble(db, Arc::new(store), category_repo, product_repo)
}

/// App whose slug and name pre-checks always pass, so duplicates only
/// surface from the storage layer's unique index.
pub fn make_test_app_with_stale_slug_index() -> TestApp {
    let db = Arc::new(InMemoryDb::new());
    let stale = Arc::new(StaleSlugIndex::new(db.clone()));
    let category_repo: Arc<dyn CategoryRepository> = stale.clone();
    let product_repo: Arc<dyn ProductRepository> = stale;
    assemble(db, Arc::new(RecordingAssetStore::new()), category_repo, product_repo)
}

fn assemble(
    db: Arc<InMemoryDb>,
    store: Arc<RecordingAssetStore>,
    category_repo: Arc<dyn CategoryRepository>,
    product_repo: Arc<dyn ProductRepository>,
) -> TestApp {
    let post_repo: Arc<dyn PostRepository> = db.clone();
    let contact_repo: Arc<dyn ContactRepository> = db.clone();
    let asset_store: Arc<dyn AssetStore> = store.clone();
    let token_verifier: Arc<dyn TokenVerifier> = Arc::new(StaticTokenVerifier);
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        category_repo,
        product_repo,
        post_repo,
        contact_repo,
        asset_store,
        token_verifier,
        clock,
        slugger,
        SlugAllocator::DEFAULT_MAX_ATTEMPTS,
    ));

    let state = HttpState {
        services,
        upload_max_bytes: TEST_UPLOAD_MAX_BYTES,
    };
    let router = build_router(state, &AppConfig::allowed_origins_from_env());

    TestApp { router, db, store }
}

pub fn make_test_router() -> Router {
    make_test_app().router
}

/// Hand-rolled `multipart/form-data` body for driving upload endpoints.
pub struct MultipartBody {
    boundary: String,
    body: Vec<u8>,
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartBody {
    pub fn new() -> Self {
        Self {
            boundary: "beeshop-test-boundary".into(),
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: image/jpeg\r\n\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        self.body
    }
}

pub fn multipart_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    form: MultipartBody,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, form.content_type());
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(form.into_bytes())).unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, payload: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(payload.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
