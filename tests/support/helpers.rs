// tests/support/helpers.rs
use super::mocks;
use article_api::application::services::ApplicationServices;
use article_api::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use article_api::infrastructure::{
    database,
    repositories::{SqliteArticleReadRepository, SqliteArticleWriteRepository},
};
use article_api::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const TEST_MAX_PAGE_SIZE: u32 = 100;

fn router_with(
    write: Arc<dyn ArticleWriteRepository>,
    read: Arc<dyn ArticleReadRepository>,
) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(write, read, TEST_MAX_PAGE_SIZE));
    let state = HttpState { services };
    build_router(state, &["http://localhost:3000".to_string()])
}

/// Router backed by a fresh in-memory SQLite database with the real schema.
pub async fn make_test_router() -> axum::Router {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory database");
    database::run_migrations(&pool)
        .await
        .expect("apply migrations");

    router_with(
        Arc::new(SqliteArticleWriteRepository::new(pool.clone())),
        Arc::new(SqliteArticleReadRepository::new(pool)),
    )
}

/// Router whose store rejects every statement.
pub fn make_failing_router() -> axum::Router {
    router_with(
        Arc::new(mocks::FailingArticleWrite),
        Arc::new(mocks::FailingArticleRead),
    )
}

pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json)
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).expect("build request"))
        .await
        .expect("router is infallible")
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json body")
}

/// Status, JSON content type, then the `{error, message}` shape.
/// Returns the message for further checks.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let json = json_body(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
    msg_field.to_string()
}

/// POST a body and return the new id, asserting success.
pub async fn create_article(app: &axum::Router, body: String) -> i64 {
    let resp = send(app, Method::POST, "/article", Some(body)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    json["id"].as_i64().expect("numeric id")
}
