// src/presentation/http/routes.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::articles,
    error::HttpError,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{
        HeaderValue, Method, Uri,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health).fallback(method_not_allowed))
        .route(
            "/openapi.json",
            get(openapi::serve_openapi).fallback(method_not_allowed),
        )
        .route(
            "/article",
            post(articles::create_article).fallback(method_not_allowed),
        )
        .route(
            "/articles",
            get(articles::list_articles).fallback(method_not_allowed),
        )
        .route(
            "/article/{id}",
            get(articles::get_article_by_id)
                .put(articles::update_article)
                .delete(articles::delete_article)
                .fallback(method_not_allowed),
        )
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

async fn method_not_allowed(method: Method, uri: Uri) -> HttpError {
    tracing::warn!(%method, path = uri.path(), "method not allowed");
    HttpError::from_error(ApplicationError::method_not_allowed(format!(
        "{method} is not supported on {}",
        uri.path()
    )))
}

async fn route_not_found(uri: Uri) -> HttpError {
    HttpError::route_not_found(uri.path())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
