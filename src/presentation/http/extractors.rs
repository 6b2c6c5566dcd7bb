// src/presentation/http/extractors.rs
use crate::application::error::ApplicationError;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::HttpError;

fn reject(err: ApplicationError) -> HttpError {
    let rejection = HttpError::from_error(err);
    tracing::warn!(
        status = %rejection.status(),
        reason = rejection.message(),
        "request rejected"
    );
    rejection
}

/// JSON request body. The `Content-Type` header is not consulted: the raw
/// bytes are decoded as JSON whatever the client labelled them. Syntax, shape
/// and unreadable-stream failures are a 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| reject(ApplicationError::decode(rejection.body_text())))?;

        serde_json::from_slice::<T>(&bytes)
            .map(Self)
            .map_err(|err| reject(ApplicationError::decode(err.to_string())))
    }
}

/// The `{id}` path segment parsed as an integer.
#[derive(Debug, Clone, Copy)]
pub struct ArticleIdPath(pub i64);

impl<S> FromRequestParts<S> for ArticleIdPath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| reject(ApplicationError::parameter(rejection.body_text())))?;

        raw.parse::<i64>().map(Self).map_err(|_| {
            reject(ApplicationError::parameter(format!(
                "invalid article id: {raw:?}"
            )))
        })
    }
}

/// Required `limit` and `offset` query parameters. When a key repeats, its
/// first value wins. Sign checks happen in the query service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub limit: i64,
    pub offset: i64,
}

fn first_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn required_integer(name: &str, raw: Option<&str>) -> Result<i64, ApplicationError> {
    let raw = raw.ok_or_else(|| ApplicationError::parameter(format!("{name} is required")))?;
    raw.parse::<i64>().map_err(|_| {
        ApplicationError::parameter(format!("invalid {name}: {raw:?} is not an integer"))
    })
}

impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|rejection| reject(ApplicationError::parameter(rejection.body_text())))?;

        let limit = required_integer("limit", first_value(&pairs, "limit")).map_err(reject)?;
        let offset = required_integer("offset", first_value(&pairs, "offset")).map_err(reject)?;
        Ok(Self { limit, offset })
    }
}
