// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleCreatedDto, ArticleDto, MessageDto},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ArticleIdPath, JsonBody, PageParams};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

/// Body accepted by create and update. Absent or `null` fields become empty
/// strings and fail the presence checks; an `id` in the body is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[utoipa::path(
    post,
    path = "/article",
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article stored.", body = ArticleCreatedDto),
        (status = 400, description = "Malformed body or failed validation.", body = ErrorResponse),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> HttpResult<Json<ArticleCreatedDto>> {
    let command = CreateArticleCommand {
        title: payload.title.unwrap_or_default(),
        content: payload.content.unwrap_or_default(),
        category: payload.category.unwrap_or_default(),
        status: payload.status.unwrap_or_default(),
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles",
    params(
        ("limit" = i64, Query, description = "Maximum number of articles to return."),
        ("offset" = i64, Query, description = "Number of articles to skip.")
    ),
    responses(
        (status = 200, description = "A page of articles, possibly empty.", body = [ArticleDto]),
        (status = 400, description = "Missing or invalid limit/offset.", body = ErrorResponse),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    params: PageParams,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            limit: params.limit,
            offset: params.offset,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/article/{id}",
    params(("id" = i64, Path, description = "Article identifier.")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 400, description = "Non-integer id.", body = ErrorResponse),
        (status = 500, description = "Unknown id or storage failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_id(
    Extension(state): Extension<HttpState>,
    ArticleIdPath(id): ArticleIdPath,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/article/{id}",
    params(("id" = i64, Path, description = "Article identifier.")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article replaced (also reported for unknown ids).", body = MessageDto),
        (status = 400, description = "Non-integer id, malformed body or failed validation.", body = ErrorResponse),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ArticleIdPath(id): ArticleIdPath,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> HttpResult<Json<MessageDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title.unwrap_or_default(),
        content: payload.content.unwrap_or_default(),
        category: payload.category.unwrap_or_default(),
        status: payload.status.unwrap_or_default(),
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/article/{id}",
    params(("id" = i64, Path, description = "Article identifier.")),
    responses(
        (status = 200, description = "Article removed (also reported for unknown ids).", body = MessageDto),
        (status = 400, description = "Non-integer id.", body = ErrorResponse),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ArticleIdPath(id): ArticleIdPath,
) -> HttpResult<Json<MessageDto>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}
