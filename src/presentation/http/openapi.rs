// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article_by_id,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::ArticleRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleCreatedDto,
            crate::application::dto::MessageDto
        )
    ),
    tags(
        (name = "Articles", description = "Article CRUD endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Article API",
        description = "CRUD service for articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_article_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in ["/article", "/articles", "/article/{id}", "/health"] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }
    }

    #[test]
    fn snapshot_is_written_as_json() {
        let dir = std::env::temp_dir().join(format!("article-api-openapi-{}", std::process::id()));
        let path = dir.join("openapi.json");
        write_openapi_snapshot(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(written["info"]["title"], "Article API");
        std::fs::remove_dir_all(dir).ok();
    }
}
