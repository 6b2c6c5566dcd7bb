// tests/support/mocks/article_repos.rs
use article_api::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle, PageRequest,
};
use article_api::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

pub const STORE_FAILURE: &str = "database is locked";

fn store_down<T>() -> DomainResult<T> {
    Err(DomainError::Persistence(STORE_FAILURE.into()))
}

/// Write repository whose every statement fails at the store.
pub struct FailingArticleWrite;

#[async_trait]
impl ArticleWriteRepository for FailingArticleWrite {
    async fn insert(&self, _article: NewArticle) -> DomainResult<ArticleId> {
        store_down()
    }

    async fn update(&self, _id: ArticleId, _article: NewArticle) -> DomainResult<()> {
        store_down()
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        store_down()
    }
}

/// Read repository whose every statement fails at the store.
pub struct FailingArticleRead;

#[async_trait]
impl ArticleReadRepository for FailingArticleRead {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Article> {
        store_down()
    }

    async fn list(&self, _page: PageRequest) -> DomainResult<Vec<Article>> {
        store_down()
    }
}
