use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::pagination::PageRequest;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Returns the identifier assigned by the store.
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId>;
    /// Overwrites every field but the id. Matching zero rows is not an error.
    async fn update(&self, id: ArticleId, article: NewArticle) -> DomainResult<()>;
    /// Matching zero rows is not an error.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Fails with `DomainError::NotFound` when no row has this id.
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Article>;
    async fn list(&self, page: PageRequest) -> DomainResult<Vec<Article>>;
}
