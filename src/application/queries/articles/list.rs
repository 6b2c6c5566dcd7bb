use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::PageRequest,
};

pub struct ListArticlesQuery {
    pub limit: i64,
    pub offset: i64,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let page = self.normalize_page(query.limit, query.offset)?;

        let records = self
            .read_repo
            .list(page)
            .await
            .map_err(|err| ApplicationError::from_store("failed to list articles", err))?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Rejects negative bounds and caps `limit` at the configured page size.
    pub(super) fn normalize_page(
        &self,
        limit: i64,
        offset: i64,
    ) -> ApplicationResult<PageRequest> {
        if limit < 0 {
            return Err(ApplicationError::parameter("limit must not be negative"));
        }
        if offset < 0 {
            return Err(ApplicationError::parameter("offset must not be negative"));
        }

        let limit = u32::try_from(limit).unwrap_or(u32::MAX);

        Ok(PageRequest::new(
            limit.min(self.max_page_size),
            offset.unsigned_abs(),
        ))
    }
}
