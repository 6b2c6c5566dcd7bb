use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::from(query.id);
        let article = self
            .read_repo
            .find_by_id(id)
            .await
            .map_err(|err| ApplicationError::from_store("failed to fetch article", err))?;
        Ok(article.into())
    }
}
