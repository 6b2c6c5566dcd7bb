use super::ArticleCommandService;
use crate::{
    application::{
        dto::MessageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleDraft, ArticleId},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: String,
}

impl ArticleCommandService {
    /// Replaces every field of the article. An id with no matching row still
    /// reports success.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<MessageDto> {
        let UpdateArticleCommand {
            id,
            title,
            content,
            category,
            status,
        } = command;

        let article = Self::validated(ArticleDraft {
            title,
            content,
            category,
            status,
        })?;
        let id = ArticleId::from(id);

        self.write_repo
            .update(id, article)
            .await
            .map_err(|err| ApplicationError::from_store("failed to update article", err))?;

        tracing::info!(article_id = %id, "article updated");
        Ok(MessageDto::new("article updated"))
    }
}
