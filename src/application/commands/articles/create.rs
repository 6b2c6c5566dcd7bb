// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleCreatedDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleDraft,
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: String,
}

impl From<CreateArticleCommand> for ArticleDraft {
    fn from(command: CreateArticleCommand) -> Self {
        Self {
            title: command.title,
            content: command.content,
            category: command.category,
            status: command.status,
        }
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleCreatedDto> {
        let article = Self::validated(command.into())?;

        let id = self
            .write_repo
            .insert(article)
            .await
            .map_err(|err| ApplicationError::from_store("failed to save article", err))?;

        tracing::info!(article_id = %id, "article created");
        Ok(ArticleCreatedDto {
            id: id.into(),
            message: "article created".into(),
        })
    }
}
