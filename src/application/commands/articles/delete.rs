// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::MessageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<MessageDto> {
        let id = ArticleId::from(command.id);

        self.write_repo
            .delete(id)
            .await
            .map_err(|err| ApplicationError::from_store("failed to delete article", err))?;

        tracing::info!(article_id = %id, "article deleted");
        Ok(MessageDto::new("article deleted"))
    }
}
