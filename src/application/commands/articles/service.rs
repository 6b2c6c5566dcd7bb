// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{ArticleDraft, ArticleWriteRepository, NewArticle},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
}

impl ArticleCommandService {
    pub fn new(write_repo: Arc<dyn ArticleWriteRepository>) -> Self {
        Self { write_repo }
    }

    pub(super) fn validated(draft: ArticleDraft) -> ApplicationResult<NewArticle> {
        NewArticle::try_from(draft).map_err(|err| {
            let err = ApplicationError::from(err);
            tracing::warn!(error = %err, "article rejected");
            err
        })
    }
}
