use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService, queries::articles::ArticleQueryService,
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

/// Explicitly constructed service graph shared by every request handler.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        max_page_size: u32,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(Arc::clone(
            &article_write_repo,
        )));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            max_page_size,
        ));

        Self {
            article_commands,
            article_queries,
        }
    }
}
