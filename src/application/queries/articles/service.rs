use std::sync::Arc;

use crate::domain::article::ArticleReadRepository;

pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) max_page_size: u32,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, max_page_size: u32) -> Self {
        Self {
            read_repo,
            max_page_size,
        }
    }
}
