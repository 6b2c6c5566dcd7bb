use std::fmt;

pub const TITLE_MIN_CHARS: usize = 20;
pub const CONTENT_MIN_CHARS: usize = 200;
pub const CATEGORY_MIN_CHARS: usize = 3;
pub const ALLOWED_STATUSES: [&str; 3] = ["publish", "draft", "thrash"];

/// Store-assigned identifier. Never validated: ids that do not exist simply
/// match no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl From<i64> for ArticleId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(pub(super) String);

impl ArticleTitle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(pub(super) String);

impl ArticleContent {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCategory(pub(super) String);

impl ArticleCategory {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Accepted status, carrying the casing it was submitted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleStatus(pub(super) String);

impl ArticleStatus {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
