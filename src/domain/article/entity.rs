// src/domain/article/entity.rs
use crate::domain::article::validation::validate;
use crate::domain::article::value_objects::{
    ArticleCategory, ArticleContent, ArticleId, ArticleStatus, ArticleTitle,
};
use crate::domain::errors::{DomainError, DomainResult};

/// A persisted row. Values are carried as stored; write-time rules are not
/// re-checked on read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: String,
}

/// Candidate article as decoded from a request body. Missing fields decode to
/// empty strings and are reported by the presence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: String,
}

/// An article that has passed [`validate`] and may be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub category: ArticleCategory,
    pub status: ArticleStatus,
}

impl TryFrom<ArticleDraft> for NewArticle {
    type Error = DomainError;

    fn try_from(draft: ArticleDraft) -> DomainResult<Self> {
        validate(&draft)?;

        Ok(Self {
            title: ArticleTitle(draft.title),
            content: ArticleContent(draft.content),
            category: ArticleCategory(draft.category),
            status: ArticleStatus(draft.status),
        })
    }
}
