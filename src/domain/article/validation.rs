use crate::domain::article::entity::ArticleDraft;
use crate::domain::article::value_objects::{
    ALLOWED_STATUSES, CATEGORY_MIN_CHARS, CONTENT_MIN_CHARS, TITLE_MIN_CHARS,
};
use crate::domain::errors::{DomainError, DomainResult};

/// Check a candidate article without side effects.
///
/// Rules run in a fixed order (title, content, category, status; presence
/// before length or membership for each) and the first failure is returned
/// as [`DomainError::Validation`].
pub fn validate(draft: &ArticleDraft) -> DomainResult<()> {
    require_text("title", &draft.title, TITLE_MIN_CHARS)?;
    require_text("content", &draft.content, CONTENT_MIN_CHARS)?;
    require_text("category", &draft.category, CATEGORY_MIN_CHARS)?;
    require_status(&draft.status)
}

/// Presence first, then length. Lengths are counted in chars, not bytes.
fn require_text(field: &str, value: &str, min_chars: usize) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    if value.chars().count() < min_chars {
        return Err(DomainError::Validation(format!(
            "{field} must be at least {min_chars} characters"
        )));
    }
    Ok(())
}

fn require_status(value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::Validation("status is required".into()));
    }
    let folded = fold_case(value);
    if !ALLOWED_STATUSES.contains(&folded.as_str()) {
        return Err(DomainError::Validation(format!(
            "status must be one of: {}",
            ALLOWED_STATUSES.join(", ")
        )));
    }
    Ok(())
}

/// Per-char simple lowercase mapping: each char folds to exactly one char, so
/// `İ` becomes `i` rather than `i` plus a combining dot.
fn fold_case(value: &str) -> String {
    value
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}
