// tests/support/builders.rs
use serde_json::{Value, json};

/// JSON body for create/update requests. Starts out valid.
pub struct ArticleBodyBuilder {
    title: String,
    content: String,
    category: String,
    status: String,
}

impl Default for ArticleBodyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleBodyBuilder {
    pub fn new() -> Self {
        Self {
            title: "Understanding ownership in practice".into(),
            content: "Borrowing rules keep aliasing and mutation apart. ".repeat(5),
            category: "programming".into(),
            status: "publish".into(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "title": self.title,
            "content": self.content,
            "category": self.category,
            "status": self.status,
        })
    }

    pub fn build(&self) -> String {
        self.to_json().to_string()
    }
}
