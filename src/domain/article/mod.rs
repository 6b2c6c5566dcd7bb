pub mod entity;
pub mod pagination;
pub mod repository;
pub mod validation;
pub mod value_objects;

pub use entity::{Article, ArticleDraft, NewArticle};
pub use pagination::PageRequest;
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use validation::validate;
pub use value_objects::{ArticleCategory, ArticleContent, ArticleId, ArticleStatus, ArticleTitle};
