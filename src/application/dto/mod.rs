pub mod articles;

pub use articles::{ArticleCreatedDto, ArticleDto, MessageDto};
