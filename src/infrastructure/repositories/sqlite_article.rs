use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle, PageRequest,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

const FIND_BY_ID_SQL: &str =
    "SELECT Id, Title, Content, Category, Status FROM posts WHERE Id = ?";
const LIST_SQL: &str =
    "SELECT Id, Title, Content, Category, Status FROM posts ORDER BY Id LIMIT ? OFFSET ?";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    #[sqlx(rename = "Id")]
    id: i64,
    #[sqlx(rename = "Title")]
    title: String,
    #[sqlx(rename = "Content")]
    content: String,
    #[sqlx(rename = "Category")]
    category: String,
    #[sqlx(rename = "Status")]
    status: String,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article {
            id: ArticleId(row.id),
            title: row.title,
            content: row.content,
            category: row.category,
            status: row.status,
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let NewArticle {
            title,
            content,
            category,
            status,
        } = article;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO posts (Title, Content, Category, Status) VALUES (?, ?, ?, ?) RETURNING Id",
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(category.as_str())
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(ArticleId(id))
    }

    async fn update(&self, id: ArticleId, article: NewArticle) -> DomainResult<()> {
        let NewArticle {
            title,
            content,
            category,
            status,
        } = article;

        let result = sqlx::query(
            "UPDATE posts SET Title = ?, Content = ?, Category = ?, Status = ? WHERE Id = ?",
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(category.as_str())
        .bind(status.as_str())
        .bind(i64::from(id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            tracing::debug!(article_id = %id, "update matched no rows");
        }
        Ok(())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE Id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            tracing::debug!(article_id = %id, "delete matched no rows");
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(FIND_BY_ID_SQL)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::from)
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))
    }

    async fn list(&self, page: PageRequest) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(LIST_SQL)
            .bind(i64::from(page.limit()))
            .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Article::from).collect())
    }
}
