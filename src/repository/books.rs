//! PostgreSQL book store

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::BookStore;
use crate::{
    error::{AppError, AppResult},
    models::Book,
};

#[derive(Clone)]
pub struct PgBookStore {
    pool: Pool<Postgres>,
}

impl PgBookStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Translate constraint violations raised by `INSERT INTO book` into
/// domain errors; anything else stays a database error.
fn classify_insert_error(book: &Book, err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::Duplicate(format!("A book with ISBN {} already exists", book.isbn));
        }
        if db_err.is_foreign_key_violation() {
            return AppError::Validation(format!("Author {} does not exist", book.author_id));
        }
        if db_err.is_check_violation() {
            return AppError::Validation("copies_available cannot be negative".to_string());
        }
    }
    AppError::Database(err)
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn list_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT isbn, author_id, title, copies_available FROM book ORDER BY isbn",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_by_isbn(&self, isbn: i32) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            "SELECT isbn, author_id, title, copies_available FROM book WHERE isbn = $1",
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, book: &Book) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO book (isbn, author_id, title, copies_available)
            VALUES ($1, $2, $3, $4)
            RETURNING isbn, author_id, title, copies_available
            "#,
        )
        .bind(book.isbn)
        .bind(book.author_id)
        .bind(&book.title)
        .bind(book.copies_available)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify_insert_error(book, e))
    }

    async fn list_available(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT isbn, author_id, title, copies_available FROM book
            WHERE copies_available > 0
            ORDER BY isbn
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
