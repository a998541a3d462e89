//! Repository layer for database operations
//!
//! Each entity has a store trait so the service layer can run against the
//! PostgreSQL implementation in production and a substitute in tests.

pub mod authors;
pub mod books;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{migrate::Migrator, Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Author, Book},
};

pub use authors::PgAuthorStore;
pub use books::PgBookStore;

/// Embedded schema migrations (tables only, no seed data)
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Data access for the `author` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorStore: Send + Sync {
    /// Every author, in insertion order
    async fn list_all(&self) -> AppResult<Vec<Author>>;

    /// Insert an author and return it with its generated id
    async fn insert(&self, name: &str) -> AppResult<Author>;

    /// Check that the backing storage answers
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Data access for the `book` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn list_all(&self) -> AppResult<Vec<Book>>;

    /// `Ok(None)` when no book has this ISBN
    async fn get_by_isbn(&self, isbn: i32) -> AppResult<Option<Book>>;

    /// Insert a book under its client-supplied ISBN
    async fn insert(&self, book: &Book) -> AppResult<Book>;

    /// Books with at least one copy available
    async fn list_available(&self) -> AppResult<Vec<Book>>;

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Main repository struct holding the entity stores
#[derive(Clone)]
pub struct Repository {
    pub authors: Arc<dyn AuthorStore>,
    pub books: Arc<dyn BookStore>,
}

impl Repository {
    /// Create a repository backed by the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: Arc::new(PgAuthorStore::new(pool.clone())),
            books: Arc::new(PgBookStore::new(pool)),
        }
    }

    /// Create a repository from arbitrary store implementations
    pub fn with_stores(authors: Arc<dyn AuthorStore>, books: Arc<dyn BookStore>) -> Self {
        Self { authors, books }
    }
}
