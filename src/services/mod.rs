//! Business logic services

pub mod authors;
pub mod books;

use crate::{error::AppResult, repository::Repository};

pub use authors::AuthorCatalog;
pub use books::BookCatalog;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: AuthorCatalog,
    pub books: BookCatalog,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            authors: AuthorCatalog::new(repository.clone()),
            books: BookCatalog::new(repository),
        }
    }

    /// Check that every store can reach its storage
    pub async fn ping(&self) -> AppResult<()> {
        self.authors.ping().await?;
        self.books.ping().await
    }
}
