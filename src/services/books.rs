//! Book catalog service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct BookCatalog {
    repository: Repository,
}

impl BookCatalog {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list_all().await
    }

    /// Add a book under its client-supplied ISBN.
    ///
    /// Rejected with [`AppError::Duplicate`] when the ISBN is already taken;
    /// the store's insert is not attempted in that case. The lookup and the
    /// insert are not atomic, so the primary key constraint remains the final
    /// word and the store reports its violation as the same error.
    pub async fn add(&self, candidate: &Book) -> AppResult<Book> {
        candidate.validate()?;

        if self.repository.books.get_by_isbn(candidate.isbn).await?.is_some() {
            tracing::info!(isbn = candidate.isbn, "Rejecting book with existing ISBN");
            return Err(AppError::Duplicate(format!(
                "A book with ISBN {} already exists",
                candidate.isbn
            )));
        }

        let book = self.repository.books.insert(candidate).await?;
        tracing::info!(isbn = book.isbn, author_id = book.author_id, "Book created");
        Ok(book)
    }

    pub async fn list_available(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list_available().await
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.repository.books.ping().await
    }
}
