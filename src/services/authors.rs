//! Author catalog service

use crate::{
    error::AppResult,
    models::{Author, NewAuthor},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorCatalog {
    repository: Repository,
}

impl AuthorCatalog {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list_all().await
    }

    /// Persist a new author. Ids come from the store, so there is nothing to
    /// deduplicate here.
    pub async fn add(&self, candidate: &NewAuthor) -> AppResult<Author> {
        let author = self.repository.authors.insert(&candidate.name).await?;
        tracing::info!(author_id = author.id, "Author created");
        Ok(author)
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.repository.authors.ping().await
    }
}
