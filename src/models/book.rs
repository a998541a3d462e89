//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book row as stored in the `book` table.
///
/// The same shape is used as the create request: the ISBN is chosen by the
/// client and doubles as the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
pub struct Book {
    pub isbn: i32,
    /// References `author.id`
    pub author_id: i32,
    pub title: String,
    #[validate(range(min = 0, message = "copies_available cannot be negative"))]
    pub copies_available: i32,
}

impl Book {
    pub fn new(isbn: i32, author_id: i32, title: impl Into<String>, copies_available: i32) -> Self {
        Self {
            isbn,
            author_id,
            title: title.into(),
            copies_available,
        }
    }

    /// Whether at least one copy can be lent out
    pub fn is_available(&self) -> bool {
        self.copies_available > 0
    }
}
