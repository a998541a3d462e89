//! Data models for the catalog

pub mod author;
pub mod book;

pub use author::{Author, NewAuthor};
pub use book::Book;
