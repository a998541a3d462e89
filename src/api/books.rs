//! Book API endpoints

use axum::{extract::State, http::StatusCode, Json};

use super::{or_empty, rejected, ApiJson};
use crate::{models::Book, AppState};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(or_empty(state.services.books.list_all().await, "books"))
}

/// Add a book under a client-chosen ISBN
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 400, description = "ISBN already in use, invalid book, or insert failed")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(book): ApiJson<Book>,
) -> Result<Json<Book>, StatusCode> {
    state.services.books.add(&book).await.map(Json).map_err(rejected)
}

/// List books with at least one copy available
#[utoipa::path(
    get,
    path = "/books/available",
    tag = "books",
    responses(
        (status = 200, description = "Books with copies_available > 0", body = Vec<Book>)
    )
)]
pub async fn list_available_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(or_empty(state.services.books.list_available().await, "available books"))
}
