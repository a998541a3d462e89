//! Author API endpoints

use axum::{extract::State, http::StatusCode, Json};

use super::{or_empty, rejected, ApiJson};
use crate::{
    models::{Author, NewAuthor},
    AppState,
};

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "All authors", body = Vec<Author>)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> Json<Vec<Author>> {
    Json(or_empty(state.services.authors.list_all().await, "authors"))
}

/// Add an author; the id is generated
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = NewAuthor,
    responses(
        (status = 200, description = "Author created", body = Author),
        (status = 400, description = "Insert failed")
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    ApiJson(author): ApiJson<NewAuthor>,
) -> Result<Json<Author>, StatusCode> {
    state.services.authors.add(&author).await.map(Json).map_err(rejected)
}
