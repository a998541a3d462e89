//! Router-level tests over the in-memory catalog

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::common::{broken_router, seeded_router, SEED_AUTHORS};

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> Value {
    let (status, body) = send(app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::OK, "GET {uri}");
    serde_json::from_slice(&body).unwrap()
}

fn isbns(books: &Value) -> Vec<i64> {
    books
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["isbn"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let app = seeded_router();
    let body = get_json(&app, "/health").await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_ready_when_store_answers() {
    let app = seeded_router();
    let body = get_json(&app, "/ready").await;
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_ready_reports_unreachable_database() {
    let (status, body) = send(&broken_router(), Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Unavailable");
}

#[tokio::test]
async fn test_seed_authors_listed() {
    let app = seeded_router();
    let authors = get_json(&app, "/authors").await;
    let names: Vec<&str> = authors
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, SEED_AUTHORS);
}

#[tokio::test]
async fn test_available_books_exclude_empty_shelves() {
    let app = seeded_router();
    let books = get_json(&app, "/books/available").await;
    assert_eq!(isbns(&books), vec![100, 102, 103, 106, 107]);

    let copies: Vec<i64> = books
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["copies_available"].as_i64().unwrap())
        .collect();
    assert_eq!(copies, vec![2, 1, 3, 1, 7]);
}

#[tokio::test]
async fn test_listing_is_repeatable() {
    let app = seeded_router();
    let first = get_json(&app, "/books").await;
    let second = get_json(&app, "/books").await;
    assert_eq!(first, second);
    assert_eq!(isbns(&first).len(), 8);
}

#[tokio::test]
async fn test_create_book_round_trip() {
    let app = seeded_router();
    let cosmicomics = json!({
        "isbn": 108,
        "author_id": 1,
        "title": "cosmicomics",
        "copies_available": 1
    });

    let (status, body) = send(&app, Method::POST, "/books", Some(cosmicomics.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), cosmicomics);

    let books = get_json(&app, "/books").await;
    assert!(books.as_array().unwrap().contains(&cosmicomics));
}

#[tokio::test]
async fn test_create_book_duplicate_isbn_is_bare_400() {
    let app = seeded_router();
    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({
            "isbn": 103,
            "author_id": 1,
            "title": "not invisible cities",
            "copies_available": 9
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());

    let books = get_json(&app, "/books").await;
    let stored = books
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["isbn"] == 103)
        .unwrap();
    assert_eq!(stored["title"], "invisible cities");
}

#[tokio::test]
async fn test_create_book_for_unknown_author_is_400() {
    let app = seeded_router();
    let (status, _) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "isbn": 500, "author_id": 42, "title": "orphan", "copies_available": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_book_negative_copies_is_400() {
    let app = seeded_router();
    let (status, _) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "isbn": 501, "author_id": 1, "title": "debt", "copies_available": -1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_body_is_400_with_error_body() {
    let app = seeded_router();
    let (status, body) = send(&app, Method::POST, "/books", Some(json!({ "title": "no isbn" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_create_author_generates_id() {
    let app = seeded_router();
    let (status, body) = send(
        &app,
        Method::POST,
        "/authors",
        Some(json!({ "name": "james joyce" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let created: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(created["name"], "james joyce");
    assert_eq!(created["id"], 6);

    let authors = get_json(&app, "/authors").await;
    assert!(authors.as_array().unwrap().contains(&created));
}

#[tokio::test]
async fn test_storage_failure_degrades_listings_to_empty() {
    let app = broken_router();
    for uri in ["/books", "/books/available", "/authors"] {
        assert_eq!(get_json(&app, uri).await, json!([]), "GET {uri}");
    }
}

#[tokio::test]
async fn test_storage_failure_on_insert_is_400() {
    let app = broken_router();
    let (status, body) = send(&app, Method::POST, "/authors", Some(json!({ "name": "x" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = seeded_router();
    let doc = get_json(&app, "/api-docs/openapi.json").await;
    assert!(doc["paths"]["/books/available"].is_object());
}
