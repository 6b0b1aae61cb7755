//! Book (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
    AppState,
};

/// Title search query
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookSearchQuery {
    /// Exact title, compared case-insensitively
    pub title: String,
}

/// Created book with its textual form
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub book: Book,
    pub message: String,
}

/// List every book in catalog order
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.catalog.list_books().await)
}

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book added", body = BookResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Book ID already exists")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(request): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    request.validate()?;

    let book = state.services.catalog.add_book(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookResponse {
            message: format!("Book added: {}", book),
            book,
        }),
    ))
}

/// List books not currently issued
#[utoipa::path(
    get,
    path = "/books/available",
    tag = "books",
    responses(
        (status = 200, description = "Available books", body = Vec<Book>)
    )
)]
pub async fn available_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.catalog.available_books().await)
}

/// Search books by title
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(BookSearchQuery),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>)
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    Query(query): Query<BookSearchQuery>,
) -> Json<Vec<Book>> {
    Json(state.services.catalog.search_books(&query.title).await)
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(&id).await?;
    Ok(Json(book))
}
