//! API handlers for the circulation REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod members;
pub mod openapi;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/available", get(books::available_books))
        .route("/books/search", get(books::search_books))
        .route("/books/:id", get(books::get_book))
        // Members
        .route("/members", post(members::create_member))
        .route("/members/search", get(members::search_members))
        .route("/members/:id", get(members::get_member))
        .route("/members/:id/loans", get(loans::get_member_loans))
        // Loans
        .route("/loans", post(loans::issue_book))
        .route("/loans/return", post(loans::return_book))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
