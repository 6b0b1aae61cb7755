//! Error types for the circulation server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Stable error codes returned to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    BadValue = 2,
    NoSuchBook = 3,
    NoSuchMember = 4,
    BookAlreadyIssued = 5,
    BookNotIssued = 6,
    BookNotHeldByMember = 7,
    Duplicate = 8,
}

/// Rejections raised by the circulation workflow.
///
/// Every variant is detected before any state is touched, so a failed
/// operation leaves the library unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("Book {0} not found")]
    BookNotFound(String),

    #[error("Member {0} not found")]
    MemberNotFound(String),

    #[error("Book {0} is already issued")]
    AlreadyIssued(String),

    #[error("Book {0} is not issued")]
    NotIssued(String),

    #[error("Book {book_id} is not held by member {member_id}")]
    NotHeldByMember { book_id: String, member_id: String },

    #[error("A book with id {0} already exists")]
    DuplicateBook(String),

    #[error("A member with id {0} already exists")]
    DuplicateMember(String),

    #[error("Loan policy out of range: {0}")]
    PolicyOutOfRange(String),
}

impl LibraryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LibraryError::BookNotFound(_) => ErrorCode::NoSuchBook,
            LibraryError::MemberNotFound(_) => ErrorCode::NoSuchMember,
            LibraryError::AlreadyIssued(_) => ErrorCode::BookAlreadyIssued,
            LibraryError::NotIssued(_) => ErrorCode::BookNotIssued,
            LibraryError::NotHeldByMember { .. } => ErrorCode::BookNotHeldByMember,
            LibraryError::DuplicateBook(_) | LibraryError::DuplicateMember(_) => ErrorCode::Duplicate,
            LibraryError::PolicyOutOfRange(_) => ErrorCode::Failure,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            LibraryError::BookNotFound(_) | LibraryError::MemberNotFound(_) => StatusCode::NOT_FOUND,
            LibraryError::PolicyOutOfRange(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::CONFLICT,
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Library(#[from] LibraryError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Library(e) => {
                if e.status().is_server_error() {
                    tracing::error!("Circulation error: {}", e);
                }
                (e.status(), e.code(), e.to_string())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
