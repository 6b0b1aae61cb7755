//! Book model and related types

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A catalogued book.
///
/// The issued flag is flipped without any guard; `Library` decides when a
/// transition is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    id: String,
    title: String,
    author: String,
    is_issued: bool,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            is_issued: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn is_issued(&self) -> bool {
        self.is_issued
    }

    pub fn issue(&mut self) {
        self.is_issued = true;
    }

    pub fn return_book(&mut self) {
        self.is_issued = false;
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book ID: {}, Title: {}, Author: {}, Issued: {}",
            self.id, self.title, self.author, self.is_issued
        )
    }
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    /// Unique book identifier
    #[validate(length(min = 1, message = "Book ID must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub author: String,
}

impl From<CreateBook> for Book {
    fn from(request: CreateBook) -> Self {
        Book::new(request.id, request.title, request.author)
    }
}
