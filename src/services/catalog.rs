//! Catalog management service

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
};

use super::SharedLibrary;

#[derive(Clone)]
pub struct CatalogService {
    library: SharedLibrary,
}

impl CatalogService {
    pub fn new(library: SharedLibrary) -> Self {
        Self { library }
    }

    /// Add a book to the catalog
    pub async fn add_book(&self, book: CreateBook) -> AppResult<Book> {
        let mut library = self.library.write().await;
        let book = library
            .add_book(book.into())
            .inspect_err(|e| tracing::warn!("Add book rejected: {}", e))?
            .clone();

        tracing::info!("Book added: {}", book);
        Ok(book)
    }

    /// All books in catalog order
    pub async fn list_books(&self) -> Vec<Book> {
        self.library.read().await.books().cloned().collect()
    }

    /// Books that are not currently issued
    pub async fn available_books(&self) -> Vec<Book> {
        self.library.read().await.available_books().cloned().collect()
    }

    pub async fn search_books(&self, title: &str) -> Vec<Book> {
        self.library.read().await.search_books(title).cloned().collect()
    }

    pub async fn count_books(&self) -> usize {
        self.library.read().await.book_count()
    }

    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        Ok(self.library.read().await.book(id)?.clone())
    }
}
