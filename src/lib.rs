//! Library circulation server
//!
//! Tracks books and members, issues books to members and takes them back,
//! reporting a late fee when a book comes back after its due period.
//! Everything is held in memory for the life of the process and exposed
//! through a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult, LibraryError};

use services::{clock::Clock, library::Library, Services};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Build an empty library governed by the configured loan policy
    pub fn new(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        let library = Library::new((&config.circulation).into());
        Self {
            config: Arc::new(config),
            services: Arc::new(Services::new(library, clock)),
        }
    }
}
