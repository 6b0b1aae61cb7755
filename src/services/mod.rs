//! Business logic services

pub mod catalog;
pub mod clock;
pub mod library;
pub mod loans;
pub mod members;

use std::sync::Arc;

use tokio::sync::RwLock;

use clock::Clock;
use library::Library;

/// The one `Library` shared by every service.
///
/// Mutations hold the write lock for the whole operation.
pub type SharedLibrary = Arc<RwLock<Library>>;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub members: members::MembersService,
    pub loans: loans::LoansService,
}

impl Services {
    /// Create all services around the given library
    pub fn new(library: Library, clock: Arc<dyn Clock>) -> Self {
        let library: SharedLibrary = Arc::new(RwLock::new(library));
        Self {
            catalog: catalog::CatalogService::new(library.clone()),
            members: members::MembersService::new(library.clone()),
            loans: loans::LoansService::new(library, clock),
        }
    }
}
