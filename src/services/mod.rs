//! Business logic services

pub mod catalog;
pub mod loans;
pub mod users;

use crate::{config::LendingConfig, repository::Library};

/// Orchestrates the catalog, the user registry and the per-user loan lists.
///
/// Every public operation checks all preconditions before the first
/// mutation, so a failed call leaves the aggregate untouched. The service is
/// synchronous and single-owner; a caller that shares it across threads must
/// treat each operation as one critical section over the whole aggregate.
pub struct LibraryService {
    pub(crate) library: Library,
    pub(crate) config: LendingConfig,
}

impl LibraryService {
    pub fn new(config: LendingConfig) -> Self {
        Self {
            library: Library::new(),
            config,
        }
    }

    /// Service over a previously restored library (snapshot load)
    pub fn with_library(library: Library, config: LendingConfig) -> Self {
        Self { library, config }
    }

    /// Read access to the aggregate, used by the snapshot adapter
    pub fn library(&self) -> &Library {
        &self.library
    }
}
