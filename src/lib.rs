//! Libris - Library Catalog and Lending Manager
//!
//! A typed core for managing a library catalog, its registered users and
//! their loans, with a JSON snapshot adapter and a console front end.

pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod snapshot;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::LibraryService;
