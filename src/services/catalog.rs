//! Catalog operations: adding, removing and searching books

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Book, CreateBook, SearchField},
};

use super::LibraryService;

impl LibraryService {
    /// Add a book to the catalog.
    ///
    /// Fails with `Duplicate` if the ISBN is already on the shelf; the
    /// payload must carry non-empty fields.
    pub fn add_book(&mut self, payload: CreateBook) -> AppResult<Book> {
        payload.validate()?;
        if self.library.contains_isbn(&payload.isbn) {
            return Err(AppError::Duplicate(format!(
                "Book with ISBN {} already exists",
                payload.isbn
            )));
        }

        let book = Book::from(payload);
        tracing::info!("Book '{}' added to catalog (ISBN {})", book.title(), book.isbn());
        self.library.insert_available(book.clone());
        Ok(book)
    }

    /// Remove a book from the catalog by ISBN.
    ///
    /// Fails with `NotFound` if the ISBN is not on the shelf; a lent-out
    /// book cannot be removed this way and no loan list is touched.
    pub fn remove_book(&mut self, isbn: &str) -> AppResult<Book> {
        let book = self
            .library
            .remove_available(isbn)
            .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))?;
        tracing::info!("Book '{}' removed from catalog (ISBN {})", book.title(), isbn);
        Ok(book)
    }

    /// Search the full logical catalog by field, case-insensitive substring
    /// containment.
    ///
    /// Scope is shelved books first (catalog order), then every user's loans
    /// (registration order, loan order within a user). No deduplication; an
    /// empty result is a normal outcome.
    pub fn search_books(&self, field: SearchField, value: &str) -> Vec<Book> {
        let needle = value.to_lowercase();
        let matches = |book: &Book| book.field_value(field).to_lowercase().contains(&needle);

        let mut results: Vec<Book> = self
            .library
            .available_books()
            .filter(|book| matches(book))
            .cloned()
            .collect();
        for user in self.library.users() {
            results.extend(
                user.loans()
                    .iter()
                    .map(|loan| loan.book())
                    .filter(|book| matches(book))
                    .cloned(),
            );
        }
        results
    }

    /// Shelved books in catalog order
    pub fn available_books(&self) -> impl Iterator<Item = &Book> {
        self.library.available_books()
    }

    pub fn available_count(&self) -> usize {
        self.library.available_count()
    }
}
