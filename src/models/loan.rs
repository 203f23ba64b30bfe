//! Loan (borrow) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::book::Book;

/// A book currently out with a user.
///
/// The loan owns the book for its whole lifetime; returning it moves the
/// book back into the catalog. Loan order within a user is append order and
/// is the order reported by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    book: Book,
    borrowed_at: DateTime<Utc>,
}

impl Loan {
    pub fn new(book: Book) -> Self {
        Self {
            book,
            borrowed_at: Utc::now(),
        }
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn borrowed_at(&self) -> DateTime<Utc> {
        self.borrowed_at
    }

    /// Consume the loan, handing the book back
    pub fn into_book(self) -> Book {
        self.book
    }
}

impl std::fmt::Display for Loan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (borrowed {})",
            self.book,
            self.borrowed_at.format("%Y-%m-%d %H:%M UTC")
        )
    }
}
