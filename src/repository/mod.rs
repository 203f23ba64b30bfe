//! In-memory storage layer for the library aggregate

pub mod catalog;
pub mod users;

use indexmap::{IndexMap, IndexSet};

use crate::models::{Book, User};

/// The aggregate root owning every collection the services mutate.
///
/// Storage invariants:
/// - every key in `available` equals the book's own ISBN;
/// - `registered` and `users` always have the same membership;
/// - a book lives either in `available` or in exactly one user's loan list.
///
/// All maps are insertion-ordered, so catalog listings, user listings and
/// search flattening are deterministic: a returned book re-enters the
/// catalog at the end, users iterate in registration order.
///
/// This layer only stores; uniqueness and lending rules are enforced by the
/// service layer on top.
#[derive(Debug, Default)]
pub struct Library {
    pub(crate) available: IndexMap<String, Book>,
    pub(crate) registered: IndexSet<String>,
    pub(crate) users: IndexMap<String, User>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a library from snapshot contents, preserving the order of
    /// both sequences. The registered-id set is derived from the users.
    pub fn restore(books: Vec<Book>, users: Vec<User>) -> Self {
        let mut library = Self::new();
        for book in books {
            library.insert_available(book);
        }
        for user in users {
            library.insert_user(user);
        }
        library
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, User};

    #[test]
    fn restore_rebuilds_registered_set() {
        let library = Library::restore(
            vec![Book::new("T", "A", "C", "isbn-1")],
            vec![User::new("Ana", "u1"), User::new("Juan", "u2")],
        );
        assert!(library.is_registered("u1"));
        assert!(library.is_registered("u2"));
        assert_eq!(library.available_count(), 1);
        let ids: Vec<_> = library.users().map(|u| u.user_id().to_string()).collect();
        assert_eq!(ids, ["u1", "u2"]);
    }
}
