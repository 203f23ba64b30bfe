//! Lending operations: lend, return and loan listing

use crate::{
    error::{AppError, AppResult},
    models::{Book, Loan},
};

use super::LibraryService;

impl LibraryService {
    /// Lend a shelved book to a registered user.
    ///
    /// Preconditions, checked in order: the user id is registered
    /// (`UserNotFound`), the ISBN is on the shelf (`BookNotAvailable` — a
    /// book already out with someone is not available). On success the book
    /// moves from the catalog to the end of the user's loan list.
    pub fn lend_book(&mut self, user_id: &str, isbn: &str) -> AppResult<Loan> {
        if !self.library.is_registered(user_id) {
            return Err(AppError::UserNotFound(user_id.to_string()));
        }
        let book = self
            .library
            .remove_available(isbn)
            .ok_or_else(|| AppError::BookNotAvailable(isbn.to_string()))?;

        let loan = Loan::new(book);
        match self.library.user_mut(user_id) {
            Some(user) => {
                tracing::info!(
                    "Book '{}' lent to '{}' (ISBN {})",
                    loan.book().title(),
                    user.name(),
                    isbn
                );
                user.push_loan(loan.clone());
                Ok(loan)
            }
            None => {
                // Registry and user map out of sync; reshelve rather than
                // lose the book.
                self.library.insert_available(loan.into_book());
                Err(AppError::UserNotFound(user_id.to_string()))
            }
        }
    }

    /// Return a borrowed book to the catalog.
    ///
    /// Preconditions, checked in order: the user id is registered
    /// (`UserNotFound`), the user's loan list holds the ISBN
    /// (`LoanNotFound`, even if the same ISBN exists in the catalog or with
    /// another user). The first matching loan wins; the book re-enters the
    /// shelf at the end of the catalog order.
    pub fn return_book(&mut self, user_id: &str, isbn: &str) -> AppResult<Book> {
        let user = self
            .library
            .user_mut(user_id)
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))?;

        let loan = user.take_loan(isbn).ok_or_else(|| AppError::LoanNotFound {
            user_id: user_id.to_string(),
            isbn: isbn.to_string(),
        })?;

        let book = loan.into_book();
        tracing::info!(
            "Book '{}' returned by '{}' (ISBN {})",
            book.title(),
            user_id,
            isbn
        );
        self.library.insert_available(book.clone());
        Ok(book)
    }

    /// A user's current loans in loan order (most recently borrowed last).
    ///
    /// Fails with `UserNotFound` if the id is not registered.
    pub fn user_loans(&self, user_id: &str) -> AppResult<&[Loan]> {
        self.library
            .user(user_id)
            .map(|user| user.loans())
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))
    }

    /// Loans outstanding across all users
    pub fn active_loan_count(&self) -> usize {
        self.library.active_loan_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LendingConfig;
    use crate::error::ErrorCode;
    use crate::models::{CreateBook, RegisterUser};
    use crate::repository::Library;

    fn seeded_service() -> LibraryService {
        let mut service = LibraryService::new(LendingConfig::default());
        for (title, author, category, isbn) in [
            ("Title A", "Author X", "Fiction", "isbn-A"),
            ("Title B", "Author Y", "Drama", "isbn-B"),
        ] {
            service
                .add_book(CreateBook {
                    title: title.into(),
                    author: author.into(),
                    category: category.into(),
                    isbn: isbn.into(),
                })
                .unwrap();
        }
        service
            .register_user(RegisterUser {
                name: "Ana".into(),
                user_id: "u1".into(),
            })
            .unwrap();
        service
    }

    #[test]
    fn lend_then_return_restores_both_collections() {
        let mut service = seeded_service();

        service.lend_book("u1", "isbn-A").unwrap();
        assert_eq!(service.available_count(), 1);
        assert_eq!(service.user_loans("u1").unwrap().len(), 1);

        service.return_book("u1", "isbn-A").unwrap();
        assert_eq!(service.available_count(), 2);
        assert!(service.user_loans("u1").unwrap().is_empty());
        assert!(service.available_books().any(|b| b.isbn() == "isbn-A"));
    }

    #[test]
    fn returned_book_reenters_at_the_end_of_catalog_order() {
        let mut service = seeded_service();
        service.lend_book("u1", "isbn-A").unwrap();
        service.return_book("u1", "isbn-A").unwrap();

        let order: Vec<_> = service.available_books().map(Book::isbn).collect();
        assert_eq!(order, ["isbn-B", "isbn-A"]);
    }

    #[test]
    fn lend_unknown_isbn_fails_and_nothing_changes() {
        let mut service = seeded_service();
        let err = service.lend_book("u1", "isbn-missing").unwrap_err();
        assert_eq!(err.code(), ErrorCode::BookNotAvailable);
        assert_eq!(service.available_count(), 2);
        assert!(service.user_loans("u1").unwrap().is_empty());
    }

    #[test]
    fn lend_to_unknown_user_fails_before_touching_the_shelf() {
        let mut service = seeded_service();
        let err = service.lend_book("u2", "isbn-A").unwrap_err();
        assert_eq!(err.code(), ErrorCode::NoSuchUser);
        assert_eq!(service.available_count(), 2);
    }

    #[test]
    fn lend_already_borrowed_isbn_fails() {
        let mut service = seeded_service();
        service
            .register_user(RegisterUser {
                name: "Juan".into(),
                user_id: "u2".into(),
            })
            .unwrap();
        service.lend_book("u1", "isbn-A").unwrap();

        let err = service.lend_book("u2", "isbn-A").unwrap_err();
        assert_eq!(err.code(), ErrorCode::BookNotAvailable);
        assert!(service.user_loans("u2").unwrap().is_empty());
    }

    #[test]
    fn return_without_matching_loan_fails_even_if_shelved() {
        let mut service = seeded_service();
        // isbn-B is on the shelf but u1 never borrowed it
        let err = service.return_book("u1", "isbn-B").unwrap_err();
        assert_eq!(err.code(), ErrorCode::LoanNotFound);
        assert_eq!(service.available_count(), 2);
    }

    #[test]
    fn return_by_the_wrong_user_fails() {
        let mut service = seeded_service();
        service
            .register_user(RegisterUser {
                name: "Juan".into(),
                user_id: "u2".into(),
            })
            .unwrap();
        service.lend_book("u1", "isbn-A").unwrap();

        let err = service.return_book("u2", "isbn-A").unwrap_err();
        assert_eq!(err.code(), ErrorCode::LoanNotFound);
        assert_eq!(service.user_loans("u1").unwrap().len(), 1);
    }

    #[test]
    fn loans_list_in_append_order() {
        let mut service = seeded_service();
        service.lend_book("u1", "isbn-A").unwrap();
        service.lend_book("u1", "isbn-B").unwrap();

        let isbns: Vec<_> = service
            .user_loans("u1")
            .unwrap()
            .iter()
            .map(|loan| loan.book().isbn().to_string())
            .collect();
        assert_eq!(isbns, ["isbn-A", "isbn-B"]);
    }

    #[test]
    fn duplicate_isbn_injected_behind_the_service_returns_first_match() {
        // A caller bypassing the service can leave the same ISBN in two
        // places; return must take the user's first match and must not
        // deduplicate anything else.
        let mut library = Library::new();
        library.insert_available(crate::models::Book::new("Shelf Copy", "A", "C", "isbn-X"));
        library.insert_user(crate::models::User::new("Ana", "u1"));
        {
            let stored = library.user_mut("u1").unwrap();
            stored.push_loan(Loan::new(crate::models::Book::new(
                "Borrowed One",
                "A",
                "C",
                "isbn-X",
            )));
            stored.push_loan(Loan::new(crate::models::Book::new(
                "Borrowed Two",
                "A",
                "C",
                "isbn-X",
            )));
        }
        let mut service = LibraryService::with_library(library, LendingConfig::default());

        let returned = service.return_book("u1", "isbn-X").unwrap();
        assert_eq!(returned.title(), "Borrowed One");
        // The remaining duplicate loan is untouched; the shelf still has one
        // entry for the ISBN (overwritten, not duplicated).
        assert_eq!(service.user_loans("u1").unwrap().len(), 1);
        assert_eq!(service.available_count(), 1);
        assert_eq!(
            service.available_books().next().unwrap().title(),
            "Borrowed One"
        );
    }
}
