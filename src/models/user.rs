//! User model and registry-facing input types

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::loan::Loan;

/// A registered library user with the list of books currently out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    name: String,
    user_id: String,
    #[serde(default)]
    loans: Vec<Loan>,
}

impl User {
    pub fn new(name: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            user_id: user_id.into(),
            loans: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Current loans in loan order (most recently borrowed last)
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn loan_count(&self) -> usize {
        self.loans.len()
    }

    pub(crate) fn push_loan(&mut self, loan: Loan) {
        self.loans.push(loan);
    }

    /// Remove and return the first loan matching the given ISBN.
    ///
    /// Linear scan, first match wins; a duplicate ISBN further down the list
    /// is left untouched.
    pub(crate) fn take_loan(&mut self, isbn: &str) -> Option<Loan> {
        let position = self.loans.iter().position(|loan| loan.book().isbn() == isbn)?;
        Some(self.loans.remove(position))
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "User: {} (ID: {})", self.name, self.user_id)
    }
}

/// Register user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "User ID must not be empty"))]
    pub user_id: String,
}

impl From<RegisterUser> for User {
    fn from(payload: RegisterUser) -> Self {
        User::new(payload.name, payload.user_id)
    }
}
