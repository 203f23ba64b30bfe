//! Registry operations: registering and deregistering users

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{RegisterUser, User},
};

use super::LibraryService;

impl LibraryService {
    /// Register a new user with an empty loan list.
    ///
    /// Fails with `Duplicate` if the user id is already taken; the payload
    /// must carry non-empty fields.
    pub fn register_user(&mut self, payload: RegisterUser) -> AppResult<()> {
        payload.validate()?;
        if self.library.is_registered(&payload.user_id) {
            return Err(AppError::Duplicate(format!(
                "User ID '{}' is already registered",
                payload.user_id
            )));
        }

        let user = User::from(payload);
        tracing::info!("User '{}' registered (ID {})", user.name(), user.user_id());
        self.library.insert_user(user);
        Ok(())
    }

    /// Deregister a user by id.
    ///
    /// Fails with `UserNotFound` if the id is not registered. By default the
    /// user is removed together with any outstanding loans, so the borrowed
    /// books become unreachable from the catalog; with
    /// `lending.strict_deregistration` set the call fails with
    /// `UserHasLoans` instead while loans are outstanding.
    pub fn deregister_user(&mut self, user_id: &str) -> AppResult<User> {
        let loan_count = self
            .library
            .user(user_id)
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))?
            .loan_count();

        if self.config.strict_deregistration && loan_count > 0 {
            return Err(AppError::UserHasLoans {
                user_id: user_id.to_string(),
                count: loan_count,
            });
        }

        let user = self
            .library
            .remove_user(user_id)
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))?;
        if loan_count > 0 {
            tracing::warn!(
                "User '{}' deregistered with {} outstanding loan(s); those books are no longer reachable",
                user_id,
                loan_count
            );
        } else {
            tracing::info!("User '{}' deregistered", user_id);
        }
        Ok(user)
    }

    /// Registered users in registration order
    pub fn registered_users(&self) -> impl Iterator<Item = &User> {
        self.library.users()
    }

    pub fn user_count(&self) -> usize {
        self.library.user_count()
    }
}
