//! Registry storage primitives (registered users and their loan lists)

use crate::models::User;

use super::Library;

impl Library {
    /// Whether a user id is registered
    pub fn is_registered(&self, user_id: &str) -> bool {
        self.registered.contains(user_id)
    }

    /// Add a user to both the id set and the user map.
    ///
    /// Returns the previously registered user if the id was already taken;
    /// the caller decides whether that is an error.
    pub fn insert_user(&mut self, user: User) -> Option<User> {
        self.registered.insert(user.user_id().to_string());
        self.users.insert(user.user_id().to_string(), user)
    }

    /// Remove a user from both collections, loans and all.
    /// Remaining users keep their registration order.
    pub fn remove_user(&mut self, user_id: &str) -> Option<User> {
        self.registered.shift_remove(user_id);
        self.users.shift_remove(user_id)
    }

    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.get(user_id)
    }

    pub fn user_mut(&mut self, user_id: &str) -> Option<&mut User> {
        self.users.get_mut(user_id)
    }

    /// Registered users in registration order
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Loans outstanding across all users
    pub fn active_loan_count(&self) -> usize {
        self.users.values().map(User::loan_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove_keep_set_and_map_consistent() {
        let mut library = Library::new();
        library.insert_user(User::new("Ana", "u1"));
        library.insert_user(User::new("Juan", "u2"));
        assert!(library.is_registered("u1"));
        assert_eq!(library.user_count(), 2);

        let removed = library.remove_user("u1").unwrap();
        assert_eq!(removed.name(), "Ana");
        assert!(!library.is_registered("u1"));
        assert!(library.user("u1").is_none());
        assert_eq!(library.user_count(), 1);
    }
}
