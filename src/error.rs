//! Error types for Libris

use thiserror::Error;

/// Application error codes reported alongside error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    Duplicate = 2,
    NoSuchBook = 3,
    NoSuchUser = 4,
    BookNotAvailable = 5,
    LoanNotFound = 6,
    UserHasLoans = 7,
    BadValue = 8,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Duplicate key: {0}")]
    Duplicate(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("User '{0}' is not registered")]
    UserNotFound(String),

    #[error("Book with ISBN {0} is not available for lending")]
    BookNotAvailable(String),

    #[error("User '{user_id}' has no outstanding loan for ISBN {isbn}")]
    LoanNotFound { user_id: String, isbn: String },

    #[error("User '{user_id}' still holds {count} borrowed book(s)")]
    UserHasLoans { user_id: String, count: usize },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot encoding error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl AppError {
    /// Structured code for this error, used by the presentation layer
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Duplicate(_) => ErrorCode::Duplicate,
            AppError::NotFound(_) => ErrorCode::NoSuchBook,
            AppError::UserNotFound(_) => ErrorCode::NoSuchUser,
            AppError::BookNotAvailable(_) => ErrorCode::BookNotAvailable,
            AppError::LoanNotFound { .. } => ErrorCode::LoanNotFound,
            AppError::UserHasLoans { .. } => ErrorCode::UserHasLoans,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::Config(_) | AppError::Io(_) | AppError::Snapshot(_) => ErrorCode::Failure,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_mapping() {
        assert_eq!(AppError::Duplicate("x".into()).code(), ErrorCode::Duplicate);
        assert_eq!(
            AppError::LoanNotFound {
                user_id: "u1".into(),
                isbn: "978".into()
            }
            .code(),
            ErrorCode::LoanNotFound
        );
        assert_eq!(ErrorCode::Success as u32, 0);
    }
}
