//! Book model and catalog-facing input types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Immutable title/author pair. Both fields are fixed once a book enters
/// the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleAuthor {
    title: String,
    author: String,
}

impl TitleAuthor {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

/// A catalog entry. The ISBN is the primary key; at any time exactly one
/// collection holds a given book (the catalog or one user's loan list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title_author: TitleAuthor,
    category: String,
    isbn: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title_author: TitleAuthor::new(title, author),
            category: category.into(),
            isbn: isbn.into(),
        }
    }

    pub fn title(&self) -> &str {
        self.title_author.title()
    }

    pub fn author(&self) -> &str {
        self.title_author.author()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Value of the given search field for this book
    pub fn field_value(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => self.title(),
            SearchField::Author => self.author(),
            SearchField::Category => self.category(),
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: '{}', Author: {}, Category: {}, ISBN: {}",
            self.title(),
            self.author(),
            self.category,
            self.isbn
        )
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: String,
    #[validate(length(min = 1, message = "ISBN must not be empty"))]
    pub isbn: String,
}

impl From<CreateBook> for Book {
    fn from(payload: CreateBook) -> Self {
        Book::new(payload.title, payload.author, payload.category, payload.isbn)
    }
}

/// Searchable book field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Author,
    Category,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Category => "category",
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "category" => Ok(SearchField::Category),
            _ => Err(format!("Invalid search field: {}", s)),
        }
    }
}
