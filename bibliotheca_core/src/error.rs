//! Error types for the catalog model.

use thiserror::Error;

/// Errors returned by catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// No book with this ISBN is stored
    #[error("Book with ISBN {0} not found")]
    NotFound(String),

    /// A book with this ISBN is already stored
    #[error("Book with ISBN {0} already exists")]
    DuplicateIsbn(String),

    /// Random removal from an empty collection
    #[error("Cannot take a random book from an empty collection")]
    EmptyCollection,

    /// Index lookup on a field that is not indexed
    #[error("Unsupported index field '{0}'")]
    UnsupportedField(String),

    /// Year lookup value is not an integer
    #[error("Invalid year: {0}")]
    InvalidYear(String),

    /// Operation requires a digital book
    #[error("Book with ISBN {0} is not digital")]
    NotDigital(String),
}

impl LibraryError {
    /// Creates a not-found error.
    pub fn not_found(isbn: impl Into<String>) -> Self {
        Self::NotFound(isbn.into())
    }
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, LibraryError>;
