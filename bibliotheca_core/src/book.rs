//! Book records stored in the catalog.

use crate::error::{LibraryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default cover type for printed books.
pub const DEFAULT_COVER: &str = "paperback";

/// Default file format for digital books.
pub const DEFAULT_FILE_FORMAT: &str = "epub";

/// Default file size for digital books, in megabytes.
pub const DEFAULT_FILE_SIZE_MB: f64 = 1.5;

/// Physical or digital form of a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookFormat {
    /// Paper copy
    Printed {
        pages: u32,
        cover: String,
    },

    /// Electronic copy
    Digital {
        file_format: String,
        file_size_mb: f64,
    },
}

impl BookFormat {
    /// Printed format with the default cover.
    pub fn printed(pages: u32) -> Self {
        Self::Printed {
            pages,
            cover: DEFAULT_COVER.to_string(),
        }
    }

    /// Digital format with default file format and size.
    pub fn digital() -> Self {
        Self::Digital {
            file_format: DEFAULT_FILE_FORMAT.to_string(),
            file_size_mb: DEFAULT_FILE_SIZE_MB,
        }
    }
}

/// A catalog entry.
///
/// Books are immutable once built; the ISBN is the identity used by
/// collections and indexes.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub isbn: String,
    pub format: BookFormat,
}

impl Book {
    /// Creates a book with an explicit format.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        isbn: impl Into<String>,
        format: BookFormat,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            isbn: isbn.into(),
            format,
        }
    }

    /// Creates a printed book with the default cover.
    pub fn printed(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        isbn: impl Into<String>,
        pages: u32,
    ) -> Self {
        Self::new(title, author, year, genre, isbn, BookFormat::printed(pages))
    }

    /// Creates a digital book with the default file format and size.
    pub fn digital(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self::new(title, author, year, genre, isbn, BookFormat::digital())
    }

    /// Replaces the format, keeping bibliographic fields.
    pub fn with_format(mut self, format: BookFormat) -> Self {
        self.format = format;
        self
    }

    /// Case-insensitive keyword test against title and author.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.title.to_lowercase().contains(&keyword)
            || self.author.to_lowercase().contains(&keyword)
    }

    /// Short label: `Title (Year)`.
    pub fn short(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }

    pub fn is_digital(&self) -> bool {
        matches!(self.format, BookFormat::Digital { .. })
    }

    /// Describes the binding of a printed book, `None` for digital ones.
    pub fn describe_binding(&self) -> Option<String> {
        match &self.format {
            BookFormat::Printed { pages, cover } => Some(format!("{} pages, {}", pages, cover)),
            BookFormat::Digital { .. } => None,
        }
    }

    /// Simulates opening a digital book on a reader device.
    pub fn open_on(&self, device: &str) -> Result<String> {
        match &self.format {
            BookFormat::Digital { file_format, .. } => Ok(format!(
                "Opening '{}' on {} as {}",
                self.title, device, file_format
            )),
            BookFormat::Printed { .. } => Err(LibraryError::NotDigital(self.isbn.clone())),
        }
    }
}

impl fmt::Debug for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.format {
            BookFormat::Printed { pages, .. } => write!(
                f,
                "PrintedBook({:?}, {:?}, {}, {:?}, {}, pages={})",
                self.title, self.author, self.year, self.genre, self.isbn, pages
            ),
            BookFormat::Digital { file_format, file_size_mb } => write!(
                f,
                "DigitalBook({:?}, {:?}, {}, {:?}, {}, {}, {}MB)",
                self.title, self.author, self.year, self.genre, self.isbn, file_format, file_size_mb
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printed_book_binding_and_debug() {
        let book = Book::printed("Test", "Author", 2000, "genre", "000", 150).with_format(
            BookFormat::Printed {
                pages: 150,
                cover: "hardcover".to_string(),
            },
        );

        assert_eq!(book.describe_binding().as_deref(), Some("150 pages, hardcover"));

        let repr = format!("{:?}", book);
        assert!(repr.starts_with("PrintedBook("));
        assert!(repr.contains("pages=150"));
    }

    #[test]
    fn test_digital_book_open_and_debug() {
        let book = Book::digital("Digi", "Author", 2023, "genre", "111").with_format(
            BookFormat::Digital {
                file_format: "pdf".to_string(),
                file_size_mb: 3.25,
            },
        );

        assert_eq!(book.open_on("reader").unwrap(), "Opening 'Digi' on reader as pdf");
        assert!(book.describe_binding().is_none());

        let repr = format!("{:?}", book);
        assert!(repr.starts_with("DigitalBook("));
        assert!(repr.contains("3.25MB"));
    }

    #[test]
    fn test_open_printed_book_fails() {
        let book = Book::printed("Paper", "Author", 2001, "genre", "222", 90);
        assert_eq!(book.open_on("reader"), Err(LibraryError::NotDigital("222".to_string())));
    }

    #[test]
    fn test_keyword_matches_title_or_author() {
        let book = Book::printed("War and Peace", "Leo Tolstoy", 1869, "novel", "1", 1225);

        assert!(book.matches_keyword("peace"));
        assert!(book.matches_keyword("TOLSTOY"));
        assert!(!book.matches_keyword("novel"));
        assert_eq!(book.short(), "War and Peace (1869)");
    }

    #[test]
    fn test_defaults() {
        let digital = Book::digital("D", "A", 2020, "g", "9");
        assert!(digital.is_digital());
        assert_eq!(
            digital.format,
            BookFormat::Digital {
                file_format: "epub".to_string(),
                file_size_mb: 1.5,
            }
        );

        let printed = Book::printed("P", "A", 2020, "g", "8", 10);
        assert_eq!(printed.describe_binding().as_deref(), Some("10 pages, paperback"));
    }
}
