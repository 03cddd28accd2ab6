//! Bibliotheca catalog model
//!
//! In-memory library used by the simulation harness in `bibliotheca_sim`:
//!
//! - [`Book`]: immutable catalog entry, printed or digital
//! - [`BookCollection`]: ordered shelf preserving insertion order
//! - [`BookIndex`]: ISBN, author and year indexes
//! - [`Library`]: shelf and indexes kept in sync
//!
//! # Example
//!
//! ```
//! use bibliotheca_core::{Book, Library};
//!
//! let mut library = Library::new();
//! let book = Book::printed("Eugene Onegin", "Alexander Pushkin", 1833, "classic", "100-1", 224);
//! library.add_book(book).unwrap();
//!
//! assert_eq!(library.find_by_genre("Classic").len(), 1);
//! ```

mod book;
mod collection;
mod error;
mod index;
mod library;

pub use book::{Book, BookFormat, DEFAULT_COVER, DEFAULT_FILE_FORMAT, DEFAULT_FILE_SIZE_MB};
pub use collection::BookCollection;
pub use error::{LibraryError, Result};
pub use index::{BookIndex, IndexField};
pub use library::Library;
