//! Library facade keeping the collection and its indexes in sync.

use crate::book::Book;
use crate::collection::BookCollection;
use crate::error::{LibraryError, Result};
use crate::index::BookIndex;
use rand::Rng;

/// A library: ordered shelf plus lookup indexes.
#[derive(Debug, Clone, Default)]
pub struct Library {
    books: BookCollection,
    indexes: BookIndex,
}

impl Library {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a library from existing books and indexes them.
    pub fn with_books(books: Vec<Book>) -> Self {
        let books = BookCollection::from_books(books);
        let mut indexes = BookIndex::new();
        indexes.rebuild(&books);
        Self { books, indexes }
    }

    pub fn books(&self) -> &BookCollection {
        &self.books
    }

    pub fn indexes(&self) -> &BookIndex {
        &self.indexes
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Stores a book. ISBNs must be unique within a library.
    pub fn add_book(&mut self, book: Book) -> Result<()> {
        if self.indexes.contains(&book.isbn) {
            return Err(LibraryError::DuplicateIsbn(book.isbn));
        }
        self.indexes.add(book.clone());
        self.books.add(book);
        Ok(())
    }

    pub fn remove_book(&mut self, isbn: &str) -> Result<Book> {
        let removed = self.books.remove(isbn)?;
        self.indexes.remove(isbn)?;
        Ok(removed)
    }

    /// Removes a uniformly chosen book.
    pub fn remove_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Book> {
        let removed = self.books.pop_random(rng)?;
        self.indexes.remove(&removed.isbn)?;
        Ok(removed)
    }

    /// Rebuilds every index from the shelf.
    pub fn refresh_indexes(&mut self) {
        self.indexes.rebuild(&self.books);
    }

    pub fn find_by_author(&self, author: &str) -> BookCollection {
        self.indexes.by_author(author)
    }

    pub fn find_by_year(&self, year: i32) -> BookCollection {
        self.indexes.by_year(year)
    }

    /// Books whose genre equals `genre` ignoring case, in shelf order.
    pub fn find_by_genre(&self, genre: &str) -> BookCollection {
        let genre = genre.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.genre.to_lowercase() == genre)
            .cloned()
            .collect()
    }

    pub fn get_by_isbn(&self, isbn: &str) -> Result<&Book> {
        self.indexes.get(isbn)
    }
}
