//! Ordered book collection.

use crate::book::Book;
use crate::error::{LibraryError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::{Bound, RangeBounds};

/// List-like collection preserving insertion order.
///
/// Each collection owns its storage; two collections built independently
/// never observe each other's mutations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookCollection {
    books: Vec<Book>,
}

impl BookCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection from existing books, keeping their order.
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Returns the book at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    /// Returns a new collection with the books in `range`.
    ///
    /// Bounds past the end are clamped, so an oversized range yields
    /// whatever books exist.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> BookCollection {
        let len = self.books.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .min(len);

        if start >= end {
            return Self::new();
        }
        Self::from_books(self.books[start..end].to_vec())
    }

    /// Returns true if a book with this ISBN is present.
    pub fn contains(&self, isbn: &str) -> bool {
        self.books.iter().any(|book| book.isbn == isbn)
    }

    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn extend<I: IntoIterator<Item = Book>>(&mut self, books: I) {
        for book in books {
            self.add(book);
        }
    }

    /// Removes the first book with this ISBN and returns it.
    pub fn remove(&mut self, isbn: &str) -> Result<Book> {
        let position = self
            .books
            .iter()
            .position(|candidate| candidate.isbn == isbn)
            .ok_or_else(|| LibraryError::not_found(isbn))?;
        Ok(self.books.remove(position))
    }

    /// Removes and returns a uniformly chosen book.
    pub fn pop_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Book> {
        if self.books.is_empty() {
            return Err(LibraryError::EmptyCollection);
        }
        let index = rng.gen_range(0..self.books.len());
        Ok(self.books.remove(index))
    }

    /// Returns an owned copy of the stored books.
    pub fn snapshot(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Concatenates two collections, skipping books of `other` whose ISBN
    /// is already present.
    pub fn merge(&self, other: &BookCollection) -> BookCollection {
        let mut combined = self.clone();
        for book in other {
            if !combined.contains(&book.isbn) {
                combined.add(book.clone());
            }
        }
        combined
    }
}

impl<'a> IntoIterator for &'a BookCollection {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

impl IntoIterator for BookCollection {
    type Item = Book;
    type IntoIter = std::vec::IntoIter<Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.into_iter()
    }
}

impl FromIterator<Book> for BookCollection {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self::from_books(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn printed(isbn: &str) -> Book {
        Book::printed("Sample", "Test Author", 2000, "genre", isbn, 150)
    }

    #[test]
    fn test_basic_operations() {
        let collection = BookCollection::from_books(vec![printed("001"), printed("002")]);

        assert_eq!(collection.len(), 2);
        assert!(collection.contains("001"));
        assert!(!collection.contains("003"));

        let sliced = collection.slice(..1);
        assert_eq!(sliced.len(), 1);
        assert_eq!(sliced.get(0).map(|b| b.isbn.as_str()), Some("001"));
    }

    #[test]
    fn test_slice_clamps_to_length() {
        let collection = BookCollection::from_books(vec![printed("001"), printed("002")]);

        assert_eq!(collection.slice(..3).len(), 2);
        assert!(collection.slice(5..).is_empty());
        assert_eq!(collection.slice(1..=1).len(), 1);
    }

    #[test]
    fn test_remove_by_isbn() {
        let mut collection = BookCollection::from_books(vec![printed("001"), printed("002")]);

        let removed = collection.remove("002").unwrap();
        assert_eq!(removed.isbn, "002");
        assert_eq!(collection.len(), 1);

        assert_eq!(collection.remove("404"), Err(LibraryError::NotFound("404".to_string())));
    }

    #[test]
    fn test_pop_random_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut collection = BookCollection::new();

        assert_eq!(collection.pop_random(&mut rng), Err(LibraryError::EmptyCollection));
    }

    #[test]
    fn test_pop_random_deterministic() {
        let books: Vec<Book> = (0..10).map(|i| printed(&format!("{:03}", i))).collect();
        let mut first = BookCollection::from_books(books.clone());
        let mut second = BookCollection::from_books(books);

        let a = first.pop_random(&mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        let b = second.pop_random(&mut ChaCha8Rng::seed_from_u64(7)).unwrap();

        assert_eq!(a.isbn, b.isbn);
        assert_eq!(first.len(), 9);
    }

    #[test]
    fn test_collections_do_not_share_storage() {
        let mut c1 = BookCollection::new();
        let c2 = BookCollection::new();

        c1.add(printed("A"));

        assert_eq!(c1.len(), 1);
        assert_eq!(c2.len(), 0);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut collection = BookCollection::from_books(vec![printed("001")]);
        let snapshot = collection.snapshot();

        collection.add(printed("002"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_merge_skips_duplicate_isbns() {
        let left = BookCollection::from_books(vec![printed("001"), printed("002")]);
        let right = BookCollection::from_books(vec![printed("002"), printed("003")]);

        let merged = left.merge(&right);
        let isbns: Vec<&str> = merged.iter().map(|b| b.isbn.as_str()).collect();

        assert_eq!(isbns, vec!["001", "002", "003"]);
    }
}
