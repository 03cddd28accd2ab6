//! Secondary indexes over the catalog.

use crate::book::Book;
use crate::collection::BookCollection;
use crate::error::{LibraryError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Fields that can be used for keyed lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexField {
    Isbn,
    Author,
    Year,
}

impl IndexField {
    pub fn name(&self) -> &'static str {
        match self {
            IndexField::Isbn => "isbn",
            IndexField::Author => "author",
            IndexField::Year => "year",
        }
    }
}

impl std::fmt::Display for IndexField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for IndexField {
    type Err = LibraryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "isbn" => Ok(IndexField::Isbn),
            "author" => Ok(IndexField::Author),
            "year" => Ok(IndexField::Year),
            _ => Err(LibraryError::UnsupportedField(s.to_string())),
        }
    }
}

/// Book index keyed by ISBN, author and year.
///
/// Author keys are lowercased. Buckets hold ISBNs in sorted order, so
/// lookups return books in a stable order regardless of insertion history.
#[derive(Debug, Clone, Default)]
pub struct BookIndex {
    by_isbn: BTreeMap<String, Book>,
    by_author: BTreeMap<String, BTreeSet<String>>,
    by_year: BTreeMap<i32, BTreeSet<String>>,
}

impl BookIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indexed books.
    pub fn len(&self) -> usize {
        self.by_isbn.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_isbn.is_empty()
    }

    /// Iterates `(isbn, book)` pairs in ISBN order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Book)> {
        self.by_isbn.iter().map(|(isbn, book)| (isbn.as_str(), book))
    }

    pub fn contains(&self, isbn: &str) -> bool {
        self.by_isbn.contains_key(isbn)
    }

    pub fn get(&self, isbn: &str) -> Result<&Book> {
        self.by_isbn
            .get(isbn)
            .ok_or_else(|| LibraryError::not_found(isbn))
    }

    /// Indexes a book, replacing any entry with the same ISBN.
    pub fn add(&mut self, book: Book) {
        self.unlink(&book.isbn);

        self.by_author
            .entry(book.author.to_lowercase())
            .or_default()
            .insert(book.isbn.clone());
        self.by_year
            .entry(book.year)
            .or_default()
            .insert(book.isbn.clone());
        self.by_isbn.insert(book.isbn.clone(), book);
    }

    /// Removes a book from every index. Empty buckets are dropped.
    pub fn remove(&mut self, isbn: &str) -> Result<Book> {
        self.unlink(isbn).ok_or_else(|| LibraryError::not_found(isbn))
    }

    /// Books by an author, matched case-insensitively.
    pub fn by_author(&self, author: &str) -> BookCollection {
        self.collect_bucket(self.by_author.get(&author.to_lowercase()))
    }

    pub fn by_year(&self, year: i32) -> BookCollection {
        self.collect_bucket(self.by_year.get(&year))
    }

    /// Keyed lookup by field name, e.g. `lookup("year", "2001")`.
    pub fn lookup(&self, field: &str, value: &str) -> Result<BookCollection> {
        match field.parse::<IndexField>()? {
            IndexField::Isbn => {
                let book = self.get(value)?;
                Ok(BookCollection::from_books(vec![book.clone()]))
            }
            IndexField::Author => Ok(self.by_author(value)),
            IndexField::Year => {
                let year = value
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| LibraryError::InvalidYear(value.to_string()))?;
                Ok(self.by_year(year))
            }
        }
    }

    /// Clears every index and re-adds `books`.
    pub fn rebuild<'a, I: IntoIterator<Item = &'a Book>>(&mut self, books: I) {
        self.by_isbn.clear();
        self.by_author.clear();
        self.by_year.clear();
        for book in books {
            self.add(book.clone());
        }
    }

    fn unlink(&mut self, isbn: &str) -> Option<Book> {
        let book = self.by_isbn.remove(isbn)?;

        let author_key = book.author.to_lowercase();
        if let Some(bucket) = self.by_author.get_mut(&author_key) {
            bucket.remove(isbn);
            if bucket.is_empty() {
                self.by_author.remove(&author_key);
            }
        }

        if let Some(bucket) = self.by_year.get_mut(&book.year) {
            bucket.remove(isbn);
            if bucket.is_empty() {
                self.by_year.remove(&book.year);
            }
        }

        Some(book)
    }

    fn collect_bucket(&self, bucket: Option<&BTreeSet<String>>) -> BookCollection {
        bucket
            .into_iter()
            .flatten()
            .filter_map(|isbn| self.by_isbn.get(isbn).cloned())
            .collect()
    }
}
