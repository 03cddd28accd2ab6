//! Catalog events applied at each simulation step.

use crate::catalog::{self, AUTHORS, GENRES};
use bibliotheca_core::{Library, LibraryError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Maximum books listed by a genre search.
const GENRE_SAMPLE: usize = 3;

/// Event identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogEvent {
    /// Store a freshly generated book with an unused ISBN
    Add,

    /// Remove a random book, tolerating an empty library
    Remove,

    /// List the books of a random known author
    SearchAuthor,

    /// Count the books of a random year
    SearchYear,

    /// Count and sample the books of a random genre
    SearchGenre,

    /// Rebuild all indexes from the shelf
    RefreshIndex,

    /// Look up an ISBN that is almost certainly absent
    MissingLookup,
}

impl CatalogEvent {
    /// Every event, in selection order.
    pub const ALL: [CatalogEvent; 7] = [
        CatalogEvent::Add,
        CatalogEvent::Remove,
        CatalogEvent::SearchAuthor,
        CatalogEvent::SearchYear,
        CatalogEvent::SearchGenre,
        CatalogEvent::RefreshIndex,
        CatalogEvent::MissingLookup,
    ];

    /// Picks an event uniformly.
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> CatalogEvent {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Returns the event name.
    pub fn name(&self) -> &'static str {
        match self {
            CatalogEvent::Add => "add",
            CatalogEvent::Remove => "remove",
            CatalogEvent::SearchAuthor => "search_author",
            CatalogEvent::SearchYear => "search_year",
            CatalogEvent::SearchGenre => "search_genre",
            CatalogEvent::RefreshIndex => "refresh_index",
            CatalogEvent::MissingLookup => "missing_lookup",
        }
    }

    /// Applies the event and returns the line it reports.
    pub fn apply<R: Rng + ?Sized>(&self, library: &mut Library, rng: &mut R) -> String {
        match self {
            CatalogEvent::Add => add_book(library, rng),
            CatalogEvent::Remove => remove_book(library, rng),
            CatalogEvent::SearchAuthor => search_author(library, rng),
            CatalogEvent::SearchYear => search_year(library, rng),
            CatalogEvent::SearchGenre => search_genre(library, rng),
            CatalogEvent::RefreshIndex => refresh_index(library),
            CatalogEvent::MissingLookup => missing_lookup(library, rng),
        }
    }
}

impl std::fmt::Display for CatalogEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for CatalogEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(CatalogEvent::Add),
            "remove" => Ok(CatalogEvent::Remove),
            "search_author" | "searchauthor" => Ok(CatalogEvent::SearchAuthor),
            "search_year" | "searchyear" => Ok(CatalogEvent::SearchYear),
            "search_genre" | "searchgenre" => Ok(CatalogEvent::SearchGenre),
            "refresh_index" | "refreshindex" => Ok(CatalogEvent::RefreshIndex),
            "missing_lookup" | "missinglookup" => Ok(CatalogEvent::MissingLookup),
            _ => Err(format!("Unknown event: {}", s)),
        }
    }
}

fn add_book<R: Rng + ?Sized>(library: &mut Library, rng: &mut R) -> String {
    let mut candidate = catalog::random_book(rng);
    while library.indexes().contains(&candidate.isbn) {
        candidate = catalog::random_book(rng);
    }

    let line = format!(
        "[add] Saved {} by {} [{}]",
        candidate.short(),
        candidate.author,
        candidate.isbn
    );
    if let Err(e) = library.add_book(candidate) {
        warn!("add_book rejected a fresh ISBN: {}", e);
        return format!("[add] Rejected: {}", e);
    }
    line
}

fn remove_book<R: Rng + ?Sized>(library: &mut Library, rng: &mut R) -> String {
    match library.remove_random(rng) {
        Ok(removed) => format!("[remove] Removed {} [{}]", removed.short(), removed.isbn),
        Err(LibraryError::EmptyCollection) => {
            "[remove] Library is empty, nothing to remove".to_string()
        }
        Err(e) => format!("[remove] Failed: {}", e),
    }
}

fn search_author<R: Rng + ?Sized>(library: &Library, rng: &mut R) -> String {
    let author = catalog::pick(rng, &AUTHORS);
    let matches = library.find_by_author(author);
    let titles = if matches.is_empty() {
        "no matches".to_string()
    } else {
        matches.iter().map(|b| b.short()).collect::<Vec<_>>().join(", ")
    };
    format!("[search-author] {}: {}", author, titles)
}

fn search_year<R: Rng + ?Sized>(library: &Library, rng: &mut R) -> String {
    let year = catalog::random_year(rng);
    let matches = library.find_by_year(year);
    format!("[search-year] {}: found {} books", year, matches.len())
}

fn search_genre<R: Rng + ?Sized>(library: &Library, rng: &mut R) -> String {
    let genre = catalog::pick(rng, &GENRES);
    let matches = library.find_by_genre(genre);
    let sample = matches.slice(..GENRE_SAMPLE);
    let titles = if sample.is_empty() {
        "no matches".to_string()
    } else {
        sample.iter().map(|b| b.short()).collect::<Vec<_>>().join(", ")
    };
    format!("[search-genre] {}: {} books -> {}", genre, matches.len(), titles)
}

fn refresh_index(library: &mut Library) -> String {
    library.refresh_indexes();
    format!("[reindex] Rebuilt indexes for {} books", library.indexes().len())
}

fn missing_lookup<R: Rng + ?Sized>(library: &Library, rng: &mut R) -> String {
    let fake_isbn = catalog::random_isbn(rng);
    match library.get_by_isbn(&fake_isbn) {
        Ok(_) => format!("[lookup] Unexpectedly found a book with ISBN {}", fake_isbn),
        Err(e) => {
            debug!("missing lookup handled: {}", e);
            format!("[lookup] Book with ISBN {} not found, handled without errors", fake_isbn)
        }
    }
}
