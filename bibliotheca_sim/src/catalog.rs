//! Random catalog generation.

use bibliotheca_core::{Book, BookFormat};
use rand::Rng;

pub const TITLES: [&str; 5] = [
    "War and Peace",
    "Crime and Punishment",
    "And Quiet Flows the Don",
    "The Master and Margarita",
    "Eugene Onegin",
];

pub const AUTHORS: [&str; 5] = [
    "Leo Tolstoy",
    "Fyodor Dostoevsky",
    "Mikhail Sholokhov",
    "Mikhail Bulgakov",
    "Alexander Pushkin",
];

pub const GENRES: [&str; 5] = ["novel", "history", "classic", "fantasy", "detective"];

const COVERS: [&str; 2] = ["paperback", "hardcover"];
const FILE_FORMATS: [&str; 3] = ["epub", "pdf", "mobi"];

/// Publication years drawn by generators and year searches.
pub const MIN_YEAR: i32 = 1980;
pub const MAX_YEAR: i32 = 2024;

/// Picks one entry uniformly. `items` must be non-empty.
pub fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

pub fn random_year<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(MIN_YEAR..=MAX_YEAR)
}

/// Generates a pseudo ISBN-13 string: `NNN-NNNNNNNNNNNNN`.
pub fn random_isbn<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix: u32 = rng.gen_range(100..=999);
    let body: u64 = rng.gen_range(1_000_000_000_000..=9_999_999_999_999);
    format!("{}-{}", prefix, body)
}

/// Generates a printed or digital book with random attributes.
pub fn random_book<R: Rng + ?Sized>(rng: &mut R) -> Book {
    let title = pick(rng, &TITLES);
    let author = pick(rng, &AUTHORS);
    let genre = pick(rng, &GENRES);
    let year = random_year(rng);
    let isbn = random_isbn(rng);

    let format = if rng.gen_bool(0.5) {
        BookFormat::Printed {
            pages: rng.gen_range(120..=720),
            cover: pick(rng, &COVERS).to_string(),
        }
    } else {
        let size: f64 = rng.gen_range(0.8..15.0);
        BookFormat::Digital {
            file_format: pick(rng, &FILE_FORMATS).to_string(),
            file_size_mb: (size * 100.0).round() / 100.0,
        }
    };

    Book::new(title, author, year, genre, isbn, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_book_generates_valid_entry() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        for _ in 0..200 {
            let book = random_book(&mut rng);

            assert!(!book.isbn.is_empty());
            assert!(GENRES.contains(&book.genre.as_str()));
            assert!(AUTHORS.contains(&book.author.as_str()));
            assert!((MIN_YEAR..=MAX_YEAR).contains(&book.year));

            match &book.format {
                BookFormat::Printed { pages, cover } => {
                    assert!((120..=720).contains(pages));
                    assert!(COVERS.contains(&cover.as_str()));
                }
                BookFormat::Digital { file_format, file_size_mb } => {
                    assert!(FILE_FORMATS.contains(&file_format.as_str()));
                    assert!(*file_size_mb >= 0.8 && *file_size_mb <= 15.0);
                }
            }
        }
    }

    #[test]
    fn test_random_isbn_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let isbn = random_isbn(&mut rng);

        let (prefix, body) = isbn.split_once('-').unwrap();
        assert_eq!(prefix.len(), 3);
        assert_eq!(body.len(), 13);
        assert!(body.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = random_book(&mut ChaCha8Rng::seed_from_u64(17));
        let b = random_book(&mut ChaCha8Rng::seed_from_u64(17));
        assert_eq!(a, b);
    }

    #[test]
    fn test_both_formats_generated() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let books: Vec<Book> = (0..50).map(|_| random_book(&mut rng)).collect();

        assert!(books.iter().any(|b| b.is_digital()));
        assert!(books.iter().any(|b| !b.is_digital()));
    }
}
