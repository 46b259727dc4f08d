//! Catalog Tests
//!
//! Tests verify:
//! - Seed contents and order
//! - ISBN / title / author lookups and their matching rules
//! - Write Guard try-acquire semantics
//! - Concurrent scans while a writer appends

use std::sync::Arc;
use std::thread;

use bookstore::catalog::{seed_books, Book, Catalog};

// =============================================================================
// Seed Tests
// =============================================================================

#[test]
fn test_seeded_catalog_has_five_books() {
    let catalog = Catalog::seeded();
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.books(), seed_books());
}

#[test]
fn test_new_catalog_is_empty() {
    let catalog = Catalog::new();
    assert!(catalog.is_empty());
    assert_eq!(catalog.find_by_isbn("978-123"), None);
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_find_by_isbn_every_seed() {
    let catalog = Catalog::seeded();
    for book in seed_books() {
        assert_eq!(catalog.find_by_isbn(&book.isbn), Some(book));
    }
}

#[test]
fn test_find_by_isbn_is_exact() {
    let catalog = Catalog::seeded();
    assert_eq!(catalog.find_by_isbn("978-12"), None);
    assert_eq!(catalog.find_by_isbn(" 978-123"), None);
    assert_eq!(catalog.find_by_isbn("000-000"), None);
}

#[test]
fn test_find_by_isbn_first_match_wins() {
    let catalog = Catalog::with_books(vec![
        Book::new("1", "First", "A", 1.0),
        Book::new("1", "Second", "B", 2.0),
    ]);
    assert_eq!(catalog.find_by_isbn("1").unwrap().title, "First");
}

#[test]
fn test_find_by_title_ignores_case() {
    let catalog = Catalog::seeded();
    let expected = catalog.find_by_isbn("978-789");

    assert_eq!(catalog.find_by_title("Juego de Tronos"), expected);
    assert_eq!(catalog.find_by_title("juego de tronos"), expected);
    assert_eq!(catalog.find_by_title("JUEGO DE TRONOS"), expected);
}

#[test]
fn test_find_by_title_non_ascii() {
    let catalog = Catalog::seeded();
    let book = catalog.find_by_title("EL CÓDIGO DA VINCI").unwrap();
    assert_eq!(book.isbn, "978-654");
}

#[test]
fn test_find_by_title_is_not_a_substring_match() {
    let catalog = Catalog::seeded();
    assert_eq!(catalog.find_by_title("Harry Potter"), None);
}

#[test]
fn test_find_by_author_returns_all_in_order() {
    let catalog = Catalog::seeded();
    let books = catalog.find_by_author("j.k. rowling");

    let isbns: Vec<&str> = books.iter().map(|b| b.isbn.as_str()).collect();
    assert_eq!(isbns, vec!["978-123", "978-456"]);
}

#[test]
fn test_find_by_author_trims_query() {
    let catalog = Catalog::seeded();
    assert_eq!(catalog.find_by_author("   Dan Brown  ").len(), 1);
}

#[test]
fn test_find_by_author_unknown() {
    let catalog = Catalog::seeded();
    assert!(catalog.find_by_author("Nobody").is_empty());
}

// =============================================================================
// Write Guard Tests
// =============================================================================

#[test]
fn test_try_begin_write_is_exclusive() {
    let catalog = Catalog::seeded();

    let guard = catalog.try_begin_write().expect("guard should be free");
    assert!(catalog.try_begin_write().is_none());

    assert_eq!(guard.append(Book::new("978-999", "New", "Someone", 5.0)), 6);
    drop(guard);

    assert!(catalog.try_begin_write().is_some());
    assert_eq!(catalog.find_by_isbn("978-999").unwrap().title, "New");
}

#[test]
fn test_try_begin_write_from_other_thread_fails_fast() {
    let catalog = Arc::new(Catalog::seeded());
    let _guard = catalog.try_begin_write().unwrap();

    let other = Arc::clone(&catalog);
    let acquired = thread::spawn(move || other.try_begin_write().is_some())
        .join()
        .unwrap();

    assert!(!acquired);
}

#[test]
fn test_append_preserves_order() {
    let catalog = Catalog::seeded();
    {
        let guard = catalog.try_begin_write().unwrap();
        guard.append(Book::new("a", "A", "J.K. Rowling", 1.0));
        guard.append(Book::new("b", "B", "J.K. Rowling", 2.0));
    }

    let isbns: Vec<String> = catalog
        .find_by_author("J.K. Rowling")
        .into_iter()
        .map(|b| b.isbn)
        .collect();
    assert_eq!(isbns, vec!["978-123", "978-456", "a", "b"]);
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_scans_during_appends() {
    let catalog = Arc::new(Catalog::seeded());

    let writer = {
        let catalog = Arc::clone(&catalog);
        thread::spawn(move || {
            let guard = catalog.try_begin_write().unwrap();
            for i in 0..2000 {
                guard.append(Book::new(format!("x-{i}"), format!("T{i}"), "Writer", 1.0));
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let mut last = 0;
                for _ in 0..200 {
                    let seen = catalog.find_by_author("writer");
                    assert!(seen.len() >= last, "catalog shrank");
                    for (i, book) in seen.iter().enumerate() {
                        assert_eq!(book.isbn, format!("x-{i}"));
                    }
                    last = seen.len();
                    assert!(catalog.find_by_isbn("978-654").is_some());
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(catalog.len(), 2005);
}
