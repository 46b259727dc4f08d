//! Startup seed data

use super::Book;

/// The fixed records every server starts with
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("978-123", "Harry Potter y la piedra filosofal", "J.K. Rowling", 15.99),
        Book::new("978-456", "Harry Potter y la cámara secreta", "J.K. Rowling", 16.99),
        Book::new("978-789", "Juego de Tronos", "George R.R. Martin", 22.00),
        Book::new("978-321", "El nombre del viento", "Patrick Rothfuss", 20.00),
        Book::new("978-654", "El código Da Vinci", "Dan Brown", 18.00),
    ]
}
