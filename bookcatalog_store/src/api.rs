use std::fmt;

use serde::{Deserialize, Serialize};

pub type ReaderId = String;

/// A book is a plain value: two books with identical fields are the same
/// book as far as the catalog is concerned.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}) - {}",
            self.title, self.author, self.year, self.genre
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Reader {
    pub name: String,
    pub reader_id: ReaderId,
    pub borrowed_books: Vec<Book>,
}

impl Reader {
    pub fn new(name: &str, reader_id: &str) -> Self {
        Self {
            name: name.to_string(),
            reader_id: reader_id.to_string(),
            borrowed_books: Vec::new(),
        }
    }

    /// Appends the book to the borrowed list, keeping borrow order.
    /// Coordination with the shelf is the catalog's job, not the reader's.
    pub fn borrow_book(&mut self, book: Book) {
        self.borrowed_books.push(book);
    }

    /// Removes and returns the first borrowed book structurally equal to
    /// `book`, or `None` if the reader never borrowed it.
    pub fn return_book(&mut self, book: &Book) -> Option<Book> {
        let position = self.borrowed_books.iter().position(|b| b == book)?;
        Some(self.borrowed_books.remove(position))
    }

    /// Removes and returns the first borrowed book with an exactly matching
    /// title, or `None` if no such book is on the borrowed list.
    pub fn return_book_by_title(&mut self, title: &str) -> Option<Book> {
        let position = self.borrowed_books.iter().position(|b| b.title == title)?;
        Some(self.borrowed_books.remove(position))
    }
}

impl fmt::Display for Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.reader_id)
    }
}

/// Full catalog state as persisted: the document mirrors in-memory order
/// exactly and carries no version field.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct CatalogSnapshot {
    pub name: String,
    pub books: Vec<Book>,
    pub readers: Vec<Reader>,
}
