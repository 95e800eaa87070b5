pub use in_memory_catalog_store::InMemoryCatalogStore;

use crate::api::{Book, CatalogSnapshot, Reader, ReaderId};

mod in_memory_catalog_store;

#[derive(Debug, thiserror::Error)]
pub enum CatalogStoreError {
    #[error("Reader '{0}' not found")]
    ReaderNotFound(ReaderId),

    #[error("Book '{0}' is not in the catalog")]
    BookNotInCatalog(String),

    #[error("Reader '{0}' is already registered")]
    ReaderAlreadyRegistered(ReaderId),

    #[error("Book '{0}' is unavailable for lending")]
    BookUnavailable(String),

    #[error("Book '{0}' was not borrowed by reader '{1}'")]
    BookNotBorrowed(String, ReaderId),
}

pub trait CatalogStore {
    /// Display name of the catalog
    fn name(&self) -> &str;
    /// Adds a book to the available pool, always succeeds
    fn add_book(&mut self, book: Book);
    /// Removes the first structurally equal book from the available pool
    fn remove_book(&mut self, book: &Book) -> Result<(), CatalogStoreError>;
    /// Registers a reader, rejecting an id that is already taken
    fn register_reader(&mut self, reader: Reader) -> Result<(), CatalogStoreError>;
    /// First book on the shelf with an exactly matching title
    fn find_book_by_title(&self, title: &str) -> Option<&Book>;
    /// First reader with an exactly matching id
    fn find_reader_by_id(&self, reader_id: &str) -> Option<&Reader>;
    /// Moves a book from the available pool to the reader's borrowed list
    fn lend_book(&mut self, reader_id: &str, title: &str) -> Result<(), CatalogStoreError>;
    /// Moves a book from the reader's borrowed list back to the available pool
    fn return_book(&mut self, reader_id: &str, title: &str) -> Result<(), CatalogStoreError>;
    /// Books currently checked out to the reader, in borrow order
    fn get_reader_books(&self, reader_id: &str) -> Result<&[Book], CatalogStoreError>;
    /// Order-preserving copy of the whole catalog state
    fn snapshot(&self) -> CatalogSnapshot;
    /// Wholesale replacement of the catalog state; prior state is discarded
    fn restore(&mut self, snapshot: CatalogSnapshot);
}
