use crate::api::{Book, CatalogSnapshot, Reader};
use crate::catalog_store::{CatalogStore, CatalogStoreError};

pub struct InMemoryCatalogStore {
    name: String,
    books: Vec<Book>,
    readers: Vec<Reader>,
}

impl InMemoryCatalogStore {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            books: Vec::new(),
            readers: Vec::new(),
        }
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_book(&mut self, book: Book) {
        tracing::debug!("Adding book '{}' to catalog '{}'", book.title, self.name);
        self.books.push(book);
    }

    fn remove_book(&mut self, book: &Book) -> Result<(), CatalogStoreError> {
        match self.books.iter().position(|b| b == book) {
            Some(position) => {
                self.books.remove(position);
                Ok(())
            }
            None => Err(CatalogStoreError::BookNotInCatalog(book.title.clone())),
        }
    }

    fn register_reader(&mut self, reader: Reader) -> Result<(), CatalogStoreError> {
        if self
            .readers
            .iter()
            .any(|r| r.reader_id == reader.reader_id)
        {
            return Err(CatalogStoreError::ReaderAlreadyRegistered(reader.reader_id));
        }
        tracing::debug!("Registering reader '{}'", reader.reader_id);
        self.readers.push(reader);
        Ok(())
    }

    fn find_book_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title == title)
    }

    fn find_reader_by_id(&self, reader_id: &str) -> Option<&Reader> {
        self.readers.iter().find(|reader| reader.reader_id == reader_id)
    }

    fn lend_book(&mut self, reader_id: &str, title: &str) -> Result<(), CatalogStoreError> {
        let reader_index = self
            .readers
            .iter()
            .position(|r| r.reader_id == reader_id)
            .ok_or_else(|| CatalogStoreError::ReaderNotFound(reader_id.to_string()))?;

        let book_index = self
            .books
            .iter()
            .position(|b| b.title == title)
            .ok_or_else(|| CatalogStoreError::BookUnavailable(title.to_string()))?;

        let book = self.books.remove(book_index);
        tracing::info!("Lending '{}' to reader '{}'", book.title, reader_id);
        self.readers[reader_index].borrow_book(book);
        Ok(())
    }

    fn return_book(&mut self, reader_id: &str, title: &str) -> Result<(), CatalogStoreError> {
        let reader = self
            .readers
            .iter_mut()
            .find(|r| r.reader_id == reader_id)
            .ok_or_else(|| CatalogStoreError::ReaderNotFound(reader_id.to_string()))?;

        // A checked-out copy lives on the reader's borrowed list, not on the
        // shelf, so it is resolved there.
        let book = reader.return_book_by_title(title).ok_or_else(|| {
            CatalogStoreError::BookNotBorrowed(title.to_string(), reader_id.to_string())
        })?;

        tracing::info!("Reader '{}' returned '{}'", reader_id, book.title);
        self.books.push(book);
        Ok(())
    }

    fn get_reader_books(&self, reader_id: &str) -> Result<&[Book], CatalogStoreError> {
        self.find_reader_by_id(reader_id)
            .map(|reader| reader.borrowed_books.as_slice())
            .ok_or_else(|| CatalogStoreError::ReaderNotFound(reader_id.to_string()))
    }

    fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            name: self.name.clone(),
            books: self.books.clone(),
            readers: self.readers.clone(),
        }
    }

    fn restore(&mut self, snapshot: CatalogSnapshot) {
        tracing::info!(
            "Restoring catalog '{}' ({} books, {} readers)",
            snapshot.name,
            snapshot.books.len(),
            snapshot.readers.len()
        );
        self.name = snapshot.name;
        self.books = snapshot.books;
        self.readers = snapshot.readers;
    }
}
