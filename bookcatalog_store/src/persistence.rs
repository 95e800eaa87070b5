use std::fs;
use std::path::{Path, PathBuf};

use crate::api::CatalogSnapshot;
use crate::catalog_store::CatalogStore;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Failed to access catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Serializes the whole catalog to `path` as a JSON document.
///
/// The document goes to a sibling temp file first and is renamed over the
/// target, so a failed write cannot leave a truncated catalog behind.
pub fn save_to_file(store: &dyn CatalogStore, path: &Path) -> Result<(), PersistenceError> {
    let document = serde_json::to_string_pretty(&store.snapshot())?;

    let temp_path = temp_sibling(path);
    fs::write(&temp_path, document)?;
    fs::rename(&temp_path, path)?;

    tracing::info!("Saved catalog '{}' to {}", store.name(), path.display());
    Ok(())
}

/// Reads a catalog document from `path` and replaces the store's state
/// wholesale. Missing or mistyped fields surface as a format error,
/// file-system failures as an I/O error.
pub fn load_from_file(store: &mut dyn CatalogStore, path: &Path) -> Result<(), PersistenceError> {
    let contents = fs::read_to_string(path)?;
    let snapshot: CatalogSnapshot = serde_json::from_str(&contents)?;

    store.restore(snapshot);
    tracing::info!("Loaded catalog '{}' from {}", store.name(), path.display());
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    PathBuf::from(temp)
}

#[cfg(test)]
mod persistence_tests {
    use super::*;
    use crate::api::{Book, Reader};
    use crate::catalog_store::InMemoryCatalogStore;

    fn dune() -> Book {
        Book {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            year: 1965,
            genre: "SciFi".to_string(),
        }
    }

    fn populated_store() -> InMemoryCatalogStore {
        let mut store = InMemoryCatalogStore::new("City Library");
        store.add_book(dune());
        store.add_book(Book {
            title: "Solaris".to_string(),
            author: "Lem".to_string(),
            year: 1961,
            genre: "SciFi".to_string(),
        });
        store
            .register_reader(Reader::new("Alice", "R1"))
            .expect("Failed to register reader");
        store.lend_book("R1", "Solaris").expect("Failed to lend book");
        store
    }

    #[test]
    /// Save and load round trip
    /// 1. Saves a populated catalog, the temp file is gone afterwards
    /// 2. Loads it into a store holding unrelated state
    /// 3. The loaded state matches the saved one exactly
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("catalog.json");

        let store = populated_store();
        save_to_file(&store, &path).expect("Failed to save catalog");
        assert!(path.exists());
        assert!(!temp_sibling(&path).exists());

        let mut loaded = InMemoryCatalogStore::new("Branch Library");
        loaded.add_book(dune());
        load_from_file(&mut loaded, &path).expect("Failed to load catalog");

        assert_eq!(loaded.snapshot(), store.snapshot());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("no_such_catalog.json");

        let mut store = InMemoryCatalogStore::new("City Library");
        let result = load_from_file(&mut store, &path);
        assert!(matches!(result, Err(PersistenceError::Io(..))));
    }

    #[test]
    /// Malformed documents are format errors, not I/O errors,
    /// and a failed load leaves the store untouched
    fn test_load_malformed_document_is_format_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let not_json = dir.path().join("garbage.json");
        fs::write(&not_json, "definitely not json").expect("Failed to write fixture");

        let missing_fields = dir.path().join("partial.json");
        fs::write(&missing_fields, r#"{"name": "City Library"}"#)
            .expect("Failed to write fixture");

        let mistyped_year = dir.path().join("mistyped.json");
        fs::write(
            &mistyped_year,
            r#"{"name": "x", "books": [{"title": "t", "author": "a", "year": "1965", "genre": "g"}], "readers": []}"#,
        )
        .expect("Failed to write fixture");

        let mut store = populated_store();
        let before = store.snapshot();

        for path in [&not_json, &missing_fields, &mistyped_year] {
            let result = load_from_file(&mut store, path);
            assert!(matches!(result, Err(PersistenceError::Format(..))));
        }
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    /// The persisted document keeps the exact wire shape:
    /// top-level name/books/readers, book records with
    /// title/author/year/genre, readers with name/reader_id/borrowed_books
    fn test_document_matches_wire_contract() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("catalog.json");

        save_to_file(&populated_store(), &path).expect("Failed to save catalog");

        let raw = fs::read_to_string(&path).expect("Failed to read catalog file");
        let document: serde_json::Value =
            serde_json::from_str(&raw).expect("Catalog file is not valid JSON");

        assert_eq!(document["name"], "City Library");
        assert_eq!(document["books"][0]["title"], "Dune");
        assert_eq!(document["books"][0]["author"], "Herbert");
        assert_eq!(document["books"][0]["year"], 1965);
        assert_eq!(document["books"][0]["genre"], "SciFi");
        assert_eq!(document["readers"][0]["name"], "Alice");
        assert_eq!(document["readers"][0]["reader_id"], "R1");
        assert_eq!(
            document["readers"][0]["borrowed_books"][0]["title"],
            "Solaris"
        );
    }
}
