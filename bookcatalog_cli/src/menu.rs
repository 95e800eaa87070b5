//! Interactive menu driving the catalog store over stdin/stdout.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;

use bookcatalog_store::api::{Book, Reader};
use bookcatalog_store::catalog_store::CatalogStore;
use bookcatalog_store::persistence;

use crate::app_config::AppConfig;

const MENU: &str = "\nMenu:
 1. Add a book
 2. Remove a book
 3. Register a reader
 4. Lend a book to a reader
 5. Accept a returned book
 6. Find a book by title
 7. Show a reader's borrowed books
 8. Save the catalog to a file
 9. Load the catalog from a file
 0. Quit";

/// Runs the menu loop until the user quits or input ends.
///
/// Catalog errors are printed and the session continues; only I/O failures
/// on the terminal itself abort the loop.
pub fn run_session<I>(
    store: &mut dyn CatalogStore,
    config: &AppConfig,
    lines: &mut I,
) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        println!("{MENU}");
        let Some(choice) = prompt(lines, "Select an option: ")? else {
            println!();
            break;
        };

        match choice.as_str() {
            "1" => add_book(store, lines)?,
            "2" => remove_book(store, lines)?,
            "3" => register_reader(store, lines)?,
            "4" => lend_book(store, lines)?,
            "5" => return_book(store, lines)?,
            "6" => find_book(store, lines)?,
            "7" => show_reader_books(store, lines)?,
            "8" => save_catalog(store, config, lines)?,
            "9" => load_catalog(store, config, lines)?,
            "0" => {
                println!("Goodbye.");
                break;
            }
            "" => continue,
            _ => println!("Unknown option, try again."),
        }
    }

    Ok(())
}

fn prompt<I>(lines: &mut I, label: &str) -> Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{label}");
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn add_book<I>(store: &mut dyn CatalogStore, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(title) = prompt(lines, "Title: ")? else {
        return Ok(());
    };
    let Some(author) = prompt(lines, "Author: ")? else {
        return Ok(());
    };
    let Some(year_input) = prompt(lines, "Publication year: ")? else {
        return Ok(());
    };
    let Some(genre) = prompt(lines, "Genre: ")? else {
        return Ok(());
    };

    let year: i32 = match year_input.parse() {
        Ok(year) => year,
        Err(_) => {
            println!("Publication year must be a number.");
            return Ok(());
        }
    };

    store.add_book(Book {
        title,
        author,
        year,
        genre,
    });
    println!("Book added.");
    Ok(())
}

fn remove_book<I>(store: &mut dyn CatalogStore, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(title) = prompt(lines, "Title of the book to remove: ")? else {
        return Ok(());
    };

    let Some(book) = store.find_book_by_title(&title).cloned() else {
        println!("Book not found.");
        return Ok(());
    };

    match store.remove_book(&book) {
        Ok(()) => println!("Book removed."),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn register_reader<I>(store: &mut dyn CatalogStore, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(name) = prompt(lines, "Reader name: ")? else {
        return Ok(());
    };
    let Some(reader_id) = prompt(lines, "Reader ID: ")? else {
        return Ok(());
    };

    match store.register_reader(Reader::new(&name, &reader_id)) {
        Ok(()) => println!("Reader registered."),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn lend_book<I>(store: &mut dyn CatalogStore, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(reader_id) = prompt(lines, "Reader ID: ")? else {
        return Ok(());
    };
    let Some(title) = prompt(lines, "Title of the book to lend: ")? else {
        return Ok(());
    };

    match store.lend_book(&reader_id, &title) {
        Ok(()) => println!("Book lent to the reader."),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn return_book<I>(store: &mut dyn CatalogStore, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(reader_id) = prompt(lines, "Reader ID: ")? else {
        return Ok(());
    };
    let Some(title) = prompt(lines, "Title of the book to return: ")? else {
        return Ok(());
    };

    match store.return_book(&reader_id, &title) {
        Ok(()) => println!("Book returned to the catalog."),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn find_book<I>(store: &mut dyn CatalogStore, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(title) = prompt(lines, "Title to search for: ")? else {
        return Ok(());
    };

    match store.find_book_by_title(&title) {
        Some(book) => println!("Book found: {book}"),
        None => println!("Book not found."),
    }
    Ok(())
}

fn show_reader_books<I>(store: &mut dyn CatalogStore, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(reader_id) = prompt(lines, "Reader ID: ")? else {
        return Ok(());
    };

    match store.get_reader_books(&reader_id) {
        Ok(books) => {
            println!("Books borrowed by the reader:");
            for book in books {
                println!("  {book}");
            }
        }
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn save_catalog<I>(
    store: &mut dyn CatalogStore,
    config: &AppConfig,
    lines: &mut I,
) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(path) = prompt_path(lines, config)? else {
        return Ok(());
    };

    match persistence::save_to_file(store, &path) {
        Ok(()) => println!("Catalog saved to {}.", path.display()),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn load_catalog<I>(
    store: &mut dyn CatalogStore,
    config: &AppConfig,
    lines: &mut I,
) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(path) = prompt_path(lines, config)? else {
        return Ok(());
    };

    match persistence::load_from_file(store, &path) {
        Ok(()) => println!("Catalog loaded from {}.", path.display()),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn prompt_path<I>(lines: &mut I, config: &AppConfig) -> Result<Option<PathBuf>>
where
    I: Iterator<Item = io::Result<String>>,
{
    let label = format!("File path [{}]: ", config.data_file.display());
    let Some(input) = prompt(lines, &label)? else {
        return Ok(None);
    };

    if input.is_empty() {
        Ok(Some(config.data_file.clone()))
    } else {
        Ok(Some(PathBuf::from(input)))
    }
}
