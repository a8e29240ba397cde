use std::io::Write;

use crate::extract::{Book, FirstEntry, IndexedBook};

pub const FETCH_FAILED: &str = "Failed to retrieve the webpage.";
pub const NO_BOOKS: &str = "No books found on the page.";

pub fn write_fetch_failed(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{FETCH_FAILED}")
}

pub fn write_first(out: &mut impl Write, entry: &FirstEntry) -> std::io::Result<()> {
    match entry {
        FirstEntry::Complete(book) => write_book(out, book),
        FirstEntry::Incomplete | FirstEntry::Missing => writeln!(out, "{NO_BOOKS}"),
    }
}

pub fn write_all(out: &mut impl Write, books: &[IndexedBook]) -> std::io::Result<()> {
    for IndexedBook { index, book } in books {
        writeln!(out, "Book {index}:")?;
        write_book(out, book)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_book(out: &mut impl Write, book: &Book) -> std::io::Result<()> {
    writeln!(out, "Title: {}", book.title)?;
    writeln!(out, "Author: {}", book.author)?;
    writeln!(out, "Rating: {}", book.rating)
}
