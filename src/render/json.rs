//! JSON rendering for parsed books.

use crate::error::{Error, Result};
use crate::model::ParsedBook;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a parsed book to JSON.
pub fn to_json(book: &ParsedBook, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(book),
        JsonFormat::Compact => serde_json::to_string(book),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Load a parsed book previously written with [`to_json`].
///
/// The book must agree with itself: `content` decodes to exactly
/// `totalPages` pages and every chapter points at one of them.
pub fn from_json(json: &str) -> Result<ParsedBook> {
    let book: ParsedBook = serde_json::from_str(json)
        .map_err(|e| Error::MalformedContent(format!("JSON deserialization error: {}", e)))?;

    let pages = book.pages()?.len();
    if pages != book.total_pages {
        return Err(Error::MalformedContent(format!(
            "totalPages is {} but content holds {} pages",
            book.total_pages, pages
        )));
    }
    if let Some(chapter) = book.chapters.iter().find(|c| c.page == 0 || c.page > pages) {
        return Err(Error::MalformedContent(format!(
            "chapter '{}' points at page {} of {}",
            chapter.title, chapter.page, pages
        )));
    }
    Ok(book)
}
