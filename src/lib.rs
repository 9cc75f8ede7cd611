//! # repaginate
//!
//! Rebuild readable books from PDF text tokens or plain text.
//!
//! Positioned tokens are grouped into lines, running headers, footers and
//! page numbers are removed, broken lines and hyphenated words are repaired,
//! and the text is cut into paragraphs. Headings are detected heuristically
//! and the paragraphs are packed into reader-sized display pages, each
//! heading starting a new page.
//!
//! ## Quick Start
//!
//! ```
//! use repaginate::parse_text;
//!
//! fn main() -> repaginate::Result<()> {
//!     let book = parse_text("Chapter 1\n\nIt was a bright cold day in April.")?;
//!
//!     assert_eq!(book.total_pages, 1);
//!     assert_eq!(book.chapters[0].title, "Chapter 1");
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. [`parser::LineAssembler`] groups tokens that share a baseline
//! 2. [`parser::ArtifactDetector`] finds repeated edge lines and page numbers
//! 3. [`text::TextNormalizer`] drops artifacts and repairs wrapped lines
//! 4. [`text::split_paragraphs`] cuts page text into paragraphs
//! 5. [`layout::Paginator`] packs paragraphs into display pages, consulting
//!    the [`text::HeadingClassifier`]
//! 6. [`render::to_content`] writes the marker-delimited page content
//!
//! [`BookParser`] runs the whole pipeline. The per-page stages run on the
//! rayon pool unless [`ParseOptions::sequential`] is set.

pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;
pub mod text;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{PaginationOptions, Paginator};
pub use model::{ChapterMark, DisplayPage, Paragraph, ParsedBook, PositionedToken, RawPage};
#[cfg(feature = "async")]
pub use parser::AsyncPageSource;
pub use parser::{BookParser, PageSource, ParseOptions};
pub use render::{to_json, JsonFormat, PAGE_BREAK_MARKER};
pub use text::HeadingClassifier;

use std::path::Path;

/// Fetch all pages from a token source and rebuild the book with default options.
///
/// # Example
///
/// ```
/// use repaginate::{parse_source, PositionedToken};
///
/// let pages = vec![vec![
///     PositionedToken::new("Wrapped words of the first", 72.0, 700.0),
///     PositionedToken::new("line continue here.", 72.0, 686.0),
/// ]];
/// let book = parse_source(&pages).unwrap();
/// assert_eq!(book.paragraphs[0].text(), "Wrapped words of the first line continue here.");
/// ```
pub fn parse_source<S: PageSource + ?Sized>(source: &S) -> Result<ParsedBook> {
    BookParser::new().parse_source(source)
}

/// Rebuild a book from token pages with default options.
pub fn parse_pages(token_pages: &[Vec<PositionedToken>]) -> Result<ParsedBook> {
    BookParser::new().parse_pages(token_pages)
}

/// Rebuild a book from plain text with default options.
///
/// Blank lines separate paragraphs.
pub fn parse_text(text: &str) -> Result<ParsedBook> {
    BookParser::new().parse_text(text)
}

/// Read a UTF-8 text file and rebuild it as a book with default options.
///
/// # Example
///
/// ```no_run
/// use repaginate::parse_text_file;
///
/// let book = parse_text_file("novel.txt").unwrap();
/// println!("{} pages, {} chapters", book.total_pages, book.chapters.len());
/// ```
pub fn parse_text_file<P: AsRef<Path>>(path: P) -> Result<ParsedBook> {
    BookParser::new().parse_text_file(path)
}

/// Rebuild a book from plain text and convert it to JSON.
///
/// # Example
///
/// ```
/// use repaginate::{text_to_json, JsonFormat};
///
/// let json = text_to_json("A paragraph long enough to be kept.", JsonFormat::Compact).unwrap();
/// assert!(json.contains("\"totalPages\":1"));
/// ```
pub fn text_to_json(text: &str, format: JsonFormat) -> Result<String> {
    let book = parse_text(text)?;
    render::to_json(&book, format)
}
