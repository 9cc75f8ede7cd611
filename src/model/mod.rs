//! Data model shared by every stage of the pipeline.
//!
//! Tokens and raw pages come in from the extraction side, paragraphs flow
//! through cleanup and classification, and display pages plus chapter marks
//! leave as a [`ParsedBook`].

mod book;
mod page;
mod paragraph;
mod token;

pub use book::{ChapterMark, ParsedBook};
pub use page::{DisplayPage, RawPage, PARAGRAPH_SEPARATOR};
pub use paragraph::Paragraph;
pub use token::PositionedToken;
