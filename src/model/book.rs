//! Book-level output types.

use serde::{Deserialize, Serialize};

use super::{DisplayPage, Paragraph};
use crate::error::Result;
use crate::render::markers;

/// A detected heading and the display page it lands on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterMark {
    /// Heading text
    pub title: String,

    /// Display page (1-indexed)
    pub page: usize,
}

impl ChapterMark {
    /// Create a chapter mark.
    pub fn new(title: impl Into<String>, page: usize) -> Self {
        Self {
            title: title.into(),
            page,
        }
    }
}

/// The result of rebuilding a document, ready to be persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedBook {
    /// Every surviving paragraph, in document order
    pub paragraphs: Vec<Paragraph>,

    /// Marker-delimited display pages
    pub content: String,

    /// Number of display pages encoded in `content`
    pub total_pages: usize,

    /// Chapter marks in document order
    pub chapters: Vec<ChapterMark>,
}

impl ParsedBook {
    /// Assemble a book from its paginated parts.
    pub fn from_pages(
        paragraphs: Vec<Paragraph>,
        pages: &[DisplayPage],
        chapters: Vec<ChapterMark>,
    ) -> Self {
        Self {
            paragraphs,
            content: markers::to_content(pages),
            total_pages: pages.len(),
            chapters,
        }
    }

    /// Decode the display pages back out of `content`.
    pub fn pages(&self) -> Result<Vec<DisplayPage>> {
        markers::split_pages(&self.content)
    }

    /// Check if the book has no display pages.
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    /// The chapter mark covering a display page, if any chapter starts at or before it.
    pub fn chapter_for_page(&self, page: usize) -> Option<&ChapterMark> {
        self.chapters.iter().rev().find(|c| c.page <= page)
    }
}
