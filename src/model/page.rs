//! Page-level types: source pages before cleanup, display pages after.

use serde::{Deserialize, Serialize};

/// Separator placed between paragraphs on a display page.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// One source page's assembled lines, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPage {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Trimmed lines from top to bottom; an empty entry only marks a paragraph gap
    pub lines: Vec<String>,
}

impl RawPage {
    /// Create a raw page.
    pub fn new(page_number: u32, lines: Vec<String>) -> Self {
        Self { page_number, lines }
    }

    /// Build a raw page from string slices.
    pub fn from_lines<I, S>(page_number: u32, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(page_number, lines.into_iter().map(Into::into).collect())
    }

    /// A page with no text at all.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }
}

/// A page ready for on-screen display.
///
/// Holds one or more whole paragraphs joined by [`PARAGRAPH_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPage {
    /// Page text
    pub text: String,
}

impl DisplayPage {
    /// Create a display page.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// The paragraphs on this page, in order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.text.split(PARAGRAPH_SEPARATOR)
    }

    /// The first paragraph on this page.
    pub fn first_paragraph(&self) -> &str {
        self.paragraphs().next().unwrap_or("")
    }
}
