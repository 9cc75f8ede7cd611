//! Display page layout.
//!
//! Paragraphs are packed into pages by folding an explicit [`PageState`]
//! over them. The state accumulates paragraphs until one of two triggers
//! flushes it into a finished page: a heading arrives, or the next paragraph
//! would overflow a page that is already long enough.

use crate::error::{Error, Result};
use crate::model::{ChapterMark, DisplayPage, Paragraph, PARAGRAPH_SEPARATOR};
use crate::text::HeadingClassifier;

/// Page size bounds, in characters.
#[derive(Debug, Clone)]
pub struct PaginationOptions {
    /// A page is not flushed for size until it holds at least this much text
    pub min_page_chars: usize,

    /// Pages do not grow past this unless a single paragraph is longer
    pub max_page_chars: usize,

    /// Preferred page size; informational only
    pub target_page_chars: usize,
}

impl PaginationOptions {
    /// Create pagination options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set minimum and maximum page sizes.
    pub fn with_bounds(mut self, min_page_chars: usize, max_page_chars: usize) -> Self {
        self.min_page_chars = min_page_chars;
        self.max_page_chars = max_page_chars;
        self
    }

    /// Set the advisory target page size.
    pub fn with_target(mut self, target_page_chars: usize) -> Self {
        self.target_page_chars = target_page_chars;
        self
    }

    /// Check that the bounds are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_page_chars == 0 {
            return Err(Error::InvalidOptions(
                "max_page_chars must be greater than zero".to_string(),
            ));
        }
        if self.min_page_chars > self.max_page_chars {
            return Err(Error::InvalidOptions(format!(
                "min_page_chars ({}) exceeds max_page_chars ({})",
                self.min_page_chars, self.max_page_chars
            )));
        }
        Ok(())
    }
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            min_page_chars: 800,
            max_page_chars: 2800,
            target_page_chars: 1800,
        }
    }
}

/// Finished pages and the chapters found while building them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Display pages in order
    pub pages: Vec<DisplayPage>,
    /// Chapter marks in order
    pub chapters: Vec<ChapterMark>,
}

/// Accumulator threaded through the paragraph fold.
#[derive(Debug, Default)]
struct PageState<'a> {
    pages: Vec<DisplayPage>,
    chapters: Vec<ChapterMark>,
    buffer: Vec<&'a str>,
    running_chars: usize,
}

impl<'a> PageState<'a> {
    fn flush(mut self) -> Self {
        if !self.buffer.is_empty() {
            log::trace!(
                "Flushing page {} ({} paragraphs, {} chars counted)",
                self.pages.len() + 1,
                self.buffer.len(),
                self.running_chars
            );
            self.pages
                .push(DisplayPage::new(self.buffer.join(PARAGRAPH_SEPARATOR)));
            self.buffer.clear();
            self.running_chars = 0;
        }
        self
    }

    fn mark_chapter(mut self, title: &str) -> Self {
        let page = self.pages.len() + 1;
        self.chapters.push(ChapterMark::new(title, page));
        self
    }

    fn emit_alone(mut self, text: &str) -> Self {
        self.pages.push(DisplayPage::new(text));
        self
    }

    fn append(mut self, text: &'a str, counted_chars: usize) -> Self {
        self.buffer.push(text);
        self.running_chars += counted_chars;
        self
    }

    /// Length of the page text the buffer would flush to.
    fn page_chars(&self) -> usize {
        self.running_chars
            .saturating_sub(PARAGRAPH_SEPARATOR.chars().count())
    }

    fn finish(self) -> Pagination {
        let state = self.flush();
        Pagination {
            pages: state.pages,
            chapters: state.chapters,
        }
    }
}

/// Packs paragraphs into display pages.
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    options: PaginationOptions,
    classifier: HeadingClassifier,
}

impl Paginator {
    /// Create a paginator.
    pub fn new(options: PaginationOptions, classifier: HeadingClassifier) -> Self {
        Self {
            options,
            classifier,
        }
    }

    /// Lay out paragraphs into display pages, never splitting a paragraph.
    pub fn paginate(&self, paragraphs: &[Paragraph]) -> Pagination {
        let pagination = paragraphs
            .iter()
            .fold(PageState::default(), |state, paragraph| {
                self.step(state, paragraph)
            })
            .finish();

        log::debug!(
            "Paginated {} paragraphs into {} pages ({} chapters)",
            paragraphs.len(),
            pagination.pages.len(),
            pagination.chapters.len()
        );
        pagination
    }

    fn step<'a>(&self, mut state: PageState<'a>, paragraph: &'a Paragraph) -> PageState<'a> {
        let text = paragraph.text();
        let len = paragraph.char_len();

        if self.classifier.is_heading(text) {
            state = state.flush().mark_chapter(text);
        }

        if len > self.options.max_page_chars {
            return state.flush().emit_alone(text);
        }

        let would_overflow = state.running_chars + len > self.options.max_page_chars;
        if would_overflow && state.page_chars() >= self.options.min_page_chars {
            state = state.flush();
        }

        state.append(text, len + PARAGRAPH_SEPARATOR.chars().count())
    }
}
