//! Parsing options and configuration.

use crate::error::{Error, Result};
use crate::layout::PaginationOptions;
use crate::text::{NormalizeOptions, DEFAULT_MIN_PARAGRAPH_CHARS};

use super::artifacts::ArtifactOptions;
use super::lines::LineOptions;

/// Options for rebuilding a book.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Token-to-line grouping
    pub lines: LineOptions,

    /// Header/footer/folio detection
    pub artifacts: ArtifactOptions,

    /// Per-page cleanup
    pub normalize: NormalizeOptions,

    /// Paragraphs shorter than this are dropped as noise
    pub min_paragraph_chars: usize,

    /// Display page bounds
    pub pagination: PaginationOptions,

    /// Whether to assemble and normalize pages in parallel
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set line grouping options.
    pub fn with_lines(mut self, lines: LineOptions) -> Self {
        self.lines = lines;
        self
    }

    /// Set artifact detection options.
    pub fn with_artifacts(mut self, artifacts: ArtifactOptions) -> Self {
        self.artifacts = artifacts;
        self
    }

    /// Set normalization options.
    pub fn with_normalize(mut self, normalize: NormalizeOptions) -> Self {
        self.normalize = normalize;
        self
    }

    /// Set the minimum paragraph length.
    pub fn with_min_paragraph_chars(mut self, chars: usize) -> Self {
        self.min_paragraph_chars = chars;
        self
    }

    /// Set pagination options.
    pub fn with_pagination(mut self, pagination: PaginationOptions) -> Self {
        self.pagination = pagination;
        self
    }

    /// Set minimum and maximum display page sizes.
    pub fn with_page_bounds(mut self, min_page_chars: usize, max_page_chars: usize) -> Self {
        self.pagination = self.pagination.with_bounds(min_page_chars, max_page_chars);
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check the options for contradictions.
    pub fn validate(&self) -> Result<()> {
        self.pagination.validate()?;
        if !self.lines.y_tolerance.is_finite() || self.lines.y_tolerance < 0.0 {
            return Err(Error::InvalidOptions(format!(
                "y_tolerance must be a non-negative number, got {}",
                self.lines.y_tolerance
            )));
        }
        if let Some(ratio) = self.lines.paragraph_gap_ratio {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(Error::InvalidOptions(format!(
                    "paragraph_gap_ratio must be a positive number, got {}",
                    ratio
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.artifacts.min_frequency_ratio) {
            return Err(Error::InvalidOptions(format!(
                "min_frequency_ratio must be within 0..=1, got {}",
                self.artifacts.min_frequency_ratio
            )));
        }
        Ok(())
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            lines: LineOptions::default(),
            artifacts: ArtifactOptions::default(),
            normalize: NormalizeOptions::default(),
            min_paragraph_chars: DEFAULT_MIN_PARAGRAPH_CHARS,
            pagination: PaginationOptions::default(),
            parallel: true,
        }
    }
}
