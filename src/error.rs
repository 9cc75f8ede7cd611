//! Error types for repaginate library.

use std::io;
use thiserror::Error;

/// Result type alias for repaginate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rebuilding a book.
///
/// Heuristic outcomes (a missed header, a paragraph wrongly taken for a
/// heading, an oversized page) are never errors.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The extraction collaborator could not deliver a source page.
    #[error("Extraction failed on page {page}: {reason}")]
    Extraction {
        /// 1-based source page number
        page: u32,
        /// Description of the failure
        reason: String,
    },

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Text input is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Options are inconsistent (e.g. minimum page size above maximum).
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Persisted page content does not follow the marker format.
    #[error("Malformed page content: {0}")]
    MalformedContent(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build an extraction error for a source page.
    pub fn extraction(page: u32, reason: impl Into<String>) -> Self {
        Error::Extraction {
            page,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::extraction(3, "corrupt content stream");
        assert_eq!(
            err.to_string(),
            "Extraction failed on page 3: corrupt content stream"
        );

        let err = Error::PageOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "Page 10 is out of range (document has 5 pages)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
