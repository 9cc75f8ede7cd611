//! Paragraph type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One logical paragraph of cleaned text.
///
/// Paragraph text never contains newlines; wrapped lines have already been
/// joined with spaces. Serializes as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Paragraph {
    text: String,
}

impl Paragraph {
    /// Create a paragraph from already-cleaned text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The paragraph text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters (Unicode scalar values).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl AsRef<str> for Paragraph {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<String> for Paragraph {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Paragraph {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_scalars() {
        // Hebrew letters are two bytes each in UTF-8
        let p = Paragraph::new("שלום");
        assert_eq!(p.char_len(), 4);
        assert_eq!(p.text().len(), 8);
    }

    #[test]
    fn test_serializes_as_string() {
        let p = Paragraph::new("Plain text paragraph.");
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            "\"Plain text paragraph.\""
        );
        let back: Paragraph = serde_json::from_str("\"Again.\"").unwrap();
        assert_eq!(back.text(), "Again.");
    }
}
