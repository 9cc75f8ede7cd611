//! Text cleanup and structure recovery.

pub mod heading;
mod normalize;
mod paragraphs;

pub use heading::{is_heading, HeadingClassifier, HeadingRule, BUILTIN_RULES};
pub use normalize::{join_wrapped_lines, repair_hyphenation, NormalizeOptions, TextNormalizer};
pub use paragraphs::{split_paragraphs, DEFAULT_MIN_PARAGRAPH_CHARS};
