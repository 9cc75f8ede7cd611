//! Paragraph splitting.

use std::sync::OnceLock;

use regex::Regex;

use super::heading::is_chapter_marker;
use crate::model::Paragraph;
use crate::render::scrub_markers;

/// Default minimum paragraph length in characters.
pub const DEFAULT_MIN_PARAGRAPH_CHARS: usize = 20;

/// Split normalized text into paragraphs.
///
/// Blocks are separated by two or more newlines. Inside a block, remaining
/// newlines become spaces. Blocks shorter than `min_chars` are dropped as
/// noise unless they are chapter markers, which are short by nature.
/// Page and break marker literals are scrubbed so paragraph text can never
/// corrupt the page content it is written into.
pub fn split_paragraphs(text: &str, min_chars: usize) -> Vec<Paragraph> {
    static BLANK_LINES: OnceLock<Regex> = OnceLock::new();
    let blank_lines =
        BLANK_LINES.get_or_init(|| Regex::new(r"\n{2,}").expect("paragraph pattern is valid"));

    blank_lines
        .split(text)
        .map(|block| scrub_markers(&block.replace('\n', " ")).trim().to_string())
        .filter(|block| block.chars().count() >= min_chars || is_chapter_marker(block))
        .map(Paragraph::new)
        .collect()
}
