//! Marker-delimited page content.
//!
//! The persisted form of a book is one string in which every display page is
//! written as:
//!
//! ```text
//! <<PAGE:n>>
//! page text
//! <<LUMINA_PAGE_BREAK>>
//! ```
//!
//! Reader and editor surfaces split on the break marker and drop the page
//! marker, so both literals are a stable format.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::DisplayPage;

/// Separates consecutive pages.
pub const PAGE_BREAK_MARKER: &str = "<<LUMINA_PAGE_BREAK>>";

/// The page-open marker for a 1-based page number.
pub fn page_marker(page: usize) -> String {
    format!("<<PAGE:{}>>", page)
}

/// Serialize display pages into the persisted content string.
pub fn to_content(pages: &[DisplayPage]) -> String {
    let mut content = String::new();
    for (i, page) in pages.iter().enumerate() {
        content.push_str(&page_marker(i + 1));
        content.push('\n');
        content.push_str(&page.text);
        content.push('\n');
        content.push_str(PAGE_BREAK_MARKER);
        content.push('\n');
    }
    content
}

/// Recover the exact display pages from a content string.
///
/// Fails if a page does not start with the expected page marker or text
/// follows the last break marker.
pub fn split_pages(content: &str) -> Result<Vec<DisplayPage>> {
    let mut pages = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        let page_number = pages.len() + 1;
        let Some(end) = rest.find(PAGE_BREAK_MARKER) else {
            return Err(Error::MalformedContent(format!(
                "unterminated page {} (missing {})",
                page_number, PAGE_BREAK_MARKER
            )));
        };

        let chunk = &rest[..end];
        rest = &rest[end + PAGE_BREAK_MARKER.len()..];
        rest = rest.strip_prefix('\n').unwrap_or(rest);

        let header = format!("{}\n", page_marker(page_number));
        let text = chunk
            .strip_prefix(header.as_str())
            .and_then(|body| body.strip_suffix('\n'))
            .ok_or_else(|| {
                Error::MalformedContent(format!(
                    "page {} is not framed by {}",
                    page_number,
                    page_marker(page_number)
                ))
            })?;
        pages.push(DisplayPage::new(text));
    }

    Ok(pages)
}

/// Remove page and break marker literals from text bound for `content`.
///
/// Each run of literals and its surrounding whitespace becomes one space. Markers
/// contain no whitespace, so the result never holds a marker again.
pub fn scrub_markers(text: &str) -> Cow<'_, str> {
    static LITERAL: OnceLock<Regex> = OnceLock::new();
    LITERAL
        .get_or_init(|| {
            Regex::new(r"(?:\s*<<(?:LUMINA_PAGE_BREAK|PAGE:\d+)>>)+\s*")
                .expect("marker literal pattern is valid")
        })
        .replace_all(text, " ")
}

/// Lenient page texts for display: split on the break marker, drop blank
/// chunks, and remove any page markers.
pub fn strip_markers(content: &str) -> Vec<String> {
    static PAGE_MARKER: OnceLock<Regex> = OnceLock::new();
    let marker = PAGE_MARKER
        .get_or_init(|| Regex::new(r"<<PAGE:\d+>>").expect("page marker pattern is valid"));

    content
        .split(PAGE_BREAK_MARKER)
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| marker.replace_all(chunk, "").trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(texts: &[&str]) -> Vec<DisplayPage> {
        texts.iter().map(|t| DisplayPage::new(*t)).collect()
    }

    #[test]
    fn test_content_format() {
        let content = to_content(&pages(&["First page.", "Second\n\npage."]));
        assert_eq!(
            content,
            "<<PAGE:1>>\nFirst page.\n<<LUMINA_PAGE_BREAK>>\n\
             <<PAGE:2>>\nSecond\n\npage.\n<<LUMINA_PAGE_BREAK>>\n"
        );
    }

    #[test]
    fn test_split_round_trip() {
        let original = pages(&["One", "\nleading and trailing newlines\n", "", "Last"]);
        let content = to_content(&original);
        assert_eq!(split_pages(&content).unwrap(), original);
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(to_content(&[]), "");
        assert!(split_pages("").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_content() {
        assert!(matches!(
            split_pages("no markers at all"),
            Err(Error::MalformedContent(_))
        ));
        assert!(matches!(
            split_pages("<<PAGE:2>>\ntext\n<<LUMINA_PAGE_BREAK>>\n"),
            Err(Error::MalformedContent(_))
        ));
        assert!(matches!(
            split_pages("<<PAGE:1>>\ntext\n<<LUMINA_PAGE_BREAK>>\ntrailing"),
            Err(Error::MalformedContent(_))
        ));
    }

    #[test]
    fn test_scrub_markers() {
        assert_eq!(scrub_markers("plain text"), "plain text");
        assert!(matches!(scrub_markers("plain text"), Cow::Borrowed(_)));
        assert_eq!(
            scrub_markers("quotes <<LUMINA_PAGE_BREAK>> in its body"),
            "quotes in its body"
        );
        assert_eq!(scrub_markers("see <<PAGE:7>>here"), "see here");
        assert_eq!(scrub_markers("a <<PAGE:1>><<PAGE:2>> b"), "a b");
        assert_eq!(scrub_markers("<<PA<<PAGE:1>>GE:2>>"), "<<PA GE:2>>");
        assert_eq!(
            scrub_markers("<<LUMINA_PAGE_<<PAGE:1>>BREAK>>"),
            "<<LUMINA_PAGE_ BREAK>>"
        );
        // Near misses are ordinary text
        assert_eq!(scrub_markers("<<PAGE:x>> and <<BREAK>>"), "<<PAGE:x>> and <<BREAK>>");
    }

    #[test]
    fn test_strip_markers() {
        let content = to_content(&pages(&["Alpha text", "Beta text"]));
        assert_eq!(strip_markers(&content), vec!["Alpha text", "Beta text"]);
    }
}
