//! Rendering of parsed books into their persisted forms.

mod json;
pub mod markers;

pub use json::{from_json, to_json, JsonFormat};
pub use markers::{
    page_marker, scrub_markers, split_pages, strip_markers, to_content, PAGE_BREAK_MARKER,
};
