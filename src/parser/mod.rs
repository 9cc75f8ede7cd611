//! Source-page parsing: line assembly, artifact detection, and the book pipeline.

mod artifacts;
mod book_parser;
mod lines;
mod options;
mod source;

pub use artifacts::{
    is_page_number_line, ArtifactDetector, ArtifactOptions, ArtifactSample, ArtifactSet,
};
pub use book_parser::BookParser;
pub use lines::{LineAssembler, LineOptions};
pub use options::ParseOptions;
#[cfg(feature = "async")]
pub use source::AsyncPageSource;
pub use source::PageSource;
