//! Book reconstruction pipeline.

use std::path::Path;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::layout::{Pagination, Paginator};
use crate::model::{ParsedBook, Paragraph, PositionedToken, RawPage};
use crate::text::{split_paragraphs, HeadingClassifier, TextNormalizer};

use super::artifacts::{ArtifactDetector, ArtifactSet};
use super::lines::LineAssembler;
use super::options::ParseOptions;
use super::source::{fetch_pages, PageSource};

/// Rebuilds paragraphs, chapters and display pages from positioned tokens
/// or plain text.
///
/// Per-page work (line assembly, normalization) runs on the rayon pool
/// unless [`ParseOptions::sequential`] is set. Artifact detection needs
/// every page and runs between the two.
#[derive(Debug, Clone, Default)]
pub struct BookParser {
    options: ParseOptions,
    classifier: HeadingClassifier,
}

impl BookParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            classifier: HeadingClassifier::default(),
        }
    }

    /// Replace the heading rules.
    pub fn with_classifier(mut self, classifier: HeadingClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Get the heading classifier.
    pub fn classifier(&self) -> &HeadingClassifier {
        &self.classifier
    }

    /// Fetch every page from `source` and rebuild the book.
    ///
    /// Any page failure aborts the parse with that error.
    pub fn parse_source<S: PageSource + ?Sized>(&self, source: &S) -> Result<ParsedBook> {
        self.options.validate()?;
        let token_pages = fetch_pages(source)?;
        self.parse_pages(&token_pages)
    }

    /// Rebuild a book from already-extracted token pages, in page order.
    pub fn parse_pages(&self, token_pages: &[Vec<PositionedToken>]) -> Result<ParsedBook> {
        self.options.validate()?;

        let assembler = LineAssembler::new(self.options.lines.clone());
        let numbered: Vec<(u32, &Vec<PositionedToken>)> = token_pages
            .iter()
            .enumerate()
            .map(|(i, tokens)| (i as u32 + 1, tokens))
            .collect();
        let raw_pages = self.map_pages(&numbered, |(page_number, tokens)| {
            assembler.assemble_page(*page_number, tokens)
        });

        self.parse_raw_pages(&raw_pages)
    }

    /// Rebuild a book from pages that are already split into lines.
    pub fn parse_raw_pages(&self, pages: &[RawPage]) -> Result<ParsedBook> {
        self.options.validate()?;

        let artifacts = ArtifactDetector::new(self.options.artifacts.clone()).detect(pages);
        let paragraphs = self.build_paragraphs(pages, &artifacts);
        log::debug!(
            "Built {} paragraphs from {} source pages ({} blank, {} artifact lines)",
            paragraphs.len(),
            pages.len(),
            pages.iter().filter(|page| page.is_blank()).count(),
            artifacts.len()
        );

        Ok(self.paginate(paragraphs))
    }

    /// Rebuild a book from plain text.
    ///
    /// Paragraphs are taken from blank-line boundaries. No artifact removal
    /// or line repair is applied.
    pub fn parse_text(&self, text: &str) -> Result<ParsedBook> {
        self.options.validate()?;

        let text = prepare_plain_text(text);
        let paragraphs = split_paragraphs(&text, self.options.min_paragraph_chars);
        log::debug!("Built {} paragraphs from plain text", paragraphs.len());

        Ok(self.paginate(paragraphs))
    }

    /// Read a UTF-8 text file and rebuild it as a book.
    pub fn parse_text_file<P: AsRef<Path>>(&self, path: P) -> Result<ParsedBook> {
        let bytes = std::fs::read(path.as_ref())?;
        let text = decode_text(bytes)?;
        self.parse_text(&text)
    }

    /// Fetch every page from an asynchronous source and rebuild the book on
    /// the blocking pool.
    #[cfg(feature = "async")]
    pub async fn parse_source_async<S>(&self, source: &S) -> Result<ParsedBook>
    where
        S: super::source::AsyncPageSource + ?Sized,
    {
        self.options.validate()?;

        let count = source.page_count();
        let mut token_pages = Vec::with_capacity(count as usize);
        for page_number in 1..=count {
            token_pages.push(source.page_tokens(page_number).await?);
        }
        log::debug!("Fetched {} source pages", count);

        let parser = self.clone();
        run_blocking(move || parser.parse_pages(&token_pages)).await
    }

    /// Read a UTF-8 text file without blocking the runtime and rebuild it as a book.
    #[cfg(feature = "async")]
    pub async fn parse_text_file_async<P: AsRef<Path>>(&self, path: P) -> Result<ParsedBook> {
        let bytes = tokio::fs::read(path.as_ref()).await?;
        let text = decode_text(bytes)?;
        let parser = self.clone();
        run_blocking(move || parser.parse_text(&text)).await
    }

    fn build_paragraphs(&self, pages: &[RawPage], artifacts: &ArtifactSet) -> Vec<Paragraph> {
        let normalizer = TextNormalizer::new(self.options.normalize.clone());
        let min_chars = self.options.min_paragraph_chars;

        let texts = self.map_pages(pages, |page| normalizer.normalize_page(page, artifacts));
        texts
            .iter()
            .flat_map(|text| split_paragraphs(text, min_chars))
            .collect()
    }

    fn paginate(&self, paragraphs: Vec<Paragraph>) -> ParsedBook {
        let paginator = Paginator::new(self.options.pagination.clone(), self.classifier.clone());
        let Pagination { pages, chapters } = paginator.paginate(&paragraphs);
        ParsedBook::from_pages(paragraphs, &pages, chapters)
    }

    fn map_pages<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        if self.options.parallel {
            items.par_iter().map(f).collect()
        } else {
            items.iter().map(f).collect()
        }
    }
}

#[cfg(feature = "async")]
async fn run_blocking<F>(work: F) -> Result<ParsedBook>
where
    F: FnOnce() -> Result<ParsedBook> + Send + 'static,
{
    match tokio::task::spawn_blocking(work).await {
        Ok(result) => result,
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::Interrupted,
            e,
        ))),
    }
}

fn decode_text(bytes: Vec<u8>) -> Result<String> {
    let text = String::from_utf8(bytes)
        .map_err(|e| Error::Encoding(format!("text file is not valid UTF-8: {}", e)))?;
    Ok(match text.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Unify line endings and blank out whitespace-only lines so they count as
/// paragraph boundaries.
fn prepare_plain_text(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(|line| if line.trim().is_empty() { "" } else { line })
        .collect::<Vec<_>>()
        .join("\n")
}
