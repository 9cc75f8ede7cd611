//! The seam to the text extraction collaborator.

use crate::error::{Error, Result};
use crate::model::PositionedToken;

/// Delivers positioned tokens for each source page.
///
/// Pages are requested in page-number order, starting at 1. An error from
/// any page aborts the whole parse.
pub trait PageSource {
    /// Number of source pages.
    fn page_count(&self) -> u32;

    /// Tokens of one 1-based source page.
    fn page_tokens(&self, page_number: u32) -> Result<Vec<PositionedToken>>;
}

impl PageSource for [Vec<PositionedToken>] {
    fn page_count(&self) -> u32 {
        self.len() as u32
    }

    fn page_tokens(&self, page_number: u32) -> Result<Vec<PositionedToken>> {
        page_number
            .checked_sub(1)
            .and_then(|i| self.get(i as usize))
            .cloned()
            .ok_or(Error::PageOutOfRange(page_number, self.page_count()))
    }
}

impl PageSource for Vec<Vec<PositionedToken>> {
    fn page_count(&self) -> u32 {
        self.as_slice().page_count()
    }

    fn page_tokens(&self, page_number: u32) -> Result<Vec<PositionedToken>> {
        self.as_slice().page_tokens(page_number)
    }
}

/// Asynchronous variant of [`PageSource`], for extractors that fetch pages over I/O.
#[cfg(feature = "async")]
pub trait AsyncPageSource {
    /// Number of source pages.
    fn page_count(&self) -> u32;

    /// Tokens of one 1-based source page.
    fn page_tokens(
        &self,
        page_number: u32,
    ) -> impl std::future::Future<Output = Result<Vec<PositionedToken>>> + Send;
}

/// Fetch every page in order, stopping at the first failure.
pub(crate) fn fetch_pages<S: PageSource + ?Sized>(source: &S) -> Result<Vec<Vec<PositionedToken>>> {
    let count = source.page_count();
    let mut pages = Vec::with_capacity(count as usize);
    for page_number in 1..=count {
        pages.push(source.page_tokens(page_number)?);
    }
    log::debug!("Fetched {} source pages", count);
    Ok(pages)
}
