//! Detection of recurring page artifacts (running headers, footers, folios).
//!
//! Detection runs in two passes over plain values. Pass one samples the head
//! and tail of the document and counts candidate edge lines into an
//! [`ArtifactSample`]. Pass two turns the sample, plus every standalone
//! page-number line, into an immutable [`ArtifactSet`] that the normalizer
//! consults for every page.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use regex::Regex;

use crate::model::RawPage;

/// Options for artifact detection.
#[derive(Debug, Clone)]
pub struct ArtifactOptions {
    /// Upper bound on pages sampled from each end of the document
    pub max_sample_pages: usize,

    /// The per-end sample never exceeds `page_count / sample_divisor`
    pub sample_divisor: usize,

    /// Longer lines are never header/footer candidates
    pub max_line_chars: usize,

    /// Fraction of sampled pages a line must appear on
    pub min_frequency_ratio: f64,

    /// Absolute minimum number of appearances
    pub min_occurrences: usize,

    /// Treat standalone page-number lines as artifacts
    pub detect_page_numbers: bool,
}

impl ArtifactOptions {
    /// Create artifact options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-end sample bound.
    pub fn with_max_sample_pages(mut self, pages: usize) -> Self {
        self.max_sample_pages = pages;
        self
    }

    /// Set the frequency ratio.
    pub fn with_min_frequency_ratio(mut self, ratio: f64) -> Self {
        self.min_frequency_ratio = ratio;
        self
    }

    /// Enable or disable page-number detection.
    pub fn with_page_numbers(mut self, detect: bool) -> Self {
        self.detect_page_numbers = detect;
        self
    }
}

impl Default for ArtifactOptions {
    fn default() -> Self {
        Self {
            max_sample_pages: 8,
            sample_divisor: 3,
            max_line_chars: 80,
            min_frequency_ratio: 0.4,
            min_occurrences: 2,
            detect_page_numbers: true,
        }
    }
}

/// Exact line texts to suppress everywhere in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    lines: BTreeSet<String>,
}

impl ArtifactSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a (trimmed) line is an artifact.
    pub fn contains(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    /// Number of distinct artifact lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if no artifacts were detected.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate artifact lines in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    fn union(mut self, other: ArtifactSet) -> Self {
        self.lines.extend(other.lines);
        self
    }
}

impl<S: Into<String>> FromIterator<S> for ArtifactSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(|s| s.into().trim().to_string()).collect(),
        }
    }
}

/// Pass one: edge-line frequencies over the sampled head and tail pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSample {
    sampled_pages: usize,
    counts: BTreeMap<String, usize>,
}

impl ArtifactSample {
    /// Sample the first and last K pages, K = min(max_sample_pages, pages / sample_divisor).
    pub fn collect(pages: &[RawPage], options: &ArtifactOptions) -> Self {
        let per_end = options
            .max_sample_pages
            .min(pages.len() / options.sample_divisor.max(1));
        if per_end == 0 {
            return Self::default();
        }

        let head = &pages[..per_end];
        let tail = &pages[pages.len() - per_end..];

        let mut counts = BTreeMap::new();
        for page in head.iter().chain(tail) {
            let candidates: Vec<&str> = page
                .lines
                .iter()
                .map(|l| l.trim())
                .filter(|l| !l.is_empty() && l.chars().count() <= options.max_line_chars)
                .collect();

            let (Some(first), Some(last)) = (candidates.first(), candidates.last()) else {
                continue;
            };

            *counts.entry(first.to_string()).or_insert(0) += 1;
            // A lone candidate is both first and last; count it once
            if last != first {
                *counts.entry(last.to_string()).or_insert(0) += 1;
            }
        }

        Self {
            sampled_pages: head.len() + tail.len(),
            counts,
        }
    }

    /// Number of pages in the sample.
    pub fn sampled_pages(&self) -> usize {
        self.sampled_pages
    }

    /// How many sampled pages carried this line at an edge.
    pub fn count(&self, line: &str) -> usize {
        self.counts.get(line).copied().unwrap_or(0)
    }

    /// Minimum appearances for a line to count as an artifact.
    pub fn threshold(&self, options: &ArtifactOptions) -> usize {
        let by_ratio = (options.min_frequency_ratio * self.sampled_pages as f64).ceil() as usize;
        by_ratio.max(options.min_occurrences)
    }

    /// Pass two: the lines frequent enough to be running headers or footers.
    pub fn artifacts(&self, options: &ArtifactOptions) -> ArtifactSet {
        let threshold = self.threshold(options);
        self.counts
            .iter()
            .filter(|(_, count)| **count >= threshold)
            .map(|(line, _)| line.as_str())
            .collect()
    }
}

/// Finds the artifact set for a whole document.
#[derive(Debug, Clone, Default)]
pub struct ArtifactDetector {
    options: ArtifactOptions,
}

impl ArtifactDetector {
    /// Create a detector with the given options.
    pub fn new(options: ArtifactOptions) -> Self {
        Self { options }
    }

    /// Detect artifacts across all pages of a document.
    pub fn detect(&self, pages: &[RawPage]) -> ArtifactSet {
        let folios = if self.options.detect_page_numbers {
            page_number_lines(pages)
        } else {
            ArtifactSet::new()
        };

        let sample = ArtifactSample::collect(pages, &self.options);
        let frequent = sample.artifacts(&self.options);

        log::debug!(
            "Artifact detection: {} page-number lines, {} running lines from {} sampled pages",
            folios.len(),
            frequent.len(),
            sample.sampled_pages()
        );

        let artifacts = folios.union(frequent);
        for line in artifacts.iter() {
            log::trace!("  artifact: {:?}", line);
        }
        artifacts
    }
}

/// Check if a whole line is a standalone page number such as `42`, `- 42 -`, or `Page 42`.
pub fn is_page_number_line(line: &str) -> bool {
    static PAGE_NUMBER: OnceLock<Regex> = OnceLock::new();
    PAGE_NUMBER
        .get_or_init(|| {
            Regex::new(r"(?i)^[\s\-–—]*(?:page\s*)?[0-9]{1,4}[\s\-–—]*$")
                .expect("page number pattern is valid")
        })
        .is_match(line)
}

fn page_number_lines(pages: &[RawPage]) -> ArtifactSet {
    pages
        .iter()
        .flat_map(|p| p.lines.iter())
        .filter(|l| is_page_number_line(l))
        .map(|l| l.as_str())
        .collect()
}
