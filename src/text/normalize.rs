//! Per-page text normalization.
//!
//! Turns one source page's lines into a single cleaned block: artifacts and
//! stray control characters are dropped, words broken by a hyphen at a line
//! wrap are rejoined, and wrapped lines inside a sentence become one line.
//! Blank lines survive as paragraph separators.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::model::RawPage;
use crate::parser::ArtifactSet;

/// Options for text normalization.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Rejoin words hyphenated at a line break
    pub fix_hyphenation: bool,

    /// Join lines that wrap in the middle of a sentence
    pub join_wrapped_lines: bool,

    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,
}

impl NormalizeOptions {
    /// Create normalize options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable hyphenation repair.
    pub fn with_hyphenation_fix(mut self, enabled: bool) -> Self {
        self.fix_hyphenation = enabled;
        self
    }

    /// Enable or disable soft line joining.
    pub fn with_line_joining(mut self, enabled: bool) -> Self {
        self.join_wrapped_lines = enabled;
        self
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            fix_hyphenation: true,
            join_wrapped_lines: true,
            normalize_unicode: false,
        }
    }
}

/// Cleans source pages into paragraph-ready text.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    options: NormalizeOptions,
}

impl TextNormalizer {
    /// Create a normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// Normalize one source page. Returns an empty string if nothing survives.
    pub fn normalize_page(&self, page: &RawPage, artifacts: &ArtifactSet) -> String {
        self.normalize_lines(page.lines.iter().map(String::as_str), artifacts)
    }

    /// Normalize free text, splitting it into lines first.
    pub fn normalize_text(&self, text: &str, artifacts: &ArtifactSet) -> String {
        self.normalize_lines(text.lines(), artifacts)
    }

    /// Normalize a sequence of lines.
    pub fn normalize_lines<'a, I>(&self, lines: I, artifacts: &ArtifactSet) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut kept: Vec<String> = Vec::new();
        let mut pending_break = false;

        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                pending_break = !kept.is_empty();
                continue;
            }
            if artifacts.contains(trimmed) {
                continue;
            }

            let clean = self.clean_line(trimmed);
            if clean.is_empty() {
                continue;
            }
            if pending_break {
                kept.push(String::new());
                pending_break = false;
            }
            kept.push(clean);
        }

        let mut text = kept.join("\n");
        if self.options.fix_hyphenation {
            text = repair_hyphenation(&text);
        }
        if self.options.join_wrapped_lines {
            text = join_wrapped_lines(&text);
        }
        text
    }

    fn clean_line(&self, line: &str) -> String {
        let line: Cow<'_, str> = if self.options.normalize_unicode {
            Cow::Owned(line.nfc().collect())
        } else {
            Cow::Borrowed(line)
        };

        let stripped: String = line
            .chars()
            .filter(|&c| c != '\u{FFFD}' && c != '\u{00AD}')
            .collect();

        whitespace_run()
            .replace_all(&stripped, " ")
            .trim()
            .to_string()
    }
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"))
}

/// Rejoin `word-\ncontinuation` into `wordcontinuation`.
///
/// Repeats until stable so that a dangling hyphen line (`-\n-\nword`) cannot
/// leave a fresh break behind.
pub fn repair_hyphenation(text: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"-\n([A-Za-z\x{05D0}-\x{05EA}])").expect("hyphenation pattern is valid")
    });

    let mut text = text.to_string();
    while let Cow::Owned(repaired) = re.replace_all(&text, "$1") {
        text = repaired;
    }
    text
}

/// Replace a line break with a space when the sentence clearly continues.
///
/// A break is joined when the previous character does not end a sentence and
/// the next one is a lowercase Latin letter or Hebrew. Scans characters rather
/// than using a regex so consecutive wraps (`a\nb\nc`) all join in one pass.
pub fn join_wrapped_lines(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        let joins = c == '\n'
            && i > 0
            && chars
                .get(i + 1)
                .is_some_and(|&next| continues_sentence(next))
            && !matches!(chars[i - 1], '.' | '!' | '?' | ':' | '\n');
        out.push(if joins { ' ' } else { c });
    }
    out
}

fn continues_sentence(c: char) -> bool {
    c.is_ascii_lowercase() || ('\u{0590}'..='\u{05FF}').contains(&c)
}
