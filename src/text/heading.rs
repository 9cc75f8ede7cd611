//! Heading classification.
//!
//! A paragraph is a heading when any rule in an ordered table matches. The
//! rules are plain predicates so each can be tested on its own and new
//! scripts can be supported by appending rules, without touching pagination.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Maximum length of a title-like paragraph.
const MAX_TITLE_CHARS: usize = 80;

/// Hebrew titles must be shorter than this.
const MAX_HEBREW_TITLE_CHARS: usize = 50;

/// One named heading rule.
#[derive(Clone, Copy)]
pub struct HeadingRule {
    /// Short identifier, used in logs
    pub name: &'static str,
    /// What the rule is looking for
    pub rationale: &'static str,
    /// The test itself
    pub predicate: fn(&str) -> bool,
}

impl HeadingRule {
    /// Apply the rule to paragraph text.
    pub fn matches(&self, text: &str) -> bool {
        (self.predicate)(text)
    }
}

impl fmt::Debug for HeadingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadingRule")
            .field("name", &self.name)
            .finish()
    }
}

/// Rules applied by [`HeadingClassifier::default`], in order.
pub const BUILTIN_RULES: &[HeadingRule] = &[
    HeadingRule {
        name: "chapter-marker",
        rationale: "starts with a chapter or part keyword followed by a numeral",
        predicate: is_chapter_marker,
    },
    HeadingRule {
        name: "latin-title-case",
        rationale: "short, unpunctuated, capitalised Latin line",
        predicate: is_latin_title,
    },
    HeadingRule {
        name: "hebrew-short-line",
        rationale: "short, unpunctuated line in Hebrew script",
        predicate: is_hebrew_title,
    },
];

/// Decides whether a paragraph is a structural heading.
#[derive(Debug, Clone)]
pub struct HeadingClassifier {
    rules: Vec<HeadingRule>,
}

impl HeadingClassifier {
    /// A classifier with no rules; nothing is a heading.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule.
    pub fn with_rule(mut self, rule: HeadingRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The rules, in evaluation order.
    pub fn rules(&self) -> &[HeadingRule] {
        &self.rules
    }

    /// The first rule that classifies `text` as a heading.
    pub fn matching_rule(&self, text: &str) -> Option<&HeadingRule> {
        self.rules.iter().find(|rule| rule.matches(text))
    }

    /// Check if `text` is a heading.
    pub fn is_heading(&self, text: &str) -> bool {
        match self.matching_rule(text) {
            Some(rule) => {
                log::trace!("Heading ({}): {:?}", rule.name, text);
                true
            }
            None => false,
        }
    }
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self {
            rules: BUILTIN_RULES.to_vec(),
        }
    }
}

/// `Chapter 3`, `PART IV:`, `פרק א`, `חלק 2` and the like.
pub fn is_chapter_marker(text: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^(?:chapter|פרק|פרק\s+\w+|חלק|part)\s+[0-9ivxlcdm\x{05D0}-\x{05EA}]+[\s:.\-–]?",
        )
        .expect("chapter pattern is valid")
    })
    .is_match(text)
}

/// Short enough and not ending like a sentence or clause.
pub fn is_title_like(text: &str) -> bool {
    text.chars().count() <= MAX_TITLE_CHARS
        && !text.ends_with(['.', '!', '?', ',', ';'])
}

fn is_latin_title(text: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    is_title_like(text)
        && RE
            .get_or_init(|| {
                Regex::new(r"^[A-Z][A-Za-z\s\-:]+$").expect("title case pattern is valid")
            })
            .is_match(text)
}

fn is_hebrew_title(text: &str) -> bool {
    is_title_like(text)
        && text.chars().count() < MAX_HEBREW_TITLE_CHARS
        && text.chars().any(|c| ('\u{05D0}'..='\u{05EA}').contains(&c))
}

/// Check a paragraph against the built-in rules.
pub fn is_heading(text: &str) -> bool {
    BUILTIN_RULES.iter().any(|rule| rule.matches(text))
}
