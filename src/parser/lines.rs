//! Line assembly from positioned tokens.
//!
//! Tokens arrive in whatever order the extractor emitted them. They are
//! ordered top-to-bottom, then grouped into lines by baseline proximity.

use unicode_bidi::{bidi_class, BidiClass};

use crate::model::{PositionedToken, RawPage};

/// Options for grouping tokens into lines.
#[derive(Debug, Clone)]
pub struct LineOptions {
    /// Maximum baseline distance (in coordinate units) from the first token of
    /// a line for another token to join it
    pub y_tolerance: f32,

    /// Join predominantly right-to-left lines in descending x order
    pub rtl_reading_order: bool,

    /// Emit an empty line where the gap to the previous line exceeds this
    /// multiple of the page's average line spacing (`None` = never)
    pub paragraph_gap_ratio: Option<f32>,
}

impl LineOptions {
    /// Create line options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the baseline tolerance.
    pub fn with_y_tolerance(mut self, tolerance: f32) -> Self {
        self.y_tolerance = tolerance;
        self
    }

    /// Enable or disable right-to-left token ordering.
    pub fn with_rtl_reading_order(mut self, enabled: bool) -> Self {
        self.rtl_reading_order = enabled;
        self
    }

    /// Mark paragraph gaps larger than `ratio` times the average line spacing.
    pub fn with_paragraph_gaps(mut self, ratio: f32) -> Self {
        self.paragraph_gap_ratio = Some(ratio);
        self
    }
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            y_tolerance: 4.0,
            rtl_reading_order: false,
            paragraph_gap_ratio: None,
        }
    }
}

/// Groups one source page's tokens into ordered lines of text.
#[derive(Debug, Clone, Default)]
pub struct LineAssembler {
    options: LineOptions,
}

impl LineAssembler {
    /// Create an assembler with the given options.
    pub fn new(options: LineOptions) -> Self {
        Self { options }
    }

    /// Assemble a page's tokens into a [`RawPage`].
    pub fn assemble_page(&self, page_number: u32, tokens: &[PositionedToken]) -> RawPage {
        RawPage::new(page_number, self.assemble(tokens))
    }

    /// Assemble tokens into trimmed lines from top to bottom.
    ///
    /// Lines are never empty unless paragraph-gap detection is enabled, in
    /// which case an empty entry marks a paragraph gap.
    pub fn assemble(&self, tokens: &[PositionedToken]) -> Vec<String> {
        let mut sorted: Vec<&PositionedToken> = tokens
            .iter()
            .filter(|t| {
                if t.has_finite_position() {
                    true
                } else {
                    log::warn!("Dropping token with non-finite position: {:?}", t.text);
                    false
                }
            })
            .collect();

        // PDF y grows upwards, so top of page first
        sorted.sort_by(|a, b| b.y.total_cmp(&a.y).then(a.x.total_cmp(&b.x)));

        let mut lines: Vec<(f32, String)> = Vec::new();
        let mut current: Vec<&PositionedToken> = Vec::new();
        let mut reference_y: Option<f32> = None;

        for token in sorted {
            match reference_y {
                Some(y) if (token.y - y).abs() <= self.options.y_tolerance => {
                    current.push(token);
                }
                _ => {
                    if let Some(y) = reference_y {
                        self.push_line(&mut lines, y, std::mem::take(&mut current));
                    }
                    reference_y = Some(token.y);
                    current.push(token);
                }
            }
        }
        if let Some(y) = reference_y {
            self.push_line(&mut lines, y, current);
        }

        match self.options.paragraph_gap_ratio {
            Some(ratio) => mark_paragraph_gaps(lines, ratio),
            None => lines.into_iter().map(|(_, text)| text).collect(),
        }
    }

    fn push_line(&self, lines: &mut Vec<(f32, String)>, y: f32, mut tokens: Vec<&PositionedToken>) {
        if tokens.is_empty() {
            return;
        }

        // Baselines inside the tolerance may differ, so re-sort horizontally
        tokens.sort_by(|a, b| a.x.total_cmp(&b.x));
        if self.options.rtl_reading_order && is_rtl_line(&tokens) {
            tokens.reverse();
        }

        let text = tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let text = text.trim();
        if !text.is_empty() {
            lines.push((y, text.to_string()));
        }
    }
}

/// Insert empty lines where spacing jumps well above the page average.
fn mark_paragraph_gaps(lines: Vec<(f32, String)>, ratio: f32) -> Vec<String> {
    let spacings: Vec<f32> = lines
        .windows(2)
        .map(|w| (w[0].0 - w[1].0).abs())
        .filter(|s| *s > 0.1)
        .collect();
    if spacings.len() < 2 {
        return lines.into_iter().map(|(_, text)| text).collect();
    }
    let avg_spacing = spacings.iter().sum::<f32>() / spacings.len() as f32;

    let mut result = Vec::with_capacity(lines.len());
    let mut prev_y: Option<f32> = None;
    for (y, text) in lines {
        if let Some(prev) = prev_y {
            if (prev - y).abs() > avg_spacing * ratio {
                result.push(String::new());
            }
        }
        prev_y = Some(y);
        result.push(text);
    }
    result
}

/// Whether right-to-left strong characters outnumber left-to-right ones.
fn is_rtl_line(tokens: &[&PositionedToken]) -> bool {
    let mut rtl = 0usize;
    let mut ltr = 0usize;
    for c in tokens.iter().flat_map(|t| t.text.chars()) {
        match bidi_class(c) {
            BidiClass::R | BidiClass::AL => rtl += 1,
            BidiClass::L => ltr += 1,
            _ => {}
        }
    }
    rtl > ltr
}
