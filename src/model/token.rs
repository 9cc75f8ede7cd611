//! Positioned text tokens as delivered by the extraction collaborator.

use serde::{Deserialize, Serialize};

/// An atomic text run with its baseline position on a source page.
///
/// Coordinates follow PDF conventions: `y` grows towards the top of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedToken {
    /// The text content
    pub text: String,
    /// X position (left edge)
    pub x: f32,
    /// Y position (baseline)
    pub y: f32,
}

impl PositionedToken {
    /// Create a new token.
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }

    /// Whether both coordinates are usable for ordering.
    pub fn has_finite_position(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
