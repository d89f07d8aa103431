use serde::{Deserialize, Serialize};

use crate::metrics::LineMetrics;

/// How the distance between two baselines is derived from a font's
/// [`LineMetrics`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSpacing {
    /// `ascent - descent`. The font's line gap is dropped.
    Compact,
    /// `ascent - descent + line_gap`.
    Spacious,
}

impl Default for LineSpacing {
    fn default() -> Self {
        LineSpacing::Compact
    }
}

impl LineSpacing {
    pub fn line_height(self, metrics: &LineMetrics) -> f32 {
        let height = metrics.ascent - metrics.descent;
        match self {
            LineSpacing::Compact => height,
            LineSpacing::Spacious => height + metrics.line_gap,
        }
    }
}

/// Settings shared by all text measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub line_spacing: LineSpacing,
    /// Character whose advance sizes the caret when it does not sit on
    /// a measurable glyph, e.g. at the end of the text.
    pub fallback_char: char,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            line_spacing: LineSpacing::default(),
            fallback_char: '8',
        }
    }
}

impl LayoutSettings {
    pub fn line_spacing(mut self, line_spacing: LineSpacing) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn fallback_char(mut self, c: char) -> Self {
        self.fallback_char = c;
        self
    }
}
