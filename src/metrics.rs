//! The glyph-metric oracle consumed by text measurement.
//!
//! A font engine is plugged in by implementing [`GlyphMetricsSource`];
//! see the [`backend`](crate::backend) module for the bundled adapters.

use glam::{vec2, Vec2};

/// Measurements of a single glyph at a fixed font size, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct GlyphMetrics {
    /// How far to move the pen after placing this glyph.
    /// Only `x` is used for horizontal layout.
    pub advance: Vec2,
    /// Offset from the pen position to the top-left corner of the glyph quad.
    /// Y points down, relative to the top of the line.
    pub offset: Vec2,
    /// Width and height of the glyph quad. Zero for blank glyphs like spaces.
    pub size: Vec2,
}

impl GlyphMetrics {
    /// Whether the glyph covers any area.
    pub fn is_blank(&self) -> bool {
        self.size.x <= 0. || self.size.y <= 0.
    }
}

/// Vertical metrics of a font at a fixed size, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[repr(C)]
pub struct LineMetrics {
    /// Distance from the baseline to the top of the line. Positive.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line. Usually negative.
    pub descent: f32,
    /// Extra space the font suggests between two lines.
    pub line_gap: f32,
}

/// Supplies per-glyph metrics for a font at a given size.
///
/// Implementations are read-only lookups: text measurement only ever
/// borrows a source for the duration of a call.
pub trait GlyphMetricsSource {
    /// Measures the glyph for `c`. Returns `None` if the font has
    /// no visual representation for the character.
    fn glyph(&self, c: char) -> Option<GlyphMetrics>;

    /// Kerning adjustment to apply between `previous` and `c`,
    /// added to the pen before `c` is placed.
    fn kerning(&self, _previous: char, _c: char) -> f32 {
        0.
    }

    fn line_metrics(&self) -> LineMetrics;
}

impl<T> GlyphMetricsSource for &T
where
    T: GlyphMetricsSource + ?Sized,
{
    fn glyph(&self, c: char) -> Option<GlyphMetrics> {
        (**self).glyph(c)
    }

    fn kerning(&self, previous: char, c: char) -> f32 {
        (**self).kerning(previous, c)
    }

    fn line_metrics(&self) -> LineMetrics {
        (**self).line_metrics()
    }
}

/// A fixed-advance font, where every visible character fills one cell.
///
/// Useful for terminal-style grids and as a predictable source in tests.
/// Control characters have no glyph; whitespace advances the pen
/// but has no extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MonospaceMetrics {
    advance: f32,
    line_height: f32,
}

impl MonospaceMetrics {
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }

    pub fn advance(&self) -> f32 {
        self.advance
    }
}

impl GlyphMetricsSource for MonospaceMetrics {
    fn glyph(&self, c: char) -> Option<GlyphMetrics> {
        if c.is_control() {
            return None;
        }

        let size = if c.is_whitespace() {
            Vec2::ZERO
        } else {
            vec2(self.advance, self.line_height)
        };
        Some(GlyphMetrics {
            advance: vec2(self.advance, 0.),
            offset: Vec2::ZERO,
            size,
        })
    }

    fn line_metrics(&self) -> LineMetrics {
        LineMetrics {
            ascent: self.line_height,
            descent: 0.,
            line_gap: 0.,
        }
    }
}
