use fontdue::Font;
use glam::vec2;

use crate::metrics::{GlyphMetrics, GlyphMetricsSource, LineMetrics};

/// Measures glyphs of a `fontdue` font at a fixed pixel size.
#[derive(Copy, Clone)]
pub struct FontdueMetrics<'a> {
    font: &'a Font,
    size: f32,
    line: LineMetrics,
}

impl<'a> FontdueMetrics<'a> {
    pub fn new(font: &'a Font, size: f32) -> Self {
        let line = match font.horizontal_line_metrics(size) {
            Some(metrics) => LineMetrics {
                ascent: metrics.ascent,
                descent: metrics.descent,
                line_gap: metrics.line_gap,
            },
            None => {
                log::warn!("Font has no horizontal line metrics; using its em size");
                LineMetrics {
                    ascent: size,
                    descent: 0.,
                    line_gap: 0.,
                }
            }
        };

        Self { font, size, line }
    }

    pub fn font(&self) -> &'a Font {
        self.font
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

impl GlyphMetricsSource for FontdueMetrics<'_> {
    fn glyph(&self, c: char) -> Option<GlyphMetrics> {
        // fontdue substitutes glyph 0 for missing characters.
        if self.font.lookup_glyph_index(c) == 0 {
            return None;
        }

        let metrics = self.font.metrics(c, self.size);
        let bounds = metrics.bounds;
        // Outline bounds are relative to the baseline with y pointing up.
        let top = bounds.ymin + bounds.height;
        Some(GlyphMetrics {
            advance: vec2(metrics.advance_width, metrics.advance_height),
            offset: vec2(bounds.xmin, self.line.ascent - top),
            size: vec2(bounds.width, bounds.height),
        })
    }

    fn kerning(&self, previous: char, c: char) -> f32 {
        self.font
            .horizontal_kern(previous, c, self.size)
            .unwrap_or_default()
    }

    fn line_metrics(&self) -> LineMetrics {
        self.line
    }
}
