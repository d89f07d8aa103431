//! Text measurement: bounds, hit-testing, carets and selections.
//!
//! All measurements share one pass over the text (see [`walk`]),
//! starting from the top-left corner of the first line. Each `\n`
//! moves the pen back to `x = 0` and one line height down.
//!
//! Positions in the text are *ordinals*: indices of decoded `char`s,
//! not byte offsets. A `\n` takes up an ordinal like any other character.

mod caret;
mod hit;
pub mod walk;

use glam::vec2;

use crate::{
    metrics::GlyphMetricsSource,
    rect::Bounds,
    settings::LayoutSettings,
    text::walk::{LineWalker, Step},
};

pub use hit::Hit;

/// Measures text using the glyph metrics of one font.
///
/// Cheap to create; borrows the metric source and settings
/// for the duration of the measurements.
pub struct TextMetrics<'a, M: ?Sized> {
    source: &'a M,
    settings: &'a LayoutSettings,
}

impl<'a, M: ?Sized> Clone for TextMetrics<'a, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, M: ?Sized> Copy for TextMetrics<'a, M> {}

impl<'a, M> TextMetrics<'a, M>
where
    M: GlyphMetricsSource + ?Sized,
{
    pub fn new(source: &'a M, settings: &'a LayoutSettings) -> Self {
        Self { source, settings }
    }

    pub fn source(&self) -> &'a M {
        self.source
    }

    pub fn settings(&self) -> &'a LayoutSettings {
        self.settings
    }

    /// Vertical distance between the tops of two consecutive lines.
    pub fn line_height(&self) -> f32 {
        self.settings
            .line_spacing
            .line_height(&self.source.line_metrics())
    }

    /// Advance of the fallback character, used to size carets
    /// that do not sit on a measurable glyph.
    pub fn fallback_advance(&self) -> f32 {
        self.source
            .glyph(self.settings.fallback_char)
            .map(|metrics| metrics.advance.x)
            .unwrap_or_default()
    }

    /// Starts a walk over `text`.
    pub fn walk<'t>(&self, text: &'t str) -> LineWalker<'t, M>
    where
        'a: 't,
    {
        LineWalker::new(self.source, text, self.line_height())
    }

    /// Number of ordinals in `text`, up to the first NUL.
    pub fn glyph_count(&self, text: &str) -> usize {
        walk::until_nul(text).chars().count()
    }

    pub fn line_count(&self, text: &str) -> usize {
        walk::until_nul(text).matches('\n').count() + 1
    }

    /// Width of the widest line, measured by pen advance.
    pub fn width(&self, text: &str) -> f32 {
        let mut walker = self.walk(text);
        let mut width = 0.0f32;
        for step in &mut walker {
            if let Step::LineBreak { pen, .. } = step {
                width = width.max(pen.x);
            }
        }
        width.max(walker.pen().x)
    }

    /// Computes the box enclosing every visible glyph.
    ///
    /// Horizontally, each glyph spans its quad (`offset` and `size`);
    /// vertically, it spans its whole line. Blank and missing glyphs are skipped,
    /// so an empty or all-whitespace text yields [`Bounds::EMPTY`]. Line breaks
    /// still extend `max.y` to the bottom of the line they open.
    pub fn bounds(&self, text: &str) -> Bounds {
        let line_height = self.line_height();
        let mut bounds = Bounds::EMPTY;

        for step in self.walk(text) {
            match step {
                Step::LineBreak { pen, .. } => {
                    let next_line_bottom = pen.y + 2. * line_height;
                    bounds.max.y = bounds.max.y.max(next_line_bottom);
                }
                Step::Glyph(glyph) => {
                    let metrics = match glyph.metrics {
                        Some(metrics) if !metrics.is_blank() => metrics,
                        _ => continue,
                    };

                    let x0 = glyph.pos.x + metrics.offset.x;
                    let x1 = x0 + metrics.size.x;
                    let y0 = glyph.pos.y;
                    let y1 = y0 + line_height;

                    bounds.include(vec2(x0, y0));
                    bounds.include(vec2(x1, y1));
                }
            }
        }

        bounds
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use ahash::AHashMap;

    use crate::metrics::{GlyphMetrics, GlyphMetricsSource, LineMetrics, MonospaceMetrics};

    /// A monospace font with a kerning table.
    pub struct Kerned {
        inner: MonospaceMetrics,
        pairs: AHashMap<(char, char), f32>,
    }

    impl Kerned {
        pub fn new(advance: f32, line_height: f32) -> Self {
            Self {
                inner: MonospaceMetrics::new(advance, line_height),
                pairs: AHashMap::new(),
            }
        }

        pub fn pair(mut self, previous: char, c: char, kerning: f32) -> Self {
            self.pairs.insert((previous, c), kerning);
            self
        }
    }

    impl GlyphMetricsSource for Kerned {
        fn glyph(&self, c: char) -> Option<GlyphMetrics> {
            self.inner.glyph(c)
        }

        fn kerning(&self, previous: char, c: char) -> f32 {
            self.pairs.get(&(previous, c)).copied().unwrap_or_default()
        }

        fn line_metrics(&self) -> LineMetrics {
            self.inner.line_metrics()
        }
    }
}
