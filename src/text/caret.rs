use glam::vec2;

use crate::{metrics::GlyphMetricsSource, rect::Rect};

use super::{
    walk::{self, Step},
    TextMetrics,
};

/// A selected stretch of one line.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Span {
    line: usize,
    rect: Rect,
}

impl<'a, M> TextMetrics<'a, M>
where
    M: GlyphMetricsSource + ?Sized,
{
    /// Computes the caret rectangle for the ordinal `cursor`.
    ///
    /// On a glyph, the caret covers that glyph's advance. At the end of a line,
    /// at the end of the text or on a glyph the font cannot display, it is as wide
    /// as the fallback character. `cursor` is clamped to the end of the text.
    pub fn cursor_rect(&self, text: &str, cursor: usize) -> Rect {
        let line_height = self.line_height();
        let fallback = self.fallback_advance();

        let mut walker = self.walk(text);
        for step in &mut walker {
            if step.index() < cursor {
                continue;
            }

            return match step {
                Step::Glyph(glyph) => {
                    let width = glyph
                        .metrics
                        .map(|metrics| metrics.advance.x)
                        .unwrap_or(fallback);
                    Rect::new(glyph.pos, vec2(width, line_height))
                }
                Step::LineBreak { pen, .. } => Rect::new(pen, vec2(fallback, line_height)),
            };
        }

        let glyph_count = self.glyph_count(text);
        if cursor > glyph_count {
            log::trace!(
                "Clamped cursor {} to the end of a {}-glyph text",
                cursor,
                glyph_count
            );
        }
        Rect::new(walker.pen(), vec2(fallback, line_height))
    }

    /// Computes the highlight for the selection `start..end` on `start`'s line.
    ///
    /// The rectangle stops at `end`, at the end of the line or at the end of the
    /// text, whichever comes first. Returns `None` when there is nothing to draw:
    /// an empty selection, or one covering no glyph on `start`'s line.
    ///
    /// Reversed ranges are accepted, and both ends are clamped to the text.
    pub fn selection_rect(&self, text: &str, start: usize, end: usize) -> Option<Rect> {
        let (start, end) = (start.min(end), start.max(end));
        let start_line = walk::until_nul(text)
            .chars()
            .take(start)
            .filter(|&c| c == '\n')
            .count();

        self.selection_spans(text, start, end)
            .into_iter()
            .next()
            .filter(|span| span.line == start_line)
            .map(|span| span.rect)
    }

    /// Computes one highlight rectangle per line touched by the selection
    /// `start..end`. Lines where no glyph is selected are skipped.
    pub fn selection_rects(&self, text: &str, start: usize, end: usize) -> Vec<Rect> {
        self.selection_spans(text, start, end)
            .into_iter()
            .map(|span| span.rect)
            .collect()
    }

    fn selection_spans(&self, text: &str, start: usize, end: usize) -> Vec<Span> {
        let (start, end) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        if start == end {
            return Vec::new();
        }

        let line_height = self.line_height();
        let mut spans = Vec::new();
        let mut current: Option<Span> = None;

        for step in self.walk(text) {
            if step.index() < start {
                continue;
            }
            if step.index() >= end {
                break;
            }

            let glyph = match step {
                Step::Glyph(glyph) if glyph.advance() > 0. => glyph,
                _ => continue,
            };

            match &mut current {
                Some(span) if span.line == glyph.line => {
                    span.rect.size.x = glyph.right() - span.rect.pos.x;
                }
                _ => {
                    spans.extend(current.take());
                    current = Some(Span {
                        line: glyph.line,
                        rect: Rect::new(glyph.pos, vec2(glyph.advance(), line_height)),
                    });
                }
            }
        }
        spans.extend(current);

        spans
    }
}
