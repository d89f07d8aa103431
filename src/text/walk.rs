//! The line-walking primitive shared by every text measurement.

use std::{iter::Enumerate, str::Chars};

use glam::{vec2, Vec2};

use crate::metrics::{GlyphMetrics, GlyphMetricsSource};

/// A glyph visited by a [`LineWalker`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WalkedGlyph {
    /// Ordinal of the character within the whole text.
    pub index: usize,
    /// Zero-based line the glyph sits on.
    pub line: usize,
    pub c: char,
    /// Pen position the glyph is placed at, with kerning applied.
    /// `y` is the top of the line.
    pub pos: Vec2,
    /// Kerning that was added to the pen before placing this glyph.
    pub kerning: f32,
    /// `None` if the font cannot display the character.
    pub metrics: Option<GlyphMetrics>,
}

impl WalkedGlyph {
    pub fn advance(&self) -> f32 {
        self.metrics.map(|m| m.advance.x).unwrap_or_default()
    }

    /// X coordinate of the pen after this glyph.
    pub fn right(&self) -> f32 {
        self.pos.x + self.advance()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Step {
    Glyph(WalkedGlyph),
    /// An explicit `\n`. Not measured and not kerned.
    LineBreak {
        index: usize,
        /// The line being ended.
        line: usize,
        /// Pen position at the end of that line.
        pen: Vec2,
    },
}

impl Step {
    pub fn index(&self) -> usize {
        match self {
            Step::Glyph(glyph) => glyph.index,
            Step::LineBreak { index, .. } => *index,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Step::Glyph(glyph) => glyph.line,
            Step::LineBreak { line, .. } => *line,
        }
    }
}

/// The part of `text` before the first NUL, which terminates a run.
pub fn until_nul(text: &str) -> &str {
    text.find('\0').map_or(text, |end| &text[..end])
}

/// Walks a text one character at a time, moving a pen
/// from the top-left of the first line.
///
/// Ordinals count decoded `char`s, so multi-byte characters
/// take up exactly one ordinal each. The walk stops at the end
/// of the text or at the first NUL, whichever comes first.
pub struct LineWalker<'a, M: ?Sized> {
    source: &'a M,
    chars: Enumerate<Chars<'a>>,
    line_height: f32,

    pen: Vec2,
    line: usize,
    previous: Option<char>,
}

impl<'a, M> LineWalker<'a, M>
where
    M: GlyphMetricsSource + ?Sized,
{
    pub fn new(source: &'a M, text: &'a str, line_height: f32) -> Self {
        Self {
            source,
            chars: until_nul(text).chars().enumerate(),
            line_height,

            pen: Vec2::ZERO,
            line: 0,
            previous: None,
        }
    }

    /// The current pen position. Once the walker is exhausted,
    /// this is where a glyph appended to the text would go.
    pub fn pen(&self) -> Vec2 {
        self.pen
    }

    pub fn line(&self) -> usize {
        self.line
    }

    fn next_line(&mut self) {
        self.pen = vec2(0., self.pen.y + self.line_height);
        self.line += 1;
        self.previous = None;
    }
}

impl<'a, M> Iterator for LineWalker<'a, M>
where
    M: GlyphMetricsSource + ?Sized,
{
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let (index, c) = self.chars.next()?;

        if c == '\n' {
            let step = Step::LineBreak {
                index,
                line: self.line,
                pen: self.pen,
            };
            self.next_line();
            return Some(step);
        }

        let metrics = self.source.glyph(c);
        let mut kerning = 0.;
        if metrics.is_some() {
            if let Some(previous) = self.previous {
                kerning = self.source.kerning(previous, c);
            }
            self.pen.x += kerning;
        }

        let glyph = WalkedGlyph {
            index,
            line: self.line,
            c,
            pos: self.pen,
            kerning,
            metrics,
        };

        self.pen.x += glyph.advance();
        self.previous = Some(c);

        Some(Step::Glyph(glyph))
    }
}

#[cfg(test)]
mod tests {
    use crate::{metrics::MonospaceMetrics, text::fixtures::Kerned};

    use super::*;

    #[test]
    fn glyphs_and_line_breaks() {
        let metrics = MonospaceMetrics::new(10., 20.);
        let steps: Vec<_> = LineWalker::new(&metrics, "AB\nC", 20.).collect();

        assert_eq!(steps.len(), 4);
        match steps[1] {
            Step::Glyph(glyph) => {
                assert_eq!(glyph.index, 1);
                assert_eq!(glyph.c, 'B');
                assert_eq!(glyph.pos, vec2(10., 0.));
                assert_eq!(glyph.right(), 20.);
            }
            step => panic!("expected a glyph, got {:?}", step),
        }
        assert_eq!(
            steps[2],
            Step::LineBreak {
                index: 2,
                line: 0,
                pen: vec2(20., 0.)
            }
        );
        match steps[3] {
            Step::Glyph(glyph) => {
                assert_eq!(glyph.line, 1);
                assert_eq!(glyph.pos, vec2(0., 20.));
            }
            step => panic!("expected a glyph, got {:?}", step),
        }
    }

    #[test]
    fn pen_after_walk() {
        let metrics = MonospaceMetrics::new(10., 20.);

        let mut walker = LineWalker::new(&metrics, "ABC", 20.);
        walker.by_ref().for_each(drop);
        assert_eq!(walker.pen(), vec2(30., 0.));

        let mut walker = LineWalker::new(&metrics, "A\n", 20.);
        walker.by_ref().for_each(drop);
        assert_eq!(walker.pen(), vec2(0., 20.));
        assert_eq!(walker.line(), 1);
    }

    #[test]
    fn line_count_matches_newlines() {
        let metrics = MonospaceMetrics::new(10., 20.);
        for text in ["", "A", "\n", "A\nB\n\nC", "\n\n\n"] {
            let mut walker = LineWalker::new(&metrics, text, 20.);
            walker.by_ref().for_each(drop);
            assert_eq!(walker.line(), text.matches('\n').count(), "{:?}", text);
        }
    }

    #[test]
    fn multi_byte_characters_take_one_ordinal() {
        let metrics = MonospaceMetrics::new(10., 20.);
        let indices: Vec<_> = LineWalker::new(&metrics, "héllo wörld", 20.)
            .map(|step| step.index())
            .collect();
        assert_eq!(indices, (0..11).collect::<Vec<_>>());

        let last = LineWalker::new(&metrics, "日本語", 20.).last().unwrap();
        match last {
            Step::Glyph(glyph) => {
                assert_eq!(glyph.index, 2);
                assert_eq!(glyph.pos.x, 20.);
            }
            step => panic!("expected a glyph, got {:?}", step),
        }
    }

    #[test]
    fn nul_ends_the_walk() {
        let metrics = MonospaceMetrics::new(10., 20.);

        let mut walker = LineWalker::new(&metrics, "AB\0C\nD", 20.);
        let indices: Vec<_> = walker.by_ref().map(|step| step.index()).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(walker.pen(), vec2(20., 0.));
        assert_eq!(walker.line(), 0);

        assert_eq!(until_nul("\0AB"), "");
        assert_eq!(until_nul("héllo"), "héllo");
    }

    #[test]
    fn missing_glyphs_keep_their_ordinal() {
        let metrics = MonospaceMetrics::new(10., 20.);
        let steps: Vec<_> = LineWalker::new(&metrics, "A\tB", 20.).collect();
        match (steps[1], steps[2]) {
            (Step::Glyph(tab), Step::Glyph(b)) => {
                assert_eq!(tab.metrics, None);
                assert_eq!(tab.advance(), 0.);
                assert_eq!(b.index, 2);
                assert_eq!(b.pos.x, 10.);
            }
            steps => panic!("unexpected steps {:?}", steps),
        }
    }

    #[test]
    fn kerning_applies_within_a_line() {
        let metrics = Kerned::new(10., 20.).pair('A', 'V', -2.);
        let steps: Vec<_> = LineWalker::new(&metrics, "AV\nAV", 20.).collect();

        match steps[1] {
            Step::Glyph(v) => {
                assert_eq!(v.kerning, -2.);
                assert_eq!(v.pos.x, 8.);
                assert_eq!(v.right(), 18.);
            }
            step => panic!("expected a glyph, got {:?}", step),
        }
        // The first glyph after a line break is never kerned.
        match steps[3] {
            Step::Glyph(a) => {
                assert_eq!(a.kerning, 0.);
                assert_eq!(a.pos, vec2(0., 20.));
            }
            step => panic!("expected a glyph, got {:?}", step),
        }
    }
}
