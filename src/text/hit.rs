use glam::Vec2;

use crate::metrics::GlyphMetricsSource;

use super::{walk::Step, TextMetrics};

/// The result of mapping a pixel position to a place in the text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Hit {
    /// Ordinal within the whole text, in `0..=glyph_count`.
    pub index: usize,
    /// The line that was hit.
    pub line: usize,
    /// Ordinal within `line`.
    pub column: usize,
}

impl<'a, M> TextMetrics<'a, M>
where
    M: GlyphMetricsSource + ?Sized,
{
    /// Finds the ordinal under `pos`, relative to the top-left of the text.
    ///
    /// The line is picked by `pos.y`. On that line, the first glyph whose
    /// right edge lies strictly past `pos.x` is hit; if there is none, the hit
    /// lands just after the line's last glyph. Positions below the last line
    /// hit the end of the text.
    pub fn hit_test(&self, text: &str, pos: Vec2) -> Hit {
        let line_height = self.line_height();
        let target_line = if pos.y > 0. && line_height > 0. {
            (pos.y / line_height).floor() as usize
        } else {
            0
        };

        let mut line_start = 0;
        let mut line = 0;
        let mut end = 0;

        for step in self.walk(text) {
            end = step.index() + 1;
            match step {
                Step::LineBreak { index, line: ended, .. } => {
                    if ended == target_line {
                        return Hit {
                            index,
                            line: ended,
                            column: index - line_start,
                        };
                    }
                    line_start = index + 1;
                    line = ended + 1;
                }
                Step::Glyph(glyph) => {
                    if glyph.line < target_line {
                        continue;
                    }
                    if pos.x <= 0. || glyph.right() > pos.x {
                        return Hit {
                            index: glyph.index,
                            line: glyph.line,
                            column: glyph.index - line_start,
                        };
                    }
                }
            }
        }

        Hit {
            index: end,
            line,
            column: end - line_start,
        }
    }

    /// Shorthand for the global ordinal of [`hit_test`](Self::hit_test).
    pub fn index_for_position(&self, text: &str, pos: Vec2) -> usize {
        self.hit_test(text, pos).index
    }
}

#[cfg(test)]
mod tests {
    use glam::vec2;

    use crate::{metrics::MonospaceMetrics, settings::LayoutSettings, text::fixtures::Kerned};

    use super::*;

    fn hit(text: &str, x: f32, y: f32) -> Hit {
        let metrics = MonospaceMetrics::new(10., 20.);
        let settings = LayoutSettings::default();
        TextMetrics::new(&metrics, &settings).hit_test(text, vec2(x, y))
    }

    #[test]
    fn first_line() {
        assert_eq!(
            hit("AB\nCD", 15., 5.),
            Hit {
                index: 1,
                line: 0,
                column: 1
            }
        );
        // Exactly on a right edge belongs to the next glyph.
        assert_eq!(hit("AB\nCD", 10., 5.).index, 1);
        assert_eq!(hit("AB\nCD", 9.9, 5.).index, 0);
    }

    #[test]
    fn second_line() {
        assert_eq!(
            hit("AB\nCD", 15., 25.),
            Hit {
                index: 4,
                line: 1,
                column: 1
            }
        );
        // Past the end of the line: just after its last glyph.
        assert_eq!(
            hit("AB\nCD", 25., 25.),
            Hit {
                index: 5,
                line: 1,
                column: 2
            }
        );
        assert_eq!(
            hit("AB\nCD", 25., 5.),
            Hit {
                index: 2,
                line: 0,
                column: 2
            }
        );
    }

    #[test]
    fn start_of_line() {
        assert_eq!(hit("AB\nCD", 0., 5.).index, 0);
        assert_eq!(hit("AB\nCD", -50., 5.).index, 0);
        assert_eq!(hit("AB\nCD", 0., 25.).index, 3);
        assert_eq!(hit("AB\nCD", 0., -10.).index, 0);
    }

    #[test]
    fn below_the_last_line() {
        assert_eq!(
            hit("AB\nCD", 0., 500.),
            Hit {
                index: 5,
                line: 1,
                column: 2
            }
        );
        assert_eq!(
            hit("AB\n", 5., 100.),
            Hit {
                index: 3,
                line: 1,
                column: 0
            }
        );
    }

    #[test]
    fn empty_lines() {
        assert_eq!(
            hit("A\n\nB", 30., 25.),
            Hit {
                index: 2,
                line: 1,
                column: 0
            }
        );
        assert_eq!(hit("", 30., 25.), Hit::default());
        assert_eq!(hit("", 0., 0.), Hit::default());
    }

    #[test]
    fn ordinals_not_bytes() {
        assert_eq!(hit("héllo", 25., 5.).index, 2);
        assert_eq!(hit("日本語\nabc", 15., 25.).index, 5);
    }

    #[test]
    fn round_trip_first_advance() {
        let metrics = MonospaceMetrics::new(7.5, 20.);
        let settings = LayoutSettings::default();
        let text_metrics = TextMetrics::new(&metrics, &settings);
        let advance = metrics.advance();
        assert_eq!(text_metrics.index_for_position("AB", vec2(advance, 0.)), 1);
    }

    #[test]
    fn infinitely_far_right_hits_line_end() {
        let cases = [("ABC", 0., 3), ("A\nBCDE\nF", 30., 4), ("\n", 0., 0)];
        for (text, y, expected_column) in cases {
            let hit = hit(text, f32::INFINITY, y);
            assert_eq!(hit.column, expected_column, "{:?}", text);
        }
    }

    #[test]
    fn kerning_shifts_edges() {
        let metrics = Kerned::new(10., 20.).pair('A', 'V', -4.);
        let settings = LayoutSettings::default();
        let text_metrics = TextMetrics::new(&metrics, &settings);
        // 'V' spans 6..16 once kerned.
        assert_eq!(text_metrics.index_for_position("AVA", vec2(15., 0.)), 1);
        assert_eq!(text_metrics.index_for_position("AVA", vec2(16., 0.)), 2);
    }

    #[test]
    fn monotonic_along_a_line() {
        let metrics = MonospaceMetrics::new(9., 18.);
        let settings = LayoutSettings::default();
        let text_metrics = TextMetrics::new(&metrics, &settings);
        let text = "The quick brown fox\njumps over\nthe lazy dog";
        let rng = fastrand::Rng::with_seed(7);

        for _ in 0..500 {
            let y = rng.f32() * 80.;
            let a = rng.f32() * 200. - 10.;
            let b = rng.f32() * 200. - 10.;
            let (x1, x2) = if a < b { (a, b) } else { (b, a) };

            let first = text_metrics.hit_test(text, vec2(x1, y));
            let second = text_metrics.hit_test(text, vec2(x2, y));
            assert_eq!(first.line, second.line);
            assert!(first.index <= second.index, "{} > {}", x1, x2);
            assert!(second.index <= text_metrics.glyph_count(text));
        }
    }
}
