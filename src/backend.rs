//! [`GlyphMetricsSource`](crate::GlyphMetricsSource) implementations
//! backed by real font engines.
//!
//! * [`FontdueMetrics`] measures characters directly through `fontdue`.
//! * [`TtfMetrics`] maps characters to glyph IDs and reads the
//!   font tables through `ttf-parser`.
//!
//! Both report the same advances and line metrics for a given font;
//! they differ in how much state they keep around and which
//! kerning tables they understand.

mod direct;
mod indexed;

pub use direct::FontdueMetrics;
pub use indexed::TtfMetrics;

#[cfg(test)]
pub(crate) const TEST_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
