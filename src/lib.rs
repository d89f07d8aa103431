//! Text layout metrics for `dume`.
//!
//! Measures bounding boxes, hit-tests pixel positions and computes
//! caret and selection rectangles for runs of text, given the glyph
//! metrics of a single font. Layout is left-to-right with explicit `\n`
//! line breaks and pairwise kerning.
//!
//! ```
//! use dume_metrics::{LayoutSettings, MonospaceMetrics, TextMetrics};
//! use glam::vec2;
//!
//! let font = MonospaceMetrics::new(10., 20.);
//! let settings = LayoutSettings::default();
//! let metrics = TextMetrics::new(&font, &settings);
//!
//! assert_eq!(metrics.bounds("AB\nCD").max, vec2(20., 40.));
//! assert_eq!(metrics.index_for_position("AB\nCD", vec2(15., 25.)), 4);
//! ```

pub mod backend;
pub mod ffi;
pub mod font;
mod metrics;
mod rect;
mod settings;
pub mod text;

pub use backend::{FontdueMetrics, TtfMetrics};
pub use font::{FontId, FontLibrary, FontQuery, MalformedFont, MissingFont};
pub use metrics::{GlyphMetrics, GlyphMetricsSource, LineMetrics, MonospaceMetrics};
pub use rect::{Bounds, Rect};
pub use settings::{LayoutSettings, LineSpacing};
pub use text::{Hit, TextMetrics};
