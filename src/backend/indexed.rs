use glam::vec2;
use ttf_parser::{Face, GlyphId};

use crate::{
    font::MalformedFont,
    metrics::{GlyphMetrics, GlyphMetricsSource, LineMetrics},
};

/// Measures glyphs by looking up glyph IDs in a parsed
/// `ttf-parser` face, scaled to a fixed pixel size.
#[derive(Clone)]
pub struct TtfMetrics<'a> {
    face: Face<'a>,
    size: f32,
    scale: f32,
}

impl<'a> TtfMetrics<'a> {
    pub fn new(face: Face<'a>, size: f32) -> Result<Self, MalformedFont> {
        let units_per_em = face.units_per_em().ok_or(MalformedFont)?;
        Ok(Self {
            face,
            size,
            scale: size / f32::from(units_per_em),
        })
    }

    /// Parses the first face in `data`.
    pub fn from_data(data: &'a [u8], size: f32) -> Result<Self, MalformedFont> {
        let face = Face::from_slice(data, 0).map_err(|e| {
            log::debug!("ttf-parser rejected font: {}", e);
            MalformedFont
        })?;
        Self::new(face, size)
    }

    pub fn face(&self) -> &Face<'a> {
        &self.face
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    fn kerning_units(&self, left: GlyphId, right: GlyphId) -> Option<i16> {
        self.face
            .kerning_subtables()
            .filter(|subtable| {
                subtable.is_horizontal() && !subtable.is_variable() && !subtable.has_state_machine()
            })
            .find_map(|subtable| subtable.glyphs_kerning(left, right))
    }
}

impl GlyphMetricsSource for TtfMetrics<'_> {
    fn glyph(&self, c: char) -> Option<GlyphMetrics> {
        let id = self.face.glyph_index(c)?;
        let advance = self.face.glyph_hor_advance(id).unwrap_or_default();
        let advance = vec2(f32::from(advance) * self.scale, 0.);

        let metrics = match self.face.glyph_bounding_box(id) {
            Some(bbox) => {
                let ascent = f32::from(self.face.ascender());
                GlyphMetrics {
                    advance,
                    offset: vec2(
                        f32::from(bbox.x_min),
                        ascent - f32::from(bbox.y_max),
                    ) * self.scale,
                    size: vec2(f32::from(bbox.width()), f32::from(bbox.height())) * self.scale,
                }
            }
            None => GlyphMetrics {
                advance,
                ..Default::default()
            },
        };
        Some(metrics)
    }

    fn kerning(&self, previous: char, c: char) -> f32 {
        let ids = self.face.glyph_index(previous).zip(self.face.glyph_index(c));
        ids.and_then(|(left, right)| self.kerning_units(left, right))
            .map(|units| f32::from(units) * self.scale)
            .unwrap_or_default()
    }

    fn line_metrics(&self) -> LineMetrics {
        LineMetrics {
            ascent: f32::from(self.face.ascender()) * self.scale,
            descent: f32::from(self.face.descender()) * self.scale,
            line_gap: f32::from(self.face.line_gap()) * self.scale,
        }
    }
}
