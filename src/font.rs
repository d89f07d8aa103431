//! Font loading and queries.
//!
//! Font discovery and matching is handled by `fontdb`;
//! faces are parsed with `fontdue` on first use.

use std::{collections::hash_map::Entry, path::Path};

use ahash::AHashMap;
use fontdb::{Family, Stretch};
use fontdue::{Font, FontSettings};
use serde::{Deserialize, Serialize};

use crate::backend::FontdueMetrics;

/// A font weight, indicating how dark it appears.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Weight {
    Thin,
    ExtraLight,
    Light,
    Normal,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl Default for Weight {
    fn default() -> Self {
        Self::Normal
    }
}

impl From<Weight> for fontdb::Weight {
    fn from(w: Weight) -> Self {
        use fontdb::Weight as W;
        match w {
            Weight::Thin => W::THIN,
            Weight::ExtraLight => W::EXTRA_LIGHT,
            Weight::Light => W::LIGHT,
            Weight::Normal => W::NORMAL,
            Weight::Medium => W::MEDIUM,
            Weight::SemiBold => W::SEMIBOLD,
            Weight::Bold => W::BOLD,
            Weight::ExtraBold => W::EXTRA_BOLD,
            Weight::Black => W::BLACK,
        }
    }
}

/// Font style: normal or italic. We do not support
/// oblique fonts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    Normal,
    Italic,
}

impl Default for Style {
    fn default() -> Self {
        Self::Normal
    }
}

impl From<Style> for fontdb::Style {
    fn from(s: Style) -> Self {
        match s {
            Style::Normal => fontdb::Style::Normal,
            Style::Italic => fontdb::Style::Italic,
        }
    }
}

/// A font query. Specifies which fonts can
/// be used for measuring text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontQuery {
    /// The font family to use. If `None`,
    /// the library's default family is used.
    pub family: Option<String>,
    pub style: Style,
    pub weight: Weight,
}

impl FontQuery {
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    pub fn family(mut self, family: &str) -> Self {
        self.family = Some(family.into());
        self
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to parse font as TTF/OTF font data")]
pub struct MalformedFont;

#[derive(Debug, thiserror::Error)]
#[error("no font satisfied the query {0:#?}")]
pub struct MissingFont(pub FontQuery);

#[derive(Debug, thiserror::Error)]
pub enum LoadFontError {
    #[error("failed to read font file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Malformed(#[from] MalformedFont),
}

/// Unique ID of a font face in a `FontLibrary`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontId(fontdb::ID);

/// The fonts available for measurement.
pub struct FontLibrary {
    db: fontdb::Database,
    fonts: AHashMap<FontId, Font>,
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl FontLibrary {
    pub fn new() -> Self {
        Self {
            db: fontdb::Database::new(),
            fonts: AHashMap::new(),
        }
    }

    pub fn load_system_fonts(&mut self) {
        let before = self.db.len();
        self.db.load_system_fonts();
        log::info!("Loaded {} system font faces", self.db.len() - before);
    }

    /// Adds every face contained in `data`, returning their IDs.
    pub fn load_font_data(&mut self, data: impl Into<Vec<u8>>) -> Result<Vec<FontId>, MalformedFont> {
        let before = self.db.len();
        self.db.load_font_data(data.into());
        if self.db.len() == before {
            return Err(MalformedFont);
        }

        let faces = &self.db.faces()[before..];
        for face in faces {
            log::info!("Loaded font '{}'", face.family);
        }
        Ok(faces.iter().map(|face| FontId(face.id)).collect())
    }

    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> Result<Vec<FontId>, LoadFontError> {
        let data = std::fs::read(path)?;
        Ok(self.load_font_data(data)?)
    }

    /// Sets the family used by queries that do not name one.
    pub fn set_default_family(&mut self, family: impl Into<String>) {
        self.db.set_sans_serif_family(family);
    }

    /// Queries for a font based on parameters.
    pub fn query(&self, query: &FontQuery) -> Result<FontId, MissingFont> {
        let families = [match &query.family {
            Some(family) => Family::Name(family),
            None => Family::SansSerif,
        }];
        let db_query = fontdb::Query {
            families: &families,
            weight: query.weight.into(),
            stretch: Stretch::default(),
            style: query.style.into(),
        };

        self.db
            .query(&db_query)
            .map(FontId)
            .ok_or_else(|| MissingFont(query.clone()))
    }

    pub fn family_name(&self, id: FontId) -> Option<&str> {
        self.db.face(id.0).map(|face| face.family.as_str())
    }

    /// Gets the parsed font for `id`, parsing it on first use.
    pub fn font(&mut self, id: FontId) -> Result<&Font, MalformedFont> {
        match self.fonts.entry(id) {
            Entry::Occupied(entry) => Ok(&*entry.into_mut()),
            Entry::Vacant(entry) => {
                let font = self
                    .db
                    .with_face_data(id.0, |data, index| {
                        let settings = FontSettings {
                            collection_index: index,
                            ..Default::default()
                        };
                        Font::from_bytes(data, settings)
                    })
                    .ok_or(MalformedFont)?
                    .map_err(|e| {
                        log::error!("Failed to parse font face: {}", e);
                        MalformedFont
                    })?;
                Ok(&*entry.insert(font))
            }
        }
    }

    /// Gets the glyph metrics of `id` at `size` pixels per em.
    pub fn metrics(&mut self, id: FontId, size: f32) -> Result<FontdueMetrics, MalformedFont> {
        let font = self.font(id)?;
        Ok(FontdueMetrics::new(font, size))
    }
}
