//! Font-backed text measurement.
//!
//! `FontMeasurer` resolves a family and style to font data, shapes the text
//! with rustybuzz and sums the glyph advances. Resolution order:
//! - fonts registered with `add_font` (and anything already resolved)
//! - the fontdb database (feature: `system-fonts`), filled by
//!   `with_system_fonts` or `add_font_dir`
//!
//! There is no fallback face. An unknown family is an error, since a
//! substitute font would produce widths for text that will never be printed
//! that way.

use rustybuzz::{Feature, UnicodeBuffer};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};
use tablefit_style::FontStyle;
use tablefit_traits::{MeasureError, TextMeasurer};
use ttf_parser::Tag;

/// Owned font bytes plus the face index inside them.
pub struct FontInstance {
    pub data: Arc<Vec<u8>>,
    pub index: u32,
}

impl std::fmt::Debug for FontInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontInstance")
            .field("data_len", &self.data.len())
            .field("index", &self.index)
            .finish()
    }
}

impl FontInstance {
    pub fn new(data: Arc<Vec<u8>>, index: u32) -> Self {
        Self { data, index }
    }

    /// Creates a lightweight Face view over the font data.
    pub fn as_face(&self) -> Option<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(&self.data, self.index)
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct FontCacheKey {
    family: String,
    style: u8,
}

impl FontCacheKey {
    fn new(family: &str, style: FontStyle) -> Self {
        Self {
            family: family.trim().to_lowercase(),
            style: style.as_u8(),
        }
    }
}

fn shaping_features() -> &'static [Feature] {
    static FEATURES: OnceLock<Vec<Feature>> = OnceLock::new();
    FEATURES.get_or_init(|| {
        vec![
            Feature::new(Tag::from_bytes(b"liga"), 1, ..),
            Feature::new(Tag::from_bytes(b"kern"), 1, ..),
        ]
    })
}

fn lock_poisoned(what: &str) -> MeasureError {
    MeasureError::Failed(format!("{what} lock poisoned"))
}

/// Measures text by shaping it with real font data.
pub struct FontMeasurer {
    #[cfg(feature = "system-fonts")]
    db: RwLock<fontdb::Database>,
    cache: RwLock<HashMap<FontCacheKey, Arc<FontInstance>>>,
}

impl std::fmt::Debug for FontMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached = self.cache.read().map(|c| c.len()).unwrap_or(0);
        f.debug_struct("FontMeasurer")
            .field("cached_fonts", &cached)
            .finish()
    }
}

impl Default for FontMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl FontMeasurer {
    /// Creates a measurer with no fonts.
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "system-fonts")]
            db: RwLock::new(fontdb::Database::new()),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Loads the fonts installed on this machine.
    #[cfg(feature = "system-fonts")]
    pub fn with_system_fonts(self) -> Self {
        match self.db.write() {
            Ok(mut db) => {
                db.load_system_fonts();
                log::debug!("Loaded {} system font faces", db.len());
            }
            Err(_) => log::warn!("Font database lock poisoned; system fonts were not loaded"),
        }
        self
    }

    /// Loads every font file found under `dir`.
    #[cfg(feature = "system-fonts")]
    pub fn add_font_dir(&self, dir: impl AsRef<std::path::Path>) -> Result<(), MeasureError> {
        let mut db = self.db.write().map_err(|_| lock_poisoned("font database"))?;
        let before = db.len();
        db.load_fonts_dir(dir.as_ref());
        log::debug!(
            "Loaded {} font faces from {}",
            db.len() - before,
            dir.as_ref().display()
        );
        Ok(())
    }

    /// Registers font bytes under an explicit family and style.
    ///
    /// Registered fonts take precedence over database lookups.
    pub fn add_font(
        &self,
        family: &str,
        style: FontStyle,
        data: Vec<u8>,
    ) -> Result<(), MeasureError> {
        ttf_parser::Face::parse(&data, 0).map_err(|e| MeasureError::InvalidFontData {
            family: family.to_string(),
            message: e.to_string(),
        })?;
        let instance = Arc::new(FontInstance::new(Arc::new(data), 0));
        self.cache
            .write()
            .map_err(|_| lock_poisoned("font cache"))?
            .insert(FontCacheKey::new(family, style), instance);
        Ok(())
    }

    fn resolve(&self, family: &str, style: FontStyle) -> Result<Arc<FontInstance>, MeasureError> {
        let key = FontCacheKey::new(family, style);
        if let Some(font) = self
            .cache
            .read()
            .map_err(|_| lock_poisoned("font cache"))?
            .get(&key)
        {
            return Ok(font.clone());
        }

        let font = self
            .query_database(family, style)?
            .ok_or_else(|| MeasureError::FontNotFound {
                family: family.to_string(),
                style,
            })?;
        log::debug!("Resolved font '{}' ({:?})", family, style);
        self.cache
            .write()
            .map_err(|_| lock_poisoned("font cache"))?
            .insert(key, font.clone());
        Ok(font)
    }

    #[cfg(feature = "system-fonts")]
    fn query_database(
        &self,
        family: &str,
        style: FontStyle,
    ) -> Result<Option<Arc<FontInstance>>, MeasureError> {
        let db = self.db.read().map_err(|_| lock_poisoned("font database"))?;
        let name = family.trim();
        let families = [match name.to_lowercase().as_str() {
            "serif" => fontdb::Family::Serif,
            "sans-serif" => fontdb::Family::SansSerif,
            "monospace" => fontdb::Family::Monospace,
            _ => fontdb::Family::Name(name),
        }];
        let query = fontdb::Query {
            families: &families,
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: match style {
                FontStyle::Normal => fontdb::Style::Normal,
                FontStyle::Italic => fontdb::Style::Italic,
                FontStyle::Oblique => fontdb::Style::Oblique,
            },
        };
        Ok(db.query(&query).and_then(|id| {
            db.with_face_data(id, |data, index| {
                Arc::new(FontInstance::new(Arc::new(data.to_vec()), index))
            })
        }))
    }

    #[cfg(not(feature = "system-fonts"))]
    fn query_database(
        &self,
        _family: &str,
        _style: FontStyle,
    ) -> Result<Option<Arc<FontInstance>>, MeasureError> {
        Ok(None)
    }
}

impl TextMeasurer for FontMeasurer {
    fn measure_width(
        &self,
        text: &str,
        font_family: &str,
        font_style: FontStyle,
        font_size: f64,
    ) -> Result<f64, MeasureError> {
        let font = self.resolve(font_family, font_style)?;
        let face = font.as_face().ok_or_else(|| MeasureError::InvalidFontData {
            family: font_family.to_string(),
            message: "face could not be opened for shaping".to_string(),
        })?;

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        let glyphs = rustybuzz::shape(&face, shaping_features(), buffer);
        let advance: i64 = glyphs
            .glyph_positions()
            .iter()
            .map(|p| i64::from(p.x_advance))
            .sum();

        let units_per_em = f64::from(face.units_per_em());
        Ok(advance as f64 * font_size / units_per_em)
    }

    fn name(&self) -> &'static str {
        "font"
    }
}
