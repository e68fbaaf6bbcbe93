use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    assets::bitmap_font,
    foundation::core::Rgb8,
    foundation::error::{PromoError, PromoResult},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl TextBrushRgba8 {
    pub fn opaque(c: Rgb8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: 255,
        }
    }
}

/// Where to look for the title/subtitle font.
///
/// Candidate files are tried in order, then `family` is looked up in the system font database.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FontSource {
    pub paths: Vec<PathBuf>,
    pub family: Option<String>,
}

impl Default for FontSource {
    fn default() -> Self {
        Self {
            paths: [
                "/System/Library/Fonts/Helvetica.ttc",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/TTF/DejaVuSans.ttf",
                "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
                "C:\\Windows\\Fonts\\arial.ttf",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            family: Some("Helvetica".to_string()),
        }
    }
}

impl FontSource {
    /// A source that never resolves; always yields the built-in face.
    pub fn none() -> Self {
        Self {
            paths: Vec::new(),
            family: None,
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            paths: vec![path.into()],
            family: None,
        }
    }
}

/// Scalable font loaded from a file or the system font database.
///
/// Owns its Parley contexts, so shaping is deterministic for the lifetime of the value.
pub struct ResolvedFont {
    font_bytes: Arc<Vec<u8>>,
    index: u32,
    family: String,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    font_data: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedFont")
            .field("family", &self.family)
            .field("index", &self.index)
            .field("font_bytes_len", &self.font_bytes.len())
            .finish()
    }
}

impl ResolvedFont {
    /// Register raw font bytes (`index` selects the face inside a collection).
    pub fn from_bytes(font_bytes: Vec<u8>, index: u32) -> PromoResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        // Collections register one family per face; pick the family owning `index`.
        let family_id = families
            .iter()
            .find(|(_, fonts)| fonts.iter().any(|f| f.index() == index))
            .or_else(|| families.first())
            .map(|(id, _)| *id)
            .ok_or_else(|| {
                PromoError::font_resolution("no font families registered from font bytes")
            })?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PromoError::font_resolution("registered font family has no name"))?
            .to_string();

        let font_data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes.clone()),
            index,
        );
        Ok(Self {
            font_bytes: Arc::new(font_bytes),
            index,
            family,
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            font_data,
        })
    }

    pub fn from_path(path: &Path) -> PromoResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            PromoError::font_resolution(format!("read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(bytes, 0)
    }

    /// Look up `family` among the installed system fonts.
    pub fn from_system_family(family: &str) -> PromoResult<Self> {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();

        let families = [usvg::fontdb::Family::Name(family)];
        let query = usvg::fontdb::Query {
            families: &families,
            ..usvg::fontdb::Query::default()
        };
        let id = db.query(&query).ok_or_else(|| {
            PromoError::font_resolution(format!("no system font matches family '{family}'"))
        })?;
        let (bytes, index) = db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| {
                PromoError::font_resolution(format!("system font '{family}' has no face data"))
            })?;
        Self::from_bytes(bytes, index)
    }

    /// Try every candidate in `source`, in order.
    pub fn resolve(source: &FontSource) -> PromoResult<Self> {
        for path in &source.paths {
            match Self::from_path(path) {
                Ok(font) => return Ok(font),
                Err(err) => tracing::debug!(path = %path.display(), error = %err, "skipping font candidate"),
            }
        }
        if let Some(family) = source.family.as_deref() {
            return Self::from_system_family(family);
        }
        Err(PromoError::font_resolution(
            "no font candidate could be loaded",
        ))
    }

    pub fn family_name(&self) -> &str {
        &self.family
    }

    pub fn font_bytes(&self) -> &[u8] {
        &self.font_bytes
    }

    pub(crate) fn font_data(&self) -> &vello_cpu::peniko::FontData {
        &self.font_data
    }

    /// Shape a single unwrapped line of text.
    pub(crate) fn layout(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> PromoResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(PromoError::invalid_dimension(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// Fixed-width 5×7 bitmap face in a 6×8 cell. Ignores the requested size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultFont;

impl DefaultFont {
    pub const CELL_WIDTH: u32 = 6;
    pub const CELL_HEIGHT: u32 = 8;
    pub const FAMILY: &'static str = "builtin-5x7";

    /// Ink width of `text`: one cell per char minus the trailing gap.
    pub fn measure(self, text: &str) -> u32 {
        let n = text.chars().count() as u32;
        if n == 0 {
            0
        } else {
            n * Self::CELL_WIDTH - 1
        }
    }

    /// Coverage mask for `text` as `(width, height, bytes)`.
    pub fn coverage_mask(self, text: &str) -> (u32, u32, Vec<u8>) {
        let width = self.measure(text);
        let height = Self::CELL_HEIGHT;
        let mut mask = vec![0u8; (width as usize) * (height as usize)];
        for (i, ch) in text.chars().enumerate() {
            for (col, bits) in bitmap_font::columns(ch).into_iter().enumerate() {
                let mx = i * (Self::CELL_WIDTH as usize) + col;
                for row in 0..(height as usize) {
                    if (bits >> row) & 1 == 1 {
                        mask[row * (width as usize) + mx] = 255;
                    }
                }
            }
        }
        (width, height, mask)
    }
}

/// Font capability threaded explicitly through layout and compositing.
///
/// Selected once per render (or batch) and never stored globally.
#[derive(Debug)]
pub enum FontProvider {
    /// A real scalable font.
    Resolved(ResolvedFont),
    /// Built-in bitmap fallback.
    Default(DefaultFont),
}

impl FontProvider {
    /// Resolve `source`, degrading to [`DefaultFont`] with a warning when nothing loads.
    #[tracing::instrument(skip_all)]
    pub fn resolve(source: &FontSource) -> Self {
        match ResolvedFont::resolve(source) {
            Ok(font) => {
                tracing::debug!(family = font.family_name(), "resolved font");
                Self::Resolved(font)
            }
            Err(err) => {
                tracing::warn!(error = %err, "falling back to built-in bitmap font");
                Self::Default(DefaultFont)
            }
        }
    }

    pub fn default_font() -> Self {
        Self::Default(DefaultFont)
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default(_))
    }

    pub fn family_name(&self) -> &str {
        match self {
            Self::Resolved(f) => f.family_name(),
            Self::Default(_) => DefaultFont::FAMILY,
        }
    }

    /// Advance width of `text` at `size_px`, in whole pixels.
    ///
    /// A zero size measures as zero. Shaping failures fall back to the bitmap face metrics.
    pub fn measure(&mut self, text: &str, size_px: u32) -> u32 {
        if text.is_empty() || size_px == 0 {
            return 0;
        }
        match self {
            Self::Resolved(font) => {
                match font.layout(text, size_px as f32, TextBrushRgba8::default()) {
                    Ok(layout) => layout.width().round().max(0.0) as u32,
                    Err(err) => {
                        tracing::warn!(error = %err, "text shaping failed, using bitmap metrics");
                        DefaultFont.measure(text)
                    }
                }
            }
            Self::Default(face) => face.measure(text),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
