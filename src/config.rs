use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::{
    assets::font::FontSource,
    foundation::core::Rgb8,
    foundation::error::{PromoError, PromoResult},
    render::gradient::{DEFAULT_BASE, DEFAULT_DELTA, GradientSpec},
};

/// Output file name and pixel size of one promo tile.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TileSpec {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

impl TileSpec {
    pub fn new(file_name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            file_name: file_name.into(),
            width,
            height,
        }
    }
}

/// Job description for a batch of store-listing assets.
///
/// Every field is optional in JSON and falls back to the product listing defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub title: String,
    pub subtitle: Option<String>,
    /// Source icon for promo tiles, relative to the output root unless absolute.
    pub icon_path: PathBuf,
    pub fonts: FontSource,
    pub background: Rgb8,
    pub gradient_delta: i16,
    pub promo_tiles: Vec<TileSpec>,
    /// Icon output directory, relative to the output root unless absolute.
    pub icon_dir: PathBuf,
    pub icon_sizes: Vec<u32>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            title: "YouTube Timestamp Bookmarker".to_string(),
            subtitle: Some("Bookmark and jump to specific moments in YouTube videos".to_string()),
            icon_path: PathBuf::from("icons").join("icon128.png"),
            fonts: FontSource::default(),
            background: DEFAULT_BASE,
            gradient_delta: DEFAULT_DELTA,
            promo_tiles: vec![
                TileSpec::new("small_promo_tile.png", 440, 280),
                TileSpec::new("marquee_promo_tile.png", 1400, 560),
            ],
            icon_dir: PathBuf::from("icons"),
            icon_sizes: vec![16, 48, 128],
        }
    }
}

impl AssetConfig {
    /// Parse a job from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PromoResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PromoError::serde(format!("parse asset config JSON: {e}")))
    }

    /// Parse a job from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> PromoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PromoError::io(format!("open asset config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject jobs that cannot produce any valid output.
    pub fn validate(&self) -> PromoResult<()> {
        if self.promo_tiles.is_empty() && self.icon_sizes.is_empty() {
            return Err(PromoError::invalid_dimension(
                "config lists no promo tiles and no icon sizes",
            ));
        }
        for tile in &self.promo_tiles {
            if tile.width == 0 || tile.height == 0 {
                return Err(PromoError::invalid_dimension(format!(
                    "promo tile '{}' has size {}x{}",
                    tile.file_name, tile.width, tile.height
                )));
            }
            if tile.file_name.trim().is_empty() {
                return Err(PromoError::serde("promo tile file_name must not be empty"));
            }
        }
        if let Some(size) = self.icon_sizes.iter().find(|&&s| s == 0) {
            return Err(PromoError::invalid_dimension(format!(
                "icon size must be > 0, got {size}"
            )));
        }
        Ok(())
    }

    pub fn gradient(&self) -> GradientSpec {
        GradientSpec::uniform(self.background, self.gradient_delta)
    }

    /// File name of the generated icon of `size` pixels.
    pub fn icon_file_name(size: u32) -> String {
        format!("icon{size}.png")
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
