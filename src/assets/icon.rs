use std::{path::Path, sync::Arc};

use image::{DynamicImage, RgbImage, RgbaImage, imageops::FilterType};

use crate::{
    foundation::core::Rgb8,
    foundation::error::{PromoError, PromoResult},
    render::blend::over_rgb,
};

/// Opaque RGB icon bitmap.
///
/// Immutable once built; [`Icon::resized`] always returns a new image.
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    image: Arc<RgbImage>,
}

impl Icon {
    /// Normalize a decoded image to opaque RGB.
    ///
    /// Images with an alpha channel are composited over `background`; other encodings are
    /// converted to 8-bit RGB.
    pub fn from_dynamic(img: DynamicImage, background: Rgb8) -> Self {
        let rgb = if img.color().has_alpha() {
            flatten_rgba(&img.to_rgba8(), background)
        } else {
            img.to_rgb8()
        };
        Self {
            image: Arc::new(rgb),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    /// Square copy resampled with Lanczos3.
    pub fn resized(&self, size: u32) -> PromoResult<Icon> {
        if size == 0 {
            return Err(PromoError::invalid_dimension("icon size must be > 0"));
        }
        if self.width() == size && self.height() == size {
            return Ok(self.clone());
        }
        let out = image::imageops::resize(self.image.as_ref(), size, size, FilterType::Lanczos3);
        Ok(Icon {
            image: Arc::new(out),
        })
    }
}

/// Composite every pixel of `rgba` over an opaque `background`.
pub fn flatten_rgba(rgba: &RgbaImage, background: Rgb8) -> RgbImage {
    let bg = background.to_array();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        image::Rgb(over_rgb(bg, [r, g, b], a))
    })
}

/// Read and decode the icon at `path`.
pub fn try_load_icon(path: &Path, background: Rgb8) -> PromoResult<Icon> {
    let bytes = std::fs::read(path)
        .map_err(|e| PromoError::asset_load(format!("read '{}': {e}", path.display())))?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| PromoError::asset_load(format!("decode '{}': {e}", path.display())))?;
    Ok(Icon::from_dynamic(img, background))
}

/// Load the icon at `path`, degrading to `None` when it is missing or corrupt.
///
/// Failures are reported as warnings; the caller renders a text-only layout instead.
pub fn load_icon(path: &Path, background: Rgb8) -> Option<Icon> {
    match try_load_icon(path, background) {
        Ok(icon) => {
            tracing::debug!(
                path = %path.display(),
                width = icon.width(),
                height = icon.height(),
                "loaded icon"
            );
            Some(icon)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not load icon, continuing without it");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/icon.rs"]
mod tests;
