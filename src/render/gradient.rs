use crate::foundation::core::{Canvas, PixelFormat, Rgb8, buffer_len};
use crate::foundation::error::PromoResult;

/// Base color of every promo background (`#1A1A1A`).
pub const DEFAULT_BASE: Rgb8 = Rgb8::gray(26);

/// Per-channel brightening applied between the top and bottom rows.
pub const DEFAULT_DELTA: i16 = 20;

/// Vertical, top-to-bottom gradient: row `y` is `base + round(y / height * delta)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GradientSpec {
    pub base: Rgb8,
    /// Signed per-channel delta reached (exclusively) at the bottom edge.
    pub delta: [i16; 3],
}

impl Default for GradientSpec {
    fn default() -> Self {
        Self::with_base(DEFAULT_BASE)
    }
}

impl GradientSpec {
    /// `base` with the default brightening delta on every channel.
    pub fn with_base(base: Rgb8) -> Self {
        Self::uniform(base, DEFAULT_DELTA)
    }

    pub fn uniform(base: Rgb8, delta: i16) -> Self {
        Self {
            base,
            delta: [delta; 3],
        }
    }

    /// Color of row `y` in a canvas of `height` rows, clamped to `[0, 255]`.
    pub fn row_color(&self, y: u32, height: u32) -> Rgb8 {
        let t = if height == 0 {
            0.0
        } else {
            f64::from(y) / f64::from(height)
        };
        let ch = |base: u8, delta: i16| -> u8 {
            let v = f64::from(base) + (t * f64::from(delta)).round();
            v.clamp(0.0, 255.0) as u8
        };
        Rgb8::new(
            ch(self.base.r, self.delta[0]),
            ch(self.base.g, self.delta[1]),
            ch(self.base.b, self.delta[2]),
        )
    }
}

/// Allocate an opaque RGB canvas filled with the default gradient starting at `base`.
pub fn build_canvas(width: u32, height: u32, base: Rgb8) -> PromoResult<Canvas> {
    build_gradient_canvas(width, height, &GradientSpec::with_base(base))
}

/// Allocate an opaque RGB canvas filled with `gradient`.
///
/// Dimensions are validated before the buffer is reserved.
#[tracing::instrument(level = "debug", skip(gradient))]
pub fn build_gradient_canvas(
    width: u32,
    height: u32,
    gradient: &GradientSpec,
) -> PromoResult<Canvas> {
    let len = buffer_len(width, height, PixelFormat::Rgb8)?;
    let mut data = Vec::with_capacity(len);
    for y in 0..height {
        let c = gradient.row_color(y, height).to_array();
        for _ in 0..width {
            data.extend_from_slice(&c);
        }
    }
    Canvas::from_raw(width, height, PixelFormat::Rgb8, data)
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
