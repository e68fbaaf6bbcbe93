use crate::foundation::error::{PromoError, PromoResult};

pub use kurbo::{BezPath, Point};

/// Opaque 8-bit RGB color. Serialized as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray with all three channels set to `v`.
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Parse `#RRGGBB` (leading `#` optional).
    pub fn from_hex(s: &str) -> PromoResult<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(PromoError::serde(format!(
                "color '{s}' must be in #RRGGBB form"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| PromoError::serde(format!("color '{s}': {e}")))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_rgba(self, a: u8) -> [u8; 4] {
        [self.r, self.g, self.b, a]
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = PromoError;

    fn try_from(s: String) -> PromoResult<Self> {
        Self::from_hex(&s)
    }
}

impl From<Rgb8> for String {
    fn from(c: Rgb8) -> Self {
        c.to_hex()
    }
}

/// Channel layout of a [`Canvas`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 3 bytes per pixel, always opaque.
    Rgb8,
    /// 4 bytes per pixel, straight (non-premultiplied) alpha.
    Rgba8,
}

impl PixelFormat {
    pub fn channels(self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba8)
    }
}

/// Integer rectangle in canvas space. May extend past the canvas; drawing clips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Intersection with a `width`×`height` canvas as half-open `(x0, y0, x1, y1)`.
    pub fn clip_to(self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = i64::from(self.x).max(0);
        let y0 = i64::from(self.y).max(0);
        let x1 = (i64::from(self.x) + i64::from(self.width)).min(i64::from(width));
        let y1 = (i64::from(self.y) + i64::from(self.height)).min(i64::from(height));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

/// Owned pixel buffer, row-major and tightly packed.
///
/// A canvas is created, drawn into by exactly one owner, exported, and dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub data: Vec<u8>,
}

impl Canvas {
    /// Allocate a canvas with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, format: PixelFormat, fill: &[u8]) -> PromoResult<Self> {
        if fill.len() != format.channels() {
            return Err(PromoError::invalid_dimension(format!(
                "fill pixel has {} channels, format expects {}",
                fill.len(),
                format.channels()
            )));
        }
        let len = buffer_len(width, height, format)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..(len / format.channels()) {
            data.extend_from_slice(fill);
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// Fully transparent RGBA canvas.
    pub fn transparent(width: u32, height: u32) -> PromoResult<Self> {
        Self::filled(width, height, PixelFormat::Rgba8, &[0, 0, 0, 0])
    }

    /// Wrap an existing buffer, checking its length against the dimensions.
    pub fn from_raw(
        width: u32,
        height: u32,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> PromoResult<Self> {
        let len = buffer_len(width, height, format)?;
        if data.len() != len {
            return Err(PromoError::invalid_dimension(format!(
                "buffer has {} bytes, {width}x{height} {format:?} needs {len}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * self.format.channels()
    }

    /// Channels of the pixel at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let i = self.offset(x, y);
        &self.data[i..i + self.format.channels()]
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let i = self.offset(x, y);
        let n = self.format.channels();
        &mut self.data[i..i + n]
    }

    /// Overwrite an opaque color into the clipped footprint of `rect`.
    pub fn fill_rect(&mut self, rect: PixelRect, color: Rgb8) {
        let Some((x0, y0, x1, y1)) = rect.clip_to(self.width, self.height) else {
            return;
        };
        let px = color.to_rgba(255);
        let n = self.format.channels();
        for y in y0..y1 {
            let start = self.offset(x0, y);
            let end = self.offset(x1 - 1, y) + n;
            for dst in self.data[start..end].chunks_exact_mut(n) {
                dst.copy_from_slice(&px[..n]);
            }
        }
    }
}

/// Validate canvas dimensions and return the buffer length they require.
///
/// Runs before any allocation so that a bad request never reserves memory.
pub fn buffer_len(width: u32, height: u32, format: PixelFormat) -> PromoResult<usize> {
    if width == 0 || height == 0 {
        return Err(PromoError::invalid_dimension(format!(
            "canvas must be at least 1x1, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(format.channels()))
        .ok_or_else(|| {
            PromoError::invalid_dimension(format!("canvas {width}x{height} overflows buffer size"))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
