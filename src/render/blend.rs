use crate::foundation::core::{Canvas, PixelFormat, PixelRect, Rgb8};
use crate::foundation::math::mul_div255;

/// Blend one channel of `fg` over an opaque `base` with coverage `alpha`.
///
/// `out = base * (1 - a) + fg * a`, rounded to nearest.
pub fn alpha_over(base: u8, fg: u8, alpha: u8) -> u8 {
    let a = u32::from(alpha);
    ((u32::from(base) * (255 - a) + u32::from(fg) * a + 127) / 255) as u8
}

/// [`alpha_over`] applied to each channel of an opaque RGB pixel.
pub fn over_rgb(base: [u8; 3], fg: [u8; 3], alpha: u8) -> [u8; 3] {
    [
        alpha_over(base[0], fg[0], alpha),
        alpha_over(base[1], fg[1], alpha),
        alpha_over(base[2], fg[2], alpha),
    ]
}

/// Straight-alpha source-over for a destination that may itself be translucent.
///
/// Reduces to [`over_rgb`] when `dst` is opaque.
pub fn over_rgba(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }
    let da = dst[3];
    if da == 255 {
        let [r, g, b] = over_rgb([dst[0], dst[1], dst[2]], [src[0], src[1], src[2]], sa);
        return [r, g, b, 255];
    }

    let sa = u32::from(sa);
    // Destination weight and output alpha, both scaled by 255.
    let dst_w = u32::from(da) * (255 - sa);
    let out_a255 = sa * 255 + dst_w;
    if out_a255 == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let num = u32::from(src[i]) * sa * 255 + u32::from(dst[i]) * dst_w;
        out[i] = ((num + out_a255 / 2) / out_a255) as u8;
    }
    out[3] = ((out_a255 + 127) / 255) as u8;
    out
}

/// Alpha coverage mask placed with its top-left corner at `(x, y)` in canvas space.
#[derive(Clone, Copy, Debug)]
pub struct CoverageMask<'a> {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// `width * height` coverage bytes, row-major.
    pub data: &'a [u8],
}

/// Composite a solid `color` through `mask` onto `canvas`.
///
/// `opacity` scales the coverage, so a translucent fill is expressed as `opacity < 255`.
pub fn fill_coverage(canvas: &mut Canvas, mask: CoverageMask<'_>, color: Rgb8, opacity: u8) {
    let rect = PixelRect::new(mask.x, mask.y, mask.width, mask.height);
    let Some((x0, y0, x1, y1)) = rect.clip_to(canvas.width, canvas.height) else {
        return;
    };
    let format = canvas.format;
    for cy in y0..y1 {
        let my = (i64::from(cy) - i64::from(mask.y)) as usize;
        for cx in x0..x1 {
            let mx = (i64::from(cx) - i64::from(mask.x)) as usize;
            let a = mul_div255(mask.data[my * mask.width as usize + mx], opacity);
            if a == 0 {
                continue;
            }
            let px = canvas.pixel_mut(cx, cy);
            match format {
                PixelFormat::Rgb8 => {
                    let out = over_rgb([px[0], px[1], px[2]], color.to_array(), a);
                    px.copy_from_slice(&out);
                }
                PixelFormat::Rgba8 => {
                    let out = over_rgba([px[0], px[1], px[2], px[3]], color.to_rgba(a));
                    px.copy_from_slice(&out);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blend.rs"]
mod tests;
