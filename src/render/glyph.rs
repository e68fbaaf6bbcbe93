use kurbo::Shape;

use crate::{
    foundation::core::{BezPath, Canvas, Point, Rgb8},
    foundation::error::{PromoError, PromoResult},
    render::blend::{CoverageMask, fill_coverage},
    render::raster::{bezpath_to_cpu, rasterize_coverage},
};

pub const BODY_COLOR: Rgb8 = Rgb8::new(102, 126, 234);
pub const RIBBON_COLOR: Rgb8 = Rgb8::new(118, 75, 162);

/// Integer geometry of the bookmark icon for one square size.
///
/// Coordinates address pixel cells; rasterization samples at their centers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookmarkGlyph {
    pub size: u32,
    pub margin: u32,
    /// Body polygon, clockwise from the top-left corner.
    pub body: [(u32, u32); 5],
    pub ribbon_center: (u32, u32),
    pub ribbon_radius: u32,
}

impl BookmarkGlyph {
    pub fn for_size(size: u32) -> PromoResult<Self> {
        if size == 0 {
            return Err(PromoError::invalid_dimension(
                "bookmark glyph size must be > 0",
            ));
        }
        let m = size / 8;
        let r = size / 6;
        Ok(Self {
            size,
            margin: m,
            body: [
                (m, m),
                (size - m, size - 2 * m),
                (size - m, size - m),
                (size / 2, size - m / 2),
                (m, size - m),
            ],
            ribbon_center: (size / 2, m + r),
            ribbon_radius: r,
        })
    }

    fn body_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for (i, &(x, y)) in self.body.iter().enumerate() {
            let p = cell_center(x, y);
            if i == 0 {
                path.move_to(p);
            } else {
                path.line_to(p);
            }
        }
        path.close_path();
        path
    }

    fn ribbon_path(&self) -> BezPath {
        let (cx, cy) = self.ribbon_center;
        // The disc covers every cell whose center lies within `radius` of the center cell.
        kurbo::Circle::new(cell_center(cx, cy), f64::from(self.ribbon_radius) + 0.5)
            .to_path(0.05)
    }
}

fn cell_center(x: u32, y: u32) -> Point {
    Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5)
}

/// Render the bookmark icon on a transparent `size`×`size` RGBA canvas.
#[tracing::instrument(level = "debug")]
pub fn render_bookmark_glyph(size: u32) -> PromoResult<Canvas> {
    let glyph = BookmarkGlyph::for_size(size)?;
    let mut canvas = Canvas::transparent(size, size)?;

    for (path, color) in [
        (glyph.body_path(), BODY_COLOR),
        (glyph.ribbon_path(), RIBBON_COLOR),
    ] {
        let cpu_path = bezpath_to_cpu(&path);
        let mask = rasterize_coverage(size, size, |ctx| ctx.fill_path(&cpu_path))?;
        fill_coverage(
            &mut canvas,
            CoverageMask {
                x: 0,
                y: 0,
                width: size,
                height: size,
                data: &mask,
            },
            color,
            255,
        );
    }

    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/glyph.rs"]
mod tests;
