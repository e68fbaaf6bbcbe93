use crate::foundation::core::BezPath;
use crate::foundation::error::{PromoError, PromoResult};

/// Rasterize whatever `draw` paints into an 8-bit anti-aliased coverage mask.
///
/// The context starts with an opaque white paint and identity transform; only the resulting
/// alpha channel is kept, so callers pick colors at composite time.
pub(crate) fn rasterize_coverage(
    width: u32,
    height: u32,
    draw: impl FnOnce(&mut vello_cpu::RenderContext),
) -> PromoResult<Vec<u8>> {
    let w = surface_dim(width, "width")?;
    let h = surface_dim(height, "height")?;

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
    draw(&mut ctx);
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);

    Ok(pixmap
        .data_as_u8_slice()
        .chunks_exact(4)
        .map(|px| px[3])
        .collect())
}

fn surface_dim(v: u32, what: &str) -> PromoResult<u16> {
    match u16::try_from(v) {
        Ok(d) if d > 0 => Ok(d),
        _ => Err(PromoError::invalid_dimension(format!(
            "raster surface {what} must be in 1..={}, got {v}",
            u16::MAX
        ))),
    }
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

/// Convert a path built against the crate's `kurbo` into the rasterizer's `kurbo`.
pub(crate) fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
