use crate::{
    assets::font::{DefaultFont, FontProvider, ResolvedFont, TextBrushRgba8},
    foundation::core::Canvas,
    foundation::error::PromoResult,
    layout::TextBlock,
    render::blend::{CoverageMask, fill_coverage},
    render::raster::rasterize_coverage,
};

/// Draw `text` in `block.color` with the top-left of its line box at `(block.x, block.y)`.
///
/// Pixels outside the canvas are clipped. Empty text and zero font sizes draw nothing.
pub fn draw_text(
    canvas: &mut Canvas,
    fonts: &mut FontProvider,
    block: &TextBlock,
    text: &str,
) -> PromoResult<()> {
    if text.is_empty() || block.font_size == 0 {
        return Ok(());
    }
    match fonts {
        FontProvider::Resolved(font) => match draw_shaped(canvas, font, block, text) {
            Ok(()) => Ok(()),
            Err(err) if err.is_recoverable() => {
                tracing::warn!(error = %err, "shaped text failed, drawing bitmap text");
                draw_bitmap(canvas, DefaultFont, block, text);
                Ok(())
            }
            Err(err) => Err(err),
        },
        FontProvider::Default(face) => {
            draw_bitmap(canvas, *face, block, text);
            Ok(())
        }
    }
}

fn draw_shaped(
    canvas: &mut Canvas,
    font: &mut ResolvedFont,
    block: &TextBlock,
    text: &str,
) -> PromoResult<()> {
    let layout = font.layout(text, block.font_size as f32, TextBrushRgba8::opaque(block.color))?;

    // Glyph ink can overhang the advance box on every side.
    let pad = block.font_size.div_ceil(2);
    let width = layout.width().max(0.0).ceil() as u32 + 2 * pad;
    let height = layout.height().max(0.0).ceil() as u32 + 2 * pad;

    let font_data = font.font_data().clone();
    let mask = rasterize_coverage(width, height, |ctx| {
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(pad),
            f64::from(pad),
        )));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font_data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    })?;

    fill_coverage(
        canvas,
        CoverageMask {
            x: block.x - pad as i32,
            y: block.y - pad as i32,
            width,
            height,
            data: &mask,
        },
        block.color,
        255,
    );
    Ok(())
}

fn draw_bitmap(canvas: &mut Canvas, face: DefaultFont, block: &TextBlock, text: &str) {
    let (width, height, mask) = face.coverage_mask(text);
    fill_coverage(
        canvas,
        CoverageMask {
            x: block.x,
            y: block.y,
            width,
            height,
            data: &mask,
        },
        block.color,
        255,
    );
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
