use crate::{
    assets::font::FontProvider,
    assets::icon::Icon,
    foundation::core::{Canvas, PixelFormat, PixelRect},
    foundation::error::PromoResult,
    layout::{ACCENT_COLOR, IconPlacement, LayoutPlan},
    render::text::draw_text,
};

/// Text drawn onto a tile.
#[derive(Clone, Copy, Debug)]
pub struct TextContent<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
}

/// Paint every planned element onto `canvas`, back to front.
///
/// Order: accent bar, corner icon, title icon, title, subtitle. Icon slots are skipped when
/// `icon` is `None`; the subtitle is drawn only when the plan carries one.
#[tracing::instrument(level = "debug", skip_all, fields(width = canvas.width, height = canvas.height))]
pub fn composite(
    mut canvas: Canvas,
    plan: &LayoutPlan,
    icon: Option<&Icon>,
    text: &TextContent<'_>,
    fonts: &mut FontProvider,
) -> PromoResult<Canvas> {
    canvas.fill_rect(plan.accent_bar, ACCENT_COLOR);

    if let Some(icon) = icon {
        for placement in [plan.corner_icon, plan.title_icon].into_iter().flatten() {
            paste_icon(&mut canvas, icon, placement)?;
        }
    }

    draw_text(&mut canvas, fonts, &plan.title, text.title)?;

    if let (Some(block), Some(subtitle)) = (plan.subtitle.as_ref(), text.subtitle) {
        draw_text(&mut canvas, fonts, block, subtitle)?;
    }

    Ok(canvas)
}

/// Resize `icon` to the placement and copy it opaquely, clipped to the canvas.
pub fn paste_icon(canvas: &mut Canvas, icon: &Icon, at: IconPlacement) -> PromoResult<()> {
    if at.size == 0 {
        return Ok(());
    }
    let rect = PixelRect::new(at.x, at.y, at.size, at.size);
    let Some((x0, y0, x1, y1)) = rect.clip_to(canvas.width, canvas.height) else {
        return Ok(());
    };

    let scaled = icon.resized(at.size)?;
    let format = canvas.format;
    for cy in y0..y1 {
        let iy = (i64::from(cy) - i64::from(at.y)) as u32;
        for cx in x0..x1 {
            let ix = (i64::from(cx) - i64::from(at.x)) as u32;
            let [r, g, b] = scaled.pixel(ix, iy);
            let px = canvas.pixel_mut(cx, cy);
            match format {
                PixelFormat::Rgb8 => px.copy_from_slice(&[r, g, b]),
                PixelFormat::Rgba8 => px.copy_from_slice(&[r, g, b, 255]),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
