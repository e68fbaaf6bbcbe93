use crate::{
    assets::font::FontProvider,
    assets::icon::Icon,
    foundation::core::Canvas,
    foundation::error::PromoResult,
    layout::{LayoutPlan, LayoutRequest, layout},
    render::compositor::{TextContent, composite},
    render::gradient::{GradientSpec, build_gradient_canvas},
};

/// One promo tile to render.
#[derive(Clone, Debug)]
pub struct PromoRequest<'a> {
    pub width: u32,
    pub height: u32,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub gradient: GradientSpec,
}

/// Build the background, lay out, and composite a single promo tile.
///
/// Pipeline:
/// 1. [`build_gradient_canvas`]
/// 2. [`layout`]
/// 3. [`composite`]
///
/// Returns the opaque RGB canvas along with the plan it was drawn from.
#[tracing::instrument(level = "debug", skip_all, fields(width = req.width, height = req.height))]
pub fn render_promo_tile(
    req: &PromoRequest<'_>,
    icon: Option<&Icon>,
    fonts: &mut FontProvider,
) -> PromoResult<(Canvas, LayoutPlan)> {
    let canvas = build_gradient_canvas(req.width, req.height, &req.gradient)?;
    let plan = layout(
        &LayoutRequest {
            width: req.width,
            height: req.height,
            has_icon: icon.is_some(),
            title: req.title,
            subtitle: req.subtitle,
        },
        fonts,
    )?;
    let text = TextContent {
        title: req.title,
        subtitle: req.subtitle,
    };
    let canvas = composite(canvas, &plan, icon, &text, fonts)?;
    Ok((canvas, plan))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
