use crate::{
    assets::font::FontProvider,
    foundation::core::{PixelRect, Rgb8},
    foundation::error::{PromoError, PromoResult},
    foundation::math::{ScaleFactor, centered_offset},
};

/// Accent bar fill (`#FF0000`).
pub const ACCENT_COLOR: Rgb8 = Rgb8::new(255, 0, 0);
/// Title fill (`#FFFFFF`).
pub const TITLE_COLOR: Rgb8 = Rgb8::WHITE;
/// Subtitle fill (`#CCCCCC`).
pub const SUBTITLE_COLOR: Rgb8 = Rgb8::gray(204);

/// Subtitles are only laid out on canvases strictly taller than this.
pub const SUBTITLE_MIN_HEIGHT: u32 = 300;

/// Inputs of a promo tile layout.
#[derive(Clone, Copy, Debug)]
pub struct LayoutRequest<'a> {
    pub width: u32,
    pub height: u32,
    pub has_icon: bool,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
}

/// Every size and offset of a tile, derived from one [`ScaleFactor`].
///
/// The reference-space multipliers are part of the visual output and are kept verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaledMetrics {
    pub title_font_size: u32,
    pub subtitle_font_size: u32,
    pub accent_bar_height: u32,
    pub corner_icon_size: u32,
    pub padding: u32,
    pub title_icon_size: u32,
    pub spacing: u32,
    pub title_icon_y: u32,
    pub title_text_y: u32,
    pub subtitle_y: u32,
}

impl ScaledMetrics {
    pub fn from_scale(s: ScaleFactor) -> Self {
        Self {
            title_font_size: s.px(72.0),
            subtitle_font_size: s.px(36.0),
            accent_bar_height: s.px(60.0),
            corner_icon_size: s.px(80.0),
            padding: s.px(20.0),
            title_icon_size: s.px(100.0),
            spacing: s.px(20.0),
            title_icon_y: s.px(80.0),
            title_text_y: s.px(100.0),
            subtitle_y: s.px(200.0),
        }
    }
}

/// Square icon placement; `size` is both width and height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconPlacement {
    pub x: i32,
    pub y: i32,
    pub size: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Left edge follows the title icon and spacing.
    AfterIcon,
    /// Horizontally centered on its own measured width.
    Centered,
}

/// A positioned line of text. `(x, y)` is the top-left of the line box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextBlock {
    pub x: i32,
    pub y: i32,
    pub font_size: u32,
    /// Measured advance width at `font_size`.
    pub width: u32,
    pub color: Rgb8,
    pub anchor: TextAnchor,
}

/// Fully resolved integer placement of every element on a promo tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutPlan {
    pub width: u32,
    pub height: u32,
    pub scale: ScaleFactor,
    pub metrics: ScaledMetrics,
    pub accent_bar: PixelRect,
    pub corner_icon: Option<IconPlacement>,
    pub title_icon: Option<IconPlacement>,
    pub title: TextBlock,
    pub subtitle: Option<TextBlock>,
}

impl LayoutPlan {
    /// Left edge and total width of the jointly centered icon + title group.
    pub fn title_group(&self) -> (i32, u32) {
        match self.title_icon {
            Some(icon) => (
                icon.x,
                icon.size + self.metrics.spacing + self.title.width,
            ),
            None => (self.title.x, self.title.width),
        }
    }
}

/// Compute the layout of a promo tile.
///
/// Deterministic in its inputs; `fonts` is only used to measure text widths.
#[tracing::instrument(level = "debug", skip(req, fonts), fields(width = req.width, height = req.height, has_icon = req.has_icon))]
pub fn layout(req: &LayoutRequest<'_>, fonts: &mut FontProvider) -> PromoResult<LayoutPlan> {
    if req.width == 0 || req.height == 0 {
        return Err(PromoError::invalid_dimension(format!(
            "layout needs a non-empty canvas, got {}x{}",
            req.width, req.height
        )));
    }

    let scale = ScaleFactor::for_width(req.width);
    let m = ScaledMetrics::from_scale(scale);

    let accent_bar = PixelRect::new(0, 0, req.width, m.accent_bar_height);

    let corner_icon = req.has_icon.then(|| IconPlacement {
        x: m.padding as i32,
        y: m.padding as i32,
        size: m.corner_icon_size,
    });

    let title_width = fonts.measure(req.title, m.title_font_size);
    let (title_icon, title_x, anchor) = if req.has_icon {
        let total_width = m.title_icon_size + m.spacing + title_width;
        let start_x = centered_offset(req.width, total_width);
        let icon = IconPlacement {
            x: start_x,
            y: m.title_icon_y as i32,
            size: m.title_icon_size,
        };
        let text_x = start_x + (m.title_icon_size + m.spacing) as i32;
        (Some(icon), text_x, TextAnchor::AfterIcon)
    } else {
        (
            None,
            centered_offset(req.width, title_width),
            TextAnchor::Centered,
        )
    };

    let title = TextBlock {
        x: title_x,
        y: m.title_text_y as i32,
        font_size: m.title_font_size,
        width: title_width,
        color: TITLE_COLOR,
        anchor,
    };

    let subtitle = match req.subtitle {
        Some(text) if req.height > SUBTITLE_MIN_HEIGHT => {
            let w = fonts.measure(text, m.subtitle_font_size);
            Some(TextBlock {
                x: centered_offset(req.width, w),
                y: m.subtitle_y as i32,
                font_size: m.subtitle_font_size,
                width: w,
                color: SUBTITLE_COLOR,
                anchor: TextAnchor::Centered,
            })
        }
        _ => None,
    };

    tracing::debug!(
        scale = scale.get(),
        title_font_size = m.title_font_size,
        title_width,
        subtitle = subtitle.is_some(),
        "laid out promo tile"
    );

    Ok(LayoutPlan {
        width: req.width,
        height: req.height,
        scale,
        metrics: m,
        accent_bar,
        corner_icon,
        title_icon,
        title,
        subtitle,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/plan.rs"]
mod tests;
