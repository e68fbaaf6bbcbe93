use super::*;
use crate::assets::font::DefaultFont;

const TITLE: &str = "YouTube Timestamp Bookmarker";
const SUBTITLE: &str = "Bookmark and jump to specific moments in YouTube videos";

fn plan(width: u32, height: u32, has_icon: bool, title: &str) -> LayoutPlan {
    let mut fonts = FontProvider::default_font();
    layout(
        &LayoutRequest {
            width,
            height,
            has_icon,
            title,
            subtitle: Some(SUBTITLE),
        },
        &mut fonts,
    )
    .unwrap()
}

#[test]
fn small_tile_scenario() {
    let p = plan(440, 280, true, TITLE);

    assert_eq!(p.accent_bar, PixelRect::new(0, 0, 440, 21));
    assert_eq!(p.metrics.title_font_size, 25);
    assert_eq!(p.metrics.subtitle_font_size, 12);
    assert_eq!(p.subtitle, None);

    assert_eq!(
        p.corner_icon,
        Some(IconPlacement {
            x: 7,
            y: 7,
            size: 28
        })
    );

    let title_w = DefaultFont.measure(TITLE);
    let total = 34 + 7 + title_w;
    let start_x = (440 - total as i32).div_euclid(2);
    assert_eq!(
        p.title_icon,
        Some(IconPlacement {
            x: start_x,
            y: 28,
            size: 34
        })
    );
    assert_eq!(p.title.x, start_x + 34 + 7);
    assert_eq!(p.title.y, 34);
    assert_eq!(p.title.anchor, TextAnchor::AfterIcon);
    assert_eq!(p.title.color, TITLE_COLOR);
}

#[test]
fn marquee_tile_includes_subtitle() {
    let p = plan(1400, 560, true, TITLE);
    let sub = p.subtitle.expect("subtitle on a 560px tall tile");

    assert_eq!(sub.font_size, 39);
    assert_eq!(sub.y, 219);
    assert_eq!(sub.color, SUBTITLE_COLOR);
    assert_eq!(sub.anchor, TextAnchor::Centered);
    assert_eq!(sub.x, (1400 - sub.width as i32).div_euclid(2));
}

#[test]
fn subtitle_height_gate_is_exclusive_at_300() {
    assert!(plan(1280, 299, true, TITLE).subtitle.is_none());
    assert!(plan(1280, 300, true, TITLE).subtitle.is_none());
    assert!(plan(1280, 301, true, TITLE).subtitle.is_some());
}

#[test]
fn missing_subtitle_is_never_planned() {
    let mut fonts = FontProvider::default_font();
    let p = layout(
        &LayoutRequest {
            width: 1400,
            height: 560,
            has_icon: false,
            title: TITLE,
            subtitle: None,
        },
        &mut fonts,
    )
    .unwrap();
    assert!(p.subtitle.is_none());
}

#[test]
fn without_icon_title_is_centered_alone() {
    let p = plan(1400, 560, false, TITLE);
    assert!(p.corner_icon.is_none());
    assert!(p.title_icon.is_none());
    assert_eq!(p.title.anchor, TextAnchor::Centered);
    assert_eq!(p.title.x, (1400 - p.title.width as i32).div_euclid(2));
    assert_eq!(p.title.y, 109);
}

#[test]
fn title_group_is_centered_for_any_length() {
    let long = "W".repeat(400);
    for width in [440u32, 640, 1280, 1400, 2000] {
        for title in ["", "A", "Mid length", TITLE, long.as_str()] {
            for has_icon in [true, false] {
                let p = plan(width, 560, has_icon, title);
                let (start_x, total) = p.title_group();
                let center2 = 2 * i64::from(start_x) + i64::from(total);
                assert!(
                    (center2 - i64::from(width)).abs() <= 1,
                    "w={width} icon={has_icon} title_len={} start={start_x} total={total}",
                    title.len()
                );
            }
        }
    }
}

#[test]
fn overflowing_title_starts_left_of_canvas() {
    let p = plan(440, 280, true, &"W".repeat(200));
    assert!(p.title_icon.unwrap().x < 0);
}

#[test]
fn derived_sizes_are_scale_similar() {
    for w in [320u32, 440, 640, 700, 1280] {
        let a = ScaledMetrics::from_scale(ScaleFactor::for_width(w));
        let b = ScaledMetrics::from_scale(ScaleFactor::for_width(2 * w));
        let pairs = [
            (a.title_font_size, b.title_font_size),
            (a.subtitle_font_size, b.subtitle_font_size),
            (a.accent_bar_height, b.accent_bar_height),
            (a.corner_icon_size, b.corner_icon_size),
            (a.padding, b.padding),
            (a.title_icon_size, b.title_icon_size),
            (a.spacing, b.spacing),
            (a.title_icon_y, b.title_icon_y),
            (a.title_text_y, b.title_text_y),
            (a.subtitle_y, b.subtitle_y),
        ];
        for (small, large) in pairs {
            assert!(
                (i64::from(large) - 2 * i64::from(small)).abs() <= 1,
                "w={w}: {small} vs {large}"
            );
        }
    }
}

#[test]
fn reference_width_uses_literal_multipliers() {
    let m = ScaledMetrics::from_scale(ScaleFactor::for_width(1280));
    assert_eq!(
        m,
        ScaledMetrics {
            title_font_size: 72,
            subtitle_font_size: 36,
            accent_bar_height: 60,
            corner_icon_size: 80,
            padding: 20,
            title_icon_size: 100,
            spacing: 20,
            title_icon_y: 80,
            title_text_y: 100,
            subtitle_y: 200,
        }
    );
}

#[test]
fn tiny_canvas_lays_out_without_panicking() {
    let p = plan(1, 1, true, TITLE);
    assert_eq!(p.metrics.title_font_size, 0);
    assert_eq!(p.title.width, 0);
    assert_eq!(p.accent_bar.height, 0);
}

#[test]
fn zero_width_is_invalid() {
    let mut fonts = FontProvider::default_font();
    let err = layout(
        &LayoutRequest {
            width: 0,
            height: 10,
            has_icon: false,
            title: TITLE,
            subtitle: None,
        },
        &mut fonts,
    )
    .unwrap_err();
    assert!(matches!(err, PromoError::InvalidDimension(_)));
}

#[test]
fn layout_is_deterministic() {
    assert_eq!(plan(1400, 560, true, TITLE), plan(1400, 560, true, TITLE));
}
