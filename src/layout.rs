pub(crate) mod plan;

pub use plan::{
    ACCENT_COLOR, IconPlacement, LayoutPlan, LayoutRequest, SUBTITLE_COLOR, SUBTITLE_MIN_HEIGHT,
    ScaledMetrics, TITLE_COLOR, TextAnchor, TextBlock, layout,
};
