//! promokit renders store-listing artwork procedurally: gradient promo tiles with an accent
//! bar, icon and centered title text, plus a scalable bookmark icon set.
//!
//! Every render is a single synchronous pass over an owned pixel buffer:
//!
//! - Build a gradient [`Canvas`] ([`build_gradient_canvas`])
//! - Compute a [`LayoutPlan`] from the canvas size and measured text ([`layout`])
//! - Draw the plan ([`composite`]) and write a PNG ([`save_png`])
//!
//! [`render_promo_tile`] chains these for one tile, and the [`batch`] functions run a whole
//! [`AssetConfig`] job with per-asset error isolation.
#![forbid(unsafe_code)]

mod assets;
mod foundation;

/// Batch generation of every configured asset.
pub mod batch;
/// JSON job configuration.
pub mod config;
/// Promo tile layout.
pub mod layout;
/// Rasterization, compositing and export.
pub mod render;

pub use crate::assets::{
    DefaultFont, FontProvider, FontSource, Icon, ResolvedFont, flatten_rgba, load_icon,
    try_load_icon,
};
pub use crate::foundation::core::{BezPath, Canvas, PixelFormat, PixelRect, Point, Rgb8};
pub use crate::foundation::error::{PromoError, PromoResult};
pub use crate::foundation::math::{REFERENCE_WIDTH, ScaleFactor, centered_offset};

pub use crate::batch::{
    AssetOutcome, AssetReport, BatchReport, generate_icons, generate_promo_tiles,
    generate_promo_tiles_with,
};
pub use crate::config::{AssetConfig, TileSpec};
pub use crate::layout::{LayoutPlan, LayoutRequest, ScaledMetrics, TextBlock, layout};
pub use crate::render::{
    BookmarkGlyph, ExportFormat, GradientSpec, PromoRequest, TextContent, alpha_over,
    build_canvas, build_gradient_canvas, composite, render_bookmark_glyph, render_promo_tile,
    save_png,
};
