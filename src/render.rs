pub(crate) mod blend;
pub(crate) mod compositor;
pub(crate) mod export;
pub(crate) mod glyph;
pub(crate) mod gradient;
pub(crate) mod pipeline;
pub(crate) mod raster;
pub(crate) mod text;

pub use blend::{CoverageMask, alpha_over, fill_coverage, over_rgb, over_rgba};
pub use compositor::{TextContent, composite, paste_icon};
pub use export::{ExportFormat, save_png};
pub use glyph::{BODY_COLOR, BookmarkGlyph, RIBBON_COLOR, render_bookmark_glyph};
pub use gradient::{
    DEFAULT_BASE, DEFAULT_DELTA, GradientSpec, build_canvas, build_gradient_canvas,
};
pub use pipeline::{PromoRequest, render_promo_tile};
pub use text::draw_text;
