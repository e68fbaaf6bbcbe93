pub(crate) mod bitmap_font;
pub(crate) mod font;
pub(crate) mod icon;

pub use font::{DefaultFont, FontProvider, FontSource, ResolvedFont};
pub use icon::{Icon, flatten_rgba, load_icon, try_load_icon};
