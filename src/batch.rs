use std::path::{Path, PathBuf};

use crate::{
    assets::font::FontProvider,
    assets::icon::load_icon,
    config::AssetConfig,
    foundation::error::{PromoError, PromoResult},
    render::export::{ExportFormat, save_png},
    render::glyph::render_bookmark_glyph,
    render::pipeline::{PromoRequest, render_promo_tile},
};

/// A successfully written asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetReport {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: ExportFormat,
}

impl std::fmt::Display for AssetReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}x{}, {})",
            self.path.display(),
            self.width,
            self.height,
            self.format
        )
    }
}

/// Result of rendering one asset of a batch.
#[derive(Debug)]
pub struct AssetOutcome {
    pub path: PathBuf,
    pub result: PromoResult<AssetReport>,
}

/// Per-asset outcomes of a batch run, in render order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<AssetOutcome>,
}

impl BatchReport {
    pub fn written(&self) -> impl Iterator<Item = &AssetReport> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &PromoError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.path.as_path(), e)))
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn append(&mut self, mut other: BatchReport) {
        self.outcomes.append(&mut other.outcomes);
    }

    fn push(&mut self, path: PathBuf, result: PromoResult<AssetReport>) {
        if let Err(err) = &result {
            tracing::error!(path = %path.display(), error = %err, "asset render failed");
        }
        self.outcomes.push(AssetOutcome { path, result });
    }
}

fn ensure_dir(dir: &Path) -> PromoResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        let err = PromoError::io(format!("create output dir '{}': {e}", dir.display()));
        tracing::error!(error = %err, "cannot prepare output directory");
        err
    })
}

fn unavailable_dir(dir: &Path) -> PromoError {
    PromoError::io(format!("output dir '{}' could not be created", dir.display()))
}

/// Render and export the bookmark icon at every configured size.
#[tracing::instrument(skip_all, fields(out_root = %out_root.display()))]
pub fn generate_icons(config: &AssetConfig, out_root: &Path) -> BatchReport {
    let mut report = BatchReport::default();
    let dir = out_root.join(&config.icon_dir);
    let dir_ready = ensure_dir(&dir);

    for &size in &config.icon_sizes {
        let path = dir.join(AssetConfig::icon_file_name(size));
        let result = match &dir_ready {
            Ok(()) => render_icon(size, &path),
            Err(_) => Err(unavailable_dir(&dir)),
        };
        report.push(path, result);
    }
    report
}

fn render_icon(size: u32, path: &Path) -> PromoResult<AssetReport> {
    let canvas = render_bookmark_glyph(size)?;
    let format = save_png(&canvas, path, false)?;
    Ok(AssetReport {
        path: path.to_path_buf(),
        width: canvas.width,
        height: canvas.height,
        format,
    })
}

/// Render every configured promo tile, resolving fonts from the config once.
pub fn generate_promo_tiles(config: &AssetConfig, out_root: &Path) -> BatchReport {
    let mut fonts = FontProvider::resolve(&config.fonts);
    generate_promo_tiles_with(config, out_root, &mut fonts)
}

/// Render every configured promo tile with an already selected font provider.
///
/// The icon is loaded once and shared by every tile; a missing icon yields text-only tiles.
#[tracing::instrument(skip_all, fields(out_root = %out_root.display(), font = fonts.family_name()))]
pub fn generate_promo_tiles_with(
    config: &AssetConfig,
    out_root: &Path,
    fonts: &mut FontProvider,
) -> BatchReport {
    let mut report = BatchReport::default();
    let dir_ready = ensure_dir(out_root);
    let icon = load_icon(&out_root.join(&config.icon_path), config.background);

    for tile in &config.promo_tiles {
        let path = out_root.join(&tile.file_name);
        let result = match &dir_ready {
            Ok(()) => {
                let req = PromoRequest {
                    width: tile.width,
                    height: tile.height,
                    title: &config.title,
                    subtitle: config.subtitle.as_deref(),
                    gradient: config.gradient(),
                };
                render_promo_tile(&req, icon.as_ref(), fonts).and_then(|(canvas, _)| {
                    let format = save_png(&canvas, &path, true)?;
                    Ok(AssetReport {
                        path: path.clone(),
                        width: canvas.width,
                        height: canvas.height,
                        format,
                    })
                })
            }
            Err(_) => Err(unavailable_dir(out_root)),
        };
        report.push(path, result);
    }
    report
}

#[cfg(test)]
#[path = "../tests/unit/batch.rs"]
mod tests;
