use std::path::{Path, PathBuf};

use crate::{
    foundation::core::{Canvas, PixelFormat},
    foundation::error::{PromoError, PromoResult},
    render::blend::alpha_over,
};

/// Pixel layout of a written PNG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// 24-bit truecolor.
    Rgb8,
    /// 32-bit truecolor with alpha.
    Rgba8,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rgb8 => f.write_str("24-bit PNG (no alpha)"),
            Self::Rgba8 => f.write_str("32-bit PNG (alpha)"),
        }
    }
}

/// Encode `canvas` as PNG at `path`.
///
/// With `flatten_alpha` an RGBA canvas is composited over black and written without alpha.
/// The parent directory must already exist. The file is written to a temporary sibling and
/// renamed into place, so a failed export leaves nothing at `path`.
#[tracing::instrument(level = "debug", skip(canvas), fields(width = canvas.width, height = canvas.height))]
pub fn save_png(canvas: &Canvas, path: &Path, flatten_alpha: bool) -> PromoResult<ExportFormat> {
    let (format, flattened) = match (canvas.format, flatten_alpha) {
        (PixelFormat::Rgb8, _) => (ExportFormat::Rgb8, None),
        (PixelFormat::Rgba8, true) => (ExportFormat::Rgb8, Some(flatten_over_black(&canvas.data))),
        (PixelFormat::Rgba8, false) => (ExportFormat::Rgba8, None),
    };
    let bytes = flattened.as_deref().unwrap_or(&canvas.data);
    let color = match format {
        ExportFormat::Rgb8 => image::ColorType::Rgb8,
        ExportFormat::Rgba8 => image::ColorType::Rgba8,
    };

    let tmp = temp_sibling(path)?;
    let written = image::save_buffer_with_format(
        &tmp,
        bytes,
        canvas.width,
        canvas.height,
        color,
        image::ImageFormat::Png,
    )
    .map_err(|e| PromoError::io(format!("write png '{}': {e}", tmp.display())))
    .and_then(|()| {
        std::fs::rename(&tmp, path).map_err(|e| {
            PromoError::io(format!(
                "move '{}' to '{}': {e}",
                tmp.display(),
                path.display()
            ))
        })
    });

    if let Err(err) = written {
        if let Err(rm) = std::fs::remove_file(&tmp)
            && rm.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(path = %tmp.display(), error = %rm, "failed to remove temporary file");
        }
        return Err(err);
    }

    tracing::debug!(path = %path.display(), %format, "wrote png");
    Ok(format)
}

fn flatten_over_black(rgba: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        let a = px[3];
        out.extend_from_slice(&[
            alpha_over(0, px[0], a),
            alpha_over(0, px[1], a),
            alpha_over(0, px[2], a),
        ]);
    }
    out
}

fn temp_sibling(path: &Path) -> PromoResult<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| PromoError::io(format!("output path '{}' has no file name", path.display())))?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    Ok(path.with_file_name(tmp_name))
}

#[cfg(test)]
#[path = "../../tests/unit/render/export.rs"]
mod tests;
