//! Persisting rendered figures to disk

use crate::error::Result;
use crate::qr::QrImage;
use image::ImageFormat;
use std::fs;
use std::path::Path;

/// Write a rendered QR figure as a PNG at the given path.
///
/// Missing parent directories are created. The PNG format is forced
/// regardless of the path's extension.
pub fn save_png(figure: &QrImage, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    figure.image().save_with_format(path, ImageFormat::Png)?;

    tracing::info!(
        path = %path.display(),
        width = figure.width(),
        height = figure.height(),
        "wrote QR figure"
    );

    Ok(())
}
