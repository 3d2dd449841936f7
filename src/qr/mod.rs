//! QR symbol encoding
//!
//! This module turns a URL (or any non-empty UTF-8 string) into an in-memory
//! two-color raster ready to be written to disk.

mod encoder;

pub use encoder::QrEncoder;

use image::DynamicImage;

/// A rendered QR symbol together with the geometry that produced it
#[derive(Debug, Clone)]
pub struct QrImage {
    image: DynamicImage,
    modules: u32,
    version: i16,
}

impl QrImage {
    pub(crate) fn new(image: DynamicImage, modules: u32, version: i16) -> Self {
        Self {
            image,
            modules,
            version,
        }
    }

    /// The underlying raster image
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the wrapper and return the raster image
    pub fn into_image(self) -> DynamicImage {
        self.image
    }

    /// Modules per side of the symbol, quiet zone excluded
    pub fn modules(&self) -> u32 {
        self.modules
    }

    /// The symbol version the data was encoded at
    pub fn version(&self) -> i16 {
        self.version
    }

    /// Rendered width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Rendered height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_symbol_is_square() {
        let figure = QrEncoder::default().encode("https://qr.fig").unwrap();
        assert_eq!(figure.width(), figure.height());
        assert_eq!(figure.image().width(), figure.width());
    }

    #[test]
    fn into_image_preserves_dimensions() {
        let figure = QrEncoder::default().encode("https://qr.fig").unwrap();
        let width = figure.width();
        let image = figure.into_image();
        assert_eq!(image.width(), width);
    }
}
