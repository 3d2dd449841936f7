//! qrfig - render a configured URL as a QR-code figure
//!
//! This library reads a URL from a structured configuration file (TOML or
//! YAML) and renders it as a QR-code PNG on disk. The defaults reproduce the
//! classic documentation-figure pipeline: load `_variables.yml`, encode its
//! `url` key at symbol version 1 / Low error correction with 10 pixels per
//! module and a 4-module quiet zone, and write `figures/qr_code.png`.
//!
//! # Example
//!
//! ```no_run
//! use qrfig::QrfigConfig;
//!
//! fn main() -> qrfig::Result<()> {
//!     // Discover _variables.yml / qrfig.toml in the working directory
//!     let config = QrfigConfig::load(None)?;
//!
//!     let rendered = qrfig::generate(&config)?;
//!
//!     println!("wrote {}", rendered.path.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod qr;

// Re-exports for convenience
pub use error::{Error, Result};

pub use config::{DEFAULT_FIGURE_PATH, ErrorCorrection, LoggingOptions, QrOptions, QrfigConfig};
pub use qr::{QrEncoder, QrImage};

use std::path::PathBuf;

/// Summary of a completed figure generation run
#[derive(Debug, Clone)]
pub struct RenderedFigure {
    /// Where the PNG was written
    pub path: PathBuf,
    /// Symbol version the data was encoded at
    pub version: i16,
    /// Modules per side, quiet zone excluded
    pub modules: u32,
    /// Rendered raster dimensions in pixels
    pub pixels: (u32, u32),
}

/// Run the full pipeline: extract the URL, encode it, write the PNG.
///
/// One file read has already happened by the time `config` exists; this
/// performs the one encode and one file write, in strict sequence.
pub fn generate(config: &QrfigConfig) -> Result<RenderedFigure> {
    let url = config.url()?;
    let encoder = config.encoder()?;

    let figure = encoder.encode(url)?;
    let path = config.output_path();
    output::save_png(&figure, &path)?;

    Ok(RenderedFigure {
        path,
        version: figure.version(),
        modules: figure.modules(),
        pixels: (figure.width(), figure.height()),
    })
}
