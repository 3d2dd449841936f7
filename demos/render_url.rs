//! Render a URL into a QR figure without a configuration file
//!
//! Usage: cargo run --example render_url

use qrfig::{QrEncoder, output};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let encoder = QrEncoder::new();

    let figure = encoder.encode("https://example.com")?;
    output::save_png(&figure, Path::new("figures/qr_code.png"))?;

    println!("✓ QR figure generated and saved to figures/qr_code.png");
    println!(
        "  symbol: version {} ({} modules per side)",
        figure.version(),
        figure.modules()
    );

    Ok(())
}
