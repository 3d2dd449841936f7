//! qrfig binary entrypoint

use clap::Parser;
use qrfig::{QrfigConfig, Result, logging};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "qrfig",
    version,
    about = "Render a configured URL as a QR-code figure"
)]
struct Cli {
    /// Optional configuration file (toml/yaml). Defaults to _variables.yml / qrfig.toml in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the URL to encode (takes precedence over config file)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Override the output PNG path
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output the render summary as formatted JSON instead of human-readable text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = QrfigConfig::load(cli.config.as_deref())?;

    if let Some(url) = cli.url {
        config.url = Some(url);
    }

    if let Some(output) = cli.output {
        config.output = Some(output);
    }

    logging::init(&config.logging)?;

    info!(options = ?config.qr, "Rendering QR figure");

    let rendered = qrfig::generate(&config)?;

    if cli.json {
        let summary = json!({
            "path": rendered.path,
            "version": rendered.version,
            "modules": rendered.modules,
            "pixels": {
                "width": rendered.pixels.0,
                "height": rendered.pixels.1,
            },
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("QR figure written to {}", rendered.path.display());
        println!(
            "  symbol: version {} ({} x {} modules)",
            rendered.version, rendered.modules, rendered.modules
        );
        println!("  raster: {} x {} px", rendered.pixels.0, rendered.pixels.1);
    }

    Ok(())
}
