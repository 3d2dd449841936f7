//! qrfig runtime configuration handling

use crate::error::{Error, Result};
use crate::qr::QrEncoder;
use qrcode::EcLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default output location for the rendered figure
pub const DEFAULT_FIGURE_PATH: &str = "figures/qr_code.png";

/// Top-level configuration structure loaded from disk or environment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QrfigConfig {
    /// The URL to encode; the only key the original `_variables.yml` consumers require
    pub url: Option<String>,
    /// Override for the output PNG path
    pub output: Option<PathBuf>,
    /// QR symbol parameters
    pub qr: QrOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl Default for QrfigConfig {
    fn default() -> Self {
        Self {
            url: None,
            output: None,
            qr: QrOptions::default(),
            logging: LoggingOptions::default(),
        }
    }
}

impl QrfigConfig {
    /// Load configuration from an explicit path or fall back to discovered defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit_path {
            Self::from_file(path)?
        } else if let Some(path) = Self::discover_file()? {
            tracing::info!("Using configuration file: {}", path.display());
            Self::from_file(&path)?
        } else {
            tracing::debug!("No _variables.yml / qrfig.toml found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Attempt to locate a configuration file in common locations.
    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        for candidate in ["_variables.yml", "qrfig.toml", "qrfig.yaml", "qrfig.yml"] {
            let path = cwd.join(candidate);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let base = PathBuf::from(xdg_config).join("qrfig");
            for candidate in ["config.toml", "config.yaml"] {
                let path = base.join(candidate);
                if path.exists() {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    /// Read configuration from a concrete file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "toml" => toml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
            }),
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse YAML {}: {e}", path.display()))
            }),
            other => Err(Error::Config(format!(
                "Unsupported config format '{}', expected toml/yaml",
                other
            ))),
        }
    }

    /// Apply environment variable overrides after file/default loading.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var("QRFIG_URL") {
            self.url = Some(url);
        }
        if let Ok(output) = env::var("QRFIG_OUTPUT") {
            if !output.trim().is_empty() {
                self.output = Some(PathBuf::from(output));
            }
        }
        self.qr.apply_env_overrides();
        self.logging.apply_env_overrides();
    }

    /// The URL to encode, validated to be present and non-empty.
    pub fn url(&self) -> Result<&str> {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            Some(_) => Err(Error::Config("'url' value is empty".to_string())),
            None => Err(Error::Config(
                "missing 'url' key in configuration".to_string(),
            )),
        }
    }

    /// Resolved output path for the rendered figure.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FIGURE_PATH))
    }

    /// Produce a fully resolved encoder ready to render the symbol.
    pub fn encoder(&self) -> Result<QrEncoder> {
        self.qr.to_encoder()
    }
}

/// User-friendly symbol overrides that are merged on top of `QrEncoder::default()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QrOptions {
    /// Override for the smallest symbol version to attempt (1..=40).
    pub version: Option<i16>,
    /// Override for the error-correction level.
    pub ec_level: Option<ErrorCorrection>,
    /// Override for rendered pixels per module.
    pub box_size: Option<u32>,
    /// Override for the standard 4-module quiet-zone border.
    pub quiet_zone: Option<bool>,
    /// Override for growing the version when data does not fit the minimum.
    pub fit: Option<bool>,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            version: None,
            ec_level: None,
            box_size: None,
            quiet_zone: None,
            fit: None,
        }
    }
}

impl QrOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(version) = env::var("QRFIG_QR_VERSION") {
            self.version = version.parse::<i16>().ok();
        }
        if let Ok(level) = env::var("QRFIG_QR_EC_LEVEL") {
            if let Ok(parsed) = level.parse::<ErrorCorrection>() {
                self.ec_level = Some(parsed);
            }
        }
        if let Ok(box_size) = env::var("QRFIG_QR_BOX_SIZE") {
            self.box_size = box_size.parse::<u32>().ok();
        }
        if let Ok(quiet_zone) = env::var("QRFIG_QR_QUIET_ZONE") {
            match quiet_zone.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.quiet_zone = Some(false),
                "1" | "true" | "on" => self.quiet_zone = Some(true),
                _ => {}
            }
        }
        if let Ok(fit) = env::var("QRFIG_QR_FIT") {
            match fit.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.fit = Some(false),
                "1" | "true" | "on" => self.fit = Some(true),
                _ => {}
            }
        }
    }

    /// Merge overrides onto the default encoder parameters.
    pub fn to_encoder(&self) -> Result<QrEncoder> {
        let mut encoder = QrEncoder::default();

        if let Some(version) = self.version {
            if !(1..=40).contains(&version) {
                return Err(Error::Config(format!(
                    "QR version must be between 1 and 40, got {version}"
                )));
            }
            encoder.min_version = version;
        }

        if let Some(level) = self.ec_level {
            encoder.ec_level = level.to_ec_level();
        }

        if let Some(box_size) = self.box_size {
            if box_size == 0 {
                return Err(Error::Config(
                    "QR box size must be at least 1 pixel".to_string(),
                ));
            }
            encoder.box_size = box_size;
        }

        if let Some(quiet_zone) = self.quiet_zone {
            encoder.quiet_zone = quiet_zone;
        }

        if let Some(fit) = self.fit {
            encoder.fit = fit;
        }

        Ok(encoder)
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `QRFIG_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// Force ANSI colors in stdout logging
    pub color: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            color: true,
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("QRFIG_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(file) = env::var("QRFIG_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Ok(color) = env::var("QRFIG_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
    }
}

/// Supported error-correction levels for the rendered symbol
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    /// ~7% of codewords can be restored
    Low,
    /// ~15% of codewords can be restored
    Medium,
    /// ~25% of codewords can be restored
    Quartile,
    /// ~30% of codewords can be restored
    High,
}

impl ErrorCorrection {
    /// Parse an error-correction identifier (case-insensitive) from a string slice.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "low" | "l" => Some(Self::Low),
            "medium" | "m" => Some(Self::Medium),
            "quartile" | "q" => Some(Self::Quartile),
            "high" | "h" => Some(Self::High),
            _ => None,
        }
    }

    /// Convert to the encoder library's level type.
    pub fn to_ec_level(self) -> EcLevel {
        match self {
            Self::Low => EcLevel::L,
            Self::Medium => EcLevel::M,
            Self::Quartile => EcLevel::Q,
            Self::High => EcLevel::H,
        }
    }
}

impl Default for ErrorCorrection {
    fn default() -> Self {
        Self::Low
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            format!("Unsupported error-correction level '{value}', expected low/medium/quartile/high")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_with_extra_keys_only_consumes_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_variables.yml");
        fs::write(
            &path,
            "title: Example site\nurl: https://example.com\nauthor: nobody\n",
        )
        .unwrap();

        let config = QrfigConfig::from_file(&path).unwrap();
        assert_eq!(config.url().unwrap(), "https://example.com");
        assert_eq!(config.output_path(), PathBuf::from(DEFAULT_FIGURE_PATH));
    }

    #[test]
    fn toml_sections_configure_symbol_and_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qrfig.toml");
        fs::write(
            &path,
            concat!(
                "url = \"https://example.com\"\n",
                "output = \"out/badge.png\"\n",
                "\n",
                "[qr]\n",
                "version = 2\n",
                "ec_level = \"medium\"\n",
                "box_size = 4\n",
            ),
        )
        .unwrap();

        let config = QrfigConfig::from_file(&path).unwrap();
        assert_eq!(config.output_path(), PathBuf::from("out/badge.png"));

        let encoder = config.encoder().unwrap();
        assert_eq!(encoder.min_version, 2);
        assert_eq!(encoder.ec_level, EcLevel::M);
        assert_eq!(encoder.box_size, 4);
    }

    #[test]
    fn missing_url_key_is_a_config_error() {
        let config = QrfigConfig::default();
        assert!(matches!(config.url(), Err(Error::Config(_))));
    }

    #[test]
    fn blank_url_value_is_a_config_error() {
        let config = QrfigConfig {
            url: Some("   ".to_string()),
            ..QrfigConfig::default()
        };
        assert!(matches!(config.url(), Err(Error::Config(_))));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qrfig.ini");
        fs::write(&path, "url=https://example.com\n").unwrap();

        assert!(matches!(
            QrfigConfig::from_file(&path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_variables.yml");
        fs::write(&path, "url: [unclosed\n").unwrap();

        assert!(matches!(
            QrfigConfig::from_file(&path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn out_of_range_version_is_rejected() {
        for version in [0, 41] {
            let options = QrOptions {
                version: Some(version),
                ..QrOptions::default()
            };
            assert!(matches!(options.to_encoder(), Err(Error::Config(_))));
        }
    }

    #[test]
    fn zero_box_size_is_rejected() {
        let options = QrOptions {
            box_size: Some(0),
            ..QrOptions::default()
        };
        assert!(matches!(options.to_encoder(), Err(Error::Config(_))));
    }

    #[test]
    fn ec_level_parses_names_and_letters() {
        assert_eq!(ErrorCorrection::parse("low"), Some(ErrorCorrection::Low));
        assert_eq!(ErrorCorrection::parse("M"), Some(ErrorCorrection::Medium));
        assert_eq!(
            "quartile".parse::<ErrorCorrection>().unwrap(),
            ErrorCorrection::Quartile
        );
        assert!("ultra".parse::<ErrorCorrection>().is_err());
    }
}
