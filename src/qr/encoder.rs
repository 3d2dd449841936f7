//! QR code encoder

use crate::error::{Error, Result};
use crate::qr::QrImage;
use image::{DynamicImage, Luma};
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode, Version};

/// QR code encoder holding the symbol parameters
///
/// Defaults reproduce the classic figure pipeline: version 1 as the smallest
/// symbol, Low error correction, 10 pixels per module and the standard
/// 4-module quiet zone. With `fit` enabled the version grows to the smallest
/// one that holds the input.
#[derive(Debug, Clone)]
pub struct QrEncoder {
    /// Smallest symbol version to attempt (1..=40)
    pub min_version: i16,
    /// Error correction level
    pub ec_level: EcLevel,
    /// Rendered pixels per module
    pub box_size: u32,
    /// Include the standard 4-module quiet-zone border
    pub quiet_zone: bool,
    /// Grow the symbol version when data does not fit `min_version`
    pub fit: bool,
}

impl QrEncoder {
    /// Create a new QR encoder with the default figure parameters
    pub fn new() -> Self {
        Self {
            min_version: 1,
            ec_level: EcLevel::L,
            box_size: 10,
            quiet_zone: true,
            fit: true,
        }
    }

    /// Create a new QR encoder with a specific error correction level
    pub fn with_ec_level(ec_level: EcLevel) -> Self {
        Self {
            ec_level,
            ..Self::new()
        }
    }

    /// Encode a string into a QR code image
    pub fn encode(&self, data: &str) -> Result<QrImage> {
        if data.is_empty() {
            return Err(Error::QrEncode(
                "cannot encode an empty string".to_string(),
            ));
        }

        let code = self.build_code(data.as_bytes())?;

        let version = match code.version() {
            Version::Normal(v) => v,
            // Micro symbols are never produced by the constructors below.
            Version::Micro(v) => v,
        };
        if version != self.min_version {
            tracing::debug!(
                requested = self.min_version,
                used = version,
                "symbol version grown to fit input"
            );
        }

        let modules = code.width() as u32;
        let image = code
            .render::<Luma<u8>>()
            .quiet_zone(self.quiet_zone)
            .module_dimensions(self.box_size, self.box_size)
            .build();

        Ok(QrImage::new(
            DynamicImage::ImageLuma8(image),
            modules,
            version,
        ))
    }

    fn build_code(&self, data: &[u8]) -> Result<QrCode> {
        match QrCode::with_version(data, Version::Normal(self.min_version), self.ec_level) {
            Ok(code) => Ok(code),
            Err(QrError::DataTooLong) if self.fit => {
                QrCode::with_error_correction_level(data, self.ec_level).map_err(|e| {
                    Error::QrEncode(format!(
                        "input of {} bytes does not fit any symbol version: {e}",
                        data.len()
                    ))
                })
            }
            Err(e) => Err(Error::QrEncode(format!(
                "input of {} bytes does not fit version {}: {e}",
                data.len(),
                self.min_version
            ))),
        }
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}
