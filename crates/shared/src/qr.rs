//! QR code generation for booking confirmations.
//!
//! The payload is a human-readable text block, not a signed verification
//! token: the image is not cryptographically bound to the booking record,
//! so a visually similar QR is trivially forgeable. Known limitation.

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{GrayImage, ImageFormat, Luma};
use qrcode::{Color, QrCode};
use std::io::Cursor;
use thiserror::Error;

/// Error type for QR generation.
#[derive(Debug, Error)]
pub enum QrError {
    #[error("Failed to build QR code: {0}")]
    Encode(String),

    #[error("Failed to render QR image: {0}")]
    Render(String),
}

/// Pixels per QR module.
const MODULE_SCALE: u32 = 8;
/// Quiet zone width in modules, per the QR spec.
const QUIET_ZONE: u32 = 4;

/// Renders `payload` as a PNG QR code and returns it as a
/// `data:image/png;base64,` URI suitable for embedding in a client.
pub fn data_uri(payload: &str) -> Result<String, QrError> {
    let code = QrCode::new(payload.as_bytes()).map_err(|e| QrError::Encode(e.to_string()))?;
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let dim = (modules + 2 * QUIET_ZONE) * MODULE_SCALE;

    let img = GrayImage::from_fn(dim, dim, |x, y| {
        let mx = (x / MODULE_SCALE).checked_sub(QUIET_ZONE);
        let my = (y / MODULE_SCALE).checked_sub(QUIET_ZONE);
        match (mx, my) {
            (Some(mx), Some(my)) if mx < modules && my < modules => {
                match colors[(my * modules + mx) as usize] {
                    Color::Dark => Luma([0u8]),
                    Color::Light => Luma([255u8]),
                }
            }
            _ => Luma([255u8]),
        }
    });

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| QrError::Render(e.to_string()))?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_png_data_uri() {
        let uri = data_uri("Booking Confirmed\nEvent: Rust Conf").unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));

        // The base64 payload must decode to a PNG (magic bytes).
        let b64 = uri.strip_prefix("data:image/png;base64,").unwrap();
        let bytes = STANDARD.decode(b64).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn deterministic_for_same_payload() {
        let a = data_uri("same payload").unwrap();
        let b = data_uri("same payload").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_payloads_differ() {
        let a = data_uri("payload one").unwrap();
        let b = data_uri("payload two").unwrap();
        assert_ne!(a, b);
    }
}
