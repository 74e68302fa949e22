//! # Link Resolution and QR Rasters
//!
//! Every link cell of a record becomes a QR payload:
//!
//! | Link text | Payload |
//! |-----------|---------|
//! | missing or empty | fallback literal (`"No disponible"`) |
//! | whitespace only | search URL with an empty query |
//! | `http://…`, `https://…`, `@http…` | trimmed text, unchanged |
//! | `@handle` | search URL + `handle` |
//! | anything else | search URL + text |
//!
//! The payload is encoded with the `qrcode` crate at a fixed module size
//! (plus the standard 4-module quiet zone) and resized to the label's QR size.

use image::{GrayImage, Luma, imageops::FilterType};
use qrcode::{Color, QrCode};

use crate::error::SirocoError;

/// Modules of white border around the symbol.
pub const QUIET_ZONE: u32 = 4;

/// Prefixes treated as links that are already URLs.
const URL_PREFIXES: [&str; 3] = ["http://", "https://", "@http"];

/// True if the raw link cell carries no usable text.
pub fn is_blank(link: Option<&str>) -> bool {
    link.is_none_or(|text| text.trim().is_empty())
}

/// Turn a raw link cell into the text encoded in its QR code.
///
/// ```
/// use siroco::qr::resolve_link;
///
/// let search = "https://www.google.com/search?q=";
/// assert_eq!(resolve_link(Some("@handle"), "n/a", search), "https://www.google.com/search?q=handle");
/// assert_eq!(resolve_link(None, "n/a", search), "n/a");
/// ```
pub fn resolve_link(link: Option<&str>, fallback: &str, search_url: &str) -> String {
    let link = match link {
        None | Some("") => return fallback.to_string(),
        Some(text) => text.trim(),
    };

    if URL_PREFIXES.iter().any(|prefix| link.starts_with(prefix)) {
        return link.to_string();
    }

    let query = link.strip_prefix('@').unwrap_or(link);
    format!("{}{}", search_url, query)
}

/// Encode `payload` with `module_px` pixels per module, including the quiet zone.
pub fn encode(payload: &str, module_px: u32) -> Result<GrayImage, SirocoError> {
    let code = QrCode::new(payload.as_bytes())
        .map_err(|e| SirocoError::Qr(format!("Failed to encode {:?}: {}", payload, e)))?;

    let module_px = module_px.max(1);
    let modules = code.width() as u32;
    let side = (modules + 2 * QUIET_ZONE) * module_px;
    let colors = code.to_colors();

    let mut img = GrayImage::from_pixel(side, side, Luma([255u8]));
    for (i, color) in colors.iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let qx = (i as u32 % modules + QUIET_ZONE) * module_px;
        let qy = (i as u32 / modules + QUIET_ZONE) * module_px;
        for dy in 0..module_px {
            for dx in 0..module_px {
                img.put_pixel(qx + dx, qy + dy, Luma([0u8]));
            }
        }
    }

    Ok(img)
}

/// Encode `payload` and resize the symbol to `size` x `size` pixels.
pub fn render(payload: &str, module_px: u32, size: u32) -> Result<GrayImage, SirocoError> {
    let img = encode(payload, module_px)?;
    Ok(image::imageops::resize(&img, size, size, FilterType::Nearest))
}
