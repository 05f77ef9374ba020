//! QR symbol rendering.
//!
//! Encoding is delegated to the `qrcode` crate. This module only maps
//! modules onto pixels in the requested colors.

use image::{Rgba, RgbaImage};
use qrcode::render::unicode;
use qrcode::{Color, EcLevel, QrCode};
use qreatify_common::error::{QreatifyError, QreatifyResult};
use qreatify_model::color::HexColor;
use qreatify_model::request::MAX_CANVAS_SIZE;

/// Trait for QR renderers.
pub trait QrRenderer: Send + Sync {
    /// Render `payload` into a `size`×`size` bitmap.
    fn render(
        &self,
        payload: &str,
        size: u32,
        foreground: &HexColor,
        background: &HexColor,
    ) -> QreatifyResult<RgbaImage>;

    /// Renderer name.
    fn name(&self) -> &str;
}

/// Renderer backed by the `qrcode` crate: level H, no quiet zone.
#[derive(Debug, Clone, Copy)]
pub struct QrcodeRenderer;

impl QrcodeRenderer {
    pub fn new() -> Self {
        Self
    }

    fn encode(&self, payload: &str) -> QreatifyResult<QrCode> {
        QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)
            .map_err(|e| QreatifyError::encode(e.to_string()))
    }
}

impl Default for QrcodeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl QrRenderer for QrcodeRenderer {
    fn render(
        &self,
        payload: &str,
        size: u32,
        foreground: &HexColor,
        background: &HexColor,
    ) -> QreatifyResult<RgbaImage> {
        if size == 0 {
            return Err(QreatifyError::render("canvas size must be positive"));
        }
        if size > MAX_CANVAS_SIZE {
            return Err(QreatifyError::render(format!(
                "canvas size {size} exceeds the {MAX_CANVAS_SIZE} pixel limit"
            )));
        }

        let code = self.encode(payload)?;
        let width = code.width();
        let colors = code.to_colors();

        let dark = Rgba(foreground.rgba());
        let light = Rgba(background.rgba());

        // Each pixel samples the module under it, so modules may differ by
        // one pixel when `size` is not a multiple of `width`.
        let bitmap = RgbaImage::from_fn(size, size, |x, y| {
            let mx = x as usize * width / size as usize;
            let my = y as usize * width / size as usize;
            if colors[my * width + mx] == Color::Dark {
                dark
            } else {
                light
            }
        });

        tracing::debug!(
            modules = width,
            size,
            payload_len = payload.len(),
            "Rendered QR bitmap"
        );
        Ok(bitmap)
    }

    fn name(&self) -> &str {
        "qrcode"
    }
}

/// Render `payload` as terminal text using half-block characters.
pub fn render_unicode(payload: &str) -> QreatifyResult<String> {
    let code = QrcodeRenderer::new().encode(payload)?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build())
}
