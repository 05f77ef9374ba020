use eframe::egui;
use image::DynamicImage;
use qreatify_common::error::{QreatifyError, QreatifyResult};
use qreatify_model::color::HexColor;
use qreatify_model::request::{GenerationRequest, LogoSizePercent};
use qreatify_render_engine::compositor::composite_image;
use qreatify_render_engine::qr::{QrRenderer, QrcodeRenderer};
use qreatify_session::logo::LogoToken;

/// What the cached texture was rendered from. The logo is identified by its
/// upload token rather than its data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PreviewKey {
    payload: String,
    foreground: HexColor,
    background: HexColor,
    canvas_size: u32,
    logo: Option<(LogoToken, LogoSizePercent)>,
}

impl PreviewKey {
    fn new(request: &GenerationRequest, logo: Option<LogoToken>) -> Self {
        Self {
            payload: request.payload.clone(),
            foreground: request.foreground.clone(),
            background: request.background.clone(),
            canvas_size: request.canvas_size,
            logo: logo.zip(request.effective_logo_size()),
        }
    }
}

/// Cached preview texture, rebuilt only when the inputs change.
pub struct QrPreview {
    renderer: QrcodeRenderer,
    rendered: Option<(PreviewKey, egui::TextureHandle)>,
}

impl QrPreview {
    pub fn new() -> Self {
        Self {
            renderer: QrcodeRenderer::new(),
            rendered: None,
        }
    }

    /// Texture for `request`, re-rendering if anything changed since the
    /// last call. `logo` is the token and decoded form of `request.logo`.
    pub fn texture(
        &mut self,
        ctx: &egui::Context,
        request: &GenerationRequest,
        logo: Option<(LogoToken, &DynamicImage)>,
    ) -> QreatifyResult<&egui::TextureHandle> {
        let key = PreviewKey::new(request, logo.map(|(token, _)| token));
        let stale = match &self.rendered {
            Some((previous, _)) => *previous != key,
            None => true,
        };

        if stale {
            let bitmap = self.renderer.render(
                &request.payload,
                request.canvas_size,
                &request.foreground,
                &request.background,
            )?;
            let logo = request.logo.as_ref().and(logo.map(|(_, image)| image));
            let canvas = composite_image(&bitmap, logo, request.logo_size)?;
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [canvas.width() as usize, canvas.height() as usize],
                canvas.as_raw(),
            );
            let texture = ctx.load_texture("qr-preview", image, egui::TextureOptions::NEAREST);
            self.rendered = Some((key, texture));
        }

        self.rendered
            .as_ref()
            .map(|(_, texture)| texture)
            .ok_or_else(|| QreatifyError::render("preview unavailable"))
    }

    pub fn clear(&mut self) {
        self.rendered = None;
    }
}
