//! Generator form state.

use qreatify_common::config::GeneratorDefaults;
use qreatify_model::color::{ColorInput, HexColor};
use qreatify_model::logo::LogoData;
use qreatify_model::request::{
    clamp_canvas_size, GenerationRequest, LogoSizePercent, DEFAULT_CANVAS_SIZE,
};

use crate::logo::{LogoSlot, LogoToken};

/// Everything the user has entered so far.
#[derive(Debug, Clone)]
pub struct GeneratorState {
    /// Text to encode.
    pub payload: String,

    /// Foreground color text box.
    pub color: ColorInput,

    /// Logo size slider.
    pub logo_size: LogoSizePercent,

    logo: LogoSlot,
    background: HexColor,
    canvas_size: u32,
}

impl GeneratorState {
    pub fn new() -> Self {
        Self {
            payload: String::new(),
            color: ColorInput::default(),
            logo_size: LogoSizePercent::DEFAULT,
            logo: LogoSlot::new(),
            background: HexColor::white(),
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }

    /// Start from configured defaults. Unparseable colors keep the built-in
    /// black on white.
    pub fn from_defaults(defaults: &GeneratorDefaults) -> Self {
        let mut state = Self::new();
        match HexColor::parse(&defaults.foreground) {
            Ok(color) => state.color = ColorInput::new(color),
            Err(e) => tracing::warn!("Ignoring configured foreground: {e}"),
        }
        match HexColor::parse(&defaults.background) {
            Ok(color) => state.background = color,
            Err(e) => tracing::warn!("Ignoring configured background: {e}"),
        }
        state.logo_size = LogoSizePercent::new(defaults.logo_size_percent);
        state.set_canvas_size(defaults.canvas_size);
        state
    }

    /// Preview container resized: the canvas is the largest square that
    /// fits, capped at [`MAX_CANVAS_SIZE`](qreatify_model::request::MAX_CANVAS_SIZE).
    pub fn resize(&mut self, width: f32, height: f32) {
        let size = width.min(height).floor();
        self.canvas_size = if size.is_finite() && size >= 1.0 {
            clamp_canvas_size(size as u32)
        } else {
            1
        };
    }

    /// Set an explicit canvas size, clamped into range.
    pub fn set_canvas_size(&mut self, size: u32) {
        self.canvas_size = clamp_canvas_size(size);
    }

    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    pub fn background(&self) -> &HexColor {
        &self.background
    }

    /// Begin a logo upload.
    pub fn begin_logo_upload(&mut self) -> LogoToken {
        self.logo.issue()
    }

    /// Finish a logo upload. Stale results are dropped.
    pub fn finish_logo_upload(&mut self, token: LogoToken, logo: LogoData) -> bool {
        self.logo.commit(token, logo)
    }

    /// Whether `token` belongs to the newest upload.
    pub fn is_pending_logo(&self, token: LogoToken) -> bool {
        self.logo.is_latest(token)
    }

    pub fn logo(&self) -> Option<&LogoData> {
        self.logo.current()
    }

    /// Identity of the current logo, cheap to compare.
    pub fn logo_token(&self) -> Option<LogoToken> {
        self.logo.current_token()
    }

    /// Whether save/clear should be offered.
    pub fn can_export(&self) -> bool {
        !self.payload.is_empty()
    }

    /// Snapshot for rendering; `None` while the payload is empty.
    pub fn request(&self) -> Option<GenerationRequest> {
        if !self.can_export() {
            return None;
        }
        Some(GenerationRequest {
            payload: self.payload.clone(),
            foreground: self.color.committed().clone(),
            background: self.background.clone(),
            canvas_size: self.canvas_size,
            logo: self.logo.current().cloned(),
            logo_size: self.logo_size,
        })
    }

    /// Reset the form. Canvas size and background are layout/config and
    /// stay as they are.
    pub fn clear(&mut self) {
        self.payload.clear();
        self.logo.clear();
        self.logo_size = LogoSizePercent::DEFAULT;
        self.color.reset();
    }
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self::new()
    }
}
