//! Generation requests.
//!
//! A request is rebuilt from the current UI state on every render and never
//! stored.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::logo::LogoData;

/// Default canvas edge length in pixels.
pub const DEFAULT_CANVAS_SIZE: u32 = 250;

/// Largest canvas edge length accepted anywhere, in pixels.
pub const MAX_CANVAS_SIZE: u32 = 4096;

/// Clamp a canvas edge length into `1..=MAX_CANVAS_SIZE`.
pub fn clamp_canvas_size(size: u32) -> u32 {
    size.clamp(1, MAX_CANVAS_SIZE)
}

/// Logo edge length as a percentage of the canvas, always within
/// [`LogoSizePercent::MIN`]..=[`LogoSizePercent::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct LogoSizePercent(u32);

impl LogoSizePercent {
    pub const MIN: u32 = 10;
    pub const MAX: u32 = 30;
    pub const DEFAULT: LogoSizePercent = LogoSizePercent(25);

    /// Clamp into range, the way a slider would.
    pub fn new(percent: u32) -> Self {
        Self(percent.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for LogoSizePercent {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for LogoSizePercent {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<LogoSizePercent> for u32 {
    fn from(value: LogoSizePercent) -> Self {
        value.0
    }
}

/// Everything needed to render and export one QR code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Text encoded into the symbol.
    pub payload: String,

    /// Module color.
    pub foreground: HexColor,

    /// Background color.
    pub background: HexColor,

    /// Canvas edge length in pixels.
    pub canvas_size: u32,

    /// Optional centered logo.
    pub logo: Option<LogoData>,

    /// Logo size; ignored when `logo` is `None`.
    pub logo_size: LogoSizePercent,
}

impl GenerationRequest {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            foreground: HexColor::black(),
            background: HexColor::white(),
            canvas_size: DEFAULT_CANVAS_SIZE,
            logo: None,
            logo_size: LogoSizePercent::DEFAULT,
        }
    }

    /// Logo size that actually applies, if any.
    pub fn effective_logo_size(&self) -> Option<LogoSizePercent> {
        self.logo.as_ref().map(|_| self.logo_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_size_clamps() {
        assert_eq!(LogoSizePercent::new(5).get(), 10);
        assert_eq!(LogoSizePercent::new(31).get(), 30);
        assert_eq!(LogoSizePercent::new(20).get(), 20);
        assert_eq!(LogoSizePercent::default().get(), 25);
    }

    #[test]
    fn canvas_size_is_bounded() {
        assert_eq!(clamp_canvas_size(0), 1);
        assert_eq!(clamp_canvas_size(250), 250);
        assert_eq!(clamp_canvas_size(200_000), MAX_CANVAS_SIZE);
    }

    #[test]
    fn logo_size_ignored_without_logo() {
        let mut request = GenerationRequest::new("hello");
        request.logo_size = LogoSizePercent::new(12);
        assert_eq!(request.effective_logo_size(), None);
    }

    #[test]
    fn deserialized_logo_size_is_clamped() {
        let size: LogoSizePercent = serde_json::from_str("99").unwrap();
        assert_eq!(size.get(), 30);
    }
}
