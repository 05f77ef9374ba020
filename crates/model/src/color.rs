//! Foreground/background colors.
//!
//! Rendering only ever sees a full `#rrggbb` [`HexColor`]. The editable text
//! box is modelled by [`ColorInput`], which accepts partial values while the
//! user types and commits only complete ones.

use std::fmt;
use std::str::FromStr;

use qreatify_common::error::{QreatifyError, QreatifyResult};
use serde::{Deserialize, Serialize};

/// A complete `#` + six hex digit color.
///
/// The original spelling is kept, so `#FFaa00` displays as `#FFaa00`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn black() -> Self {
        Self("#000000".to_string())
    }

    pub fn white() -> Self {
        Self("#ffffff".to_string())
    }

    /// Parse a full six-digit color.
    pub fn parse(value: &str) -> QreatifyResult<Self> {
        match value.strip_prefix('#') {
            Some(digits) if digits.len() == 6 && is_hex(digits) => Ok(Self(value.to_string())),
            _ => Err(QreatifyError::invalid_color(value)),
        }
    }

    /// Build from an RGB triple, spelled in lowercase.
    pub fn from_rgb([r, g, b]: [u8; 3]) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> [u8; 3] {
        let digits = &self.0[1..];
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
        [channel(0), channel(2), channel(4)]
    }

    /// Opaque RGBA.
    pub fn rgba(&self) -> [u8; 4] {
        let [r, g, b] = self.rgb();
        [r, g, b, 255]
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = QreatifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = QreatifyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

/// Whether `text` is an acceptable in-progress color: `#` followed by at
/// most six hex digits.
pub fn is_partial_hex_color(text: &str) -> bool {
    text.strip_prefix('#')
        .map(|digits| digits.len() <= 6 && is_hex(digits))
        .unwrap_or(false)
}

fn is_hex(digits: &str) -> bool {
    digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// The color text box.
///
/// Edits that would leave the box in an invalid state are dropped. The
/// committed color only moves when the draft is a full six-digit value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorInput {
    draft: String,
    committed: HexColor,
}

impl ColorInput {
    pub fn new(initial: HexColor) -> Self {
        Self {
            draft: initial.as_str().to_string(),
            committed: initial,
        }
    }

    /// Apply an edit from the text box. Returns `false` when the edit was
    /// rejected and nothing changed.
    pub fn edit(&mut self, text: &str) -> bool {
        if !is_partial_hex_color(text) {
            return false;
        }
        self.draft = text.to_string();
        if let Ok(color) = HexColor::parse(text) {
            self.committed = color;
        }
        true
    }

    /// Set from a color picker.
    pub fn set_rgb(&mut self, rgb: [u8; 3]) {
        let color = HexColor::from_rgb(rgb);
        self.draft = color.as_str().to_string();
        self.committed = color;
    }

    /// Back to black.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current text box contents, possibly partial.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The color used for rendering.
    pub fn committed(&self) -> &HexColor {
        &self.committed
    }
}

impl Default for ColorInput {
    fn default() -> Self {
        Self::new(HexColor::black())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parse_accepts_full_colors_only() {
        assert!(HexColor::parse("#ff0000").is_ok());
        assert!(HexColor::parse("#FFaa00").is_ok());
        assert!(HexColor::parse("#fff").is_err());
        assert!(HexColor::parse("ff0000").is_err());
        assert!(HexColor::parse("#ff00001").is_err());
        assert!(HexColor::parse("#gg0000").is_err());
    }

    #[test]
    fn rgb_channels() {
        let color = HexColor::parse("#FF8001").unwrap();
        assert_eq!(color.rgb(), [255, 128, 1]);
        assert_eq!(color.rgba(), [255, 128, 1, 255]);
        assert_eq!(HexColor::from_rgb([255, 128, 1]).as_str(), "#ff8001");
    }

    #[test]
    fn partial_edits_keep_previous_commit() {
        let mut input = ColorInput::default();
        assert!(input.edit("#"));
        assert!(input.edit("#ff"));
        assert_eq!(input.draft(), "#ff");
        assert_eq!(input.committed().as_str(), "#000000");

        assert!(input.edit("#ff0000"));
        assert_eq!(input.committed().as_str(), "#ff0000");
    }

    #[test]
    fn rejected_edits_change_nothing() {
        let mut input = ColorInput::default();
        input.edit("#12ab");
        let before = input.clone();

        assert!(!input.edit("12ab"));
        assert!(!input.edit("#12abzz"));
        assert!(!input.edit("#1234567"));
        assert!(!input.edit(""));
        assert_eq!(input, before);
    }

    #[test]
    fn reset_returns_to_black() {
        let mut input = ColorInput::default();
        input.set_rgb([1, 2, 3]);
        input.reset();
        assert_eq!(input.draft(), "#000000");
        assert_eq!(input.committed(), &HexColor::black());
    }

    #[test]
    fn serde_uses_plain_strings() {
        let json = serde_json::to_string(&HexColor::parse("#abcdef").unwrap()).unwrap();
        assert_eq!(json, "\"#abcdef\"");
        assert!(serde_json::from_str::<HexColor>("\"#abc\"").is_err());
    }

    proptest! {
        #[test]
        fn valid_colors_read_back_unchanged(digits in "[0-9A-Fa-f]{6}") {
            let color = format!("#{digits}");
            let mut input = ColorInput::default();
            prop_assert!(input.edit(&color));
            prop_assert_eq!(input.committed().as_str(), color.as_str());
        }

        #[test]
        fn invalid_strings_never_move_the_commit(text in "\\PC*") {
            prop_assume!(!is_partial_hex_color(&text));
            let mut input = ColorInput::new(HexColor::parse("#123456").unwrap());
            prop_assert!(!input.edit(&text));
            prop_assert_eq!(input.committed().as_str(), "#123456");
            prop_assert_eq!(input.draft(), "#123456");
        }

        #[test]
        fn over_length_hex_is_rejected(digits in "[0-9a-f]{7,12}") {
            let mut input = ColorInput::default();
            let text = format!("#{digits}");
            prop_assert!(!input.edit(&text));
            prop_assert_eq!(input.committed(), &HexColor::black());
        }
    }
}
