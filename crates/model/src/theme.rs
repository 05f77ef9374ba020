//! Theme preference types.

use std::fmt;
use std::str::FromStr;

use qreatify_common::error::{QreatifyError, QreatifyResult};
use serde::{Deserialize, Serialize};

/// The user's persisted theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// Color scheme reported by the operating environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// The look actually applied to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppliedTheme {
    Light,
    Dark,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [Self::Light, Self::Dark, Self::System];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Capitalized name for menus ("Light", "Dark", "System").
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Resolve against the environment's current scheme.
    pub fn resolve(self, environment: ColorScheme) -> AppliedTheme {
        match (self, environment) {
            (Self::Light, _) => AppliedTheme::Light,
            (Self::Dark, _) => AppliedTheme::Dark,
            (Self::System, ColorScheme::Dark) => AppliedTheme::Dark,
            (Self::System, ColorScheme::Light) => AppliedTheme::Light,
        }
    }

    pub fn follows_system(self) -> bool {
        self == Self::System
    }
}

impl AppliedTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AppliedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = QreatifyError;

    fn from_str(s: &str) -> QreatifyResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(QreatifyError::preference(format!(
                "unknown theme '{other}', expected light, dark, or system"
            ))),
        }
    }
}

impl FromStr for ColorScheme {
    type Err = QreatifyError;

    fn from_str(s: &str) -> QreatifyResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(QreatifyError::preference(format!(
                "unknown color scheme '{other}', expected light or dark"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_preferences_ignore_environment() {
        for env in [ColorScheme::Light, ColorScheme::Dark] {
            assert_eq!(ThemePreference::Light.resolve(env), AppliedTheme::Light);
            assert_eq!(ThemePreference::Dark.resolve(env), AppliedTheme::Dark);
        }
    }

    #[test]
    fn system_follows_environment() {
        assert_eq!(
            ThemePreference::System.resolve(ColorScheme::Dark),
            AppliedTheme::Dark
        );
        assert_eq!(
            ThemePreference::System.resolve(ColorScheme::Light),
            AppliedTheme::Light
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
        assert_eq!(" system ".parse::<ThemePreference>().unwrap(), ThemePreference::System);
        assert!("sepia".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ThemePreference::System).unwrap(),
            "\"system\""
        );
        assert_eq!(ThemePreference::default(), ThemePreference::System);
    }
}
