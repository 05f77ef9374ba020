//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{QreatifyError, QreatifyResult};

/// Default cap on uploaded logo size (5 MiB).
pub const DEFAULT_MAX_LOGO_BYTES: u64 = 5 * 1024 * 1024;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory exported PNG files are written to.
    pub output_dir: PathBuf,

    /// Initial generator settings.
    pub defaults: GeneratorDefaults,

    /// Largest logo file accepted for upload, in bytes.
    pub max_logo_bytes: u64,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Starting values for a fresh generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorDefaults {
    /// QR canvas edge length in pixels.
    pub canvas_size: u32,

    /// Logo edge as a percentage of the canvas.
    pub logo_size_percent: u32,

    /// Foreground (module) color, `#rrggbb`.
    pub foreground: String,

    /// Background color, `#rrggbb`.
    pub background: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "qreatify=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            defaults: GeneratorDefaults::default(),
            max_logo_bytes: DEFAULT_MAX_LOGO_BYTES,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            canvas_size: 250,
            logo_size_percent: 25,
            foreground: "#000000".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load config from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location. An existing file is only
    /// replaced when `overwrite` is set.
    pub fn save(&self, overwrite: bool) -> QreatifyResult<PathBuf> {
        let path = config_file_path();
        self.create_at(&path, overwrite)?;
        Ok(path)
    }

    /// Write config to `path`, refusing to replace an existing file unless
    /// `overwrite` is set.
    pub fn create_at(&self, path: &Path, overwrite: bool) -> QreatifyResult<()> {
        if !overwrite && path.exists() {
            return Err(QreatifyError::config(format!(
                "{} already exists",
                path.display()
            )));
        }
        self.save_to(path)
    }

    /// Save config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> QreatifyResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| QreatifyError::config(format!("cannot serialize config: {e}")))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Per-user QReatify configuration directory.
pub fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("qreatify")
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Standard location of the persisted theme preference.
pub fn preferences_file_path() -> PathBuf {
    config_dir().join("preferences.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fresh_generator() {
        let config = AppConfig::default();
        assert_eq!(config.defaults.canvas_size, 250);
        assert_eq!(config.defaults.logo_size_percent, 25);
        assert_eq!(config.defaults.foreground, "#000000");
        assert_eq!(config.defaults.background, "#ffffff");
        assert_eq!(config.max_logo_bytes, DEFAULT_MAX_LOGO_BYTES);
    }

    #[test]
    fn test_partial_file_fills_missing_fields() {
        let parsed: AppConfig =
            serde_json::from_str(r#"{ "defaults": { "canvas_size": 512 } }"#).unwrap();
        assert_eq!(parsed.defaults.canvas_size, 512);
        assert_eq!(parsed.defaults.logo_size_percent, 25);
        assert_eq!(parsed.logging.level, "info");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir()
            .join("qreatify_test_config")
            .join("config.json");
        let _ = std::fs::remove_file(&path);

        let mut config = AppConfig::default();
        config.output_dir = PathBuf::from("/tmp/exports");
        config.max_logo_bytes = 1024;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path);
        assert_eq!(loaded.output_dir, PathBuf::from("/tmp/exports"));
        assert_eq!(loaded.max_logo_bytes, 1024);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_create_refuses_existing_file() {
        let dir = std::env::temp_dir().join("qreatify_test_create_config");
        let path = dir.join("config.json");
        let _ = std::fs::remove_dir_all(&dir);

        AppConfig::default().create_at(&path, false).unwrap();
        let err = AppConfig::default().create_at(&path, false).unwrap_err();
        assert!(matches!(err, QreatifyError::Config { .. }));

        let mut config = AppConfig::default();
        config.max_logo_bytes = 42;
        config.create_at(&path, true).unwrap();
        assert_eq!(AppConfig::load_from(&path).max_logo_bytes, 42);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join("qreatify_test_bad_config");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let loaded = AppConfig::load_from(&path);
        assert_eq!(loaded.defaults.canvas_size, 250);

        std::fs::remove_dir_all(&dir).ok();
    }
}
