//! Error types shared across QReatify crates.

use std::path::PathBuf;

/// Top-level error type for QReatify operations.
#[derive(Debug, thiserror::Error)]
pub enum QreatifyError {
    #[error("Invalid color: {value}")]
    InvalidColor { value: String },

    #[error("Invalid logo: {message}")]
    InvalidLogo { message: String },

    #[error("Nothing to export: payload is empty")]
    EmptyPayload,

    #[error("QR encoding error: {message}")]
    Encode { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("Preference error: {message}")]
    Preference { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using QreatifyError.
pub type QreatifyResult<T> = Result<T, QreatifyError>;

impl QreatifyError {
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    pub fn invalid_logo(msg: impl Into<String>) -> Self {
        Self::InvalidLogo {
            message: msg.into(),
        }
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode {
            message: msg.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    pub fn preference(msg: impl Into<String>) -> Self {
        Self::Preference {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
