//! Logo uploads.
//!
//! Reads complete asynchronously and may finish out of order. Every read is
//! tagged with a [`LogoToken`]; the [`LogoSlot`] only accepts the result of
//! the most recently issued token.

use std::path::Path;

use qreatify_common::error::{QreatifyError, QreatifyResult};
use qreatify_model::logo::LogoData;

/// File extensions offered by the logo picker.
pub const LOGO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Identifies one upload request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogoToken(u64);

/// Holds the current logo.
#[derive(Debug, Clone, Default)]
pub struct LogoSlot {
    latest: u64,
    current: Option<(LogoToken, LogoData)>,
}

impl LogoSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new upload. Any earlier token becomes stale.
    pub fn issue(&mut self) -> LogoToken {
        self.latest += 1;
        LogoToken(self.latest)
    }

    /// Store a finished upload if `token` is still the latest. Returns
    /// whether the logo was stored.
    pub fn commit(&mut self, token: LogoToken, logo: LogoData) -> bool {
        if token.0 != self.latest {
            tracing::debug!(token = token.0, latest = self.latest, "Discarding stale logo");
            return false;
        }
        tracing::debug!(token = token.0, bytes = logo.byte_len(), "Logo committed");
        self.current = Some((token, logo));
        true
    }

    /// Whether `token` is still the one the slot is waiting on.
    pub fn is_latest(&self, token: LogoToken) -> bool {
        token.0 == self.latest
    }

    /// Remove the logo and invalidate outstanding uploads.
    pub fn clear(&mut self) {
        self.latest += 1;
        self.current = None;
    }

    pub fn current(&self) -> Option<&LogoData> {
        self.current.as_ref().map(|(_, logo)| logo)
    }

    /// Token of the upload that produced the current logo. Changes whenever
    /// the logo does.
    pub fn current_token(&self) -> Option<LogoToken> {
        self.current.as_ref().map(|(token, _)| *token)
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }
}

/// Read an image file into a data URI.
///
/// Files over `max_bytes` and files that are not a recognized image format
/// are rejected with [`QreatifyError::InvalidLogo`].
pub async fn read_logo(path: &Path, max_bytes: u64) -> QreatifyResult<LogoData> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(QreatifyError::FileNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    if metadata.len() > max_bytes {
        return Err(QreatifyError::invalid_logo(format!(
            "{} is {} bytes, larger than the {} byte limit",
            path.display(),
            metadata.len(),
            max_bytes
        )));
    }

    let bytes = tokio::fs::read(path).await?;
    LogoData::from_bytes(&bytes)
}
