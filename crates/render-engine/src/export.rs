//! Export jobs: render, composite, and write one PNG file.

use std::path::PathBuf;
use std::sync::Arc;

use image::DynamicImage;
use qreatify_common::error::{QreatifyError, QreatifyResult};
use qreatify_model::filename::export_file_name;
use qreatify_model::logo::LogoData;
use qreatify_model::request::GenerationRequest;

use crate::compositor::composite;
use crate::qr::{QrRenderer, QrcodeRenderer};

/// An export job ready to be rendered.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// What to render.
    pub request: GenerationRequest,

    /// Directory the file is written into.
    pub output_dir: PathBuf,
}

impl ExportJob {
    pub fn new(request: GenerationRequest, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            request,
            output_dir: output_dir.into(),
        }
    }

    /// Full path of the file this job writes.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(export_file_name(&self.request.payload))
    }
}

/// Export the request to `<output_dir>/<stem>_qr.png` using the default
/// renderer.
pub async fn export_png(job: ExportJob) -> QreatifyResult<PathBuf> {
    export_png_with(job, Arc::new(QrcodeRenderer::new())).await
}

/// Export with an explicit renderer.
///
/// Writes exactly one file per call. When a logo is present the write only
/// happens after the logo has been decoded.
pub async fn export_png_with(
    job: ExportJob,
    renderer: Arc<dyn QrRenderer>,
) -> QreatifyResult<PathBuf> {
    if job.request.payload.is_empty() {
        return Err(QreatifyError::EmptyPayload);
    }

    let output_path = job.output_path();
    tracing::info!(
        output = %output_path.display(),
        size = job.request.canvas_size,
        logo = job.request.logo.is_some(),
        renderer = renderer.name(),
        "Starting export"
    );

    let logo = match job.request.logo.clone() {
        Some(logo) => Some(decode_logo(logo).await?),
        None => None,
    };

    let request = job.request;
    let png = tokio::task::spawn_blocking(move || {
        let bitmap = renderer.render(
            &request.payload,
            request.canvas_size,
            &request.foreground,
            &request.background,
        )?;
        composite(&bitmap, logo.as_ref(), request.logo_size)
    })
    .await
    .map_err(|e| QreatifyError::render(format!("export task failed: {e}")))??;

    if !job.output_dir.as_os_str().is_empty() {
        tokio::fs::create_dir_all(&job.output_dir).await?;
    }
    if tokio::fs::try_exists(&output_path).await.unwrap_or(false) {
        tracing::warn!(output = %output_path.display(), "Replacing previous export");
    }
    tokio::fs::write(&output_path, &png).await?;

    tracing::info!(output = %output_path.display(), bytes = png.len(), "Export complete");
    Ok(output_path)
}

/// Decode a logo off the calling task.
pub async fn decode_logo(logo: LogoData) -> QreatifyResult<DynamicImage> {
    tokio::task::spawn_blocking(move || logo.decode())
        .await
        .map_err(|e| QreatifyError::render(format!("logo decode task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_uses_payload_stem() {
        let job = ExportJob::new(GenerationRequest::new("hello"), "/tmp/out");
        assert_eq!(job.output_path(), PathBuf::from("/tmp/out/hello_qr.png"));
    }

    #[tokio::test]
    async fn empty_payload_is_refused() {
        let dir = std::env::temp_dir().join("qreatify_test_export_empty");
        let job = ExportJob::new(GenerationRequest::new(""), &dir);
        let err = export_png(job).await.unwrap_err();
        assert!(matches!(err, QreatifyError::EmptyPayload));
        assert!(!dir.join("qrcode_qr.png").exists());
    }
}
