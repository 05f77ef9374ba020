//! Render a QR code and export it to PNG.

use std::path::PathBuf;

use anyhow::Context;
use qreatify_common::config::AppConfig;
use qreatify_model::color::{ColorInput, HexColor};
use qreatify_model::request::LogoSizePercent;
use qreatify_render_engine::export::{export_png, ExportJob};
use qreatify_session::generator::GeneratorState;
use qreatify_session::logo::read_logo;

pub struct GenerateArgs {
    pub payload: String,
    pub color: Option<String>,
    pub size: Option<u32>,
    pub logo: Option<PathBuf>,
    pub logo_size: Option<u32>,
    pub output: Option<PathBuf>,
}

pub async fn run(config: &AppConfig, args: GenerateArgs) -> anyhow::Result<()> {
    if args.payload.is_empty() {
        anyhow::bail!("Nothing to encode: payload is empty");
    }

    let mut state = GeneratorState::from_defaults(&config.defaults);
    state.payload = args.payload;

    if let Some(color) = args.color {
        let color = HexColor::parse(&color)
            .with_context(|| format!("--color expects #rrggbb, got '{color}'"))?;
        state.color = ColorInput::new(color);
    }
    if let Some(size) = args.size {
        state.set_canvas_size(size);
    }
    if let Some(percent) = args.logo_size {
        state.logo_size = LogoSizePercent::new(percent);
    }
    if let Some(path) = args.logo {
        let token = state.begin_logo_upload();
        let logo = read_logo(&path, config.max_logo_bytes)
            .await
            .with_context(|| format!("Failed to load logo {}", path.display()))?;
        state.finish_logo_upload(token, logo);
    }

    let request = state
        .request()
        .context("Nothing to encode: payload is empty")?;
    let output_dir = args.output.unwrap_or_else(|| config.output_dir.clone());
    tracing::debug!(output = %output_dir.display(), "Resolved output directory");

    println!("Generating QR code");
    println!("  Size: {0}x{0}", request.canvas_size);
    println!("  Color: {}", request.foreground);
    match request.effective_logo_size() {
        Some(percent) => println!("  Logo: {}%", percent.get()),
        None => println!("  Logo: none"),
    }

    let path = export_png(ExportJob::new(request, output_dir))
        .await
        .context("Export failed")?;

    println!("Saved: {}", path.display());
    Ok(())
}
