//! Print a QR code to the terminal.

use qreatify_render_engine::qr::render_unicode;

pub fn run(payload: &str) -> anyhow::Result<()> {
    if payload.is_empty() {
        println!("Your generated QR code will appear here.");
        return Ok(());
    }

    let symbol = render_unicode(payload)
        .map_err(|e| anyhow::anyhow!("Failed to encode payload: {e}"))?;
    println!();
    println!("{symbol}");
    Ok(())
}
