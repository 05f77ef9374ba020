//! Show effective configuration, or write it out as a starting file.

use qreatify_common::config::{config_file_path, preferences_file_path, AppConfig};

pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    println!("Config file: {}", config_file_path().display());
    println!("Preferences: {}", preferences_file_path().display());
    println!();
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

/// Write the effective configuration to the standard location.
pub fn init(config: &AppConfig, force: bool) -> anyhow::Result<()> {
    let path = config.save(force)?;
    println!("Wrote {}", path.display());
    Ok(())
}
