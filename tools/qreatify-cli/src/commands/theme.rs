//! Show or change the persisted theme preference.

use std::sync::Arc;

use qreatify_model::theme::ThemePreference;
use qreatify_session::preference::FilePreferenceStore;
use qreatify_session::signal::ColorSchemeSignal;
use qreatify_session::theme::ThemeController;

fn controller() -> (ThemeController, FilePreferenceStore) {
    let store = FilePreferenceStore::standard();
    let signal = Arc::new(ColorSchemeSignal::from_env());
    (
        ThemeController::init(Box::new(store.clone()), signal),
        store,
    )
}

pub fn show() -> anyhow::Result<()> {
    let (controller, store) = controller();

    println!("Theme: {}", controller.preference().label());
    println!("  Applied: {}", controller.applied());
    println!("  Dark mode: {}", controller.is_dark());
    println!("  Stored in: {}", store.path().display());
    Ok(())
}

pub fn set(theme: &str) -> anyhow::Result<()> {
    let preference: ThemePreference = theme
        .parse()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let (mut controller, store) = controller();
    let applied = controller.select(preference);

    println!("Theme set to {}", preference.label());
    println!("  Applied: {applied}");
    println!("  Stored in: {}", store.path().display());
    Ok(())
}
