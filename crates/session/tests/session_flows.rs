use std::sync::Arc;

use qreatify_model::theme::{AppliedTheme, ColorScheme, ThemePreference};
use qreatify_session::generator::GeneratorState;
use qreatify_session::logo::read_logo;
use qreatify_session::preference::FilePreferenceStore;
use qreatify_session::signal::ColorSchemeSignal;
use qreatify_session::theme::ThemeController;

#[test]
fn theme_survives_reload() {
    let dir = std::env::temp_dir().join("qreatify_test_theme_reload");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("preferences.json");

    for (preference, scheme) in [
        (ThemePreference::Light, ColorScheme::Dark),
        (ThemePreference::Dark, ColorScheme::Light),
        (ThemePreference::System, ColorScheme::Dark),
    ] {
        let env = Arc::new(ColorSchemeSignal::new(scheme));

        let mut first = ThemeController::init(Box::new(FilePreferenceStore::new(&path)), env.clone());
        first.select(preference);
        let (applied, dark) = (first.applied(), first.is_dark());
        drop(first);

        let reloaded = ThemeController::init(Box::new(FilePreferenceStore::new(&path)), env);
        assert_eq!(reloaded.preference(), preference);
        assert_eq!(reloaded.applied(), applied);
        assert_eq!(reloaded.is_dark(), dark);
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn system_theme_tracks_environment_flip() {
    let dir = std::env::temp_dir().join("qreatify_test_theme_flip");
    let _ = std::fs::remove_dir_all(&dir);

    let env = Arc::new(ColorSchemeSignal::new(ColorScheme::Dark));
    let mut controller =
        ThemeController::init(Box::new(FilePreferenceStore::new(dir.join("p.json"))), env.clone());
    assert_eq!(controller.applied(), AppliedTheme::Dark);
    assert!(controller.is_dark());

    env.publish(ColorScheme::Light);
    assert!(controller.poll());
    assert_eq!(controller.applied(), AppliedTheme::Light);
    assert!(!controller.is_dark());

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn slower_older_upload_does_not_overwrite_newer_logo() {
    let dir = std::env::temp_dir().join("qreatify_test_logo_race");
    std::fs::create_dir_all(&dir).unwrap();
    let old_path = dir.join("old.png");
    let new_path = dir.join("new.png");
    std::fs::write(&old_path, b"\x89PNG\r\n\x1a\nold").unwrap();
    std::fs::write(&new_path, b"\x89PNG\r\n\x1a\nnew").unwrap();

    let mut state = GeneratorState::new();
    let old_token = state.begin_logo_upload();
    let new_token = state.begin_logo_upload();

    // The newer read finishes first.
    let newer = read_logo(&new_path, 1024).await.unwrap();
    assert!(state.finish_logo_upload(new_token, newer.clone()));

    let older = read_logo(&old_path, 1024).await.unwrap();
    assert!(!state.finish_logo_upload(old_token, older));

    assert_eq!(state.logo(), Some(&newer));

    std::fs::remove_dir_all(&dir).ok();
}
