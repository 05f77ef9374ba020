//! Environment color-scheme signal.

use qreatify_model::theme::ColorScheme;
use tokio::sync::watch;

/// Publishes the operating environment's color scheme.
///
/// Front-ends own one signal and push changes into it; controllers hold a
/// [`watch::Receiver`] only while they need notifications.
#[derive(Debug)]
pub struct ColorSchemeSignal {
    tx: watch::Sender<ColorScheme>,
}

impl ColorSchemeSignal {
    pub fn new(initial: ColorScheme) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Signal seeded from [`detect_color_scheme`].
    pub fn from_env() -> Self {
        Self::new(detect_color_scheme())
    }

    /// Report the current scheme. Subscribers are only notified when the
    /// value actually changes.
    pub fn publish(&self, scheme: ColorScheme) {
        self.tx.send_if_modified(|current| {
            if *current == scheme {
                false
            } else {
                tracing::debug!(?scheme, "Environment color scheme changed");
                *current = scheme;
                true
            }
        });
    }

    pub fn current(&self) -> ColorScheme {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ColorScheme> {
        self.tx.subscribe()
    }

    /// Live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ColorSchemeSignal {
    fn default() -> Self {
        Self::new(ColorScheme::Light)
    }
}

/// Best-effort read of the desktop color scheme from the environment.
///
/// `QREATIFY_COLOR_SCHEME` (`light`/`dark`) wins; otherwise a `GTK_THEME`
/// naming a dark variant counts as dark.
pub fn detect_color_scheme() -> ColorScheme {
    scheme_from_vars(
        std::env::var("QREATIFY_COLOR_SCHEME").ok().as_deref(),
        std::env::var("GTK_THEME").ok().as_deref(),
    )
}

fn scheme_from_vars(explicit: Option<&str>, gtk_theme: Option<&str>) -> ColorScheme {
    if let Some(scheme) = explicit.and_then(|value| value.parse().ok()) {
        return scheme;
    }
    match gtk_theme {
        Some(theme) if theme.to_ascii_lowercase().contains("dark") => ColorScheme::Dark,
        _ => ColorScheme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_notifies_only_on_change() {
        let signal = ColorSchemeSignal::new(ColorScheme::Light);
        let mut rx = signal.subscribe();

        signal.publish(ColorScheme::Light);
        assert!(!rx.has_changed().unwrap());

        signal.publish(ColorScheme::Dark);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), ColorScheme::Dark);
        assert_eq!(signal.current(), ColorScheme::Dark);
    }

    #[test]
    fn listener_count_tracks_receivers() {
        let signal = ColorSchemeSignal::default();
        assert_eq!(signal.listener_count(), 0);
        let rx = signal.subscribe();
        assert_eq!(signal.listener_count(), 1);
        drop(rx);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn explicit_variable_wins() {
        assert_eq!(scheme_from_vars(Some("dark"), None), ColorScheme::Dark);
        assert_eq!(
            scheme_from_vars(Some("light"), Some("Adwaita:dark")),
            ColorScheme::Light
        );
    }

    #[test]
    fn gtk_dark_variant_is_dark() {
        assert_eq!(scheme_from_vars(None, Some("Adwaita:dark")), ColorScheme::Dark);
        assert_eq!(scheme_from_vars(None, Some("Adwaita")), ColorScheme::Light);
        assert_eq!(scheme_from_vars(Some("bogus"), None), ColorScheme::Light);
    }
}
