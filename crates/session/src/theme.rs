//! Theme controller.
//!
//! Owns the light/dark/system preference, resolves it against the
//! environment signal, and holds a subscription to that signal exactly while
//! the preference is `system`.

use std::sync::Arc;

use qreatify_model::theme::{AppliedTheme, ColorScheme, ThemePreference};
use tokio::sync::watch;

use crate::preference::PreferenceStore;
use crate::signal::ColorSchemeSignal;

pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    signal: Arc<ColorSchemeSignal>,
    subscription: Option<watch::Receiver<ColorScheme>>,
    preference: ThemePreference,
    environment: ColorScheme,
    applied: AppliedTheme,
}

impl ThemeController {
    /// Read the persisted preference and apply it.
    ///
    /// A store that fails to load falls back to `system`.
    pub fn init(store: Box<dyn PreferenceStore>, signal: Arc<ColorSchemeSignal>) -> Self {
        let preference = match store.load() {
            Ok(Some(preference)) => preference,
            Ok(None) => ThemePreference::System,
            Err(e) => {
                tracing::warn!("Failed to load theme preference, using system: {e}");
                ThemePreference::System
            }
        };

        let environment = signal.current();
        let mut controller = Self {
            store,
            signal,
            subscription: None,
            preference,
            environment,
            applied: preference.resolve(environment),
        };
        controller.sync_subscription();
        tracing::debug!(%preference, applied = %controller.applied, "Theme initialized");
        controller
    }

    /// Explicit user selection: persist, apply, and re-evaluate the
    /// environment subscription. Persistence failures are logged and the
    /// selection still applies for this session.
    pub fn select(&mut self, preference: ThemePreference) -> AppliedTheme {
        if let Err(e) = self.store.save(preference) {
            tracing::warn!("Failed to persist theme preference: {e}");
        }

        self.preference = preference;
        self.environment = self.signal.current();
        self.sync_subscription();
        self.applied = preference.resolve(self.environment);
        tracing::debug!(%preference, applied = %self.applied, "Theme selected");
        self.applied
    }

    /// Process pending environment notifications. Returns `true` when the
    /// applied theme changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.subscription.as_mut() else {
            return false;
        };

        match rx.has_changed() {
            Ok(true) => {
                self.environment = *rx.borrow_and_update();
                let applied = self.preference.resolve(self.environment);
                let changed = applied != self.applied;
                self.applied = applied;
                if changed {
                    tracing::debug!(applied = %applied, "Theme followed environment");
                }
                changed
            }
            Ok(false) | Err(_) => false,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn applied(&self) -> AppliedTheme {
        self.applied
    }

    pub fn is_dark(&self) -> bool {
        self.applied.is_dark()
    }

    /// Whether an environment subscription is currently held.
    pub fn is_following_environment(&self) -> bool {
        self.subscription.is_some()
    }

    fn sync_subscription(&mut self) {
        match (self.preference.follows_system(), self.subscription.is_some()) {
            (true, false) => self.subscription = Some(self.signal.subscribe()),
            (false, true) => self.subscription = None,
            _ => {}
        }
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("preference", &self.preference)
            .field("environment", &self.environment)
            .field("applied", &self.applied)
            .field("subscribed", &self.subscription.is_some())
            .finish()
    }
}
