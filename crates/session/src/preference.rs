//! Theme preference persistence.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use qreatify_common::config::preferences_file_path;
use qreatify_common::error::{QreatifyError, QreatifyResult};
use qreatify_model::theme::ThemePreference;
use serde::{Deserialize, Serialize};

/// Storage for the single persisted preference.
pub trait PreferenceStore: Send {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> QreatifyResult<Option<ThemePreference>>;

    fn save(&mut self, preference: ThemePreference) -> QreatifyResult<()>;
}

/// On-disk layout of `preferences.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferencesFile {
    theme: ThemePreference,
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the standard per-user location.
    pub fn standard() -> Self {
        Self::new(preferences_file_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> QreatifyResult<Option<ThemePreference>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let file: PreferencesFile = serde_json::from_str(&content).map_err(|e| {
            QreatifyError::preference(format!("invalid {}: {e}", self.path.display()))
        })?;
        Ok(Some(file.theme))
    }

    fn save(&mut self, preference: ThemePreference) -> QreatifyResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&PreferencesFile { theme: preference })?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store. Clones share the same slot, so a test can keep a handle
/// after giving one to a controller.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    slot: Arc<Mutex<Option<ThemePreference>>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preference(preference: ThemePreference) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(preference))),
        }
    }

    pub fn get(&self) -> Option<ThemePreference> {
        self.slot.lock().map(|slot| *slot).unwrap_or(None)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> QreatifyResult<Option<ThemePreference>> {
        self.slot
            .lock()
            .map(|slot| *slot)
            .map_err(|_| QreatifyError::preference("preference slot poisoned"))
    }

    fn save(&mut self, preference: ThemePreference) -> QreatifyResult<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| QreatifyError::preference("preference slot poisoned"))?;
        *slot = Some(preference);
        Ok(())
    }
}
