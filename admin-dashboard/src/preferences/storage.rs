use std::fs;
use std::path::{Path, PathBuf};

use super::errors::PreferencesError;
use super::model::Preferences;

/// Status describing how preferences were loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum PreferencesLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading preferences from disk.
#[derive(Debug, Clone)]
pub(crate) struct PreferencesLoad {
    preferences: Preferences,
    status: PreferencesLoadStatus,
}

impl PreferencesLoad {
    pub(crate) fn new(
        preferences: Preferences,
        status: PreferencesLoadStatus,
    ) -> Self {
        Self {
            preferences,
            status,
        }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (Preferences, PreferencesLoadStatus) {
        (self.preferences, self.status)
    }
}

pub(crate) fn load_preferences() -> Result<PreferencesLoad, PreferencesError> {
    load_preferences_from_path(&preferences_path())
}

pub(crate) fn save_preferences(
    preferences: &Preferences,
) -> Result<(), PreferencesError> {
    save_preferences_to_path(&preferences_path(), preferences)
}

fn load_preferences_from_path(
    path: &Path,
) -> Result<PreferencesLoad, PreferencesError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(PreferencesLoad::new(
                Preferences::default(),
                PreferencesLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<Preferences>(&data) {
        Ok(preferences) => Ok(PreferencesLoad::new(
            preferences.normalized(),
            PreferencesLoadStatus::Loaded,
        )),
        Err(err) => Ok(PreferencesLoad::new(
            Preferences::default(),
            PreferencesLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn save_preferences_to_path(
    path: &Path,
    preferences: &Preferences,
) -> Result<(), PreferencesError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let payload = serde_json::to_string_pretty(&preferences.normalized())?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
}

fn preferences_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("admin-dashboard")
            .join("preferences.json");
    }

    std::env::temp_dir()
        .join("admin-dashboard")
        .join("preferences.json")
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
