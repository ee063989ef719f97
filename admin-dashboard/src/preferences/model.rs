use serde::{Deserialize, Serialize};

use crate::shared::ui::theme::ThemeMode;

const DEFAULT_START_PATH: &str = "/admin";

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Preferences {
    theme: ThemeMode,
    start_path: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            start_path: String::from(DEFAULT_START_PATH),
        }
    }
}

impl Preferences {
    pub(crate) fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub(crate) fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    pub(crate) fn start_path(&self) -> &str {
        &self.start_path
    }

    #[cfg(test)]
    pub(crate) fn set_start_path(&mut self, path: String) {
        self.start_path = path;
    }

    /// Return a copy with a usable absolute start path.
    pub(crate) fn normalized(&self) -> Self {
        let trimmed = self.start_path.trim();
        let start_path = if trimmed.is_empty() {
            String::from(DEFAULT_START_PATH)
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        Self {
            theme: self.theme,
            start_path,
        }
    }
}
