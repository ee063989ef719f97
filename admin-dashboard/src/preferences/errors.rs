use thiserror::Error;

/// Errors emitted while reading or writing preferences.
#[derive(Debug, Error)]
pub(crate) enum PreferencesError {
    /// Filesystem operation failed.
    #[error("preferences IO failed")]
    Io(#[from] std::io::Error),
    /// JSON serialization failed.
    #[error("preferences JSON failed")]
    Json(#[from] serde_json::Error),
}
