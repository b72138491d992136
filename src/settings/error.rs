use thiserror::Error;

/// Errors raised by the settings reducer
///
/// Everything except `Storage` is a caller contract violation: the action
/// itself is malformed and dispatching it must not be silently ignored.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Unknown action for settings reducer: {0}")]
    UnknownAction(String),

    #[error("Missing {field} in payload for '{action}' action")]
    MissingPayload {
        action: &'static str,
        field: &'static str,
    },

    #[error("Unknown setting path: {0}")]
    UnknownPath(String),

    #[error("Setting {path} expects {expected}, got {got}")]
    ValueMismatch {
        path: String,
        expected: &'static str,
        got: String,
    },

    #[error("Malformed action: {0}")]
    MalformedAction(#[from] serde_json::Error),
}

/// Why an imported settings object was turned away.
///
/// A rejected import leaves the current store as it was.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Import is not valid JSON: {0}")]
    NotJson(serde_json::Error),

    #[error("Import does not have the shape of a settings store")]
    WrongShape,

    #[error("Import has a value the overlay does not understand: {0}")]
    InvalidValue(serde_json::Error),
}

/// Errors raised by a key/value store backend
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage is not available: {0}")]
    Unavailable(String),

    #[error("Storage quota exceeded")]
    QuotaExceeded,

    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage contents are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
