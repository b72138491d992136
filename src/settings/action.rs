use serde::Deserialize;
use serde_json::Value;

use super::error::{SettingsError, SettingsResult};
use super::path::{SettingPath, SettingValue};
use super::store::SettingsStore;

/// Settings actions - like Redux actions
///
/// All changes to the settings store happen through these.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsAction {
    /// Restore persisted settings over the defaults
    Load,
    /// Replace a single field
    Set { path: SettingPath, value: SettingValue },
    /// Restore a single field to its default
    Reset { path: SettingPath },
    /// Restore every field to its default
    ResetAll,
    /// Replace the whole store with an already validated one
    Import(Box<SettingsStore>),
}

impl SettingsAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Set { .. } => "set",
            Self::Reset { .. } => "reset",
            Self::ResetAll => "reset-all",
            Self::Import(_) => "import",
        }
    }

    /// Decode the dispatch shape used by the overlay UI:
    /// `{"type": "set", "payload": {"path": ["awayTeam"], "value": "Spokesmen"}}`
    pub fn from_json(text: &str) -> SettingsResult<Self> {
        let raw: RawAction = serde_json::from_str(text)?;
        raw.try_into()
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawPayload {
    path: Option<Vec<String>>,
    value: Option<Value>,
    store: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<RawPayload>,
}

impl TryFrom<RawAction> for SettingsAction {
    type Error = SettingsError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let payload = raw.payload.unwrap_or_default();

        match raw.kind.as_str() {
            "load" => Ok(Self::Load),
            "reset-all" => Ok(Self::ResetAll),
            "set" => {
                let path = required_path("set", payload.path)?;
                let value = payload.value.ok_or(SettingsError::MissingPayload {
                    action: "set",
                    field: "value",
                })?;
                let value = path.value_from_json(value)?;
                Ok(Self::Set { path, value })
            }
            "reset" => {
                let path = required_path("reset", payload.path)?;
                Ok(Self::Reset { path })
            }
            "import" => {
                let store = payload.store.ok_or(SettingsError::MissingPayload {
                    action: "import",
                    field: "store",
                })?;
                let store: SettingsStore = serde_json::from_value(store)?;
                Ok(Self::Import(Box::new(store)))
            }
            other => Err(SettingsError::UnknownAction(other.to_string())),
        }
    }
}

fn required_path(action: &'static str, path: Option<Vec<String>>) -> SettingsResult<SettingPath> {
    match path {
        Some(path) if !path.is_empty() => SettingPath::from_segments(path.as_slice()),
        _ => Err(SettingsError::MissingPayload {
            action,
            field: "path",
        }),
    }
}
