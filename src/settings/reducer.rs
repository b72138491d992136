use serde_json::Value;
use tracing::{debug, error, warn};

use super::action::SettingsAction;
use super::error::{ImportError, SettingsResult};
use super::schema::is_valid_store;
use super::storage::Persistence;
use super::store::SettingsStore;

/// Settings reducer
///
/// Holds the compiled-in defaults and the persistence backend, both injected
/// at construction. `reduce` never touches its input store; it returns the
/// new one and saves it inline after every mutating action.
pub struct SettingsReducer {
    defaults: SettingsStore,
    persistence: Persistence,
}

impl SettingsReducer {
    pub fn new(current_season: u32, persistence: Persistence) -> Self {
        let defaults = SettingsStore::defaults(current_season, persistence.is_available());
        Self {
            defaults,
            persistence,
        }
    }

    pub fn defaults(&self) -> &SettingsStore {
        &self.defaults
    }

    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }

    /// Apply `action` to `store`.
    ///
    /// Errors are caller contract violations (a value of the wrong kind for
    /// its path). Storage failures are never errors.
    pub fn reduce(&self, store: &SettingsStore, action: SettingsAction) -> SettingsResult<SettingsStore> {
        debug!("SETTINGS: Reducing '{}' action", action.name());

        match action {
            SettingsAction::Load => Ok(self.load(store)),

            SettingsAction::Set { path, value } => {
                debug!("SETTINGS: Setting {} = {:?}", path, value);
                let mut new_store = store.clone();
                new_store.set(path, value)?;
                self.persistence.save(&new_store);
                Ok(new_store)
            }

            SettingsAction::Reset { path } => {
                debug!("SETTINGS: Resetting {}", path);
                let mut new_store = store.clone();
                new_store.set(path, self.defaults.get(path))?;
                self.persistence.save(&new_store);
                Ok(new_store)
            }

            SettingsAction::ResetAll => {
                let new_store = self.defaults.clone();
                self.persistence.save(&new_store);
                Ok(new_store)
            }

            SettingsAction::Import(imported) => Ok(self.import(*imported)),
        }
    }

    fn import(&self, imported: SettingsStore) -> SettingsStore {
        self.persistence.save(&imported);
        imported
    }

    /// Persisted values win over the defaults, one top-level key at a time
    fn load(&self, store: &SettingsStore) -> SettingsStore {
        let Some(persisted) = self.persistence.restore() else {
            return store.clone();
        };

        match merge_over_defaults(&self.defaults, persisted) {
            Ok(loaded) => {
                debug!("SETTINGS: Loaded persisted settings");
                loaded
            }
            Err(e) => {
                warn!("SETTINGS: Ignoring persisted settings: {}", e);
                store.clone()
            }
        }
    }

    /// Import surface for operator-pasted JSON.
    ///
    /// On `Err` the caller keeps its current store; the reason is also logged.
    pub fn import_json(&self, text: &str) -> Result<SettingsStore, ImportError> {
        let candidate: Value = serde_json::from_str(text).map_err(|e| {
            error!("SETTINGS: Import is not valid JSON: {}", e);
            ImportError::NotJson(e)
        })?;

        let reference = serde_json::to_value(&self.defaults).map_err(ImportError::InvalidValue)?;
        if !is_valid_store(&candidate, &reference) {
            return Err(ImportError::WrongShape);
        }

        let imported: SettingsStore = serde_json::from_value(candidate).map_err(|e| {
            error!("SETTINGS: Import has an unusable value: {}", e);
            ImportError::InvalidValue(e)
        })?;

        debug!("SETTINGS: Import accepted (league {})", imported.league);
        Ok(self.import(imported))
    }
}

/// Export surface: the store exactly as held in memory
pub fn export_json(store: &SettingsStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(store)
}

fn merge_over_defaults(defaults: &SettingsStore, persisted: Value) -> serde_json::Result<SettingsStore> {
    let mut merged = serde_json::to_value(defaults)?;

    match (&mut merged, persisted) {
        (Value::Object(base), Value::Object(overlay)) => base.extend(overlay),
        (_, other) => {
            return Err(serde::de::Error::custom(format!(
                "expected an object, found {}",
                other
            )))
        }
    }

    serde_json::from_value(merged)
}
