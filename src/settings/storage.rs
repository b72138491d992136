//! Key/value persistence for the settings blob.
//!
//! The overlay keeps its settings in a browser-local key/value store. Here the
//! store is a trait so the reducer can be handed a file-backed store, an
//! in-memory one, or nothing at all.
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, info, warn};

use super::error::StorageError;
use super::store::SettingsStore;

/// Key the whole settings object is stored under
pub const SETTINGS_KEY: &str = "__XBL_TICKER_SETTINGS__";

/// Scratch key written and removed when probing a backend
pub const PROBE_KEY: &str = "__storage_test__";

/// Minimal local-storage style interface
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Number of stored entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Check that a backend accepts writes.
///
/// A full store still counts as available when it already holds entries,
/// since existing settings can be read back from it.
pub fn probe(storage: &dyn KeyValueStore) -> Result<(), StorageError> {
    let attempt = storage
        .set_item(PROBE_KEY, PROBE_KEY)
        .and_then(|_| storage.remove_item(PROBE_KEY));

    match attempt {
        Ok(()) => Ok(()),
        Err(StorageError::QuotaExceeded) if !storage.is_empty() => Ok(()),
        Err(e) => Err(e),
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    items: BTreeMap<String, String>,
    quota: Option<usize>,
    disabled: bool,
}

impl MemoryInner {
    fn used_bytes(&self) -> usize {
        self.items.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

/// In-process store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects writes once keys + values exceed `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        let storage = Self::default();
        storage.inner.borrow_mut().quota = Some(bytes);
        storage
    }

    /// A store that fails every operation
    pub fn unavailable() -> Self {
        let storage = Self::default();
        storage.inner.borrow_mut().disabled = true;
        storage
    }

    fn check_enabled(&self) -> Result<(), StorageError> {
        if self.inner.borrow().disabled {
            return Err(StorageError::Unavailable("storage disabled".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_enabled()?;
        Ok(self.inner.borrow().items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_enabled()?;
        let mut inner = self.inner.borrow_mut();
        if let Some(quota) = inner.quota {
            let existing = inner.items.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            if inner.used_bytes() - existing + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded);
            }
        }
        inner.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.check_enabled()?;
        self.inner.borrow_mut().items.remove(key);
        Ok(())
    }

    fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }
}

/// Store backed by a single JSON object on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string(items)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.read_all().map(|items| items.len()).unwrap_or(0)
    }
}

/// Best-effort persistence of the settings blob.
///
/// The backend is probed once when constructed. Every failure past that point
/// is logged and swallowed so an in-memory update always goes through.
pub struct Persistence {
    backend: Option<Box<dyn KeyValueStore>>,
}

impl Persistence {
    pub fn probe(backend: Box<dyn KeyValueStore>) -> Self {
        match probe(backend.as_ref()) {
            Ok(()) => Self {
                backend: Some(backend),
            },
            Err(e) => {
                info!("STORAGE: local storage not available: {}", e);
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self { backend: None }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Overwrite the persisted blob with `store`
    pub fn save(&self, store: &SettingsStore) {
        let Some(backend) = &self.backend else {
            info!("STORAGE: local storage not available, settings not saved");
            return;
        };

        let serialized = match serde_json::to_string(store) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!("STORAGE: Failed to serialize settings: {}", e);
                return;
            }
        };

        match backend.set_item(SETTINGS_KEY, &serialized) {
            Ok(()) => debug!("STORAGE: Saved {} bytes of settings", serialized.len()),
            Err(e) => warn!("STORAGE: Failed to save settings: {}", e),
        }
    }

    /// Read the persisted blob, if there is a readable one
    pub fn restore(&self) -> Option<serde_json::Value> {
        let Some(backend) = &self.backend else {
            info!("STORAGE: local storage not available, nothing to load");
            return None;
        };

        let raw = match backend.get_item(SETTINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("STORAGE: Failed to read settings: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("STORAGE: Persisted settings are not valid JSON: {}", e);
                None
            }
        }
    }
}
