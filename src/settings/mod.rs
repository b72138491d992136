//! Operator settings: the store, its reducer, validation and persistence.
pub mod action;
pub mod error;
pub mod path;
pub mod reducer;
pub mod schema;
pub mod storage;
pub mod store;

pub use action::SettingsAction;
pub use error::{ImportError, SettingsError, SettingsResult, StorageError};
pub use path::{SettingPath, SettingValue};
pub use reducer::{export_json, SettingsReducer};
pub use schema::is_valid_store;
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, Persistence};
pub use store::{PlayoffFlags, SettingsStore, StatCategories, StatCategory, TimeFrame, TimeFrameKind};
