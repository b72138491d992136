use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::settings::{export_json, SettingPath, SettingsAction, SettingsReducer, SettingsStore};

/// Interpret a CLI value: JSON when it parses, a bare string otherwise
pub fn parse_cli_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn print_store(store: &SettingsStore) -> Result<()> {
    let json = export_json(store).context("Failed to serialize settings")?;
    println!("{}", json);
    Ok(())
}

pub fn show(store: &SettingsStore, path: Option<String>) -> Result<()> {
    let Some(path) = path else {
        return print_store(store);
    };

    let path: SettingPath = path.parse()?;
    let value = serde_json::to_value(store).context("Failed to serialize settings")?;
    let selected = path
        .segments()
        .iter()
        .try_fold(&value, |node, key| node.get(key.as_str()))
        .with_context(|| format!("No value at {}", path))?;
    println!("{}", serde_json::to_string_pretty(selected)?);
    Ok(())
}

pub fn set(reducer: &SettingsReducer, store: &SettingsStore, path: &str, raw_value: &str) -> Result<()> {
    let path: SettingPath = path.parse()?;
    let value = path.value_from_json(parse_cli_value(raw_value))?;
    let new_store = reducer.reduce(store, SettingsAction::Set { path, value })?;
    println!("{} updated", path);
    report_unsaved(reducer);
    tracing::debug!("SETTINGS: {} is now {:?}", path, new_store.get(path));
    Ok(())
}

pub fn reset(reducer: &SettingsReducer, store: &SettingsStore, path: &str) -> Result<()> {
    let path: SettingPath = path.parse()?;
    reducer.reduce(store, SettingsAction::Reset { path })?;
    println!("{} reset to default", path);
    report_unsaved(reducer);
    Ok(())
}

pub fn reset_all(reducer: &SettingsReducer, store: &SettingsStore) -> Result<()> {
    reducer.reduce(store, SettingsAction::ResetAll)?;
    println!("All settings reset to defaults");
    report_unsaved(reducer);
    Ok(())
}

/// Replace the store with the JSON in `file`; an invalid file leaves it alone
pub fn import(reducer: &SettingsReducer, file: &Path) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    reducer
        .import_json(&text)
        .with_context(|| format!("Settings in {} were not imported", file.display()))?;
    println!("Imported settings from {}", file.display());
    report_unsaved(reducer);
    Ok(())
}

/// Apply a raw `{"type": ..., "payload": ...}` action and print the result
pub fn dispatch(reducer: &SettingsReducer, store: &SettingsStore, action: &str) -> Result<()> {
    let action = SettingsAction::from_json(action)?;
    let new_store = reducer.reduce(store, action)?;
    print_store(&new_store)
}

fn report_unsaved(reducer: &SettingsReducer) {
    if !reducer.persistence().is_available() {
        eprintln!("Settings storage is not available, the change was not saved");
    }
}
