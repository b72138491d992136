pub mod headlines;
pub mod leaders;
pub mod scores;
pub mod settings;
pub mod sidebar;
pub mod standings;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::fixtures::FixtureStatsProvider;
use crate::settings::{FileStorage, Persistence, SettingsAction, SettingsReducer, SettingsStore};
use crate::stats::{DirectoryStatsProvider, StatsProvider, StatsSnapshot};
use crate::types::League;

/// Width of a team name column in the text tables
pub const TEAM_COL_WIDTH: usize = 20;

/// Build the reducer over the configured storage and load the persisted store
///
/// With `no_persist` nothing is read or written.
pub fn open_settings(config: &Config, no_persist: bool) -> Result<(SettingsReducer, SettingsStore)> {
    let persistence = if no_persist {
        Persistence::disabled()
    } else {
        let path = config
            .storage_path()
            .context("Unable to determine settings storage path")?;
        Persistence::probe(Box::new(FileStorage::new(path)))
    };

    let reducer = SettingsReducer::new(config.current_season, persistence);
    let store = reducer
        .reduce(reducer.defaults(), SettingsAction::Load)
        .context("Failed to load settings")?;
    Ok((reducer, store))
}

/// Load the stats snapshot, from fixtures in mock mode
pub fn load_snapshot(config: &Config, mock: bool) -> Result<StatsSnapshot> {
    if mock {
        return FixtureStatsProvider
            .snapshot()
            .context("Failed to build fixture snapshot");
    }
    DirectoryStatsProvider::new(&config.stats_dir)
        .snapshot()
        .with_context(|| format!("Failed to load stats from '{}'", config.stats_dir))
}

/// Parse an optional league argument, defaulting to the settings' league
pub fn parse_league(league: Option<String>, fallback: League) -> Result<League> {
    match league {
        Some(name) => name.parse::<League>().map_err(anyhow::Error::msg),
        None => Ok(fallback),
    }
}
