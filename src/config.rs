use xdg::BaseDirectories;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the configured current season
pub const SEASON_ENV_VAR: &str = "TICKER_SEASON";

/// Season assumed when neither the config file nor the environment names one
pub const DEFAULT_CURRENT_SEASON: u32 = 1;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// The live season. Stats for it come from the league tables, older
    /// seasons come from the careers breakdown.
    pub current_season: u32,
    /// Directory holding XBL.json, AAA.json, AA.json and careers.json
    pub stats_dir: String,
    /// Where the persisted settings live. Defaults to the XDG data dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            current_season: DEFAULT_CURRENT_SEASON,
            stats_dir: "public/json".to_string(),
            storage_file: None,
        }
    }
}

impl Config {
    /// Apply environment overrides on top of the file values
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = std::env::var(SEASON_ENV_VAR) {
            self.apply_season_override(&raw);
        }
        self
    }

    fn apply_season_override(&mut self, raw: &str) {
        match raw.trim().parse::<u32>() {
            Ok(season) => self.current_season = season,
            Err(_) => {
                tracing::warn!("CONFIG: Ignoring {}={:?}, not a season number", SEASON_ENV_VAR, raw);
            }
        }
    }

    /// Resolve the settings storage file, falling back to the XDG data dir
    pub fn storage_path(&self) -> Option<PathBuf> {
        match &self.storage_file {
            Some(path) => Some(PathBuf::from(path)),
            None => get_data_path().map(|dir| dir.join("storage.json")),
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

fn get_data_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    xdg_dirs.get_data_home()
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default().with_env_overrides(),
    };

    // Check if file exists
    if !config_path.exists() {
        return Config::default().with_env_overrides();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default().with_env_overrides(),
    };

    parse(&content).with_env_overrides()
}

fn parse(content: &str) -> Config {
    toml::from_str(content).unwrap_or_else(|e| {
        tracing::warn!("CONFIG: Falling back to defaults, config file is invalid: {}", e);
        Config::default()
    })
}

pub fn write(config: &Config) -> anyhow::Result<PathBuf> {
    let config_path = get_config_path()
        .ok_or_else(|| anyhow::anyhow!("Unable to determine config path"))?;

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(&config_path, content)?;
    Ok(config_path)
}
