/// Sources of the statistics snapshot, abstracting over the JSON export
/// directory and the fixture data used in mock mode
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::snapshot::{Careers, SeasonStats, StatsSnapshot};
use crate::types::League;

/// File holding the career tables, next to one `{league}.json` per league
pub const CAREERS_FILE: &str = "careers.json";

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Trait for statistics providers, implemented by the directory reader and
/// the fixture provider
pub trait StatsProvider {
    /// Load every league table and the career tables
    fn snapshot(&self) -> Result<StatsSnapshot, StatsError>;
}

/// Reads the aggregation scripts' JSON output from one directory
#[derive(Debug, Clone)]
pub struct DirectoryStatsProvider {
    dir: PathBuf,
}

impl DirectoryStatsProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn league_path(&self, league: League) -> PathBuf {
        self.dir.join(format!("{}.json", league))
    }

    pub fn careers_path(&self) -> PathBuf {
        self.dir.join(CAREERS_FILE)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StatsError> {
    let text = fs::read_to_string(path).map_err(|source| StatsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("STATS: Read {} bytes from {}", text.len(), path.display());
    serde_json::from_str(&text).map_err(|source| StatsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl StatsProvider for DirectoryStatsProvider {
    fn snapshot(&self) -> Result<StatsSnapshot, StatsError> {
        let mut leagues = BTreeMap::new();
        for league in League::all() {
            let season: SeasonStats = read_json(&self.league_path(league))?;
            leagues.insert(league, season);
        }
        let careers: Careers = read_json(&self.careers_path())?;

        Ok(StatsSnapshot { careers, leagues })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("xbl-ticker-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write(dir: &Path, file: &str, value: serde_json::Value) {
        fs::write(dir.join(file), value.to_string()).unwrap();
    }

    #[test]
    fn test_reads_all_files() {
        let dir = scratch_dir("read");
        write(&dir, "XBL.json", json!({"season_team_stats": {"Spokesmen": {"ba": 0.312}}}));
        write(&dir, "AAA.json", json!({}));
        write(&dir, "AA.json", json!({"season_game_results": []}));
        write(&dir, "careers.json", json!({"all_players": {"Kmart": {"teams": []}}}));

        let snapshot = DirectoryStatsProvider::new(&dir).snapshot().unwrap();
        assert_eq!(snapshot.leagues.len(), 3);
        assert_eq!(
            snapshot.league(League::XBL).unwrap().season_team_stats["Spokesmen"]["ba"],
            json!(0.312)
        );
        assert_eq!(snapshot.careers.player_names(), vec!["Kmart"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_reads_aggregation_script_league_file() {
        let dir = scratch_dir("script");
        write(&dir, "XBL.json", json!({
            "current_season": 12,
            "season_team_records": {
                "Spokesmen": {
                    "team": "Spokesmen", "rank": 1, "ego_starting": null, "ego_current": null,
                    "wins": 10, "losses": 4, "gb": 0.0, "win_pct": 0.714, "win_pct_vs_500": 0.6,
                    "sweeps_w": 2, "splits": 1, "sweeps_l": 0, "sos": 0.52, "elo": 1512.3, "remaining": 0
                },
                "Otters": {
                    "team": "Otters", "rank": 2, "ego_starting": null, "ego_current": null,
                    "wins": 8, "losses": 6, "gb": 2.0, "win_pct": 0.571, "win_pct_vs_500": 0.4,
                    "sweeps_w": 1, "splits": 2, "sweeps_l": 1, "sos": 0.49, "elo": 1490.1, "remaining": 0
                }
            },
            "season_game_results": [
                {
                    "away_team": "Otters", "home_team": "Spokesmen", "away_score": 2, "home_score": 4,
                    "innings": 9.0, "winner": "Spokesmen", "run_rule": false, "week": 14,
                    "away_hits": 6, "home_hits": null
                },
                {
                    "away_team": "Spokesmen", "home_team": "Otters", "away_score": 12, "home_score": 1,
                    "innings": 6.0, "winner": "Spokesmen", "run_rule": true, "week": 14,
                    "away_hits": null, "home_hits": null
                }
            ],
            "playoffs_game_results": [
                {
                    "away_team": "Otters", "home_team": "Spokesmen", "away_score": 5, "home_score": 3,
                    "innings": 10.0, "winner": "Otters", "run_rule": false, "round": "Finals"
                }
            ]
        }));
        write(&dir, "AAA.json", json!({}));
        write(&dir, "AA.json", json!({}));
        write(&dir, "careers.json", json!({}));

        let snapshot = DirectoryStatsProvider::new(&dir).snapshot().unwrap();
        let xbl = snapshot.league(League::XBL).unwrap();
        let otters = &xbl.season_team_records["Otters"];
        assert_eq!(otters.gb, 2.0);
        assert_eq!(otters.ego_starting, None);
        assert_eq!(xbl.season_game_results[0].innings, Some(9.0));
        assert_eq!(xbl.season_game_results[1].run_rule, Some(true));
        assert_eq!(xbl.playoffs_game_results[0].winner(), "Otters");
        assert_eq!(xbl.playoffs_game_results[0].round.as_deref(), Some("Finals"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_league_file_names_path() {
        let dir = scratch_dir("missing");
        write(&dir, "XBL.json", json!({}));

        let err = DirectoryStatsProvider::new(&dir).snapshot().unwrap_err();
        assert!(matches!(err, StatsError::Read { .. }));
        assert!(err.to_string().contains("AAA.json"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = scratch_dir("malformed");
        for league in League::all() {
            write(&dir, &format!("{}.json", league), json!({}));
        }
        fs::write(dir.join(CAREERS_FILE), "{not json").unwrap();

        let err = DirectoryStatsProvider::new(&dir).snapshot().unwrap_err();
        assert!(matches!(err, StatsError::Parse { .. }));

        fs::remove_dir_all(&dir).unwrap();
    }
}
