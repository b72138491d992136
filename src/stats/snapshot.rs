//! Shape of the pre-aggregated statistics the overlay reads.
//!
//! The snapshot is produced by the stats aggregation scripts and is read-only
//! here. Stat lines stay loosely typed so stats this crate has never heard of
//! still pass through.
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{GameKind, League};

/// Stat name -> raw value
pub type StatLine = BTreeMap<String, Value>;

/// Regular season standing of one team
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamRecord {
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    pub rank: u32,
    /// games behind the leader
    pub gb: f64,
    pub remaining: u32,
    /// ego ratings, AA only
    pub ego_starting: Option<u32>,
    pub ego_current: Option<u32>,
}

/// One finished game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameResult {
    pub away_team: String,
    pub home_team: String,
    pub away_score: u32,
    pub home_score: u32,
    /// written as a float, e.g. `9.0`; a partial inning reads `6.1`
    pub innings: Option<f64>,
    pub winner: Option<String>,
    /// ended early on the run rule
    pub run_rule: Option<bool>,
    /// regular season week
    pub week: Option<u32>,
    /// playoff round label
    pub round: Option<String>,
}

impl GameResult {
    /// The recorded winner, else the higher score with ties going home
    pub fn winner(&self) -> &str {
        if let Some(winner) = self.winner.as_deref().filter(|winner| !winner.is_empty()) {
            return winner;
        }
        if self.away_score > self.home_score {
            &self.away_team
        } else {
            &self.home_team
        }
    }
}

/// Everything known about one league's current season
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonStats {
    pub current_season: Option<u32>,
    pub season_team_records: HashMap<String, TeamRecord>,
    pub season_team_stats: HashMap<String, StatLine>,
    pub season_game_results: Vec<GameResult>,
    pub playoffs_team_records: HashMap<String, Value>,
    pub playoffs_team_stats: HashMap<String, StatLine>,
    pub playoffs_game_results: Vec<GameResult>,
}

impl SeasonStats {
    pub fn team_stats(&self, kind: GameKind) -> &HashMap<String, StatLine> {
        match kind {
            GameKind::RegularSeason => &self.season_team_stats,
            GameKind::Playoffs => &self.playoffs_team_stats,
        }
    }

    pub fn game_results(&self, kind: GameKind) -> &[GameResult] {
        match kind {
            GameKind::RegularSeason => &self.season_game_results,
            GameKind::Playoffs => &self.playoffs_game_results,
        }
    }
}

/// A player's aggregated stats for one kind of game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerCareer {
    pub all_time: StatLine,
    /// keyed `season_{N}`
    pub by_season: HashMap<String, StatLine>,
    /// keyed by league name
    pub by_league: HashMap<String, StatLine>,
}

/// Stats from games between two players. The pair is stored once, with
/// player A sorting before player Z.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadToHead {
    pub player_a_stats: StatLine,
    pub player_z_stats: StatLine,
}

/// One team a player has managed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamSeason {
    pub team_name: String,
    pub team_abbrev: String,
    pub league: Option<League>,
    pub season: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerInfo {
    pub teams: Vec<TeamSeason>,
}

/// playerA -> playerZ -> record
pub type HeadToHeadTable = HashMap<String, HashMap<String, HeadToHead>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Careers {
    pub regular_season: HashMap<String, PlayerCareer>,
    pub playoffs: HashMap<String, PlayerCareer>,
    pub regular_season_head_to_head: HeadToHeadTable,
    pub playoffs_head_to_head: HeadToHeadTable,
    pub all_players: HashMap<String, PlayerInfo>,
}

impl Careers {
    pub fn by_kind(&self, kind: GameKind) -> &HashMap<String, PlayerCareer> {
        match kind {
            GameKind::RegularSeason => &self.regular_season,
            GameKind::Playoffs => &self.playoffs,
        }
    }

    pub fn head_to_head(&self, kind: GameKind) -> &HeadToHeadTable {
        match kind {
            GameKind::RegularSeason => &self.regular_season_head_to_head,
            GameKind::Playoffs => &self.playoffs_head_to_head,
        }
    }

    /// All player names, sorted without regard to case
    pub fn player_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.all_players.keys().cloned().collect();
        names.sort_by_key(|name| name.to_lowercase());
        names
    }

    /// Every player except `player`; everyone when `player` is empty
    pub fn players_except(&self, player: &str) -> Vec<String> {
        self.player_names()
            .into_iter()
            .filter(|name| player.is_empty() || name != player)
            .collect()
    }

    /// Distinct teams a player has managed, in first-seen order
    pub fn teams_for_player(&self, player: &str) -> Vec<String> {
        let mut teams: Vec<String> = Vec::new();
        if let Some(info) = self.all_players.get(player) {
            for season in &info.teams {
                if !teams.contains(&season.team_name) {
                    teams.push(season.team_name.clone());
                }
            }
        }
        teams
    }

    /// Abbreviation the player used for `team`, empty when unknown
    pub fn abbrev_for_team(&self, player: &str, team: &str) -> String {
        if player.is_empty() || team.is_empty() {
            return String::new();
        }
        self.all_players
            .get(player)
            .and_then(|info| info.teams.iter().find(|season| season.team_name == team))
            .map(|season| season.team_abbrev.clone())
            .unwrap_or_default()
    }
}

/// All data the overlay renders from, loaded once per session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsSnapshot {
    pub careers: Careers,
    pub leagues: BTreeMap<League, SeasonStats>,
}

impl StatsSnapshot {
    pub fn league(&self, league: League) -> Option<&SeasonStats> {
        self.leagues.get(&league)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn careers() -> Careers {
        serde_json::from_value(json!({
            "all_players": {
                "zed": {"teams": [
                    {"team_name": "Spokesmen", "team_abbrev": "SPK", "league": "XBL", "season": 11},
                    {"team_name": "Spokesmen", "team_abbrev": "SPK", "league": "XBL", "season": 12},
                    {"team_name": "Otters", "team_abbrev": "OTR", "league": "AA", "season": 9}
                ]},
                "Amy": {"teams": []},
                "bob": {"teams": []}
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_partial_documents_deserialize() {
        let season: SeasonStats = serde_json::from_value(json!({
            "season_team_stats": {"Spokesmen": {"ba": 0.312, "hr": 40}}
        }))
        .unwrap();
        assert_eq!(season.season_team_stats["Spokesmen"]["hr"], json!(40));
        assert!(season.playoffs_game_results.is_empty());
    }

    #[test]
    fn test_player_names_sorted_case_insensitively() {
        assert_eq!(careers().player_names(), vec!["Amy", "bob", "zed"]);
        assert_eq!(careers().players_except("bob"), vec!["Amy", "zed"]);
        assert_eq!(careers().players_except("").len(), 3);
    }

    #[test]
    fn test_teams_for_player_are_distinct() {
        assert_eq!(careers().teams_for_player("zed"), vec!["Spokesmen", "Otters"]);
        assert!(careers().teams_for_player("nobody").is_empty());
    }

    #[test]
    fn test_abbrev_for_team() {
        assert_eq!(careers().abbrev_for_team("zed", "Otters"), "OTR");
        assert_eq!(careers().abbrev_for_team("zed", "Nope"), "");
        assert_eq!(careers().abbrev_for_team("", "Otters"), "");
    }

    #[test]
    fn test_winner_ties_go_home() {
        let mut game = GameResult {
            away_team: "A".into(),
            home_team: "H".into(),
            away_score: 3,
            home_score: 3,
            ..Default::default()
        };
        assert_eq!(game.winner(), "H");
        game.away_score = 4;
        assert_eq!(game.winner(), "A");
        game.winner = Some("H".into());
        assert_eq!(game.winner(), "H");
    }

    #[test]
    fn test_script_game_result_deserializes() {
        let game: GameResult = serde_json::from_value(json!({
            "away_team": "Pikes", "home_team": "Wasps",
            "away_score": 11, "home_score": 1,
            "innings": 6.0, "winner": "Pikes", "run_rule": true,
            "week": 7, "away_hr": null
        }))
        .unwrap();
        assert_eq!(game.innings, Some(6.0));
        assert_eq!(game.run_rule, Some(true));
        assert_eq!(game.winner(), "Pikes");
    }
}
