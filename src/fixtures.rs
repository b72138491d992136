/// Mock fixture data for testing and development
///
/// This module provides a small, deterministic statistics snapshot that can be used for:
/// 1. Unit tests - resolver and aggregation tests assert against these numbers
/// 2. Mock mode - running the CLI with `--mock` when no exported JSON is at hand
/// 3. Benchmarks - providing consistent data for performance testing
///
/// Two players are involved: Kmart (Spokesmen) and Bobbo (Otters).
use std::collections::{BTreeMap, HashMap};

use serde_json::{json, Value};

use crate::stats::provider::{StatsError, StatsProvider};
use crate::stats::snapshot::{
    Careers, GameResult, HeadToHead, PlayerCareer, PlayerInfo, SeasonStats, StatLine,
    StatsSnapshot, TeamRecord, TeamSeason,
};
use crate::types::League;

/// Season the fixture treats as in progress
pub const CURRENT_SEASON: u32 = 12;

/// Provider serving [`snapshot`], for `--mock` runs
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureStatsProvider;

impl StatsProvider for FixtureStatsProvider {
    fn snapshot(&self) -> Result<StatsSnapshot, StatsError> {
        Ok(snapshot())
    }
}

fn line(entries: &[(&str, Value)]) -> StatLine {
    entries
        .iter()
        .map(|(stat, value)| (stat.to_string(), value.clone()))
        .collect()
}

fn record(team: &str, wins: u32, losses: u32, rank: u32) -> (String, TeamRecord) {
    (
        team.to_string(),
        TeamRecord {
            team: team.to_string(),
            wins,
            losses,
            rank,
            remaining: 14 - wins - losses,
            ..Default::default()
        },
    )
}

fn game(away: &str, away_score: u32, home_score: u32, home: &str) -> GameResult {
    GameResult {
        away_team: away.to_string(),
        home_team: home.to_string(),
        away_score,
        home_score,
        innings: Some(9.0),
        ..Default::default()
    }
}

fn week(mut game: GameResult, week: u32) -> GameResult {
    game.week = Some(week);
    game
}

fn round(mut game: GameResult, round: &str) -> GameResult {
    game.round = Some(round.to_string());
    game
}

fn team_season(team: &str, abbrev: &str, league: League, season: u32) -> TeamSeason {
    TeamSeason {
        team_name: team.to_string(),
        team_abbrev: abbrev.to_string(),
        league: Some(league),
        season: Some(season),
    }
}

fn xbl() -> SeasonStats {
    SeasonStats {
        current_season: Some(CURRENT_SEASON),
        season_team_records: HashMap::from([
            record("Spokesmen", 10, 4, 1),
            record("Otters", 8, 6, 2),
            record("Grizzlies", 6, 8, 3),
            record("Hornets", 4, 10, 4),
        ]),
        season_team_stats: HashMap::from([
            (
                "Spokesmen".to_string(),
                line(&[
                    ("ba", json!(0.312)),
                    ("hr", json!(40)),
                    ("hr9", json!(2.857)),
                    ("rs9", json!(6.1)),
                    ("ra9", json!(3.4)),
                    ("lob", json!(7)),
                    ("whip", json!(1.18)),
                    ("so", json!(88)),
                ]),
            ),
            (
                "Otters".to_string(),
                line(&[
                    ("ba", json!(0.298)),
                    ("hr", json!(35)),
                    ("hr9", json!(2.5)),
                    ("rs9", json!(5.2)),
                    ("ra9", json!(4.0)),
                    ("lob", json!(9)),
                    ("whip", json!(1.31)),
                    ("so", json!(101)),
                ]),
            ),
            (
                "Grizzlies".to_string(),
                line(&[("ba", json!(0.275)), ("hr", json!(22)), ("so", json!(95))]),
            ),
            (
                "Hornets".to_string(),
                line(&[("ba", json!(0.251)), ("hr", json!(18)), ("so", json!(120))]),
            ),
        ]),
        season_game_results: vec![
            week(game("Otters", 3, 5, "Spokesmen"), 6),
            week(game("Hornets", 2, 1, "Grizzlies"), 6),
            week(game("Spokesmen", 7, 4, "Hornets"), 7),
            week(game("Grizzlies", 4, 4, "Otters"), 7),
        ],
        playoffs_team_records: HashMap::new(),
        playoffs_team_stats: HashMap::from([
            (
                "Spokesmen".to_string(),
                line(&[("ba", json!(0.284)), ("hr", json!(4))]),
            ),
            ("Otters".to_string(), line(&[("ba", json!(0.240)), ("hr", json!(2))])),
        ]),
        playoffs_game_results: vec![
            round(game("Otters", 2, 6, "Spokesmen"), "1"),
            round(game("Spokesmen", 3, 4, "Otters"), "1"),
            round(game("Otters", 1, 5, "Spokesmen"), "1"),
        ],
    }
}

fn aaa() -> SeasonStats {
    SeasonStats {
        current_season: Some(CURRENT_SEASON),
        season_team_records: HashMap::from([record("Moles", 9, 5, 1), record("Herons", 5, 9, 2)]),
        season_team_stats: HashMap::from([
            ("Moles".to_string(), line(&[("ba", json!(0.289)), ("hr", json!(30))])),
            ("Herons".to_string(), line(&[("ba", json!(0.262)), ("hr", json!(26))])),
        ]),
        season_game_results: vec![
            week(game("Moles", 6, 2, "Herons"), 6),
            week(game("Herons", 3, 2, "Moles"), 7),
        ],
        ..Default::default()
    }
}

fn aa() -> SeasonStats {
    SeasonStats {
        current_season: Some(CURRENT_SEASON),
        season_team_records: HashMap::from([record("Pikes", 7, 7, 1)]),
        season_game_results: vec![
            GameResult {
                innings: Some(7.0),
                run_rule: Some(true),
                ..week(game("Pikes", 11, 1, "Wasps"), 7)
            },
        ],
        ..Default::default()
    }
}

fn careers() -> Careers {
    let kmart_regular = PlayerCareer {
        all_time: line(&[
            ("ba", json!(0.301)),
            ("oppba", json!(0.265)),
            ("hr", json!(212)),
            ("clutch", json!("ice cold")),
        ]),
        by_season: HashMap::from([
            ("season_11".to_string(), line(&[("ba", json!(0.287)), ("hr", json!(38))])),
            ("season_12".to_string(), line(&[("ba", json!(0.3)), ("hr", json!(36))])),
        ]),
        by_league: HashMap::from([
            ("XBL".to_string(), line(&[("hr", json!(151))])),
            ("AAA".to_string(), line(&[("hr", json!(61))])),
        ]),
    };
    let kmart_playoffs = PlayerCareer {
        all_time: line(&[("whip", json!(1.25)), ("hr", json!(9))]),
        by_season: HashMap::from([("season_11".to_string(), line(&[("hr", json!(7))]))]),
        by_league: HashMap::from([("XBL".to_string(), line(&[("hr", json!(9))]))]),
    };
    let bobbo_regular = PlayerCareer {
        all_time: line(&[("ba", json!(0.279)), ("oppba", json!(0.27)), ("hr", json!(180))]),
        by_season: HashMap::from([("season_11".to_string(), line(&[("ba", json!(0.266))]))]),
        by_league: HashMap::from([("XBL".to_string(), line(&[("hr", json!(120))]))]),
    };

    Careers {
        regular_season: HashMap::from([
            ("Kmart".to_string(), kmart_regular),
            ("Bobbo".to_string(), bobbo_regular),
        ]),
        playoffs: HashMap::from([("Kmart".to_string(), kmart_playoffs)]),
        regular_season_head_to_head: HashMap::from([(
            "Bobbo".to_string(),
            HashMap::from([(
                "Kmart".to_string(),
                HeadToHead {
                    player_a_stats: line(&[("ba", json!(0.25)), ("wins", json!(4))]),
                    player_z_stats: line(&[("ba", json!(0.333)), ("wins", json!(6))]),
                },
            )]),
        )]),
        playoffs_head_to_head: HashMap::from([(
            "Bobbo".to_string(),
            HashMap::from([(
                "Kmart".to_string(),
                HeadToHead {
                    player_a_stats: line(&[("wins", json!(3))]),
                    player_z_stats: line(&[("wins", json!(1))]),
                },
            )]),
        )]),
        all_players: HashMap::from([
            (
                "Kmart".to_string(),
                PlayerInfo {
                    teams: vec![
                        team_season("Spokesmen", "SPK", League::XBL, 11),
                        team_season("Spokesmen", "SPK", League::XBL, 12),
                    ],
                },
            ),
            (
                "Bobbo".to_string(),
                PlayerInfo {
                    teams: vec![
                        team_season("Herons", "HER", League::AAA, 10),
                        team_season("Otters", "OTR", League::XBL, 12),
                    ],
                },
            ),
            ("anonymous".to_string(), PlayerInfo::default()),
        ]),
    }
}

/// The complete fixture snapshot
pub fn snapshot() -> StatsSnapshot {
    StatsSnapshot {
        careers: careers(),
        leagues: BTreeMap::from([(League::XBL, xbl()), (League::AAA, aaa()), (League::AA, aa())]),
    }
}
