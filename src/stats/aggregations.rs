//! Leaderboards, records and box-score selection derived from a league table.
use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use super::snapshot::{GameResult, StatLine, StatsSnapshot, TeamRecord};
use crate::formatting::{format_record, format_seed};
use crate::settings::SettingsStore;
use crate::types::League;

/// Leaderboards show this many teams
pub const DEFAULT_LEADER_LIMIT: usize = 10;

/// Playoff games taken from each league before topping up with regular season
pub const PLAYOFF_GAMES_PER_LEAGUE: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStat {
    pub team: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayoffRecord {
    pub round: String,
    pub team: String,
    pub wins: u32,
    pub losses: u32,
}

fn numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Top `limit` teams by `stat`, highest first.
///
/// Teams without a numeric value for the stat are left out. Teams are ordered
/// by name before the stable sort so ties come out alphabetically.
pub fn stat_leaders(table: &HashMap<String, StatLine>, stat: &str, limit: usize) -> Vec<TeamStat> {
    let mut leaders: Vec<TeamStat> = table
        .iter()
        .filter_map(|(team, line)| {
            line.get(stat).and_then(numeric).map(|value| TeamStat {
                team: team.clone(),
                value,
            })
        })
        .collect();

    leaders.sort_by(|a, b| a.team.cmp(&b.team));
    leaders.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    leaders.truncate(limit);
    leaders
}

/// Win/loss record of each team in each playoff round, in the order the
/// round and team first appear
pub fn playoff_round_records(games: &[GameResult]) -> Vec<PlayoffRecord> {
    let mut records: Vec<PlayoffRecord> = Vec::new();

    for game in games {
        let round = game.round.clone().unwrap_or_default();
        let winner = game.winner();

        for team in [&game.away_team, &game.home_team] {
            let won = team == winner;
            let index = match records
                .iter()
                .position(|record| record.round == round && &record.team == team)
            {
                Some(index) => index,
                None => {
                    records.push(PlayoffRecord {
                        round: round.clone(),
                        team: team.clone(),
                        wins: 0,
                        losses: 0,
                    });
                    records.len() - 1
                }
            };

            if won {
                records[index].wins += 1;
            } else {
                records[index].losses += 1;
            }
        }
    }

    records
}

/// Teams ordered by standing, ties broken by name
pub fn standings(records: &HashMap<String, TeamRecord>) -> Vec<(&str, &TeamRecord)> {
    let mut rows: Vec<(&str, &TeamRecord)> = records
        .iter()
        .map(|(team, record)| (team.as_str(), record))
        .collect();
    rows.sort_by(|a, b| a.1.rank.cmp(&b.1.rank).then_with(|| a.0.cmp(b.0)));
    rows
}

/// `3 Seed` once the active league is in the playoffs, `(10-4)` before that.
/// Unknown teams count as zeros.
pub fn record_or_seed(snapshot: &StatsSnapshot, settings: &SettingsStore, team: &str) -> String {
    let record = snapshot
        .league(settings.league)
        .and_then(|season| season.season_team_records.get(team))
        .cloned()
        .unwrap_or_default();

    if settings.in_playoffs() {
        format_seed(record.rank)
    } else {
        format_record(record.wins, record.losses)
    }
}

fn latest(games: &[GameResult], count: usize) -> impl Iterator<Item = &GameResult> {
    games.iter().rev().take(count)
}

/// Games for the box-score rotation, newest first within each league.
///
/// The last eight playoff games of every league come first. When those do
/// not reach `max`, the rest is filled from regular season games, split
/// across XBL, AAA and AA with any remainder going to XBL and then AAA.
pub fn recent_box_scores(snapshot: &StatsSnapshot, max: u32) -> Vec<&GameResult> {
    let mut games: Vec<&GameResult> = Vec::new();

    for league in League::all() {
        if let Some(season) = snapshot.league(league) {
            games.extend(latest(&season.playoffs_game_results, PLAYOFF_GAMES_PER_LEAGUE));
        }
    }

    let max = max as usize;
    if games.len() >= max {
        return games;
    }

    let third = (max - games.len()) as f64 / 3.0;
    let shares = [
        (League::XBL, third.ceil()),
        (League::AAA, third.round()),
        (League::AA, third.floor()),
    ];
    for (league, share) in shares {
        if let Some(season) = snapshot.league(league) {
            games.extend(latest(&season.season_game_results, share as usize));
        }
    }

    games
}
