//! Maps a displayed stat category to a value in the statistics snapshot.
use serde_json::Value;
use tracing::debug;

use super::snapshot::{StatLine, StatsSnapshot};
use super::vocabulary::is_known_stat;
use crate::formatting::{format_stat_value, stat_label, MISSING_VALUE};
use crate::settings::{SettingsStore, StatCategory, TimeFrame};
use crate::types::{GameKind, League, Side, Slot};

/// Who and what a stat is being resolved for
#[derive(Debug, Clone, PartialEq)]
pub struct StatContext<'a> {
    /// the side whose sidebar is being filled
    pub side: Side,
    pub away_player: &'a str,
    pub home_player: &'a str,
    pub away_team: &'a str,
    pub home_team: &'a str,
    /// league of the live tables
    pub league: League,
    pub current_season: u32,
}

impl<'a> StatContext<'a> {
    pub fn for_side(settings: &'a SettingsStore, side: Side, current_season: u32) -> Self {
        Self {
            side,
            away_player: &settings.away_player,
            home_player: &settings.home_player,
            away_team: &settings.away_team,
            home_team: &settings.home_team,
            league: settings.league,
            current_season,
        }
    }

    pub fn player(&self) -> &'a str {
        match self.side {
            Side::Away => self.away_player,
            Side::Home => self.home_player,
        }
    }

    pub fn team(&self) -> &'a str {
        match self.side {
            Side::Away => self.away_team,
            Side::Home => self.home_team,
        }
    }
}

/// Which half of a head-to-head record belongs to the subject player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairSide {
    PlayerA,
    PlayerZ,
}

/// The stat line a category reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatLocation<'a> {
    /// the in-progress league table, keyed by team
    LiveTeam {
        league: League,
        kind: GameKind,
        team: &'a str,
    },
    CareerAllTime {
        kind: GameKind,
        player: &'a str,
    },
    CareerBySeason {
        kind: GameKind,
        player: &'a str,
        season: u32,
    },
    CareerByLeague {
        kind: GameKind,
        player: &'a str,
        league: League,
    },
    /// a canonically ordered pair; `player_a` sorts first
    HeadToHead {
        kind: GameKind,
        player_a: &'a str,
        player_z: &'a str,
        side: PairSide,
    },
}

impl StatLocation<'_> {
    /// Key path into the snapshot, for diagnostics
    pub fn path(&self) -> Vec<String> {
        match self {
            Self::LiveTeam { league, kind, team } => vec![
                league.to_string(),
                match kind {
                    GameKind::RegularSeason => "season_team_stats".to_string(),
                    GameKind::Playoffs => "playoffs_team_stats".to_string(),
                },
                team.to_string(),
            ],
            Self::CareerAllTime { kind, player } => vec![
                "careers".into(),
                kind.careers_key().into(),
                player.to_string(),
                "all_time".into(),
            ],
            Self::CareerBySeason { kind, player, season } => vec![
                "careers".into(),
                kind.careers_key().into(),
                player.to_string(),
                "by_season".into(),
                season_key(*season),
            ],
            Self::CareerByLeague { kind, player, league } => vec![
                "careers".into(),
                kind.careers_key().into(),
                player.to_string(),
                "by_league".into(),
                league.to_string(),
            ],
            Self::HeadToHead {
                kind,
                player_a,
                player_z,
                side,
            } => vec![
                "careers".into(),
                format!("{}_head_to_head", kind.careers_key()),
                player_a.to_string(),
                player_z.to_string(),
                match side {
                    PairSide::PlayerA => "player_a_stats".into(),
                    PairSide::PlayerZ => "player_z_stats".into(),
                },
            ],
        }
    }
}

/// Key of a season in the careers by-season breakdown
pub fn season_key(season: u32) -> String {
    format!("season_{}", season)
}

/// Sort two player names into their canonical head-to-head order
pub fn canonical_pair<'a>(first: &'a str, second: &'a str) -> (&'a str, &'a str) {
    if first <= second {
        (first, second)
    } else {
        (second, first)
    }
}

/// Choose where a category's value lives. `None` means nothing is looked up.
pub fn locate<'a>(time_frame: &TimeFrame, ctx: &StatContext<'a>) -> Option<StatLocation<'a>> {
    let player = ctx.player();

    let location = match *time_frame {
        TimeFrame::CareerRegularSeason => StatLocation::CareerAllTime {
            kind: GameKind::RegularSeason,
            player,
        },
        TimeFrame::CareerPlayoffs => StatLocation::CareerAllTime {
            kind: GameKind::Playoffs,
            player,
        },
        TimeFrame::LeagueRegularSeason { league } => StatLocation::CareerByLeague {
            kind: GameKind::RegularSeason,
            player,
            league,
        },
        TimeFrame::LeaguePlayoffs { league } => StatLocation::CareerByLeague {
            kind: GameKind::Playoffs,
            player,
            league,
        },
        TimeFrame::RegularSeason { season } => season_location(GameKind::RegularSeason, season, ctx),
        TimeFrame::Playoffs { season } => season_location(GameKind::Playoffs, season, ctx),
        TimeFrame::HeadToHeadRegularSeason => head_to_head_location(GameKind::RegularSeason, ctx)?,
        TimeFrame::HeadToHeadPlayoffs => head_to_head_location(GameKind::Playoffs, ctx)?,
        TimeFrame::None => return None,
    };

    Some(location)
}

/// The live table for the current season; the careers breakdown otherwise,
/// since live games are not guaranteed to be folded into careers yet.
fn season_location<'a>(kind: GameKind, season: u32, ctx: &StatContext<'a>) -> StatLocation<'a> {
    if season == ctx.current_season {
        StatLocation::LiveTeam {
            league: ctx.league,
            kind,
            team: ctx.team(),
        }
    } else {
        StatLocation::CareerBySeason {
            kind,
            player: ctx.player(),
            season,
        }
    }
}

/// Needs both players picked
fn head_to_head_location<'a>(kind: GameKind, ctx: &StatContext<'a>) -> Option<StatLocation<'a>> {
    if ctx.away_player.is_empty() || ctx.home_player.is_empty() {
        return None;
    }

    let (player_a, player_z) = canonical_pair(ctx.home_player, ctx.away_player);
    let side = if player_a == ctx.player() {
        PairSide::PlayerA
    } else {
        PairSide::PlayerZ
    };

    Some(StatLocation::HeadToHead {
        kind,
        player_a,
        player_z,
        side,
    })
}

/// Fetch the stat line at `location`, if the snapshot has one
pub fn stat_line<'s>(snapshot: &'s StatsSnapshot, location: &StatLocation<'_>) -> Option<&'s StatLine> {
    match location {
        StatLocation::LiveTeam { league, kind, team } => {
            snapshot.league(*league)?.team_stats(*kind).get(*team)
        }
        StatLocation::CareerAllTime { kind, player } => {
            Some(&snapshot.careers.by_kind(*kind).get(*player)?.all_time)
        }
        StatLocation::CareerBySeason { kind, player, season } => snapshot
            .careers
            .by_kind(*kind)
            .get(*player)?
            .by_season
            .get(&season_key(*season)),
        StatLocation::CareerByLeague { kind, player, league } => snapshot
            .careers
            .by_kind(*kind)
            .get(*player)?
            .by_league
            .get(league.as_str()),
        StatLocation::HeadToHead {
            kind,
            player_a,
            player_z,
            side,
        } => {
            let record = snapshot.careers.head_to_head(*kind).get(*player_a)?.get(*player_z)?;
            Some(match side {
                PairSide::PlayerA => &record.player_a_stats,
                PairSide::PlayerZ => &record.player_z_stats,
            })
        }
    }
}

/// Raw value of a stat, `None` when any step of the path is missing
pub fn raw_stat<'s>(snapshot: &'s StatsSnapshot, category: &StatCategory, ctx: &StatContext<'_>) -> Option<&'s Value> {
    if !is_known_stat(&category.stat) {
        debug!("RESOLVER: Looking up unrecognized stat '{}'", category.stat);
    }

    let location = locate(&category.time_frame, ctx)?;
    let value = stat_line(snapshot, &location).and_then(|line| line.get(&category.stat));
    if value.is_none() {
        debug!(
            "RESOLVER: No {} at {}",
            category.stat,
            location.path().join(".")
        );
    }
    value
}

/// Display value of a stat: a formatted number, or `-` when unresolved
pub fn resolve_stat(snapshot: &StatsSnapshot, category: &StatCategory, ctx: &StatContext<'_>) -> String {
    format_stat_value(raw_stat(snapshot, category, ctx))
}

/// One filled-in sidebar row
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStat {
    pub slot: Slot,
    pub label: String,
    pub value: String,
    pub time_frame: TimeFrame,
}

/// Resolve all six slots of a side's sidebar
pub fn resolve_sidebar(
    snapshot: &StatsSnapshot,
    settings: &SettingsStore,
    side: Side,
    current_season: u32,
) -> Vec<ResolvedStat> {
    let ctx = StatContext::for_side(settings, side, current_season);

    settings
        .display_categories(side)
        .into_iter()
        .map(|(slot, category)| {
            let value = if ctx.player().is_empty() {
                MISSING_VALUE.to_string()
            } else {
                resolve_stat(snapshot, &category, &ctx)
            };
            ResolvedStat {
                slot,
                label: stat_label(&category.stat),
                value,
                time_frame: category.time_frame,
            }
        })
        .collect()
}
