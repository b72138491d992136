//! Typed addressing of individual settings.
//!
//! The overlay UI addresses settings with key arrays such as
//! `["playoffs", "XBL"]`. `SettingPath` is the closed set of those paths, so a
//! mutation can only ever name a field that exists and carry a value of the
//! right kind.
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::error::{SettingsError, SettingsResult};
use super::store::{PlayoffFlags, SettingsStore, StatCategories, StatCategory, TimeFrame, TimeFrameKind};
use crate::types::{League, Side, Slot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingPath {
    UseLocalStorage,
    AllPlayoffs,
    Playoffs(League),
    League,
    Season,
    SeasonSubtext,
    ShowSeries,
    Team(Side),
    Player(Side),
    Abbrev(Side),
    Logo(Side),
    Wins(Side),
    SeriesLeft,
    SeriesRight,
    StatCategoriesSameForBothTeams,
    StatTimeFramesSameForBothTeams,
    ShowStatTimeframes,
    StatCategories(Side),
    StatCategory(Side, Slot),
    StatName(Side, Slot),
    /// The `timeFrame` kind of a slot; its qualifiers live at `season` and `league`
    StatTimeFrame(Side, Slot),
    StatSeason(Side, Slot),
    StatLeague(Side, Slot),
    Headlines,
    MaxBoxScores,
}

/// A typed value for some `SettingPath`
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Number(u32),
    Text(String),
    League(League),
    Playoffs(PlayoffFlags),
    Categories(Box<StatCategories>),
    Category(StatCategory),
    TimeFrame(TimeFrame),
    TimeFrameKind(TimeFrameKind),
}

impl SettingValue {
    fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "a boolean",
            Self::Number(_) => "a number",
            Self::Text(_) => "a string",
            Self::League(_) => "a league",
            Self::Playoffs(_) => "playoff flags",
            Self::Categories(_) => "six stat categories",
            Self::Category(_) => "a stat category",
            Self::TimeFrame(_) => "a time frame",
            Self::TimeFrameKind(_) => "a time frame kind",
        }
    }
}

impl SettingPath {
    /// Parse the key-array form used by the UI
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> SettingsResult<Self> {
        let keys: Vec<&str> = segments.iter().map(|s| s.as_ref()).collect();
        let unknown = || SettingsError::UnknownPath(keys.join("."));

        let path = match keys.as_slice() {
            ["useLocalStorage"] => Self::UseLocalStorage,
            ["playoffs"] => Self::AllPlayoffs,
            ["playoffs", league] => Self::Playoffs(league.parse().map_err(|_| unknown())?),
            ["league"] => Self::League,
            ["season"] => Self::Season,
            ["seasonSubtext"] => Self::SeasonSubtext,
            ["showSeries"] => Self::ShowSeries,
            ["seriesLeft"] => Self::SeriesLeft,
            ["seriesRight"] => Self::SeriesRight,
            ["statCategoriesSameForBothTeams"] => Self::StatCategoriesSameForBothTeams,
            ["statTimeFramesSameForBothTeams"] => Self::StatTimeFramesSameForBothTeams,
            ["showStatTimeframes"] => Self::ShowStatTimeframes,
            ["headlines"] => Self::Headlines,
            ["maxBoxScores"] => Self::MaxBoxScores,
            [key] => {
                let (side, field) = split_side(key).ok_or_else(unknown)?;
                match field {
                    "Team" => Self::Team(side),
                    "Player" => Self::Player(side),
                    "Abbrev" => Self::Abbrev(side),
                    "Logo" => Self::Logo(side),
                    "Wins" => Self::Wins(side),
                    "StatCategories" => Self::StatCategories(side),
                    _ => return Err(unknown()),
                }
            }
            [key, slot, rest @ ..] => {
                let (side, field) = split_side(key).ok_or_else(unknown)?;
                if field != "StatCategories" {
                    return Err(unknown());
                }
                let slot = Slot::from_key(slot).ok_or_else(unknown)?;
                match rest {
                    [] => Self::StatCategory(side, slot),
                    ["stat"] => Self::StatName(side, slot),
                    ["timeFrame"] => Self::StatTimeFrame(side, slot),
                    ["season"] => Self::StatSeason(side, slot),
                    ["league"] => Self::StatLeague(side, slot),
                    _ => return Err(unknown()),
                }
            }
            [] => return Err(unknown()),
        };

        Ok(path)
    }

    pub fn segments(&self) -> Vec<String> {
        let side_key = |side: &Side, field: &str| format!("{}{}", side.prefix(), field);
        match self {
            Self::UseLocalStorage => vec!["useLocalStorage".into()],
            Self::AllPlayoffs => vec!["playoffs".into()],
            Self::Playoffs(league) => vec!["playoffs".into(), league.to_string()],
            Self::League => vec!["league".into()],
            Self::Season => vec!["season".into()],
            Self::SeasonSubtext => vec!["seasonSubtext".into()],
            Self::ShowSeries => vec!["showSeries".into()],
            Self::Team(side) => vec![side_key(side, "Team")],
            Self::Player(side) => vec![side_key(side, "Player")],
            Self::Abbrev(side) => vec![side_key(side, "Abbrev")],
            Self::Logo(side) => vec![side_key(side, "Logo")],
            Self::Wins(side) => vec![side_key(side, "Wins")],
            Self::SeriesLeft => vec!["seriesLeft".into()],
            Self::SeriesRight => vec!["seriesRight".into()],
            Self::StatCategoriesSameForBothTeams => vec!["statCategoriesSameForBothTeams".into()],
            Self::StatTimeFramesSameForBothTeams => vec!["statTimeFramesSameForBothTeams".into()],
            Self::ShowStatTimeframes => vec!["showStatTimeframes".into()],
            Self::StatCategories(side) => vec![side_key(side, "StatCategories")],
            Self::StatCategory(side, slot) => {
                vec![side_key(side, "StatCategories"), slot.key().into()]
            }
            Self::StatName(side, slot) => vec![
                side_key(side, "StatCategories"),
                slot.key().into(),
                "stat".into(),
            ],
            Self::StatTimeFrame(side, slot) => vec![
                side_key(side, "StatCategories"),
                slot.key().into(),
                "timeFrame".into(),
            ],
            Self::StatSeason(side, slot) => vec![
                side_key(side, "StatCategories"),
                slot.key().into(),
                "season".into(),
            ],
            Self::StatLeague(side, slot) => vec![
                side_key(side, "StatCategories"),
                slot.key().into(),
                "league".into(),
            ],
            Self::Headlines => vec!["headlines".into()],
            Self::MaxBoxScores => vec!["maxBoxScores".into()],
        }
    }

    /// Convert a loosely-typed JSON value into the value this path holds
    pub fn value_from_json(&self, value: Value) -> SettingsResult<SettingValue> {
        let mismatch = |expected: &'static str, got: &Value| SettingsError::ValueMismatch {
            path: self.to_string(),
            expected,
            got: got.to_string(),
        };

        let parsed = match self {
            Self::UseLocalStorage
            | Self::ShowSeries
            | Self::Playoffs(_)
            | Self::StatCategoriesSameForBothTeams
            | Self::StatTimeFramesSameForBothTeams
            | Self::ShowStatTimeframes => {
                SettingValue::Bool(value.as_bool().ok_or_else(|| mismatch("a boolean", &value))?)
            }
            Self::Season | Self::Wins(_) | Self::MaxBoxScores | Self::StatSeason(_, _) => {
                let number = value
                    .as_u64()
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| mismatch("a number", &value))?;
                SettingValue::Number(number)
            }
            Self::SeasonSubtext
            | Self::Team(_)
            | Self::Player(_)
            | Self::Abbrev(_)
            | Self::Logo(_)
            | Self::SeriesLeft
            | Self::SeriesRight
            | Self::Headlines
            | Self::StatName(_, _) => match value {
                Value::String(text) => SettingValue::Text(text),
                other => return Err(mismatch("a string", &other)),
            },
            Self::League | Self::StatLeague(_, _) => SettingValue::League(
                serde_json::from_value(value.clone()).map_err(|_| mismatch("a league", &value))?,
            ),
            Self::AllPlayoffs => SettingValue::Playoffs(
                serde_json::from_value(value.clone())
                    .map_err(|_| mismatch("playoff flags", &value))?,
            ),
            Self::StatCategories(_) => SettingValue::Categories(Box::new(
                serde_json::from_value(value.clone())
                    .map_err(|_| mismatch("six stat categories", &value))?,
            )),
            Self::StatCategory(_, _) => SettingValue::Category(
                serde_json::from_value(value.clone())
                    .map_err(|_| mismatch("a stat category", &value))?,
            ),
            Self::StatTimeFrame(_, _) => match value {
                Value::String(_) => SettingValue::TimeFrameKind(
                    serde_json::from_value(value.clone())
                        .map_err(|_| mismatch("a time frame kind", &value))?,
                ),
                other => SettingValue::TimeFrame(
                    time_frame_from_json(&other).ok_or_else(|| mismatch("a time frame", &other))?,
                ),
            },
        };

        Ok(parsed)
    }
}

/// A complete time frame is written as `{timeFrame, season, league}`.
///
/// `season` is required by the season kinds and `league` by the league kinds;
/// kinds that do not use a qualifier may omit it.
fn time_frame_from_json(value: &Value) -> Option<TimeFrame> {
    let kind: TimeFrameKind = serde_json::from_value(value.get("timeFrame")?.clone()).ok()?;
    let unqualified = TimeFrame::from_parts(kind, 0, League::default());
    let season = match value.get("season") {
        Some(season) => u32::try_from(season.as_u64()?).ok()?,
        None if unqualified.season().is_some() => return None,
        None => 0,
    };
    let league = match value.get("league") {
        Some(league) => serde_json::from_value(league.clone()).ok()?,
        None if unqualified.league().is_some() => return None,
        None => League::default(),
    };
    Some(TimeFrame::from_parts(kind, season, league))
}

fn split_side(key: &str) -> Option<(Side, &str)> {
    if let Some(field) = key.strip_prefix("away") {
        Some((Side::Away, field))
    } else {
        key.strip_prefix("home").map(|field| (Side::Home, field))
    }
}

impl fmt::Display for SettingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments().join("."))
    }
}

impl FromStr for SettingPath {
    type Err = SettingsError;

    /// Dotted form, e.g. `awayStatCategories.first.stat`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.trim().split('.').filter(|k| !k.is_empty()).collect();
        Self::from_segments(segments.as_slice())
    }
}

impl SettingsStore {
    /// Read the value at `path`
    pub fn get(&self, path: SettingPath) -> SettingValue {
        match path {
            SettingPath::UseLocalStorage => SettingValue::Bool(self.use_local_storage),
            SettingPath::AllPlayoffs => SettingValue::Playoffs(self.playoffs),
            SettingPath::Playoffs(league) => SettingValue::Bool(self.playoffs.get(league)),
            SettingPath::League => SettingValue::League(self.league),
            SettingPath::Season => SettingValue::Number(self.season),
            SettingPath::SeasonSubtext => SettingValue::Text(self.season_subtext.clone()),
            SettingPath::ShowSeries => SettingValue::Bool(self.show_series),
            SettingPath::Team(side) => SettingValue::Text(self.team(side).to_string()),
            SettingPath::Player(side) => SettingValue::Text(self.player(side).to_string()),
            SettingPath::Abbrev(side) => SettingValue::Text(self.abbrev(side).to_string()),
            SettingPath::Logo(side) => SettingValue::Text(match side {
                Side::Away => self.away_logo.clone(),
                Side::Home => self.home_logo.clone(),
            }),
            SettingPath::Wins(side) => SettingValue::Number(self.wins(side)),
            SettingPath::SeriesLeft => SettingValue::Text(self.series_left.clone()),
            SettingPath::SeriesRight => SettingValue::Text(self.series_right.clone()),
            SettingPath::StatCategoriesSameForBothTeams => {
                SettingValue::Bool(self.stat_categories_same_for_both_teams)
            }
            SettingPath::StatTimeFramesSameForBothTeams => {
                SettingValue::Bool(self.stat_time_frames_same_for_both_teams)
            }
            SettingPath::ShowStatTimeframes => SettingValue::Bool(self.show_stat_timeframes),
            SettingPath::StatCategories(side) => {
                SettingValue::Categories(Box::new(self.stat_categories(side).clone()))
            }
            SettingPath::StatCategory(side, slot) => {
                SettingValue::Category(self.stat_categories(side).get(slot).clone())
            }
            SettingPath::StatName(side, slot) => {
                SettingValue::Text(self.stat_categories(side).get(slot).stat.clone())
            }
            SettingPath::StatTimeFrame(side, slot) => {
                SettingValue::TimeFrameKind(self.stat_categories(side).get(slot).time_frame.kind())
            }
            SettingPath::StatSeason(side, slot) => {
                SettingValue::Number(self.stat_categories(side).get(slot).time_frame.season().unwrap_or(0))
            }
            SettingPath::StatLeague(side, slot) => SettingValue::League(
                self.stat_categories(side)
                    .get(slot)
                    .time_frame
                    .league()
                    .unwrap_or_default(),
            ),
            SettingPath::Headlines => SettingValue::Text(self.headlines.clone()),
            SettingPath::MaxBoxScores => SettingValue::Number(self.max_box_scores),
        }
    }

    /// Replace the value at `path`, leaving every other field untouched
    pub fn set(&mut self, path: SettingPath, value: SettingValue) -> SettingsResult<()> {
        let mismatch = |expected: &'static str, value: &SettingValue| SettingsError::ValueMismatch {
            path: path.to_string(),
            expected,
            got: value.kind_name().to_string(),
        };

        match (path, value) {
            (SettingPath::UseLocalStorage, SettingValue::Bool(v)) => self.use_local_storage = v,
            (SettingPath::AllPlayoffs, SettingValue::Playoffs(v)) => self.playoffs = v,
            (SettingPath::Playoffs(league), SettingValue::Bool(v)) => self.playoffs.set(league, v),
            (SettingPath::League, SettingValue::League(v)) => self.league = v,
            (SettingPath::Season, SettingValue::Number(v)) => self.season = v,
            (SettingPath::SeasonSubtext, SettingValue::Text(v)) => self.season_subtext = v,
            (SettingPath::ShowSeries, SettingValue::Bool(v)) => self.show_series = v,
            (SettingPath::Team(Side::Away), SettingValue::Text(v)) => self.away_team = v,
            (SettingPath::Team(Side::Home), SettingValue::Text(v)) => self.home_team = v,
            (SettingPath::Player(Side::Away), SettingValue::Text(v)) => self.away_player = v,
            (SettingPath::Player(Side::Home), SettingValue::Text(v)) => self.home_player = v,
            (SettingPath::Abbrev(Side::Away), SettingValue::Text(v)) => self.away_abbrev = v,
            (SettingPath::Abbrev(Side::Home), SettingValue::Text(v)) => self.home_abbrev = v,
            (SettingPath::Logo(Side::Away), SettingValue::Text(v)) => self.away_logo = v,
            (SettingPath::Logo(Side::Home), SettingValue::Text(v)) => self.home_logo = v,
            (SettingPath::Wins(Side::Away), SettingValue::Number(v)) => self.away_wins = v,
            (SettingPath::Wins(Side::Home), SettingValue::Number(v)) => self.home_wins = v,
            (SettingPath::SeriesLeft, SettingValue::Text(v)) => self.series_left = v,
            (SettingPath::SeriesRight, SettingValue::Text(v)) => self.series_right = v,
            (SettingPath::StatCategoriesSameForBothTeams, SettingValue::Bool(v)) => {
                self.stat_categories_same_for_both_teams = v
            }
            (SettingPath::StatTimeFramesSameForBothTeams, SettingValue::Bool(v)) => {
                self.stat_time_frames_same_for_both_teams = v
            }
            (SettingPath::ShowStatTimeframes, SettingValue::Bool(v)) => self.show_stat_timeframes = v,
            (SettingPath::StatCategories(side), SettingValue::Categories(v)) => {
                *self.stat_categories_mut(side) = *v
            }
            (SettingPath::StatCategory(side, slot), SettingValue::Category(v)) => {
                *self.stat_categories_mut(side).get_mut(slot) = v
            }
            (SettingPath::StatName(side, slot), SettingValue::Text(v)) => {
                self.stat_categories_mut(side).get_mut(slot).stat = v
            }
            (SettingPath::StatTimeFrame(side, slot), SettingValue::TimeFrame(v)) => {
                self.stat_categories_mut(side).get_mut(slot).time_frame = v
            }
            (SettingPath::StatTimeFrame(side, slot), SettingValue::TimeFrameKind(kind)) => {
                // Qualifiers the slot already has are kept, missing ones come from the store
                let (season, league) = (self.season, self.league);
                let time_frame = &mut self.stat_categories_mut(side).get_mut(slot).time_frame;
                *time_frame = TimeFrame::from_parts(
                    kind,
                    time_frame.season().unwrap_or(season),
                    time_frame.league().unwrap_or(league),
                );
            }
            (SettingPath::StatSeason(side, slot), SettingValue::Number(v)) => {
                let time_frame = &mut self.stat_categories_mut(side).get_mut(slot).time_frame;
                if time_frame.season().is_some() {
                    *time_frame = TimeFrame::from_parts(time_frame.kind(), v, League::default());
                }
            }
            (SettingPath::StatLeague(side, slot), SettingValue::League(v)) => {
                let time_frame = &mut self.stat_categories_mut(side).get_mut(slot).time_frame;
                if time_frame.league().is_some() {
                    *time_frame = TimeFrame::from_parts(time_frame.kind(), 0, v);
                }
            }
            (SettingPath::Headlines, SettingValue::Text(v)) => self.headlines = v,
            (SettingPath::MaxBoxScores, SettingValue::Number(v)) => self.max_box_scores = v,
            (path, value) => {
                // Reading the path tells us what it expects
                let expected = self.get(path).kind_name();
                return Err(mismatch(expected, &value));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_top_level_paths() {
        assert_eq!("league".parse::<SettingPath>().unwrap(), SettingPath::League);
        assert_eq!("awayTeam".parse::<SettingPath>().unwrap(), SettingPath::Team(Side::Away));
        assert_eq!("homeWins".parse::<SettingPath>().unwrap(), SettingPath::Wins(Side::Home));
        assert_eq!(
            "statTimeFramesSameForBothTeams".parse::<SettingPath>().unwrap(),
            SettingPath::StatTimeFramesSameForBothTeams
        );
    }

    #[test]
    fn test_parse_nested_paths() {
        assert_eq!(
            SettingPath::from_segments(&["playoffs", "AAA"]).unwrap(),
            SettingPath::Playoffs(League::AAA)
        );
        assert_eq!(
            SettingPath::from_segments(&["homeStatCategories", "fourth"]).unwrap(),
            SettingPath::StatCategory(Side::Home, Slot::Fourth)
        );
        assert_eq!(
            "awayStatCategories.sixth.timeFrame".parse::<SettingPath>().unwrap(),
            SettingPath::StatTimeFrame(Side::Away, Slot::Sixth)
        );
    }

    #[test]
    fn test_parse_unknown_paths() {
        for bad in ["", "awayColor", "playoffs.MLB", "awayTeam.first", "homeStatCategories.seventh", "league.x", "awayStatCategories.first.round"] {
            assert!(
                matches!(bad.parse::<SettingPath>(), Err(SettingsError::UnknownPath(_))),
                "{} should be unknown",
                bad
            );
        }
    }

    #[test]
    fn test_segments_round_trip() {
        let paths = [
            SettingPath::UseLocalStorage,
            SettingPath::AllPlayoffs,
            SettingPath::Playoffs(League::AA),
            SettingPath::Logo(Side::Home),
            SettingPath::StatCategories(Side::Away),
            SettingPath::StatName(Side::Home, Slot::Second),
            SettingPath::StatTimeFrame(Side::Away, Slot::Fifth),
            SettingPath::StatSeason(Side::Home, Slot::First),
            SettingPath::StatLeague(Side::Away, Slot::Third),
            SettingPath::MaxBoxScores,
        ];
        for path in paths {
            assert_eq!(SettingPath::from_segments(path.segments().as_slice()).unwrap(), path);
        }
    }

    #[test]
    fn test_value_from_json() {
        assert_eq!(
            SettingPath::Season.value_from_json(json!(13)).unwrap(),
            SettingValue::Number(13)
        );
        assert_eq!(
            SettingPath::League.value_from_json(json!("AAA")).unwrap(),
            SettingValue::League(League::AAA)
        );
        assert_eq!(
            SettingPath::StatTimeFrame(Side::Away, Slot::First)
                .value_from_json(json!({"timeFrame": "playoffs", "season": 4}))
                .unwrap(),
            SettingValue::TimeFrame(TimeFrame::Playoffs { season: 4 })
        );
        assert_eq!(
            SettingPath::StatTimeFrame(Side::Away, Slot::First)
                .value_from_json(json!("careerPlayoffs"))
                .unwrap(),
            SettingValue::TimeFrameKind(TimeFrameKind::CareerPlayoffs)
        );
        assert_eq!(
            SettingPath::StatLeague(Side::Home, Slot::Sixth)
                .value_from_json(json!("AA"))
                .unwrap(),
            SettingValue::League(League::AA)
        );
    }

    #[test]
    fn test_time_frame_object_needs_its_qualifiers() {
        let path = SettingPath::StatTimeFrame(Side::Away, Slot::First);
        assert!(matches!(
            path.value_from_json(json!({"timeFrame": "regularSeason"})),
            Err(SettingsError::ValueMismatch { .. })
        ));
        assert!(matches!(
            path.value_from_json(json!({"timeFrame": "leaguePlayoffs", "season": 3})),
            Err(SettingsError::ValueMismatch { .. })
        ));
        assert_eq!(
            path.value_from_json(json!({"timeFrame": "careerRegularSeason"})).unwrap(),
            SettingValue::TimeFrame(TimeFrame::CareerRegularSeason)
        );
        assert!(matches!(
            path.value_from_json(json!("allTime")),
            Err(SettingsError::ValueMismatch { .. })
        ));
    }

    #[test]
    fn test_value_from_json_mismatch() {
        assert!(matches!(
            SettingPath::Season.value_from_json(json!("13")),
            Err(SettingsError::ValueMismatch { .. })
        ));
        assert!(matches!(
            SettingPath::ShowSeries.value_from_json(json!(1)),
            Err(SettingsError::ValueMismatch { .. })
        ));
        assert!(matches!(
            SettingPath::League.value_from_json(json!("MLB")),
            Err(SettingsError::ValueMismatch { .. })
        ));
    }

    #[test]
    fn test_set_then_get() {
        let mut store = SettingsStore::defaults(1, false);
        store
            .set(SettingPath::Player(Side::Home), SettingValue::Text("Kmart".into()))
            .unwrap();
        assert_eq!(store.home_player, "Kmart");
        assert_eq!(
            store.get(SettingPath::Player(Side::Home)),
            SettingValue::Text("Kmart".into())
        );

        store
            .set(SettingPath::StatName(Side::Away, Slot::Third), SettingValue::Text("obp".into()))
            .unwrap();
        assert_eq!(store.away_stat_categories.third.stat, "obp");
        assert_eq!(
            store.away_stat_categories.third.time_frame,
            TimeFrame::RegularSeason { season: 1 }
        );
    }

    #[test]
    fn test_set_time_frame_kind_keeps_qualifiers() {
        let mut store = SettingsStore::defaults(12, false);
        store.league = League::AAA;
        store.away_stat_categories.first = StatCategory::new("ba", TimeFrame::RegularSeason { season: 9 });
        let first = SettingPath::StatTimeFrame(Side::Away, Slot::First);

        store
            .set(first, SettingValue::TimeFrameKind(TimeFrameKind::Playoffs))
            .unwrap();
        assert_eq!(store.away_stat_categories.first.time_frame, TimeFrame::Playoffs { season: 9 });

        // No league qualifier yet, so the store's league is used
        store
            .set(first, SettingValue::TimeFrameKind(TimeFrameKind::LeagueRegularSeason))
            .unwrap();
        assert_eq!(
            store.away_stat_categories.first.time_frame,
            TimeFrame::LeagueRegularSeason { league: League::AAA }
        );

        store
            .set(first, SettingValue::TimeFrameKind(TimeFrameKind::RegularSeason))
            .unwrap();
        assert_eq!(store.away_stat_categories.first.time_frame, TimeFrame::RegularSeason { season: 12 });
    }

    #[test]
    fn test_set_slot_season_and_league() {
        let mut store = SettingsStore::defaults(12, false);
        store.home_stat_categories.second = StatCategory::new("era", TimeFrame::LeaguePlayoffs { league: League::XBL });

        store
            .set(SettingPath::StatSeason(Side::Home, Slot::First), SettingValue::Number(8))
            .unwrap();
        assert_eq!(store.home_stat_categories.first.time_frame, TimeFrame::RegularSeason { season: 8 });
        assert_eq!(
            store.get(SettingPath::StatSeason(Side::Home, Slot::First)),
            SettingValue::Number(8)
        );

        store
            .set(SettingPath::StatLeague(Side::Home, Slot::Second), SettingValue::League(League::AA))
            .unwrap();
        assert_eq!(
            store.home_stat_categories.second.time_frame,
            TimeFrame::LeaguePlayoffs { league: League::AA }
        );

        // A qualifier the time frame does not carry is ignored
        let before = store.clone();
        store
            .set(SettingPath::StatSeason(Side::Home, Slot::Second), SettingValue::Number(3))
            .unwrap();
        store
            .set(SettingPath::StatLeague(Side::Home, Slot::First), SettingValue::League(League::AAA))
            .unwrap();
        assert_eq!(store, before);
        assert_eq!(
            store.get(SettingPath::StatSeason(Side::Home, Slot::Second)),
            SettingValue::Number(0)
        );
    }

    fn leaves(value: &Value, prefix: &mut Vec<String>, found: &mut Vec<(Vec<String>, Value)>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    prefix.push(key.clone());
                    leaves(child, prefix, found);
                    prefix.pop();
                }
            }
            leaf => found.push((prefix.clone(), leaf.clone())),
        }
    }

    #[test]
    fn test_every_exported_leaf_accepts_its_own_value() {
        let mut store = SettingsStore::defaults(12, true);
        store.home_stat_categories.second = StatCategory::new("oppba", TimeFrame::LeaguePlayoffs { league: League::AA });
        store.home_stat_categories.third = StatCategory::new("era", TimeFrame::CareerRegularSeason);
        store.away_stat_categories.sixth = StatCategory::new("whip", TimeFrame::None);

        let mut found = Vec::new();
        leaves(&serde_json::to_value(&store).unwrap(), &mut Vec::new(), &mut found);
        assert!(found.len() > 50);

        let mut updated = store.clone();
        for (segments, leaf) in found {
            let dotted = segments.join(".");
            let path = SettingPath::from_segments(segments.as_slice())
                .unwrap_or_else(|e| panic!("{}: {}", dotted, e));
            let value = path
                .value_from_json(leaf)
                .unwrap_or_else(|e| panic!("{}: {}", dotted, e));
            assert_eq!(store.get(path), value, "{}", dotted);
            updated
                .set(path, value)
                .unwrap_or_else(|e| panic!("{}: {}", dotted, e));
        }
        assert_eq!(updated, store);
    }

    #[test]
    fn test_set_rejects_wrong_kind() {
        let mut store = SettingsStore::defaults(1, false);
        let before = store.clone();
        let result = store.set(SettingPath::Season, SettingValue::Text("two".into()));
        assert!(matches!(
            result,
            Err(SettingsError::ValueMismatch { expected: "a number", .. })
        ));
        assert_eq!(store, before);
    }
}
