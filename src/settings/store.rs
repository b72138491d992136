//! The operator-editable overlay settings.
use serde::{Deserialize, Serialize};

use crate::types::{GameKind, League, Side, Slot};

/// Which games a displayed statistic is aggregated over.
///
/// Exactly one variant is ever selected, and each variant carries only the
/// qualifiers that apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeFrame {
    RegularSeason { season: u32 },
    Playoffs { season: u32 },
    CareerRegularSeason,
    CareerPlayoffs,
    LeagueRegularSeason { league: League },
    LeaguePlayoffs { league: League },
    HeadToHeadRegularSeason,
    HeadToHeadPlayoffs,
    None,
}

impl TimeFrame {
    pub fn kind(&self) -> TimeFrameKind {
        match self {
            Self::RegularSeason { .. } => TimeFrameKind::RegularSeason,
            Self::Playoffs { .. } => TimeFrameKind::Playoffs,
            Self::CareerRegularSeason => TimeFrameKind::CareerRegularSeason,
            Self::CareerPlayoffs => TimeFrameKind::CareerPlayoffs,
            Self::LeagueRegularSeason { .. } => TimeFrameKind::LeagueRegularSeason,
            Self::LeaguePlayoffs { .. } => TimeFrameKind::LeaguePlayoffs,
            Self::HeadToHeadRegularSeason => TimeFrameKind::H2hRegularSeason,
            Self::HeadToHeadPlayoffs => TimeFrameKind::H2hPlayoffs,
            Self::None => TimeFrameKind::None,
        }
    }

    pub fn season(&self) -> Option<u32> {
        match self {
            Self::RegularSeason { season } | Self::Playoffs { season } => Some(*season),
            _ => None,
        }
    }

    pub fn league(&self) -> Option<League> {
        match self {
            Self::LeagueRegularSeason { league } | Self::LeaguePlayoffs { league } => Some(*league),
            _ => None,
        }
    }

    /// Regular season or playoffs, `None` when nothing is shown
    pub fn game_kind(&self) -> Option<GameKind> {
        match self {
            Self::RegularSeason { .. }
            | Self::CareerRegularSeason
            | Self::LeagueRegularSeason { .. }
            | Self::HeadToHeadRegularSeason => Some(GameKind::RegularSeason),
            Self::Playoffs { .. }
            | Self::CareerPlayoffs
            | Self::LeaguePlayoffs { .. }
            | Self::HeadToHeadPlayoffs => Some(GameKind::Playoffs),
            Self::None => None,
        }
    }

    /// Build a time frame from its wire kind plus the qualifiers it may need
    pub fn from_parts(kind: TimeFrameKind, season: u32, league: League) -> Self {
        match kind {
            TimeFrameKind::RegularSeason => Self::RegularSeason { season },
            TimeFrameKind::Playoffs => Self::Playoffs { season },
            TimeFrameKind::CareerRegularSeason => Self::CareerRegularSeason,
            TimeFrameKind::CareerPlayoffs => Self::CareerPlayoffs,
            TimeFrameKind::LeagueRegularSeason => Self::LeagueRegularSeason { league },
            TimeFrameKind::LeaguePlayoffs => Self::LeaguePlayoffs { league },
            TimeFrameKind::H2hRegularSeason => Self::HeadToHeadRegularSeason,
            TimeFrameKind::H2hPlayoffs => Self::HeadToHeadPlayoffs,
            TimeFrameKind::None => Self::None,
        }
    }

    /// Short label shown under a sidebar when timeframes are displayed
    pub fn label(&self) -> String {
        match self {
            Self::RegularSeason { season } => format!("S{} Regular Season", season),
            Self::Playoffs { season } => format!("S{} Playoffs", season),
            Self::CareerRegularSeason => "Career Regular Season".to_string(),
            Self::CareerPlayoffs => "Career Playoffs".to_string(),
            Self::LeagueRegularSeason { league } => format!("{} Regular Season", league),
            Self::LeaguePlayoffs { league } => format!("{} Playoffs", league),
            Self::HeadToHeadRegularSeason => "Head-to-Head Regular Season".to_string(),
            Self::HeadToHeadPlayoffs => "Head-to-Head Playoffs".to_string(),
            Self::None => String::new(),
        }
    }
}

/// Serialized name of a time frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeFrameKind {
    RegularSeason,
    Playoffs,
    CareerRegularSeason,
    CareerPlayoffs,
    LeagueRegularSeason,
    LeaguePlayoffs,
    H2hRegularSeason,
    H2hPlayoffs,
    None,
}

/// One displayed statistic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "StatCategoryRecord", from = "StatCategoryRecord")]
pub struct StatCategory {
    pub stat: String,
    pub time_frame: TimeFrame,
}

impl StatCategory {
    pub fn new(stat: impl Into<String>, time_frame: TimeFrame) -> Self {
        Self {
            stat: stat.into(),
            time_frame,
        }
    }
}

/// Flat wire form of a `StatCategory`.
///
/// `season` and `league` are always written so every exported store has the
/// same shape. Variants that do not use them write 0 and XBL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatCategoryRecord {
    stat: String,
    time_frame: TimeFrameKind,
    season: u32,
    league: League,
}

impl From<StatCategory> for StatCategoryRecord {
    fn from(category: StatCategory) -> Self {
        StatCategoryRecord {
            season: category.time_frame.season().unwrap_or(0),
            league: category.time_frame.league().unwrap_or_default(),
            time_frame: category.time_frame.kind(),
            stat: category.stat,
        }
    }
}

impl From<StatCategoryRecord> for StatCategory {
    fn from(record: StatCategoryRecord) -> Self {
        StatCategory {
            time_frame: TimeFrame::from_parts(record.time_frame, record.season, record.league),
            stat: record.stat,
        }
    }
}

/// The six stat slots for one side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCategories {
    pub first: StatCategory,
    pub second: StatCategory,
    pub third: StatCategory,
    pub fourth: StatCategory,
    pub fifth: StatCategory,
    pub sixth: StatCategory,
}

impl StatCategories {
    /// Six slots sharing one time frame
    pub fn with_stats(stats: [&str; 6], time_frame: TimeFrame) -> Self {
        let [first, second, third, fourth, fifth, sixth] =
            stats.map(|stat| StatCategory::new(stat, time_frame));
        Self {
            first,
            second,
            third,
            fourth,
            fifth,
            sixth,
        }
    }

    pub fn get(&self, slot: Slot) -> &StatCategory {
        match slot {
            Slot::First => &self.first,
            Slot::Second => &self.second,
            Slot::Third => &self.third,
            Slot::Fourth => &self.fourth,
            Slot::Fifth => &self.fifth,
            Slot::Sixth => &self.sixth,
        }
    }

    pub fn get_mut(&mut self, slot: Slot) -> &mut StatCategory {
        match slot {
            Slot::First => &mut self.first,
            Slot::Second => &mut self.second,
            Slot::Third => &mut self.third,
            Slot::Fourth => &mut self.fourth,
            Slot::Fifth => &mut self.fifth,
            Slot::Sixth => &mut self.sixth,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &StatCategory)> {
        Slot::all().into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

/// Per-league playoff flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayoffFlags {
    #[serde(rename = "XBL")]
    pub xbl: bool,
    #[serde(rename = "AAA")]
    pub aaa: bool,
    #[serde(rename = "AA")]
    pub aa: bool,
}

impl PlayoffFlags {
    pub fn get(&self, league: League) -> bool {
        match league {
            League::XBL => self.xbl,
            League::AAA => self.aaa,
            League::AA => self.aa,
        }
    }

    pub fn set(&mut self, league: League, in_playoffs: bool) {
        match league {
            League::XBL => self.xbl = in_playoffs,
            League::AAA => self.aaa = in_playoffs,
            League::AA => self.aa = in_playoffs,
        }
    }
}

/// Stat names shown by default in each sidebar
pub const DEFAULT_STATS: [&str; 6] = ["ba", "hr9", "rs9", "ra9", "lob", "whip"];

/// Default number of games rotated through the box scores
pub const DEFAULT_MAX_BOX_SCORES: u32 = 24;

/// Everything the operator can configure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsStore {
    /// are settings persisted between broadcasts
    pub use_local_storage: bool,
    /// which leagues are in the playoffs
    pub playoffs: PlayoffFlags,
    /// league the players are in. Controls the logo and live stats
    pub league: League,
    pub season: u32,
    /// shown under the season
    pub season_subtext: String,
    /// show the box with series scores
    pub show_series: bool,
    pub away_team: String,
    pub home_team: String,
    pub away_player: String,
    pub home_player: String,
    /// doesn't need to be the official abbreviation
    pub away_abbrev: String,
    pub home_abbrev: String,
    pub away_logo: String,
    pub home_logo: String,
    pub away_wins: u32,
    pub home_wins: u32,
    /// left subtext under the series, e.g. "RD2"
    pub series_left: String,
    /// right subtext under the series, e.g. "BO5"
    pub series_right: String,
    pub stat_categories_same_for_both_teams: bool,
    pub stat_time_frames_same_for_both_teams: bool,
    pub show_stat_timeframes: bool,
    pub away_stat_categories: StatCategories,
    pub home_stat_categories: StatCategories,
    /// one marquee per line, "AAA News | This is text I want to scroll"
    pub headlines: String,
    pub max_box_scores: u32,
}

impl SettingsStore {
    /// Compiled-in defaults for a season
    pub fn defaults(current_season: u32, use_local_storage: bool) -> Self {
        let categories =
            StatCategories::with_stats(DEFAULT_STATS, TimeFrame::RegularSeason { season: current_season });

        SettingsStore {
            use_local_storage,
            playoffs: PlayoffFlags::default(),
            league: League::XBL,
            season: current_season,
            season_subtext: String::new(),
            show_series: true,
            away_team: String::new(),
            home_team: String::new(),
            away_player: String::new(),
            home_player: String::new(),
            away_abbrev: String::new(),
            home_abbrev: String::new(),
            away_logo: String::new(),
            home_logo: String::new(),
            away_wins: 0,
            home_wins: 0,
            series_left: String::new(),
            series_right: String::new(),
            stat_categories_same_for_both_teams: true,
            stat_time_frames_same_for_both_teams: true,
            show_stat_timeframes: true,
            away_stat_categories: categories.clone(),
            home_stat_categories: categories,
            headlines: format!(
                "Broadcast News | You're watching season {} XBL baseball!",
                current_season
            ),
            max_box_scores: DEFAULT_MAX_BOX_SCORES,
        }
    }

    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Away => &self.away_team,
            Side::Home => &self.home_team,
        }
    }

    pub fn player(&self, side: Side) -> &str {
        match side {
            Side::Away => &self.away_player,
            Side::Home => &self.home_player,
        }
    }

    pub fn abbrev(&self, side: Side) -> &str {
        match side {
            Side::Away => &self.away_abbrev,
            Side::Home => &self.home_abbrev,
        }
    }

    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Away => self.away_wins,
            Side::Home => self.home_wins,
        }
    }

    pub fn stat_categories(&self, side: Side) -> &StatCategories {
        match side {
            Side::Away => &self.away_stat_categories,
            Side::Home => &self.home_stat_categories,
        }
    }

    pub fn stat_categories_mut(&mut self, side: Side) -> &mut StatCategories {
        match side {
            Side::Away => &mut self.away_stat_categories,
            Side::Home => &mut self.home_stat_categories,
        }
    }

    /// The category actually shown in a slot.
    ///
    /// With the "same for both teams" flags on, the home side borrows the away
    /// side's stat name and/or time frame.
    pub fn display_category(&self, side: Side, slot: Slot) -> StatCategory {
        let own = self.stat_categories(side).get(slot);
        if side == Side::Away {
            return own.clone();
        }

        let away = self.away_stat_categories.get(slot);
        StatCategory {
            stat: if self.stat_categories_same_for_both_teams {
                away.stat.clone()
            } else {
                own.stat.clone()
            },
            time_frame: if self.stat_time_frames_same_for_both_teams {
                away.time_frame
            } else {
                own.time_frame
            },
        }
    }

    pub fn display_categories(&self, side: Side) -> Vec<(Slot, StatCategory)> {
        Slot::all()
            .into_iter()
            .map(|slot| (slot, self.display_category(side, slot)))
            .collect()
    }

    pub fn in_playoffs(&self) -> bool {
        self.playoffs.get(self.league)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let store = SettingsStore::defaults(12, true);
        assert_eq!(store.season, 12);
        assert_eq!(store.league, League::XBL);
        assert_eq!(store.max_box_scores, 24);
        assert!(store.use_local_storage);
        assert_eq!(store.away_stat_categories.first.stat, "ba");
        assert_eq!(store.home_stat_categories.sixth.stat, "whip");
        assert_eq!(
            store.away_stat_categories.third.time_frame,
            TimeFrame::RegularSeason { season: 12 }
        );
        assert_eq!(
            store.headlines,
            "Broadcast News | You're watching season 12 XBL baseball!"
        );
    }

    #[test]
    fn test_store_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(SettingsStore::defaults(3, false)).unwrap();
        assert_eq!(value["useLocalStorage"], json!(false));
        assert_eq!(value["playoffs"], json!({"XBL": false, "AAA": false, "AA": false}));
        assert_eq!(value["maxBoxScores"], json!(24));
        assert_eq!(
            value["awayStatCategories"]["first"],
            json!({"stat": "ba", "timeFrame": "regularSeason", "season": 3, "league": "XBL"})
        );
    }

    #[test]
    fn test_stat_category_wire_form() {
        let category = StatCategory::new("whip", TimeFrame::LeaguePlayoffs { league: League::AA });
        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(
            value,
            json!({"stat": "whip", "timeFrame": "leaguePlayoffs", "season": 0, "league": "AA"})
        );

        let parsed: StatCategory = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, category);
    }

    #[test]
    fn test_stat_category_ignores_unused_qualifiers() {
        let parsed: StatCategory = serde_json::from_value(
            json!({"stat": "hr", "timeFrame": "h2hPlayoffs", "season": 8, "league": "AAA"}),
        )
        .unwrap();
        assert_eq!(parsed.time_frame, TimeFrame::HeadToHeadPlayoffs);
    }

    #[test]
    fn test_stat_category_rejects_unknown_time_frame() {
        let parsed = serde_json::from_value::<StatCategory>(
            json!({"stat": "hr", "timeFrame": "lifetime", "season": 0, "league": "XBL"}),
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_time_frame_game_kind() {
        assert_eq!(TimeFrame::CareerPlayoffs.game_kind(), Some(GameKind::Playoffs));
        assert_eq!(
            TimeFrame::LeagueRegularSeason { league: League::AAA }.game_kind(),
            Some(GameKind::RegularSeason)
        );
        assert_eq!(TimeFrame::None.game_kind(), None);
    }

    #[test]
    fn test_home_mirrors_away_when_same_flags_set() {
        let mut store = SettingsStore::defaults(5, false);
        store.away_stat_categories.first = StatCategory::new("obp", TimeFrame::CareerRegularSeason);
        store.home_stat_categories.first = StatCategory::new("fip", TimeFrame::CareerPlayoffs);

        let shown = store.display_category(Side::Home, Slot::First);
        assert_eq!(shown, StatCategory::new("obp", TimeFrame::CareerRegularSeason));

        store.stat_categories_same_for_both_teams = false;
        let shown = store.display_category(Side::Home, Slot::First);
        assert_eq!(shown, StatCategory::new("fip", TimeFrame::CareerRegularSeason));

        store.stat_time_frames_same_for_both_teams = false;
        let shown = store.display_category(Side::Home, Slot::First);
        assert_eq!(shown, StatCategory::new("fip", TimeFrame::CareerPlayoffs));
    }

    #[test]
    fn test_away_never_mirrors() {
        let mut store = SettingsStore::defaults(5, false);
        store.home_stat_categories.second = StatCategory::new("e", TimeFrame::None);
        assert_eq!(store.display_category(Side::Away, Slot::Second).stat, "hr9");
    }

    #[test]
    fn test_playoff_flags() {
        let mut store = SettingsStore::defaults(5, false);
        assert!(!store.in_playoffs());
        store.playoffs.set(League::XBL, true);
        assert!(store.in_playoffs());
        store.league = League::AA;
        assert!(!store.in_playoffs());
    }
}
