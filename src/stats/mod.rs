//! Read side of the overlay: the statistics snapshot and everything derived from it.
pub mod aggregations;
pub mod provider;
pub mod resolver;
pub mod snapshot;
pub mod vocabulary;

pub use aggregations::{
    playoff_round_records, recent_box_scores, record_or_seed, stat_leaders, standings,
    PlayoffRecord, TeamStat, DEFAULT_LEADER_LIMIT,
};
pub use provider::{DirectoryStatsProvider, StatsError, StatsProvider};
pub use resolver::{locate, resolve_sidebar, resolve_stat, ResolvedStat, StatContext, StatLocation};
pub use snapshot::{Careers, GameResult, SeasonStats, StatLine, StatsSnapshot, TeamRecord};
pub use vocabulary::{is_known_stat, KNOWN_STATS};
