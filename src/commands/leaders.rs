use anyhow::{Context, Result};

use crate::commands::TEAM_COL_WIDTH;
use crate::formatting::{format_leader_value, format_record, stat_label};
use crate::stats::aggregations::{playoff_round_records, stat_leaders, PlayoffRecord, TeamStat};
use crate::stats::StatsSnapshot;
use crate::types::{GameKind, League};

pub fn format_leaders(league: League, stat: &str, leaders: &[TeamStat]) -> String {
    let mut output = format!("{} {} Leaders\n", league, stat_label(stat));
    if leaders.is_empty() {
        output.push_str("No teams have this stat\n");
        return output;
    }

    for (index, leader) in leaders.iter().enumerate() {
        output.push_str(&format!(
            "{:>2}. {:<team_width$} {}\n",
            index + 1,
            leader.team,
            format_leader_value(leader.value),
            team_width = TEAM_COL_WIDTH
        ));
    }
    output
}

pub fn run(snapshot: &StatsSnapshot, league: League, kind: GameKind, stat: &str, limit: usize) -> Result<()> {
    let season = snapshot
        .league(league)
        .with_context(|| format!("No stats loaded for {}", league))?;
    let leaders = stat_leaders(season.team_stats(kind), stat, limit);
    print!("{}", format_leaders(league, stat, &leaders));
    Ok(())
}

pub fn format_playoff_records(league: League, records: &[PlayoffRecord]) -> String {
    let mut output = format!("{} Playoff Records\n", league);
    let mut current_round: Option<&str> = None;

    for record in records {
        if current_round != Some(record.round.as_str()) {
            output.push_str(&format!("Round {}\n", record.round));
            current_round = Some(record.round.as_str());
        }
        output.push_str(&format!(
            "  {:<team_width$} {}\n",
            record.team,
            format_record(record.wins, record.losses),
            team_width = TEAM_COL_WIDTH
        ));
    }
    output
}

pub fn run_playoff_records(snapshot: &StatsSnapshot, league: League) -> Result<()> {
    let season = snapshot
        .league(league)
        .with_context(|| format!("No stats loaded for {}", league))?;
    let records = playoff_round_records(season.game_results(GameKind::Playoffs));
    print!("{}", format_playoff_records(league, &records));
    Ok(())
}
