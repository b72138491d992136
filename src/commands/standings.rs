use anyhow::{Context, Result};

use crate::commands::TEAM_COL_WIDTH;
use crate::stats::aggregations::standings;
use crate::stats::snapshot::SeasonStats;
use crate::stats::StatsSnapshot;
use crate::types::League;

/// Width of the rank column
const RANK_COL_WIDTH: usize = 4;

/// Width of wins, losses and games remaining columns
const COUNT_COL_WIDTH: usize = 3;

/// Width of the games behind column
const GB_COL_WIDTH: usize = 5;

pub fn format_standings_table(league: League, season: &SeasonStats) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} Standings{}\n",
        league,
        season
            .current_season
            .map(|n| format!(" (Season {})", n))
            .unwrap_or_default()
    ));
    output.push_str(&format!(
        "{:<rank_width$} {:<team_width$} {:>count_width$} {:>count_width$} {:>gb_width$} {:>count_width$}\n",
        "#",
        "Team",
        "W",
        "L",
        "GB",
        "GR",
        rank_width = RANK_COL_WIDTH,
        team_width = TEAM_COL_WIDTH,
        count_width = COUNT_COL_WIDTH,
        gb_width = GB_COL_WIDTH
    ));

    for (team, record) in standings(&season.season_team_records) {
        output.push_str(&format!(
            "{:<rank_width$} {:<team_width$} {:>count_width$} {:>count_width$} {:>gb_width$.1} {:>count_width$}\n",
            record.rank,
            team,
            record.wins,
            record.losses,
            record.gb,
            record.remaining,
            rank_width = RANK_COL_WIDTH,
            team_width = TEAM_COL_WIDTH,
            count_width = COUNT_COL_WIDTH,
            gb_width = GB_COL_WIDTH
        ));
    }

    output
}

pub fn run(snapshot: &StatsSnapshot, league: League) -> Result<()> {
    let season = snapshot
        .league(league)
        .with_context(|| format!("No stats loaded for {}", league))?;
    print!("{}", format_standings_table(league, season));
    Ok(())
}
