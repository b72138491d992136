use anyhow::Result;

use crate::commands::TEAM_COL_WIDTH;
use crate::formatting::format_final;
use crate::stats::aggregations::recent_box_scores;
use crate::stats::snapshot::GameResult;
use crate::stats::StatsSnapshot;

/// Width of score column
const SCORE_COL_WIDTH: usize = 3;

/// Marks the winning side of a box score
const WINNER_MARKER: &str = "*";

fn format_team_line(team: &str, score: u32, winner: bool) -> String {
    format!(
        "{:<team_width$} {:>score_width$}{}",
        team,
        score,
        if winner { WINNER_MARKER } else { "" },
        team_width = TEAM_COL_WIDTH,
        score_width = SCORE_COL_WIDTH
    )
}

/// One box score: away line, home line, status
pub fn format_box_score(game: &GameResult) -> String {
    let label = match (&game.round, game.week) {
        (Some(round), _) => format!("Playoffs round {}", round),
        (None, Some(week)) => format!("Week {}", week),
        (None, None) => String::new(),
    };

    let mut output = String::new();
    output.push_str(format!("{} {}", format_final(game.innings), label).trim_end());
    output.push('\n');
    output.push_str(&format_team_line(&game.away_team, game.away_score, game.away_score > game.home_score));
    output.push('\n');
    output.push_str(&format_team_line(&game.home_team, game.home_score, game.home_score > game.away_score));
    output.push('\n');
    output
}

pub fn format_scores(games: &[&GameResult]) -> String {
    if games.is_empty() {
        return "No games played yet\n".to_string();
    }
    games
        .iter()
        .map(|game| format_box_score(game))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run(snapshot: &StatsSnapshot, max_box_scores: u32) -> Result<()> {
    let games = recent_box_scores(snapshot, max_box_scores);
    tracing::debug!("SCORES: Showing {} box scores (max {})", games.len(), max_box_scores);
    print!("{}", format_scores(&games));
    Ok(())
}
