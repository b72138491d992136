use anyhow::Result;

use crate::formatting::stat_label;
use crate::settings::{SettingsStore, StatCategory, TimeFrame};
use crate::stats::aggregations::record_or_seed;
use crate::stats::resolver::{locate, resolve_sidebar, resolve_stat, StatContext};
use crate::stats::StatsSnapshot;
use crate::types::Side;

/// Width of the stat label column
const LABEL_COL_WIDTH: usize = 8;

/// Width of the stat value column
const VALUE_COL_WIDTH: usize = 8;

/// Abbreviation shown for a side: the operator's override, else the one the
/// player used for that team
pub fn display_abbrev(snapshot: &StatsSnapshot, settings: &SettingsStore, side: Side) -> String {
    let abbrev = settings.abbrev(side);
    if !abbrev.is_empty() {
        return abbrev.to_string();
    }
    snapshot
        .careers
        .abbrev_for_team(settings.player(side), settings.team(side))
}

pub fn format_sidebar(
    snapshot: &StatsSnapshot,
    settings: &SettingsStore,
    side: Side,
    current_season: u32,
) -> String {
    let mut output = String::new();
    let team = settings.team(side);
    let abbrev = display_abbrev(snapshot, settings, side);

    output.push_str(&format!(
        "{} ({})  {}\n",
        if team.is_empty() { "-" } else { team },
        abbrev,
        record_or_seed(snapshot, settings, team)
    ));
    output.push_str(&format!("Player: {}\n", settings.player(side)));
    if settings.show_series {
        output.push_str(&format!("Series wins: {}\n", settings.wins(side)));
    }

    for row in resolve_sidebar(snapshot, settings, side, current_season) {
        let line = format!(
            "{:<label_width$} {:>value_width$}",
            row.label,
            row.value,
            label_width = LABEL_COL_WIDTH,
            value_width = VALUE_COL_WIDTH
        );
        if settings.show_stat_timeframes {
            output.push_str(&format!("{}  {}\n", line, row.time_frame.label()));
        } else {
            output.push_str(&format!("{}\n", line));
        }
    }

    output
}

pub fn run(snapshot: &StatsSnapshot, settings: &SettingsStore, side: Side, current_season: u32) -> Result<()> {
    print!("{}", format_sidebar(snapshot, settings, side, current_season));
    Ok(())
}

/// Resolve a single stat for one side and show where it was read from
pub fn format_resolution(
    snapshot: &StatsSnapshot,
    settings: &SettingsStore,
    side: Side,
    category: &StatCategory,
    current_season: u32,
) -> String {
    let ctx = StatContext::for_side(settings, side, current_season);
    let value = resolve_stat(snapshot, category, &ctx);
    let source = match locate(&category.time_frame, &ctx) {
        Some(location) => location.path().join("."),
        None => "nothing".to_string(),
    };

    let mut output = format!("{} {}\n", stat_label(&category.stat), value);
    if category.time_frame != TimeFrame::None {
        output.push_str(&format!("{}\n", category.time_frame.label()));
    }
    output.push_str(&format!("from {}\n", source));
    output
}

pub fn resolve(
    snapshot: &StatsSnapshot,
    settings: &SettingsStore,
    side: Side,
    category: &StatCategory,
    current_season: u32,
) -> Result<()> {
    print!("{}", format_resolution(snapshot, settings, side, category, current_season));
    Ok(())
}
