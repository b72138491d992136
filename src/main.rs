use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use ticker::commands;
use ticker::config;
use ticker::settings::{StatCategory, TimeFrame, TimeFrameKind};
use ticker::stats::DEFAULT_LEADER_LIMIT;
use ticker::types::{GameKind, League, Side};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "ticker")]
#[command(about = "XBL broadcast ticker settings and stats", long_about = "XBL broadcast ticker settings and stats\n\nManages the overlay settings store and resolves the stats it displays.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Use built-in sample stats instead of the stats directory
    #[arg(long, global = true)]
    mock: bool,

    /// Neither read nor write persisted settings
    #[arg(long, global = true)]
    no_persist: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    Away,
    Home,
}

impl SideArg {
    fn to_side(self) -> Side {
        match self {
            SideArg::Away => Side::Away,
            SideArg::Home => Side::Home,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TimeFrameArg {
    /// Regular season of --season
    #[value(name = "season")]
    RegularSeason,
    /// Playoffs of --season
    Playoffs,
    #[value(name = "career")]
    CareerRegularSeason,
    CareerPlayoffs,
    /// Regular season games in --league
    #[value(name = "league")]
    LeagueRegularSeason,
    LeaguePlayoffs,
    #[value(name = "h2h")]
    HeadToHeadRegularSeason,
    #[value(name = "h2h-playoffs")]
    HeadToHeadPlayoffs,
    None,
}

impl TimeFrameArg {
    fn to_kind(self) -> TimeFrameKind {
        match self {
            TimeFrameArg::RegularSeason => TimeFrameKind::RegularSeason,
            TimeFrameArg::Playoffs => TimeFrameKind::Playoffs,
            TimeFrameArg::CareerRegularSeason => TimeFrameKind::CareerRegularSeason,
            TimeFrameArg::CareerPlayoffs => TimeFrameKind::CareerPlayoffs,
            TimeFrameArg::LeagueRegularSeason => TimeFrameKind::LeagueRegularSeason,
            TimeFrameArg::LeaguePlayoffs => TimeFrameKind::LeaguePlayoffs,
            TimeFrameArg::HeadToHeadRegularSeason => TimeFrameKind::H2hRegularSeason,
            TimeFrameArg::HeadToHeadPlayoffs => TimeFrameKind::H2hPlayoffs,
            TimeFrameArg::None => TimeFrameKind::None,
        }
    }
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print the settings store, or one value of it
    Show {
        /// Dotted path, e.g. awayStatCategories.first
        path: Option<String>,
    },
    /// Set one value; the value is read as JSON, falling back to a plain string
    Set { path: String, value: String },
    /// Restore one value to its default
    Reset { path: String },
    /// Restore every value to its default
    ResetAll,
    /// Replace the store with an exported JSON file
    Import { file: PathBuf },
    /// Apply a raw action, e.g. '{"type":"reset-all"}'
    Dispatch { action: String },
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and change the overlay settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
    /// Show one side's sidebar as the overlay would
    Sidebar {
        #[arg(value_enum, default_value = "away")]
        side: SideArg,
    },
    /// Resolve a single stat for one side
    Resolve {
        /// Stat identifier, e.g. ba or oppk9
        stat: String,

        #[arg(short, long, value_enum, default_value = "away")]
        side: SideArg,

        #[arg(short, long, value_enum, default_value = "season")]
        time_frame: TimeFrameArg,

        /// Season for season and playoffs time frames (defaults to current)
        #[arg(long)]
        season: Option<u32>,

        /// League for league time frames (defaults to the settings' league)
        #[arg(short, long)]
        league: Option<String>,
    },
    /// Display the top teams for a stat
    Leaders {
        stat: String,

        #[arg(short, long)]
        league: Option<String>,

        /// Use playoff team stats
        #[arg(short, long)]
        playoffs: bool,

        #[arg(short = 'n', long, default_value_t = DEFAULT_LEADER_LIMIT)]
        limit: usize,
    },
    /// Display each team's record per playoff round
    PlayoffRecords {
        #[arg(short, long)]
        league: Option<String>,
    },
    /// Display regular season standings
    Standings {
        #[arg(short, long)]
        league: Option<String>,
    },
    /// Display the box scores the overlay rotates through
    Scores {
        /// Overrides the maxBoxScores setting
        #[arg(short = 'n', long)]
        max: Option<u32>,
    },
    /// Display the parsed headline ticker
    Headlines,
    /// Display current configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        write: bool,
    },
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config, write: bool) -> anyhow::Result<()> {
    if write {
        let path = config::write(cfg)?;
        println!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("current_season: {}", cfg.current_season);
    println!("stats_dir: {}", cfg.stats_dir);
    match cfg.storage_path() {
        Some(path) => println!("storage_file: {}", path.display()),
        None => println!("storage_file: (unavailable)"),
    }
    Ok(())
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

fn execute_settings_command(cfg: &config::Config, no_persist: bool, command: SettingsCommand) -> anyhow::Result<()> {
    let (reducer, store) = commands::open_settings(cfg, no_persist)?;
    match command {
        SettingsCommand::Show { path } => commands::settings::show(&store, path),
        SettingsCommand::Set { path, value } => commands::settings::set(&reducer, &store, &path, &value),
        SettingsCommand::Reset { path } => commands::settings::reset(&reducer, &store, &path),
        SettingsCommand::ResetAll => commands::settings::reset_all(&reducer, &store),
        SettingsCommand::Import { file } => commands::settings::import(&reducer, &file),
        SettingsCommand::Dispatch { action } => commands::settings::dispatch(&reducer, &store, &action),
    }
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(cfg: &config::Config, mock: bool, no_persist: bool, command: Commands) -> anyhow::Result<()> {
    let command = match command {
        Commands::Settings { command } => return execute_settings_command(cfg, no_persist, command),
        other => other,
    };

    let (_, settings) = commands::open_settings(cfg, no_persist)?;
    let season = cfg.current_season;

    match command {
        Commands::Settings { .. } | Commands::Config { .. } => {
            unreachable!("handled before execute_command")
        }
        Commands::Headlines => commands::headlines::run(&settings.headlines),
        Commands::Sidebar { side } => {
            let snapshot = commands::load_snapshot(cfg, mock)?;
            commands::sidebar::run(&snapshot, &settings, side.to_side(), season)
        }
        Commands::Resolve {
            stat,
            side,
            time_frame,
            season: stat_season,
            league,
        } => {
            let snapshot = commands::load_snapshot(cfg, mock)?;
            let league = commands::parse_league(league, settings.league)?;
            let time_frame = TimeFrame::from_parts(time_frame.to_kind(), stat_season.unwrap_or(season), league);
            let category = StatCategory::new(stat, time_frame);
            commands::sidebar::resolve(&snapshot, &settings, side.to_side(), &category, season)
        }
        Commands::Leaders {
            stat,
            league,
            playoffs,
            limit,
        } => {
            let snapshot = commands::load_snapshot(cfg, mock)?;
            let league: League = commands::parse_league(league, settings.league)?;
            let kind = if playoffs {
                GameKind::Playoffs
            } else {
                GameKind::RegularSeason
            };
            commands::leaders::run(&snapshot, league, kind, &stat, limit)
        }
        Commands::PlayoffRecords { league } => {
            let snapshot = commands::load_snapshot(cfg, mock)?;
            let league = commands::parse_league(league, settings.league)?;
            commands::leaders::run_playoff_records(&snapshot, league)
        }
        Commands::Standings { league } => {
            let snapshot = commands::load_snapshot(cfg, mock)?;
            let league = commands::parse_league(league, settings.league)?;
            commands::standings::run(&snapshot, league)
        }
        Commands::Scores { max } => {
            let snapshot = commands::load_snapshot(cfg, mock)?;
            commands::scores::run(&snapshot, max.unwrap_or(settings.max_box_scores))
        }
    }
}

fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let Cli {
        mock,
        no_persist,
        command,
        ..
    } = cli;

    // Handle Config command separately (doesn't need settings or stats)
    let result = match command {
        Commands::Config { write } => handle_config_command(&config, write),
        command => execute_command(&config, mock, no_persist, command),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
