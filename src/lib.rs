pub mod commands;
pub mod config;
pub mod fixtures;
pub mod formatting;
pub mod headlines;
pub mod settings;
pub mod stats;
pub mod types;
