pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileSource, MemorySource, StdinSource};
pub use crate::core::{
    formatter::format_rankings, league::LeagueEngine, parser::parse_match_line,
    rankings::compute_rankings, render::OutputFormat,
};
pub use domain::model::{ParsedMatch, RankedEntry, Score};
pub use utils::error::{LeagueError, MalformedLine, Result};
