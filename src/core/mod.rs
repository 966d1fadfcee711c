pub mod formatter;
pub mod league;
pub mod parser;
pub mod points_table;
pub mod rankings;
pub mod render;

pub use crate::domain::model::{MatchOutcome, ParsedMatch, RankedEntry, RunSummary};
pub use crate::domain::ports::{DiagnosticSink, MatchSource};
pub use crate::utils::error::Result;
