use crate::core::rankings::compute_rankings_with_summary;
use crate::core::render::{render, OutputFormat};
use crate::core::MatchSource;
use crate::utils::error::{LeagueError, Result};
use crate::utils::logger::TracingSink;

pub struct LeagueEngine<S: MatchSource> {
    source: S,
    format: OutputFormat,
}

impl<S: MatchSource> LeagueEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            format: OutputFormat::Text,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Reads every line from the source and returns the rendered standings.
    pub fn run(&self) -> Result<String> {
        tracing::debug!("Reading match results from {}", self.source.describe());
        let lines = self.source.read_lines()?;

        if lines.is_empty() {
            return Err(LeagueError::NoInput);
        }

        let (ranked, summary) = compute_rankings_with_summary(&lines, &TracingSink);
        tracing::info!(
            "📊 Read {} line(s): {} match(es) counted, {} skipped, {} team(s)",
            summary.lines_read,
            summary.matches_counted,
            summary.lines_skipped,
            summary.teams
        );

        render(&ranked, self.format)
    }
}
