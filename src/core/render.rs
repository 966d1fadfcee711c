use crate::core::formatter::{competition_ranks, format_rankings};
use crate::domain::model::RankedEntry;
use crate::utils::error::{LeagueError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(LeagueError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: text, json, csv".to_string(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct StandingRow<'a> {
    rank: usize,
    team: &'a str,
    points: u32,
}

fn standing_rows(ranked: &[RankedEntry]) -> Vec<StandingRow<'_>> {
    ranked
        .iter()
        .zip(competition_ranks(ranked))
        .map(|(entry, rank)| StandingRow {
            rank,
            team: &entry.team,
            points: entry.points,
        })
        .collect()
}

pub fn render(ranked: &[RankedEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_rankings(ranked)),
        OutputFormat::Json => render_json(ranked),
        OutputFormat::Csv => render_csv(ranked),
    }
}

pub fn render_json(ranked: &[RankedEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&standing_rows(ranked))?)
}

pub fn render_csv(ranked: &[RankedEntry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    // 空榜單也輸出表頭
    writer.write_record(["rank", "team", "points"])?;
    for row in standing_rows(ranked) {
        writer.write_record([row.rank.to_string(), row.team.to_string(), row.points.to_string()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| LeagueError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| LeagueError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
