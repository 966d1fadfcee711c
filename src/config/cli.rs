use super::toml_config::TomlConfig;
use crate::core::render::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "league-rankings")]
#[command(about = "Calculate league rankings from match results")]
pub struct CliConfig {
    /// File containing match results; reads standard input when omitted
    pub file: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format for the standings
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Fills unset options from a config file. Command-line values win.
    pub fn merge_file(&mut self, file: &TomlConfig) -> Result<()> {
        if self.file.is_none() {
            self.file = file.input_path().map(PathBuf::from);
        }
        if self.format.is_none() {
            self.format = file.output_format()?;
        }
        self.verbose |= file.verbose();
        Ok(())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(file) = &self.file {
            validate_path("file", &file.to_string_lossy())?;
        }
        if let Some(config) = &self.config {
            validate_path("config", &config.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let config =
            CliConfig::try_parse_from(["league-rankings", "matches.txt", "--format", "csv", "-v"])
                .unwrap();

        assert_eq!(config.file, Some(PathBuf::from("matches.txt")));
        assert_eq!(config.output_format(), OutputFormat::Csv);
        assert!(config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_to_stdin_and_text() {
        let config = CliConfig::try_parse_from(["league-rankings"]).unwrap();

        assert_eq!(config.file, None);
        assert_eq!(config.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(CliConfig::try_parse_from(["league-rankings", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_command_line_overrides_config_file() {
        let file = TomlConfig::from_toml_str(
            "[input]\npath = \"season.txt\"\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let mut config =
            CliConfig::try_parse_from(["league-rankings", "--format", "text"]).unwrap();
        config.merge_file(&file).unwrap();

        assert_eq!(config.file, Some(PathBuf::from("season.txt")));
        assert_eq!(config.output_format(), OutputFormat::Text);
    }
}
