use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("No match results provided")]
    NoInput,
}

/// Per-line parse failure. Recovered inside the parser and never returned
/// from the public aggregation functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedLine {
    #[error("Line must contain exactly two teams separated by ', ' (found {found} segment(s))")]
    SegmentCount { found: usize },

    #[error("Segment '{segment}' must end with a score separated by whitespace")]
    MissingScore { segment: String },

    #[error("Score '{token}' is not a valid integer")]
    InvalidScore { token: String },

    #[error("Team names cannot be empty")]
    EmptyTeamName,

    #[error("Scores cannot be negative")]
    NegativeScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl LeagueError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LeagueError::IoError(_) | LeagueError::NoInput => ErrorCategory::Input,
            LeagueError::SerializationError(_) | LeagueError::CsvError(_) => ErrorCategory::Output,
            LeagueError::ConfigError { .. }
            | LeagueError::InvalidConfigValueError { .. }
            | LeagueError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LeagueError::SerializationError(_) | LeagueError::CsvError(_) => {
                ErrorSeverity::Critical
            }
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit status for this error. Every variant is fatal to the run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LeagueError::IoError(_) => {
                "Check that the input file exists and is readable".to_string()
            }
            LeagueError::NoInput => {
                "Pass a file of match results or pipe lines like 'Lions 3, Snakes 3' on stdin"
                    .to_string()
            }
            LeagueError::SerializationError(_) | LeagueError::CsvError(_) => {
                "Try again with --format text".to_string()
            }
            LeagueError::ConfigError { .. } | LeagueError::ConfigValidationError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            LeagueError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting and run again", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LeagueError::NoInput => "No match results provided.".to_string(),
            LeagueError::IoError(e) => format!("Could not read match results: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
