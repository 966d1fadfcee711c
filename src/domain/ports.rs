use crate::utils::error::{MalformedLine, Result};

/// Receives warnings about lines the parser had to drop.
pub trait DiagnosticSink {
    fn malformed_line(&self, line: &str, reason: &MalformedLine);
}

/// Where the driver gets its raw match lines from.
pub trait MatchSource {
    fn read_lines(&self) -> Result<Vec<String>>;

    fn describe(&self) -> String;
}

