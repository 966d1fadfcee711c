// Adapters layer: concrete match sources (file, stdin, memory).

use crate::domain::ports::MatchSource;
use crate::utils::error::Result;
use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;

pub const STDIN_PROMPT: &str = "Enter match results (one per line). Press Ctrl+D (Linux/macOS) or Ctrl+Z (Windows) when done:";

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MatchSource for FileSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn describe(&self) -> String {
        format!("file '{}'", self.path.display())
    }
}

/// Reads standard input until end of input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl MatchSource for StdinSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            eprintln!("{}", STDIN_PROMPT);
        }

        let mut lines = Vec::new();
        for line in stdin.lock().lines() {
            lines.push(line?);
        }
        Ok(lines)
    }

    fn describe(&self) -> String {
        "standard input".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lines: Vec<String>,
}

impl MemorySource {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl MatchSource for MemorySource {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory line(s)", self.lines.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_source_reads_lines() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"Lions 3, Snakes 3\r\nTarantulas 1, FC Awesome 0\n")
            .unwrap();

        let lines = FileSource::new(temp_file.path()).read_lines().unwrap();
        assert_eq!(lines, vec!["Lions 3, Snakes 3", "Tarantulas 1, FC Awesome 0"]);
    }

    #[test]
    fn test_file_source_missing_file() {
        let source = FileSource::new("/definitely/not/here/matches.txt");
        assert!(source.read_lines().is_err());
        assert!(source.describe().contains("matches.txt"));
    }
}
