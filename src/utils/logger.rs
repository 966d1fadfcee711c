use crate::domain::ports::DiagnosticSink;
use crate::utils::error::MalformedLine;
use std::cell::RefCell;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("league_rankings=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("league_rankings=info"))
    };

    // stdout 只留給排名結果
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Forwards parser diagnostics to `tracing` at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn malformed_line(&self, line: &str, reason: &MalformedLine) {
        tracing::warn!("Skipping invalid input: '{}'. Error: {}", line, reason);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: String,
    pub reason: MalformedLine,
}

/// Keeps every reported diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: RefCell<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }

    pub fn take(&self) -> Vec<Diagnostic> {
        self.reports.take()
    }
}

impl DiagnosticSink for CollectingSink {
    fn malformed_line(&self, line: &str, reason: &MalformedLine) {
        self.reports.borrow_mut().push(Diagnostic {
            line: line.to_string(),
            reason: reason.clone(),
        });
    }
}
