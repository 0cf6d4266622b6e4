//! Basic metrics instrumentation for a command session.
//!
//! Provides counters for processed commands, split by outcome and by command.

use std::collections::BTreeMap;
use std::fmt;

/// Key under which lines that never parsed into a command are counted.
pub const UNPARSED: &str = "<unparsed>";

/// Metrics collector for one session.
#[derive(Debug, Clone, Default)]
pub struct SessionMetrics {
    /// Total number of input lines processed
    commands_total: u64,

    /// Lines that produced a success response
    succeeded_total: u64,

    /// Lines that produced an error line
    failed_total: u64,

    /// Lines processed per command keyword
    per_command: BTreeMap<&'static str, u64>,
}

impl SessionMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one processed line.
    pub fn record(&mut self, command: &'static str, succeeded: bool) {
        self.commands_total += 1;
        if succeeded {
            self.succeeded_total += 1;
        } else {
            self.failed_total += 1;
        }
        *self.per_command.entry(command).or_insert(0) += 1;
    }

    pub fn commands_total(&self) -> u64 {
        self.commands_total
    }

    pub fn succeeded_total(&self) -> u64 {
        self.succeeded_total
    }

    pub fn failed_total(&self) -> u64 {
        self.failed_total
    }

    /// Number of lines recorded for `command`.
    pub fn command_total(&self, command: &str) -> u64 {
        self.per_command.get(command).copied().unwrap_or(0)
    }

    /// Get a snapshot of the current counters.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            commands_total: self.commands_total,
            succeeded_total: self.succeeded_total,
            failed_total: self.failed_total,
            per_command: self
                .per_command
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }
}

/// A snapshot of session counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands_total: u64,
    pub succeeded_total: u64,
    pub failed_total: u64,
    pub per_command: BTreeMap<String, u64>,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} commands ({} ok, {} failed)",
            self.commands_total, self.succeeded_total, self.failed_total
        )?;
        for (command, count) in &self.per_command {
            write!(f, ", {}={}", command, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = SessionMetrics::new();
        assert_eq!(metrics.commands_total(), 0);
        assert_eq!(metrics.failed_total(), 0);
    }

    #[test]
    fn test_record_counts_by_outcome_and_command() {
        let mut metrics = SessionMetrics::new();
        metrics.record("add-addressbook", true);
        metrics.record("add-addressbook", false);
        metrics.record(UNPARSED, false);

        assert_eq!(metrics.commands_total(), 3);
        assert_eq!(metrics.succeeded_total(), 1);
        assert_eq!(metrics.failed_total(), 2);
        assert_eq!(metrics.command_total("add-addressbook"), 2);
        assert_eq!(metrics.command_total("remove-contact"), 0);
    }

    #[test]
    fn test_summary_display() {
        let mut metrics = SessionMetrics::new();
        metrics.record("quit", true);
        metrics.record("add-addressbook", true);

        assert_eq!(
            metrics.summary().to_string(),
            "2 commands (2 ok, 0 failed), add-addressbook=1, quit=1"
        );
    }
}
