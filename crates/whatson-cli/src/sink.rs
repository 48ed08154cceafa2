//! Output sinks for rendered schedule lines.

use std::io::{self, Write};

use anyhow::{Context, Result};

/// A destination accepting ordered output lines.
pub trait OutputSink {
    /// Writes one line.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn write(&mut self, line: &str) -> Result<()>;

    /// Reports a failure without interrupting the line stream.
    fn write_error(&mut self, message: &str);
}

/// Stdout-backed sink.
#[derive(Debug)]
pub struct ConsoleSink {
    /// Locked-on-demand stdout handle.
    out: io::Stdout,
}

impl ConsoleSink {
    /// Creates a stdout sink.
    #[must_use]
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for ConsoleSink {
    fn write(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}").context("failed to write output line")
    }

    fn write_error(&mut self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Writes every line in order.
///
/// A failing line is reported once through the sink's error channel; the
/// remaining lines (headers, footers, later buckets) are still attempted
/// so a transient sink error does not truncate the run.
pub fn emit_lines(sink: &mut dyn OutputSink, lines: &[String]) {
    let mut reported = false;
    for line in lines {
        if let Err(e) = sink.write(line)
            && !reported
        {
            sink.write_error(&format!("failed to write schedule line: {e}"));
            reported = true;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::collections::HashSet;

    use anyhow::bail;

    use super::*;

    /// Sink test double that fails on chosen write attempts.
    struct RecordingSink {
        lines: Vec<String>,
        errors: Vec<String>,
        fail_attempts: HashSet<usize>,
        attempts: usize,
    }

    impl RecordingSink {
        fn new(fail_attempts: HashSet<usize>) -> Self {
            Self {
                lines: Vec::new(),
                errors: Vec::new(),
                fail_attempts,
                attempts: 0,
            }
        }
    }

    impl OutputSink for RecordingSink {
        fn write(&mut self, line: &str) -> Result<()> {
            let attempt = self.attempts;
            self.attempts = self.attempts.saturating_add(1);
            if self.fail_attempts.contains(&attempt) {
                bail!("sink closed");
            }
            self.lines.push(String::from(line));
            Ok(())
        }

        fn write_error(&mut self, message: &str) {
            self.errors.push(String::from(message));
        }
    }

    /// Helper building owned lines.
    fn make_lines(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| String::from(*l)).collect()
    }

    #[test]
    fn test_lines_are_written_in_order() {
        // Arrange
        let mut sink = RecordingSink::new(HashSet::new());
        let lines = make_lines(&["CBS (1)", "20:00  NCIS", ""]);

        // Act
        emit_lines(&mut sink, &lines);

        // Assert
        assert_eq!(sink.lines, lines);
        assert!(sink.errors.is_empty());
    }

    #[test]
    fn test_one_failure_is_reported_once_and_rest_still_emit() {
        // Arrange: the second write fails
        let mut sink = RecordingSink::new(HashSet::from([1]));
        let lines = make_lines(&["header", "broken", "footer"]);

        // Act
        emit_lines(&mut sink, &lines);

        // Assert
        assert_eq!(sink.lines, make_lines(&["header", "footer"]));
        assert_eq!(sink.errors.len(), 1);
        assert!(sink.errors.first().unwrap().contains("sink closed"));
    }

    #[test]
    fn test_repeated_failures_report_only_once() {
        // Arrange
        let mut sink = RecordingSink::new(HashSet::from([0, 2]));
        let lines = make_lines(&["a", "b", "c", "d"]);

        // Act
        emit_lines(&mut sink, &lines);

        // Assert
        assert_eq!(sink.lines, make_lines(&["b", "d"]));
        assert_eq!(sink.errors.len(), 1);
    }
}
