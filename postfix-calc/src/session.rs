//! Evaluation of one expression per input line.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::config::CalcConfig;
use crate::format_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Lines that produced a value.
    pub evaluated: usize,
    /// Lines that produced an error.
    pub failed: usize,
}

impl SessionSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Reads expressions line by line and writes one output line for each.
///
/// Blank lines are skipped. A result is written as the formatted value, an
/// error as `line N: <error>` with `N` counted from 1.
pub struct Session {
    precision: Option<usize>,
    continue_on_error: bool,
}

impl Session {
    pub fn new(config: &CalcConfig) -> Self {
        Self {
            precision: config.precision,
            continue_on_error: config.continue_on_error,
        }
    }

    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        for (index, line) in input.split(b'\n').enumerate() {
            let line = line?;
            let line = line.strip_suffix(b"\r").unwrap_or(&line[..]);

            let outcome = match std::str::from_utf8(line) {
                Ok(text) if text.trim().is_empty() => continue,
                Ok(text) => crate::evaluate(text).map_err(|e| e.to_string()),
                Err(_) => Err("invalid UTF-8".to_string()),
            };

            match outcome {
                Ok(value) => {
                    summary.evaluated += 1;
                    writeln!(output, "{}", format_value(value, self.precision))?;
                }
                Err(message) => {
                    summary.failed += 1;
                    warn!(line = index + 1, error = %message, "failed to evaluate expression");
                    writeln!(output, "line {}: {}", index + 1, message)?;
                    if !self.continue_on_error {
                        break;
                    }
                }
            }

            output.flush()?;
        }

        Ok(summary)
    }
}
