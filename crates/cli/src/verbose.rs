// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output logger for diagnostic information.
//!
//! Writes a summary of the ordering to stderr when `--verbose` is given.

use std::fmt::{self, Write};

use crate::calculator::{RunOrderCalculator, RunOrderOutcome};
use crate::policy::RunOrderPolicy;

/// Verbose output logger. Writes to stderr when enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print the ordering summary to stderr.
    pub fn outcome(&self, calculator: &RunOrderCalculator, input_len: usize, outcome: &RunOrderOutcome) {
        if self.enabled {
            eprint!("{}", summary(calculator, input_len, outcome));
        }
    }
}

/// Render the ordering summary shown in verbose mode.
pub fn summary(calculator: &RunOrderCalculator, input_len: usize, outcome: &RunOrderOutcome) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_summary(&mut out, calculator, input_len, outcome);
    out
}

fn write_summary(
    out: &mut impl Write,
    calculator: &RunOrderCalculator,
    input_len: usize,
    outcome: &RunOrderOutcome,
) -> fmt::Result {
    let config = calculator.config();

    writeln!(out, "\nRun order:")?;
    writeln!(out, "  policy: {}", outcome.policy)?;
    if let Some((_, ignored)) = config.policy.split_first()
        && !ignored.is_empty()
    {
        let names: Vec<&str> = ignored.iter().map(|p| p.name()).collect();
        writeln!(out, "  ignored policies: {}", names.join(", "))?;
    }
    if let Some(direction) = calculator.sort_direction() {
        writeln!(out, "  direction: {:?}", direction)?;
    }
    match outcome.policy {
        RunOrderPolicy::FailureFirst => {
            writeln!(out, "  statistics: {}", config.statistics_file.display())?;
        }
        RunOrderPolicy::BalancedRuntime => {
            writeln!(out, "  statistics: {}", config.statistics_file.display())?;
            writeln!(out, "  workers: {}", config.workers)?;
        }
        RunOrderPolicy::InputFile => {
            writeln!(out, "  order file: {}", config.order_file.display())?;
        }
        _ => {}
    }
    writeln!(out, "  tests: {} in, {} out", input_len, outcome.tests.len())?;

    if !outcome.diagnostics.is_empty() {
        writeln!(out, "\nDiagnostics:")?;
        for diagnostic in &outcome.diagnostics {
            writeln!(out, "  {}", diagnostic)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
