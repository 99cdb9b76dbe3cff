// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for ordered test lists.

mod json;
mod text;

use crate::calculator::RunOrderOutcome;
use crate::cli::OutputFormat;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Formats an ordering outcome for stdout.
pub trait OutcomeFormatter {
    fn format(&self, outcome: &RunOrderOutcome) -> anyhow::Result<String>;
}

/// Format `outcome` in the requested output format.
pub fn format_outcome(format: OutputFormat, outcome: &RunOrderOutcome) -> anyhow::Result<String> {
    let formatter: Box<dyn OutcomeFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    formatter.format(outcome)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
