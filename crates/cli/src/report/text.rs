// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output: one test name per line.

use std::fmt::Write;

use super::OutcomeFormatter;
use crate::calculator::RunOrderOutcome;

/// Text format formatter.
pub struct TextFormatter;

/// Estimated bytes per test name for pre-allocation.
const TEXT_LINE_SIZE: usize = 48;

impl OutcomeFormatter for TextFormatter {
    fn format(&self, outcome: &RunOrderOutcome) -> anyhow::Result<String> {
        let mut out = String::with_capacity(outcome.tests.len() * TEXT_LINE_SIZE);
        for test in &outcome.tests {
            writeln!(out, "{}", test)?;
        }
        Ok(out)
    }
}
