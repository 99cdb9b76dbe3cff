// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output.

use serde_json::json;

use super::OutcomeFormatter;
use crate::calculator::RunOrderOutcome;

/// JSON format formatter.
pub struct JsonFormatter;

impl OutcomeFormatter for JsonFormatter {
    fn format(&self, outcome: &RunOrderOutcome) -> anyhow::Result<String> {
        let output = json!({
            "policy": outcome.policy,
            "tests": outcome.tests,
            "dropped": outcome.dropped,
            "diagnostics": outcome.diagnostics,
        });
        let mut s = serde_json::to_string_pretty(&output)?;
        s.push('\n');
        Ok(s)
    }
}
