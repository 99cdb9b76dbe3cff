// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test execution order calculation.
//!
//! Given the tests a harness discovered, [`calculator::RunOrderCalculator`]
//! decides the order they run in: sorted, shuffled, failures first,
//! balanced by recorded runtime, or as listed in an order file.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod order_file;
pub mod policy;
pub mod report;
pub mod statistics;
pub mod unit;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;

pub use calculator::{Diagnostic, RunOrderCalculator, RunOrderOutcome};
pub use config::RunOrderConfig;
pub use policy::RunOrderPolicy;
pub use statistics::{RunStatistics, StatisticsStore};
pub use unit::TestUnit;
