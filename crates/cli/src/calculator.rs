// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run order calculation.
//!
//! The calculator is built once from a [`RunOrderConfig`]. Only the first
//! requested policy is applied, and the sort direction of the hourly
//! policy is fixed when the calculator is built. Ordering never fails: a
//! missing order file or unreadable statistics degrade the result and
//! are reported as [`Diagnostic`]s.

use std::fmt;
use std::path::PathBuf;

use chrono::Timelike;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::config::RunOrderConfig;
use crate::order_file::{NameResolver, OrderFile, TestResolver, apply_order};
use crate::policy::{RunOrderPolicy, SortDirection};
use crate::statistics::{RunStatistics, StatisticsError, StatisticsStore};
use crate::unit::{TestUnit, dedupe};

/// Degraded or noteworthy condition hit while ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The order file could not be read to the end.
    OrderFileUnreadable {
        path: PathBuf,
        error: String,
        lines_read: usize,
    },
    /// Statistics could not be loaded; empty history was used.
    StatisticsUnavailable { error: String },
    /// Order file lines that do not name a test.
    UnresolvedLines { count: usize },
    /// Order file lines naming tests outside the input.
    UnknownTests { count: usize },
    /// Input tests left out because the order file does not list them.
    DroppedTests { count: usize },
    /// Input tests the statistics store left out of its ordering.
    OmittedByStore { count: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrderFileUnreadable {
                path,
                error,
                lines_read,
            } => write!(
                f,
                "order file {} unreadable after {} lines: {}",
                path.display(),
                lines_read,
                error
            ),
            Self::StatisticsUnavailable { error } => {
                write!(f, "statistics unavailable, using empty history: {}", error)
            }
            Self::UnresolvedLines { count } => {
                write!(f, "{} order file lines did not name a test", count)
            }
            Self::UnknownTests { count } => {
                write!(f, "{} order file entries are not in the input", count)
            }
            Self::DroppedTests { count } => {
                write!(f, "{} tests dropped because the order file does not list them", count)
            }
            Self::OmittedByStore { count } => {
                write!(f, "{} tests missing from the statistics ordering", count)
            }
        }
    }
}

/// Result of ordering a test collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOrderOutcome {
    /// Policy that was applied.
    pub policy: RunOrderPolicy,
    /// Ordered tests, each at most once.
    pub tests: Vec<TestUnit>,
    /// Distinct input tests missing from `tests`.
    pub dropped: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Computes the execution order of a test collection.
#[derive(Debug, Clone)]
pub struct RunOrderCalculator {
    config: RunOrderConfig,
    policy: RunOrderPolicy,
    direction: Option<SortDirection>,
}

impl RunOrderCalculator {
    /// Build a calculator, reading the local hour for the hourly policy.
    pub fn new(config: RunOrderConfig) -> Self {
        Self::with_hour(config, chrono::Local::now().hour())
    }

    /// Build a calculator with an explicit hour of day (0-23).
    pub fn with_hour(config: RunOrderConfig, hour: u32) -> Self {
        let policy = config.active_policy();
        if config.policy.len() > 1 {
            tracing::debug!(
                "applying {} and ignoring {} further policies",
                policy,
                config.policy.len() - 1
            );
        }
        Self {
            direction: policy.sort_direction(hour),
            policy,
            config,
        }
    }

    pub fn policy(&self) -> RunOrderPolicy {
        self.policy
    }

    /// Sort direction for comparator policies, `None` otherwise.
    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.direction
    }

    pub fn config(&self) -> &RunOrderConfig {
        &self.config
    }

    /// Order `input` using the configured files.
    pub fn order(&self, input: &[TestUnit]) -> RunOrderOutcome {
        self.order_with(input, &NameResolver, || {
            RunStatistics::load(&self.config.statistics_file)
        })
    }

    /// Order `input` with an explicit resolver and statistics loader.
    ///
    /// The loader runs only for policies that need statistics. If it
    /// fails, `S::default()` stands in for the store.
    pub fn order_with<S, L>(
        &self,
        input: &[TestUnit],
        resolver: &dyn TestResolver,
        load_statistics: L,
    ) -> RunOrderOutcome
    where
        S: StatisticsStore + Default,
        L: FnOnce() -> Result<S, StatisticsError>,
    {
        tracing::debug!("ordering {} tests with {}", input.len(), self.policy);
        let mut diagnostics = Vec::new();

        let placed = match self.policy {
            RunOrderPolicy::Random => {
                let mut shuffled = input.to_vec();
                shuffled.shuffle(&mut rand::thread_rng());
                shuffled
            }
            RunOrderPolicy::FailureFirst => {
                load_store(load_statistics, &mut diagnostics).prioritize_by_failure(input)
            }
            RunOrderPolicy::BalancedRuntime => load_store(load_statistics, &mut diagnostics)
                .prioritize_by_runtime(input, self.config.workers.max(1)),
            RunOrderPolicy::InputFile => self.read_explicit_order(input, resolver, &mut diagnostics),
            RunOrderPolicy::Alphabetical
            | RunOrderPolicy::ReverseAlphabetical
            | RunOrderPolicy::Hourly => {
                sort_by_name(input, self.direction.unwrap_or(SortDirection::Ascending))
            }
            RunOrderPolicy::None => input.to_vec(),
        };

        let tests = dedupe(placed);
        let dropped = dedupe(input.iter().cloned()).len().saturating_sub(tests.len());
        if dropped > 0 {
            if self.policy == RunOrderPolicy::InputFile {
                tracing::warn!("{} tests are not listed in the order file and will not run", dropped);
                diagnostics.push(Diagnostic::DroppedTests { count: dropped });
            } else {
                tracing::warn!("{} ordering omitted {} tests; they will not run", self.policy, dropped);
                diagnostics.push(Diagnostic::OmittedByStore { count: dropped });
            }
        }

        RunOrderOutcome {
            policy: self.policy,
            tests,
            dropped,
            diagnostics,
        }
    }

    fn read_explicit_order(
        &self,
        input: &[TestUnit],
        resolver: &dyn TestResolver,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<TestUnit> {
        let path = &self.config.order_file;
        tracing::debug!("reading run order from {}", path.display());

        let file = OrderFile::read(path);
        if let Some(e) = &file.error {
            tracing::warn!("failed to read order file {}: {}", path.display(), e);
            diagnostics.push(Diagnostic::OrderFileUnreadable {
                path: path.clone(),
                error: e.to_string(),
                lines_read: file.lines.len(),
            });
        }

        let order = apply_order(&file.lines, input, resolver);
        if order.unresolved > 0 {
            diagnostics.push(Diagnostic::UnresolvedLines {
                count: order.unresolved,
            });
        }
        if order.not_in_input > 0 {
            diagnostics.push(Diagnostic::UnknownTests {
                count: order.not_in_input,
            });
        }
        order.tests
    }
}

fn load_store<S, L>(load: L, diagnostics: &mut Vec<Diagnostic>) -> S
where
    S: Default,
    L: FnOnce() -> Result<S, StatisticsError>,
{
    match load() {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!("{}", e);
            diagnostics.push(Diagnostic::StatisticsUnavailable {
                error: e.to_string(),
            });
            S::default()
        }
    }
}

/// Stable sort by fully-qualified name.
pub fn sort_by_name(input: &[TestUnit], direction: SortDirection) -> Vec<TestUnit> {
    let mut sorted = input.to_vec();
    match direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| a.name().cmp(b.name())),
        SortDirection::Descending => sorted.sort_by(|a, b| b.name().cmp(a.name())),
    }
    sorted
}

#[cfg(test)]
#[path = "calculator_tests.rs"]
mod tests;
