// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Historical run statistics.
//!
//! Statistics are read from a JSON file keyed by test name. This module
//! only reads them; recording runs belongs to the test harness.
//!
//! ```json
//! {
//!   "version": 1,
//!   "tests": {
//!     "com.example.FooTest": { "runs": 3, "failures": 1, "last_failed": true, "total_ms": 900 }
//!   }
//! }
//! ```

pub mod balance;

use std::cmp::Reverse;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::unit::TestUnit;

pub use balance::{balance, partition};

/// Supported statistics file version.
pub const STATISTICS_VERSION: u32 = 1;

/// Queries the calculator needs from historical statistics.
pub trait StatisticsStore {
    /// Order `units` so previously failing tests come first.
    ///
    /// Returns a permutation of `units`.
    fn prioritize_by_failure(&self, units: &[TestUnit]) -> Vec<TestUnit>;

    /// Order `units` so that `workers` contiguous chunks carry similar runtime.
    ///
    /// Returns a permutation of `units`.
    fn prioritize_by_runtime(&self, units: &[TestUnit], workers: usize) -> Vec<TestUnit>;
}

/// Failure loading a statistics file.
#[derive(Debug, thiserror::Error)]
pub enum StatisticsError {
    #[error("failed to read statistics file {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid statistics file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(
        "unsupported statistics version {found} in {}, expected {}",
        path.display(),
        STATISTICS_VERSION
    )]
    UnsupportedVersion { path: PathBuf, found: u32 },
}

/// Aggregate history for one test unit.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatisticsRecord {
    /// Number of recorded runs.
    pub runs: u32,
    /// Number of recorded runs that failed.
    pub failures: u32,
    /// Whether the most recent run failed.
    pub last_failed: bool,
    /// Passing runs since the last failure.
    pub consecutive_passes: u32,
    /// Cumulative duration across all runs, in milliseconds.
    pub total_ms: u64,
}

impl StatisticsRecord {
    pub fn has_failed(&self) -> bool {
        self.last_failed || self.failures > 0
    }

    /// Average duration per run, zero without runs.
    pub fn average(&self) -> Duration {
        if self.runs == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(self.total_ms / u64::from(self.runs))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StatisticsFile {
    version: u32,
    #[serde(default)]
    tests: HashMap<String, StatisticsRecord>,
}

/// File-backed statistics store.
#[derive(Debug, Default, Clone)]
pub struct RunStatistics {
    records: HashMap<TestUnit, StatisticsRecord>,
}

impl RunStatistics {
    pub fn new(records: impl IntoIterator<Item = (TestUnit, StatisticsRecord)>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Load statistics from `path`.
    ///
    /// A missing file loads as empty statistics.
    pub fn load(path: &Path) -> Result<Self, StatisticsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no statistics file at {}", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(StatisticsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(&content, path)
    }

    /// Parse statistics JSON; `path` is used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, StatisticsError> {
        let file: StatisticsFile =
            serde_json::from_str(content).map_err(|source| StatisticsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if file.version != STATISTICS_VERSION {
            return Err(StatisticsError::UnsupportedVersion {
                path: path.to_path_buf(),
                found: file.version,
            });
        }

        tracing::debug!("loaded statistics for {} tests from {}", file.tests.len(), path.display());
        Ok(Self::new(
            file.tests
                .into_iter()
                .map(|(name, record)| (TestUnit::from(name), record)),
        ))
    }

    pub fn get(&self, unit: &TestUnit) -> Option<&StatisticsRecord> {
        self.records.get(unit)
    }

    /// Estimated runtime of `unit`, zero when unknown.
    pub fn runtime(&self, unit: &TestUnit) -> Duration {
        self.get(unit).map(StatisticsRecord::average).unwrap_or_default()
    }

    /// Sort key for failure-first ordering; lower runs earlier.
    ///
    /// Groups: last run failed, failed before but passed since, no
    /// history, only passes. Within a group, more failures and shorter
    /// pass streaks come first.
    fn failure_rank(&self, unit: &TestUnit) -> (u8, Reverse<u32>, u32) {
        let Some(r) = self.get(unit) else {
            return (2, Reverse(0), 0);
        };
        let group = if r.last_failed {
            0
        } else if r.has_failed() {
            1
        } else if r.runs == 0 {
            2
        } else {
            3
        };
        (group, Reverse(r.failures), r.consecutive_passes)
    }
}

impl StatisticsStore for RunStatistics {
    fn prioritize_by_failure(&self, units: &[TestUnit]) -> Vec<TestUnit> {
        let mut ordered = units.to_vec();
        ordered.sort_by_cached_key(|unit| self.failure_rank(unit));
        ordered
    }

    fn prioritize_by_runtime(&self, units: &[TestUnit], workers: usize) -> Vec<TestUnit> {
        balance(units, workers, |unit| self.runtime(unit))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
