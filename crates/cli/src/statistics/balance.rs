// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime balancing across workers.
//!
//! Longest tests are placed first, each onto the worker with the least
//! accumulated runtime. The per-worker buckets are then concatenated, so
//! splitting the result into `workers` contiguous chunks gives every
//! worker a similar total.

use std::cmp::Reverse;
use std::time::Duration;

use crate::unit::TestUnit;

/// Tests assigned to one worker.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub tests: Vec<TestUnit>,
    pub total: Duration,
}

/// Split `units` into buckets of similar total runtime.
///
/// One bucket per worker, but never more buckets than units and never
/// fewer than one. Units with equal runtime keep their relative input
/// order. Totals saturate at `Duration::MAX`.
pub fn partition<F>(units: &[TestUnit], workers: usize, runtime: F) -> Vec<Bucket>
where
    F: Fn(&TestUnit) -> Duration,
{
    let mut buckets = vec![Bucket::default(); workers.clamp(1, units.len().max(1))];

    let mut by_runtime: Vec<(Duration, &TestUnit)> =
        units.iter().map(|unit| (runtime(unit), unit)).collect();
    by_runtime.sort_by_key(|(duration, _)| Reverse(*duration));

    for (duration, unit) in by_runtime {
        // Least loaded, then fewest tests, then lowest index.
        let Some(bucket) = buckets
            .iter_mut()
            .min_by_key(|bucket| (bucket.total, bucket.tests.len()))
        else {
            continue;
        };
        bucket.tests.push(unit.clone());
        bucket.total = bucket.total.saturating_add(duration);
    }

    buckets
}

/// Order `units` as consecutive worker buckets.
pub fn balance<F>(units: &[TestUnit], workers: usize, runtime: F) -> Vec<TestUnit>
where
    F: Fn(&TestUnit) -> Duration,
{
    partition(units, workers, runtime)
        .into_iter()
        .flat_map(|bucket| bucket.tests)
        .collect()
}

#[cfg(test)]
#[path = "balance_tests.rs"]
mod tests;
