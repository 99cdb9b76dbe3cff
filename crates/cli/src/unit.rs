// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test unit identity and ordered, duplicate-free results.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// A discovered test unit, identified by its fully-qualified name.
///
/// Cloning is cheap; the name is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TestUnit(Arc<str>);

impl TestUnit {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Fully-qualified name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TestUnit {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TestUnit {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

/// Remove duplicates, keeping the first occurrence of each unit in place.
pub fn dedupe(units: impl IntoIterator<Item = TestUnit>) -> Vec<TestUnit> {
    let mut seen = HashSet::new();
    units
        .into_iter()
        .filter(|unit| seen.insert(unit.clone()))
        .collect()
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
