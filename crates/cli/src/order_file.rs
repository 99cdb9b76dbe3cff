// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Explicit order file reading and name resolution.
//!
//! The order file lists one fully-qualified test name per line. Reading
//! never fails outright: an I/O error ends the read and is kept next to
//! the lines that were read before it.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::unit::TestUnit;

/// Lines read from an order file, plus the error that ended the read early.
#[derive(Debug, Default)]
pub struct OrderFile {
    pub lines: Vec<String>,
    pub error: Option<io::Error>,
}

impl OrderFile {
    /// Read `path` line by line, stopping at the first I/O error.
    pub fn read(path: &Path) -> Self {
        match File::open(path) {
            Ok(file) => Self::from_reader(BufReader::new(file)),
            Err(e) => Self {
                lines: Vec::new(),
                error: Some(e),
            },
        }
    }

    /// Read lines from any buffered reader. `\n` and `\r\n` both end a line.
    pub fn from_reader(reader: impl BufRead) -> Self {
        let mut order = Self::default();
        for line in reader.lines() {
            match line {
                Ok(line) => order.lines.push(line),
                Err(e) => {
                    order.error = Some(e);
                    break;
                }
            }
        }
        order
    }
}

/// Maps an order file line to a test unit.
pub trait TestResolver {
    /// Resolve `name`, or `None` if it does not name a test.
    fn resolve(&self, name: &str) -> Option<TestUnit>;
}

/// Resolves any non-blank, whitespace-free name to a unit of that name.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameResolver;

impl TestResolver for NameResolver {
    fn resolve(&self, name: &str) -> Option<TestUnit> {
        let name = name.trim();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return None;
        }
        Some(TestUnit::new(name))
    }
}

/// Resolves only names present in a known set of units.
#[derive(Debug, Default, Clone)]
pub struct KnownTests {
    known: HashSet<TestUnit>,
}

impl KnownTests {
    pub fn new(units: impl IntoIterator<Item = TestUnit>) -> Self {
        Self {
            known: units.into_iter().collect(),
        }
    }
}

impl TestResolver for KnownTests {
    fn resolve(&self, name: &str) -> Option<TestUnit> {
        let unit = NameResolver.resolve(name)?;
        self.known.contains(&unit).then_some(unit)
    }
}

/// Outcome of applying an order file to an input collection.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExplicitOrder {
    /// Listed units present in the input, in file order.
    pub tests: Vec<TestUnit>,
    /// Lines that did not resolve to a test.
    pub unresolved: usize,
    /// Lines naming a test that is not in the input.
    pub not_in_input: usize,
}

/// Select input units in the order the file lists them.
///
/// Input units the file does not list are not included.
pub fn apply_order(
    lines: &[String],
    input: &[TestUnit],
    resolver: &dyn TestResolver,
) -> ExplicitOrder {
    let present: HashSet<&TestUnit> = input.iter().collect();
    let mut order = ExplicitOrder::default();

    for line in lines {
        let Some(unit) = resolver.resolve(line) else {
            order.unresolved += 1;
            continue;
        };
        if present.contains(&unit) {
            order.tests.push(unit);
        } else {
            order.not_in_input += 1;
        }
    }

    order
}

#[cfg(test)]
#[path = "order_file_tests.rs"]
mod tests;
