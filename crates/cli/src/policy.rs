// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run order policies and their names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Strategy used to derive the final test order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunOrderPolicy {
    /// Uniform shuffle.
    Random,
    /// Previously failing tests first.
    FailureFirst,
    /// Balance estimated runtime across workers.
    BalancedRuntime,
    /// Explicit order read from a file.
    InputFile,
    Alphabetical,
    ReverseAlphabetical,
    /// Alphabetical on even hours, reverse alphabetical on odd hours.
    Hourly,
    /// Discovery order.
    #[default]
    None,
}

/// Sort direction for the comparator policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Direction used by the hourly policy at the given hour of day.
    pub fn for_hour(hour: u32) -> Self {
        if hour % 2 == 0 { Self::Ascending } else { Self::Descending }
    }
}

impl RunOrderPolicy {
    /// All policies in display order.
    pub const ALL: [RunOrderPolicy; 8] = [
        Self::Alphabetical,
        Self::ReverseAlphabetical,
        Self::Hourly,
        Self::Random,
        Self::FailureFirst,
        Self::BalancedRuntime,
        Self::InputFile,
        Self::None,
    ];

    /// Canonical name, as accepted in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::FailureFirst => "failedfirst",
            Self::BalancedRuntime => "balanced",
            Self::InputFile => "inputfile",
            Self::Alphabetical => "alphabetical",
            Self::ReverseAlphabetical => "reversealphabetical",
            Self::Hourly => "hourly",
            Self::None => "none",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Random => "Shuffle tests randomly on every run",
            Self::FailureFirst => "Run tests that failed previously first",
            Self::BalancedRuntime => "Balance recorded runtime across workers",
            Self::InputFile => "Use the order listed in the order file, dropping unlisted tests",
            Self::Alphabetical => "Sort by name, ascending",
            Self::ReverseAlphabetical => "Sort by name, descending",
            Self::Hourly => "Alphabetical on even hours, reverse on odd hours",
            Self::None => "Keep discovery order",
        }
    }

    /// Whether the policy needs the statistics file.
    pub fn uses_statistics(self) -> bool {
        matches!(self, Self::FailureFirst | Self::BalancedRuntime)
    }

    /// Sort direction for comparator policies, fixed at `hour` for hourly.
    pub fn sort_direction(self, hour: u32) -> Option<SortDirection> {
        match self {
            Self::Alphabetical => Some(SortDirection::Ascending),
            Self::ReverseAlphabetical => Some(SortDirection::Descending),
            Self::Hourly => Some(SortDirection::for_hour(hour)),
            Self::Random
            | Self::FailureFirst
            | Self::BalancedRuntime
            | Self::InputFile
            | Self::None => None,
        }
    }

    /// Parse a comma-separated list of policy names.
    ///
    /// Empty entries are skipped; an empty string yields an empty list.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, ParsePolicyError> {
        s.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::parse)
            .collect()
    }
}

/// Unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown run order '{name}', expected one of: {}", valid_names())]
pub struct ParsePolicyError {
    pub name: String,
}

fn valid_names() -> String {
    RunOrderPolicy::ALL
        .iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for RunOrderPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let policy = match s.trim().to_ascii_lowercase().as_str() {
            "random" => Self::Random,
            "failedfirst" | "failurefirst" | "failed-first" | "failure-first" => Self::FailureFirst,
            "balanced" | "balanced-runtime" => Self::BalancedRuntime,
            "inputfile" | "input-file" | "file" => Self::InputFile,
            "alphabetical" => Self::Alphabetical,
            "reversealphabetical" | "reverse-alphabetical" => Self::ReverseAlphabetical,
            "hourly" => Self::Hourly,
            "none" | "filesystem" => Self::None,
            _ => {
                return Err(ParsePolicyError {
                    name: s.to_string(),
                });
            }
        };
        Ok(policy)
    }
}

impl fmt::Display for RunOrderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for RunOrderPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for RunOrderPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
