// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing for `runorder.toml`.

pub mod defaults;

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::policy::RunOrderPolicy;

/// Failure loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{}: unsupported config version {found}, expected {}", path.display(), defaults::CONFIG_VERSION)]
    UnsupportedVersion { path: PathBuf, found: u32 },

    #[error("{}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

/// Root of `runorder.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub version: u32,

    #[serde(default)]
    pub order: RunOrderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::CONFIG_VERSION,
            order: RunOrderConfig::default(),
        }
    }
}

/// Inputs to the run order calculation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunOrderConfig {
    /// Requested policies. Only the first one is applied.
    #[serde(default, deserialize_with = "deserialize_policies")]
    pub policy: Vec<RunOrderPolicy>,

    /// Historical statistics for failure-first and balanced ordering.
    #[serde(default = "RunOrderConfig::default_statistics_file")]
    pub statistics_file: PathBuf,

    /// Explicit order for the input-file policy.
    #[serde(default = "RunOrderConfig::default_order_file")]
    pub order_file: PathBuf,

    /// Worker count hint for balanced ordering (at least 1).
    #[serde(default = "RunOrderConfig::default_workers")]
    pub workers: usize,
}

impl Default for RunOrderConfig {
    fn default() -> Self {
        Self {
            policy: Vec::new(),
            statistics_file: Self::default_statistics_file(),
            order_file: Self::default_order_file(),
            workers: Self::default_workers(),
        }
    }
}

impl RunOrderConfig {
    pub(super) fn default_statistics_file() -> PathBuf {
        PathBuf::from(defaults::paths::STATISTICS_FILE)
    }

    pub(super) fn default_order_file() -> PathBuf {
        PathBuf::from(defaults::paths::ORDER_FILE)
    }

    pub(super) fn default_workers() -> usize {
        defaults::WORKERS
    }

    /// The policy that will be applied: the first requested, or none.
    pub fn active_policy(&self) -> RunOrderPolicy {
        self.policy.first().copied().unwrap_or_default()
    }

    /// Resolve relative file paths against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        if self.statistics_file.is_relative() {
            self.statistics_file = base.join(&self.statistics_file);
        }
        if self.order_file.is_relative() {
            self.order_file = base.join(&self.order_file);
        }
    }
}

/// Accept either `policy = "a,b"` or `policy = ["a", "b"]`.
fn deserialize_policies<'de, D>(deserializer: D) -> Result<Vec<RunOrderPolicy>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PolicyList {
        One(String),
        Many(Vec<String>),
    }

    let names = match PolicyList::deserialize(deserializer)? {
        PolicyList::One(s) => return RunOrderPolicy::parse_list(&s).map_err(serde::de::Error::custom),
        PolicyList::Many(names) => names,
    };
    names
        .iter()
        .map(|name| name.parse().map_err(serde::de::Error::custom))
        .collect()
}

/// Parse and validate config content; `path` is used for error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if config.version != defaults::CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            path: path.to_path_buf(),
            found: config.version,
        });
    }

    if config.order.workers == 0 {
        return Err(ConfigError::Invalid {
            path: path.to_path_buf(),
            message: "order.workers must be at least 1".to_string(),
        });
    }

    Ok(config)
}

/// Load config from `path`, resolving file paths against its directory.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config = parse(&content, path)?;

    if let Some(base) = path.parent() {
        config.order.resolve_paths(base);
    }

    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
