// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Config structs delegate to these via their `default_*` methods.

/// Config file name searched for during discovery.
pub const CONFIG_FILE: &str = "runorder.toml";

/// Current config schema version.
pub const CONFIG_VERSION: u32 = 1;

/// Default file locations, relative to the config file.
pub mod paths {
    /// Historical run statistics (JSON).
    pub const STATISTICS_FILE: &str = ".runorder/statistics.json";

    /// Explicit test order, one name per line.
    pub const ORDER_FILE: &str = ".runorder/order.txt";
}

/// Default worker count for runtime balancing.
pub const WORKERS: usize = 1;
