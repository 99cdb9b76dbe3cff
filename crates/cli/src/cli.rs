//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::RunOrderConfig;
use crate::policy::RunOrderPolicy;

/// Computes the execution order of a discovered test suite
#[derive(Parser)]
#[command(name = "runorder")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "RUNORDER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub order: OrderArgs,
}

#[derive(Subcommand)]
pub enum Command {
    /// List available run order policies
    Policies,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(clap::Args, Default)]
pub struct OrderArgs {
    /// Test names to order (default: read from --input or stdin)
    #[arg(value_name = "TEST")]
    pub tests: Vec<String>,

    /// Read test names from a file, one per line
    #[arg(short, long, value_name = "FILE", conflicts_with = "tests")]
    pub input: Option<PathBuf>,

    /// Run order policies, comma-separated (only the first applies)
    // Fully qualified so clap parses the list as a single value.
    #[arg(short, long, value_name = "LIST", value_parser = parse_policies)]
    pub policy: Option<::std::vec::Vec<RunOrderPolicy>>,

    /// Historical run statistics file
    #[arg(long, value_name = "PATH")]
    pub statistics_file: Option<PathBuf>,

    /// Explicit order file for the inputfile policy
    #[arg(long, value_name = "PATH")]
    pub order_file: Option<PathBuf>,

    /// Worker count used to balance runtime
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub workers: Option<u64>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Validate config and exit without ordering
    #[arg(long = "config-only")]
    pub config_only: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl OrderArgs {
    /// Apply command line overrides on top of file configuration.
    pub fn apply(&self, config: &mut RunOrderConfig) {
        if let Some(policy) = &self.policy {
            config.policy = policy.clone();
        }
        if let Some(path) = &self.statistics_file {
            config.statistics_file = path.clone();
        }
        if let Some(path) = &self.order_file {
            config.order_file = path.clone();
        }
        if let Some(workers) = self.workers {
            config.workers = usize::try_from(workers).unwrap_or(usize::MAX);
        }
    }
}

fn parse_policies(s: &str) -> Result<Vec<RunOrderPolicy>, String> {
    RunOrderPolicy::parse_list(s).map_err(|e| e.to_string())
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
