// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_order;

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use runorder::cli::{Cli, Command};
use runorder::policy::RunOrderPolicy;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.order.verbose);

    let result = match &cli.command {
        Some(Command::Policies) => {
            list_policies();
            Ok(())
        }
        Some(Command::Completions { shell }) => {
            clap_complete::generate(*shell, &mut Cli::command(), "runorder", &mut io::stdout());
            Ok(())
        }
        None => cmd_order::run(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("runorder: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warn, or debug when verbose).
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn list_policies() {
    for policy in RunOrderPolicy::ALL {
        println!("{:<20} {}", policy.name(), policy.description());
    }
}
