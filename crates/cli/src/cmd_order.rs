// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Order command implementation.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use anyhow::Context;

use runorder::calculator::RunOrderCalculator;
use runorder::cli::Cli;
use runorder::config::{self, Config};
use runorder::discovery;
use runorder::report;
use runorder::unit::TestUnit;
use runorder::verbose::VerboseLogger;

/// Run the order command.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let args = &cli.order;
    let cwd = std::env::current_dir()?;

    // Explicit --config, then discovery, then defaults
    let config_path = cli.config.clone().or_else(|| discovery::find_config(&cwd));
    let mut config = match &config_path {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };
    args.apply(&mut config.order);

    if args.config_only {
        return Ok(());
    }

    let input = read_tests(&args.tests, args.input.as_deref())?;
    let calculator = RunOrderCalculator::new(config.order);
    let outcome = calculator.order(&input);

    VerboseLogger::new(args.verbose).outcome(&calculator, input.len(), &outcome);

    let output = report::format_outcome(args.output, &outcome)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(output.as_bytes())?;
    handle.flush()?;
    Ok(())
}

/// Collect test names from arguments, a file, or stdin.
fn read_tests(names: &[String], input: Option<&Path>) -> anyhow::Result<Vec<TestUnit>> {
    if !names.is_empty() {
        return Ok(names.iter().map(TestUnit::new).collect());
    }

    match input {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open test list {}", path.display()))?;
            parse_test_list(io::BufReader::new(file))
                .with_context(|| format!("failed to read test list {}", path.display()))
        }
        None if io::stdin().is_terminal() => Ok(Vec::new()),
        None => parse_test_list(io::stdin().lock()).context("failed to read tests from stdin"),
    }
}

/// One test per line; surrounding whitespace and blank lines are ignored.
fn parse_test_list(reader: impl BufRead) -> io::Result<Vec<TestUnit>> {
    let mut tests = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            tests.push(TestUnit::new(name));
        }
    }
    Ok(tests)
}
