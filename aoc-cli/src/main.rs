//! AOC CLI - Command-line interface for running Advent of Code solvers

mod aggregator;
mod cache;
mod cli;
mod config;
mod error;
mod executor;
mod output;
mod source;

use aoc_http_client::AocClient;
use aoc_solver::{BindingKind, DispatchTable, DispatchTableBuilder, InMemorySource, SolverKey};
use cache::{CacheEntry, InputCache};
use clap::Parser;
use cli::Args;
use config::Config;
use error::{CliError, ExecutorError};
use executor::Executor;
use itertools::Itertools;
use output::OutputFormatter;
use source::CachedSource;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`, `info` with `--verbose`)
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let mut config = Config::from_args(args)?;
    if config.year != aoc_solutions::YEAR {
        warn!(
            year = config.year,
            solutions = aoc_solutions::YEAR,
            "inputs are from a different year than the solutions"
        );
    }

    let keys = config.keys();
    let builder = aoc_solutions::register(DispatchTableBuilder::new())?;

    let table = match config.input_file.clone() {
        Some(path) => offline_table(builder, &config, &path)?,
        None => {
            ensure_session(&builder, &mut config, &keys)?;
            let source = CachedSource::new(
                config.year,
                InputCache::new(config.cache_dir.clone()),
                AocClient::new()?,
                config.session.clone(),
            );
            builder.build(source)
        }
    };

    run_executor(&table, &keys, &config)
}

/// Table over a single input file; the description is left empty
fn offline_table(
    builder: DispatchTableBuilder,
    config: &Config,
    path: &Path,
) -> Result<DispatchTable, CliError> {
    let day = config
        .day_filter
        .ok_or_else(|| CliError::Config("--input needs --day".to_string()))?;
    let input = std::fs::read_to_string(path)?;

    info!(day, path = %path.display(), "running offline");
    Ok(builder.build(InMemorySource::new().with_day(day, "", input)))
}

/// Days with a specific routine among `keys` whose input is not cached yet
fn missing_input_days(
    builder: &DispatchTableBuilder,
    cache: &InputCache,
    year: u16,
    keys: &[SolverKey],
) -> Vec<u8> {
    keys.iter()
        .filter(|&&key| builder.binding(key) == BindingKind::Specific)
        .map(|key| key.day)
        .dedup()
        .filter(|&day| !cache.contains(CacheEntry::Input, year, day))
        .collect()
}

/// Resolve and verify a session, but only when some input has to be downloaded
fn ensure_session(
    builder: &DispatchTableBuilder,
    config: &mut Config,
    keys: &[SolverKey],
) -> Result<(), CliError> {
    let cache = InputCache::new(config.cache_dir.clone());
    let missing_days = missing_input_days(builder, &cache, config.year, keys);

    if missing_days.is_empty() {
        return Ok(());
    }

    println!("Missing {} input file(s):", missing_days.len());
    for day in &missing_days {
        println!("  - {}/day{:02}", config.year, day);
    }

    if config.session.is_empty() {
        println!();
        let session = config::prompt_session(
            "Session token required to fetch missing inputs from adventofcode.com",
        )?;
        config::verify_session(&session)?;
        config.session = session;
    } else {
        config::verify_session(&config.session)?;
        println!("Will fetch missing inputs using provided session...");
    }
    Ok(())
}

/// Run the executor, printing results in key order as they become ready
fn run_executor(table: &DispatchTable, keys: &[SolverKey], config: &Config) -> Result<(), CliError> {
    let executor = Executor::new(table, config.thread_count)?;
    if !config.quiet {
        println!("Running {} routine(s)...", keys.len());
    }

    let formatter = OutputFormatter::new(
        config.year,
        config.quiet,
        config.show_description,
        config.show_input,
    );
    let mut aggregator = aggregator::ResultAggregator::new(keys);
    let mut results = Vec::with_capacity(keys.len());

    let (tx, rx) = std::sync::mpsc::channel();

    std::thread::scope(|s| {
        let handle = s.spawn(|| executor.execute(keys, tx));

        for result in rx {
            for ready in aggregator.add(result) {
                formatter.print_result(&ready);
                results.push(ready);
            }
        }

        handle.join().map_err(|_| ExecutorError::Panicked)?
    })?;

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }
    if !aggregator.is_complete() {
        warn!("not all expected results were received");
    }

    formatter.print_summary(&results);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn keys_for(days: &[u8]) -> Vec<SolverKey> {
        days.iter()
            .flat_map(|&day| [1, 2].map(|part| SolverKey::new(day, part).unwrap()))
            .collect()
    }

    #[test]
    fn test_cached_run_needs_no_session() {
        let dir = TempDir::new().unwrap();
        let cache = InputCache::new(dir.path().to_path_buf());
        let builder = aoc_solutions::register(DispatchTableBuilder::new()).unwrap();
        let keys = keys_for(&[1, 2]);

        assert_eq!(missing_input_days(&builder, &cache, 2024, &keys), vec![1, 2]);

        cache.put(CacheEntry::Input, 2024, 1, "3 4").unwrap();
        cache.put(CacheEntry::Input, 2024, 2, "1 2 3").unwrap();
        assert!(missing_input_days(&builder, &cache, 2024, &keys).is_empty());
    }

    #[test]
    fn test_generic_days_never_need_input() {
        let dir = TempDir::new().unwrap();
        let cache = InputCache::new(dir.path().to_path_buf());
        let builder = aoc_solutions::register(DispatchTableBuilder::new()).unwrap();

        assert!(missing_input_days(&builder, &cache, 2024, &keys_for(&[6, 17, 25])).is_empty());
        assert_eq!(missing_input_days(&builder, &cache, 2024, &keys_for(&[5, 6])), vec![5]);
    }
}
