//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Year whose puzzle inputs are used
    #[arg(short, long, default_value_t = 2024)]
    pub year: u16,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Read the puzzle input from a file instead of the cache or the website
    #[arg(short, long, requires = "day")]
    pub input: Option<PathBuf>,

    /// Cache directory for puzzle inputs and descriptions
    #[arg(long, default_value = "~/.cache/aoc_solver")]
    pub cache_dir: PathBuf,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Quiet mode - only output answers
    #[arg(short, long, conflicts_with_all = ["show_description", "show_input"])]
    pub quiet: bool,

    /// Print the puzzle description above each answer
    #[arg(long)]
    pub show_description: bool,

    /// Print the puzzle input below each answer
    #[arg(long)]
    pub show_input: bool,

    /// Log dispatch progress (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}
