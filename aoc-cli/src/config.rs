//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use aoc_solver::{DAYS, PARTS, SolverKey};
use itertools::Itertools;
use std::path::{Path, PathBuf};
use tracing::info;
use zeroize::Zeroizing;

/// Resolved runtime configuration
pub struct Config {
    /// Year whose inputs are used
    pub year: u16,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Offline input file for the selected day
    pub input_file: Option<PathBuf>,
    /// Cache directory path
    pub cache_dir: PathBuf,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Session key, empty when none is known yet (zeroized on drop)
    pub session: Zeroizing<String>,
    /// Quiet mode
    pub quiet: bool,
    pub show_description: bool,
    pub show_input: bool,
}

impl Config {
    /// Build config from CLI args, taking the session from `AOC_SESSION`
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        Self::resolve(args, std::env::var("AOC_SESSION").ok())
    }

    /// The session is kept unverified; it is only checked once an input
    /// actually has to be downloaded. Offline runs (`--input`) ignore it.
    fn resolve(args: Args, env_session: Option<String>) -> Result<Self, CliError> {
        let cache_dir = expand_tilde(&args.cache_dir);

        let thread_count = args.threads.unwrap_or_else(num_cpus);
        if thread_count == 0 {
            return Err(CliError::Config("--threads must be at least 1".to_string()));
        }

        let session = match (&args.input, env_session) {
            (None, Some(s)) => Zeroizing::new(s),
            _ => Zeroizing::new(String::new()),
        };

        Ok(Config {
            year: args.year,
            day_filter: args.day,
            part_filter: args.part,
            input_file: args.input,
            cache_dir,
            thread_count,
            session,
            quiet: args.quiet,
            show_description: args.show_description,
            show_input: args.show_input,
        })
    }

    /// Every selected key in (day, part) order
    pub fn keys(&self) -> Vec<SolverKey> {
        let days = self.day_filter.map_or(DAYS, |d| d..=d);
        let parts = self.part_filter.map_or(PARTS, |p| p..=p);
        days.cartesian_product(parts)
            .filter_map(|(day, part)| SolverKey::new(day, part))
            .collect()
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Prompt user for session token
pub fn prompt_session(reason: &str) -> Result<Zeroizing<String>, CliError> {
    println!("{}", reason);
    let s = rpassword::prompt_password("Enter AOC session key: ")
        .map_err(|e| CliError::Config(format!("Failed to read session: {}", e)))?;
    if s.is_empty() {
        return Err(CliError::Config("Session token is required.".to_string()));
    }
    Ok(Zeroizing::new(s))
}

/// Verify a session against the website, returning the user ID it belongs to
pub fn verify_session(session: &str) -> Result<u64, CliError> {
    let client = aoc_http_client::AocClient::new()?;
    let info = client.verify_session(session)?;
    let user_id = info
        .user_id
        .ok_or_else(|| CliError::Config("Invalid session: could not fetch user ID".to_string()))?;

    info!(user_id, "session verified");
    Ok(user_id)
}
