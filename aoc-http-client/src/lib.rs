//! AOC HTTP Client Library
//!
//! Blocking access to the Advent of Code website: puzzle descriptions,
//! personal puzzle inputs, and session validation.
//!
//! # Features
//!
//! - Puzzle description text scraped from the day page
//! - Puzzle input fetching for any year and day
//! - Session validation to check if your AOC cookie is valid
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::AocClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//!
//! // Your session cookie from adventofcode.com
//! let session = "your_session_cookie_here";
//!
//! let session_info = client.verify_session(session)?;
//! if let Some(user_id) = session_info.user_id {
//!     println!("Session is valid! User ID: {}", user_id);
//! }
//!
//! let description = client.get_description(2024, 1, Some(session))?;
//! let input = client.get_input(2024, 1, session)?;
//! println!("{} ({} bytes of input)", description.lines().next().unwrap_or(""), input.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{AocClient, AocClientBuilder, SessionInfo};
pub use error::AocError;
