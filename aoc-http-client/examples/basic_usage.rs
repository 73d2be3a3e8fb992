//! Basic usage example for the AOC HTTP client
//!
//! Fetches the description and input of one puzzle. Requires a valid session
//! cookie in `AOC_SESSION`, copied from your browser after logging in to
//! adventofcode.com.
//!
//! ```text
//! AOC_SESSION=... cargo run -p aoc-http-client --example basic_usage -- 2024 1
//! ```

use aoc_http_client::AocClient;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = std::env::var("AOC_SESSION")
        .map_err(|_| "AOC_SESSION environment variable not set")?;

    let mut args = std::env::args().skip(1);
    let year: u16 = args.next().as_deref().unwrap_or("2024").parse()?;
    let day: u8 = args.next().as_deref().unwrap_or("1").parse()?;

    let client = AocClient::builder()
        .client_builder(
            reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(30))
                .use_rustls_tls(),
        )
        .build()?;

    match client.verify_session(&session)?.user_id {
        Some(user_id) => println!("Session valid for user #{}", user_id),
        None => return Err("session cookie was rejected".into()),
    }

    let description = client.get_description(year, day, Some(&session))?;
    println!("{}\n", description);

    let input = client.get_input(year, day, &session)?;
    println!("Input: {} lines, {} bytes", input.lines().count(), input.len());

    Ok(())
}
