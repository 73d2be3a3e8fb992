//! Puzzle source backed by the local cache and the Advent of Code website

use crate::cache::{CacheEntry, InputCache};
use aoc_http_client::AocClient;
use aoc_solver::{BoxError, PuzzleSource};
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Reads puzzle data from the cache, fetching and caching whatever is missing
///
/// Inputs need a session; descriptions are fetched anonymously when no
/// session is available.
pub struct CachedSource {
    year: u16,
    cache: InputCache,
    client: AocClient,
    session: Zeroizing<String>,
}

impl CachedSource {
    pub fn new(year: u16, cache: InputCache, client: AocClient, session: Zeroizing<String>) -> Self {
        Self {
            year,
            cache,
            client,
            session,
        }
    }

    fn session(&self) -> Option<&str> {
        (!self.session.is_empty()).then_some(self.session.as_str())
    }

    fn cached_or_fetch<F>(&self, entry: CacheEntry, day: u8, fetch: F) -> Result<String, BoxError>
    where
        F: FnOnce() -> Result<String, BoxError>,
    {
        let year = self.year;
        if let Some(content) = self.cache.get(entry, year, day)? {
            return Ok(content);
        }

        debug!(year, day, ?entry, "cache miss, fetching");
        let content = fetch()?;

        if let Err(e) = self.cache.put(entry, year, day, &content) {
            warn!(year, day, ?entry, error = %e, "cache write failed");
        }
        Ok(content)
    }
}

impl PuzzleSource for CachedSource {
    fn fetch_description(&self, day: u8) -> Result<String, BoxError> {
        self.cached_or_fetch(CacheEntry::Description, day, || {
            Ok(self.client.get_description(self.year, day, self.session())?)
        })
    }

    fn fetch_input(&self, day: u8) -> Result<String, BoxError> {
        self.cached_or_fetch(CacheEntry::Input, day, || match self.session() {
            Some(session) => Ok(self.client.get_input(self.year, day, session)?),
            None => Err(format!(
                "no session available to download the {} day {} input",
                self.year, day
            )
            .into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn source_for(base_url: &str, cache_dir: &TempDir, session: &str) -> CachedSource {
        let client = AocClient::builder()
            .base_url(base_url)
            .unwrap()
            .build()
            .unwrap();
        CachedSource::new(
            2024,
            InputCache::new(cache_dir.path().to_path_buf()),
            client,
            Zeroizing::new(session.to_string()),
        )
    }

    #[test]
    fn test_cached_entries_do_not_touch_network() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf());
        cache.put(CacheEntry::Input, 2024, 2, "1 2 3").unwrap();
        cache.put(CacheEntry::Description, 2024, 2, "Red-Nosed Reports").unwrap();

        let mut server = mockito::Server::new();
        let mock = server.mock("GET", mockito::Matcher::Any).expect(0).create();

        let source = source_for(&server.url(), &temp, "");
        assert_eq!(source.fetch_input(2).unwrap(), "1 2 3");
        assert_eq!(source.fetch_description(2).unwrap(), "Red-Nosed Reports");
        mock.assert();
    }

    #[test]
    fn test_fetched_input_is_cached() {
        let temp = TempDir::new().unwrap();
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2024/day/1/input")
            .match_header("cookie", "session=abc")
            .with_status(200)
            .with_body("3   4\n")
            .expect(1)
            .create();

        let source = source_for(&server.url(), &temp, "abc");
        assert_eq!(source.fetch_input(1).unwrap(), "3   4\n");
        // Second read is served from disk
        assert_eq!(source.fetch_input(1).unwrap(), "3   4\n");
        mock.assert();

        let cached = std::fs::read_to_string(temp.path().join("2024_day01.txt")).unwrap();
        assert_eq!(cached, "3   4\n");
    }

    #[test]
    fn test_missing_input_without_session_fails() {
        let temp = TempDir::new().unwrap();
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", mockito::Matcher::Any).expect(0).create();

        let source = source_for(&server.url(), &temp, "");
        let err = source.fetch_input(3).unwrap_err();
        assert!(err.to_string().contains("no session"), "{}", err);
        mock.assert();
    }

    #[test]
    fn test_description_is_fetched_anonymously() {
        let temp = TempDir::new().unwrap();
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2024/day/4")
            .match_header("cookie", mockito::Matcher::Missing)
            .with_status(200)
            .with_body(r#"<main><article class="day-desc"><h2>--- Day 4: Ceres Search ---</h2></article></main>"#)
            .expect(1)
            .create();

        let source = source_for(&server.url(), &temp, "");
        assert_eq!(source.fetch_description(4).unwrap(), "--- Day 4: Ceres Search ---");
        mock.assert();
        assert!(temp.path().join("2024_day04_description.txt").exists());
    }

    #[test]
    fn test_http_error_is_not_cached() {
        let temp = TempDir::new().unwrap();
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/2024/day/5/input")
            .with_status(404)
            .create();

        let source = source_for(&server.url(), &temp, "abc");
        assert!(source.fetch_input(5).is_err());
        assert!(!temp.path().join("2024_day05.txt").exists());
    }
}
