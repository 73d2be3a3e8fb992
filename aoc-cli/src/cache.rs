//! File cache for puzzle inputs and descriptions

use crate::error::CacheError;
use std::fs;
use std::path::PathBuf;

/// What a cache file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheEntry {
    Input,
    Description,
}

/// File-based cache for puzzle data
///
/// Directory structure: `{dir}/{year}_day{day:02}.txt` for inputs and
/// `{dir}/{year}_day{day:02}_description.txt` for descriptions.
#[derive(Debug, Clone)]
pub struct InputCache {
    dir: PathBuf,
}

impl InputCache {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the cache path for a specific year/day
    pub fn cache_path(&self, entry: CacheEntry, year: u16, day: u8) -> PathBuf {
        let file_name = match entry {
            CacheEntry::Input => format!("{}_day{:02}.txt", year, day),
            CacheEntry::Description => format!("{}_day{:02}_description.txt", year, day),
        };
        self.dir.join(file_name)
    }

    /// Check if an entry is cached
    pub fn contains(&self, entry: CacheEntry, year: u16, day: u8) -> bool {
        self.cache_path(entry, year, day).exists()
    }

    /// Get a cached entry or None if not cached
    pub fn get(&self, entry: CacheEntry, year: u16, day: u8) -> Result<Option<String>, CacheError> {
        let path = self.cache_path(entry, year, day);
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(Some(content))
        } else {
            Ok(None)
        }
    }

    /// Store an entry in the cache
    pub fn put(&self, entry: CacheEntry, year: u16, day: u8, content: &str) -> Result<(), CacheError> {
        let path = self.cache_path(entry, year, day);

        fs::create_dir_all(&self.dir).map_err(|e| {
            CacheError::DirCreation(format!("Failed to create {}: {}", self.dir.display(), e))
        })?;

        fs::write(&path, content)?;
        Ok(())
    }
}
