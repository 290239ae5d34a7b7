use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::fs::atomic_write;
use crate::paths;

/// Durable storage for the source text → translation mapping.
///
/// The mapping is always loaded and saved whole.
pub trait CacheStorage {
    fn load(&self) -> Result<BTreeMap<String, String>>;

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()>;
}

/// Stores the mapping as a pretty-printed JSON object.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the per-user cache location, see [`paths::translation_cache_file`].
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(paths::translation_cache_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the cache file. Returns `false` if there was nothing to remove.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to remove cache file: {}", self.path.display())
            }),
        }
    }
}

impl CacheStorage for JsonFileStorage {
    /// A missing file is an empty cache, not an error.
    fn load(&self) -> Result<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read cache file: {}", self.path.display())
                });
            }
        };

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cache file: {}", self.path.display()))
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(entries).context("Failed to serialize cache")?;
        atomic_write(&self.path, &contents)
    }
}
