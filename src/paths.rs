//! XDG-style path utilities for configuration and cache directories.
//!
//! Paths prefer XDG Base Directory conventions over OS-specific locations,
//! so the explorer keeps its cache under `~/.cache/dbztui` on every platform.

use anyhow::{Context, Result};
use std::path::PathBuf;

const CONFIG_DIR_NAME: &str = "dbz";
const CACHE_DIR_NAME: &str = "dbztui";

/// File name of the persisted translation cache.
pub const TRANSLATION_CACHE_FILE: &str = "translation_cache.json";

/// Returns the configuration directory.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/dbz` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/dbz` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(CONFIG_DIR_NAME)),
        _ => Ok(home_dir()?.join(".config").join(CONFIG_DIR_NAME)),
    }
}

/// Returns the cache directory.
///
/// Resolution order:
/// 1. `$XDG_CACHE_HOME/dbztui` if `XDG_CACHE_HOME` is set
/// 2. `~/.cache/dbztui` otherwise
pub fn cache_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CACHE_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(CACHE_DIR_NAME)),
        _ => Ok(home_dir()?.join(".cache").join(CACHE_DIR_NAME)),
    }
}

/// Returns the full path of the persisted translation cache.
pub fn translation_cache_file() -> Result<PathBuf> {
    Ok(cache_dir()?.join(TRANSLATION_CACHE_FILE))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
