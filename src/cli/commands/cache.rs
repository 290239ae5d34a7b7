use anyhow::Result;

use crate::cache::{CacheStorage, JsonFileStorage};
use crate::ui::Style;

/// Shows the translation cache file and entry count, or deletes it.
pub fn run_cache(clear: bool) -> Result<()> {
    let storage = JsonFileStorage::default_location()?;
    let path = storage.path().display().to_string();

    if clear {
        if storage.clear()? {
            println!("{} Removed {}", Style::success("✓"), Style::secondary(path));
        } else {
            println!("{}", Style::hint(format!("No cache file at {path}")));
        }
        return Ok(());
    }

    let entries = storage.load()?;
    println!("{}", Style::header("Translation cache"));
    println!("  {}     {}", Style::label("path"), Style::secondary(&path));
    println!("  {}  {}", Style::label("entries"), Style::value(entries.len()));
    Ok(())
}
