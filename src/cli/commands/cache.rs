//! Cache management commands.

use console::style;

use crate::cache::NameCache;
use crate::config::Settings;

/// List cached name lists with their sizes.
pub fn cmd_cache_list(settings: &Settings) -> anyhow::Result<()> {
    let cache = NameCache::new(&settings.cache_dir);
    let ids = cache.entries()?;

    if ids.is_empty() {
        println!("{} No cached name lists in {}", style("!").yellow(), cache.dir().display());
        return Ok(());
    }

    for id in ids {
        let count = cache.load(&id)?.map(|names| names.len()).unwrap_or(0);
        println!("{:<14} {} names", id, count);
    }
    Ok(())
}

/// Delete the named cache entries, or all of them.
pub fn cmd_cache_clear(settings: &Settings, names: &[String]) -> anyhow::Result<()> {
    let cache = NameCache::new(&settings.cache_dir);

    if names.is_empty() {
        let removed = cache.clear()?;
        println!("{} Removed {} cached name list(s)", style("✓").green(), removed);
        return Ok(());
    }

    for name in names {
        if cache.remove(name)? {
            println!("{} Removed {}", style("✓").green(), name);
        } else {
            println!("{} No cache entry for {}", style("!").yellow(), name);
        }
    }
    Ok(())
}
