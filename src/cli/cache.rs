//! Cache management commands

use colored::Colorize;

use crate::cache::CacheStorage;
use crate::cli::OutputFormat;
use crate::error::Result;

/// Run the cache status command
pub fn status(format: OutputFormat) -> Result<()> {
    let storage = CacheStorage::open()?;
    let stats = storage.stats()?;
    let location = CacheStorage::cache_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    if let OutputFormat::Json = format {
        let payload = serde_json::json!({
            "location": location,
            "valid_entries": stats.valid_entries,
            "expired_entries": stats.expired_entries,
            "size_bytes": stats.total_size_bytes,
            "size_human": human_size(stats.total_size_bytes),
            "oldest_entry": stats.oldest_entry,
            "newest_entry": stats.newest_entry,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}\n", "Folio Cache".bold());
    println!("Location: {}", location.cyan());
    println!("Entries:  {} valid, {} expired", stats.valid_entries, stats.expired_entries);
    println!("Size:     {}", human_size(stats.total_size_bytes));
    if let Some(oldest) = stats.oldest_entry {
        println!("Oldest:   {}", local_time(oldest));
    }
    if let Some(newest) = stats.newest_entry {
        println!("Newest:   {}", local_time(newest));
    }

    Ok(())
}

/// Run the cache clear command
pub fn clear(format: OutputFormat) -> Result<()> {
    let storage = CacheStorage::open()?;
    let removed = storage.clear()?;

    if let OutputFormat::Json = format {
        let payload = serde_json::json!({ "entries_removed": removed });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if removed > 0 {
        println!("{} Removed {} cached responses", "✓".green(), removed);
    } else {
        println!("Cache was already empty");
    }

    Ok(())
}

/// Render a unix timestamp in local time for display
fn local_time(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|| "unknown".to_string())
}

/// Render a byte count with a binary-unit suffix
fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size_bytes() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(512), "512 B");
    }

    #[test]
    fn test_human_size_scales_units() {
        assert_eq!(human_size(2048), "2.0 KiB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MiB");
        assert_eq!(human_size(3 * 1024 * 1024 * 1024), "3.0 GiB");
    }
}
