//! Cache key builders for every entry the service caches.

/// Prefix applied to all cache keys.
const PREFIX: &str = "madrasa";

/// Cache key for the full record list of one kind within one madrasa.
pub fn record_list(table: &str, madrasa_name: &str) -> String {
    format!("{PREFIX}:list:{table}:{}", madrasa_name.to_lowercase())
}
