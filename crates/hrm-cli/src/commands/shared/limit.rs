/// Pick a result limit: the `--limit` flag, else the configured default.
/// Zero means "no limit".
#[must_use]
pub const fn effective_limit(flag: Option<u32>, fallback: u32) -> Option<u32> {
    let limit = match flag {
        Some(n) => n,
        None => fallback,
    };
    match limit {
        0 => None,
        n => Some(n),
    }
}

/// Apply an optional limit to an already-ordered list.
pub fn truncate<T>(mut items: Vec<T>, limit: Option<u32>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
    items
}
