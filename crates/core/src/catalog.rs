//! Catalog query helpers shared by every entity store backend.
//!
//! Filtering, ordering, and search matching live here so the PostgreSQL and
//! in-memory backends agree on semantics. Nothing in this module touches a
//! database; callers pass plain row fields.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Default size of the featured / recent / trending showcases.
pub const DEFAULT_SHOWCASE_LIMIT: i64 = 4;

/// Validate an optional caller-supplied row limit.
///
/// `None` means "no limit". Negative values are rejected rather than
/// silently clamped.
pub fn validate_limit(limit: Option<i64>) -> Result<Option<i64>, CoreError> {
    match limit {
        Some(n) if n < 0 => Err(CoreError::Validation(format!(
            "limit must be zero or greater, got {n}"
        ))),
        other => Ok(other),
    }
}

/// Truncate `rows` to `limit` entries when a limit is present.
pub fn apply_limit<T>(rows: &mut Vec<T>, limit: Option<i64>) {
    if let Some(n) = limit {
        rows.truncate(usize::try_from(n).unwrap_or(0));
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Result ordering for asset listings.
///
/// Every ordering breaks ties by insertion order (ascending id).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssetOrder {
    /// Insertion order.
    #[default]
    Insertion,
    /// `created_at` descending.
    Newest,
    /// `download_count` descending.
    MostDownloaded,
}

/// Sort `items` by `key` descending, keeping equal keys in their current
/// relative order.
pub fn sort_desc_stable<T, K, F>(items: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    // `sort_by` is a stable merge sort.
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Trim and lower-case a search query. Blank queries are rejected.
pub fn normalize_search_query(query: &str) -> Result<String, CoreError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(CoreError::Validation("Search query is required".into()));
    }
    Ok(query.to_lowercase())
}

/// Case-insensitive substring match against title, description, and tags.
///
/// `needle` must already be lower-cased (see [`normalize_search_query`]).
pub fn matches_search(
    needle: &str,
    title: &str,
    description: Option<&str>,
    tags: &[String],
) -> bool {
    title.to_lowercase().contains(needle)
        || description.is_some_and(|d| d.to_lowercase().contains(needle))
        || tags.iter().any(|t| t.to_lowercase().contains(needle))
}

/// Wrap a lower-cased needle in `%` wildcards for `ILIKE`, escaping the
/// pattern metacharacters so they match literally.
pub fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
