//! Per-request pool merging

use std::borrow::Cow;

use tracing::debug;

use crate::pools::{Pool, PoolRegistry};

/// Effective field → candidates mapping for one theme.
/// Borrowed for the universal theme, owned otherwise. Treat as read-only.
pub type MergedPool<'a> = Cow<'a, Pool>;

/// Combine the universal pool with the pool of `theme`
///
/// Keys are the union of both pools; values keep universal candidates first.
/// Unknown themes merge against an empty pool, i.e. universal-only.
pub fn merge<'a>(registry: &'a PoolRegistry, theme: &str) -> MergedPool<'a> {
    if registry.is_universal(theme) {
        return Cow::Borrowed(registry.universal());
    }

    if !registry.contains(theme) {
        debug!(theme = %theme, "Unknown theme, falling back to universal pool");
    }

    let themed = registry.lookup_theme(theme);
    let mut merged = registry.universal().clone();
    for field in themed.fields() {
        if let Some(candidates) = themed.get(field) {
            merged.push_candidates(field, candidates);
        }
    }
    Cow::Owned(merged)
}
