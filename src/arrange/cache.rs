use std::collections::HashMap;

use crate::{
    arrange::calculators::{ItemPositions, calculate_item_positions},
    arrange::config::ArrangementConfig,
    foundation::diagnostics::Diagnosed,
    foundation::error::LayoutResult,
    foundation::math::Fnv1a64,
};

/// Stable 64-bit fingerprint of an arrangement request.
///
/// Arrangement output depends only on the item count and the config, so this is a complete
/// cache key (modulo hash collisions, which [`ArrangementCache`] checks for).
pub fn arrangement_fingerprint(item_count: usize, config: &ArrangementConfig) -> LayoutResult<u64> {
    let bytes = serde_json::to_vec(config)?;
    let mut h = Fnv1a64::new_default();
    h.write_u64(item_count as u64);
    h.write_bytes(&bytes);
    Ok(h.finish())
}

/// Results kept per fingerprint. Configs holding NaN never equal themselves and always miss.
const MAX_BUCKET_LEN: usize = 4;

struct CacheEntry {
    item_count: usize,
    config: ArrangementConfig,
    value: Diagnosed<ItemPositions>,
}

/// Memoizes [`calculate_item_positions`] per `(item count, config)`.
///
/// Owned by the caller (typically one per scene); nothing is shared across threads.
#[derive(Default)]
pub struct ArrangementCache {
    entries: HashMap<u64, Vec<CacheEntry>>,
    hits: u64,
    misses: u64,
}

impl ArrangementCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached result for this request, computing and storing it on a miss.
    ///
    /// A fingerprint keeps at most a few results; further misses on it are computed but not stored.
    pub fn get_or_compute<T>(
        &mut self,
        items: &[T],
        config: &ArrangementConfig,
    ) -> LayoutResult<Diagnosed<ItemPositions>> {
        let key = arrangement_fingerprint(items.len(), config)?;
        let bucket = self.entries.entry(key).or_default();
        if let Some(hit) = bucket
            .iter()
            .find(|e| e.item_count == items.len() && e.config == *config)
        {
            self.hits += 1;
            return Ok(hit.value.clone());
        }

        self.misses += 1;
        let value = calculate_item_positions(items, config);
        if bucket.len() >= MAX_BUCKET_LEN {
            tracing::debug!(key, "arrangement cache bucket full; result not stored");
            return Ok(value);
        }
        bucket.push(CacheEntry {
            item_count: items.len(),
            config: config.clone(),
            value: value.clone(),
        });
        Ok(value)
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry; hit and miss counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// `(hits, misses)` since construction.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/arrange/cache.rs"]
mod tests;
