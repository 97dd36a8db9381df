//! Lazily computed, per-instance structural hash.

use rustc_hash::FxHasher;
use std::hash::Hasher;
use std::sync::OnceLock;

/// Memoized hash of the node that owns it.
///
/// Filled on the first `get_or_compute` and reset by every `&mut`
/// mutator of the owner through [`HashCache::invalidate`]. Cloning a
/// node clones the cached value with it.
#[derive(Clone, Debug, Default)]
pub(crate) struct HashCache(OnceLock<u64>);

impl HashCache {
    pub(crate) fn new() -> Self {
        HashCache(OnceLock::new())
    }

    /// Return the cached hash, computing it with `feed` on first use.
    pub(crate) fn get_or_compute(&self, feed: impl FnOnce(&mut FxHasher)) -> u64 {
        *self.0.get_or_init(|| {
            let mut hasher = FxHasher::default();
            feed(&mut hasher);
            hasher.finish()
        })
    }

    pub(crate) fn invalidate(&mut self) {
        self.0.take();
    }

    #[cfg(test)]
    pub(crate) fn is_filled(&self) -> bool {
        self.0.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::Hash;

    #[test]
    fn computes_once() {
        let cache = HashCache::new();
        let first = cache.get_or_compute(|h| 42u32.hash(h));
        let second = cache.get_or_compute(|h| 7u32.hash(h));
        assert_eq!(first, second);
        assert!(cache.is_filled());
    }

    #[test]
    fn invalidate_forces_recompute() {
        let mut cache = HashCache::new();
        let first = cache.get_or_compute(|h| 42u32.hash(h));
        cache.invalidate();
        assert!(!cache.is_filled());
        let second = cache.get_or_compute(|h| 7u32.hash(h));
        assert_ne!(first, second);
    }
}
