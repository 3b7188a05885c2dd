//! Single-slot year cache.

use std::sync::Arc;

use crate::year_index::YearIndex;

/// Holds at most one computed [`YearIndex`].
///
/// Storing a new year replaces the previous one; nothing is merged.
#[derive(Debug, Clone, Default)]
pub struct YearCache {
    slot: Option<Arc<YearIndex>>,
}

impl YearCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached index if it is for `year`.
    pub fn get(&self, year: u16) -> Option<Arc<YearIndex>> {
        self.slot
            .as_ref()
            .filter(|index| index.year() == year)
            .cloned()
    }

    /// Replace the slot with `index` and return the shared handle.
    pub fn set(&mut self, index: YearIndex) -> Arc<YearIndex> {
        let index = Arc::new(index);
        self.slot = Some(Arc::clone(&index));
        index
    }

    /// Empty the slot.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    /// Year currently held, if any.
    pub fn year(&self) -> Option<u16> {
        self.slot.as_ref().map(|index| index.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_slot() {
        let mut cache = YearCache::new();
        assert_eq!(cache.year(), None);
        assert!(cache.get(2024).is_none());

        let stored = cache.set(YearIndex::new(2024));
        assert!(Arc::ptr_eq(&stored, &cache.get(2024).unwrap()));
        assert!(cache.get(2025).is_none());

        cache.set(YearIndex::new(2025));
        assert_eq!(cache.year(), Some(2025));
        assert!(cache.get(2024).is_none());

        cache.invalidate();
        assert!(cache.get(2025).is_none());
    }
}
