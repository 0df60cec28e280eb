use alloc::vec::Vec;

use crate::key::{CategoryKey, CategoryMap};

/// Result of handing a visual back to a [`VisualPool`].
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub enum Released<K> {
    /// The visual is now pooled for reuse.
    Pooled,
    /// The pool is at its bound; the caller must destroy the visual.
    Rejected(K),
}

/// A per-engine cache of released visuals, keyed by recycling category.
///
/// The pool never holds more spare visuals than the `bound` passed to [`VisualPool::release`]
/// (the number of visuals still realized). Reuse requires an exact category match.
#[derive(Clone, Debug)]
pub struct VisualPool<C, K> {
    slots: CategoryMap<C, Vec<K>>,
    len: usize,
}

impl<C: CategoryKey, K> Default for VisualPool<C, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CategoryKey, K> VisualPool<C, K> {
    pub fn new() -> Self {
        Self {
            slots: CategoryMap::new(),
            len: 0,
        }
    }

    /// Takes any pooled visual of exactly `category`.
    pub fn acquire(&mut self, category: &C) -> Option<K> {
        let visual = self.slots.get_mut(category)?.pop()?;
        self.len -= 1;
        Some(visual)
    }

    /// Offers `visual` back to the pool.
    ///
    /// Accepted only while the pool holds fewer than `bound` entries.
    pub fn release(&mut self, category: C, visual: K, bound: usize) -> Released<K> {
        if self.len >= bound {
            rtrace!(pooled = self.len, bound, "VisualPool: rejecting release");
            return Released::Rejected(visual);
        }
        self.slots.entry(category).or_default().push(visual);
        self.len += 1;
        Released::Pooled
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of pooled visuals of `category`.
    pub fn len_of(&self, category: &C) -> usize {
        self.slots.get(category).map_or(0, Vec::len)
    }

    /// Empties the pool, handing every pooled visual to the caller for disposal.
    pub fn clear(&mut self) -> Vec<K> {
        let mut drained = Vec::with_capacity(self.len);
        for (_, mut visuals) in core::mem::take(&mut self.slots) {
            drained.append(&mut visuals);
        }
        self.len = 0;
        drained
    }
}
