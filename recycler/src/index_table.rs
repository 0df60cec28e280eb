use slotmap::{Key, SecondaryMap};

/// Maps each realized holder to the data index it currently displays.
///
/// At most one holder is bound to any index. Reverse lookups ([`IndexTable::find`]) are a
/// linear scan: the realized set is roughly one screen of items, so a second map is not kept.
#[derive(Clone, Debug)]
pub struct IndexTable<K: Key> {
    entries: SecondaryMap<K, usize>,
}

impl<K: Key> Default for IndexTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> IndexTable<K> {
    pub fn new() -> Self {
        Self {
            entries: SecondaryMap::new(),
        }
    }

    /// Binds `visual` to `index`, replacing any previous index of that visual.
    pub fn set(&mut self, visual: K, index: usize) {
        debug_assert!(
            self.find(index).is_none_or(|other| other == visual),
            "IndexTable: index {index} is already bound to another visual"
        );
        self.entries.insert(visual, index);
    }

    pub fn get(&self, visual: K) -> Option<usize> {
        self.entries.get(visual).copied()
    }

    pub fn remove(&mut self, visual: K) -> Option<usize> {
        self.entries.remove(visual)
    }

    pub fn contains(&self, visual: K) -> bool {
        self.entries.contains_key(visual)
    }

    /// Returns the visual bound to `index`, if any.
    pub fn find(&self, index: usize) -> Option<K> {
        self.entries
            .iter()
            .find_map(|(visual, &bound)| (bound == index).then_some(visual))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.entries.iter().map(|(visual, &index)| (visual, index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Adds `delta` to every index `>= threshold`.
    ///
    /// Callers only issue ±1 shifts at insertion/removal boundaries, so an index can never go
    /// negative; this is debug-asserted and saturates at zero otherwise.
    pub fn shift_from(&mut self, threshold: usize, delta: isize) {
        if delta == 0 {
            return;
        }
        for (_, index) in self.entries.iter_mut() {
            if *index >= threshold {
                debug_assert!(
                    index.checked_add_signed(delta).is_some(),
                    "IndexTable: shift would produce a negative index (index={index}, delta={delta})"
                );
                *index = index.saturating_add_signed(delta);
            }
        }
    }
}
