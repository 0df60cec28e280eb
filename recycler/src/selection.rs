//! Selection policy and the set of selected data indices.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

/// How many items can be selected and how selection reacts to requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionMode {
    /// Nothing can be selected.
    #[default]
    None,
    /// At most one item; selecting it again is a no-op.
    Single,
    /// At most one item, and once selected it cannot be toggled off.
    SingleAlways,
    /// Any number of items.
    Multiple,
}

impl SelectionMode {
    fn is_single(self) -> bool {
        matches!(self, Self::Single | Self::SingleAlways)
    }
}

/// The visible consequences of a selection update.
///
/// The owner resets the visual state of every `deselected` index that is realized, marks
/// `selected` (if any) as selected and notifies the data source with the resulting set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionChange {
    pub deselected: Vec<usize>,
    pub selected: Option<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    mode: SelectionMode,
    items: BTreeSet<usize>,
}

impl SelectionState {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            items: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn items(&self) -> &BTreeSet<usize> {
        &self.items
    }

    pub fn contains(&self, index: usize) -> bool {
        self.items.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `None` when the request changes nothing and must not be re-notified.
    pub fn request_select(&mut self, index: usize) -> Option<SelectionChange> {
        let mut change = SelectionChange::default();
        match self.mode {
            SelectionMode::None => return None,
            SelectionMode::Single | SelectionMode::SingleAlways => {
                if let Some(&current) = self.items.first() {
                    if current == index {
                        if self.mode == SelectionMode::Single {
                            return None;
                        }
                    } else {
                        change.deselected.extend(self.items.iter().copied());
                        self.items.clear();
                    }
                }
            }
            SelectionMode::Multiple => {}
        }
        self.items.insert(index);
        change.selected = Some(index);
        Some(change)
    }

    /// Returns `None` when nothing was removed.
    pub fn request_unselect(&mut self, index: usize) -> Option<SelectionChange> {
        match self.mode {
            SelectionMode::None => return None,
            SelectionMode::SingleAlways if self.items.len() == 1 && self.contains(index) => {
                return None;
            }
            _ => {}
        }
        if !self.items.remove(&index) {
            return None;
        }
        Some(SelectionChange {
            deselected: alloc::vec![index],
            selected: None,
        })
    }

    /// A tap on an item: unselects a selected item unless the mode is sticky, selects otherwise.
    pub fn toggle(&mut self, index: usize) -> Option<SelectionChange> {
        if self.contains(index) && self.mode != SelectionMode::SingleAlways {
            self.request_unselect(index)
        } else {
            self.request_select(index)
        }
    }

    /// Drops `index` (its item was removed from the data source).
    pub fn remove(&mut self, index: usize) -> bool {
        self.items.remove(&index)
    }

    /// Adds `delta` to every selected index `>= threshold`, mirroring
    /// [`crate::IndexTable::shift_from`].
    pub fn on_index_shift(&mut self, threshold: usize, delta: isize) {
        if delta == 0 || self.items.range(threshold..).next().is_none() {
            return;
        }
        let shifted = self.items.split_off(&threshold);
        for index in shifted {
            debug_assert!(
                index.checked_add_signed(delta).is_some(),
                "SelectionState: shift would produce a negative index (index={index}, delta={delta})"
            );
            self.items.insert(index.saturating_add_signed(delta));
        }
    }

    /// Switches policy and trims the set to the new cardinality.
    ///
    /// Downgrading to a single mode keeps the lowest selected index. The returned change lists
    /// everything dropped; the owner re-notifies the data source unconditionally.
    pub fn set_mode(&mut self, mode: SelectionMode) -> SelectionChange {
        self.mode = mode;
        let mut change = SelectionChange::default();
        if mode == SelectionMode::None {
            change.deselected.extend(self.items.iter().copied());
            self.items.clear();
        } else if mode.is_single() && self.items.len() > 1 {
            if let Some(&first) = self.items.first() {
                let rest = self.items.split_off(&(first + 1));
                change.deselected.extend(rest);
            }
        }
        change
    }

    /// Empties the set regardless of mode, returning what was selected.
    pub fn clear(&mut self) -> Vec<usize> {
        let cleared = self.items.iter().copied().collect();
        self.items.clear();
        cleared
    }
}
