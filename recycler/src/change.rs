//! Translation of data-source mutations into engine steps.
//!
//! [`ChangeTranslator::translate`] is pure: it turns one [`CollectionChange`] into an ordered
//! list of [`ChangeStep`]s, which the engine then applies to its index table, selection and
//! layout manager.

use alloc::vec::Vec;

/// One mutation batch reported by the data source.
///
/// Positions are `None` when the source could not tell where the change happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollectionChange {
    Insert {
        position: Option<usize>,
        count: usize,
    },
    Remove {
        position: Option<usize>,
        count: usize,
    },
    /// `to` is the first index of the moved block after the move.
    Move {
        from: Option<usize>,
        to: Option<usize>,
        count: usize,
    },
    Replace {
        position: Option<usize>,
        count: usize,
    },
    Reset,
}

/// A notification for the layout manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutNotice {
    Inserted(usize),
    Removed(usize),
    Updated(usize),
    SourceUpdated,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeStep {
    /// Add `delta` to every bound and selected index `>= threshold`.
    Shift { threshold: usize, delta: isize },
    /// The item at this index is gone: unrealize its holder and drop it from the selection.
    Evict(usize),
    /// Refresh the binding of the holder at this index, if realized.
    Rebind(usize),
    Notify(LayoutNotice),
    /// Positions are unknown: unrealize every holder.
    InvalidateAll,
}

pub struct ChangeTranslator;

impl ChangeTranslator {
    /// Plans the steps for `change`.
    ///
    /// `current_count` is the data source's item count *after* the mutation; it only matters
    /// for inserts at an unknown position.
    pub fn translate(change: &CollectionChange, current_count: usize) -> Vec<ChangeStep> {
        let mut steps = Vec::new();
        match *change {
            CollectionChange::Insert { position, count } => {
                let start = position.unwrap_or_else(|| {
                    // Best effort: assume the items were appended.
                    let inferred = current_count.saturating_sub(count);
                    rwarn!(
                        count,
                        current_count,
                        inferred,
                        "insert without a position, assuming append"
                    );
                    inferred
                });
                steps.reserve(count * 2);
                for position in start..start + count {
                    steps.push(ChangeStep::Shift {
                        threshold: position,
                        delta: 1,
                    });
                    steps.push(ChangeStep::Notify(LayoutNotice::Inserted(position)));
                }
            }
            CollectionChange::Remove {
                position: Some(position),
                count,
            } => {
                steps.reserve(count * 3);
                for _ in 0..count {
                    steps.push(ChangeStep::Notify(LayoutNotice::Removed(position)));
                    steps.push(ChangeStep::Evict(position));
                    steps.push(ChangeStep::Shift {
                        threshold: position + 1,
                        delta: -1,
                    });
                }
            }
            CollectionChange::Remove { position: None, .. } => {
                rwarn!(?change, "remove without a position, reloading the source");
                steps.push(ChangeStep::Notify(LayoutNotice::SourceUpdated));
                steps.push(ChangeStep::InvalidateAll);
            }
            CollectionChange::Move {
                from: Some(from),
                to: Some(to),
                count,
            } => {
                for _ in 0..count {
                    steps.push(ChangeStep::Notify(LayoutNotice::Removed(from)));
                }
                for position in to..to + count {
                    steps.push(ChangeStep::Notify(LayoutNotice::Inserted(position)));
                }
                let lo = from.min(to);
                let hi = from.max(to) + count;
                steps.extend((lo..hi).map(ChangeStep::Rebind));
            }
            CollectionChange::Move { .. } => {
                rwarn!(?change, "move without positions, reloading the source");
                Self::reset(&mut steps);
            }
            CollectionChange::Replace {
                position: Some(position),
                count: 1,
            } => {
                steps.push(ChangeStep::Notify(LayoutNotice::Updated(position)));
                steps.push(ChangeStep::Rebind(position));
            }
            CollectionChange::Replace { .. } => {
                rwarn!(?change, "replace cannot be tracked, reloading the source");
                Self::reset(&mut steps);
            }
            CollectionChange::Reset => Self::reset(&mut steps),
        }
        steps
    }

    fn reset(steps: &mut Vec<ChangeStep>) {
        steps.push(ChangeStep::Notify(LayoutNotice::Reset));
        steps.push(ChangeStep::Notify(LayoutNotice::SourceUpdated));
        steps.push(ChangeStep::InvalidateAll);
    }
}
