#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type CategoryMap<C, V> = HashMap<C, V>;
#[cfg(not(feature = "std"))]
pub(crate) type CategoryMap<C, V> = BTreeMap<C, V>;

/// Bound for recycling category tags.
///
/// With `std` this is `Hash + Eq + Clone`; without it the pool falls back to an ordered map and
/// the bound becomes `Ord + Clone`.
#[cfg(feature = "std")]
pub trait CategoryKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<C: core::hash::Hash + Eq + Clone> CategoryKey for C {}

#[cfg(not(feature = "std"))]
pub trait CategoryKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<C: Ord + Clone> CategoryKey for C {}
