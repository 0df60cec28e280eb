//! A headless virtualizing item-view engine with visual recycling.
//!
//! For concrete layouts (linear, grid) and a headless scroll surface, see the
//! `recycler-layout` crate.
//!
//! The engine renders a large collection inside a fixed viewport by realizing only the items a
//! [`LayoutManager`] reports visible, and by recycling their visuals through a per-engine,
//! category-keyed pool as the user scrolls. It keeps a holder → index table, a selection set
//! and the layout's model consistent under arbitrary interleaved collection edits.
//!
//! It is UI-agnostic. The host provides:
//! - an [`ItemAdaptor`] (item count, visual factory, binding)
//! - a [`LayoutManager`] (geometry)
//! - a [`ScrollSurface`] (viewport, content size, programmatic scrolling)
//! - a way to run [`Engine::run_pending_layout`] on its UI queue when
//!   [`EngineOptions::on_layout_requested`] fires
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adaptor;
mod change;
mod emitter;
mod engine;
mod error;
mod index_table;
mod key;
mod layout;
mod options;
mod pool;
mod selection;
#[cfg(feature = "sync")]
mod shared;
mod surface;
mod types;


pub use adaptor::ItemAdaptor;
pub use change::{ChangeStep, ChangeTranslator, CollectionChange, LayoutNotice};
pub use emitter::IndexEmitter;
pub use engine::{Engine, HolderId, scroll_target};
pub use error::EngineError;
pub use index_table::IndexTable;
pub use key::CategoryKey;
pub use layout::{LayoutContext, LayoutManager};
pub use options::{EngineOptions, LayoutRequestCallback, ScrolledCallback};
pub use pool::{Released, VisualPool};
pub use selection::{SelectionChange, SelectionMode, SelectionState};
#[cfg(feature = "sync")]
pub use shared::SharedEngine;
pub use surface::ScrollSurface;
pub use types::{ItemState, Point, Rect, ScrollToPosition, ScrolledEvent, Size};
