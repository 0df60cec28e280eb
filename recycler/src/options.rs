use alloc::sync::Arc;

use crate::{ScrolledEvent, SelectionMode};

/// Hook called when the engine needs a deferred layout pass.
///
/// The host should post a task onto its UI queue that calls
/// [`crate::Engine::run_pending_layout`]. It is called at most once per pending pass.
pub type LayoutRequestCallback = Arc<dyn Fn() + Send + Sync>;

/// Hook fired after a scroll animation ends.
pub type ScrolledCallback = Arc<dyn Fn(&ScrolledEvent) + Send + Sync>;

/// Configuration for [`crate::Engine`].
///
/// Cheap to clone: hooks live in `Arc`s.
pub struct EngineOptions {
    pub selection_mode: SelectionMode,

    /// Floor applied to both sides of the cached template item size.
    pub min_item_size: f64,

    pub on_layout_requested: Option<LayoutRequestCallback>,

    pub on_scrolled: Option<ScrolledCallback>,
}

impl Clone for EngineOptions {
    fn clone(&self) -> Self {
        Self {
            selection_mode: self.selection_mode,
            min_item_size: self.min_item_size,
            on_layout_requested: self.on_layout_requested.clone(),
            on_scrolled: self.on_scrolled.clone(),
        }
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineOptions {
    pub fn new() -> Self {
        Self {
            selection_mode: SelectionMode::None,
            min_item_size: 10.0,
            on_layout_requested: None,
            on_scrolled: None,
        }
    }

    pub fn with_selection_mode(mut self, selection_mode: SelectionMode) -> Self {
        self.selection_mode = selection_mode;
        self
    }

    pub fn with_min_item_size(mut self, min_item_size: f64) -> Self {
        self.min_item_size = min_item_size;
        self
    }

    pub fn with_on_layout_requested(
        mut self,
        on_layout_requested: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_layout_requested = on_layout_requested.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scrolled(
        mut self,
        on_scrolled: Option<impl Fn(&ScrolledEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scrolled = on_scrolled.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for EngineOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EngineOptions")
            .field("selection_mode", &self.selection_mode)
            .field("min_item_size", &self.min_item_size)
            .field("on_layout_requested", &self.on_layout_requested.is_some())
            .field("on_scrolled", &self.on_scrolled.is_some())
            .finish()
    }
}
