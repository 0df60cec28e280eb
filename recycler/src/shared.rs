use alloc::sync::Arc;

use parking_lot::Mutex;

use crate::{CollectionChange, Engine, ItemAdaptor, LayoutManager, ScrollSurface};

/// A cloneable handle to an [`Engine`] behind one lock.
///
/// For hosts whose data source or task queue lives off the UI thread. The lock is held for the
/// whole of each event or pass, so an engine hook must never call back into the same handle;
/// `on_layout_requested` should only post a task that later calls
/// [`SharedEngine::run_pending_layout`].
pub struct SharedEngine<A: ItemAdaptor, L, S> {
    inner: Arc<Mutex<Engine<A, L, S>>>,
}

impl<A: ItemAdaptor, L, S> Clone for SharedEngine<A, L, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, L, S> SharedEngine<A, L, S>
where
    A: ItemAdaptor,
    L: LayoutManager,
    S: ScrollSurface,
{
    pub fn new(engine: Engine<A, L, S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine<A, L, S>) -> R) -> R {
        let mut engine = self.inner.lock();
        f(&mut engine)
    }

    /// Delivers a data-source mutation.
    pub fn post_change(&self, change: CollectionChange) {
        self.inner.lock().on_collection_changed(change);
    }

    pub fn run_pending_layout(&self) -> bool {
        self.inner.lock().run_pending_layout()
    }

    pub fn needs_layout(&self) -> bool {
        self.inner.lock().needs_layout()
    }
}

impl<A: ItemAdaptor, L, S> core::fmt::Debug for SharedEngine<A, L, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.inner.try_lock() {
            Some(engine) => f.debug_tuple("SharedEngine").field(&*engine).finish(),
            None => f.write_str("SharedEngine(<locked>)"),
        }
    }
}
