use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::cell::Cell;
use core::mem;

use slotmap::{SlotMap, new_key_type};

use crate::change::{ChangeStep, ChangeTranslator, CollectionChange, LayoutNotice};
use crate::error::{EngineError, fatal};
use crate::pool::{Released, VisualPool};
use crate::selection::{SelectionChange, SelectionMode, SelectionState};
use crate::{
    EngineOptions, IndexEmitter, IndexTable, ItemAdaptor, ItemState, LayoutContext, LayoutManager,
    Point, Rect, ScrollSurface, ScrollToPosition, ScrolledEvent, Size,
};

new_key_type! {
    /// Identifies a holder in one engine's arena.
    ///
    /// Ids are never shared between engines; a destroyed holder's id is never handed out again.
    pub struct HolderId;
}

struct Holder<V, C> {
    visual: V,
    category: C,
    state: ItemState,
}

/// The virtualizing item-view engine.
///
/// It owns the recycling pool, the holder → index table and the selection, and drives a
/// pluggable [`LayoutManager`] against an [`ItemAdaptor`] and a [`ScrollSurface`]:
/// - collection changes go through [`Engine::on_collection_changed`];
/// - surface events go through [`Engine::on_scrolled`], [`Engine::on_size_allocated`] and
///   [`Engine::on_scroll_animation_ended`];
/// - invalidations are coalesced into one deferred pass run by [`Engine::run_pending_layout`].
///
/// All methods must be called from one logical UI thread. Methods that need an adaptor or a
/// layout panic when it is missing; use the `try_*` variants to get an [`EngineError`] instead.
pub struct Engine<A: ItemAdaptor, L, S> {
    options: EngineOptions,
    adaptor: Option<A>,
    layout: Option<L>,
    surface: S,

    holders: SlotMap<HolderId, Holder<A::Visual, A::Category>>,
    table: IndexTable<HolderId>,
    pool: VisualPool<A::Category, HolderId>,
    selection: SelectionState,

    allocated: Size,
    item_size: Cell<Option<Size>>,
    header: Option<A::Visual>,
    footer: Option<A::Visual>,
    layout_pending: bool,
    previous_offset: Point,

    // Scratch buffers reused across passes.
    visible: Vec<usize>,
    bound: Vec<usize>,
    stale: Vec<HolderId>,
    shifted: Vec<(HolderId, usize)>,
}

struct Context<'a, A> {
    adaptor: &'a A,
    allocated: Size,
    item_size: &'a Cell<Option<Size>>,
    min_item_size: f64,
}

impl<A: ItemAdaptor> LayoutContext for Context<'_, A> {
    fn count(&self) -> usize {
        self.adaptor.count()
    }

    fn allocated_size(&self) -> Size {
        self.allocated
    }

    fn item_size(&self, constraint: Size) -> Size {
        if self.adaptor.count() == 0 {
            return Size::ZERO;
        }
        if let Some(size) = self.item_size.get() {
            return size;
        }
        let measured = self.adaptor.measure_template(constraint);
        let size = Size::new(
            measured.width.max(self.min_item_size),
            measured.height.max(self.min_item_size),
        );
        self.item_size.set(Some(size));
        size
    }

    fn measure_item(&self, index: usize, constraint: Size) -> Size {
        self.adaptor.measure_item(index, constraint)
    }
}

impl<A, L, S> Engine<A, L, S>
where
    A: ItemAdaptor,
    L: LayoutManager,
    S: ScrollSurface,
{
    pub fn new(surface: S, options: EngineOptions) -> Self {
        rdebug!(selection_mode = ?options.selection_mode, "Engine::new");
        Self {
            selection: SelectionState::new(options.selection_mode),
            options,
            adaptor: None,
            layout: None,
            surface,
            holders: SlotMap::with_key(),
            table: IndexTable::new(),
            pool: VisualPool::new(),
            allocated: Size::ZERO,
            item_size: Cell::new(None),
            header: None,
            footer: None,
            layout_pending: false,
            previous_offset: Point::default(),
            visible: Vec::new(),
            bound: Vec::new(),
            stale: Vec::new(),
            shifted: Vec::new(),
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn adaptor(&self) -> Option<&A> {
        self.adaptor.as_ref()
    }

    /// Mutable access for data edits; report them through [`Engine::on_collection_changed`].
    pub fn adaptor_mut(&mut self) -> Option<&mut A> {
        self.adaptor.as_mut()
    }

    pub fn layout(&self) -> Option<&L> {
        self.layout.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn count(&self) -> usize {
        self.adaptor.as_ref().map_or(0, ItemAdaptor::count)
    }

    pub fn allocated_size(&self) -> Size {
        self.allocated
    }

    pub fn canvas_size(&self) -> Size {
        self.layout
            .as_ref()
            .map_or(self.allocated, LayoutManager::canvas_size)
    }

    /// Wires `adaptor`, detaching (and returning) the previous one first.
    pub fn attach_adaptor(&mut self, adaptor: A) -> Option<A> {
        let previous = self.detach_adaptor();
        rdebug!(count = adaptor.count(), "attach_adaptor");
        self.item_size.set(None);
        let adaptor = self.adaptor.insert(adaptor);
        self.header = adaptor.create_header();
        self.footer = adaptor.create_footer();
        self.sync_layout();
        self.update_header_footer();
        self.request_layout();
        previous
    }

    /// Unwires the current adaptor. Idempotent.
    ///
    /// Every holder is unrealized and the pool is drained through the outgoing adaptor, so it
    /// receives `remove_visual` for each visual it created. The selection is cleared.
    pub fn detach_adaptor(&mut self) -> Option<A> {
        self.adaptor.as_ref()?;
        rdebug!(realized = self.table.len(), pooled = self.pool.len(), "detach_adaptor");
        if let Some(layout) = self.layout.as_mut() {
            layout.reset();
        }
        self.unrealize_all();
        let mut adaptor = self.adaptor.take()?;
        for id in self.pool.clear() {
            if let Some(holder) = self.holders.remove(id) {
                adaptor.remove_visual(holder.visual);
            }
        }
        if let Some(header) = self.header.take() {
            adaptor.remove_visual(header);
        }
        if let Some(footer) = self.footer.take() {
            adaptor.remove_visual(footer);
        }
        debug_assert!(self.holders.is_empty(), "holders leaked past detach");
        self.selection.clear();
        self.update_header_footer();
        Some(adaptor)
    }

    /// Installs `layout`, detaching (and returning) the previous one first.
    ///
    /// When the new layout scrolls along a different axis the surface is scrolled back to the
    /// origin and switched over.
    pub fn attach_layout(&mut self, layout: L) -> Option<L> {
        let previous = self.detach_layout();
        self.item_size.set(None);
        let horizontal = layout.is_horizontal();
        if self.surface.is_horizontal() != horizontal {
            self.surface.scroll_to(0.0, false);
            self.surface.set_horizontal(horizontal);
        }
        self.layout = Some(layout);
        self.sync_layout();
        self.update_header_footer();
        self.request_layout();
        previous
    }

    /// Removes the layout after resetting it. Idempotent.
    pub fn detach_layout(&mut self) -> Option<L> {
        let mut layout = self.layout.take()?;
        layout.reset();
        Some(layout)
    }

    /// Requests a coalesced deferred layout pass.
    ///
    /// Ignored while nothing has been allocated. Otherwise the first request since the last
    /// pass marks the engine pending and invokes `on_layout_requested`; further requests are
    /// absorbed until [`Engine::run_pending_layout`] runs.
    pub fn request_layout(&mut self) {
        if self.allocated.is_empty() || self.layout_pending {
            return;
        }
        self.layout_pending = true;
        rtrace!("request_layout: scheduling a pass");
        if let Some(cb) = &self.options.on_layout_requested {
            cb();
        }
    }

    pub fn needs_layout(&self) -> bool {
        self.layout_pending
    }

    /// Runs the deferred pass, if one is pending. Returns `true` when a request was consumed.
    ///
    /// The pending flag is cleared before the pass, so a request made during it schedules a new
    /// one.
    pub fn run_pending_layout(&mut self) -> bool {
        if !mem::replace(&mut self.layout_pending, false) {
            return false;
        }
        if self.adaptor.is_some() && self.layout.is_some() {
            self.update_content_size();
            self.layout_items();
        }
        true
    }

    /// The host resized the view: relayout immediately.
    pub fn on_size_allocated(&mut self, size: Size) {
        rdebug!(width = size.width, height = size.height, "on_size_allocated");
        self.allocated = size;
        self.item_size.set(None);
        if self.adaptor.is_none() || self.layout.is_none() {
            return;
        }
        self.with_layout_cx(|layout, cx| layout.size_allocated(size, cx));
        self.update_header_footer();
        self.update_content_size();
        self.layout_items();
    }

    /// The surface scrolled: realize against the new viewport.
    pub fn on_scrolled(&mut self) {
        if self.adaptor.is_some() && self.layout.is_some() {
            self.layout_items();
        }
    }

    /// The surface finished a scroll animation: emits a [`ScrolledEvent`].
    pub fn on_scroll_animation_ended(&mut self) -> ScrolledEvent {
        match self.try_on_scroll_animation_ended() {
            Ok(event) => event,
            Err(err) => fatal(err),
        }
    }

    pub fn try_on_scroll_animation_ended(&mut self) -> Result<ScrolledEvent, EngineError> {
        let layout = self.layout.as_ref().ok_or(EngineError::NoLayoutManager)?;
        let viewport = self.surface.viewport();
        // The far corner is exclusive; probe one unit inside it.
        let far = Point::new(
            (viewport.right() - 1.0).max(viewport.x),
            (viewport.bottom() - 1.0).max(viewport.y),
        );
        let event = ScrolledEvent {
            first_visible_index: layout.index_at(Point::new(viewport.x, viewport.y)),
            center_index: layout.index_at(viewport.center()),
            last_visible_index: layout.index_at(far),
            horizontal_offset: viewport.x,
            horizontal_delta: viewport.x - self.previous_offset.x,
            vertical_offset: viewport.y,
            vertical_delta: viewport.y - self.previous_offset.y,
        };
        self.previous_offset = Point::new(viewport.x, viewport.y);
        if let Some(cb) = &self.options.on_scrolled {
            cb(&event);
        }
        Ok(event)
    }

    /// Runs a full layout pass against the surface's current viewport.
    pub fn layout_items(&mut self) {
        if let Err(err) = self.try_layout_items() {
            fatal(err)
        }
    }

    /// Realizes exactly the indexes the layout reports visible, unrealizing the rest.
    pub fn try_layout_items(&mut self) -> Result<(), EngineError> {
        let layout = self.layout.as_ref().ok_or(EngineError::NoLayoutManager)?;
        let adaptor = self.adaptor.as_ref().ok_or(EngineError::NoAdaptor)?;
        let viewport = self.surface.viewport();

        let mut visible = mem::take(&mut self.visible);
        visible.clear();
        {
            let mut push = |index| visible.push(index);
            let mut emitter = IndexEmitter::new(adaptor.count(), &mut push);
            layout.visible_items(viewport, &mut emitter);
        }

        let mut stale = mem::take(&mut self.stale);
        stale.clear();
        stale.extend(
            self.table
                .iter()
                .filter(|&(_, index)| visible.binary_search(&index).is_err())
                .map(|(id, _)| id),
        );
        for &id in &stale {
            self.try_unrealize(id)?;
        }

        let mut bound = mem::take(&mut self.bound);
        bound.clear();
        bound.extend(self.table.iter().map(|(_, index)| index));
        bound.sort_unstable();
        for &index in &visible {
            if bound.binary_search(&index).is_err() {
                self.try_realize(index)?;
            }
        }

        rtrace!(
            visible = visible.len(),
            unrealized = stale.len(),
            pooled = self.pool.len(),
            "layout_items"
        );
        self.visible = visible;
        self.stale = stale;
        self.bound = bound;
        Ok(())
    }

    /// Binds item `index` to a pooled or freshly created visual and registers it.
    ///
    /// Realizing an index that is already realized rebinds its holder.
    pub fn realize(&mut self, index: usize) -> HolderId {
        match self.try_realize(index) {
            Ok(id) => id,
            Err(err) => fatal(err),
        }
    }

    pub fn try_realize(&mut self, index: usize) -> Result<HolderId, EngineError> {
        let adaptor = self.adaptor.as_mut().ok_or(EngineError::NoAdaptor)?;

        if let Some(id) = self.table.find(index) {
            adaptor.bind(&mut self.holders[id].visual, index);
            return Ok(id);
        }

        let category = adaptor.category_of(index);
        let id = match self.pool.acquire(&category) {
            Some(id) => id,
            None => {
                rtrace!(index, "realize: creating a visual");
                let visual = adaptor.create_visual(index);
                self.holders.insert(Holder {
                    visual,
                    category,
                    state: ItemState::Normal,
                })
            }
        };

        let holder = &mut self.holders[id];
        adaptor.bind(&mut holder.visual, index);
        self.table.set(id, index);
        if self.selection.contains(index) {
            holder.state = ItemState::Selected;
            adaptor.update_visual_state(&mut holder.visual, ItemState::Selected);
        }
        Ok(id)
    }

    /// Unbinds `id` and returns it to the pool, or destroys it when the pool is full.
    ///
    /// Unknown or already unrealized ids are ignored.
    pub fn unrealize(&mut self, id: HolderId) {
        if let Err(err) = self.try_unrealize(id) {
            fatal(err)
        }
    }

    pub fn try_unrealize(&mut self, id: HolderId) -> Result<(), EngineError> {
        let adaptor = self.adaptor.as_mut().ok_or(EngineError::NoAdaptor)?;
        if self.table.remove(id).is_none() {
            return Ok(());
        }
        let Some(holder) = self.holders.get_mut(id) else {
            return Ok(());
        };
        if holder.state != ItemState::Normal {
            holder.state = ItemState::Normal;
            adaptor.update_visual_state(&mut holder.visual, ItemState::Normal);
        }
        adaptor.unbind(&mut holder.visual);

        let category = holder.category.clone();
        match self.pool.release(category, id, self.table.len()) {
            Released::Pooled => rtrace!(?id, "unrealize: pooled"),
            Released::Rejected(id) => {
                rtrace!(?id, "unrealize: pool full, destroying");
                if let Some(holder) = self.holders.remove(id) {
                    adaptor.remove_visual(holder.visual);
                }
            }
        }
        Ok(())
    }

    /// Applies one data-source mutation and requests a relayout.
    ///
    /// Changes arriving while no adaptor is attached come from a stale source and are ignored.
    pub fn on_collection_changed(&mut self, change: CollectionChange) {
        let Some(adaptor) = self.adaptor.as_ref() else {
            rdebug!(?change, "collection change without an adaptor, ignoring");
            return;
        };
        let steps = ChangeTranslator::translate(&change, adaptor.count());
        rtrace!(?change, steps = steps.len(), "on_collection_changed");

        let mut shifted = mem::take(&mut self.shifted);
        shifted.clear();
        shifted.extend(self.table.iter());
        for step in steps {
            self.apply_step(step);
        }
        // Holders that now stand for a different index still show their old binding.
        for &(id, previous) in &shifted {
            match self.table.get(id) {
                Some(index) if index != previous => self.rebind_holder(id, index),
                _ => {}
            }
        }
        self.shifted = shifted;
        self.request_layout();
    }

    fn apply_step(&mut self, step: ChangeStep) {
        match step {
            ChangeStep::Shift { threshold, delta } => {
                self.table.shift_from(threshold, delta);
                self.selection.on_index_shift(threshold, delta);
            }
            ChangeStep::Evict(index) => {
                if let Some(id) = self.table.find(index) {
                    self.unrealize(id);
                }
                self.selection.remove(index);
            }
            ChangeStep::Rebind(index) => self.rebind(index),
            ChangeStep::Notify(notice) => self.notify_layout(notice),
            ChangeStep::InvalidateAll => self.unrealize_all(),
        }
    }

    fn notify_layout(&mut self, notice: LayoutNotice) {
        self.with_layout_cx(|layout, cx| match notice {
            LayoutNotice::Inserted(index) => layout.item_inserted(index, cx),
            LayoutNotice::Removed(index) => layout.item_removed(index, cx),
            LayoutNotice::Updated(index) => layout.item_updated(index, cx),
            LayoutNotice::SourceUpdated => layout.item_source_updated(cx),
            LayoutNotice::Reset => layout.reset(),
        });
    }

    fn rebind(&mut self, index: usize) {
        if let Some(id) = self.table.find(index) {
            self.rebind_holder(id, index);
        }
    }

    /// Refreshes the content of holder `id`, bound to `index`; a holder whose category no
    /// longer matches is unrealized so the next pass picks a compatible one.
    fn rebind_holder(&mut self, id: HolderId, index: usize) {
        let Some(adaptor) = self.adaptor.as_mut() else {
            fatal(EngineError::NoAdaptor)
        };
        let category = adaptor.category_of(index);
        let Some(holder) = self.holders.get_mut(id) else {
            return;
        };
        if holder.category != category {
            self.unrealize(id);
            return;
        }
        adaptor.unbind(&mut holder.visual);
        adaptor.bind(&mut holder.visual, index);
        let selected = self.selection.contains(index);
        let state = match holder.state {
            ItemState::Selected if !selected => ItemState::Normal,
            _ if selected => ItemState::Selected,
            state => state,
        };
        if holder.state != state {
            holder.state = state;
            adaptor.update_visual_state(&mut holder.visual, state);
        }
    }

    fn unrealize_all(&mut self) {
        let mut stale = mem::take(&mut self.stale);
        stale.clear();
        stale.extend(self.table.iter().map(|(id, _)| id));
        for &id in &stale {
            self.unrealize(id);
        }
        self.stale = stale;
    }

    /// The size of item 0 (or the item template) changed.
    pub fn item_measure_invalidated(&mut self, index: usize) {
        if index == 0 {
            self.item_size.set(None);
        }
        self.with_layout_cx(|layout, cx| layout.item_measure_invalidated(index, cx));
        self.request_layout();
    }

    /// Scrolls so that item `index` lands at `position`.
    pub fn scroll_to(&mut self, index: usize, position: ScrollToPosition, animate: bool) {
        if let Err(err) = self.try_scroll_to(index, position, animate) {
            fatal(err)
        }
    }

    pub fn try_scroll_to(
        &mut self,
        index: usize,
        position: ScrollToPosition,
        animate: bool,
    ) -> Result<(), EngineError> {
        let layout = self.layout.as_ref().ok_or(EngineError::NoLayoutManager)?;
        let target = scroll_target(
            layout.bounds_of(index),
            self.surface.viewport(),
            position,
            layout.is_horizontal(),
        );
        let Some(offset) = target else {
            rtrace!(index, "scroll_to: already visible");
            return Ok(());
        };
        rdebug!(index, offset, animate, "scroll_to");
        self.surface.scroll_to(offset, animate);
        self.request_layout();
        Ok(())
    }

    /// Scrolls to `item`, resolved through [`ItemAdaptor::index_of`]. Unknown items are ignored.
    pub fn scroll_to_item(&mut self, item: &A::Item, position: ScrollToPosition, animate: bool) {
        if let Err(err) = self.try_scroll_to_item(item, position, animate) {
            fatal(err)
        }
    }

    pub fn try_scroll_to_item(
        &mut self,
        item: &A::Item,
        position: ScrollToPosition,
        animate: bool,
    ) -> Result<(), EngineError> {
        let adaptor = self.adaptor.as_ref().ok_or(EngineError::NoAdaptor)?;
        match adaptor.index_of(item) {
            Some(index) => self.try_scroll_to(index, position, animate),
            None => {
                rdebug!("scroll_to_item: item not found");
                Ok(())
            }
        }
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// Changes the selection policy, trimming the current selection to fit it.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        let change = self.selection.set_mode(mode);
        self.apply_selection_change(Some(change));
    }

    pub fn selected_items(&self) -> &BTreeSet<usize> {
        self.selection.items()
    }

    pub fn request_select(&mut self, index: usize) {
        let change = self.selection.request_select(index);
        self.apply_selection_change(change);
    }

    pub fn request_unselect(&mut self, index: usize) {
        let change = self.selection.request_unselect(index);
        self.apply_selection_change(change);
    }

    /// A tap on a realized holder: toggles its item's selection.
    pub fn toggle_selection(&mut self, id: HolderId) {
        let Some(index) = self.table.get(id) else {
            return;
        };
        let change = self.selection.toggle(index);
        self.apply_selection_change(change);
    }

    /// Sets a UI-originated state (e.g. focus) on a realized holder.
    ///
    /// Selection goes through the selection policy: `Selected` is routed to
    /// [`Engine::request_select`], and a selected holder keeps its state until it is unselected.
    pub fn update_item_state(&mut self, id: HolderId, state: ItemState) {
        let Some(index) = self.table.get(id) else {
            return;
        };
        if state == ItemState::Selected {
            self.request_select(index);
        } else if !self.selection.contains(index) {
            self.set_holder_state(id, state);
        }
    }

    fn apply_selection_change(&mut self, change: Option<SelectionChange>) {
        let Some(change) = change else {
            return;
        };
        for index in change.deselected {
            if let Some(id) = self.table.find(index) {
                self.set_holder_state(id, ItemState::Normal);
            }
        }
        if let Some(index) = change.selected {
            if let Some(id) = self.table.find(index) {
                self.set_holder_state(id, ItemState::Selected);
            }
        }
        if let Some(adaptor) = self.adaptor.as_mut() {
            adaptor.selection_changed(self.selection.items());
        }
    }

    fn set_holder_state(&mut self, id: HolderId, state: ItemState) {
        let (Some(holder), Some(adaptor)) = (self.holders.get_mut(id), self.adaptor.as_mut()) else {
            return;
        };
        if holder.state == state {
            return;
        }
        holder.state = state;
        adaptor.update_visual_state(&mut holder.visual, state);
    }

    pub fn realized_len(&self) -> usize {
        self.table.len()
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Realized holders and their indexes, in no particular order.
    pub fn realized(&self) -> impl Iterator<Item = (HolderId, usize)> + '_ {
        self.table.iter()
    }

    pub fn index_of_holder(&self, id: HolderId) -> Option<usize> {
        self.table.get(id)
    }

    pub fn holder_at(&self, index: usize) -> Option<HolderId> {
        self.table.find(index)
    }

    pub fn visual(&self, id: HolderId) -> Option<&A::Visual> {
        self.holders.get(id).map(|holder| &holder.visual)
    }

    pub fn item_state(&self, id: HolderId) -> Option<ItemState> {
        self.holders.get(id).map(|holder| holder.state)
    }

    pub fn bounds_of(&self, index: usize) -> Option<Rect> {
        self.layout.as_ref().map(|layout| layout.bounds_of(index))
    }

    pub fn header(&self) -> Option<&A::Visual> {
        self.header.as_ref()
    }

    pub fn footer(&self) -> Option<&A::Visual> {
        self.footer.as_ref()
    }

    /// Brings a freshly wired layout or adaptor up to date with the allocation and the source.
    fn sync_layout(&mut self) {
        let allocated = self.allocated;
        self.with_layout_cx(|layout, cx| {
            if !allocated.is_empty() {
                layout.size_allocated(allocated, cx);
            }
            layout.item_source_updated(cx);
        });
    }

    fn update_content_size(&mut self) {
        let size = self.canvas_size();
        self.surface.set_content_size(size);
    }

    fn update_header_footer(&mut self) {
        let Some(layout) = self.layout.as_mut() else {
            return;
        };
        let adaptor = self.adaptor.as_ref();
        let allocated = self.allocated;
        let header = self
            .header
            .as_ref()
            .and(adaptor)
            .map(|adaptor| adaptor.measure_header(allocated));
        let footer = self
            .footer
            .as_ref()
            .and(adaptor)
            .map(|adaptor| adaptor.measure_footer(allocated));
        layout.set_header(header);
        layout.set_footer(footer);
    }

    /// Runs `f` with the layout and a context over the adaptor; skipped if either is missing.
    fn with_layout_cx(&mut self, f: impl FnOnce(&mut L, &dyn LayoutContext)) {
        let (Some(layout), Some(adaptor)) = (self.layout.as_mut(), self.adaptor.as_ref()) else {
            return;
        };
        let cx = Context {
            adaptor,
            allocated: self.allocated,
            item_size: &self.item_size,
            min_item_size: self.options.min_item_size,
        };
        f(layout, &cx);
    }
}

/// Computes the scroll offset that puts `item` at `position` inside `viewport`.
///
/// Returns `None` for [`ScrollToPosition::MakeVisible`] when the item is already fully visible.
/// Items smaller than the viewport are padded so they land centered or end-aligned; larger
/// items always align to their start.
pub fn scroll_target(
    item: Rect,
    viewport: Rect,
    position: ScrollToPosition,
    horizontal: bool,
) -> Option<f64> {
    let item_start = item.main_start(horizontal);
    let item_size = item.main_size(horizontal);
    let view_size = viewport.main_size(horizontal);

    let position = match position {
        ScrollToPosition::MakeVisible => {
            if item_start < viewport.main_start(horizontal) {
                ScrollToPosition::Start
            } else if item.main_end(horizontal) > viewport.main_end(horizontal) {
                ScrollToPosition::End
            } else {
                return None;
            }
        }
        position => position,
    };

    let padding = if item_size < view_size {
        match position {
            ScrollToPosition::Center => (view_size - item_size) / 2.0,
            ScrollToPosition::End => view_size - item_size,
            _ => 0.0,
        }
    } else {
        0.0
    };
    Some(item_start - padding)
}

impl<A: ItemAdaptor, L, S> core::fmt::Debug for Engine<A, L, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Engine")
            .field("options", &self.options)
            .field("has_adaptor", &self.adaptor.is_some())
            .field("has_layout", &self.layout.is_some())
            .field("realized", &self.table.len())
            .field("pooled", &self.pool.len())
            .field("selection", &self.selection)
            .field("allocated", &self.allocated)
            .field("layout_pending", &self.layout_pending)
            .finish_non_exhaustive()
    }
}
