//! The contract between the engine and a pluggable layout strategy.

use alloc::boxed::Box;

use crate::{IndexEmitter, Point, Rect, Size};

/// What a layout can ask the engine while it updates its geometry.
pub trait LayoutContext {
    /// Item count of the attached data source.
    fn count(&self) -> usize;

    /// Size the host allocated to the view (the viewport size).
    fn allocated_size(&self) -> Size;

    /// Size of a representative item, measured once and cached by the engine until the
    /// allocation, the layout or item 0 changes.
    fn item_size(&self, constraint: Size) -> Size;

    /// Measures one item (uncached).
    fn measure_item(&self, index: usize, constraint: Size) -> Size;
}

/// A geometry strategy (linear list, grid, flow...) driven by the engine.
///
/// The engine never assumes a concrete arrangement. It queries geometry through the read-only
/// methods and keeps the layout's model in sync through the notification methods, which are
/// called synchronously as mutations are translated.
pub trait LayoutManager {
    fn is_horizontal(&self) -> bool;

    /// Bounds of item `index` in content coordinates.
    fn bounds_of(&self, index: usize) -> Rect;

    /// Emits, in ascending order, every index that must be realized for `viewport`.
    fn visible_items(&self, viewport: Rect, out: &mut IndexEmitter<'_>);

    /// Total size of the scrollable content.
    fn canvas_size(&self) -> Size;

    /// Index of the item at `point`, if any.
    fn index_at(&self, point: Point) -> Option<usize>;

    fn size_allocated(&mut self, size: Size, cx: &dyn LayoutContext);

    fn item_inserted(&mut self, index: usize, cx: &dyn LayoutContext);

    fn item_removed(&mut self, index: usize, cx: &dyn LayoutContext);

    fn item_updated(&mut self, index: usize, cx: &dyn LayoutContext);

    /// The whole data source changed; rebuild from `cx.count()`.
    fn item_source_updated(&mut self, cx: &dyn LayoutContext);

    /// Drops all layout state.
    fn reset(&mut self);

    fn item_measure_invalidated(&mut self, index: usize, cx: &dyn LayoutContext) {
        self.item_updated(index, cx);
    }

    /// Reserves space for a header before the first item (`None` removes it).
    fn set_header(&mut self, _size: Option<Size>) {}

    /// Reserves space for a footer after the last item (`None` removes it).
    fn set_footer(&mut self, _size: Option<Size>) {}

    fn header_bounds(&self) -> Option<Rect> {
        None
    }

    fn footer_bounds(&self) -> Option<Rect> {
        None
    }
}

impl<L: LayoutManager + ?Sized> LayoutManager for Box<L> {
    fn is_horizontal(&self) -> bool {
        (**self).is_horizontal()
    }

    fn bounds_of(&self, index: usize) -> Rect {
        (**self).bounds_of(index)
    }

    fn visible_items(&self, viewport: Rect, out: &mut IndexEmitter<'_>) {
        (**self).visible_items(viewport, out)
    }

    fn canvas_size(&self) -> Size {
        (**self).canvas_size()
    }

    fn index_at(&self, point: Point) -> Option<usize> {
        (**self).index_at(point)
    }

    fn size_allocated(&mut self, size: Size, cx: &dyn LayoutContext) {
        (**self).size_allocated(size, cx)
    }

    fn item_inserted(&mut self, index: usize, cx: &dyn LayoutContext) {
        (**self).item_inserted(index, cx)
    }

    fn item_removed(&mut self, index: usize, cx: &dyn LayoutContext) {
        (**self).item_removed(index, cx)
    }

    fn item_updated(&mut self, index: usize, cx: &dyn LayoutContext) {
        (**self).item_updated(index, cx)
    }

    fn item_source_updated(&mut self, cx: &dyn LayoutContext) {
        (**self).item_source_updated(cx)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn item_measure_invalidated(&mut self, index: usize, cx: &dyn LayoutContext) {
        (**self).item_measure_invalidated(index, cx)
    }

    fn set_header(&mut self, size: Option<Size>) {
        (**self).set_header(size)
    }

    fn set_footer(&mut self, size: Option<Size>) {
        (**self).set_footer(size)
    }

    fn header_bounds(&self) -> Option<Rect> {
        (**self).header_bounds()
    }

    fn footer_bounds(&self) -> Option<Rect> {
        (**self).footer_bounds()
    }
}
