use alloc::vec::Vec;

use recycler::{IndexEmitter, LayoutContext, LayoutManager, Point, Rect, Size};

use crate::axis::{ceil_index, floor_index, main_of};
use crate::fenwick::Fenwick;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearLayoutOptions {
    pub horizontal: bool,
    /// Gap between consecutive items along the scrolling axis.
    pub item_spacing: f64,
    /// Measure every item instead of sizing all of them like the template.
    pub uneven: bool,
    /// Extra items realized on each side of the viewport.
    pub overscan: usize,
}

impl Default for LinearLayoutOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearLayoutOptions {
    pub fn new() -> Self {
        Self {
            horizontal: false,
            item_spacing: 0.0,
            uneven: false,
            overscan: 1,
        }
    }

    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn with_item_spacing(mut self, item_spacing: f64) -> Self {
        self.item_spacing = item_spacing.max(0.0);
        self
    }

    pub fn with_uneven(mut self, uneven: bool) -> Self {
        self.uneven = uneven;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }
}

/// A single-column (or single-row) list.
///
/// Items fill the cross axis. In uniform mode every item takes the template's main extent;
/// in uneven mode each item is measured and offsets come from a prefix-sum tree, so lookups
/// stay `O(log n)`. A header is placed before the first item and a footer after the last.
#[derive(Clone, Debug)]
pub struct LinearLayout {
    options: LinearLayoutOptions,
    allocated: Size,
    count: usize,
    item_main: f64,
    extents: Vec<f64>,
    sums: Fenwick,
    header: Option<Size>,
    footer: Option<Size>,
}

impl Default for LinearLayout {
    fn default() -> Self {
        Self::new(LinearLayoutOptions::new())
    }
}

impl LinearLayout {
    pub fn new(options: LinearLayoutOptions) -> Self {
        Self {
            options,
            allocated: Size::ZERO,
            count: 0,
            item_main: 0.0,
            extents: Vec::new(),
            sums: Fenwick::default(),
            header: None,
            footer: None,
        }
    }

    pub fn options(&self) -> &LinearLayoutOptions {
        &self.options
    }

    /// Item count as last reported by the engine.
    pub fn count(&self) -> usize {
        self.count
    }

    fn horizontal(&self) -> bool {
        self.options.horizontal
    }

    fn header_main(&self) -> f64 {
        self.header.map_or(0.0, |size| size.main(self.horizontal()))
    }

    fn footer_main(&self) -> f64 {
        self.footer.map_or(0.0, |size| size.main(self.horizontal()))
    }

    fn cross(&self) -> f64 {
        self.allocated.cross(self.horizontal())
    }

    fn step(&self) -> f64 {
        self.item_main + self.options.item_spacing
    }

    fn constraint(&self) -> Size {
        Size::from_axes(f64::INFINITY, self.cross(), self.horizontal())
    }

    /// Start of item `index`, relative to the first item.
    fn item_start(&self, index: usize) -> f64 {
        if self.options.uneven {
            self.sums.prefix_sum(index)
        } else {
            index as f64 * self.step()
        }
    }

    fn item_extent(&self, index: usize) -> f64 {
        if self.options.uneven {
            self.extents.get(index).copied().unwrap_or(0.0)
        } else {
            self.item_main
        }
    }

    /// Main extent of all items, without header and footer.
    fn items_extent(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let raw = if self.options.uneven {
            self.sums.total()
        } else {
            self.count as f64 * self.step()
        };
        (raw - self.options.item_spacing).max(0.0)
    }

    /// Index of the item covering `pos` (relative to the first item), clamped to the count.
    fn index_covering(&self, pos: f64) -> usize {
        let index = if self.options.uneven {
            self.sums.lower_bound(pos.max(0.0))
        } else {
            floor_index(pos, self.step())
        };
        index.min(self.count)
    }

    /// Number of items starting strictly before `pos`.
    fn items_before(&self, pos: f64) -> usize {
        if !self.options.uneven {
            return ceil_index(pos, self.step()).min(self.count);
        }
        if pos <= 0.0 {
            return 0;
        }
        let k = self.sums.lower_bound(pos);
        let k = if k < self.count && self.sums.prefix_sum(k) < pos {
            k + 1
        } else {
            k
        };
        k.min(self.count)
    }

    fn measure(&self, index: usize, cx: &dyn LayoutContext) -> f64 {
        cx.measure_item(index, self.constraint())
            .main(self.horizontal())
            .max(0.0)
    }

    fn refresh_template(&mut self, cx: &dyn LayoutContext) {
        self.item_main = if self.count == 0 {
            0.0
        } else {
            cx.item_size(self.constraint()).main(self.horizontal())
        };
    }

    fn rebuild_sums(&mut self) {
        let spacing = self.options.item_spacing;
        self.sums = Fenwick::from_values(self.extents.iter().map(|extent| extent + spacing));
    }

    fn rebuild(&mut self, cx: &dyn LayoutContext) {
        self.count = cx.count();
        self.refresh_template(cx);
        if self.options.uneven {
            self.extents = (0..self.count).map(|i| self.measure(i, cx)).collect();
            self.rebuild_sums();
        }
        ltrace!(count = self.count, item_main = self.item_main, "LinearLayout: rebuilt");
    }
}

impl LayoutManager for LinearLayout {
    fn is_horizontal(&self) -> bool {
        self.horizontal()
    }

    fn bounds_of(&self, index: usize) -> Rect {
        Rect::from_axes(
            self.header_main() + self.item_start(index),
            0.0,
            self.item_extent(index),
            self.cross(),
            self.horizontal(),
        )
    }

    fn visible_items(&self, viewport: Rect, out: &mut IndexEmitter<'_>) {
        if self.count == 0 {
            return;
        }
        let origin = self.header_main();
        let start = viewport.main_start(self.horizontal()) - origin;
        let end = viewport.main_end(self.horizontal()) - origin;

        let last = self.items_before(end);
        let first = self.index_covering(start).min(last);
        let overscan = self.options.overscan;
        out.emit_range(
            first.saturating_sub(overscan),
            last.saturating_add(overscan),
        );
    }

    fn canvas_size(&self) -> Size {
        Size::from_axes(
            self.header_main() + self.items_extent() + self.footer_main(),
            self.cross(),
            self.horizontal(),
        )
    }

    fn index_at(&self, point: Point) -> Option<usize> {
        let pos = main_of(point, self.horizontal()) - self.header_main();
        if pos < 0.0 || pos >= self.items_extent() {
            return None;
        }
        let index = self.index_covering(pos);
        (index < self.count).then_some(index)
    }

    fn size_allocated(&mut self, size: Size, cx: &dyn LayoutContext) {
        self.allocated = size;
        self.rebuild(cx);
    }

    fn item_inserted(&mut self, index: usize, cx: &dyn LayoutContext) {
        self.count += 1;
        if self.count == 1 {
            self.refresh_template(cx);
        }
        if !self.options.uneven {
            return;
        }
        let index = index.min(self.extents.len());
        let extent = self.measure(index, cx);
        if index == self.extents.len() {
            self.extents.push(extent);
            self.sums.push(extent + self.options.item_spacing);
        } else {
            self.extents.insert(index, extent);
            self.rebuild_sums();
        }
    }

    fn item_removed(&mut self, index: usize, _cx: &dyn LayoutContext) {
        if index >= self.count {
            return;
        }
        self.count -= 1;
        if self.options.uneven && index < self.extents.len() {
            self.extents.remove(index);
            self.rebuild_sums();
        }
    }

    fn item_updated(&mut self, index: usize, cx: &dyn LayoutContext) {
        if index == 0 {
            self.refresh_template(cx);
        }
        if self.options.uneven && index < self.extents.len() {
            let extent = self.measure(index, cx);
            let delta = extent - self.extents[index];
            self.extents[index] = extent;
            self.sums.add(index, delta);
        }
    }

    fn item_source_updated(&mut self, cx: &dyn LayoutContext) {
        self.rebuild(cx);
    }

    fn reset(&mut self) {
        self.count = 0;
        self.item_main = 0.0;
        self.extents.clear();
        self.sums = Fenwick::default();
    }

    fn set_header(&mut self, size: Option<Size>) {
        self.header = size;
    }

    fn set_footer(&mut self, size: Option<Size>) {
        self.footer = size;
    }

    fn header_bounds(&self) -> Option<Rect> {
        let size = self.header?;
        Some(Rect::from_axes(
            0.0,
            0.0,
            size.main(self.horizontal()),
            self.cross(),
            self.horizontal(),
        ))
    }

    fn footer_bounds(&self) -> Option<Rect> {
        let size = self.footer?;
        Some(Rect::from_axes(
            self.header_main() + self.items_extent(),
            0.0,
            size.main(self.horizontal()),
            self.cross(),
            self.horizontal(),
        ))
    }
}
