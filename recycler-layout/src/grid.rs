use recycler::{IndexEmitter, LayoutContext, LayoutManager, Point, Rect, Size};

use crate::axis::{ceil_index, cross_of, floor_index, main_of};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayoutOptions {
    /// Cells per line (columns for a vertical grid, rows for a horizontal one).
    pub span: usize,
    pub horizontal: bool,
    /// Gap between cells, on both axes.
    pub item_spacing: f64,
    /// Extra lines realized on each side of the viewport.
    pub overscan_lines: usize,
}

impl Default for GridLayoutOptions {
    fn default() -> Self {
        Self::new(2)
    }
}

impl GridLayoutOptions {
    pub fn new(span: usize) -> Self {
        Self {
            span: span.max(1),
            horizontal: false,
            item_spacing: 0.0,
            overscan_lines: 1,
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

    pub fn with_overscan_lines(mut self, overscan_lines: usize) -> Self {
        self.overscan_lines = overscan_lines;
        self
    }
}

/// A grid of uniform cells, `span` per line.
///
/// The cross axis is split evenly between the cells of a line; the main extent of every cell
/// comes from the template item.
#[derive(Clone, Debug)]
pub struct GridLayout {
    options: GridLayoutOptions,
    allocated: Size,
    count: usize,
    cell_main: f64,
    cell_cross: f64,
    header: Option<Size>,
    footer: Option<Size>,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(GridLayoutOptions::default())
    }
}

impl GridLayout {
    pub fn new(mut options: GridLayoutOptions) -> Self {
        options.span = options.span.max(1);
        Self {
            options,
            allocated: Size::ZERO,
            count: 0,
            cell_main: 0.0,
            cell_cross: 0.0,
            header: None,
            footer: None,
        }
    }

    pub fn options(&self) -> &GridLayoutOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Size of one cell.
    pub fn cell_size(&self) -> Size {
        Size::from_axes(self.cell_main, self.cell_cross, self.horizontal())
    }

    fn horizontal(&self) -> bool {
        self.options.horizontal
    }

    fn span(&self) -> usize {
        self.options.span
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

    fn line_step(&self) -> f64 {
        self.cell_main + self.options.item_spacing
    }

    fn column_step(&self) -> f64 {
        self.cell_cross + self.options.item_spacing
    }

    fn lines(&self) -> usize {
        self.count.div_ceil(self.span())
    }

    fn items_extent(&self) -> f64 {
        let lines = self.lines();
        if lines == 0 {
            return 0.0;
        }
        (lines as f64 * self.line_step() - self.options.item_spacing).max(0.0)
    }

    fn refresh(&mut self, cx: &dyn LayoutContext) {
        let span = self.span() as f64;
        let gaps = self.options.item_spacing * (span - 1.0);
        self.cell_cross = ((self.cross() - gaps) / span).max(0.0);
        self.cell_main = if self.count == 0 {
            0.0
        } else {
            let constraint = Size::from_axes(f64::INFINITY, self.cell_cross, self.horizontal());
            cx.item_size(constraint).main(self.horizontal())
        };
        ltrace!(
            count = self.count,
            cell_main = self.cell_main,
            cell_cross = self.cell_cross,
            "GridLayout: refreshed"
        );
    }
}

impl LayoutManager for GridLayout {
    fn is_horizontal(&self) -> bool {
        self.horizontal()
    }

    fn bounds_of(&self, index: usize) -> Rect {
        let line = index / self.span();
        let column = index % self.span();
        Rect::from_axes(
            self.header_main() + line as f64 * self.line_step(),
            column as f64 * self.column_step(),
            self.cell_main,
            self.cell_cross,
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

        let lines = self.lines();
        let last = ceil_index(end, self.line_step()).min(lines);
        let first = floor_index(start, self.line_step()).min(last);
        let overscan = self.options.overscan_lines;
        let first = first.saturating_sub(overscan);
        let last = last.saturating_add(overscan).min(lines);
        out.emit_range(first * self.span(), last * self.span());
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
        let cross = cross_of(point, self.horizontal());
        if pos < 0.0 || pos >= self.items_extent() || cross < 0.0 || cross >= self.cross() {
            return None;
        }
        let line = floor_index(pos, self.line_step());
        let column = floor_index(cross, self.column_step()).min(self.span() - 1);
        let index = line * self.span() + column;
        (index < self.count).then_some(index)
    }

    fn size_allocated(&mut self, size: Size, cx: &dyn LayoutContext) {
        self.allocated = size;
        self.count = cx.count();
        self.refresh(cx);
    }

    fn item_inserted(&mut self, _index: usize, cx: &dyn LayoutContext) {
        self.count += 1;
        if self.count == 1 {
            self.refresh(cx);
        }
    }

    fn item_removed(&mut self, _index: usize, _cx: &dyn LayoutContext) {
        self.count = self.count.saturating_sub(1);
    }

    fn item_updated(&mut self, index: usize, cx: &dyn LayoutContext) {
        if index == 0 {
            self.refresh(cx);
        }
    }

    fn item_source_updated(&mut self, cx: &dyn LayoutContext) {
        self.count = cx.count();
        self.refresh(cx);
    }

    fn reset(&mut self) {
        self.count = 0;
        self.cell_main = 0.0;
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
