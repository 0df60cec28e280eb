use crate::*;

use alloc::vec::Vec;

use recycler::{
    CollectionChange, Engine, EngineOptions, ItemAdaptor, LayoutManager, Point, Rect,
    ScrollSurface, ScrollToPosition, Size,
};

use crate::fenwick::Fenwick;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }
}

#[derive(Debug)]
struct Row {
    index: Option<usize>,
}

/// Square items whose side is `sizes[index]`.
#[derive(Debug, Default)]
struct Rows {
    sizes: Vec<f64>,
    header: Option<f64>,
    footer: Option<f64>,
    created: usize,
}

impl Rows {
    fn uniform(count: usize, size: f64) -> Self {
        Self {
            sizes: alloc::vec![size; count],
            ..Default::default()
        }
    }
}

impl ItemAdaptor for Rows {
    type Visual = Row;
    type Category = ();
    type Item = usize;

    fn count(&self) -> usize {
        self.sizes.len()
    }

    fn category_of(&self, _index: usize) -> Self::Category {}

    fn create_visual(&mut self, _index: usize) -> Row {
        self.created += 1;
        Row { index: None }
    }

    fn bind(&mut self, visual: &mut Row, index: usize) {
        visual.index = Some(index);
    }

    fn unbind(&mut self, visual: &mut Row) {
        visual.index = None;
    }

    fn remove_visual(&mut self, _visual: Row) {}

    fn index_of(&self, item: &usize) -> Option<usize> {
        (*item < self.sizes.len()).then_some(*item)
    }

    fn measure_item(&self, index: usize, _constraint: Size) -> Size {
        Size::new(self.sizes[index], self.sizes[index])
    }

    fn create_header(&mut self) -> Option<Row> {
        self.header.map(|_| Row { index: None })
    }

    fn create_footer(&mut self) -> Option<Row> {
        self.footer.map(|_| Row { index: None })
    }

    fn measure_header(&self, _constraint: Size) -> Size {
        let side = self.header.unwrap_or(0.0);
        Size::new(side, side)
    }

    fn measure_footer(&self, _constraint: Size) -> Size {
        let side = self.footer.unwrap_or(0.0);
        Size::new(side, side)
    }
}

fn engine<L: LayoutManager>(
    rows: Rows,
    layout: L,
    surface: HeadlessSurface,
) -> Engine<Rows, L, HeadlessSurface> {
    let size = surface.size();
    let mut engine = Engine::new(surface, EngineOptions::new());
    engine.attach_layout(layout);
    engine.attach_adaptor(rows);
    engine.on_size_allocated(size);
    engine
}

fn list(rows: Rows, options: LinearLayoutOptions) -> Engine<Rows, LinearLayout, HeadlessSurface> {
    engine(
        rows,
        LinearLayout::new(options),
        HeadlessSurface::new(Size::new(100.0, 100.0)),
    )
}

fn realized<L: LayoutManager>(engine: &Engine<Rows, L, HeadlessSurface>) -> Vec<usize> {
    for (id, index) in engine.realized() {
        assert_eq!(engine.visual(id).and_then(|row| row.index), Some(index));
    }
    let mut indexes: Vec<usize> = engine.realized().map(|(_, index)| index).collect();
    indexes.sort_unstable();
    indexes
}

fn assert_offsets(layout: &LinearLayout, sizes: &[f64], spacing: f64) {
    let mut start = 0.0;
    for (index, &size) in sizes.iter().enumerate() {
        let bounds = layout.bounds_of(index);
        assert_eq!(bounds.y, start, "start of {index}");
        assert_eq!(bounds.height, size, "extent of {index}");
        assert_eq!(layout.index_at(Point::new(1.0, start + size / 2.0)), Some(index));
        start += size + spacing;
    }
    let total = if sizes.is_empty() { 0.0 } else { start - spacing };
    assert_eq!(layout.canvas_size().height, total);
}

#[test]
fn fenwick_matches_naive_prefix_sums() {
    let mut rng = Lcg::new(7);
    let mut values: Vec<f64> = (0..37).map(|_| rng.gen_range_usize(0, 20) as f64).collect();
    let mut sums = Fenwick::from_values(values.iter().copied());

    for _ in 0..20 {
        let value = rng.gen_range_usize(1, 20) as f64;
        values.push(value);
        sums.push(value);
        let index = rng.gen_range_usize(0, values.len());
        let next = rng.gen_range_usize(0, 20) as f64;
        sums.add(index, next - values[index]);
        values[index] = next;
    }

    assert_eq!(sums.len(), values.len());
    let mut prefix = 0.0;
    for (count, &value) in values.iter().enumerate() {
        assert_eq!(sums.prefix_sum(count), prefix);
        if value > 0.0 {
            assert_eq!(sums.lower_bound(prefix), count);
            assert_eq!(sums.lower_bound(prefix + value / 2.0), count);
        }
        prefix += value;
    }
    assert_eq!(sums.total(), prefix);
    assert_eq!(sums.lower_bound(prefix + 1.0), values.len());
}

#[test]
fn uniform_list_realizes_the_viewport() {
    let mut engine = list(
        Rows::uniform(50, 20.0),
        LinearLayoutOptions::new().with_overscan(0),
    );
    assert_eq!(realized(&engine), (0..5).collect::<Vec<_>>());
    assert_eq!(engine.surface().content_size(), Size::new(100.0, 1000.0));
    assert_eq!(
        engine.bounds_of(3),
        Some(Rect::new(0.0, 60.0, 100.0, 20.0))
    );

    assert_eq!(
        engine.surface_mut().scroll_by(130.0),
        Some(SurfaceEvent::Scrolled)
    );
    engine.on_scrolled();
    assert_eq!(realized(&engine), (6..12).collect::<Vec<_>>());
    // Two of the five released rows fit in the pool; four more are created.
    assert_eq!(engine.adaptor().map(|rows| rows.created), Some(9));
}

#[test]
fn overscan_extends_both_sides() {
    let mut engine = list(
        Rows::uniform(50, 20.0),
        LinearLayoutOptions::new().with_overscan(2),
    );
    assert_eq!(realized(&engine), (0..7).collect::<Vec<_>>());
    engine.surface_mut().scroll_by(200.0);
    engine.on_scrolled();
    assert_eq!(realized(&engine), (8..17).collect::<Vec<_>>());
}

#[test]
fn spacing_adds_gaps_between_items() {
    let engine = list(
        Rows::uniform(50, 20.0),
        LinearLayoutOptions::new()
            .with_item_spacing(5.0)
            .with_overscan(0),
    );
    let layout = engine.layout().expect("layout");
    assert_eq!(layout.bounds_of(2).y, 50.0);
    assert_eq!(layout.canvas_size().height, 50.0 * 25.0 - 5.0);
    assert_eq!(layout.index_at(Point::new(0.0, 47.0)), Some(1));
    assert_eq!(realized(&engine), (0..4).collect::<Vec<_>>());
}

#[test]
fn uneven_list_tracks_edits() {
    let sizes: Vec<f64> = (0..30).map(|i| 10.0 + (i % 4) as f64 * 10.0).collect();
    let rows = Rows {
        sizes: sizes.clone(),
        ..Default::default()
    };
    let options = LinearLayoutOptions::new()
        .with_uneven(true)
        .with_item_spacing(2.0)
        .with_overscan(0);
    let mut engine = list(rows, options);
    let mut sizes = sizes;
    assert_offsets(engine.layout().expect("layout"), &sizes, 2.0);
    assert_eq!(realized(&engine), (0..4).collect::<Vec<_>>());

    sizes.insert(5, 50.0);
    engine.adaptor_mut().expect("adaptor").sizes.insert(5, 50.0);
    engine.on_collection_changed(CollectionChange::Insert {
        position: Some(5),
        count: 1,
    });
    assert_offsets(engine.layout().expect("layout"), &sizes, 2.0);

    sizes.remove(0);
    engine.adaptor_mut().expect("adaptor").sizes.remove(0);
    engine.on_collection_changed(CollectionChange::Remove {
        position: Some(0),
        count: 1,
    });
    assert_offsets(engine.layout().expect("layout"), &sizes, 2.0);

    sizes[3] = 35.0;
    engine.adaptor_mut().expect("adaptor").sizes[3] = 35.0;
    engine.on_collection_changed(CollectionChange::Replace {
        position: Some(3),
        count: 1,
    });
    assert_offsets(engine.layout().expect("layout"), &sizes, 2.0);

    sizes.push(15.0);
    engine.adaptor_mut().expect("adaptor").sizes.push(15.0);
    engine.on_collection_changed(CollectionChange::Insert {
        position: Some(sizes.len() - 1),
        count: 1,
    });
    assert_offsets(engine.layout().expect("layout"), &sizes, 2.0);

    assert!(engine.run_pending_layout());
    assert_eq!(realized(&engine).first(), Some(&0));
    assert_eq!(
        engine.surface().content_size().height,
        engine.layout().expect("layout").canvas_size().height
    );
}

#[test]
fn header_and_footer_frame_the_items() {
    let rows = Rows {
        header: Some(20.0),
        footer: Some(30.0),
        ..Rows::uniform(10, 10.0)
    };
    let engine = list(rows, LinearLayoutOptions::new().with_overscan(0));
    let layout = engine.layout().expect("layout");

    assert_eq!(layout.canvas_size().height, 150.0);
    assert_eq!(layout.bounds_of(0).y, 20.0);
    assert_eq!(
        layout.header_bounds(),
        Some(Rect::new(0.0, 0.0, 100.0, 20.0))
    );
    assert_eq!(
        layout.footer_bounds(),
        Some(Rect::new(0.0, 120.0, 100.0, 30.0))
    );
    assert_eq!(layout.index_at(Point::new(5.0, 10.0)), None);
    assert_eq!(layout.index_at(Point::new(5.0, 25.0)), Some(0));
    assert_eq!(realized(&engine), (0..8).collect::<Vec<_>>());
    assert!(engine.header().is_some());
    assert!(engine.footer().is_some());
}

#[test]
fn horizontal_list_switches_the_surface() {
    let engine = list(
        Rows::uniform(50, 20.0),
        LinearLayoutOptions::new()
            .with_horizontal(true)
            .with_overscan(0),
    );
    assert!(engine.surface().is_horizontal());
    assert_eq!(
        engine.bounds_of(2),
        Some(Rect::new(40.0, 0.0, 20.0, 100.0))
    );
    assert_eq!(engine.canvas_size(), Size::new(1000.0, 100.0));
    assert_eq!(realized(&engine), (0..5).collect::<Vec<_>>());
}

#[test]
fn grid_splits_the_cross_axis() {
    let engine = engine(
        Rows::uniform(20, 40.0),
        GridLayout::new(GridLayoutOptions::new(3).with_overscan_lines(0)),
        HeadlessSurface::new(Size::new(90.0, 100.0)),
    );
    let layout = engine.layout().expect("layout");

    assert_eq!(layout.cell_size(), Size::new(30.0, 40.0));
    assert_eq!(layout.bounds_of(5), Rect::new(60.0, 40.0, 30.0, 40.0));
    assert_eq!(layout.canvas_size(), Size::new(90.0, 280.0));
    assert_eq!(layout.index_at(Point::new(65.0, 45.0)), Some(5));
    assert_eq!(layout.index_at(Point::new(65.0, 270.0)), None);
    assert_eq!(realized(&engine), (0..9).collect::<Vec<_>>());
}

#[test]
fn grid_spacing_and_overscan() {
    let mut engine = engine(
        Rows::uniform(40, 40.0),
        GridLayout::new(
            GridLayoutOptions::new(2)
                .with_item_spacing(10.0)
                .with_overscan_lines(1),
        ),
        HeadlessSurface::new(Size::new(100.0, 100.0)),
    );
    let layout = engine.layout().expect("layout");
    assert_eq!(layout.bounds_of(1), Rect::new(55.0, 0.0, 45.0, 40.0));
    assert_eq!(layout.bounds_of(2).y, 50.0);
    // Lines 0 and 1 are visible, plus one overscanned line.
    assert_eq!(realized(&engine), (0..6).collect::<Vec<_>>());

    engine.surface_mut().scroll_by(200.0);
    engine.on_scrolled();
    // Lines 4 and 5 are visible, plus lines 3 and 6.
    assert_eq!(realized(&engine), (6..14).collect::<Vec<_>>());
}

#[test]
fn surface_clamps_user_scrolls() {
    let mut surface = HeadlessSurface::new(Size::new(100.0, 100.0));
    surface.set_content_size(Size::new(100.0, 1000.0));
    assert_eq!(surface.scroll_by(-5.0), None);
    assert_eq!(surface.scroll_by(950.0), Some(SurfaceEvent::Scrolled));
    assert_eq!(surface.offset(), 900.0);
    surface.set_content_size(Size::new(100.0, 500.0));
    assert_eq!(surface.offset(), 400.0);
    assert_eq!(surface.viewport(), Rect::new(0.0, 400.0, 100.0, 100.0));
}

#[test]
fn tween_samples_and_retargets() {
    let mut tween = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    assert_eq!(tween.sample(50), 50.0);
    assert!(!tween.is_done(99));
    assert!(tween.is_done(100));
    tween.retarget(50, 0.0, 50);
    assert_eq!(tween.from, 50.0);
    assert_eq!(tween.sample(100), 0.0);

    assert_eq!(Easing::SmoothStep.sample(0.5), 0.5);
    assert_eq!(Easing::EaseInOutCubic.sample(1.0), 1.0);
}

#[test]
fn animated_scroll_to_reports_the_landing() {
    let surface = HeadlessSurface::new(Size::new(100.0, 100.0)).with_animation(100, Easing::Linear);
    let mut engine = engine(
        Rows::uniform(50, 20.0),
        LinearLayout::new(LinearLayoutOptions::new().with_overscan(0)),
        surface,
    );

    engine.scroll_to(30, ScrollToPosition::Start, true);
    assert!(engine.surface().is_animating());
    assert_eq!(engine.surface().offset(), 0.0);

    let mut ended = None;
    for now_ms in [25u64, 50, 75, 100, 125] {
        match engine.surface_mut().tick(now_ms) {
            Some(SurfaceEvent::Scrolled) => engine.on_scrolled(),
            Some(SurfaceEvent::AnimationEnded) => {
                engine.on_scrolled();
                ended = Some(engine.on_scroll_animation_ended());
            }
            None => {}
        }
        if now_ms == 50 {
            assert_eq!(engine.surface().offset(), 300.0);
            assert_eq!(realized(&engine), (15..20).collect::<Vec<_>>());
        }
    }

    let event = ended.expect("animation ended");
    assert_eq!(event.first_visible_index, Some(30));
    assert_eq!(event.center_index, Some(32));
    assert_eq!(event.last_visible_index, Some(34));
    assert_eq!(event.vertical_offset, 600.0);
    assert_eq!(realized(&engine), (30..35).collect::<Vec<_>>());
    assert!(!engine.surface().is_animating());
}
