// Example: a photo-grid style layout with multiple selection.
use recycler::{Engine, EngineOptions, ItemAdaptor, ScrollSurface, SelectionMode, Size};
use recycler_layout::{GridLayout, GridLayoutOptions, HeadlessSurface};

struct Tiles(usize);

impl ItemAdaptor for Tiles {
    type Visual = usize;
    type Category = ();
    type Item = usize;

    fn count(&self) -> usize {
        self.0
    }

    fn category_of(&self, _index: usize) -> Self::Category {}

    fn create_visual(&mut self, index: usize) -> usize {
        index
    }

    fn bind(&mut self, visual: &mut usize, index: usize) {
        *visual = index;
    }

    fn unbind(&mut self, _visual: &mut usize) {}

    fn remove_visual(&mut self, _visual: usize) {}

    fn index_of(&self, item: &usize) -> Option<usize> {
        (*item < self.0).then_some(*item)
    }

    fn measure_item(&self, _index: usize, constraint: Size) -> Size {
        // Square tiles.
        Size::new(constraint.width, constraint.width)
    }
}

fn main() {
    let surface = HeadlessSurface::new(Size::new(320.0, 480.0));
    let mut engine = Engine::new(
        surface,
        EngineOptions::new().with_selection_mode(SelectionMode::Multiple),
    );
    engine.attach_layout(GridLayout::new(
        GridLayoutOptions::new(4).with_item_spacing(2.0),
    ));
    engine.attach_adaptor(Tiles(10_000));
    engine.on_size_allocated(Size::new(320.0, 480.0));

    for index in [1, 5, 6] {
        engine.request_select(index);
    }
    engine.surface_mut().scroll_by(1_000.0);
    engine.on_scrolled();

    let viewport = engine.surface().viewport();
    println!("viewport={viewport:?} canvas={:?}", engine.canvas_size());
    println!(
        "realized={} pooled={} selected={:?}",
        engine.realized_len(),
        engine.pool_len(),
        engine.selected_items()
    );
}
