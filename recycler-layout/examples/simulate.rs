// Example: drive an engine with a list layout and a headless surface.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use recycler::{
    CollectionChange, Engine, EngineOptions, ItemAdaptor, ItemState, ScrollToPosition,
    SelectionMode, Size,
};
use recycler_layout::{Easing, HeadlessSurface, LinearLayout, LinearLayoutOptions, SurfaceEvent};

#[derive(Debug)]
struct Label {
    text: String,
    state: ItemState,
}

struct Messages {
    items: Vec<String>,
    created: usize,
}

impl ItemAdaptor for Messages {
    type Visual = Label;
    type Category = bool;
    type Item = str;

    fn count(&self) -> usize {
        self.items.len()
    }

    // Long messages get their own visuals.
    fn category_of(&self, index: usize) -> bool {
        self.items[index].len() > 12
    }

    fn create_visual(&mut self, _index: usize) -> Label {
        self.created += 1;
        Label {
            text: String::new(),
            state: ItemState::Normal,
        }
    }

    fn bind(&mut self, visual: &mut Label, index: usize) {
        visual.text.clone_from(&self.items[index]);
    }

    fn unbind(&mut self, visual: &mut Label) {
        visual.text.clear();
    }

    fn remove_visual(&mut self, _visual: Label) {}

    fn index_of(&self, item: &str) -> Option<usize> {
        self.items.iter().position(|text| text == item)
    }

    fn measure_item(&self, index: usize, constraint: Size) -> Size {
        let lines = self.items[index].len().div_ceil(12).max(1);
        Size::new(constraint.width, 18.0 * lines as f64)
    }

    fn update_visual_state(&mut self, visual: &mut Label, state: ItemState) {
        visual.state = state;
    }
}

fn main() {
    let pending = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&pending);
    let options = EngineOptions::new()
        .with_selection_mode(SelectionMode::Single)
        .with_on_layout_requested(Some(move || flag.store(true, Ordering::SeqCst)))
        .with_on_scrolled(Some(|event: &recycler::ScrolledEvent| {
            println!("scrolled: {event:?}");
        }));

    let surface = HeadlessSurface::new(Size::new(240.0, 180.0)).with_animation(120, Easing::SmoothStep);
    let mut engine = Engine::new(surface, options);
    engine.attach_layout(LinearLayout::new(
        LinearLayoutOptions::new().with_uneven(true).with_item_spacing(4.0),
    ));
    engine.attach_adaptor(Messages {
        items: (0..500)
            .map(|i| if i % 7 == 0 { format!("message #{i} with a longer body") } else { format!("#{i}") })
            .collect(),
        created: 0,
    });
    engine.on_size_allocated(Size::new(240.0, 180.0));
    print_state("initial", &engine);

    engine.request_select(3);
    if let Some(adaptor) = engine.adaptor_mut() {
        adaptor.items.insert(0, "pinned".to_owned());
    }
    engine.on_collection_changed(CollectionChange::Insert {
        position: Some(0),
        count: 1,
    });
    // The host's UI queue would run this from the posted task.
    if pending.swap(false, Ordering::SeqCst) {
        engine.run_pending_layout();
    }
    println!("selected after insert: {:?}", engine.selected_items());

    engine.scroll_to_item("#250", ScrollToPosition::Center, true);
    let mut now_ms = 0;
    while engine.surface().is_animating() {
        now_ms += 16;
        match engine.surface_mut().tick(now_ms) {
            Some(SurfaceEvent::Scrolled) => engine.on_scrolled(),
            Some(SurfaceEvent::AnimationEnded) => {
                engine.on_scrolled();
                engine.on_scroll_animation_ended();
            }
            None => {}
        }
    }
    if pending.swap(false, Ordering::SeqCst) {
        engine.run_pending_layout();
    }
    print_state("after scroll_to_item", &engine);
}

fn print_state(label: &str, engine: &Engine<Messages, LinearLayout, HeadlessSurface>) {
    let mut rows: Vec<(usize, &Label)> = engine
        .realized()
        .filter_map(|(id, index)| Some((index, engine.visual(id)?)))
        .collect();
    rows.sort_by_key(|&(index, _)| index);
    println!(
        "{label}: realized={} pooled={} created={}",
        engine.realized_len(),
        engine.pool_len(),
        engine.adaptor().map_or(0, |a| a.created)
    );
    for (index, row) in rows {
        println!("  [{index}] {:?} {}", row.state, row.text);
    }
}
