use alloc::collections::BTreeSet;

use crate::{CategoryKey, ItemState, Size};

/// The data-source side of the engine: item count, visual factory and binding.
///
/// Visuals are opaque to the engine. It asks for a new one only when no pooled visual of the
/// same category exists, and hands each visual back through [`ItemAdaptor::remove_visual`]
/// when it is destroyed.
pub trait ItemAdaptor {
    type Visual;
    /// Visuals of equal categories are interchangeable for recycling.
    type Category: CategoryKey;
    type Item: ?Sized;

    fn count(&self) -> usize;

    fn category_of(&self, index: usize) -> Self::Category;

    fn create_visual(&mut self, index: usize) -> Self::Visual;

    /// Fills `visual` with the content of item `index`.
    fn bind(&mut self, visual: &mut Self::Visual, index: usize);

    fn unbind(&mut self, visual: &mut Self::Visual);

    /// Releases a visual the engine will not reuse.
    fn remove_visual(&mut self, visual: Self::Visual);

    fn index_of(&self, item: &Self::Item) -> Option<usize>;

    fn measure_item(&self, index: usize, constraint: Size) -> Size;

    /// Size of a representative item; defaults to measuring item 0.
    fn measure_template(&self, constraint: Size) -> Size {
        self.measure_item(0, constraint)
    }

    /// Receives the full selection after every change.
    fn selection_changed(&mut self, _selected: &BTreeSet<usize>) {}

    fn update_visual_state(&mut self, _visual: &mut Self::Visual, _state: ItemState) {}

    fn create_header(&mut self) -> Option<Self::Visual> {
        None
    }

    fn create_footer(&mut self) -> Option<Self::Visual> {
        None
    }

    fn measure_header(&self, _constraint: Size) -> Size {
        Size::ZERO
    }

    fn measure_footer(&self, _constraint: Size) -> Size {
        Size::ZERO
    }
}
