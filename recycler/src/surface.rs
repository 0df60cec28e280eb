use crate::{Rect, Size};

/// The scrollable widget hosting the engine's visuals.
///
/// The engine reads the viewport once per pass and pushes content size and programmatic
/// scrolls. Scroll and resize events flow the other way, through
/// [`crate::Engine::on_scrolled`], [`crate::Engine::on_scroll_animation_ended`] and
/// [`crate::Engine::on_size_allocated`].
pub trait ScrollSurface {
    /// The visible window in content coordinates.
    fn viewport(&self) -> Rect;

    fn set_content_size(&mut self, size: Size);

    /// Scrolls along the current axis to `offset`.
    fn scroll_to(&mut self, offset: f64, animate: bool);

    fn is_horizontal(&self) -> bool;

    fn set_horizontal(&mut self, horizontal: bool);
}
