use recycler::{Rect, ScrollSurface, Size};

use crate::{Easing, Tween};

/// What the host should forward to the engine after driving a [`HeadlessSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceEvent {
    /// The offset changed: call `Engine::on_scrolled`.
    Scrolled,
    /// An animated scroll settled: call `Engine::on_scrolled`, then
    /// `Engine::on_scroll_animation_ended`.
    AnimationEnded,
}

/// A framework-neutral scrollable viewport.
///
/// It holds no UI objects. Hosts drive it by calling:
/// - `resize` when the widget is resized
/// - `scroll_by` for user drags and wheel input
/// - `tick(now_ms)` each frame while an animated `scroll_to` is running
///
/// Offsets are always clamped to `[0, content - viewport]` along the scrolling axis.
#[derive(Clone, Debug)]
pub struct HeadlessSurface {
    size: Size,
    content: Size,
    offset: f64,
    horizontal: bool,
    now_ms: u64,
    duration_ms: u64,
    easing: Easing,
    tween: Option<Tween>,
}

impl HeadlessSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            content: Size::ZERO,
            offset: 0.0,
            horizontal: false,
            now_ms: 0,
            duration_ms: 250,
            easing: Easing::SmoothStep,
            tween: None,
        }
    }

    /// Sets how animated scrolls run; a zero duration makes every scroll immediate.
    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn content_size(&self) -> Size {
        self.content
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn max_offset(&self) -> f64 {
        (self.content.main(self.horizontal) - self.size.main(self.horizontal)).max(0.0)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Resizes the viewport; forward the new size to `Engine::on_size_allocated`.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.offset = self.clamp(self.offset);
    }

    /// Applies a user scroll. This cancels any running animation.
    pub fn scroll_by(&mut self, delta: f64) -> Option<SurfaceEvent> {
        self.cancel_animation();
        let next = self.clamp(self.offset + delta);
        if next == self.offset {
            return None;
        }
        self.offset = next;
        Some(SurfaceEvent::Scrolled)
    }

    /// Advances a running animation to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Option<SurfaceEvent> {
        self.now_ms = now_ms;
        let tween = self.tween?;

        self.offset = self.clamp(tween.sample(now_ms));
        if tween.is_done(now_ms) {
            self.tween = None;
            ltrace!(offset = self.offset, "HeadlessSurface: animation ended");
            return Some(SurfaceEvent::AnimationEnded);
        }
        Some(SurfaceEvent::Scrolled)
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_offset())
    }
}

impl ScrollSurface for HeadlessSurface {
    fn viewport(&self) -> Rect {
        Rect::from_axes(
            self.offset,
            0.0,
            self.size.main(self.horizontal),
            self.size.cross(self.horizontal),
            self.horizontal,
        )
    }

    fn set_content_size(&mut self, size: Size) {
        self.content = size;
        self.offset = self.clamp(self.offset);
    }

    fn scroll_to(&mut self, offset: f64, animate: bool) {
        let target = self.clamp(offset);
        if animate && self.duration_ms > 0 {
            match &mut self.tween {
                Some(tween) => tween.retarget(self.now_ms, target, self.duration_ms),
                None => {
                    self.tween = Some(Tween::new(
                        self.offset,
                        target,
                        self.now_ms,
                        self.duration_ms,
                        self.easing,
                    ));
                }
            }
        } else {
            self.tween = None;
            self.offset = target;
        }
    }

    fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    fn set_horizontal(&mut self, horizontal: bool) {
        self.horizontal = horizontal;
        self.tween = None;
        self.offset = self.clamp(self.offset);
    }
}
