/// A point in scroll-content coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` when either side is zero or negative (nothing can be laid out).
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Extent along the scrolling axis.
    pub fn main(&self, horizontal: bool) -> f64 {
        if horizontal { self.width } else { self.height }
    }

    /// Extent across the scrolling axis.
    pub fn cross(&self, horizontal: bool) -> f64 {
        if horizontal { self.height } else { self.width }
    }

    /// Builds a size from main/cross extents.
    pub fn from_axes(main: f64, cross: f64, horizontal: bool) -> Self {
        if horizontal {
            Self::new(main, cross)
        } else {
            Self::new(cross, main)
        }
    }
}

/// An axis-aligned rectangle in scroll-content coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rect from main/cross axis origin and extents.
    pub fn from_axes(main: f64, cross: f64, main_size: f64, cross_size: f64, horizontal: bool) -> Self {
        if horizontal {
            Self::new(main, cross, main_size, cross_size)
        } else {
            Self::new(cross, main, cross_size, main_size)
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Start coordinate along the scrolling axis.
    pub fn main_start(&self, horizontal: bool) -> f64 {
        if horizontal { self.x } else { self.y }
    }

    /// End coordinate (exclusive) along the scrolling axis.
    pub fn main_end(&self, horizontal: bool) -> f64 {
        if horizontal { self.right() } else { self.bottom() }
    }

    pub fn main_size(&self, horizontal: bool) -> f64 {
        self.size().main(horizontal)
    }
}

/// Where a `scroll_to` target should land inside the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollToPosition {
    /// Scroll only when the item is (partly) outside the viewport, aligning the nearest edge.
    #[default]
    MakeVisible,
    Start,
    Center,
    End,
}

/// Visual interaction state of a realized holder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemState {
    #[default]
    Normal,
    Focused,
    Selected,
}

/// Emitted once a scroll animation ends.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrolledEvent {
    pub first_visible_index: Option<usize>,
    pub center_index: Option<usize>,
    pub last_visible_index: Option<usize>,
    pub horizontal_offset: f64,
    pub horizontal_delta: f64,
    pub vertical_offset: f64,
    pub vertical_delta: f64,
}
