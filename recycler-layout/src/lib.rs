//! Layouts and scroll helpers for the `recycler` engine.
//!
//! The `recycler` crate only defines the layout contract. This crate provides framework-neutral
//! implementations commonly needed by hosts:
//!
//! - [`LinearLayout`]: a vertical or horizontal list, uniform or individually measured
//! - [`GridLayout`]: uniform cells, `span` per line
//! - [`HeadlessSurface`]: a UI-less scroll surface with tween-driven animated scrolling
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod axis;
mod fenwick;
mod grid;
mod linear;
mod surface;
mod tween;

#[cfg(test)]
mod tests;

pub use grid::{GridLayout, GridLayoutOptions};
pub use linear::{LinearLayout, LinearLayoutOptions};
pub use surface::{HeadlessSurface, SurfaceEvent};
pub use tween::{Easing, Tween};
