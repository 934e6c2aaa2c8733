//! Adapter utilities for the `visibility-tracker` crate.
//!
//! The `visibility-tracker` crate only knows about a [`visibility_tracker::ScrollHost`]. This
//! crate provides a framework-neutral host and the lifecycle around it:
//!
//! - [`ScrollView`]: an in-memory scroll container that owns child nodes and places them in
//!   content space
//! - [`GridLayout`]: list and grid placement, plus the scroll axis and view width that keep the
//!   visible children a contiguous run
//! - [`Tween`]: adapter-driven animated scrolling
//! - [`Controller`]: enable/disable of the scrolling hook, data initialization and per-frame ticks
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod layout;
mod scroll_view;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use layout::{Flow, GridLayout, LayoutBox};
pub use scroll_view::{Node, ScrollView};
pub use tween::{Easing, Tween};
