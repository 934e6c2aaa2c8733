//! Incremental viewport culling for scrollable lists.
//!
//! A [`VisibilityTracker`] remembers which contiguous run of children last intersected the
//! viewport and, on every scroll tick, walks outward from the edge of that run in the direction
//! of travel. Children that intersect the viewport get `on_enter`, children that were tested
//! and do not get `on_exit`, so callers can cheaply toggle expensive rendering for off-screen
//! items.
//!
//! It is UI-agnostic. The host scroll container is expected to provide (via [`ScrollHost`]):
//! - the current scroll offset
//! - the viewport frame (position, anchor, size) in world space
//! - the child slots and their world-space bounding boxes
//!
//! For a ready-made in-memory host with grid layout and animated scrolling, see the
//! `visibility-tracker-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod geometry;
mod host;
mod listener;
mod options;
mod state;
mod tracker;
mod types;


pub use geometry::{Aabb, EdgePolicy, Size, Vec2, ViewportFrame};
pub use host::{ScrollHost, TrackedItem};
pub use listener::{
    Callbacks, EventQueue, ScanContext, VisibilityCallback, VisibilityChange, VisibilityChangeKind,
    VisibilityEvent, VisibilityListener,
};
pub use options::TrackerOptions;
pub use state::{StateError, TrackerState};
pub use tracker::VisibilityTracker;
pub use types::{ScanDirection, ScanReport, Visibility, VisibleWindow};
