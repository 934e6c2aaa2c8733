use crate::{Aabb, Vec2, ViewportFrame};

/// A child that may opt into visibility tracking.
///
/// `Marker` is the per-item capability handed to listeners. Items whose `marker()` returns
/// `None` are never tracked: they fire no callbacks and count as not visible.
pub trait TrackedItem {
    type Marker;

    fn marker(&self) -> Option<&Self::Marker>;
}

/// The scroll container that owns the children.
///
/// The tracker never stores children itself; it reads them through this trait on every scan.
///
/// Offsets follow the container's convention: `x` is the content's left edge minus the view's
/// left edge (more negative as later columns are revealed), `y` is the content's top edge minus
/// the view's top edge (larger as later rows are revealed).
pub trait ScrollHost {
    type Item: TrackedItem;

    fn scroll_offset(&self) -> Vec2;

    fn viewport_frame(&self) -> ViewportFrame;

    fn child_count(&self) -> usize;

    /// Returns `None` for an unbound slot (including `index >= child_count()`).
    fn child(&self, index: usize) -> Option<&Self::Item>;

    /// World-space bounding box of the child at `index` for the current scroll offset.
    fn world_bounds(&self, index: usize, item: &Self::Item) -> Aabb;

    fn clear_children(&mut self);

    /// Appends a slot. `None` leaves the slot unbound.
    fn push_child(&mut self, child: Option<Self::Item>);

    /// Scrolls to the top-left origin immediately.
    fn scroll_to_origin(&mut self);
}
