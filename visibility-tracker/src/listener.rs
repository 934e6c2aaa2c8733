use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::{Aabb, TrackedItem, Vec2};

/// A single visibility transition reported to a [`VisibilityListener`].
pub struct VisibilityEvent<'a, I: TrackedItem> {
    /// Position of the child in the sequence passed to `initialize`.
    pub index: usize,
    pub item: &'a I,
    pub marker: &'a I::Marker,
    /// World-space bounding box the decision was made on.
    pub bounds: Aabb,
    /// `bounds.origin - viewport.origin`, present when
    /// [`crate::TrackerOptions::compute_relative_position`] is set.
    pub relative_position: Option<Vec2>,
}

impl<I: TrackedItem> fmt::Debug for VisibilityEvent<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityEvent")
            .field("index", &self.index)
            .field("bounds", &self.bounds)
            .field("relative_position", &self.relative_position)
            .finish_non_exhaustive()
    }
}

/// Handed to listeners during a scan.
///
/// `scan` holds `&mut` on the tracker, so a listener cannot start another scan from inside a
/// callback. Call [`ScanContext::request_rescan`] instead: the tracker runs one more full pass
/// after the current one has finished and recorded its offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanContext {
    rescan_requested: bool,
}

impl ScanContext {
    pub fn request_rescan(&mut self) {
        self.rescan_requested = true;
    }

    pub fn rescan_requested(&self) -> bool {
        self.rescan_requested
    }
}

/// Receives enter/exit notifications.
///
/// For every tracked child a scan tests, exactly one of the two methods is called. Both default
/// to doing nothing, so a listener only implements the side it cares about.
pub trait VisibilityListener<I: TrackedItem> {
    fn on_enter(&mut self, event: &VisibilityEvent<'_, I>, cx: &mut ScanContext) {
        let _ = (event, cx);
    }

    fn on_exit(&mut self, event: &VisibilityEvent<'_, I>, cx: &mut ScanContext) {
        let _ = (event, cx);
    }
}

impl<I: TrackedItem> VisibilityListener<I> for () {}

impl<I: TrackedItem, L: VisibilityListener<I> + ?Sized> VisibilityListener<I> for Box<L> {
    fn on_enter(&mut self, event: &VisibilityEvent<'_, I>, cx: &mut ScanContext) {
        (**self).on_enter(event, cx);
    }

    fn on_exit(&mut self, event: &VisibilityEvent<'_, I>, cx: &mut ScanContext) {
        (**self).on_exit(event, cx);
    }
}

pub type VisibilityCallback<I> = Box<dyn FnMut(&VisibilityEvent<'_, I>)>;

/// A listener built from optional closures.
pub struct Callbacks<I: TrackedItem> {
    on_enter: Option<VisibilityCallback<I>>,
    on_exit: Option<VisibilityCallback<I>>,
}

impl<I: TrackedItem> Default for Callbacks<I> {
    fn default() -> Self {
        Self {
            on_enter: None,
            on_exit: None,
        }
    }
}

impl<I: TrackedItem> Callbacks<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_enter(mut self, f: impl FnMut(&VisibilityEvent<'_, I>) + 'static) -> Self {
        self.on_enter = Some(Box::new(f));
        self
    }

    pub fn on_exit(mut self, f: impl FnMut(&VisibilityEvent<'_, I>) + 'static) -> Self {
        self.on_exit = Some(Box::new(f));
        self
    }
}

impl<I: TrackedItem> fmt::Debug for Callbacks<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_enter", &self.on_enter.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}

impl<I: TrackedItem> VisibilityListener<I> for Callbacks<I> {
    fn on_enter(&mut self, event: &VisibilityEvent<'_, I>, _cx: &mut ScanContext) {
        if let Some(f) = self.on_enter.as_mut() {
            f(event);
        }
    }

    fn on_exit(&mut self, event: &VisibilityEvent<'_, I>, _cx: &mut ScanContext) {
        if let Some(f) = self.on_exit.as_mut() {
            f(event);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisibilityChangeKind {
    Enter,
    Exit,
}

/// An owned record of a [`VisibilityEvent`], without the borrowed item and marker.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityChange {
    pub index: usize,
    pub kind: VisibilityChangeKind,
    pub bounds: Aabb,
    pub relative_position: Option<Vec2>,
}

impl VisibilityChange {
    fn from_event<I: TrackedItem>(
        event: &VisibilityEvent<'_, I>,
        kind: VisibilityChangeKind,
    ) -> Self {
        Self {
            index: event.index,
            kind,
            bounds: event.bounds,
            relative_position: event.relative_position,
        }
    }
}

/// A listener that queues changes as messages for the items to consume later.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    changes: Vec<VisibilityChange>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> &[VisibilityChange] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn drain(&mut self) -> alloc::vec::Drain<'_, VisibilityChange> {
        self.changes.drain(..)
    }

    pub fn clear(&mut self) {
        self.changes.clear();
    }
}

impl<I: TrackedItem> VisibilityListener<I> for EventQueue {
    fn on_enter(&mut self, event: &VisibilityEvent<'_, I>, _cx: &mut ScanContext) {
        self.changes.push(VisibilityChange::from_event(
            event,
            VisibilityChangeKind::Enter,
        ));
    }

    fn on_exit(&mut self, event: &VisibilityEvent<'_, I>, _cx: &mut ScanContext) {
        self.changes.push(VisibilityChange::from_event(
            event,
            VisibilityChangeKind::Exit,
        ));
    }
}
