use crate::{
    Aabb, ScanContext, ScanDirection, ScanReport, ScrollHost, StateError, TrackedItem,
    TrackerOptions, TrackerState, Visibility, VisibilityEvent, VisibilityListener, VisibleWindow,
};

/// Tracks which children of a scroll container intersect its viewport.
///
/// The tracker does not own the children or the container. Callers pass the [`ScrollHost`] in on
/// every call, typically from the container's "is scrolling" hook:
///
/// - [`VisibilityTracker::initialize`] installs a fresh dataset and runs the first scan.
/// - [`VisibilityTracker::scan`] is called on every scroll tick (or manually).
///
/// Visible children in a linear layout form one contiguous index run, so a scan only walks from
/// the edge of the previously visible run in the direction of travel and stops as soon as the run
/// ends. The cost is proportional to the visible run plus how far its edge drifted, not to the
/// number of children.
#[derive(Clone, Debug)]
pub struct VisibilityTracker<L> {
    options: TrackerOptions,
    state: TrackerState,
    listener: L,
}

impl<L> VisibilityTracker<L> {
    pub fn new(options: TrackerOptions, listener: L) -> Self {
        Self {
            options,
            state: TrackerState::default(),
            listener,
        }
    }

    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: TrackerOptions) {
        self.options = options;
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn window(&self) -> VisibleWindow {
        self.state.window
    }

    /// Installs a previously captured state for a container holding `len` children.
    pub fn restore_state(&mut self, state: TrackerState, len: usize) -> Result<(), StateError> {
        state.validate(len)?;
        vdebug!(
            min = state.window.min_index,
            max = state.window.max_index,
            len,
            "restore_state"
        );
        self.state = state;
        Ok(())
    }

    /// Replaces the container's children with `items`, resets the bookkeeping, scrolls to the
    /// origin and runs one scan.
    ///
    /// `listener` replaces the current listener before anything is scanned. `None` entries become
    /// unbound slots. After this returns, every tracked child has been reported against the
    /// viewport at the origin offset (up to the end of the first visible run).
    pub fn initialize<H>(
        &mut self,
        host: &mut H,
        items: impl IntoIterator<Item = Option<H::Item>>,
        listener: L,
    ) -> ScanReport
    where
        H: ScrollHost,
        L: VisibilityListener<H::Item>,
    {
        self.listener = listener;
        self.reload(host, items)
    }

    /// Same as [`VisibilityTracker::initialize`], keeping the current listener.
    pub fn reload<H>(
        &mut self,
        host: &mut H,
        items: impl IntoIterator<Item = Option<H::Item>>,
    ) -> ScanReport
    where
        H: ScrollHost,
        L: VisibilityListener<H::Item>,
    {
        host.clear_children();
        for item in items {
            host.push_child(item);
        }
        let len = host.child_count();
        self.state = TrackerState::reset(len);
        host.scroll_to_origin();
        vdebug!(len, "initialize");
        self.scan(host)
    }

    /// Updates the visible window for the host's current scroll offset, firing `on_enter` and
    /// `on_exit` for every tracked child it tests.
    ///
    /// A no-op when the host holds no children. Calling it again without moving the content
    /// yields the same window.
    pub fn scan<H>(&mut self, host: &H) -> ScanReport
    where
        H: ScrollHost,
        L: VisibilityListener<H::Item>,
    {
        let mut report = ScanReport {
            window: self.state.window,
            ..ScanReport::default()
        };
        let mut rescan = self.scan_pass(host, &mut report);
        let mut deferred = 0usize;
        while rescan {
            if deferred >= self.options.max_rescans {
                vwarn!(
                    max_rescans = self.options.max_rescans,
                    "rescan requested past the limit, dropping it"
                );
                break;
            }
            deferred += 1;
            rescan = self.scan_pass(host, &mut report);
        }
        report
    }

    /// Probes a single child against `viewport` and fires the matching callback.
    ///
    /// Does not touch the visible window. Rescan requests made by the listener are ignored here;
    /// only [`VisibilityTracker::scan`] honors them.
    pub fn check_visible<H>(&mut self, host: &H, viewport: Aabb, index: usize) -> Visibility
    where
        H: ScrollHost,
        L: VisibilityListener<H::Item>,
    {
        let mut cx = ScanContext::default();
        let visibility = self.probe(host, viewport, index, &mut cx);
        if cx.rescan_requested() {
            vtrace!(index, "rescan request ignored outside scan");
        }
        visibility
    }

    fn scan_pass<H>(&mut self, host: &H, report: &mut ScanReport) -> bool
    where
        H: ScrollHost,
        L: VisibilityListener<H::Item>,
    {
        let len = host.child_count();
        if len == 0 {
            vtrace!("scan skipped: container has no children");
            return false;
        }

        let current = host.scroll_offset();
        let direction = ScanDirection::classify(self.state.last_offset, current);
        let viewport = host.viewport_frame().world_box();
        let last = len - 1;
        let mut cx = ScanContext::default();
        let mut first_visible: Option<usize> = None;

        match direction {
            ScanDirection::Forward => {
                let start = self.state.window.min_index.min(last);
                for index in start..len {
                    let visibility = self.probe(host, viewport, index, &mut cx);
                    report.record(visibility);
                    if visibility.is_visible() {
                        if first_visible.is_none() {
                            first_visible = Some(index);
                            self.state.window.min_index = index;
                        }
                        self.state.window.max_index = index;
                    } else if first_visible.is_some() {
                        break;
                    }
                }
            }
            ScanDirection::Backward => {
                let start = self.state.window.max_index.min(last);
                for index in (0..=start).rev() {
                    let visibility = self.probe(host, viewport, index, &mut cx);
                    report.record(visibility);
                    if visibility.is_visible() {
                        if first_visible.is_none() {
                            first_visible = Some(index);
                            self.state.window.max_index = index;
                        }
                        self.state.window.min_index = index;
                    } else if first_visible.is_some() {
                        break;
                    }
                }
            }
        }

        self.state.last_offset = current;
        report.direction = Some(direction);
        report.window = self.state.window;
        report.passes += 1;
        vtrace!(
            ?direction,
            min = self.state.window.min_index,
            max = self.state.window.max_index,
            tested = report.tested,
            "scan pass"
        );
        cx.rescan_requested()
    }

    fn probe<H>(
        &mut self,
        host: &H,
        viewport: Aabb,
        index: usize,
        cx: &mut ScanContext,
    ) -> Visibility
    where
        H: ScrollHost,
        L: VisibilityListener<H::Item>,
    {
        let Some(item) = host.child(index) else {
            vwarn!(index, "unbound child slot, treating as not visible");
            return Visibility::Unbound;
        };
        let Some(marker) = item.marker() else {
            return Visibility::Untracked;
        };

        let bounds = host.world_bounds(index, item);
        let relative_position = self
            .options
            .compute_relative_position
            .then(|| bounds.origin() - viewport.origin());
        let event = VisibilityEvent {
            index,
            item,
            marker,
            bounds,
            relative_position,
        };

        if bounds.intersects(&viewport, self.options.edge_policy) {
            self.listener.on_enter(&event, cx);
            Visibility::Visible
        } else {
            self.listener.on_exit(&event, cx);
            Visibility::Hidden
        }
    }
}

impl<L: Default> Default for VisibilityTracker<L> {
    fn default() -> Self {
        Self::new(TrackerOptions::default(), L::default())
    }
}
