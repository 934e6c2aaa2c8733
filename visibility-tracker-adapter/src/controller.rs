use visibility_tracker::{
    ScanReport, ScrollHost, TrackerOptions, Vec2, ViewportFrame, VisibilityListener,
    VisibilityTracker,
};

use crate::{Easing, GridLayout, Node, ScrollView, Tween};

/// Wires a [`ScrollView`] to a [`VisibilityTracker`] the way a scroll component would.
///
/// Adapters drive it by calling:
/// - `set_enabled` when the component is enabled/disabled (the scrolling hook only runs while
///   enabled)
/// - `on_scroll` when the UI reports a new offset (wheel/drag)
/// - `tick(now_ms)` each frame while an animated scroll is running
///
/// Every offset change while enabled runs one scan, just like a "scrolling" event would.
#[derive(Clone, Debug)]
pub struct Controller<T, L> {
    view: ScrollView<T>,
    tracker: VisibilityTracker<L>,
    enabled: bool,
    tween: Option<Tween>,
}

impl<T, L: VisibilityListener<Node<T>>> Controller<T, L> {
    pub fn new(frame: ViewportFrame, options: TrackerOptions, listener: L) -> Self {
        Self::from_parts(
            ScrollView::new(frame),
            VisibilityTracker::new(options, listener),
        )
    }

    pub fn from_parts(view: ScrollView<T>, tracker: VisibilityTracker<L>) -> Self {
        Self {
            view,
            tracker,
            enabled: true,
            tween: None,
        }
    }

    pub fn view(&self) -> &ScrollView<T> {
        &self.view
    }

    pub fn tracker(&self) -> &VisibilityTracker<L> {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut VisibilityTracker<L> {
        &mut self.tracker
    }

    pub fn listener(&self) -> &L {
        self.tracker.listener()
    }

    pub fn listener_mut(&mut self) -> &mut L {
        self.tracker.listener_mut()
    }

    pub fn into_parts(self) -> (ScrollView<T>, VisibilityTracker<L>) {
        (self.view, self.tracker)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Subscribes (`true`) or unsubscribes (`false`) the scrolling hook.
    ///
    /// Disabling also stops a running animation.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        vdebug!(enabled, "Controller::set_enabled");
        self.enabled = enabled;
        if !enabled {
            self.cancel_animation();
        }
    }

    /// Installs a new dataset. Runs one scan at the origin even while disabled.
    pub fn init_data(
        &mut self,
        nodes: impl IntoIterator<Item = Option<Node<T>>>,
        listener: L,
    ) -> ScanReport {
        self.cancel_animation();
        let report = self.tracker.initialize(&mut self.view, nodes, listener);
        vdebug!(
            children = self.view.child_count(),
            min = report.window.min_index,
            max = report.window.max_index,
            "Controller::init_data"
        );
        report
    }

    /// Places one node per marker with `layout`, pins the view to the layout's scroll axis and
    /// installs the nodes as the new dataset.
    pub fn init_grid(
        &mut self,
        layout: &GridLayout,
        markers: impl IntoIterator<Item = Option<T>>,
        listener: L,
    ) -> ScanReport {
        if !layout.fits_cross_axis(self.view.frame().size) {
            vwarn!(
                lines = layout.lines,
                "Controller::init_grid: lines overflow the view, visible cells may go unreported"
            );
        }
        self.view.set_scroll_axis(layout.scroll_axis());
        self.init_data(layout.nodes(markers), listener)
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// This cancels any active animation. Returns `None` while disabled.
    pub fn on_scroll(&mut self, offset: Vec2) -> Option<ScanReport> {
        self.cancel_animation();
        self.view.set_scroll_offset(offset);
        self.on_scrolling()
    }

    /// Runs a scan regardless of the enabled state.
    pub fn scan(&mut self) -> ScanReport {
        self.tracker.scan(&self.view)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Starts an animated scroll to `offset`. Returns the clamped target.
    pub fn scroll_to_offset_animated(
        &mut self,
        offset: Vec2,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Vec2 {
        let to = self.view.clamp_offset(offset);
        let from = self.view.scroll_offset();
        self.tween = Some(Tween::new(from, to, now_ms, duration_ms, easing));
        to
    }

    /// Starts an animated scroll that brings the child at `index` to the top-left corner.
    ///
    /// Returns `None` (and starts nothing) for an unbound or out-of-range slot.
    pub fn scroll_to_index_animated(
        &mut self,
        index: usize,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<Vec2> {
        let Some(offset) = self.view.offset_for_index(index) else {
            vwarn!(index, "scroll_to_index_animated: no child at index");
            return None;
        };
        let target = self.scroll_to_offset_animated(offset, now_ms, duration_ms, easing);
        Some(target)
    }

    pub fn scroll_to_top_left_animated(
        &mut self,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Vec2 {
        self.scroll_to_offset_animated(Vec2::ZERO, now_ms, duration_ms, easing)
    }

    /// Advances an active animation and fires the scrolling hook for the new offset.
    ///
    /// Returns `None` when nothing is animating or the controller is disabled.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScanReport> {
        let tween = self.tween?;
        let offset = tween.sample(now_ms);
        self.view.set_scroll_offset(offset);
        vtrace!(now_ms, x = offset.x, y = offset.y, "Controller::tick");
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        self.on_scrolling()
    }

    fn on_scrolling(&mut self) -> Option<ScanReport> {
        if !self.enabled {
            return None;
        }
        Some(self.tracker.scan(&self.view))
    }
}
