use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanDirection {
    /// Walk upward from the last known `min_index` (later items are being revealed).
    Forward,
    /// Walk downward from the last known `max_index` (earlier items are being revealed).
    Backward,
}

impl ScanDirection {
    /// Classifies the direction of travel between two consecutive scroll offsets.
    ///
    /// Either axis moving toward earlier content forces [`ScanDirection::Backward`]:
    /// `current.x > previous.x` (content moved right) or `current.y < previous.y` (content moved
    /// down). Everything else, including an unchanged offset, is [`ScanDirection::Forward`].
    ///
    /// A single window assumes one dominant scroll axis; for content that scrolls on both axes
    /// at once the classification follows whichever axis reports backward travel.
    pub fn classify(previous: Vec2, current: Vec2) -> Self {
        if current.x > previous.x || current.y < previous.y {
            Self::Backward
        } else {
            Self::Forward
        }
    }
}

/// The contiguous index range last known to intersect the viewport (both ends inclusive).
///
/// Right after initialization the window is the sentinel `[0, len]`, which covers every slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow {
    pub min_index: usize,
    pub max_index: usize,
}

impl VisibleWindow {
    pub fn new(min_index: usize, max_index: usize) -> Self {
        Self {
            min_index,
            max_index,
        }
    }

    pub fn full(len: usize) -> Self {
        Self::new(0, len)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.min_index <= index && index <= self.max_index
    }
}

/// Outcome of probing a single child slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// The child intersects the viewport; `on_enter` fired.
    Visible,
    /// The child does not intersect the viewport; `on_exit` fired.
    Hidden,
    /// The child carries no marker and is never tracked. No callback fired.
    Untracked,
    /// The slot holds no child. No callback fired.
    Unbound,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Summary of one [`crate::VisibilityTracker::scan`] call.
///
/// Counters accumulate over every pass the call ran (see [`crate::ScanContext`]); `direction`
/// and `window` describe the final pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// `None` when the scan was a no-op because the container holds no children.
    pub direction: Option<ScanDirection>,
    pub window: VisibleWindow,
    pub passes: usize,
    pub tested: usize,
    pub entered: usize,
    pub exited: usize,
    pub untracked: usize,
    pub unbound: usize,
}

impl ScanReport {
    pub(crate) fn record(&mut self, visibility: Visibility) {
        self.tested += 1;
        match visibility {
            Visibility::Visible => self.entered += 1,
            Visibility::Hidden => self.exited += 1,
            Visibility::Untracked => self.untracked += 1,
            Visibility::Unbound => self.unbound += 1,
        }
    }
}
