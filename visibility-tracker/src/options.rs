use crate::EdgePolicy;

/// Configuration for [`crate::VisibilityTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerOptions {
    /// How a child that only touches the viewport edge is classified.
    pub edge_policy: EdgePolicy,

    /// Attach each child's position relative to the viewport to every event.
    ///
    /// The scan does not use it; it is computed for listeners that lay out overlays or
    /// parallax effects against the visible area. Costs one subtraction per tested child.
    pub compute_relative_position: bool,

    /// Upper bound on deferred passes a single `scan` call runs when listeners keep calling
    /// [`crate::ScanContext::request_rescan`].
    pub max_rescans: usize,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            edge_policy: EdgePolicy::Inclusive,
            compute_relative_position: false,
            max_rescans: 4,
        }
    }
}

impl TrackerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    pub fn with_compute_relative_position(mut self, enabled: bool) -> Self {
        self.compute_relative_position = enabled;
        self
    }

    pub fn with_max_rescans(mut self, max_rescans: usize) -> Self {
        self.max_rescans = max_rescans;
        self
    }
}
