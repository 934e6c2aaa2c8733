use alloc::vec::Vec;

use visibility_tracker::Size;

use crate::Node;

/// A child's placement in content space.
///
/// The origin is the content's top-left corner; `left` grows rightward and `top` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutBox {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Flow {
    /// Fill a row of `lines` cells left to right, then move down.
    Vertical,
    /// Fill a column of `lines` cells top to bottom, then move right.
    Horizontal,
}

/// Uniform-cell placement.
///
/// Consecutive indexes fill one line before the next starts. The children intersecting a viewport
/// form one contiguous index run only while every cell of a line intersects it too:
///
/// - the container must scroll along the flow only (see [`GridLayout::scroll_axis`])
/// - the last cell of a line must start inside the view (see [`GridLayout::fits_cross_axis`])
///
/// A layout that breaks either condition leaves visible cells unreported.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub flow: Flow,
    /// Cells per line (columns for a vertical flow, rows for a horizontal one).
    pub lines: usize,
    pub cell: Size,
    pub spacing: Size,
}

impl GridLayout {
    pub fn vertical_list(cell: Size) -> Self {
        Self::grid(1, cell)
    }

    pub fn horizontal_list(cell: Size) -> Self {
        Self {
            flow: Flow::Horizontal,
            lines: 1,
            cell,
            spacing: Size::default(),
        }
    }

    pub fn grid(columns: usize, cell: Size) -> Self {
        Self {
            flow: Flow::Vertical,
            lines: columns,
            cell,
            spacing: Size::default(),
        }
    }

    pub fn with_spacing(mut self, spacing: Size) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn place(&self, index: usize) -> LayoutBox {
        debug_assert!(self.lines > 0, "GridLayout: lines must be non-zero");
        let lines = self.lines.max(1);
        let (major, minor) = ((index / lines) as f32, (index % lines) as f32);
        let step_x = self.cell.width + self.spacing.width;
        let step_y = self.cell.height + self.spacing.height;
        let (left, top) = match self.flow {
            Flow::Vertical => (minor * step_x, major * step_y),
            Flow::Horizontal => (major * step_x, minor * step_y),
        };
        LayoutBox::new(left, top, self.cell.width, self.cell.height)
    }

    /// The axis a container holding this layout may scroll along.
    ///
    /// Single-line layouts are free to scroll on both axes; their visible run stays contiguous.
    pub fn scroll_axis(&self) -> Option<Flow> {
        (self.lines > 1).then_some(self.flow)
    }

    /// Whether every cell of a line starts inside a view of size `view` with the cross axis at
    /// rest.
    pub fn fits_cross_axis(&self, view: Size) -> bool {
        let last_line = self.lines.saturating_sub(1) as f32;
        match self.flow {
            Flow::Vertical => last_line * (self.cell.width + self.spacing.width) < view.width,
            Flow::Horizontal => last_line * (self.cell.height + self.spacing.height) < view.height,
        }
    }

    /// Places one node per marker, in order. `None` markers produce untracked nodes.
    pub fn nodes<T>(&self, markers: impl IntoIterator<Item = Option<T>>) -> Vec<Option<Node<T>>> {
        markers
            .into_iter()
            .enumerate()
            .map(|(i, marker)| Some(Node::new(self.place(i), marker)))
            .collect()
    }
}
