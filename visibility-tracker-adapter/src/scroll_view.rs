use alloc::vec::Vec;

use visibility_tracker::{Aabb, ScrollHost, Size, TrackedItem, Vec2, ViewportFrame};

use crate::{Flow, LayoutBox};

/// A child of a [`ScrollView`].
#[derive(Clone, Debug, PartialEq)]
pub struct Node<T> {
    pub layout: LayoutBox,
    /// Nodes without a marker are laid out and scrolled but never tracked.
    pub marker: Option<T>,
}

impl<T> Node<T> {
    pub fn new(layout: LayoutBox, marker: Option<T>) -> Self {
        Self { layout, marker }
    }

    pub fn tracked(layout: LayoutBox, marker: T) -> Self {
        Self::new(layout, Some(marker))
    }
}

impl<T> TrackedItem for Node<T> {
    type Marker = T;

    fn marker(&self) -> Option<&T> {
        self.marker.as_ref()
    }
}

/// A framework-neutral scroll container.
///
/// Owns its child slots and the scroll offset. The offset is clamped so the content never leaves
/// the view: `x` ranges over `[min(0, view_width - content_width), 0]` and `y` over
/// `[0, max(0, content_height - view_height)]`.
///
/// With a scroll axis set, the other component of the offset is pinned to zero.
#[derive(Clone, Debug)]
pub struct ScrollView<T> {
    frame: ViewportFrame,
    offset: Vec2,
    scroll_axis: Option<Flow>,
    children: Vec<Option<Node<T>>>,
    content_size: Size,
}

impl<T> ScrollView<T> {
    pub fn new(frame: ViewportFrame) -> Self {
        Self {
            frame,
            offset: Vec2::ZERO,
            scroll_axis: None,
            children: Vec::new(),
            content_size: Size::default(),
        }
    }

    pub fn frame(&self) -> ViewportFrame {
        self.frame
    }

    pub fn set_frame(&mut self, frame: ViewportFrame) {
        self.frame = frame;
        self.offset = self.clamp_offset(self.offset);
    }

    pub fn with_scroll_axis(mut self, axis: Option<Flow>) -> Self {
        self.set_scroll_axis(axis);
        self
    }

    /// `Some(Flow::Vertical)` only scrolls `y`, `Some(Flow::Horizontal)` only scrolls `x` and
    /// `None` scrolls both.
    pub fn scroll_axis(&self) -> Option<Flow> {
        self.scroll_axis
    }

    pub fn set_scroll_axis(&mut self, axis: Option<Flow>) {
        self.scroll_axis = axis;
        self.offset = self.clamp_offset(self.offset);
    }

    pub fn children(&self) -> &[Option<Node<T>>] {
        &self.children
    }

    /// Extent of the laid-out children, measured from the content origin.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn min_offset(&self) -> Vec2 {
        let x = match self.scroll_axis {
            Some(Flow::Vertical) => 0.0,
            _ => (self.frame.size.width - self.content_size.width).min(0.0),
        };
        Vec2::new(x, 0.0)
    }

    pub fn max_offset(&self) -> Vec2 {
        let y = match self.scroll_axis {
            Some(Flow::Horizontal) => 0.0,
            _ => (self.content_size.height - self.frame.size.height).max(0.0),
        };
        Vec2::new(0.0, y)
    }

    pub fn clamp_offset(&self, offset: Vec2) -> Vec2 {
        let (min, max) = (self.min_offset(), self.max_offset());
        Vec2::new(offset.x.clamp(min.x, max.x), offset.y.clamp(min.y, max.y))
    }

    /// Applies a scroll offset (clamped) and returns the applied value.
    pub fn set_scroll_offset(&mut self, offset: Vec2) -> Vec2 {
        self.offset = self.clamp_offset(offset);
        self.offset
    }

    /// The offset that brings the child at `index` to the view's top-left corner (clamped).
    pub fn offset_for_index(&self, index: usize) -> Option<Vec2> {
        let node = self.children.get(index)?.as_ref()?;
        let offset = Vec2::new(-node.layout.left, node.layout.top);
        Some(self.clamp_offset(offset))
    }

    /// World position of the content's top-left corner.
    fn content_origin(&self) -> Vec2 {
        let view = self.frame.world_box();
        Vec2::new(view.min_x() + self.offset.x, view.max_y() + self.offset.y)
    }
}

impl<T> ScrollHost for ScrollView<T> {
    type Item = Node<T>;

    fn scroll_offset(&self) -> Vec2 {
        self.offset
    }

    fn viewport_frame(&self) -> ViewportFrame {
        self.frame
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<&Node<T>> {
        self.children.get(index)?.as_ref()
    }

    fn world_bounds(&self, _index: usize, item: &Node<T>) -> Aabb {
        let origin = self.content_origin();
        let l = item.layout;
        Aabb::new(origin.x + l.left, origin.y - l.bottom(), l.width, l.height)
    }

    fn clear_children(&mut self) {
        self.children.clear();
        self.content_size = Size::default();
    }

    fn push_child(&mut self, child: Option<Node<T>>) {
        if let Some(node) = &child {
            self.content_size.width = self.content_size.width.max(node.layout.right());
            self.content_size.height = self.content_size.height.max(node.layout.bottom());
        }
        self.children.push(child);
    }

    fn scroll_to_origin(&mut self) {
        self.offset = Vec2::ZERO;
    }
}
