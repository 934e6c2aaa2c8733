use core::ops::{Add, Sub};

/// A 2D vector in world units. Used for scroll offsets and positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// How boxes that only share an edge (zero-area overlap) are classified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgePolicy {
    /// Touching edges or corners count as intersecting.
    #[default]
    Inclusive,
    /// A positive-area overlap is required.
    Exclusive,
}

/// An axis-aligned box in world space.
///
/// `(x, y)` is the min corner, which is the bottom-left corner in the y-up world the host uses.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Vec2, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn translate(&self, by: Vec2) -> Self {
        Self::new(self.x + by.x, self.y + by.y, self.width, self.height)
    }

    pub fn intersects(&self, other: &Aabb, edge: EdgePolicy) -> bool {
        match edge {
            EdgePolicy::Inclusive => {
                !(self.max_x() < other.min_x()
                    || other.max_x() < self.min_x()
                    || self.max_y() < other.min_y()
                    || other.max_y() < self.min_y())
            }
            EdgePolicy::Exclusive => {
                self.min_x() < other.max_x()
                    && other.min_x() < self.max_x()
                    && self.min_y() < other.max_y()
                    && other.min_y() < self.max_y()
            }
        }
    }
}

/// Placement of the scroll container's own node.
///
/// `position` is expressed in the parent's space; `parent_origin` is where that space's origin
/// sits in world space. `anchor` is normalized (`(0, 0)` = bottom-left, `(0.5, 0.5)` = center).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportFrame {
    pub parent_origin: Vec2,
    pub position: Vec2,
    pub anchor: Vec2,
    pub size: Size,
}

impl ViewportFrame {
    pub fn new(position: Vec2, anchor: Vec2, size: Size) -> Self {
        Self {
            parent_origin: Vec2::ZERO,
            position,
            anchor,
            size,
        }
    }

    pub fn with_parent_origin(mut self, parent_origin: Vec2) -> Self {
        self.parent_origin = parent_origin;
        self
    }

    /// The visible region in world space.
    pub fn world_box(&self) -> Aabb {
        let bottom_left = Vec2::new(
            self.position.x - self.anchor.x * self.size.width,
            self.position.y - self.anchor.y * self.size.height,
        );
        Aabb::from_origin_size(self.parent_origin + bottom_left, self.size)
    }
}
