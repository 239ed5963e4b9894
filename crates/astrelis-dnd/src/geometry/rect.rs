//! Rectangles and per-edge spacing.

use astrelis_core::math::Vec2;

use super::axis::{Edge, Extent};

/// Per-edge spacing (margin, border or padding widths).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spacing {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Spacing {
    /// No spacing on any edge.
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Create spacing from explicit edge values.
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same value on every edge.
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Read one edge.
    #[inline]
    pub fn edge(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }
}

/// An axis-aligned rectangle described by its edges.
///
/// Width, height and center are derived on demand so a `Rect` can never
/// disagree with itself.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Rect {
    /// Create a rect from its edges.
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create a rect from a top-left position and a size.
    pub fn from_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            top: y,
            right: x + width,
            bottom: y + height,
            left: x,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.left
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.top
    }

    /// Center point of the rect.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.right + self.left) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }

    /// Width and height as a vector.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Read one edge.
    #[inline]
    pub fn edge(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Copy of this rect with one edge moved.
    pub fn with_edge(mut self, edge: Edge, value: f32) -> Self {
        match edge {
            Edge::Top => self.top = value,
            Edge::Right => self.right = value,
            Edge::Bottom => self.bottom = value,
            Edge::Left => self.left = value,
        }
        self
    }

    /// Read a derived extent.
    #[inline]
    pub fn extent(&self, extent: Extent) -> f32 {
        match extent {
            Extent::Width => self.width(),
            Extent::Height => self.height(),
        }
    }

    /// The four corners, clockwise from top-left.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left, self.top),
            Vec2::new(self.right, self.top),
            Vec2::new(self.right, self.bottom),
            Vec2::new(self.left, self.bottom),
        ]
    }

    /// Inclusive point containment.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}

/// Grow `target` outwards by `spacing`.
pub fn expand(target: Rect, spacing: Spacing) -> Rect {
    Rect {
        top: target.top - spacing.top,
        right: target.right + spacing.right,
        bottom: target.bottom + spacing.bottom,
        left: target.left - spacing.left,
    }
}

/// Shrink `target` inwards by `spacing`.
pub fn shrink(target: Rect, spacing: Spacing) -> Rect {
    Rect {
        top: target.top + spacing.top,
        right: target.right - spacing.right,
        bottom: target.bottom - spacing.bottom,
        left: target.left + spacing.left,
    }
}

/// Move `target` by `point`.
pub fn offset(target: Rect, point: Vec2) -> Rect {
    Rect {
        top: target.top + point.y,
        right: target.right + point.x,
        bottom: target.bottom + point.y,
        left: target.left + point.x,
    }
}

/// Intersection of `frame` and `subject`.
///
/// Returns `None` when the intersection has no positive width or height.
pub fn clip(frame: Rect, subject: Rect) -> Option<Rect> {
    let result = Rect {
        top: frame.top.max(subject.top),
        right: frame.right.min(subject.right),
        bottom: frame.bottom.min(subject.bottom),
        left: frame.left.max(subject.left),
    };

    if result.width() <= 0.0 || result.height() <= 0.0 {
        return None;
    }
    Some(result)
}
