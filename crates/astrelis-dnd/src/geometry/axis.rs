//! Direction-agnostic axis descriptions.
//!
//! All impact math is written against an [`Axis`] so the same code handles
//! vertical lists and horizontal boards.

use astrelis_core::math::Vec2;

use super::position::patch;
use super::rect::{Rect, Spacing};

/// One of the two coordinate lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    X,
    Y,
}

impl Line {
    /// Read this line from a point.
    #[inline]
    pub fn of(self, point: Vec2) -> f32 {
        match self {
            Line::X => point.x,
            Line::Y => point.y,
        }
    }
}

/// A rectangle edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// A rectangle extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extent {
    Width,
    Height,
}

/// The main axis of a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    #[inline]
    pub const fn line(self) -> Line {
        match self {
            Axis::Vertical => Line::Y,
            Axis::Horizontal => Line::X,
        }
    }

    #[inline]
    pub const fn cross_axis_line(self) -> Line {
        match self {
            Axis::Vertical => Line::X,
            Axis::Horizontal => Line::Y,
        }
    }

    #[inline]
    pub const fn start(self) -> Edge {
        match self {
            Axis::Vertical => Edge::Top,
            Axis::Horizontal => Edge::Left,
        }
    }

    #[inline]
    pub const fn end(self) -> Edge {
        match self {
            Axis::Vertical => Edge::Bottom,
            Axis::Horizontal => Edge::Right,
        }
    }

    #[inline]
    pub const fn size(self) -> Extent {
        match self {
            Axis::Vertical => Extent::Height,
            Axis::Horizontal => Extent::Width,
        }
    }

    #[inline]
    pub const fn cross_axis_start(self) -> Edge {
        match self {
            Axis::Vertical => Edge::Left,
            Axis::Horizontal => Edge::Top,
        }
    }

    #[inline]
    pub const fn cross_axis_end(self) -> Edge {
        match self {
            Axis::Vertical => Edge::Right,
            Axis::Horizontal => Edge::Bottom,
        }
    }

    #[inline]
    pub const fn cross_axis_size(self) -> Extent {
        match self {
            Axis::Vertical => Extent::Width,
            Axis::Horizontal => Extent::Height,
        }
    }

    /// Main-axis component of a point.
    #[inline]
    pub fn main(self, point: Vec2) -> f32 {
        self.line().of(point)
    }

    /// Cross-axis component of a point.
    #[inline]
    pub fn cross(self, point: Vec2) -> f32 {
        self.cross_axis_line().of(point)
    }

    /// Point with `value` on the main axis and `cross` on the cross axis.
    #[inline]
    pub fn point(self, value: f32, cross: f32) -> Vec2 {
        patch(self.line(), value, cross)
    }

    #[inline]
    pub fn start_of(self, rect: &Rect) -> f32 {
        rect.edge(self.start())
    }

    #[inline]
    pub fn end_of(self, rect: &Rect) -> f32 {
        rect.edge(self.end())
    }

    #[inline]
    pub fn size_of(self, rect: &Rect) -> f32 {
        rect.extent(self.size())
    }

    #[inline]
    pub fn cross_start_of(self, rect: &Rect) -> f32 {
        rect.edge(self.cross_axis_start())
    }

    #[inline]
    pub fn cross_end_of(self, rect: &Rect) -> f32 {
        rect.edge(self.cross_axis_end())
    }

    #[inline]
    pub fn cross_size_of(self, rect: &Rect) -> f32 {
        rect.extent(self.cross_axis_size())
    }

    #[inline]
    pub fn spacing_start(self, spacing: &Spacing) -> f32 {
        spacing.edge(self.start())
    }

    #[inline]
    pub fn spacing_end(self, spacing: &Spacing) -> f32 {
        spacing.edge(self.end())
    }

    #[inline]
    pub fn spacing_cross_start(self, spacing: &Spacing) -> f32 {
        spacing.edge(self.cross_axis_start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_axis_record() {
        let axis = Axis::Vertical;
        assert_eq!(axis.line(), Line::Y);
        assert_eq!(axis.cross_axis_line(), Line::X);
        assert_eq!(axis.start(), Edge::Top);
        assert_eq!(axis.end(), Edge::Bottom);
        assert_eq!(axis.size(), Extent::Height);
        assert_eq!(axis.cross_axis_start(), Edge::Left);
        assert_eq!(axis.cross_axis_end(), Edge::Right);
        assert_eq!(axis.cross_axis_size(), Extent::Width);
    }

    #[test]
    fn test_horizontal_reads() {
        let axis = Axis::Horizontal;
        let rect = Rect::from_size(10.0, 20.0, 30.0, 40.0);
        assert_eq!(axis.start_of(&rect), 10.0);
        assert_eq!(axis.end_of(&rect), 40.0);
        assert_eq!(axis.size_of(&rect), 30.0);
        assert_eq!(axis.cross_start_of(&rect), 20.0);
        assert_eq!(axis.cross_size_of(&rect), 40.0);
        assert_eq!(axis.point(5.0, 1.0), Vec2::new(5.0, 1.0));
        assert_eq!(Axis::Vertical.point(5.0, 1.0), Vec2::new(1.0, 5.0));
    }
}
