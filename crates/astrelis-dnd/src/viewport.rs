//! Window scroll state.

use astrelis_core::math::Vec2;

use crate::dimension::{ScrollDetails, get_max_scroll};
use crate::geometry::Rect;

/// The visible part of the page and how far the window has scrolled.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    /// Visible rect in page coordinates.
    pub frame: Rect,
    pub scroll: ScrollDetails,
}

impl Viewport {
    /// Build a viewport from the window size, current scroll and document
    /// size.
    pub fn new(size: Vec2, scroll: Vec2, document_size: Vec2) -> Self {
        Self {
            frame: Rect::from_size(scroll.x, scroll.y, size.x, size.y),
            scroll: ScrollDetails::new(scroll, get_max_scroll(document_size, size)),
        }
    }

    /// Same viewport after the window scrolled to `new_scroll`.
    pub fn scrolled_to(&self, new_scroll: Vec2) -> Self {
        Self {
            frame: Rect::from_size(
                new_scroll.x,
                new_scroll.y,
                self.frame.width(),
                self.frame.height(),
            ),
            scroll: self.scroll.scrolled_to(new_scroll),
        }
    }

    /// Undo the window scroll since lift on a page position.
    #[inline]
    pub fn with_displacement(&self, point: Vec2) -> Vec2 {
        point + self.scroll.diff.displacement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_viewport() {
        let viewport = Viewport::new(
            Vec2::new(800.0, 600.0),
            Vec2::new(0.0, 100.0),
            Vec2::new(800.0, 2000.0),
        );
        assert_eq!(viewport.frame, Rect::new(100.0, 800.0, 700.0, 0.0));
        assert_eq!(viewport.scroll.max, Vec2::new(0.0, 1400.0));
        assert_eq!(viewport.scroll.current, viewport.scroll.initial);
    }

    #[test]
    fn test_scrolled_to() {
        let viewport = Viewport::new(Vec2::new(800.0, 600.0), Vec2::ZERO, Vec2::new(800.0, 2000.0));
        let scrolled = viewport.scrolled_to(Vec2::new(0.0, 250.0));
        assert_eq!(scrolled.frame.top, 250.0);
        assert_eq!(scrolled.frame.height(), 600.0);
        assert_eq!(scrolled.scroll.diff.value, Vec2::new(0.0, 250.0));
        assert_eq!(scrolled.with_displacement(Vec2::new(10.0, 300.0)), Vec2::new(10.0, 50.0));
    }
}
