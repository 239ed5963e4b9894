//! CSS style box model: margin, border and padding around a content box.

use astrelis_core::math::Vec2;

use super::rect::{Rect, Spacing, expand, offset, shrink};

/// All four nested boxes of an element plus the spacings between them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxModel {
    pub margin_box: Rect,
    pub border_box: Rect,
    pub padding_box: Rect,
    pub content_box: Rect,
    pub margin: Spacing,
    pub border: Spacing,
    pub padding: Spacing,
}

impl BoxModel {
    /// Build a box model around a measured border box.
    pub fn new(border_box: Rect, margin: Spacing, border: Spacing, padding: Spacing) -> Self {
        let margin_box = expand(border_box, margin);
        let padding_box = shrink(border_box, border);
        let content_box = shrink(padding_box, padding);

        Self {
            margin_box,
            border_box,
            padding_box,
            content_box,
            margin,
            border,
            padding,
        }
    }

    /// A box with no margin, border or padding.
    pub fn from_border_box(border_box: Rect) -> Self {
        Self::new(border_box, Spacing::ZERO, Spacing::ZERO, Spacing::ZERO)
    }

    /// Move every box by `point`, keeping the spacings.
    pub fn offset(&self, point: Vec2) -> Self {
        Self::new(
            offset(self.border_box, point),
            self.margin,
            self.border,
            self.padding,
        )
    }

    /// Convert a viewport-relative box into a page-relative one.
    #[inline]
    pub fn with_scroll(&self, scroll: Vec2) -> Self {
        self.offset(scroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_boxes() {
        let model = BoxModel::new(
            Rect::from_size(10.0, 10.0, 100.0, 100.0),
            Spacing::all(5.0),
            Spacing::all(1.0),
            Spacing::all(4.0),
        );
        assert_eq!(model.margin_box, Rect::new(5.0, 115.0, 115.0, 5.0));
        assert_eq!(model.padding_box, Rect::new(11.0, 109.0, 109.0, 11.0));
        assert_eq!(model.content_box, Rect::new(15.0, 105.0, 105.0, 15.0));
    }

    #[test]
    fn test_with_scroll_shifts_all_boxes() {
        let model = BoxModel::new(
            Rect::from_size(0.0, 0.0, 10.0, 10.0),
            Spacing::all(2.0),
            Spacing::ZERO,
            Spacing::ZERO,
        );
        let page = model.with_scroll(Vec2::new(0.0, 100.0));
        assert_eq!(page.border_box.top, 100.0);
        assert_eq!(page.margin_box.top, 98.0);
        assert_eq!(page.margin, model.margin);
    }
}
