//! Frame visibility predicates.
//!
//! A subject is tested against a frame in the same coordinate space. Edges
//! touching the frame count as inside.

use astrelis_core::math::Vec2;

use super::axis::Axis;
use super::rect::Rect;

#[inline]
fn is_within(lower: f32, upper: f32, value: f32) -> bool {
    lower <= value && value <= upper
}

/// Whether any part of `subject` can be seen through `frame`.
///
/// A subject bigger than the frame on one or both axes is still visible as
/// long as it covers the frame on the other axis.
pub fn is_partially_visible_through_frame(frame: &Rect, subject: &Rect) -> bool {
    let within_vertical = |value| is_within(frame.top, frame.bottom, value);
    let within_horizontal = |value| is_within(frame.left, frame.right, value);

    let partially_vertical = within_vertical(subject.top) || within_vertical(subject.bottom);
    let partially_horizontal = within_horizontal(subject.left) || within_horizontal(subject.right);

    if partially_vertical && partially_horizontal {
        return true;
    }

    let bigger_vertically = subject.top < frame.top && subject.bottom > frame.bottom;
    let bigger_horizontally = subject.left < frame.left && subject.right > frame.right;

    if bigger_vertically && bigger_horizontally {
        return true;
    }

    (bigger_vertically && partially_horizontal) || (bigger_horizontally && partially_vertical)
}

/// Whether `subject` is entirely inside `frame`.
pub fn is_totally_visible_through_frame(frame: &Rect, subject: &Rect) -> bool {
    is_within(frame.top, frame.bottom, subject.top)
        && is_within(frame.top, frame.bottom, subject.bottom)
        && is_within(frame.left, frame.right, subject.left)
        && is_within(frame.left, frame.right, subject.right)
}

/// Whether `subject` is entirely inside `frame` along `axis` only.
pub fn is_totally_visible_through_frame_on_axis(axis: Axis, frame: &Rect, subject: &Rect) -> bool {
    let lower = axis.start_of(frame);
    let upper = axis.end_of(frame);
    is_within(lower, upper, axis.start_of(subject)) && is_within(lower, upper, axis.end_of(subject))
}

/// Whether `point` lies within `frame`.
pub fn is_position_in_frame(frame: &Rect, point: Vec2) -> bool {
    is_within(frame.top, frame.bottom, point.y) && is_within(frame.left, frame.right, point.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Rect {
        Rect::from_size(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn test_partial_visibility() {
        let frame = frame();
        assert!(is_partially_visible_through_frame(
            &frame,
            &Rect::from_size(90.0, 90.0, 20.0, 20.0)
        ));
        assert!(!is_partially_visible_through_frame(
            &frame,
            &Rect::from_size(120.0, 0.0, 20.0, 20.0)
        ));
    }

    #[test]
    fn test_subject_bigger_than_frame() {
        let frame = frame();
        // Covers the whole frame
        assert!(is_partially_visible_through_frame(
            &frame,
            &Rect::new(-10.0, 110.0, 110.0, -10.0)
        ));
        // Taller than the frame, horizontally inside
        assert!(is_partially_visible_through_frame(
            &frame,
            &Rect::new(-10.0, 50.0, 110.0, 20.0)
        ));
        // Taller than the frame but off to the side
        assert!(!is_partially_visible_through_frame(
            &frame,
            &Rect::new(-10.0, 250.0, 110.0, 200.0)
        ));
    }

    #[test]
    fn test_total_visibility() {
        let frame = frame();
        assert!(is_totally_visible_through_frame(&frame, &frame));
        assert!(!is_totally_visible_through_frame(
            &frame,
            &Rect::from_size(90.0, 0.0, 20.0, 20.0)
        ));
    }

    #[test]
    fn test_total_visibility_on_axis() {
        let frame = frame();
        // Overflows horizontally only
        let subject = Rect::from_size(90.0, 10.0, 20.0, 20.0);
        assert!(is_totally_visible_through_frame_on_axis(Axis::Vertical, &frame, &subject));
        assert!(!is_totally_visible_through_frame_on_axis(Axis::Horizontal, &frame, &subject));
    }

    #[test]
    fn test_position_in_frame() {
        let frame = frame();
        assert!(is_position_in_frame(&frame, Vec2::new(100.0, 0.0)));
        assert!(!is_position_in_frame(&frame, Vec2::new(100.1, 0.0)));
    }
}
