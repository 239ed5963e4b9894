//! Point helpers on top of [`Vec2`].

use astrelis_core::math::Vec2;

use super::axis::Line;

/// Build a point with `value` on `line` and `other` on the remaining line.
pub fn patch(line: Line, value: f32, other: f32) -> Vec2 {
    match line {
        Line::X => Vec2::new(value, other),
        Line::Y => Vec2::new(other, value),
    }
}

/// Distance from `target` to the closest of `points`.
///
/// Returns `f32::INFINITY` for an empty slice.
pub fn closest(target: Vec2, points: &[Vec2]) -> f32 {
    points
        .iter()
        .map(|point| target.distance(*point))
        .fold(f32::INFINITY, f32::min)
}

/// Replace negative zero components with positive zero.
pub fn clean(point: Vec2) -> Vec2 {
    let fix = |value: f32| if value == 0.0 { 0.0 } else { value };
    Vec2::new(fix(point.x), fix(point.y))
}

/// Exact component equality.
#[inline]
pub fn is_equal(a: Vec2, b: Vec2) -> bool {
    a.x == b.x && a.y == b.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch() {
        assert_eq!(patch(Line::Y, 10.0, 0.0), Vec2::new(0.0, 10.0));
        assert_eq!(patch(Line::X, 10.0, 3.0), Vec2::new(10.0, 3.0));
    }

    #[test]
    fn test_closest() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
        assert_eq!(closest(Vec2::new(7.0, 0.0), &points), 3.0);
        assert_eq!(closest(Vec2::ZERO, &[]), f32::INFINITY);
    }

    #[test]
    fn test_clean_negative_zero() {
        let cleaned = clean(Vec2::new(-0.0, 5.0));
        assert!(cleaned.x.is_sign_positive());
        assert_eq!(cleaned.y, 5.0);
    }
}
