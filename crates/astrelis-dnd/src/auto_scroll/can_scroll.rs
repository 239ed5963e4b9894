//! Whether the window or a droppable has room left to scroll.

use astrelis_core::math::Vec2;

use crate::dimension::DroppableDimension;
use crate::viewport::Viewport;

fn smallest_signed(point: Vec2) -> Vec2 {
    let signed = |value: f32| {
        if value == 0.0 {
            0.0
        } else if value > 0.0 {
            1.0
        } else {
            -1.0
        }
    };
    Vec2::new(signed(point.x), signed(point.y))
}

fn remainder(target: f32, max: f32) -> f32 {
    if target < 0.0 {
        return target;
    }
    if target > max {
        return target - max;
    }
    0.0
}

/// How much of `change` would go past the scroll limits.
pub fn get_overlap(current: Vec2, max: Vec2, change: Vec2) -> Option<Vec2> {
    let target = current + change;
    let overlap = Vec2::new(remainder(target.x, max.x), remainder(target.y, max.y));
    if overlap == Vec2::ZERO {
        return None;
    }
    Some(overlap)
}

/// Whether any of `change` can be applied.
pub fn can_partially_scroll(current: Vec2, max: Vec2, change: Vec2) -> bool {
    // Content can shrink under a scrolled container
    let max = max.max(current);
    let smallest_change = smallest_signed(change);

    let Some(overlap) = get_overlap(current, max, smallest_change) else {
        return true;
    };
    if smallest_change.x != 0.0 && overlap.x == 0.0 {
        return true;
    }
    if smallest_change.y != 0.0 && overlap.y == 0.0 {
        return true;
    }
    false
}

pub fn can_scroll_window(viewport: &Viewport, change: Vec2) -> bool {
    can_partially_scroll(viewport.scroll.current, viewport.scroll.max, change)
}

pub fn can_scroll_droppable(droppable: &DroppableDimension, change: Vec2) -> bool {
    let Some(frame) = &droppable.frame else {
        return false;
    };
    can_partially_scroll(frame.scroll.current, frame.scroll.max, change)
}

/// The part of `change` the window cannot take. `None` when it can take
/// all of it, or none of it.
pub fn get_window_overlap(viewport: &Viewport, change: Vec2) -> Option<Vec2> {
    if !can_scroll_window(viewport, change) {
        return None;
    }
    get_overlap(viewport.scroll.current, viewport.scroll.max, change)
}

/// The part of `change` the droppable cannot take. `None` when it can take
/// all of it, or none of it.
pub fn get_droppable_overlap(droppable: &DroppableDimension, change: Vec2) -> Option<Vec2> {
    let frame = droppable.frame.as_ref()?;
    if !can_scroll_droppable(droppable, change) {
        return None;
    }
    get_overlap(frame.scroll.current, frame.scroll.max, change)
}
