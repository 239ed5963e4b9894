//! Which droppable the dragged item is over.

use astrelis_core::math::Vec2;

use crate::descriptor::DroppableId;
use crate::dimension::{DimensionMap, DroppableDimension};
use crate::geometry::{Rect, closest, is_partially_visible_through_frame, is_position_in_frame};

fn is_within(lower: f32, upper: f32, value: f32) -> bool {
    lower <= value && value <= upper
}

fn is_candidate(droppable: &DroppableDimension, page_border_box: &Rect) -> bool {
    if !droppable.is_enabled {
        return false;
    }
    let Some(active) = droppable.subject.active else {
        return false;
    };
    if !is_partially_visible_through_frame(&active, page_border_box) {
        return false;
    }
    if is_position_in_frame(&active, page_border_box.center()) {
        return true;
    }

    // Only partially over: require crossing the droppable's cross-axis center
    let axis = droppable.axis;
    let child_center = axis.cross(active.center());
    let cross_start = axis.cross_start_of(page_border_box);
    let cross_end = axis.cross_end_of(page_border_box);
    let lower = axis.cross_start_of(&active);
    let upper = axis.cross_end_of(&active);

    let start_contained = is_within(lower, upper, cross_start);
    let end_contained = is_within(lower, upper, cross_end);

    if !start_contained && !end_contained {
        return true;
    }
    if start_contained {
        return cross_start < child_center;
    }
    cross_end > child_center
}

fn active_of(droppable: &DroppableDimension) -> Rect {
    droppable.subject.active.unwrap_or(droppable.page.margin_box)
}

fn pick_between(candidates: Vec<&DroppableDimension>, center: Vec2) -> Option<&DroppableDimension> {
    let containing: Vec<_> = candidates
        .iter()
        .copied()
        .filter(|droppable| is_position_in_frame(&active_of(droppable), center))
        .collect();
    let pool = if containing.is_empty() { candidates } else { containing };

    let cross_distance = |droppable: &DroppableDimension| {
        let axis = droppable.axis;
        (axis.cross(active_of(droppable).center()) - axis.cross(center)).abs()
    };
    let corner_distance =
        |droppable: &DroppableDimension| closest(center, &active_of(droppable).corners());

    pool.into_iter().min_by(|a, b| {
        cross_distance(*a)
            .total_cmp(&cross_distance(*b))
            .then_with(|| corner_distance(*a).total_cmp(&corner_distance(*b)))
    })
}

/// Find the droppable under the dragged page border box.
///
/// When several qualify, droppables containing the dragged center win,
/// then the closest cross-axis center, then the closest corner.
pub fn get_droppable_over<'a>(
    page_border_box: &Rect,
    dimensions: &'a DimensionMap,
) -> Option<&'a DroppableId> {
    let candidates: Vec<&DroppableDimension> = dimensions
        .droppables()
        .values()
        .filter(|droppable| is_candidate(droppable, page_border_box))
        .collect();

    match candidates.len() {
        0 => None,
        1 => candidates.first().map(|droppable| droppable.id()),
        _ => pick_between(candidates, page_border_box.center()).map(|droppable| droppable.id()),
    }
}
