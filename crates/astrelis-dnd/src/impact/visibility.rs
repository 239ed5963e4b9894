//! Visibility of a target inside a destination and the viewport.

use astrelis_core::math::Vec2;

use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::geometry::{
    Rect, is_partially_visible_through_frame, is_totally_visible_through_frame,
    is_totally_visible_through_frame_on_axis, offset,
};

fn is_visible(
    target: &Rect,
    destination: &DroppableDimension,
    viewport: &Rect,
    with_droppable_displacement: bool,
    through_frame: impl Fn(&Rect, &Rect) -> bool,
) -> bool {
    let target = if with_droppable_displacement {
        destination.displaced(*target)
    } else {
        *target
    };

    let Some(active) = destination.subject.active else {
        return false;
    };

    through_frame(&active, &target) && through_frame(viewport, &target)
}

/// Any part of `target` can be seen in the destination and the viewport.
pub fn is_partially_visible(
    target: &Rect,
    destination: &DroppableDimension,
    viewport: &Rect,
    with_droppable_displacement: bool,
) -> bool {
    is_visible(
        target,
        destination,
        viewport,
        with_droppable_displacement,
        is_partially_visible_through_frame,
    )
}

/// All of `target` can be seen in the destination and the viewport.
pub fn is_totally_visible(
    target: &Rect,
    destination: &DroppableDimension,
    viewport: &Rect,
    with_droppable_displacement: bool,
) -> bool {
    is_visible(
        target,
        destination,
        viewport,
        with_droppable_displacement,
        is_totally_visible_through_frame,
    )
}

/// All of `target` can be seen along the destination's main axis.
pub fn is_totally_visible_on_axis(
    target: &Rect,
    destination: &DroppableDimension,
    viewport: &Rect,
    with_droppable_displacement: bool,
) -> bool {
    let axis = destination.axis;
    is_visible(
        target,
        destination,
        viewport,
        with_droppable_displacement,
        |frame, subject| is_totally_visible_through_frame_on_axis(axis, frame, subject),
    )
}

/// Whether the dragged item would be fully visible with its border-box
/// center at `new_page_border_box_center`.
pub fn is_totally_visible_in_new_location(
    draggable: &DraggableDimension,
    destination: &DroppableDimension,
    new_page_border_box_center: Vec2,
    viewport: &Rect,
    with_droppable_displacement: bool,
    only_on_main_axis: bool,
) -> bool {
    let change = new_page_border_box_center - draggable.page.border_box.center();
    let shifted = offset(draggable.page.border_box, change);

    if only_on_main_axis {
        is_totally_visible_on_axis(&shifted, destination, viewport, with_droppable_displacement)
    } else {
        is_totally_visible(&shifted, destination, viewport, with_droppable_displacement)
    }
}
