//! Impact of a pointer driven move.

use astrelis_core::math::Vec2;
use astrelis_core::profiling::profile_function;

use super::combine::get_combine_impact;
use super::droppable_over::get_droppable_over;
use super::reorder::get_reorder_impact;
use super::types::{DragImpact, LiftEffect};
use crate::dimension::{DimensionMap, DraggableDimension};
use crate::error::DndResult;
use crate::geometry::offset;
use crate::viewport::Viewport;

/// Impact of moving the dragged item by `page_offset` from where it was
/// lifted.
pub fn get_drag_impact(
    page_offset: Vec2,
    draggable: &DraggableDimension,
    dimensions: &DimensionMap,
    previous_impact: &DragImpact,
    viewport: &Viewport,
    after_critical: &LiftEffect,
) -> DndResult<DragImpact> {
    profile_function!();

    let page_border_box = offset(draggable.page.border_box, page_offset);
    let Some(destination_id) = get_droppable_over(&page_border_box, dimensions) else {
        return Ok(DragImpact::none());
    };

    let destination = dimensions.droppable(destination_id)?;
    let inside_destination = dimensions.inside(destination_id);
    let target_rect = destination.with_scroll(page_border_box);

    if let Some(impact) = get_combine_impact(
        &target_rect,
        draggable,
        previous_impact,
        destination,
        &inside_destination,
        after_critical,
    ) {
        return Ok(impact);
    }

    Ok(get_reorder_impact(
        &target_rect,
        draggable,
        destination,
        &inside_destination,
        &previous_impact.displaced,
        viewport,
        after_critical,
    ))
}
