use astrelis_core::math::Vec2;

use super::super::displacement::speculatively_increase;
use super::super::page_center::{get_client_from_page_border_box_center, get_page_border_box_center};
use super::super::reorder::is_home_of;
use super::super::types::{DragImpact, LiftEffect};
use super::super::visibility::is_totally_visible_in_new_location;
use super::{MoveResult, move_to_next_combine, move_to_next_index};
use crate::dimension::{DimensionMap, DraggableDimension, DroppableDimension};
use crate::error::DndResult;
use crate::viewport::Viewport;

/// Step along the destination's main axis.
///
/// When the new location would not be fully visible, the pointer stays put
/// and a scroll jump request for the distance is returned instead.
#[allow(clippy::too_many_arguments)]
pub fn move_to_next_place(
    is_moving_forward: bool,
    draggable: &DraggableDimension,
    destination: &DroppableDimension,
    dimensions: &DimensionMap,
    previous_impact: &DragImpact,
    viewport: &Viewport,
    previous_page_border_box_center: Vec2,
    previous_client_selection: Vec2,
    after_critical: &LiftEffect,
) -> DndResult<Option<MoveResult>> {
    if !destination.is_enabled {
        return Ok(None);
    }

    let inside_destination = dimensions.inside(destination.id());
    let is_in_home_list = is_home_of(draggable, destination);

    let impact = match move_to_next_combine(
        is_moving_forward,
        draggable,
        destination,
        &inside_destination,
        previous_impact,
    )? {
        Some(impact) => Some(impact),
        None => move_to_next_index(
            is_moving_forward,
            is_in_home_list,
            draggable,
            dimensions,
            destination,
            &inside_destination,
            previous_impact,
            viewport,
            after_critical,
        )?,
    };
    let Some(impact) = impact else {
        return Ok(None);
    };

    let page_border_box_center = get_page_border_box_center(
        &impact,
        draggable,
        Some(destination),
        dimensions,
        after_critical,
    )?;

    let is_visible_in_new_location = is_totally_visible_in_new_location(
        draggable,
        destination,
        page_border_box_center,
        &viewport.frame,
        false,
        true,
    );

    if is_visible_in_new_location {
        let client_selection =
            get_client_from_page_border_box_center(page_border_box_center, draggable, viewport);
        return Ok(Some(MoveResult {
            client_selection,
            impact,
            scroll_jump_request: None,
        }));
    }

    let distance = page_border_box_center - previous_page_border_box_center;
    let cautious = speculatively_increase(&impact, viewport, destination, dimensions, distance)?;

    Ok(Some(MoveResult {
        client_selection: previous_client_selection,
        impact: cautious,
        scroll_jump_request: Some(distance),
    }))
}
