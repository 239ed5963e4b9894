use astrelis_core::math::Vec2;

use super::super::page_center::{get_client_from_page_border_box_center, get_page_border_box_center};
use super::super::placeholder::add_placeholder;
use super::super::reorder::{calculate_reorder_impact, is_home_of};
use super::super::types::{DisplacedBy, DisplacementGroups, DragImpact, ImpactLocation, LiftEffect};
use super::super::visibility::{is_totally_visible, is_totally_visible_in_new_location};
use super::MoveResult;
use crate::descriptor::DraggableLocation;
use crate::dimension::{DimensionMap, DraggableDimension, DroppableDimension};
use crate::error::DndResult;
use crate::geometry::{Rect, closest, is_partially_visible_through_frame, offset};
use crate::viewport::Viewport;

fn is_within(lower: f32, upper: f32, value: f32) -> bool {
    lower <= value && value <= upper
}

fn known_active(droppable: &DroppableDimension) -> Rect {
    droppable.subject.active.unwrap_or(droppable.page.margin_box)
}

/// Best droppable next to `source` in the direction of travel.
pub fn get_best_cross_axis_droppable<'a>(
    is_moving_forward: bool,
    page_border_box_center: Vec2,
    source: &DroppableDimension,
    dimensions: &'a DimensionMap,
    viewport: &Viewport,
) -> Option<&'a DroppableDimension> {
    let active = source.subject.active?;
    let axis = source.axis;
    let between_source = |value| is_within(axis.start_of(&active), axis.end_of(&active), value);

    let mut candidates: Vec<&DroppableDimension> = dimensions
        .droppables()
        .values()
        .filter(|droppable| droppable.id() != source.id())
        .filter(|droppable| droppable.is_enabled)
        .filter(|droppable| droppable.subject.active.is_some())
        .filter(|droppable| {
            is_partially_visible_through_frame(&viewport.frame, &known_active(droppable))
        })
        .filter(|droppable| {
            let target = known_active(droppable);
            if is_moving_forward {
                axis.cross_end_of(&active) < axis.cross_end_of(&target)
            } else {
                axis.cross_start_of(&target) < axis.cross_start_of(&active)
            }
        })
        .filter(|droppable| {
            let target = known_active(droppable);
            let between_destination =
                |value| is_within(axis.start_of(&target), axis.end_of(&target), value);
            between_source(axis.start_of(&target))
                || between_source(axis.end_of(&target))
                || between_destination(axis.start_of(&active))
                || between_destination(axis.end_of(&active))
        })
        .collect();

    // Closest first on the cross axis
    candidates.sort_by(|a, b| {
        let first = axis.cross_start_of(&known_active(a));
        let second = axis.cross_start_of(&known_active(b));
        if is_moving_forward {
            first.total_cmp(&second)
        } else {
            second.total_cmp(&first)
        }
    });

    let nearest_start = axis.cross_start_of(&known_active(candidates.first()?));
    candidates.retain(|droppable| axis.cross_start_of(&known_active(droppable)) == nearest_start);

    if candidates.len() == 1 {
        return candidates.first().copied();
    }

    let main = axis.main(page_border_box_center);
    let mut contains: Vec<&DroppableDimension> = candidates
        .iter()
        .copied()
        .filter(|droppable| {
            let target = known_active(droppable);
            is_within(axis.start_of(&target), axis.end_of(&target), main)
        })
        .collect();

    if !contains.is_empty() {
        contains.sort_by(|a, b| {
            axis.start_of(&known_active(a))
                .total_cmp(&axis.start_of(&known_active(b)))
        });
        return contains.first().copied();
    }

    candidates.into_iter().min_by(|a, b| {
        let first = closest(page_border_box_center, &known_active(a).corners());
        let second = closest(page_border_box_center, &known_active(b).corners());
        first.total_cmp(&second).then_with(|| {
            axis.start_of(&known_active(a))
                .total_cmp(&axis.start_of(&known_active(b)))
        })
    })
}

fn current_page_border_box(draggable: &DraggableDimension, after_critical: &LiftEffect) -> Rect {
    if after_critical.did_start_after_critical(draggable.id()) {
        offset(draggable.page.border_box, -after_critical.displaced_by.point)
    } else {
        draggable.page.border_box
    }
}

/// Closest fully visible draggable in `destination` to the dragged center.
pub fn get_closest_draggable<'a>(
    page_border_box_center: Vec2,
    viewport: &Viewport,
    destination: &DroppableDimension,
    inside_destination: &[&'a DraggableDimension],
    after_critical: &LiftEffect,
) -> Option<&'a DraggableDimension> {
    let distance_to = |draggable: &DraggableDimension| {
        let center = current_page_border_box(draggable, after_critical).center();
        page_border_box_center.distance(destination.with_displacement(center))
    };

    inside_destination
        .iter()
        .copied()
        .filter(|draggable| {
            is_totally_visible(
                &current_page_border_box(draggable, after_critical),
                destination,
                &viewport.frame,
                true,
            )
        })
        .min_by(|a, b| {
            distance_to(*a)
                .total_cmp(&distance_to(*b))
                .then_with(|| a.descriptor.index.cmp(&b.descriptor.index))
        })
}

#[allow(clippy::too_many_arguments)]
fn move_to_new_droppable(
    previous_page_border_box_center: Vec2,
    move_relative_to: Option<&DraggableDimension>,
    inside_destination: &[&DraggableDimension],
    draggable: &DraggableDimension,
    dimensions: &DimensionMap,
    destination: &DroppableDimension,
    viewport: &Viewport,
    after_critical: &LiftEffect,
) -> DndResult<Option<DragImpact>> {
    let Some(move_relative_to) = move_relative_to else {
        if !inside_destination.is_empty() {
            return Ok(None);
        }

        let proposed = DragImpact {
            displaced: DisplacementGroups::default(),
            displaced_by: DisplacedBy::default(),
            at: Some(ImpactLocation::Reorder {
                destination: DraggableLocation {
                    droppable_id: destination.id().clone(),
                    index: 0,
                },
            }),
        };
        let proposed_center = get_page_border_box_center(
            &proposed,
            draggable,
            Some(destination),
            dimensions,
            after_critical,
        )?;

        let with_placeholder = if is_home_of(draggable, destination) {
            destination.clone()
        } else {
            add_placeholder(destination, draggable, dimensions)?
        };

        let is_valid = is_totally_visible_in_new_location(
            draggable,
            &with_placeholder,
            proposed_center,
            &viewport.frame,
            false,
            true,
        );
        return Ok(is_valid.then_some(proposed));
    };

    let axis = destination.axis;
    let is_going_before_target = axis.main(previous_page_border_box_center)
        <= axis.main(move_relative_to.page.border_box.center());

    let relative_to = move_relative_to.descriptor.index;
    let proposed_index = if move_relative_to.id() == draggable.id() || is_going_before_target {
        relative_to
    } else {
        relative_to + 1
    };

    Ok(Some(calculate_reorder_impact(
        draggable,
        inside_destination,
        destination,
        viewport,
        DisplacedBy::new(axis, draggable.displace_by),
        &DisplacementGroups::default(),
        Some(proposed_index),
        None,
    )))
}

/// Step into the neighbouring droppable on the cross axis.
pub fn move_cross_axis(
    is_moving_forward: bool,
    previous_page_border_box_center: Vec2,
    draggable: &DraggableDimension,
    is_over: &DroppableDimension,
    dimensions: &DimensionMap,
    viewport: &Viewport,
    after_critical: &LiftEffect,
) -> DndResult<Option<MoveResult>> {
    let Some(destination) = get_best_cross_axis_droppable(
        is_moving_forward,
        previous_page_border_box_center,
        is_over,
        dimensions,
        viewport,
    ) else {
        return Ok(None);
    };

    let inside_destination = dimensions.inside(destination.id());
    let move_relative_to = get_closest_draggable(
        previous_page_border_box_center,
        viewport,
        destination,
        &inside_destination,
        after_critical,
    );

    let Some(impact) = move_to_new_droppable(
        previous_page_border_box_center,
        move_relative_to,
        &inside_destination,
        draggable,
        dimensions,
        destination,
        viewport,
        after_critical,
    )?
    else {
        return Ok(None);
    };

    let page_border_box_center = get_page_border_box_center(
        &impact,
        draggable,
        Some(destination),
        dimensions,
        after_critical,
    )?;
    let client_selection =
        get_client_from_page_border_box_center(page_border_box_center, draggable, viewport);

    Ok(Some(MoveResult {
        client_selection,
        impact,
        scroll_jump_request: None,
    }))
}
