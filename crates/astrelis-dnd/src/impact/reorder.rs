//! Reordering the dragged item within a destination.

use super::displacement::get_displacement_groups;
use super::types::{DisplacedBy, DisplacementGroups, DragImpact, ImpactLocation, LiftEffect};
use crate::descriptor::DraggableLocation;
use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::geometry::Rect;
use crate::viewport::Viewport;

#[inline]
pub(crate) fn is_home_of(draggable: &DraggableDimension, destination: &DroppableDimension) -> bool {
    &draggable.descriptor.droppable_id == destination.id()
}

/// Index of the "go to the end" slot.
fn index_of_last_item(inside_destination: &[&DraggableDimension], in_home_list: bool) -> usize {
    match inside_destination.last() {
        None => 0,
        Some(last) if in_home_list => last.descriptor.index,
        Some(last) => last.descriptor.index + 1,
    }
}

fn at_index(
    draggable: &DraggableDimension,
    closest: Option<&DraggableDimension>,
    in_home_list: bool,
) -> Option<usize> {
    let closest = closest?;
    let index = closest.descriptor.index;
    if in_home_list && index > draggable.descriptor.index {
        return Some(index - 1);
    }
    Some(index)
}

/// Reorder impact for moving to `index`. `None` means the end of the list.
#[allow(clippy::too_many_arguments)]
pub fn calculate_reorder_impact(
    draggable: &DraggableDimension,
    inside_destination: &[&DraggableDimension],
    destination: &DroppableDimension,
    viewport: &Viewport,
    displaced_by: DisplacedBy,
    last: &DisplacementGroups,
    index: Option<usize>,
    force_should_animate: Option<bool>,
) -> DragImpact {
    let in_home_list = is_home_of(draggable, destination);
    let reorder_to = |index| {
        Some(ImpactLocation::Reorder {
            destination: DraggableLocation {
                droppable_id: destination.id().clone(),
                index,
            },
        })
    };

    let position = index.and_then(|index| {
        inside_destination
            .iter()
            .position(|item| item.descriptor.index == index)
            .map(|position| (index, position))
    });

    let Some((index, slice_from)) = position else {
        return DragImpact {
            displaced: DisplacementGroups::default(),
            displaced_by,
            at: reorder_to(index_of_last_item(inside_destination, in_home_list)),
        };
    };

    let without_dragging: Vec<&DraggableDimension> = inside_destination
        .iter()
        .copied()
        .filter(|item| item.id() != draggable.id())
        .collect();
    let impacted = without_dragging.get(slice_from..).unwrap_or(&[]);

    let displaced = get_displacement_groups(
        impacted,
        destination,
        &displaced_by,
        &viewport.frame,
        Some(last),
        force_should_animate,
    );

    DragImpact {
        displaced,
        displaced_by,
        at: reorder_to(index),
    }
}

/// Find the insertion point for the dragged item's leading edge.
pub fn get_reorder_impact(
    target_rect: &Rect,
    draggable: &DraggableDimension,
    destination: &DroppableDimension,
    inside_destination: &[&DraggableDimension],
    last: &DisplacementGroups,
    viewport: &Viewport,
    after_critical: &LiftEffect,
) -> DragImpact {
    let axis = destination.axis;
    let displaced_by = DisplacedBy::new(axis, draggable.displace_by);
    let displacement = displaced_by.value;
    let target_start = axis.start_of(target_rect);
    let target_end = axis.end_of(target_rect);

    let closest = inside_destination
        .iter()
        .copied()
        .filter(|child| child.id() != draggable.id())
        .find(|child| {
            let id = child.id();
            let child_center = axis.main(child.page.border_box.center());
            let is_displaced = last.contains(id);

            if after_critical.did_start_after_critical(id) {
                // Still displaced until the leading edge passes the center
                if is_displaced {
                    return target_end <= child_center;
                }
                return target_start < child_center - displacement;
            }
            if is_displaced {
                return target_end <= child_center + displacement;
            }
            target_start < child_center
        });

    let index = at_index(draggable, closest, is_home_of(draggable, destination));

    calculate_reorder_impact(
        draggable,
        inside_destination,
        destination,
        viewport,
        displaced_by,
        last,
        index,
        None,
    )
}
