use super::super::reorder::calculate_reorder_impact;
use super::super::types::{DragImpact, ImpactLocation, LiftEffect};
use crate::descriptor::{Combine, DraggableLocation};
use crate::dimension::{DimensionMap, DraggableDimension, DroppableDimension};
use crate::error::{DndError, DndResult};
use crate::viewport::Viewport;

fn from_reorder(
    is_moving_forward: bool,
    is_in_home_list: bool,
    location: &DraggableLocation,
    inside_destination: &[&DraggableDimension],
) -> Option<usize> {
    let first = inside_destination.first()?;
    let last = inside_destination.last()?;

    let proposed = if is_moving_forward {
        location.index + 1
    } else {
        location.index.checked_sub(1)?
    };

    let first_index = first.descriptor.index;
    let last_index = last.descriptor.index;
    let upper_bound = if is_in_home_list { last_index } else { last_index + 1 };

    if proposed < first_index || proposed > upper_bound {
        return None;
    }
    Some(proposed)
}

fn from_combine(
    is_moving_forward: bool,
    destination: &DroppableDimension,
    dimensions: &DimensionMap,
    combine: &Combine,
    after_critical: &LiftEffect,
) -> DndResult<Option<usize>> {
    if !destination.is_combine_enabled {
        return Ok(None);
    }

    let combine_with_index = dimensions.draggable(&combine.draggable_id)?.descriptor.index;

    // An item that started after the dragged one sits one slot back
    let index = if after_critical.did_start_after_critical(&combine.draggable_id) {
        if is_moving_forward {
            Some(combine_with_index)
        } else {
            combine_with_index.checked_sub(1)
        }
    } else if is_moving_forward {
        Some(combine_with_index + 1)
    } else {
        Some(combine_with_index)
    };
    Ok(index)
}

/// Step to the neighbouring reorder slot.
#[allow(clippy::too_many_arguments)]
pub fn move_to_next_index(
    is_moving_forward: bool,
    is_in_home_list: bool,
    draggable: &DraggableDimension,
    dimensions: &DimensionMap,
    destination: &DroppableDimension,
    inside_destination: &[&DraggableDimension],
    previous_impact: &DragImpact,
    viewport: &Viewport,
    after_critical: &LiftEffect,
) -> DndResult<Option<DragImpact>> {
    let new_index = match &previous_impact.at {
        None => {
            return Err(DndError::invariant(
                "Cannot move in direction without previous impact location",
            ));
        }
        Some(ImpactLocation::Reorder { destination: location }) => {
            from_reorder(is_moving_forward, is_in_home_list, location, inside_destination)
        }
        Some(ImpactLocation::Combine { combine }) => {
            from_combine(is_moving_forward, destination, dimensions, combine, after_critical)?
        }
    };

    let Some(new_index) = new_index else {
        return Ok(None);
    };

    Ok(Some(calculate_reorder_impact(
        draggable,
        inside_destination,
        destination,
        viewport,
        previous_impact.displaced_by,
        &previous_impact.displaced,
        Some(new_index),
        None,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::DraggableDescriptor;
    use crate::geometry::{BoxModel, Rect};
    use astrelis_core::math::Vec2;

    fn item(index: usize) -> DraggableDimension {
        DraggableDimension::new(
            DraggableDescriptor::new(format!("item-{index}"), index, "list"),
            BoxModel::from_border_box(Rect::from_size(0.0, index as f32 * 50.0, 100.0, 50.0)),
            Vec2::ZERO,
        )
    }

    #[test]
    fn test_from_reorder_bounds() {
        let items: Vec<_> = (0..3).map(item).collect();
        let inside: Vec<_> = items.iter().collect();
        let at = |index| DraggableLocation {
            droppable_id: "list".into(),
            index,
        };

        assert_eq!(from_reorder(true, true, &at(1), &inside), Some(2));
        // Home list cannot go past the last index
        assert_eq!(from_reorder(true, true, &at(2), &inside), None);
        // A foreign list has one extra slot at the end
        assert_eq!(from_reorder(true, false, &at(2), &inside), Some(3));
        assert_eq!(from_reorder(false, true, &at(0), &inside), None);
        assert_eq!(from_reorder(true, true, &at(0), &[]), None);
    }
}
