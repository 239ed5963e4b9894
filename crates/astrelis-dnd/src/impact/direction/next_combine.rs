use super::super::types::{DragImpact, ImpactLocation};
use crate::descriptor::{Combine, DraggableId};
use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::error::{DndError, DndResult};

/// Step from a reorder position onto the neighbouring item to combine.
pub fn move_to_next_combine(
    is_moving_forward: bool,
    draggable: &DraggableDimension,
    destination: &DroppableDimension,
    inside_destination: &[&DraggableDimension],
    previous_impact: &DragImpact,
) -> DndResult<Option<DragImpact>> {
    if !destination.is_combine_enabled {
        return Ok(None);
    }
    if previous_impact.destination().is_none() {
        return Ok(None);
    }

    let combine_with = |target: &DraggableId| DragImpact {
        displaced: previous_impact.displaced.clone(),
        displaced_by: previous_impact.displaced_by,
        at: Some(ImpactLocation::Combine {
            combine: Combine {
                draggable_id: target.clone(),
                droppable_id: destination.id().clone(),
            },
        }),
    };

    let without_draggable: Vec<&DraggableDimension> = inside_destination
        .iter()
        .copied()
        .filter(|item| item.id() != draggable.id())
        .collect();
    let closest_displaced = previous_impact.displaced.all.first();

    if is_moving_forward {
        return Ok(closest_displaced.map(|id| combine_with(id)));
    }

    let Some(closest_displaced) = closest_displaced else {
        return Ok(without_draggable.last().map(|item| combine_with(item.id())));
    };

    let Some(index_of_closest) = without_draggable
        .iter()
        .position(|item| item.id() == closest_displaced)
    else {
        return Err(DndError::invariant("Could not find displaced item in set"));
    };

    Ok(index_of_closest
        .checked_sub(1)
        .map(|before| combine_with(without_draggable[before].id())))
}
