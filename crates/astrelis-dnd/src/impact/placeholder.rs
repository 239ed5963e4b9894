//! Placeholder space in foreign droppables.

use astrelis_core::math::Vec2;

use super::types::DragImpact;
use crate::descriptor::{DraggableId, DroppableMode};
use crate::dimension::{DimensionMap, DraggableDimension, DroppableDimension, PlaceholderInSubject};
use crate::error::{DndError, DndResult};
use crate::invariant;

fn required_growth(
    droppable: &DroppableDimension,
    placeholder_size: Vec2,
    dimensions: &DimensionMap,
) -> Option<Vec2> {
    let axis = droppable.axis;
    if droppable.descriptor.mode == DroppableMode::Virtual {
        return Some(axis.point(axis.main(placeholder_size), 0.0));
    }

    let available_space = axis.size_of(&droppable.subject.page.content_box);
    let space_used: f32 = dimensions
        .inside(droppable.id())
        .iter()
        .map(|item| axis.size_of(&item.client.margin_box))
        .sum();
    let needs_to_grow_by = space_used + axis.main(placeholder_size) - available_space;

    if needs_to_grow_by <= 0.0 {
        return None;
    }
    Some(axis.point(needs_to_grow_by, 0.0))
}

/// Grow `droppable` to make room for the dragged item.
pub fn add_placeholder(
    droppable: &DroppableDimension,
    draggable: &DraggableDimension,
    dimensions: &DimensionMap,
) -> DndResult<DroppableDimension> {
    invariant!(
        droppable.subject.with_placeholder.is_none(),
        "Cannot add placeholder size to a subject when it already has one"
    );

    let placeholder_size = draggable.displace_by;
    let increased_by = required_growth(droppable, placeholder_size, dimensions);
    let added = PlaceholderInSubject {
        increased_by,
        placeholder_size,
        old_frame_max_scroll: droppable.frame.map(|frame| frame.scroll.max),
    };

    let mut updated = droppable.clone();
    if let Some(frame) = updated.frame {
        let max = match increased_by {
            Some(growth) => frame.scroll.max + growth,
            None => frame.scroll.max,
        };
        updated.frame = Some(frame.with_max_scroll(max));
    }
    updated.subject.with_placeholder = Some(added);
    updated.recompute_subject();
    Ok(updated)
}

/// Undo [`add_placeholder`].
pub fn remove_placeholder(droppable: &DroppableDimension) -> DndResult<DroppableDimension> {
    let Some(added) = droppable.subject.with_placeholder else {
        return Err(DndError::invariant(
            "Cannot remove placeholder from subject when there was none",
        ));
    };

    let mut updated = droppable.clone();
    if let Some(frame) = updated.frame {
        let Some(old_max_scroll) = added.old_frame_max_scroll else {
            return Err(DndError::invariant(
                "Expected a framed droppable to keep its old max scroll for placeholder removal",
            ));
        };
        updated.frame = Some(frame.with_max_scroll(old_max_scroll));
    }
    updated.subject.with_placeholder = None;
    updated.recompute_subject();
    Ok(updated)
}

/// Move placeholder space to follow the impact.
///
/// Leaving a droppable removes its placeholder; entering a foreign one adds
/// it. The home list never gets one.
pub fn recompute_placeholders(
    dimensions: &mut DimensionMap,
    draggable_id: &DraggableId,
    previous_impact: &DragImpact,
    impact: &DragImpact,
) -> DndResult<()> {
    let last = previous_impact.dragged_over();
    let now = impact.dragged_over();

    if let Some(last) = last.filter(|last| Some(*last) != now) {
        let last_droppable = dimensions.droppable(last)?;
        if last_droppable.subject.with_placeholder.is_some() {
            let updated = remove_placeholder(last_droppable)?;
            dimensions.insert_droppable(updated);
        }
    }

    let Some(is_over) = now else {
        return Ok(());
    };
    let draggable = dimensions.draggable(draggable_id)?;
    let droppable = dimensions.droppable(is_over)?;
    if &draggable.descriptor.droppable_id == droppable.id()
        || droppable.subject.with_placeholder.is_some()
    {
        return Ok(());
    }

    let updated = add_placeholder(droppable, draggable, dimensions)?;
    dimensions.insert_droppable(updated);
    Ok(())
}
