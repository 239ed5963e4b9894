//! Folding a virtual-list batch into a live drag.

use astrelis_core::profiling::profile_function;

use super::DraggingState;
use super::action::Published;
use crate::dimension::DraggableDimension;
use crate::error::{DndError, DndResult};
use crate::impact::{get_drag_impact, get_lift_effect};

/// Additions were measured against the scroll at the time they mounted;
/// shift them back to lift-time coordinates.
fn adjust_addition(
    state: &DraggingState,
    draggable: &DraggableDimension,
) -> DndResult<DraggableDimension> {
    let droppable = state.dimensions.droppable(&draggable.descriptor.droppable_id)?;
    let Some(frame) = droppable.frame.as_ref() else {
        return Err(DndError::invariant(format!(
            "Virtual droppable {} must have a frame",
            droppable.id()
        )));
    };

    let viewport = &state.viewport;
    let total_change = viewport.scroll.diff.value + frame.scroll.diff.value;
    Ok(draggable.offset_by(total_change, viewport.scroll.initial))
}

/// Apply `published` and recompute the lift effect and impact against the
/// new dimensions.
pub fn publish_while_dragging_in_virtual(
    mut state: DraggingState,
    published: Published,
) -> DndResult<DraggingState> {
    profile_function!();

    for modified in &published.modified {
        state
            .dimensions
            .droppable_mut(&modified.droppable_id)?
            .scroll_to(modified.scroll)?;
    }

    let additions = published
        .additions
        .iter()
        .map(|addition| adjust_addition(&state, addition))
        .collect::<DndResult<Vec<_>>>()?;
    for addition in additions {
        state.dimensions.insert_draggable(addition);
    }
    for removal in &published.removals {
        state.dimensions.remove_draggable(removal);
    }

    let draggable = state.dimensions.draggable(&state.critical.draggable.id)?;
    let home = state.dimensions.droppable(&state.critical.droppable.id)?;
    let (on_lift_impact, after_critical) =
        get_lift_effect(draggable, home, &state.dimensions, &state.viewport)?;

    let was_over_combine_enabled = state
        .impact
        .dragged_over()
        .and_then(|id| state.dimensions.droppables().get(id))
        .is_some_and(|droppable| droppable.is_combine_enabled);
    let previous_impact = if was_over_combine_enabled {
        &state.impact
    } else {
        &on_lift_impact
    };

    let impact = get_drag_impact(
        state.current.page.offset,
        draggable,
        &state.dimensions,
        previous_impact,
        &state.viewport,
        &after_critical,
    )?;

    state.impact = impact;
    state.on_lift_impact = on_lift_impact;
    state.after_critical = after_critical;
    state.force_should_animate = Some(false);
    Ok(state)
}
