//! Re-deriving positions and impact after something changed.

use astrelis_core::math::Vec2;

use super::{DragPositions, DraggingState, ItemPositions};
use crate::descriptor::{DroppableId, MovementMode};
use crate::dimension::DroppableDimension;
use crate::error::{DndError, DndResult};
use crate::impact::{
    DragImpact, get_client_border_box_center, get_drag_impact, recompute,
    recompute_placeholders,
};
use crate::invariant;

/// Overrides for [`update`]. Anything left `None` is taken from the state or
/// recomputed.
#[derive(Debug, Clone, Default)]
pub struct Update {
    pub client_selection: Option<Vec2>,
    pub impact: Option<DragImpact>,
    pub scroll_jump_request: Option<Vec2>,
}

/// Recompute positions from the client selection, then the impact.
///
/// While collecting only positions change; the impact waits for the
/// collected dimensions.
pub fn update(
    mut state: DraggingState,
    is_collecting: bool,
    overrides: Update,
) -> DndResult<DraggingState> {
    let client_selection = overrides
        .client_selection
        .unwrap_or(state.current.client.selection);
    let scroll = &state.viewport.scroll;

    let offset = client_selection - state.initial.client.selection;
    let client = ItemPositions {
        selection: client_selection,
        border_box_center: state.initial.client.border_box_center + offset,
        offset,
    };
    let page = ItemPositions {
        selection: client.selection + scroll.current,
        border_box_center: client.border_box_center + scroll.current,
        offset: client.offset + scroll.diff.value,
    };
    state.current = DragPositions { client, page };

    if is_collecting {
        return Ok(state);
    }

    let impact = match overrides.impact {
        Some(impact) => impact,
        None => {
            let draggable = state.dimensions.draggable(&state.critical.draggable.id)?;
            get_drag_impact(
                page.offset,
                draggable,
                &state.dimensions,
                &state.impact,
                &state.viewport,
                &state.after_critical,
            )?
        }
    };

    recompute_placeholders(
        &mut state.dimensions,
        &state.critical.draggable.id,
        &state.impact,
        &impact,
    )?;

    state.impact = impact;
    state.scroll_jump_request = overrides.scroll_jump_request;
    state.force_should_animate = overrides.scroll_jump_request.map(|_| false);
    Ok(state)
}

/// Re-test displacement visibility in snap mode and pin the dragged item to
/// where the impact says it belongs.
pub fn refresh_snap(state: DraggingState, is_collecting: bool) -> DndResult<DraggingState> {
    invariant!(
        state.movement_mode == MovementMode::Snap,
        "Can only refresh snap in SNAP movement mode"
    );
    let Some(is_over) = state.impact.dragged_over() else {
        return Err(DndError::invariant(
            "Must be over a destination in SNAP movement mode",
        ));
    };

    let destination = state.dimensions.droppable(is_over)?;
    let draggable = state.dimensions.draggable(&state.critical.draggable.id)?;
    let impact = recompute(
        &state.impact,
        &state.viewport,
        destination,
        &state.dimensions,
        None,
    );
    let client_selection = get_client_border_box_center(
        &impact,
        draggable,
        Some(destination),
        &state.dimensions,
        &state.viewport,
        &state.after_critical,
    )?;

    update(
        state,
        is_collecting,
        Update {
            client_selection: Some(client_selection),
            impact: Some(impact),
            scroll_jump_request: None,
        },
    )
}

/// Swap in a changed droppable and recompute.
///
/// Snap drags keep their impact when a droppable scrolls, but an enabled
/// change needs a full recompute so the item can leave a disabled list.
pub(super) fn post_droppable_change(
    mut state: DraggingState,
    is_collecting: bool,
    updated: DroppableDimension,
    is_enabled_change: bool,
) -> DndResult<DraggingState> {
    state.dimensions.insert_droppable(updated);

    if state.is_snapping() && !is_enabled_change {
        return refresh_snap(state, is_collecting);
    }
    update(state, is_collecting, Update::default())
}

/// Clear a pending jump request once a scroll has landed.
pub(super) fn remove_scroll_jump_request(mut state: DraggingState) -> DraggingState {
    if state.is_snapping() {
        state.scroll_jump_request = None;
    }
    state
}

/// Look up a droppable for patching. Unknown ids are reported by the caller.
pub(super) fn find_droppable<'a>(
    state: &'a DraggingState,
    id: &DroppableId,
) -> Option<&'a DroppableDimension> {
    state.dimensions.droppables().get(id)
}
