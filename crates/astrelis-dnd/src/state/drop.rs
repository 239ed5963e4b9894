//! Working out how a drag ends.

use astrelis_core::math::Vec2;

use super::action::DropAnimateArgs;
use super::{CompletedDrag, DragState, DraggingState};
use crate::config::DropTimings;
use crate::descriptor::{DraggableId, DropReason};
use crate::error::DndResult;
use crate::impact::{
    DisplacementGroups, DragImpact, ImpactLocation, get_client_border_box_center, recompute,
};
use crate::responders::DropResult;

/// The impact to settle on and whether the drop landed in a droppable.
///
/// Cancelled drags and drops over nothing go home with every displaced item
/// animating back. Combining never leaves items displaced.
pub fn get_drop_impact(state: &DraggingState, reason: DropReason) -> DndResult<(DragImpact, bool)> {
    let did_drop_inside_droppable = reason == DropReason::Drop && state.impact.at.is_some();

    if !did_drop_inside_droppable {
        let home = state.dimensions.droppable(&state.critical.droppable.id)?;
        let impact = recompute(
            &state.on_lift_impact,
            &state.viewport,
            home,
            &state.dimensions,
            Some(true),
        );
        return Ok((impact, false));
    }

    let impact = match state.impact.at {
        Some(ImpactLocation::Combine { .. }) => DragImpact {
            displaced: DisplacementGroups::default(),
            ..state.impact.clone()
        },
        _ => state.impact.clone(),
    };
    Ok((impact, true))
}

/// Offset from the dragged item's original client center to where it will
/// settle.
fn get_new_home_client_offset(state: &DraggingState, impact: &DragImpact) -> DndResult<Vec2> {
    let dimensions = &state.dimensions;
    let draggable = dimensions.draggable(&state.critical.draggable.id)?;
    let droppable = match impact.dragged_over() {
        Some(id) => dimensions.droppable(id)?,
        None => dimensions.droppable(&draggable.descriptor.droppable_id)?,
    };

    let new_client_center = get_client_border_box_center(
        impact,
        draggable,
        Some(droppable),
        dimensions,
        &state.viewport,
        &state.after_critical,
    )?;
    Ok(new_client_center - draggable.client.border_box.center())
}

/// Drop animation length in seconds for travelling from `current` to
/// `destination`.
pub fn get_drop_duration(
    current: Vec2,
    destination: Vec2,
    reason: DropReason,
    timings: &DropTimings,
) -> f32 {
    let distance = current.distance(destination);

    if distance <= 0.0 {
        return timings.min_drop_time;
    }
    if distance >= timings.max_drop_time_at_distance {
        return timings.max_drop_time;
    }

    let percentage = distance / timings.max_drop_time_at_distance;
    let duration = timings.min_drop_time + timings.drop_time_range() * percentage;
    let with_modifier = match reason {
        DropReason::Cancel => duration * timings.cancel_drop_modifier,
        DropReason::Drop => duration,
    };
    (with_modifier * 100.0).round() / 100.0
}

/// How a drop should finish.
#[derive(Debug, Clone)]
pub enum DropOutcome {
    /// The item is already where it belongs.
    Complete(CompletedDrag),
    Animate(DropAnimateArgs),
}

/// Decide the result of dropping now.
pub fn plan_drop(
    state: &DraggingState,
    reason: DropReason,
    timings: &DropTimings,
) -> DndResult<DropOutcome> {
    let (impact, did_drop_inside_droppable) = get_drop_impact(state, reason)?;
    let critical = &state.critical;

    let (destination, combine) = if did_drop_inside_droppable {
        (impact.destination().cloned(), impact.combine().cloned())
    } else {
        (None, None)
    };

    let result = DropResult {
        draggable_id: critical.draggable.id.clone(),
        item_type: critical.draggable.item_type.clone(),
        source: critical.home_location(),
        destination,
        combine,
        reason,
        mode: state.movement_mode,
    };

    let new_home_client_offset = get_new_home_client_offset(state, &impact)?;
    let is_animation_required =
        state.current.client.offset != new_home_client_offset || result.combine.is_some();

    let completed = CompletedDrag {
        critical: critical.clone(),
        result,
        impact,
        after_critical: state.after_critical.clone(),
    };

    if !is_animation_required {
        return Ok(DropOutcome::Complete(completed));
    }

    let drop_duration = get_drop_duration(
        state.current.client.offset,
        new_home_client_offset,
        reason,
        timings,
    );
    Ok(DropOutcome::Animate(DropAnimateArgs {
        completed,
        drop_duration,
        new_home_client_offset,
    }))
}

/// Whether a new drag of `id` may start.
///
/// A drag can start while another item's drop is animating, unless that drag
/// was cancelled.
pub fn can_start_drag(state: &DragState, id: &DraggableId) -> bool {
    match state {
        DragState::Idle(_) => true,
        DragState::DropAnimating(animating) => {
            let result = &animating.completed.result;
            &result.draggable_id != id && result.reason == DropReason::Drop
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_duration_bounds() {
        let timings = DropTimings::default();
        let origin = Vec2::ZERO;

        assert_eq!(get_drop_duration(origin, origin, DropReason::Drop, &timings), 0.33);
        assert_eq!(
            get_drop_duration(origin, Vec2::new(0.0, 2000.0), DropReason::Drop, &timings),
            0.55
        );
        assert_eq!(
            get_drop_duration(origin, Vec2::new(0.0, 1500.0), DropReason::Cancel, &timings),
            0.55
        );
    }

    #[test]
    fn test_drop_duration_interpolates() {
        let timings = DropTimings::default();
        let halfway = Vec2::new(0.0, 750.0);

        // 0.33 + 0.22 * 0.5
        assert_eq!(get_drop_duration(Vec2::ZERO, halfway, DropReason::Drop, &timings), 0.44);
        // 0.44 * 0.6 = 0.264
        assert_eq!(get_drop_duration(Vec2::ZERO, halfway, DropReason::Cancel, &timings), 0.26);
    }
}
