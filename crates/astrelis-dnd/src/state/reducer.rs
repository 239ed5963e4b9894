use astrelis_core::math::Vec2;
use astrelis_core::profiling::profile_function;

use super::action::{Action, DropAnimateArgs, InitialPublishArgs};
use super::publish::publish_while_dragging_in_virtual;
use super::update::{
    Update, find_droppable, post_droppable_change, refresh_snap, remove_scroll_jump_request,
    update,
};
use super::{
    DragPositions, DragState, DraggingState, DropAnimatingState, DropPendingState, IdleState,
    ItemPositions,
};
use crate::descriptor::DroppableId;
use crate::dimension::DroppableDimension;
use crate::error::{DndError, DndResult};
use crate::impact::{MoveDirection, get_lift_effect, move_in_direction};
use crate::invariant;

fn invalid(action: &Action, state: &DragState) -> DndError {
    DndError::InvalidPhase {
        action: action.name(),
        phase: state.phase(),
    }
}

/// Run `f` on a `DRAGGING` or `COLLECTING` payload, keeping the phase.
fn while_moving(
    state: DragState,
    action: &Action,
    f: impl FnOnce(DraggingState, bool) -> DndResult<DraggingState>,
) -> DndResult<DragState> {
    match state {
        DragState::Dragging(dragging) => f(dragging, false).map(DragState::Dragging),
        DragState::Collecting(collecting) => f(collecting, true).map(DragState::Collecting),
        other => Err(invalid(action, &other)),
    }
}

fn initial_publish(args: InitialPublishArgs) -> DndResult<DraggingState> {
    let InitialPublishArgs {
        critical,
        dimensions,
        client_selection,
        movement_mode,
        viewport,
    } = args;

    let draggable = dimensions.draggable(&critical.draggable.id)?;
    let home = dimensions.droppable(&critical.droppable.id)?;

    let client = ItemPositions {
        selection: client_selection,
        border_box_center: draggable.client.border_box.center(),
        offset: Vec2::ZERO,
    };
    let page = ItemPositions {
        selection: client.selection + viewport.scroll.initial,
        border_box_center: client.border_box_center + viewport.scroll.initial,
        offset: client.offset + viewport.scroll.diff.value,
    };
    let initial = DragPositions { client, page };

    let is_window_scroll_allowed = dimensions
        .droppables()
        .values()
        .all(|droppable| !droppable.is_fixed_on_page);

    let (impact, after_critical) = get_lift_effect(draggable, home, &dimensions, &viewport)?;

    Ok(DraggingState {
        critical,
        movement_mode,
        dimensions,
        initial,
        current: initial,
        on_lift_impact: impact.clone(),
        impact,
        viewport,
        after_critical,
        is_window_scroll_allowed,
        scroll_jump_request: None,
        force_should_animate: None,
    })
}

fn set_droppable_flag(
    state: DraggingState,
    is_collecting: bool,
    id: &DroppableId,
    value: bool,
    field: fn(&mut DroppableDimension) -> &mut bool,
    label: &str,
) -> DndResult<DraggingState> {
    let Some(target) = find_droppable(&state, id) else {
        return Err(DndError::invariant(format!(
            "Cannot find droppable[id: {}] to toggle its {} state",
            id, label
        )));
    };
    let mut updated = target.clone();
    let flag = field(&mut updated);
    invariant!(
        *flag != value,
        "Trying to set droppable {} to {} but it is already {}",
        label,
        value,
        value
    );
    *flag = value;
    post_droppable_change(state, is_collecting, updated, true)
}

fn move_by_direction(state: DraggingState, direction: MoveDirection) -> DndResult<DraggingState> {
    let Some(result) = move_in_direction(&state, direction)? else {
        return Ok(state);
    };
    update(
        state,
        false,
        Update {
            client_selection: Some(result.client_selection),
            impact: Some(result.impact),
            scroll_jump_request: result.scroll_jump_request,
        },
    )
}

/// Advance the drag state by one action.
///
/// Actions that are illegal in the current phase return
/// [`DndError::InvalidPhase`]; the state is consumed either way.
pub fn reduce(state: DragState, action: Action) -> DndResult<DragState> {
    profile_function!();

    match &action {
        Action::Flush => Ok(DragState::Idle(IdleState {
            completed: None,
            should_flush: true,
        })),

        Action::InitialPublish(_) => {
            if !matches!(state, DragState::Idle(_)) {
                return Err(invalid(&action, &state));
            }
            let Action::InitialPublish(args) = action else {
                return Err(DndError::invariant("INITIAL_PUBLISH payload missing"));
            };
            initial_publish(args).map(DragState::Dragging)
        }

        Action::CollectionStarting => match state {
            DragState::Collecting(_) | DragState::DropPending(_) => Ok(state),
            DragState::Dragging(dragging) => Ok(DragState::Collecting(dragging)),
            other => Err(invalid(&action, &other)),
        },

        Action::PublishWhileDragging(_) => {
            let Action::PublishWhileDragging(published) = action else {
                return Err(DndError::invariant("PUBLISH_WHILE_DRAGGING payload missing"));
            };
            match state {
                DragState::Collecting(collecting) => {
                    publish_while_dragging_in_virtual(collecting, published)
                        .map(DragState::Dragging)
                }
                DragState::DropPending(pending) => {
                    let reason = pending.reason;
                    publish_while_dragging_in_virtual(pending.dragging, published).map(
                        |dragging| {
                            DragState::DropPending(DropPendingState {
                                dragging,
                                is_waiting: false,
                                reason,
                            })
                        },
                    )
                }
                other => Err(DndError::InvalidPhase {
                    action: "PUBLISH_WHILE_DRAGGING",
                    phase: other.phase(),
                }),
            }
        }

        Action::Move { client } => {
            if matches!(state, DragState::DropPending(_)) {
                return Ok(state);
            }
            let client = *client;
            while_moving(state, &action, |dragging, is_collecting| {
                if dragging.current.client.selection == client {
                    return Ok(dragging);
                }
                let impact = dragging.is_snapping().then(|| dragging.impact.clone());
                update(
                    dragging,
                    is_collecting,
                    Update {
                        client_selection: Some(client),
                        impact,
                        scroll_jump_request: None,
                    },
                )
            })
        }

        Action::UpdateDroppableScroll { id, new_scroll } => match state {
            DragState::Collecting(collecting) => {
                Ok(DragState::Collecting(remove_scroll_jump_request(collecting)))
            }
            DragState::DropPending(mut pending) => {
                pending.dragging = remove_scroll_jump_request(pending.dragging);
                Ok(DragState::DropPending(pending))
            }
            DragState::Dragging(dragging) => {
                let Some(target) = find_droppable(&dragging, id) else {
                    return Ok(DragState::Dragging(dragging));
                };
                let scrolled = target.scrolled(*new_scroll)?;
                post_droppable_change(dragging, false, scrolled, false).map(DragState::Dragging)
            }
            other => Err(invalid(&action, &other)),
        },

        Action::UpdateDroppableIsEnabled { id, is_enabled } => {
            if matches!(state, DragState::DropPending(_)) {
                return Ok(state);
            }
            while_moving(state, &action, |dragging, is_collecting| {
                set_droppable_flag(
                    dragging,
                    is_collecting,
                    id,
                    *is_enabled,
                    |droppable| &mut droppable.is_enabled,
                    "isEnabled",
                )
            })
        }

        Action::UpdateDroppableIsCombineEnabled {
            id,
            is_combine_enabled,
        } => {
            if matches!(state, DragState::DropPending(_)) {
                return Ok(state);
            }
            while_moving(state, &action, |dragging, is_collecting| {
                set_droppable_flag(
                    dragging,
                    is_collecting,
                    id,
                    *is_combine_enabled,
                    |droppable| &mut droppable.is_combine_enabled,
                    "isCombineEnabled",
                )
            })
        }

        Action::MoveByWindowScroll { new_scroll } => {
            if matches!(state, DragState::DropPending(_) | DragState::DropAnimating(_)) {
                return Ok(state);
            }
            let new_scroll = *new_scroll;
            while_moving(state, &action, |mut dragging, is_collecting| {
                invariant!(
                    dragging.is_window_scroll_allowed,
                    "Window scrolling is currently not supported for fixed lists"
                );
                if dragging.viewport.scroll.current == new_scroll {
                    return Ok(remove_scroll_jump_request(dragging));
                }
                dragging.viewport = dragging.viewport.scrolled_to(new_scroll);
                if dragging.is_snapping() {
                    return refresh_snap(dragging, is_collecting);
                }
                update(dragging, is_collecting, Update::default())
            })
        }

        Action::UpdateViewportMaxScroll { max_scroll } => match state {
            DragState::Dragging(_) | DragState::Collecting(_) => {
                let max_scroll = *max_scroll;
                while_moving(state, &action, |mut dragging, _| {
                    dragging.viewport.scroll.max = max_scroll;
                    Ok(dragging)
                })
            }
            other => Ok(other),
        },

        Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => {
            let direction = match &action {
                Action::MoveUp => MoveDirection::Up,
                Action::MoveDown => MoveDirection::Down,
                Action::MoveLeft => MoveDirection::Left,
                _ => MoveDirection::Right,
            };
            match state {
                DragState::Collecting(_) | DragState::DropPending(_) => Ok(state),
                DragState::Dragging(dragging) => {
                    move_by_direction(dragging, direction).map(DragState::Dragging)
                }
                other => Err(invalid(&action, &other)),
            }
        }

        Action::DropPending { reason } => match state {
            DragState::Dragging(dragging) | DragState::Collecting(dragging) => {
                Ok(DragState::DropPending(DropPendingState {
                    dragging,
                    is_waiting: true,
                    reason: *reason,
                }))
            }
            other => Err(invalid(&action, &other)),
        },

        Action::DropAnimate(_) => {
            let dimensions = match state {
                DragState::Dragging(dragging) => dragging.dimensions,
                DragState::DropPending(pending) => pending.dragging.dimensions,
                other => return Err(invalid(&action, &other)),
            };
            let Action::DropAnimate(DropAnimateArgs {
                completed,
                drop_duration,
                new_home_client_offset,
            }) = action
            else {
                return Err(DndError::invariant("DROP_ANIMATE payload missing"));
            };
            Ok(DragState::DropAnimating(DropAnimatingState {
                completed,
                drop_duration,
                new_home_client_offset,
                dimensions,
            }))
        }

        Action::DropComplete { .. } => {
            let Action::DropComplete { completed } = action else {
                return Err(DndError::invariant("DROP_COMPLETE payload missing"));
            };
            Ok(DragState::Idle(IdleState {
                completed: Some(completed),
                should_flush: false,
            }))
        }

        // Handled by the engine before reaching the reducer.
        Action::Lift { .. }
        | Action::BeforeInitialCapture { .. }
        | Action::Drop { .. }
        | Action::DropAnimationFinished => Ok(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::DropReason;
    use crate::state::Phase;

    #[test]
    fn test_flush_always_returns_to_idle() {
        let state = reduce(DragState::default(), Action::Flush).unwrap();
        let DragState::Idle(idle) = state else {
            panic!("expected idle");
        };
        assert!(idle.should_flush);
        assert!(idle.completed.is_none());
    }

    #[test]
    fn test_actions_rejected_while_idle() {
        let err = reduce(DragState::default(), Action::Move { client: Vec2::ONE }).unwrap_err();
        assert_eq!(
            err,
            DndError::InvalidPhase {
                action: "MOVE",
                phase: Phase::Idle
            }
        );

        let err = reduce(
            DragState::default(),
            Action::DropPending {
                reason: DropReason::Drop,
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "DROP_PENDING not permitted in phase IDLE");
    }

    #[test]
    fn test_late_viewport_change_is_ignored() {
        let state = reduce(
            DragState::default(),
            Action::UpdateViewportMaxScroll {
                max_scroll: Vec2::new(0.0, 100.0),
            },
        )
        .unwrap();
        assert_eq!(state.phase(), Phase::Idle);
    }
}
