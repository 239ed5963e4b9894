//! Keyboard driven scrolling.

use astrelis_core::math::Vec2;

use super::can_scroll::{
    can_scroll_droppable, can_scroll_window, get_droppable_overlap, get_window_overlap,
};
use crate::descriptor::DroppableId;
use crate::dimension::DroppableDimension;
use crate::error::{DndError, DndResult};
use crate::state::DraggingState;
use crate::viewport::Viewport;

/// Where a scroll jump request ends up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JumpPlan {
    pub droppable_scroll: Option<(DroppableId, Vec2)>,
    pub window_scroll: Option<Vec2>,
    /// Client selection to move to for whatever could not be scrolled.
    pub move_to: Option<Vec2>,
}

/// Returns the scroll applied and what is left over.
fn droppable_as_much_as_it_can(
    droppable: &DroppableDimension,
    change: Vec2,
) -> (Option<Vec2>, Option<Vec2>) {
    if !can_scroll_droppable(droppable, change) {
        return (None, Some(change));
    }
    match get_droppable_overlap(droppable, change) {
        None => (Some(change), None),
        Some(overlap) => {
            let can_scroll = change - overlap;
            (Some(can_scroll), Some(change - can_scroll))
        }
    }
}

fn window_as_much_as_it_can(
    is_window_scroll_allowed: bool,
    viewport: &Viewport,
    change: Vec2,
) -> (Option<Vec2>, Option<Vec2>) {
    if !is_window_scroll_allowed || !can_scroll_window(viewport, change) {
        return (None, Some(change));
    }
    match get_window_overlap(viewport, change) {
        None => (Some(change), None),
        Some(overlap) => {
            let can_scroll = change - overlap;
            (Some(can_scroll), Some(change - can_scroll))
        }
    }
}

/// Split the pending jump request between the destination, the window and
/// the pointer.
pub fn plan_jump(state: &DraggingState) -> DndResult<Option<JumpPlan>> {
    let Some(request) = state.scroll_jump_request else {
        return Ok(None);
    };
    let Some(destination) = state.impact.dragged_over() else {
        return Err(DndError::invariant(
            "Cannot perform a jump scroll when there is no destination",
        ));
    };
    let droppable = state.dimensions.droppable(destination)?;

    let mut plan = JumpPlan::default();
    let (droppable_scroll, droppable_remainder) = droppable_as_much_as_it_can(droppable, request);
    plan.droppable_scroll = droppable_scroll.map(|change| (destination.clone(), change));
    let Some(droppable_remainder) = droppable_remainder else {
        return Ok(Some(plan));
    };

    let (window_scroll, window_remainder) = window_as_much_as_it_can(
        state.is_window_scroll_allowed,
        &state.viewport,
        droppable_remainder,
    );
    plan.window_scroll = window_scroll;
    plan.move_to = window_remainder.map(|remainder| state.current.client.selection + remainder);
    Ok(Some(plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Critical, DraggableDescriptor, DroppableDescriptor, MovementMode};
    use crate::dimension::{
        ClosestScrollable, DimensionMap, DraggableDimension, DroppableDimensionArgs,
    };
    use crate::geometry::{Axis, BoxModel, Rect};
    use crate::state::{Action, DragState, InitialPublishArgs, reduce};

    const SELECTION: Vec2 = Vec2::new(100.0, 75.0);

    /// Six 50px items in a 200px tall container that can scroll 100px, in
    /// a 200px tall window that can scroll 200px. Item `b` is lifted.
    fn lifted() -> DraggingState {
        let droppable_descriptor = DroppableDescriptor::new("list");
        let frame_client = BoxModel::from_border_box(Rect::from_size(0.0, 0.0, 200.0, 200.0));
        let client = BoxModel::from_border_box(Rect::from_size(0.0, 0.0, 200.0, 300.0));
        let droppable = DroppableDimension::new(DroppableDimensionArgs {
            descriptor: droppable_descriptor.clone(),
            is_enabled: true,
            is_combine_enabled: false,
            is_fixed_on_page: false,
            axis: Axis::Vertical,
            client,
            page: client,
            closest: Some(ClosestScrollable {
                client: frame_client,
                page: frame_client,
                scroll_size: Vec2::new(200.0, 300.0),
                scroll: Vec2::ZERO,
                should_clip_subject: true,
            }),
        });

        let draggables: Vec<_> = ["a", "b", "c", "d", "e", "f"]
            .iter()
            .enumerate()
            .map(|(index, id)| {
                let rect = Rect::from_size(0.0, 50.0 * index as f32, 200.0, 50.0);
                DraggableDimension::new(
                    DraggableDescriptor::new(*id, index, "list"),
                    BoxModel::from_border_box(rect),
                    Vec2::ZERO,
                )
            })
            .collect();
        let critical = Critical {
            draggable: draggables[1].descriptor.clone(),
            droppable: droppable_descriptor,
        };

        let state = reduce(
            DragState::default(),
            Action::InitialPublish(InitialPublishArgs {
                critical,
                dimensions: DimensionMap::from_parts(draggables, [droppable]),
                client_selection: SELECTION,
                movement_mode: MovementMode::Snap,
                viewport: Viewport::new(
                    Vec2::new(1000.0, 200.0),
                    Vec2::ZERO,
                    Vec2::new(1000.0, 400.0),
                ),
            }),
        )
        .unwrap();
        let DragState::Dragging(state) = state else {
            panic!("expected dragging");
        };
        state
    }

    fn with_scrolls(frame_scroll: f32, window_scroll: f32, request: f32) -> DraggingState {
        let mut state = lifted();
        state
            .dimensions
            .droppable_mut(&"list".into())
            .unwrap()
            .scroll_to(Vec2::new(0.0, frame_scroll))
            .unwrap();
        state.viewport = state.viewport.scrolled_to(Vec2::new(0.0, window_scroll));
        state.scroll_jump_request = Some(Vec2::new(0.0, request));
        state
    }

    #[test]
    fn test_no_request_no_plan() {
        assert_eq!(plan_jump(&lifted()).unwrap(), None);
    }

    #[test]
    fn test_droppable_takes_whole_request() {
        let plan = plan_jump(&with_scrolls(0.0, 0.0, 50.0)).unwrap().unwrap();
        assert_eq!(
            plan.droppable_scroll,
            Some((DroppableId::new("list"), Vec2::new(0.0, 50.0)))
        );
        assert_eq!(plan.window_scroll, None);
        assert_eq!(plan.move_to, None);
    }

    #[test]
    fn test_window_takes_what_droppable_cannot() {
        // Container already at its max scroll
        let plan = plan_jump(&with_scrolls(100.0, 0.0, 50.0)).unwrap().unwrap();
        assert_eq!(plan.droppable_scroll, None);
        assert_eq!(plan.window_scroll, Some(Vec2::new(0.0, 50.0)));
        assert_eq!(plan.move_to, None);
    }

    #[test]
    fn test_request_split_between_droppable_and_window() {
        // 20px left in the container, the window takes the other 30px
        let plan = plan_jump(&with_scrolls(80.0, 0.0, 50.0)).unwrap().unwrap();
        assert_eq!(
            plan.droppable_scroll,
            Some((DroppableId::new("list"), Vec2::new(0.0, 20.0)))
        );
        assert_eq!(plan.window_scroll, Some(Vec2::new(0.0, 30.0)));
        assert_eq!(plan.move_to, None);
    }

    #[test]
    fn test_leftover_moves_the_selection() {
        // Window has 20px left, the remaining 30px moves the pointer
        let plan = plan_jump(&with_scrolls(100.0, 180.0, 50.0)).unwrap().unwrap();
        assert_eq!(plan.droppable_scroll, None);
        assert_eq!(plan.window_scroll, Some(Vec2::new(0.0, 20.0)));
        assert_eq!(plan.move_to, Some(SELECTION + Vec2::new(0.0, 30.0)));
    }

    #[test]
    fn test_nothing_can_scroll() {
        let plan = plan_jump(&with_scrolls(100.0, 200.0, 50.0)).unwrap().unwrap();
        assert_eq!(plan.droppable_scroll, None);
        assert_eq!(plan.window_scroll, None);
        assert_eq!(plan.move_to, Some(SELECTION + Vec2::new(0.0, 50.0)));

        // A fixed list keeps the window still even when it has room
        let mut state = with_scrolls(100.0, 0.0, 50.0);
        state.is_window_scroll_allowed = false;
        let plan = plan_jump(&state).unwrap().unwrap();
        assert_eq!(plan.window_scroll, None);
        assert_eq!(plan.move_to, Some(SELECTION + Vec2::new(0.0, 50.0)));
    }
}
