//! Keyboard driven moves.

mod cross_axis;
mod next_combine;
mod next_index;
mod next_place;

use astrelis_core::math::Vec2;
use astrelis_core::profiling::profile_function;

use super::types::DragImpact;
use crate::error::DndResult;
use crate::geometry::Axis;
use crate::state::DraggingState;

pub use cross_axis::{get_best_cross_axis_droppable, get_closest_draggable, move_cross_axis};
pub use next_combine::move_to_next_combine;
pub use next_index::move_to_next_index;
pub use next_place::move_to_next_place;

/// A discrete keyboard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    #[inline]
    pub fn is_forward(self) -> bool {
        matches!(self, MoveDirection::Down | MoveDirection::Right)
    }

    /// Whether this step moves along `axis`.
    #[inline]
    pub fn is_on_axis(self, axis: Axis) -> bool {
        match axis {
            Axis::Vertical => matches!(self, MoveDirection::Up | MoveDirection::Down),
            Axis::Horizontal => matches!(self, MoveDirection::Left | MoveDirection::Right),
        }
    }
}

/// Outcome of a keyboard step.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    pub client_selection: Vec2,
    pub impact: DragImpact,
    /// Set when the destination must scroll before the item can be seen at
    /// its new location.
    pub scroll_jump_request: Option<Vec2>,
}

/// Move one step in `direction`. `None` when no movement is possible.
pub fn move_in_direction(
    state: &DraggingState,
    direction: MoveDirection,
) -> DndResult<Option<MoveResult>> {
    profile_function!();

    let dimensions = &state.dimensions;
    let is_actually_over = match state.impact.dragged_over() {
        Some(id) => Some(dimensions.droppable(id)?),
        None => None,
    };
    let home = dimensions.droppable(&state.critical.droppable.id)?;
    let is_over = is_actually_over.unwrap_or(home);

    let is_moving_on_main_axis = direction.is_on_axis(is_over.axis);
    if is_moving_on_main_axis && is_actually_over.is_none() {
        return Ok(None);
    }

    let is_moving_forward = direction.is_forward();
    let draggable = dimensions.draggable(&state.critical.draggable.id)?;

    if is_moving_on_main_axis {
        move_to_next_place(
            is_moving_forward,
            draggable,
            is_over,
            dimensions,
            &state.impact,
            &state.viewport,
            state.current.page.border_box_center,
            state.current.client.selection,
            &state.after_critical,
        )
    } else {
        move_cross_axis(
            is_moving_forward,
            state.current.page.border_box_center,
            draggable,
            is_over,
            dimensions,
            &state.viewport,
            &state.after_critical,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_on_axis() {
        assert!(MoveDirection::Down.is_on_axis(Axis::Vertical));
        assert!(!MoveDirection::Left.is_on_axis(Axis::Vertical));
        assert!(MoveDirection::Right.is_on_axis(Axis::Horizontal));
        assert!(MoveDirection::Right.is_forward());
        assert!(!MoveDirection::Up.is_forward());
    }
}
