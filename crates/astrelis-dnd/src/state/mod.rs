//! The drag state machine.
//!
//! [`DragState`] is only ever advanced by [`reduce`] in response to an
//! [`Action`]. Everything else reads snapshots of it.

mod action;
mod drop;
mod publish;
mod reducer;
mod update;

use std::fmt;

use astrelis_core::math::Vec2;

use crate::descriptor::{Critical, DropReason, MovementMode};
use crate::dimension::DimensionMap;
use crate::impact::{DragImpact, LiftEffect};
use crate::responders::DropResult;
use crate::viewport::Viewport;

pub use action::{Action, DropAnimateArgs, InitialPublishArgs, Published, PublishedScroll};
pub use drop::{DropOutcome, can_start_drag, get_drop_duration, get_drop_impact, plan_drop};
pub use publish::publish_while_dragging_in_virtual;
pub use reducer::reduce;
pub use update::{Update, refresh_snap, update};

/// Name of a [`DragState`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Dragging,
    Collecting,
    DropPending,
    DropAnimating,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "IDLE",
            Phase::Dragging => "DRAGGING",
            Phase::Collecting => "COLLECTING",
            Phase::DropPending => "DROP_PENDING",
            Phase::DropAnimating => "DROP_ANIMATING",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selection, border-box center and offset in one coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemPositions {
    pub selection: Vec2,
    pub border_box_center: Vec2,
    pub offset: Vec2,
}

/// Positions of the dragged item in client and page space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragPositions {
    pub client: ItemPositions,
    pub page: ItemPositions,
}

/// A finished drag, kept around until the next drag starts.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedDrag {
    pub critical: Critical,
    pub result: DropResult,
    pub impact: DragImpact,
    pub after_critical: LiftEffect,
}

/// Payload shared by every phase where a drag is in progress.
#[derive(Debug, Clone)]
pub struct DraggingState {
    pub critical: Critical,
    pub movement_mode: MovementMode,
    pub dimensions: DimensionMap,
    pub initial: DragPositions,
    pub current: DragPositions,
    pub impact: DragImpact,
    pub viewport: Viewport,
    pub after_critical: LiftEffect,
    pub on_lift_impact: DragImpact,
    /// False when any droppable is fixed on the page.
    pub is_window_scroll_allowed: bool,
    pub scroll_jump_request: Option<Vec2>,
    pub force_should_animate: Option<bool>,
}

impl DraggingState {
    #[inline]
    pub fn is_snapping(&self) -> bool {
        self.movement_mode == MovementMode::Snap
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdleState {
    pub completed: Option<CompletedDrag>,
    /// Set by a hard abort so hosts can skip drop animations.
    pub should_flush: bool,
}

#[derive(Debug, Clone)]
pub struct DropPendingState {
    pub dragging: DraggingState,
    /// Still waiting for a virtual collection to land.
    pub is_waiting: bool,
    pub reason: DropReason,
}

#[derive(Debug, Clone)]
pub struct DropAnimatingState {
    pub completed: CompletedDrag,
    /// Seconds.
    pub drop_duration: f32,
    pub new_home_client_offset: Vec2,
    pub dimensions: DimensionMap,
}

/// The single authoritative drag state.
#[derive(Debug, Clone)]
pub enum DragState {
    Idle(IdleState),
    Dragging(DraggingState),
    /// Virtual-list dimensions are being collected.
    Collecting(DraggingState),
    DropPending(DropPendingState),
    DropAnimating(DropAnimatingState),
}

impl Default for DragState {
    fn default() -> Self {
        DragState::Idle(IdleState::default())
    }
}

impl DragState {
    pub fn phase(&self) -> Phase {
        match self {
            DragState::Idle(_) => Phase::Idle,
            DragState::Dragging(_) => Phase::Dragging,
            DragState::Collecting(_) => Phase::Collecting,
            DragState::DropPending(_) => Phase::DropPending,
            DragState::DropAnimating(_) => Phase::DropAnimating,
        }
    }

    /// Whether a drag is in progress, not counting a drop animation.
    pub fn is_dragging(&self) -> bool {
        matches!(
            self,
            DragState::Dragging(_) | DragState::Collecting(_) | DragState::DropPending(_)
        )
    }

    /// The in-progress drag payload, if any.
    pub fn dragging(&self) -> Option<&DraggingState> {
        match self {
            DragState::Dragging(state) | DragState::Collecting(state) => Some(state),
            DragState::DropPending(pending) => Some(&pending.dragging),
            _ => None,
        }
    }

    /// The last completed drag, while idle or animating a drop.
    pub fn completed(&self) -> Option<&CompletedDrag> {
        match self {
            DragState::Idle(idle) => idle.completed.as_ref(),
            DragState::DropAnimating(animating) => Some(&animating.completed),
            _ => None,
        }
    }
}
