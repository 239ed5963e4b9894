use astrelis_core::math::Vec2;

use crate::descriptor::{Critical, DraggableId, DropReason, DroppableId, MovementMode};
use crate::dimension::{DimensionMap, DraggableDimension};
use crate::viewport::Viewport;

use super::CompletedDrag;

/// Everything measured at lift.
#[derive(Debug, Clone)]
pub struct InitialPublishArgs {
    pub critical: Critical,
    pub dimensions: DimensionMap,
    pub client_selection: Vec2,
    pub movement_mode: MovementMode,
    pub viewport: Viewport,
}

/// Scroll of a droppable re-read when a virtual batch is flushed.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedScroll {
    pub droppable_id: DroppableId,
    pub scroll: Vec2,
}

/// A batch of virtual-list changes collected during a drag.
#[derive(Debug, Clone, Default)]
pub struct Published {
    /// Sorted by index.
    pub additions: Vec<DraggableDimension>,
    pub removals: Vec<DraggableId>,
    pub modified: Vec<PublishedScroll>,
}

impl Published {
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty() && self.modified.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct DropAnimateArgs {
    pub completed: CompletedDrag,
    pub drop_duration: f32,
    pub new_home_client_offset: Vec2,
}

/// Everything that can happen to a drag.
#[derive(Debug, Clone)]
pub enum Action {
    /// Sensor request to start a drag. Consumed by the engine.
    Lift {
        id: DraggableId,
        client_selection: Vec2,
        movement_mode: MovementMode,
    },
    BeforeInitialCapture {
        draggable_id: DraggableId,
        movement_mode: MovementMode,
    },
    InitialPublish(InitialPublishArgs),
    CollectionStarting,
    PublishWhileDragging(Published),
    Move {
        client: Vec2,
    },
    MoveByWindowScroll {
        new_scroll: Vec2,
    },
    UpdateViewportMaxScroll {
        max_scroll: Vec2,
    },
    UpdateDroppableScroll {
        id: DroppableId,
        new_scroll: Vec2,
    },
    UpdateDroppableIsEnabled {
        id: DroppableId,
        is_enabled: bool,
    },
    UpdateDroppableIsCombineEnabled {
        id: DroppableId,
        is_combine_enabled: bool,
    },
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Sensor request to end a drag. Consumed by the engine.
    Drop {
        reason: DropReason,
    },
    DropPending {
        reason: DropReason,
    },
    DropAnimate(DropAnimateArgs),
    DropComplete {
        completed: CompletedDrag,
    },
    /// The host finished playing the drop animation.
    DropAnimationFinished,
    Flush,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Lift { .. } => "LIFT",
            Action::BeforeInitialCapture { .. } => "BEFORE_INITIAL_CAPTURE",
            Action::InitialPublish(_) => "INITIAL_PUBLISH",
            Action::CollectionStarting => "COLLECTION_STARTING",
            Action::PublishWhileDragging(_) => "PUBLISH_WHILE_DRAGGING",
            Action::Move { .. } => "MOVE",
            Action::MoveByWindowScroll { .. } => "MOVE_BY_WINDOW_SCROLL",
            Action::UpdateViewportMaxScroll { .. } => "UPDATE_VIEWPORT_MAX_SCROLL",
            Action::UpdateDroppableScroll { .. } => "UPDATE_DROPPABLE_SCROLL",
            Action::UpdateDroppableIsEnabled { .. } => "UPDATE_DROPPABLE_IS_ENABLED",
            Action::UpdateDroppableIsCombineEnabled { .. } => {
                "UPDATE_DROPPABLE_IS_COMBINE_ENABLED"
            }
            Action::MoveUp => "MOVE_UP",
            Action::MoveDown => "MOVE_DOWN",
            Action::MoveLeft => "MOVE_LEFT",
            Action::MoveRight => "MOVE_RIGHT",
            Action::Drop { .. } => "DROP",
            Action::DropPending { .. } => "DROP_PENDING",
            Action::DropAnimate(_) => "DROP_ANIMATE",
            Action::DropComplete { .. } => "DROP_COMPLETE",
            Action::DropAnimationFinished => "DROP_ANIMATION_FINISHED",
            Action::Flush => "FLUSH",
        }
    }
}
