//! Error types for the drag and drop engine.

use crate::descriptor::{DraggableId, DroppableId};
use crate::state::Phase;

/// Errors raised by the engine.
///
/// Every variant is a precondition violation: the embedding code asked for
/// something that is not legal in the current state. The engine aborts any
/// active drag before handing one of these back.
#[derive(Debug, Clone, PartialEq)]
pub enum DndError {
    /// An internal consistency check failed.
    Invariant(String),
    /// No draggable is registered under this id.
    DraggableNotFound(DraggableId),
    /// No droppable is registered under this id.
    DroppableNotFound(DroppableId),
    /// An action was dispatched in a phase that does not accept it.
    InvalidPhase { action: &'static str, phase: Phase },
    /// The drag lock is already held by another claim.
    LockAlreadyClaimed,
    /// The claim used for a drag action is no longer the active one.
    InactiveLock,
}

impl DndError {
    /// Build an [`DndError::Invariant`] from any message.
    pub fn invariant(message: impl Into<String>) -> Self {
        DndError::Invariant(message.into())
    }
}

impl std::fmt::Display for DndError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DndError::Invariant(message) => write!(f, "Invariant failed: {}", message),
            DndError::DraggableNotFound(id) => write!(f, "Cannot find draggable with id: {}", id),
            DndError::DroppableNotFound(id) => write!(f, "Cannot find droppable with id: {}", id),
            DndError::InvalidPhase { action, phase } => {
                write!(f, "{} not permitted in phase {}", action, phase)
            }
            DndError::LockAlreadyClaimed => {
                write!(f, "Cannot claim lock as it is already claimed")
            }
            DndError::InactiveLock => write!(f, "Drag action used a lock that is no longer active"),
        }
    }
}

impl std::error::Error for DndError {}

/// Result type for drag and drop operations.
pub type DndResult<T> = Result<T, DndError>;

/// Return an [`DndError::Invariant`] from the enclosing function unless
/// `cond` holds.
#[macro_export]
macro_rules! invariant {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::error::DndError::Invariant(format!($($arg)+)));
        }
    };
}
