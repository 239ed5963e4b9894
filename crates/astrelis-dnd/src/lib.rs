//! Astrelis DnD - headless drag and drop reordering
//!
//! This crate computes everything a sortable list or board needs while an
//! item is dragged, without touching any rendering:
//! - Reorder and combine impacts for pointer (fluid) and keyboard (snap) drags
//! - Edge auto-scrolling of the window and scroll containers
//! - Drop animation timing
//! - Virtual lists that mount and unmount items mid-drag
//! - Lifecycle callbacks for the host application
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use astrelis_core::profiling::{ProfilingBackend, init_profiling, new_frame};
//! use astrelis_dnd::{DragDropEngine, DropReason, LiftArgs};
//!
//! astrelis_core::logging::init();
//! init_profiling(ProfilingBackend::PuffinHttp);
//!
//! let mut engine = DragDropEngine::new(window).with_responders(responders);
//! engine.register_droppable(DroppableDescriptor::new("list"), list_source);
//! engine.register_draggable(DraggableDescriptor::new("a", 0, "list"), item_source);
//!
//! let claim = engine.try_get_lock(&"a".into()).unwrap();
//! engine.lift(&claim, LiftArgs::fluid(pointer))?;
//! engine.move_to(&claim, pointer + delta)?;
//! engine.drop(claim, DropReason::Drop)?;
//!
//! // Once per frame:
//! new_frame();
//! engine.on_frame()?;
//! ```

pub mod auto_scroll;
pub mod config;
pub mod descriptor;
pub mod dimension;
pub mod engine;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod host;
pub mod impact;
pub mod marshal;
pub mod memo;
pub mod registry;
pub mod responders;
pub mod sensor;
pub mod state;
pub mod viewport;

pub use config::{AutoScrollerOptions, DndConfig, DropTimings, DurationDampening, Easing};
pub use descriptor::{
    Combine, Critical, DraggableDescriptor, DraggableId, DraggableLocation, DropReason,
    DroppableDescriptor, DroppableId, DroppableMode, ItemType, MovementMode,
};
pub use dimension::{DimensionMap, DraggableDimension, DroppableDimension, DroppableDimensionArgs};
pub use engine::DragDropEngine;
pub use error::{DndError, DndResult};
pub use geometry::{Axis, BoxModel, Rect, Spacing};
pub use host::{Clock, DraggableSource, DroppableSource, ScrollOptions, SystemClock, WindowHost};
pub use impact::{DragImpact, ImpactLocation};
pub use registry::UniqueId;
pub use responders::{
    BeforeCapture, DragStart, DragUpdate, DropResult, NoopResponders, Responders,
};
pub use sensor::{LiftArgs, LockClaim};
pub use state::{CompletedDrag, DragState, DraggingState, Phase};
pub use viewport::Viewport;
