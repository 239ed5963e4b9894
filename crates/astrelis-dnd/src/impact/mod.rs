//! Impact calculation.
//!
//! Pure functions over read-only dimension snapshots that decide where the
//! dragged item would land, which items move out of its way, and whether it
//! would combine with another item.

pub mod combine;
pub mod direction;
pub mod displacement;
pub mod drag_impact;
pub mod droppable_over;
pub mod lift;
pub mod page_center;
pub mod placeholder;
pub mod reorder;
mod types;
pub mod visibility;

pub use combine::{COMBINE_THRESHOLD_DIVISOR, get_combine_impact};
pub use direction::{MoveDirection, MoveResult, move_in_direction};
pub use displacement::{get_displacement_groups, recompute, speculatively_increase};
pub use drag_impact::get_drag_impact;
pub use droppable_over::get_droppable_over;
pub use lift::get_lift_effect;
pub use page_center::{
    get_client_border_box_center, get_client_from_page_border_box_center,
    get_page_border_box_center,
};
pub use placeholder::{add_placeholder, recompute_placeholders, remove_placeholder};
pub use reorder::{calculate_reorder_impact, get_reorder_impact};
pub use types::{
    AfterCritical, DisplacedBy, Displacement, DisplacementGroups, DragImpact, ImpactLocation,
    LiftEffect,
};
