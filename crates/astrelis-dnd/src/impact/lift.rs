//! The impact at the moment of lift.

use astrelis_core::alloc::IndexSet;

use super::displacement::get_displacement_groups;
use super::types::{DisplacedBy, DragImpact, ImpactLocation, LiftEffect};
use crate::descriptor::{DraggableLocation, DroppableMode};
use crate::dimension::{DimensionMap, DraggableDimension, DroppableDimension};
use crate::error::{DndError, DndResult};
use crate::viewport::Viewport;

/// Home-list items after the dragged item start out displaced.
pub fn get_lift_effect(
    draggable: &DraggableDimension,
    home: &DroppableDimension,
    dimensions: &DimensionMap,
    viewport: &Viewport,
) -> DndResult<(DragImpact, LiftEffect)> {
    let displaced_by = DisplacedBy::new(home.axis, draggable.displace_by);
    let inside_home = dimensions.inside(home.id());

    let Some(raw_index) = inside_home
        .iter()
        .position(|item| item.id() == draggable.id())
    else {
        return Err(DndError::invariant(format!(
            "Expected draggable {} to be inside home list {}",
            draggable.id(),
            home.id()
        )));
    };
    let after_dragging = &inside_home[raw_index + 1..];

    let effected: IndexSet<_> = after_dragging.iter().map(|item| item.id().clone()).collect();
    let after_critical = LiftEffect {
        in_virtual_list: home.descriptor.mode == DroppableMode::Virtual,
        effected,
        displaced_by,
    };

    let displaced = get_displacement_groups(
        after_dragging,
        home,
        &displaced_by,
        &viewport.frame,
        None,
        Some(false),
    );

    let impact = DragImpact {
        displaced,
        displaced_by,
        at: Some(ImpactLocation::Reorder {
            destination: DraggableLocation {
                droppable_id: draggable.descriptor.droppable_id.clone(),
                index: draggable.descriptor.index,
            },
        }),
    };

    Ok((impact, after_critical))
}
