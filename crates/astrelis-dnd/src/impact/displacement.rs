//! Displacement groups: which items move and whether they animate.

use astrelis_core::alloc::{IndexMap, IndexSet};
use astrelis_core::math::Vec2;
use astrelis_core::profiling::profile_function;

use super::types::{DisplacedBy, Displacement, DisplacementGroups, DragImpact};
use super::visibility::is_partially_visible;
use crate::descriptor::DraggableId;
use crate::dimension::{DimensionMap, DraggableDimension, DroppableDimension};
use crate::error::DndResult;
use crate::geometry::{Rect, Spacing, expand};
use crate::viewport::Viewport;

fn should_animate(
    id: &DraggableId,
    last: Option<&DisplacementGroups>,
    force_should_animate: Option<bool>,
) -> bool {
    if let Some(forced) = force_should_animate {
        return forced;
    }
    let Some(last) = last else {
        return true;
    };
    if last.invisible.contains(id) {
        return false;
    }
    last.visible
        .get(id)
        .is_none_or(|previous| previous.should_animate)
}

// The area an item covers from where it is now to where it is displaced to.
fn displacement_target(draggable: &DraggableDimension, displaced_by: &DisplacedBy) -> Rect {
    expand(
        draggable.page.margin_box,
        Spacing::new(displaced_by.point.y, 0.0, 0.0, displaced_by.point.x),
    )
}

/// Displace every item in `after_dragging` by `displaced_by`.
pub fn get_displacement_groups(
    after_dragging: &[&DraggableDimension],
    destination: &DroppableDimension,
    displaced_by: &DisplacedBy,
    viewport: &Rect,
    last: Option<&DisplacementGroups>,
    force_should_animate: Option<bool>,
) -> DisplacementGroups {
    profile_function!();

    let mut groups = DisplacementGroups::default();
    for draggable in after_dragging {
        let id = draggable.id();
        groups.all.push(id.clone());

        let target = displacement_target(draggable, displaced_by);
        if !is_partially_visible(&target, destination, viewport, true) {
            groups.invisible.insert(id.clone());
            continue;
        }

        groups.visible.insert(
            id.clone(),
            Displacement {
                draggable_id: id.clone(),
                should_animate: should_animate(id, last, force_should_animate),
            },
        );
    }
    groups
}

/// Re-test the visibility of an impact's displaced items.
pub fn recompute(
    impact: &DragImpact,
    viewport: &Viewport,
    destination: &DroppableDimension,
    dimensions: &DimensionMap,
    force_should_animate: Option<bool>,
) -> DragImpact {
    let last = &impact.displaced;
    let after_dragging = dimensions.draggables_by_ids(&last.all);
    let displaced = get_displacement_groups(
        &after_dragging,
        destination,
        &impact.displaced_by,
        &viewport.frame,
        Some(last),
        force_should_animate,
    );

    DragImpact {
        displaced,
        ..impact.clone()
    }
}

/// Mark displaced items visible if they would be visible after scrolling
/// by `max_scroll_change`, either in the window or the destination.
pub fn speculatively_increase(
    impact: &DragImpact,
    viewport: &Viewport,
    destination: &DroppableDimension,
    dimensions: &DimensionMap,
    max_scroll_change: Vec2,
) -> DndResult<DragImpact> {
    let scrolled_viewport = viewport.scrolled_to(viewport.scroll.current + max_scroll_change);
    let scrolled_droppable = match &destination.frame {
        Some(frame) => destination.scrolled(frame.scroll.current + max_scroll_change)?,
        None => destination.clone(),
    };

    let last = &impact.displaced;
    let after_dragging = dimensions.draggables_by_ids(&last.all);

    let with_viewport_scroll = get_displacement_groups(
        &after_dragging,
        destination,
        &impact.displaced_by,
        &scrolled_viewport.frame,
        Some(last),
        Some(false),
    );
    let with_droppable_scroll = get_displacement_groups(
        &after_dragging,
        &scrolled_droppable,
        &impact.displaced_by,
        &viewport.frame,
        Some(last),
        Some(false),
    );

    let groups = [last, &with_viewport_scroll, &with_droppable_scroll];
    let mut visible = IndexMap::default();
    let mut invisible = IndexSet::default();

    for id in &last.all {
        match groups.iter().find_map(|group| group.visible.get(id)) {
            Some(displacement) => {
                visible.insert(id.clone(), displacement.clone());
            }
            None => {
                invisible.insert(id.clone());
            }
        }
    }

    Ok(DragImpact {
        displaced: DisplacementGroups {
            all: last.all.clone(),
            visible,
            invisible,
        },
        ..impact.clone()
    })
}
