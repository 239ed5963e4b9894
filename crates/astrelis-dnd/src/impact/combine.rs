//! Combining the dragged item with another item.

use astrelis_core::math::Vec2;

use super::types::{DisplacedBy, DragImpact, ImpactLocation, LiftEffect};
use crate::descriptor::{Combine, DraggableId};
use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::geometry::Rect;

/// How deep inside a candidate the leading edge must be, as a divisor of
/// the candidate's main-axis size.
pub const COMBINE_THRESHOLD_DIVISOR: f32 = 4.0;

/// Strictly inside `start..end` by more than `threshold` on both sides.
fn is_solidly_inside(value: f32, start: f32, end: f32, threshold: f32) -> bool {
    value > start + threshold && value < end - threshold
}

/// Find an item to combine with, if the destination allows combining.
pub fn get_combine_impact(
    target_rect: &Rect,
    draggable: &DraggableDimension,
    previous_impact: &DragImpact,
    destination: &DroppableDimension,
    inside_destination: &[&DraggableDimension],
    after_critical: &LiftEffect,
) -> Option<DragImpact> {
    if !destination.is_combine_enabled {
        return None;
    }

    let axis = destination.axis;
    let displaced_by = DisplacedBy::new(axis, draggable.displace_by);
    let displacement = displaced_by.value;
    let target_start = axis.start_of(target_rect);
    let target_end = axis.end_of(target_rect);

    let combine_with = inside_destination
        .iter()
        .copied()
        .filter(|child| child.id() != draggable.id())
        .find(|child| {
            let id = child.id();
            let rect = child.page.border_box;
            let start = axis.start_of(&rect);
            let end = axis.end_of(&rect);
            let threshold = axis.size_of(&rect) / COMBINE_THRESHOLD_DIVISOR;

            let did_start_after_critical = after_critical.did_start_after_critical(id);
            let is_displaced = previous_impact.displaced.contains(id);

            match (did_start_after_critical, is_displaced) {
                (true, true) => is_solidly_inside(target_end, start, end, threshold),
                (true, false) => is_solidly_inside(
                    target_start,
                    start - displacement,
                    end - displacement,
                    threshold,
                ),
                (false, true) => is_solidly_inside(
                    target_end,
                    start + displacement,
                    end + displacement,
                    threshold,
                ),
                (false, false) => is_solidly_inside(target_start, start, end, threshold),
            }
        })?;

    Some(DragImpact {
        displaced: previous_impact.displaced.clone(),
        displaced_by,
        at: Some(ImpactLocation::Combine {
            combine: Combine {
                draggable_id: combine_with.id().clone(),
                droppable_id: destination.id().clone(),
            },
        }),
    })
}

/// Offset of a combine target relative to where it was measured.
pub fn get_combined_item_displacement(
    impact: &DragImpact,
    after_critical: &LiftEffect,
    combine_with: &DraggableId,
) -> Vec2 {
    let is_displaced = impact.displaced.contains(combine_with);

    if after_critical.did_start_after_critical(combine_with) {
        if is_displaced { Vec2::ZERO } else { -impact.displaced_by.point }
    } else if is_displaced {
        impact.displaced_by.point
    } else {
        Vec2::ZERO
    }
}
