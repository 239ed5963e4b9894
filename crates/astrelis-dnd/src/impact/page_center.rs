//! Where the dragged item's border-box center lands for an impact.

use astrelis_core::math::Vec2;

use super::combine::get_combined_item_displacement;
use super::types::{DragImpact, ImpactLocation, LiftEffect};
use crate::dimension::{DimensionMap, DraggableDimension, DroppableDimension};
use crate::error::DndResult;
use crate::geometry::{Axis, BoxModel, Rect};
use crate::viewport::Viewport;

fn distance_from_start_to_center(axis: Axis, model: &BoxModel) -> f32 {
    axis.spacing_start(&model.margin) + axis.size_of(&model.border_box) / 2.0
}

fn distance_from_end_to_center(axis: Axis, model: &BoxModel) -> f32 {
    axis.spacing_end(&model.margin) + axis.size_of(&model.border_box) / 2.0
}

fn cross_axis_center(axis: Axis, target: &Rect, is_moving: &BoxModel) -> f32 {
    axis.cross_start_of(target)
        + axis.spacing_cross_start(&is_moving.margin)
        + axis.cross_size_of(&is_moving.border_box) / 2.0
}

/// Center of `is_moving` placed directly after `relative_to`.
pub fn go_after(axis: Axis, relative_to: &BoxModel, is_moving: &BoxModel) -> Vec2 {
    axis.point(
        axis.end_of(&relative_to.margin_box) + distance_from_start_to_center(axis, is_moving),
        cross_axis_center(axis, &relative_to.margin_box, is_moving),
    )
}

/// Center of `is_moving` placed directly before `relative_to`.
pub fn go_before(axis: Axis, relative_to: &BoxModel, is_moving: &BoxModel) -> Vec2 {
    axis.point(
        axis.start_of(&relative_to.margin_box) - distance_from_end_to_center(axis, is_moving),
        cross_axis_center(axis, &relative_to.margin_box, is_moving),
    )
}

/// Center of `is_moving` placed at the start of `move_into`'s content.
pub fn go_into_start(axis: Axis, move_into: &BoxModel, is_moving: &BoxModel) -> Vec2 {
    axis.point(
        axis.start_of(&move_into.content_box) + distance_from_start_to_center(axis, is_moving),
        cross_axis_center(axis, &move_into.content_box, is_moving),
    )
}

fn when_reordering(
    impact: &DragImpact,
    draggable: &DraggableDimension,
    droppable: &DroppableDimension,
    dimensions: &DimensionMap,
    after_critical: &LiftEffect,
) -> DndResult<Vec2> {
    let inside_destination = dimensions.inside(droppable.id());
    let page = &draggable.page;
    let axis = droppable.axis;

    let Some(last) = inside_destination.last() else {
        return Ok(go_into_start(axis, &droppable.page, page));
    };

    if let Some(closest_after) = impact.displaced.all.first() {
        let closest = dimensions.draggable(closest_after)?;
        if after_critical.did_start_after_critical(closest_after) {
            return Ok(go_before(axis, &closest.page, page));
        }
        let with_displacement = closest.page.offset(impact.displaced_by.point);
        return Ok(go_before(axis, &with_displacement, page));
    }

    if last.id() == draggable.id() {
        return Ok(page.border_box.center());
    }

    if after_critical.did_start_after_critical(last.id()) {
        let moved_back = last.page.offset(-after_critical.displaced_by.point);
        return Ok(go_after(axis, &moved_back, page));
    }

    Ok(go_after(axis, &last.page, page))
}

/// Page border-box center for `impact`, ignoring droppable scroll.
fn center_without_droppable_displacement(
    impact: &DragImpact,
    draggable: &DraggableDimension,
    droppable: Option<&DroppableDimension>,
    dimensions: &DimensionMap,
    after_critical: &LiftEffect,
) -> DndResult<Vec2> {
    let original = draggable.page.border_box.center();
    let Some(droppable) = droppable else {
        return Ok(original);
    };

    match &impact.at {
        None => Ok(original),
        Some(ImpactLocation::Reorder { .. }) => {
            when_reordering(impact, draggable, droppable, dimensions, after_critical)
        }
        Some(ImpactLocation::Combine { combine }) => {
            let center = dimensions
                .draggable(&combine.draggable_id)?
                .page
                .border_box
                .center();
            Ok(center
                + get_combined_item_displacement(impact, after_critical, &combine.draggable_id))
        }
    }
}

/// Page border-box center the dragged item settles at for `impact`.
pub fn get_page_border_box_center(
    impact: &DragImpact,
    draggable: &DraggableDimension,
    droppable: Option<&DroppableDimension>,
    dimensions: &DimensionMap,
    after_critical: &LiftEffect,
) -> DndResult<Vec2> {
    let center = center_without_droppable_displacement(
        impact,
        draggable,
        droppable,
        dimensions,
        after_critical,
    )?;
    Ok(match droppable {
        Some(droppable) => droppable.with_displacement(center),
        None => center,
    })
}

/// Client selection that puts the dragged border-box center at
/// `page_border_box_center`.
pub fn get_client_from_page_border_box_center(
    page_border_box_center: Vec2,
    draggable: &DraggableDimension,
    viewport: &Viewport,
) -> Vec2 {
    let without_page_scroll_change = viewport.with_displacement(page_border_box_center);
    let offset = without_page_scroll_change - draggable.page.border_box.center();
    draggable.client.border_box.center() + offset
}

/// Client border-box center the dragged item settles at for `impact`.
pub fn get_client_border_box_center(
    impact: &DragImpact,
    draggable: &DraggableDimension,
    droppable: Option<&DroppableDimension>,
    dimensions: &DimensionMap,
    viewport: &Viewport,
    after_critical: &LiftEffect,
) -> DndResult<Vec2> {
    let page_center =
        get_page_border_box_center(impact, draggable, droppable, dimensions, after_critical)?;
    Ok(get_client_from_page_border_box_center(page_center, draggable, viewport))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Spacing;

    fn model(top: f32, height: f32, margin: f32) -> BoxModel {
        BoxModel::new(
            Rect::from_size(0.0, top, 100.0, height),
            Spacing::new(margin, 0.0, margin, 0.0),
            Spacing::ZERO,
            Spacing::ZERO,
        )
    }

    #[test]
    fn test_go_after_and_before() {
        let relative_to = model(100.0, 40.0, 5.0);
        let is_moving = model(0.0, 20.0, 5.0);

        // Margin box of relative_to spans 95..145
        assert_eq!(go_after(Axis::Vertical, &relative_to, &is_moving), Vec2::new(50.0, 160.0));
        assert_eq!(go_before(Axis::Vertical, &relative_to, &is_moving), Vec2::new(50.0, 80.0));
    }

    #[test]
    fn test_go_into_start() {
        let list = BoxModel::new(
            Rect::from_size(0.0, 0.0, 100.0, 300.0),
            Spacing::ZERO,
            Spacing::ZERO,
            Spacing::all(8.0),
        );
        let is_moving = model(0.0, 20.0, 0.0);
        assert_eq!(go_into_start(Axis::Vertical, &list, &is_moving), Vec2::new(58.0, 18.0));
    }
}
