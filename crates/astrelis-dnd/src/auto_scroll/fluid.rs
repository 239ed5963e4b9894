//! Pointer driven scrolling near container edges.

use std::time::Duration;

use astrelis_core::math::Vec2;

use super::can_scroll::{can_scroll_droppable, can_scroll_window};
use crate::config::{AutoScrollerOptions, MIN_SCROLL};
use crate::descriptor::DroppableId;
use crate::dimension::{DimensionMap, DroppableDimension};
use crate::geometry::{Axis, Edge, Rect, clean, is_position_in_frame};
use crate::viewport::Viewport;

/// Distances from a container edge where scrolling starts and where it
/// reaches full speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceThresholds {
    pub start_scrolling_from: f32,
    pub max_scroll_value_at: f32,
}

impl DistanceThresholds {
    pub fn new(container: &Rect, axis: Axis, options: &AutoScrollerOptions) -> Self {
        let size = axis.size_of(container);
        Self {
            start_scrolling_from: size * options.start_from_percentage,
            max_scroll_value_at: size * options.max_scroll_at_percentage,
        }
    }
}

fn get_percentage(start_of_range: f32, end_of_range: f32, current: f32) -> f32 {
    let range = end_of_range - start_of_range;
    if range == 0.0 {
        return 0.0;
    }
    (current - start_of_range) / range
}

/// Undamped scroll speed for a distance to an edge.
pub fn get_value_from_distance(
    distance_to_edge: f32,
    thresholds: &DistanceThresholds,
    options: &AutoScrollerOptions,
) -> f32 {
    if distance_to_edge > thresholds.start_scrolling_from {
        return 0.0;
    }
    if distance_to_edge <= thresholds.max_scroll_value_at {
        return options.max_pixel_scroll;
    }
    if distance_to_edge == thresholds.start_scrolling_from {
        return MIN_SCROLL;
    }

    let from_max = get_percentage(
        thresholds.max_scroll_value_at,
        thresholds.start_scrolling_from,
        distance_to_edge,
    );
    (options.max_pixel_scroll * options.ease.apply(1.0 - from_max)).ceil()
}

/// Hold the scroll back for a short while after the drag started.
pub fn dampen_value_by_time(
    proposed_scroll: f32,
    run_time: Duration,
    options: &AutoScrollerOptions,
) -> f32 {
    let dampening = &options.duration_dampening;
    if run_time >= dampening.stop_dampening_at {
        return proposed_scroll;
    }
    if run_time < dampening.accelerate_at {
        return MIN_SCROLL;
    }

    let percentage = get_percentage(
        dampening.accelerate_at.as_secs_f32(),
        dampening.stop_dampening_at.as_secs_f32(),
        run_time.as_secs_f32(),
    );
    (proposed_scroll * options.ease.apply(percentage)).ceil()
}

/// Inputs shared by every fluid scroll calculation in one pass.
#[derive(Debug, Clone, Copy)]
pub struct ScrollTiming {
    pub run_time: Duration,
    pub should_use_time_dampening: bool,
}

fn get_value(
    distance_to_edge: f32,
    thresholds: &DistanceThresholds,
    timing: ScrollTiming,
    options: &AutoScrollerOptions,
) -> f32 {
    let scroll = get_value_from_distance(distance_to_edge, thresholds, options);
    if scroll == 0.0 {
        return 0.0;
    }
    if !timing.should_use_time_dampening {
        return scroll;
    }
    dampen_value_by_time(scroll, timing.run_time, options).max(MIN_SCROLL)
}

fn distance_to_edge(container: &Rect, center: Vec2, edge: Edge) -> f32 {
    match edge {
        Edge::Top => center.y - container.top,
        Edge::Right => container.right - center.x,
        Edge::Bottom => container.bottom - center.y,
        Edge::Left => center.x - container.left,
    }
}

fn get_scroll_on_axis(
    container: &Rect,
    center: Vec2,
    axis: Axis,
    timing: ScrollTiming,
    options: &AutoScrollerOptions,
) -> f32 {
    let thresholds = DistanceThresholds::new(container, axis, options);
    let to_start = distance_to_edge(container, center, axis.start());
    let to_end = distance_to_edge(container, center, axis.end());

    if to_end < to_start {
        return get_value(to_end, &thresholds, timing, options);
    }
    -get_value(to_start, &thresholds, timing, options)
}

fn adjust_for_size_limits(container: &Rect, subject: &Rect, proposed: Vec2) -> Option<Vec2> {
    let is_too_big_vertically = subject.height() > container.height();
    let is_too_big_horizontally = subject.width() > container.width();

    match (is_too_big_horizontally, is_too_big_vertically) {
        (false, false) => Some(proposed),
        (true, true) => None,
        (true, false) => Some(Vec2::new(0.0, proposed.y)),
        (false, true) => Some(Vec2::new(proposed.x, 0.0)),
    }
}

/// Scroll needed for a dragged item centred at `center` inside `container`.
pub fn get_scroll(
    container: &Rect,
    subject: &Rect,
    center: Vec2,
    timing: ScrollTiming,
    options: &AutoScrollerOptions,
) -> Option<Vec2> {
    let required = clean(Vec2::new(
        get_scroll_on_axis(container, center, Axis::Horizontal, timing, options),
        get_scroll_on_axis(container, center, Axis::Vertical, timing, options),
    ));
    if required == Vec2::ZERO {
        return None;
    }

    let limited = adjust_for_size_limits(container, subject, required)?;
    if limited == Vec2::ZERO {
        return None;
    }
    Some(limited)
}

/// Scrollable droppables in map order.
pub fn get_scrollable_droppables(dimensions: &DimensionMap) -> Vec<DroppableId> {
    dimensions
        .droppables()
        .values()
        .filter(|droppable| droppable.is_enabled && droppable.frame.is_some())
        .map(|droppable| droppable.id().clone())
        .collect()
}

/// The droppable to scroll: the one dragged over if it has a frame,
/// otherwise the first scrollable one whose frame contains `center`.
pub fn get_best_scrollable_droppable<'a>(
    center: Vec2,
    destination: Option<&DroppableId>,
    dimensions: &'a DimensionMap,
    scrollables: &[DroppableId],
) -> Option<&'a DroppableDimension> {
    if let Some(destination) = destination {
        let droppable = dimensions.droppables().get(destination)?;
        return droppable.frame.is_some().then_some(droppable);
    }

    scrollables
        .iter()
        .filter_map(|id| dimensions.droppables().get(id))
        .find(|droppable| {
            droppable
                .frame
                .as_ref()
                .is_some_and(|frame| is_position_in_frame(&frame.page_margin_box, center))
        })
}

pub fn get_window_scroll_change(
    viewport: &Viewport,
    subject: &Rect,
    center: Vec2,
    timing: ScrollTiming,
    options: &AutoScrollerOptions,
) -> Option<Vec2> {
    let scroll = get_scroll(&viewport.frame, subject, center, timing, options)?;
    can_scroll_window(viewport, scroll).then_some(scroll)
}

pub fn get_droppable_scroll_change(
    droppable: &DroppableDimension,
    subject: &Rect,
    center: Vec2,
    timing: ScrollTiming,
    options: &AutoScrollerOptions,
) -> Option<Vec2> {
    let frame = droppable.frame.as_ref()?;
    let scroll = get_scroll(&frame.page_margin_box, subject, center, timing, options)?;
    can_scroll_droppable(droppable, scroll).then_some(scroll)
}
