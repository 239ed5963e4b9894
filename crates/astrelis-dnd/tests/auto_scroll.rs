//! Fluid and jump auto-scrolling driven through the engine.

mod common;

use std::time::Duration;

use astrelis_core::math::Vec2;
use astrelis_dnd::{AutoScrollerOptions, DndConfig, LiftArgs, Phase, ScrollOptions};
use astrelis_test_utils::{ListFixture, MockWindow};
use common::*;

/// A window that can scroll 2000px down.
fn tall_window() -> MockWindow {
    MockWindow::new(WINDOW_SIZE).with_document(Vec2::new(1000.0, 3000.0))
}

/// Two items sitting at the bottom edge of the window, horizontally
/// centred so only vertical scrolling kicks in.
fn bottom_list() -> ListFixture {
    ListFixture::vertical("list", &["a", "b"], ITEM_SIZE).at(Vec2::new(400.0, 900.0))
}

// ====================
// Fluid
// ====================

#[test]
fn test_fluid_scroll_is_dampened_at_start() {
    let list = bottom_list();
    let mut harness = Harness::with_window(tall_window());
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"b".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::fluid(center_of(&list, 1)))
        .unwrap();

    // Lifted inside the scroll zone: minimum speed, never zero
    harness.engine.on_frame().unwrap();
    assert_eq!(harness.window.scroll_calls(), vec![Vec2::new(0.0, 1.0)]);

    // After the ramp the full speed applies
    harness.clock.advance(Duration::from_secs(2));
    harness
        .engine
        .move_to(&claim, center_of(&list, 1) + Vec2::new(0.0, 1.0))
        .unwrap();
    harness.engine.on_frame().unwrap();
    assert_eq!(
        harness.window.scroll_calls().last(),
        Some(&Vec2::new(0.0, 28.0))
    );
}

#[test]
fn test_fluid_scroll_coalesces_per_frame() {
    let list = ListFixture::vertical("list", &["a", "b"], ITEM_SIZE).at(Vec2::new(400.0, 400.0));
    let mut harness = Harness::with_window(tall_window());
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"a".into()).unwrap();
    let start = center_of(&list, 0);
    harness.engine.lift(&claim, LiftArgs::fluid(start)).unwrap();
    harness.engine.on_frame().unwrap();
    assert!(harness.window.scroll_calls().is_empty());

    // Lifted outside the scroll zone, so no dampening
    for y in [800.0, 820.0, 840.0] {
        harness
            .engine
            .move_to(&claim, Vec2::new(start.x, y))
            .unwrap();
    }
    harness.engine.on_frame().unwrap();
    assert_eq!(harness.window.scroll_calls().len(), 1);
    assert!(harness.window.scroll_calls()[0].y > 1.0);
}

#[test]
fn test_disabled_auto_scroll() {
    let list = bottom_list();
    let config = DndConfig::new().auto_scroll(AutoScrollerOptions::default().disabled(true));
    let mut harness = Harness::configured(tall_window(), config);
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"b".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::fluid(center_of(&list, 1)))
        .unwrap();
    harness.engine.on_frame().unwrap();
    assert!(harness.window.scroll_calls().is_empty());
}

#[test]
fn test_pending_scroll_cancelled_by_drop() {
    let list = bottom_list();
    let mut harness = Harness::with_window(tall_window());
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"b".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::fluid(center_of(&list, 1)))
        .unwrap();
    harness.engine.cancel(claim).unwrap();
    harness.engine.on_frame().unwrap();
    assert!(harness.window.scroll_calls().is_empty());
}

// ====================
// Jump
// ====================

/// Six 50px items in a 200px tall scroll container, with a second list
/// next to it.
fn scrollable_board() -> (ListFixture, ListFixture) {
    let first = ListFixture::vertical("first", &["a", "b", "c", "d", "e", "f"], ITEM_SIZE)
        .scroll_container(200.0);
    let second =
        ListFixture::vertical("second", &["x", "y", "z"], ITEM_SIZE).at(Vec2::new(300.0, 0.0));
    (first, second)
}

#[test]
fn test_jump_scrolls_droppable_before_window() {
    let (first, second) = scrollable_board();
    let mut harness = Harness::new();
    let mounted = harness.mount(&first);
    harness.mount(&second);

    let claim = harness.engine.try_get_lock(&"d".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::snap(center_of(&first, 3)))
        .unwrap();
    assert_eq!(
        mounted.droppable.watching(),
        Some(ScrollOptions {
            should_publish_immediately: true
        })
    );

    // The next slot is below the container's visible area
    harness.engine.move_down(&claim).unwrap();
    assert_eq!(
        harness.dragging().scroll_jump_request,
        Some(Vec2::new(0.0, 50.0))
    );
    assert_eq!(mounted.droppable.scroll_calls(), vec![Vec2::new(0.0, 50.0)]);
    assert!(harness.window.scroll_calls().is_empty());
    // The pointer does not move for a jump absorbed by scrolling
    assert_eq!(
        harness.dragging().current.client.selection,
        center_of(&first, 3)
    );

    // The host reports the new scroll, which settles the request
    harness
        .engine
        .droppable_scrolled(first.id(), mounted.droppable.scroll())
        .unwrap();
    assert_eq!(harness.dragging().scroll_jump_request, None);
    assert_eq!(mounted.droppable.scroll_calls().len(), 1);

    harness
        .engine
        .drop(claim, astrelis_dnd::DropReason::Drop)
        .unwrap();
    harness.finish_drop();
    assert_eq!(harness.phase(), Phase::Idle);
    assert_eq!(mounted.droppable.stopped_count(), 1);
    assert_eq!(mounted.droppable.watching(), None);

    let result = harness.responders.last_result().unwrap();
    assert_eq!(
        result.destination.map(|location| location.droppable_id),
        Some("first".into())
    );
}

#[test]
fn test_visible_step_does_not_scroll() {
    let (first, second) = scrollable_board();
    let mut harness = Harness::new();
    let mounted = harness.mount(&first);
    harness.mount(&second);

    let claim = harness.engine.try_get_lock(&"b".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::snap(center_of(&first, 1)))
        .unwrap();
    harness.engine.move_down(&claim).unwrap();

    assert_eq!(destination_index(harness.impact()), Some(2));
    assert_eq!(harness.dragging().scroll_jump_request, None);
    assert!(mounted.droppable.scroll_calls().is_empty());
    assert_eq!(
        harness.dragging().current.client.selection,
        center_of(&first, 2)
    );
}
