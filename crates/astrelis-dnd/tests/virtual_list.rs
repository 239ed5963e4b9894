//! Items mounting and unmounting during a drag.

mod common;

use astrelis_core::math::Vec2;
use astrelis_dnd::{DraggableDescriptor, DraggableId, DropReason, LiftArgs, Phase, Rect};
use astrelis_test_utils::MockDraggable;
use common::*;

/// Virtual lists always live in a scroll container.
fn virtual_abcd() -> astrelis_test_utils::ListFixture {
    abcd().virtual_mode().scroll_container(200.0)
}

fn mount_item(harness: &mut Harness, id: &str, index: usize, list: &str) {
    let descriptor = DraggableDescriptor::new(id, index, list);
    let rect = Rect::from_size(0.0, 50.0 * index as f32, ITEM_SIZE.x, ITEM_SIZE.y);
    harness
        .engine
        .register_draggable(descriptor.clone(), MockDraggable::new(descriptor, rect));
}

#[test]
fn test_addition_is_published_next_frame() {
    let list = virtual_abcd();
    let mut harness = Harness::new();
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"a".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::fluid(center_of(&list, 0)))
        .unwrap();

    mount_item(&mut harness, "e", 4, "list");
    assert_eq!(harness.phase(), Phase::Collecting);
    assert!(!harness.dragging().dimensions.draggables().contains_key(&DraggableId::new("e")));

    harness.engine.on_frame().unwrap();
    assert_eq!(harness.phase(), Phase::Dragging);
    let dragging = harness.dragging();
    assert!(dragging.dimensions.draggables().contains_key(&DraggableId::new("e")));
    // Published items never animate into place
    assert_eq!(dragging.force_should_animate, Some(false));
    assert_eq!(displaced_ids(&dragging.impact), vec!["b", "c", "d", "e"]);
}

#[test]
fn test_removal_is_published() {
    let list = virtual_abcd();
    let mut harness = Harness::new();
    let mounted = harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"a".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::fluid(center_of(&list, 0)))
        .unwrap();

    let (_, unique_id) = &mounted.draggables[3];
    harness.engine.unregister_draggable(&"d".into(), *unique_id);
    assert_eq!(harness.phase(), Phase::Collecting);

    harness.engine.on_frame().unwrap();
    let dragging = harness.dragging();
    assert!(!dragging.dimensions.draggables().contains_key(&DraggableId::new("d")));
    assert_eq!(displaced_ids(&dragging.impact), vec!["b", "c"]);
}

#[test]
fn test_changes_in_standard_list_are_ignored() {
    let list = abcd();
    let mut harness = Harness::new();
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"a".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::fluid(center_of(&list, 0)))
        .unwrap();

    mount_item(&mut harness, "e", 4, "list");
    assert_eq!(harness.phase(), Phase::Dragging);
    harness.engine.on_frame().unwrap();
    assert!(!harness.dragging().dimensions.draggables().contains_key(&DraggableId::new("e")));
}

#[test]
fn test_drop_waits_for_collection() {
    let list = virtual_abcd();
    let mut harness = Harness::new();
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"a".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::fluid(center_of(&list, 0)))
        .unwrap();
    mount_item(&mut harness, "e", 4, "list");

    harness.engine.drop(claim, DropReason::Drop).unwrap();
    assert_eq!(harness.phase(), Phase::DropPending);
    assert!(harness.responders.last_result().is_none());

    // The publish lets the pending drop go through
    harness.engine.on_frame().unwrap();
    harness.finish_drop();
    assert_eq!(harness.phase(), Phase::Idle);
    let result = harness.responders.last_result().unwrap();
    assert_eq!(result.reason, DropReason::Drop);
    assert_eq!(result.destination.map(|location| location.index), Some(0));
}

#[test]
fn test_events_after_drop_are_not_collected() {
    let list = virtual_abcd();
    let mut harness = Harness::new();
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"a".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::fluid(center_of(&list, 0)))
        .unwrap();
    harness.engine.cancel(claim).unwrap();
    harness.finish_drop();

    mount_item(&mut harness, "e", 4, "list");
    assert_eq!(harness.phase(), Phase::Idle);
    harness.engine.on_frame().unwrap();
    assert_eq!(harness.phase(), Phase::Idle);
}

#[test]
fn test_dragged_item_remount_is_ignored() {
    let list = virtual_abcd();
    let mut harness = Harness::new();
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"a".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::fluid(center_of(&list, 0)))
        .unwrap();

    // The dragged item re-registering under the same id is not a change
    let descriptor = DraggableDescriptor::new("a", 0, "list");
    harness.engine.register_draggable(
        descriptor.clone(),
        MockDraggable::new(descriptor, Rect::from_size(0.0, 0.0, 200.0, 50.0)),
    );
    assert_eq!(harness.phase(), Phase::Dragging);
    assert_eq!(harness.dragging().current.client.selection, Vec2::new(100.0, 25.0));
}
