//! Keyboard moves between lists.

mod common;

use astrelis_core::math::Vec2;
use astrelis_dnd::{DropReason, LiftArgs, Phase};
use astrelis_test_utils::ListFixture;
use common::*;

/// `first[a, b, c]` at the origin with `second[x, y, z]` to its right.
fn side_by_side() -> (ListFixture, ListFixture) {
    let first = ListFixture::vertical("first", &["a", "b", "c"], ITEM_SIZE);
    let second =
        ListFixture::vertical("second", &["x", "y", "z"], ITEM_SIZE).at(Vec2::new(300.0, 0.0));
    (first, second)
}

fn over(harness: &Harness) -> Option<&str> {
    harness.impact().dragged_over().map(|id| id.as_str())
}

// ====================
// Cross axis
// ====================

#[test]
fn test_move_into_neighbouring_list() {
    let (first, second) = side_by_side();
    let mut harness = Harness::new();
    harness.mount(&first);
    harness.mount(&second);

    let claim = harness.engine.try_get_lock(&"b".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::snap(center_of(&first, 1)))
        .unwrap();

    harness.engine.move_right(&claim).unwrap();
    assert_eq!(over(&harness), Some("second"));
    assert_eq!(destination_index(harness.impact()), Some(1));
    assert_eq!(displaced_ids(harness.impact()), vec!["y", "z"]);
    assert_eq!(
        harness.dragging().current.client.selection,
        Vec2::new(400.0, 75.0)
    );

    // Reordering inside the new list still works
    harness.engine.move_down(&claim).unwrap();
    assert_eq!(over(&harness), Some("second"));
    assert_eq!(destination_index(harness.impact()), Some(2));
    assert_eq!(displaced_ids(harness.impact()), vec!["z"]);

    harness.engine.drop(claim, DropReason::Drop).unwrap();
    harness.finish_drop();
    let result = harness.responders.last_result().unwrap();
    let destination = result.destination.unwrap();
    assert_eq!(destination.droppable_id.as_str(), "second");
    assert_eq!(destination.index, 2);
    assert_eq!(result.source.droppable_id.as_str(), "first");
}

#[test]
fn test_move_back_home() {
    let (first, second) = side_by_side();
    let mut harness = Harness::new();
    harness.mount(&first);
    harness.mount(&second);

    let claim = harness.engine.try_get_lock(&"b".into()).unwrap();
    let start = center_of(&first, 1);
    harness.engine.lift(&claim, LiftArgs::snap(start)).unwrap();
    let on_lift = harness.dragging().on_lift_impact.clone();

    harness.engine.move_right(&claim).unwrap();
    harness.engine.move_down(&claim).unwrap();
    harness.engine.move_left(&claim).unwrap();

    assert_eq!(over(&harness), Some("first"));
    assert_eq!(destination_index(harness.impact()), Some(1));
    assert_eq!(displaced_ids(harness.impact()), vec!["c"]);
    assert_eq!(harness.impact().at, on_lift.at);
    assert_eq!(harness.dragging().current.client.selection, start);
}

#[test]
fn test_no_list_in_direction() {
    let (first, second) = side_by_side();
    let mut harness = Harness::new();
    harness.mount(&first);
    harness.mount(&second);

    let claim = harness.engine.try_get_lock(&"b".into()).unwrap();
    let start = center_of(&first, 1);
    harness.engine.lift(&claim, LiftArgs::snap(start)).unwrap();
    let before = harness.impact().clone();

    // Nothing to the left of the first list
    harness.engine.move_left(&claim).unwrap();
    assert_eq!(harness.impact(), &before);
    assert_eq!(harness.dragging().current.client.selection, start);
    assert_eq!(harness.dragging().scroll_jump_request, None);

    // Nothing to the right of the second list either
    harness.engine.move_right(&claim).unwrap();
    let in_second = harness.impact().clone();
    harness.engine.move_right(&claim).unwrap();
    assert_eq!(harness.impact(), &in_second);
    assert_eq!(harness.phase(), Phase::Dragging);
}
