//! Reorder and combine behaviour of a single vertical list.

mod common;

use astrelis_core::math::Vec2;
use astrelis_dnd::{DropReason, ImpactLocation, LiftArgs, Phase};
use astrelis_test_utils::ListFixture;
use common::*;

#[test]
fn test_lift_displaces_items_after_critical() {
    let list = abcd();
    let mut harness = Harness::new();
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"b".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::fluid(center_of(&list, 1)))
        .unwrap();

    let impact = harness.impact();
    assert_eq!(destination_index(impact), Some(1));
    assert_eq!(displaced_ids(impact), vec!["c", "d"]);
    assert_eq!(impact.displaced_by.point, Vec2::new(0.0, 50.0));
    // Already in place at lift, so nothing animates
    assert!(impact.displaced.visible.values().all(|d| !d.should_animate));
}

#[test]
fn test_move_to_last_position() {
    let list = abcd();
    let mut harness = Harness::new();
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"b".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::fluid(center_of(&list, 1)))
        .unwrap();
    harness.engine.move_to(&claim, center_of(&list, 3)).unwrap();

    let impact = harness.impact();
    assert_eq!(
        impact.at,
        Some(ImpactLocation::Reorder {
            destination: astrelis_dnd::DraggableLocation {
                droppable_id: "list".into(),
                index: 3,
            }
        })
    );
    assert!(impact.displaced.is_empty());
    assert_eq!(impact.displaced_by.point, Vec2::new(0.0, 50.0));
    assert_eq!(harness.dragging().current.client.offset, Vec2::new(0.0, 100.0));
}

#[test]
fn test_move_is_idempotent() {
    let list = abcd();
    let mut harness = Harness::new();
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"b".into()).unwrap();
    let start = center_of(&list, 1);
    harness.engine.lift(&claim, LiftArgs::fluid(start)).unwrap();

    let target = start + Vec2::new(0.0, 60.0);
    harness.engine.move_to(&claim, target).unwrap();
    let first = harness.impact().clone();

    harness.engine.move_to(&claim, target).unwrap();
    assert_eq!(harness.impact(), &first);

    // Leaving and coming back lands on the same impact
    harness
        .engine
        .move_to(&claim, start + Vec2::new(0.0, 120.0))
        .unwrap();
    harness.engine.move_to(&claim, target).unwrap();
    assert_eq!(destination_index(harness.impact()), destination_index(&first));
    assert_eq!(harness.impact().displaced.all, first.displaced.all);
}

#[test]
fn test_displaced_count_follows_insertion_index() {
    let ids = ["a", "b", "c", "d", "e", "f"];
    let list = ListFixture::vertical("list", &ids, ITEM_SIZE);
    let mut harness = Harness::new();
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"d".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::snap(center_of(&list, 3)))
        .unwrap();

    let check = |harness: &Harness| {
        let impact = harness.impact();
        let index = destination_index(impact).unwrap();
        assert_eq!(impact.displaced.all.len(), ids.len() - 1 - index);
    };

    check(&harness);
    for _ in 0..3 {
        harness.engine.move_up(&claim).unwrap();
        check(&harness);
    }
    assert_eq!(destination_index(harness.impact()), Some(0));

    for _ in 0..5 {
        harness.engine.move_down(&claim).unwrap();
        check(&harness);
    }
    assert_eq!(destination_index(harness.impact()), Some(5));

    // Nothing past the end
    harness.engine.move_down(&claim).unwrap();
    assert_eq!(destination_index(harness.impact()), Some(5));
}

#[test]
fn test_combine_threshold() {
    let list = abcd().combine_enabled();
    let mut harness = Harness::new();
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"b".into()).unwrap();
    let start = center_of(&list, 1);
    harness.engine.lift(&claim, LiftArgs::fluid(start)).unwrap();

    // Leading edge exactly a quarter of the way into C
    harness
        .engine
        .move_to(&claim, start + Vec2::new(0.0, 12.5))
        .unwrap();
    assert!(harness.impact().combine().is_none());
    assert_eq!(destination_index(harness.impact()), Some(1));

    harness
        .engine
        .move_to(&claim, start + Vec2::new(0.0, 13.5))
        .unwrap();
    let combine = harness.impact().combine().cloned().unwrap();
    assert_eq!(combine.draggable_id.as_str(), "c");
    assert_eq!(combine.droppable_id.as_str(), "list");
}

#[test]
fn test_no_combine_when_disabled() {
    let list = abcd();
    let mut harness = Harness::new();
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"b".into()).unwrap();
    let start = center_of(&list, 1);
    harness.engine.lift(&claim, LiftArgs::fluid(start)).unwrap();
    harness
        .engine
        .move_to(&claim, start + Vec2::new(0.0, 25.0))
        .unwrap();
    assert!(harness.impact().combine().is_none());
}

#[test]
fn test_cancel_round_trip() {
    let list = abcd();
    let mut harness = Harness::new();
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"b".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::fluid(center_of(&list, 1)))
        .unwrap();
    let on_lift = harness.dragging().on_lift_impact.clone();

    harness.engine.cancel(claim).unwrap();

    // No movement, so the item is already home and no animation runs
    assert_eq!(harness.phase(), Phase::Idle);
    let completed = harness.engine.state().completed().unwrap();
    assert_eq!(completed.impact.at, on_lift.at);
    assert_eq!(completed.impact.displaced.all, on_lift.displaced.all);
    assert_eq!(completed.impact.displaced_by, on_lift.displaced_by);

    let result = &completed.result;
    assert_eq!(result.reason, DropReason::Cancel);
    assert_eq!(result.source.index, 1);
    assert!(result.destination.is_none());
    assert!(result.combine.is_none());
}

#[test]
fn test_drop_after_move_reports_destination() {
    let list = abcd();
    let mut harness = Harness::new();
    harness.mount(&list);

    let claim = harness.engine.try_get_lock(&"b".into()).unwrap();
    harness
        .engine
        .lift(&claim, LiftArgs::fluid(center_of(&list, 1)))
        .unwrap();
    // Overshoot so the item has to animate into place
    harness
        .engine
        .move_to(&claim, center_of(&list, 3) + Vec2::new(0.0, 10.0))
        .unwrap();
    harness.engine.drop(claim, DropReason::Drop).unwrap();

    assert_eq!(harness.phase(), Phase::DropAnimating);
    let astrelis_dnd::DragState::DropAnimating(animating) = harness.engine.state() else {
        unreachable!();
    };
    assert_eq!(animating.new_home_client_offset, Vec2::new(0.0, 100.0));
    assert!(animating.drop_duration >= harness.engine.config().drop.min_drop_time);

    harness.engine.drop_animation_finished().unwrap();
    let result = harness.responders.last_result().unwrap();
    assert_eq!(result.reason, DropReason::Drop);
    assert_eq!(result.destination.map(|location| location.index), Some(3));
}
