//! Shared setup for engine tests.

#![allow(dead_code)]

use astrelis_core::math::Vec2;
use astrelis_dnd::{DndConfig, DragDropEngine, DragImpact, DraggingState, Phase};
use astrelis_test_utils::{ListFixture, ManualClock, MockWindow, MountedList, RecordingResponders};

pub const ITEM_SIZE: Vec2 = Vec2::new(200.0, 50.0);
pub const WINDOW_SIZE: Vec2 = Vec2::new(1000.0, 1000.0);

pub struct Harness {
    pub engine: DragDropEngine,
    pub window: MockWindow,
    pub clock: ManualClock,
    pub responders: RecordingResponders,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_window(MockWindow::new(WINDOW_SIZE))
    }

    pub fn with_window(window: MockWindow) -> Self {
        Self::configured(window, DndConfig::default())
    }

    pub fn configured(window: MockWindow, config: DndConfig) -> Self {
        astrelis_core::logging::init_with_filter("warn");
        let clock = ManualClock::new();
        let responders = RecordingResponders::new();
        let engine = DragDropEngine::new(window.clone())
            .with_config(config)
            .with_clock(clock.clone())
            .with_responders(responders.clone());
        Self {
            engine,
            window,
            clock,
            responders,
        }
    }

    pub fn mount(&mut self, list: &ListFixture) -> MountedList {
        list.register(&mut self.engine)
    }

    pub fn dragging(&self) -> &DraggingState {
        self.engine
            .state()
            .dragging()
            .expect("a drag should be in progress")
    }

    pub fn impact(&self) -> &DragImpact {
        &self.dragging().impact
    }

    pub fn phase(&self) -> Phase {
        self.engine.state().phase()
    }

    /// Let a drop animation, if any, run to completion.
    pub fn finish_drop(&mut self) {
        if self.phase() == Phase::DropAnimating {
            self.engine.drop_animation_finished().unwrap();
        }
    }
}

/// `[A, B, C, D]`, 50px tall each, from the origin.
pub fn abcd() -> ListFixture {
    ListFixture::vertical("list", &["a", "b", "c", "d"], ITEM_SIZE)
}

/// Client center of the `index`th item of a list built with [`ITEM_SIZE`].
pub fn center_of(list: &ListFixture, index: usize) -> Vec2 {
    list.items[index].1.center()
}

pub fn displaced_ids(impact: &DragImpact) -> Vec<&str> {
    impact.displaced.all.iter().map(|id| id.as_str()).collect()
}

pub fn destination_index(impact: &DragImpact) -> Option<usize> {
    impact.destination().map(|location| location.index)
}
