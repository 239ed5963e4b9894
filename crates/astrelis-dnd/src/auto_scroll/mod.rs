//! Scrolling the window and droppables while dragging.
//!
//! Pointer drags scroll continuously when near an edge, one coalesced
//! scroll per target per frame. Keyboard drags ask for a single jump.

pub mod can_scroll;
pub mod fluid;
pub mod jump;

use std::time::Duration;

use astrelis_core::math::Vec2;
use astrelis_core::profiling::profile_function;

use crate::config::AutoScrollerOptions;
use crate::descriptor::{DroppableId, MovementMode};
use crate::error::DndResult;
use crate::frame::FrameSlot;
use crate::memo::Memo;
use crate::state::DraggingState;

pub use can_scroll::{
    can_scroll_droppable, can_scroll_window, get_droppable_overlap, get_window_overlap,
};
pub use fluid::{ScrollTiming, get_scroll};
pub use jump::{JumpPlan, plan_jump};

#[derive(Debug, Clone, Copy)]
struct FluidDrag {
    started_at: Duration,
    should_use_time_dampening: bool,
}

/// Decides when and how far to auto-scroll.
#[derive(Debug, Default)]
pub struct AutoScroller {
    options: AutoScrollerOptions,
    dragging: Option<FluidDrag>,
    window: FrameSlot<Vec2>,
    droppable: FrameSlot<(DroppableId, Vec2)>,
    scrollables: Memo<u64, Vec<DroppableId>>,
}

/// A fluid scroll, found either for real or during the lift dry run.
enum FluidScroll {
    Window(Vec2),
    Droppable(DroppableId, Vec2),
}

impl AutoScroller {
    pub fn new(options: AutoScrollerOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> &AutoScrollerOptions {
        &self.options
    }

    pub fn is_active(&self) -> bool {
        self.dragging.is_some()
    }

    fn find_fluid_scroll(
        &mut self,
        state: &DraggingState,
        timing: ScrollTiming,
    ) -> Option<FluidScroll> {
        let center = state.current.page.border_box_center;
        let draggable = state
            .dimensions
            .draggables()
            .get(&state.critical.draggable.id)?;
        let subject = draggable.page.margin_box;

        if state.is_window_scroll_allowed {
            if let Some(change) = fluid::get_window_scroll_change(
                &state.viewport,
                &subject,
                center,
                timing,
                &self.options,
            ) {
                return Some(FluidScroll::Window(change));
            }
        }

        let scrollables = self
            .scrollables
            .get_or_compute(state.dimensions.droppables_generation(), |_| {
                fluid::get_scrollable_droppables(&state.dimensions)
            });
        let droppable = fluid::get_best_scrollable_droppable(
            center,
            state.impact.dragged_over(),
            &state.dimensions,
            scrollables,
        )?;
        let change =
            fluid::get_droppable_scroll_change(droppable, &subject, center, timing, &self.options)?;
        Some(FluidScroll::Droppable(droppable.id().clone(), change))
    }

    /// Begin a pointer drag. Time dampening only applies when the item was
    /// already in a scroll zone at lift.
    pub fn start(&mut self, state: &DraggingState, now: Duration) {
        self.scrollables.clear();
        if self.options.disabled || state.movement_mode != MovementMode::Fluid {
            return;
        }

        let dry_run = ScrollTiming {
            run_time: Duration::ZERO,
            should_use_time_dampening: false,
        };
        let was_scroll_needed = self.find_fluid_scroll(state, dry_run).is_some();
        self.dragging = Some(FluidDrag {
            started_at: now,
            should_use_time_dampening: was_scroll_needed,
        });
        tracing::debug!("Fluid auto scroll started, dampening: {}", was_scroll_needed);

        if was_scroll_needed {
            self.schedule_fluid(state, now);
        }
    }

    fn schedule_fluid(&mut self, state: &DraggingState, now: Duration) {
        let Some(dragging) = self.dragging else {
            return;
        };
        let timing = ScrollTiming {
            run_time: now.saturating_sub(dragging.started_at),
            should_use_time_dampening: dragging.should_use_time_dampening,
        };
        match self.find_fluid_scroll(state, timing) {
            Some(FluidScroll::Window(change)) => self.window.schedule(change),
            Some(FluidScroll::Droppable(id, change)) => self.droppable.schedule((id, change)),
            None => {}
        }
    }

    /// Respond to a state change. A keyboard jump comes back as a plan for the
    /// caller to carry out straight away.
    pub fn scroll(&mut self, state: &DraggingState, now: Duration) -> DndResult<Option<JumpPlan>> {
        profile_function!();
        match state.movement_mode {
            MovementMode::Fluid => {
                self.schedule_fluid(state, now);
                Ok(None)
            }
            MovementMode::Snap => plan_jump(state),
        }
    }

    /// Window scroll due this frame.
    pub fn take_window_scroll(&mut self) -> Option<Vec2> {
        self.window.take()
    }

    /// Droppable scroll due this frame.
    pub fn take_droppable_scroll(&mut self) -> Option<(DroppableId, Vec2)> {
        self.droppable.take()
    }

    /// End the drag and cancel pending scrolls.
    pub fn stop(&mut self) {
        if self.dragging.take().is_some() {
            tracing::debug!("Fluid auto scroll stopped");
        }
        self.window.cancel();
        self.droppable.cancel();
        self.scrollables.clear();
    }
}
