//! What the engine needs from the embedding application.

use std::time::{Duration, Instant};

use astrelis_core::math::Vec2;

use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::viewport::Viewport;

/// How a droppable reports scroll changes while watched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollOptions {
    /// Report every scroll straight away instead of once per frame.
    pub should_publish_immediately: bool,
}

/// A mounted draggable.
pub trait DraggableSource {
    /// Measure the draggable. `window_scroll` turns client into page
    /// coordinates.
    fn dimension(&self, window_scroll: Vec2) -> DraggableDimension;

    fn is_enabled(&self) -> bool {
        true
    }
}

/// A mounted droppable.
pub trait DroppableSource {
    /// Measure the droppable and start reporting scroll changes through
    /// [`crate::DragDropEngine::droppable_scrolled`].
    fn dimension_and_watch_scroll(
        &mut self,
        window_scroll: Vec2,
        options: ScrollOptions,
    ) -> DroppableDimension;

    /// Current scroll of the droppable's frame.
    fn scroll_while_dragging(&self) -> Vec2;

    /// Scroll the frame by `change`.
    fn scroll(&mut self, change: Vec2);

    /// The drag is over; stop watching scroll.
    fn drag_stopped(&mut self);
}

/// The window the drag happens in.
pub trait WindowHost {
    fn viewport(&self) -> Viewport;

    fn scroll_by(&mut self, change: Vec2);
}

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// [`Clock`] backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
