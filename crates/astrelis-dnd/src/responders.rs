//! Drag lifecycle callbacks.

use std::time::{Duration, Instant};

use crate::descriptor::{
    Combine, Critical, DraggableId, DraggableLocation, DropReason, ItemType, MovementMode,
};
use crate::error::{DndError, DndResult};
use crate::frame::TaskQueue;
use crate::impact::DragImpact;
use crate::invariant;

/// Callbacks slower than this are reported.
pub const SLOW_RESPONDER_THRESHOLD: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, PartialEq)]
pub struct BeforeCapture {
    pub draggable_id: DraggableId,
    pub mode: MovementMode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragStart {
    pub draggable_id: DraggableId,
    pub item_type: ItemType,
    pub source: DraggableLocation,
    pub mode: MovementMode,
}

impl DragStart {
    fn new(critical: &Critical, mode: MovementMode) -> Self {
        Self {
            draggable_id: critical.draggable.id.clone(),
            item_type: critical.droppable.item_type.clone(),
            source: critical.home_location(),
            mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragUpdate {
    pub start: DragStart,
    pub destination: Option<DraggableLocation>,
    pub combine: Option<Combine>,
}

/// Final outcome of a drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DropResult {
    pub draggable_id: DraggableId,
    pub item_type: ItemType,
    pub source: DraggableLocation,
    pub destination: Option<DraggableLocation>,
    pub combine: Option<Combine>,
    pub reason: DropReason,
    pub mode: MovementMode,
}

/// Hooks a host implements to follow a drag. Every hook defaults to doing
/// nothing.
pub trait Responders {
    fn on_before_capture(&mut self, _before: BeforeCapture) {}

    fn on_before_drag_start(&mut self, _start: DragStart) {}

    fn on_drag_start(&mut self, _start: DragStart) {}

    fn on_drag_update(&mut self, _update: DragUpdate) {}

    fn on_drag_end(&mut self, _result: DropResult) {}
}

/// Responders that ignore everything.
#[derive(Debug, Default)]
pub struct NoopResponders;

impl Responders for NoopResponders {}

fn with_timings(name: &str, f: impl FnOnce()) {
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();
    if elapsed >= SLOW_RESPONDER_THRESHOLD {
        tracing::warn!(
            "{} responder took {:.2}ms, which is slower than the {}ms budget",
            name,
            elapsed.as_secs_f64() * 1000.0,
            SLOW_RESPONDER_THRESHOLD.as_millis()
        );
    }
}

#[derive(Debug)]
enum ResponderTask {
    Start(DragStart),
    Update(DragUpdate),
}

#[derive(Debug)]
struct ActiveDrag {
    mode: MovementMode,
    last_critical: Critical,
    last_location: Option<DraggableLocation>,
    last_combine: Option<Combine>,
}

/// Turns state changes into responder calls.
///
/// Start and update notifications wait for the next frame; everything else
/// runs immediately.
#[derive(Debug, Default)]
pub struct ResponderPublisher {
    dragging: Option<ActiveDrag>,
    queue: TaskQueue<ResponderTask>,
}

impl ResponderPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Number of notifications waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn before_capture(
        &mut self,
        responders: &mut dyn Responders,
        draggable_id: &DraggableId,
        mode: MovementMode,
    ) -> DndResult<()> {
        invariant!(
            self.dragging.is_none(),
            "Cannot fire onBeforeCapture as a drag start has already been published"
        );
        let before = BeforeCapture {
            draggable_id: draggable_id.clone(),
            mode,
        };
        with_timings("onBeforeCapture", || responders.on_before_capture(before));
        Ok(())
    }

    pub fn before_start(
        &mut self,
        responders: &mut dyn Responders,
        critical: &Critical,
        mode: MovementMode,
    ) -> DndResult<()> {
        invariant!(
            self.dragging.is_none(),
            "Cannot fire onBeforeDragStart as a drag start has already been published"
        );
        let start = DragStart::new(critical, mode);
        with_timings("onBeforeDragStart", || responders.on_before_drag_start(start));
        Ok(())
    }

    pub fn start(&mut self, critical: &Critical, mode: MovementMode) -> DndResult<()> {
        invariant!(
            self.dragging.is_none(),
            "Cannot fire onDragStart as a drag start has already been published"
        );
        let start = DragStart::new(critical, mode);
        self.dragging = Some(ActiveDrag {
            mode,
            last_critical: critical.clone(),
            last_location: Some(start.source.clone()),
            last_combine: None,
        });
        self.queue.push(ResponderTask::Start(start));
        Ok(())
    }

    /// Queue an update if anything a host cares about changed.
    pub fn update(&mut self, critical: &Critical, impact: &DragImpact) -> DndResult<()> {
        let Some(dragging) = self.dragging.as_mut() else {
            return Err(DndError::invariant(
                "Cannot fire onDragUpdate when onDragStart has not been called",
            ));
        };

        let location = impact.destination().cloned();
        let combine = impact.combine().cloned();

        let has_critical_changed = &dragging.last_critical != critical;
        let has_location_changed = dragging.last_location != location;
        let has_grouping_changed = dragging.last_combine != combine;
        if !has_critical_changed && !has_location_changed && !has_grouping_changed {
            return Ok(());
        }

        dragging.last_critical = critical.clone();
        dragging.last_location = location.clone();
        dragging.last_combine = combine.clone();

        self.queue.push(ResponderTask::Update(DragUpdate {
            start: DragStart::new(critical, dragging.mode),
            destination: location,
            combine,
        }));
        Ok(())
    }

    /// Run every queued notification now.
    pub fn flush(&mut self, responders: &mut dyn Responders) {
        for task in self.queue.drain() {
            match task {
                ResponderTask::Start(start) => {
                    with_timings("onDragStart", || responders.on_drag_start(start))
                }
                ResponderTask::Update(update) => {
                    with_timings("onDragUpdate", || responders.on_drag_update(update))
                }
            }
        }
    }

    pub fn drop(&mut self, responders: &mut dyn Responders, result: DropResult) -> DndResult<()> {
        invariant!(
            self.dragging.take().is_some(),
            "Cannot fire onDragEnd when there is no matching onDragStart"
        );
        with_timings("onDragEnd", || responders.on_drag_end(result));
        Ok(())
    }

    /// Report an interrupted drag as cancelled. Does nothing when no drag
    /// was published.
    pub fn abort(&mut self, responders: &mut dyn Responders) {
        let Some(dragging) = self.dragging.as_ref() else {
            self.queue.clear();
            return;
        };

        let start = DragStart::new(&dragging.last_critical, dragging.mode);
        let result = DropResult {
            draggable_id: start.draggable_id,
            item_type: start.item_type,
            source: start.source,
            destination: None,
            combine: None,
            reason: DropReason::Cancel,
            mode: start.mode,
        };

        self.flush(responders);
        self.dragging = None;
        with_timings("onDragEnd", || responders.on_drag_end(result));
    }
}
