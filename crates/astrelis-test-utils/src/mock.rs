//! Mock hosts for driving the engine in tests.
//!
//! Every mock records the calls the engine makes so tests can assert on
//! them afterwards.

use std::sync::Arc;
use std::time::Duration;

use astrelis_core::math::Vec2;
use astrelis_dnd::{
    BeforeCapture, BoxModel, Clock, DragDropEngine, DragStart, DragUpdate, DraggableDescriptor,
    DraggableDimension, DraggableSource, DropResult, DroppableDimension, DroppableSource, Rect,
    Responders, ScrollOptions, UniqueId, Viewport, WindowHost,
};
use parking_lot::Mutex;

use crate::fixtures::ListFixture;

#[derive(Debug)]
struct WindowState {
    size: Vec2,
    scroll: Vec2,
    document_size: Vec2,
    scroll_calls: Vec<Vec2>,
}

/// A window whose scroll moves only when the engine asks it to.
///
/// # Example
///
/// ```rust
/// use astrelis_core::math::Vec2;
/// use astrelis_dnd::WindowHost;
/// use astrelis_test_utils::MockWindow;
///
/// let mut window =
///     MockWindow::new(Vec2::new(800.0, 600.0)).with_document(Vec2::new(800.0, 1000.0));
/// window.scroll_by(Vec2::new(0.0, 500.0));
/// assert_eq!(window.scroll(), Vec2::new(0.0, 400.0));
/// assert_eq!(window.scroll_calls(), vec![Vec2::new(0.0, 500.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct MockWindow {
    state: Arc<Mutex<WindowState>>,
}

impl MockWindow {
    /// A window exactly as large as its document, so it cannot scroll.
    pub fn new(size: Vec2) -> Self {
        Self {
            state: Arc::new(Mutex::new(WindowState {
                size,
                scroll: Vec2::ZERO,
                document_size: size,
                scroll_calls: Vec::new(),
            })),
        }
    }

    pub fn with_document(self, document_size: Vec2) -> Self {
        self.state.lock().document_size = document_size;
        self
    }

    pub fn scroll(&self) -> Vec2 {
        self.state.lock().scroll
    }

    /// Pretend the user scrolled the window.
    pub fn set_scroll(&self, scroll: Vec2) {
        self.state.lock().scroll = scroll;
    }

    pub fn scroll_calls(&self) -> Vec<Vec2> {
        self.state.lock().scroll_calls.clone()
    }
}

impl WindowHost for MockWindow {
    fn viewport(&self) -> Viewport {
        let state = self.state.lock();
        Viewport::new(state.size, state.scroll, state.document_size)
    }

    fn scroll_by(&mut self, change: Vec2) {
        let mut state = self.state.lock();
        let max = (state.document_size - state.size).max(Vec2::ZERO);
        state.scroll = (state.scroll + change).clamp(Vec2::ZERO, max);
        state.scroll_calls.push(change);
    }
}

#[derive(Debug)]
struct DraggableState {
    descriptor: DraggableDescriptor,
    client: Rect,
    is_enabled: bool,
    measure_count: usize,
}

/// A draggable with a fixed client rect.
#[derive(Debug, Clone)]
pub struct MockDraggable {
    state: Arc<Mutex<DraggableState>>,
}

impl MockDraggable {
    pub fn new(descriptor: DraggableDescriptor, client: Rect) -> Self {
        Self {
            state: Arc::new(Mutex::new(DraggableState {
                descriptor,
                client,
                is_enabled: true,
                measure_count: 0,
            })),
        }
    }

    pub fn set_enabled(&self, is_enabled: bool) {
        self.state.lock().is_enabled = is_enabled;
    }

    /// Number of times the engine measured this draggable.
    pub fn measure_count(&self) -> usize {
        self.state.lock().measure_count
    }
}

impl DraggableSource for MockDraggable {
    fn dimension(&self, window_scroll: Vec2) -> DraggableDimension {
        let mut state = self.state.lock();
        state.measure_count += 1;
        DraggableDimension::new(
            state.descriptor.clone(),
            BoxModel::from_border_box(state.client),
            window_scroll,
        )
    }

    fn is_enabled(&self) -> bool {
        self.state.lock().is_enabled
    }
}

#[derive(Debug)]
struct DroppableState {
    list: ListFixture,
    scroll: Vec2,
    watching: Option<ScrollOptions>,
    scroll_calls: Vec<Vec2>,
    stopped_count: usize,
}

/// A droppable measured from a [`ListFixture`], with a scroll container
/// if the fixture has one.
#[derive(Debug, Clone)]
pub struct MockDroppable {
    state: Arc<Mutex<DroppableState>>,
}

impl MockDroppable {
    pub fn new(list: ListFixture) -> Self {
        Self {
            state: Arc::new(Mutex::new(DroppableState {
                list,
                scroll: Vec2::ZERO,
                watching: None,
                scroll_calls: Vec::new(),
                stopped_count: 0,
            })),
        }
    }

    /// Current scroll of the container.
    pub fn scroll(&self) -> Vec2 {
        self.state.lock().scroll
    }

    /// Scroll changes the engine asked for.
    pub fn scroll_calls(&self) -> Vec<Vec2> {
        self.state.lock().scroll_calls.clone()
    }

    /// Scroll options passed at the last measurement while still watching.
    pub fn watching(&self) -> Option<ScrollOptions> {
        self.state.lock().watching
    }

    pub fn stopped_count(&self) -> usize {
        self.state.lock().stopped_count
    }
}

impl DroppableSource for MockDroppable {
    fn dimension_and_watch_scroll(
        &mut self,
        window_scroll: Vec2,
        options: ScrollOptions,
    ) -> DroppableDimension {
        let mut state = self.state.lock();
        state.watching = Some(options);
        state.list.droppable_dimension(window_scroll, state.scroll)
    }

    fn scroll_while_dragging(&self) -> Vec2 {
        self.state.lock().scroll
    }

    fn scroll(&mut self, change: Vec2) {
        let mut state = self.state.lock();
        let max = state
            .list
            .frame
            .map_or(Vec2::ZERO, |frame| (frame.scroll_size - frame.client.size()).max(Vec2::ZERO));
        state.scroll = (state.scroll + change).clamp(Vec2::ZERO, max);
        state.scroll_calls.push(change);
    }

    fn drag_stopped(&mut self) {
        let mut state = self.state.lock();
        state.watching = None;
        state.stopped_count += 1;
    }
}

/// Handles to everything [`ListFixture::register`] mounted.
#[derive(Debug, Clone)]
pub struct MountedList {
    pub droppable: MockDroppable,
    pub droppable_unique_id: UniqueId,
    pub draggables: Vec<(MockDraggable, UniqueId)>,
}

impl ListFixture {
    /// Mount the droppable and all of its items on `engine`.
    pub fn register(&self, engine: &mut DragDropEngine) -> MountedList {
        let droppable = MockDroppable::new(self.clone());
        let droppable_unique_id =
            engine.register_droppable(self.descriptor.clone(), droppable.clone());

        let draggables = self
            .items
            .iter()
            .map(|(descriptor, rect)| {
                let draggable = MockDraggable::new(descriptor.clone(), *rect);
                let unique_id = engine.register_draggable(descriptor.clone(), draggable.clone());
                (draggable, unique_id)
            })
            .collect();

        MountedList {
            droppable,
            droppable_unique_id,
            draggables,
        }
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock()
    }
}

/// One responder call.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponderEvent {
    BeforeCapture(BeforeCapture),
    BeforeDragStart(DragStart),
    DragStart(DragStart),
    DragUpdate(DragUpdate),
    DragEnd(DropResult),
}

impl ResponderEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ResponderEvent::BeforeCapture(_) => "onBeforeCapture",
            ResponderEvent::BeforeDragStart(_) => "onBeforeDragStart",
            ResponderEvent::DragStart(_) => "onDragStart",
            ResponderEvent::DragUpdate(_) => "onDragUpdate",
            ResponderEvent::DragEnd(_) => "onDragEnd",
        }
    }
}

/// Responders that remember every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingResponders {
    events: Arc<Mutex<Vec<ResponderEvent>>>,
}

impl RecordingResponders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ResponderEvent> {
        self.events.lock().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(ResponderEvent::name).collect()
    }

    /// The most recent drop result, if any.
    pub fn last_result(&self) -> Option<DropResult> {
        self.events.lock().iter().rev().find_map(|event| match event {
            ResponderEvent::DragEnd(result) => Some(result.clone()),
            _ => None,
        })
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    fn record(&self, event: ResponderEvent) {
        self.events.lock().push(event);
    }
}

impl Responders for RecordingResponders {
    fn on_before_capture(&mut self, before: BeforeCapture) {
        self.record(ResponderEvent::BeforeCapture(before));
    }

    fn on_before_drag_start(&mut self, start: DragStart) {
        self.record(ResponderEvent::BeforeDragStart(start));
    }

    fn on_drag_start(&mut self, start: DragStart) {
        self.record(ResponderEvent::DragStart(start));
    }

    fn on_drag_update(&mut self, update: DragUpdate) {
        self.record(ResponderEvent::DragUpdate(update));
    }

    fn on_drag_end(&mut self, result: DropResult) {
        self.record(ResponderEvent::DragEnd(result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_scroll_is_clamped() {
        let mut window =
            MockWindow::new(Vec2::new(100.0, 100.0)).with_document(Vec2::new(100.0, 150.0));
        window.scroll_by(Vec2::new(0.0, 80.0));
        assert_eq!(window.scroll(), Vec2::new(0.0, 50.0));
        assert_eq!(window.viewport().scroll.max, Vec2::new(0.0, 50.0));
    }

    #[test]
    fn test_clock_advances() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(Duration::from_millis(250));
        assert_eq!(clock.now(), Duration::from_millis(250));
    }
}
