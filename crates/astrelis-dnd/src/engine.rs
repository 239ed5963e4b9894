//! The drag and drop engine.
//!
//! [`DragDropEngine`] owns every moving part of a drag. All changes go
//! through [`DragDropEngine::dispatch`], which runs each action past the
//! marshal, the lift and drop handling, the auto scroller and the
//! responders before the reducer produces the next state.

use std::mem;

use astrelis_core::math::Vec2;
use astrelis_core::profiling::profile_function;

use crate::auto_scroll::{AutoScroller, JumpPlan};
use crate::config::DndConfig;
use crate::descriptor::{
    DraggableDescriptor, DraggableId, DropReason, DroppableDescriptor, DroppableId, MovementMode,
};
use crate::error::{DndError, DndResult};
use crate::host::{Clock, DraggableSource, DroppableSource, ScrollOptions, SystemClock, WindowHost};
use crate::invariant;
use crate::marshal::{DimensionMarshal, PublishRequest};
use crate::registry::{DraggableEntry, DroppableEntry, Registry, UniqueId};
use crate::responders::{NoopResponders, ResponderPublisher, Responders};
use crate::sensor::{DragLock, LiftArgs, LockClaim};
use crate::state::{
    Action, DragState, DropOutcome, InitialPublishArgs, can_start_drag, plan_drop, reduce,
};

/// Headless drag and drop engine.
///
/// Single threaded: hosts call into it from their UI thread and drive
/// deferred work with [`DragDropEngine::on_frame`].
pub struct DragDropEngine {
    config: DndConfig,
    state: DragState,
    registry: Registry,
    marshal: DimensionMarshal,
    auto_scroller: AutoScroller,
    publisher: ResponderPublisher,
    responders: Box<dyn Responders>,
    window: Box<dyn WindowHost>,
    clock: Box<dyn Clock>,
    lock: DragLock,
}

impl std::fmt::Debug for DragDropEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragDropEngine")
            .field("phase", &self.state.phase())
            .field("registry", &self.registry)
            .field("lock_held", &self.lock.is_held())
            .finish_non_exhaustive()
    }
}

impl DragDropEngine {
    pub fn new(window: impl WindowHost + 'static) -> Self {
        let config = DndConfig::default();
        Self {
            auto_scroller: AutoScroller::new(config.auto_scroll),
            config,
            state: DragState::default(),
            registry: Registry::new(),
            marshal: DimensionMarshal::new(),
            publisher: ResponderPublisher::new(),
            responders: Box::new(NoopResponders),
            window: Box::new(window),
            clock: Box::new(SystemClock::default()),
            lock: DragLock::new(),
        }
    }

    pub fn with_config(mut self, config: DndConfig) -> Self {
        self.auto_scroller = AutoScroller::new(config.auto_scroll);
        self.config = config;
        self
    }

    pub fn with_responders(mut self, responders: impl Responders + 'static) -> Self {
        self.responders = Box::new(responders);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &DndConfig {
        &self.config
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    // ---- Registration ----

    pub fn register_draggable(
        &mut self,
        descriptor: DraggableDescriptor,
        source: impl DraggableSource + 'static,
    ) -> UniqueId {
        let unique_id = self.registry.next_unique_id();
        self.registry.register_draggable(DraggableEntry {
            unique_id,
            descriptor,
            source: Box::new(source),
        });
        self.forward_registry_events();
        unique_id
    }

    /// Replace a draggable whose descriptor changed without remounting.
    pub fn update_draggable(
        &mut self,
        last_id: &DraggableId,
        unique_id: UniqueId,
        descriptor: DraggableDescriptor,
        source: impl DraggableSource + 'static,
    ) {
        self.registry.update_draggable(
            DraggableEntry {
                unique_id,
                descriptor,
                source: Box::new(source),
            },
            last_id,
        );
    }

    pub fn unregister_draggable(&mut self, id: &DraggableId, unique_id: UniqueId) {
        self.registry.unregister_draggable(id, unique_id);
        self.forward_registry_events();
    }

    pub fn register_droppable(
        &mut self,
        descriptor: DroppableDescriptor,
        source: impl DroppableSource + 'static,
    ) -> UniqueId {
        let unique_id = self.registry.next_unique_id();
        self.registry.register_droppable(DroppableEntry {
            unique_id,
            descriptor,
            source: Box::new(source),
        });
        unique_id
    }

    pub fn unregister_droppable(&mut self, id: &DroppableId, unique_id: UniqueId) {
        self.registry.unregister_droppable(id, unique_id);
    }

    fn forward_registry_events(&mut self) {
        if let Some(action) = self.marshal.process_events(&self.registry) {
            if let Err(err) = self.guarded(|engine| engine.dispatch(action)) {
                tracing::warn!("Failed to start collecting virtual dimensions: {}", err);
            }
        }
    }

    // ---- Sensor contract ----

    /// Claim the drag lock for `draggable_id` if a drag may start now.
    ///
    /// The lock is shared by every engine on the thread.
    pub fn try_get_lock(&mut self, draggable_id: &DraggableId) -> Option<LockClaim> {
        self.check_abandoned();

        if self.lock.is_claimed() {
            return None;
        }
        let entry = self.registry.find_draggable(draggable_id)?;
        if !entry.source.is_enabled() {
            tracing::debug!("Not claiming lock for disabled draggable {}", draggable_id);
            return None;
        }
        if !can_start_drag(&self.state, draggable_id) {
            return None;
        }
        self.lock.claim(draggable_id.clone()).ok()
    }

    pub fn lift(&mut self, claim: &LockClaim, args: LiftArgs) -> DndResult<()> {
        self.check_abandoned();
        claim.ensure_active()?;
        let action = Action::Lift {
            id: claim.draggable_id().clone(),
            client_selection: args.client_selection,
            movement_mode: args.movement_mode,
        };
        self.guarded(|engine| engine.dispatch(action))
    }

    pub fn move_to(&mut self, claim: &LockClaim, client: Vec2) -> DndResult<()> {
        self.claimed_dispatch(claim, Action::Move { client })
    }

    pub fn move_up(&mut self, claim: &LockClaim) -> DndResult<()> {
        self.claimed_dispatch(claim, Action::MoveUp)
    }

    pub fn move_down(&mut self, claim: &LockClaim) -> DndResult<()> {
        self.claimed_dispatch(claim, Action::MoveDown)
    }

    pub fn move_left(&mut self, claim: &LockClaim) -> DndResult<()> {
        self.claimed_dispatch(claim, Action::MoveLeft)
    }

    pub fn move_right(&mut self, claim: &LockClaim) -> DndResult<()> {
        self.claimed_dispatch(claim, Action::MoveRight)
    }

    /// End the drag and give the lock back.
    pub fn drop(&mut self, claim: LockClaim, reason: DropReason) -> DndResult<()> {
        let result = self.claimed_dispatch(&claim, Action::Drop { reason });
        claim.release();
        result
    }

    pub fn cancel(&mut self, claim: LockClaim) -> DndResult<()> {
        self.drop(claim, DropReason::Cancel)
    }

    fn claimed_dispatch(&mut self, claim: &LockClaim, action: Action) -> DndResult<()> {
        self.check_abandoned();
        claim.ensure_active()?;
        self.guarded(|engine| engine.dispatch(action))
    }

    // ---- Host notifications ----

    /// The window scrolled to `new_scroll`.
    pub fn window_scrolled(&mut self, new_scroll: Vec2) -> DndResult<()> {
        self.check_abandoned();
        self.guarded(|engine| match &engine.state {
            DragState::DropAnimating(_) => engine.dispatch(Action::DropAnimationFinished),
            DragState::Dragging(state) | DragState::Collecting(state) => {
                if !state.is_window_scroll_allowed {
                    tracing::debug!("Ignoring window scroll while dragging over a fixed list");
                    return Ok(());
                }
                engine.dispatch(Action::MoveByWindowScroll { new_scroll })
            }
            _ => Ok(()),
        })
    }

    /// A watched droppable scrolled to `new_scroll`.
    pub fn droppable_scrolled(&mut self, id: &DroppableId, new_scroll: Vec2) -> DndResult<()> {
        self.check_abandoned();
        let Some(action) = self.marshal.update_droppable_scroll(&self.registry, id, new_scroll)
        else {
            return Ok(());
        };
        self.guarded(|engine| engine.dispatch(action))
    }

    pub fn viewport_max_scroll_changed(&mut self, max_scroll: Vec2) -> DndResult<()> {
        if !self.state.is_dragging() {
            return Ok(());
        }
        self.guarded(|engine| engine.dispatch(Action::UpdateViewportMaxScroll { max_scroll }))
    }

    pub fn set_droppable_enabled(&mut self, id: &DroppableId, is_enabled: bool) -> DndResult<()> {
        self.guarded(|engine| {
            match engine
                .marshal
                .update_droppable_is_enabled(&engine.registry, id, is_enabled)?
            {
                Some(action) => engine.dispatch(action),
                None => Ok(()),
            }
        })
    }

    pub fn set_droppable_combine_enabled(
        &mut self,
        id: &DroppableId,
        is_combine_enabled: bool,
    ) -> DndResult<()> {
        self.guarded(|engine| {
            match engine.marshal.update_droppable_is_combine_enabled(
                &engine.registry,
                id,
                is_combine_enabled,
            )? {
                Some(action) => engine.dispatch(action),
                None => Ok(()),
            }
        })
    }

    /// The host finished animating the drop.
    pub fn drop_animation_finished(&mut self) -> DndResult<()> {
        self.guarded(|engine| engine.dispatch(Action::DropAnimationFinished))
    }

    /// Run work deferred to this frame.
    pub fn on_frame(&mut self) -> DndResult<()> {
        profile_function!();
        self.check_abandoned();

        self.publisher.flush(self.responders.as_mut());

        if let Some(published) = self.marshal.flush(&self.registry) {
            self.guarded(|engine| engine.dispatch(Action::PublishWhileDragging(published)))?;
        }

        if let Some(change) = self.auto_scroller.take_window_scroll() {
            self.window.scroll_by(change);
        }
        if let Some((id, change)) = self.auto_scroller.take_droppable_scroll() {
            self.marshal.scroll_droppable(&mut self.registry, &id, change);
        }
        Ok(())
    }

    /// Stop any drag immediately, without a drop animation.
    pub fn abort(&mut self) {
        self.lock.invalidate();
        if let Err(err) = self.dispatch(Action::Flush) {
            tracing::error!("Failed to flush drag state: {}", err);
        }
    }

    fn check_abandoned(&mut self) {
        if self.lock.take_abandoned() && self.state.is_dragging() {
            tracing::warn!("Drag lock was dropped mid drag, aborting");
            self.abort();
        }
    }

    /// Run `f`, aborting any active drag if it fails.
    fn guarded(&mut self, f: impl FnOnce(&mut Self) -> DndResult<()>) -> DndResult<()> {
        let was_active = self.is_active();
        let result = f(self);
        if let Err(err) = &result {
            tracing::error!("Drag and drop error: {}", err);
            // A failed reduce leaves the state reset, so look at both sides
            if was_active || self.is_active() {
                self.abort();
            }
        }
        result
    }

    fn is_active(&self) -> bool {
        self.lock.is_held() || !matches!(self.state, DragState::Idle(_))
    }

    // ---- Action pipeline ----

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) -> DndResult<()> {
        tracing::trace!("Dispatching {}", action.name());

        if matches!(
            action,
            Action::DropComplete { .. } | Action::Flush | Action::DropAnimate(_)
        ) {
            self.marshal.stop_publishing(&mut self.registry);
        }

        match action {
            Action::Lift {
                id,
                client_selection,
                movement_mode,
            } => self.handle_lift(id, client_selection, movement_mode),
            Action::Drop { reason } => self.handle_drop(reason),
            Action::DropAnimationFinished => {
                let DragState::DropAnimating(animating) = &self.state else {
                    return Err(DndError::InvalidPhase {
                        action: "DROP_ANIMATION_FINISHED",
                        phase: self.state.phase(),
                    });
                };
                let completed = animating.completed.clone();
                self.dispatch(Action::DropComplete { completed })
            }
            action => {
                let is_publish = matches!(action, Action::PublishWhileDragging(_));
                self.auto_scroll(action)?;
                if is_publish {
                    self.try_pending_drop()?;
                }
                Ok(())
            }
        }
    }

    fn handle_lift(
        &mut self,
        id: DraggableId,
        client_selection: Vec2,
        movement_mode: MovementMode,
    ) -> DndResult<()> {
        if let DragState::DropAnimating(animating) = &self.state {
            let completed = animating.completed.clone();
            self.dispatch(Action::DropComplete { completed })?;
        }
        invariant!(
            matches!(self.state, DragState::Idle(_)),
            "Unexpected phase to start a drag: {}",
            self.state.phase()
        );

        self.dispatch(Action::Flush)?;
        self.dispatch(Action::BeforeInitialCapture {
            draggable_id: id.clone(),
            movement_mode,
        })?;

        let request = PublishRequest {
            draggable_id: id,
            scroll_options: ScrollOptions {
                should_publish_immediately: movement_mode == MovementMode::Snap,
            },
        };
        let initial =
            self.marshal
                .start_publishing(&mut self.registry, self.window.as_ref(), &request)?;

        self.dispatch(Action::InitialPublish(InitialPublishArgs {
            critical: initial.critical,
            dimensions: initial.dimensions,
            client_selection,
            movement_mode,
            viewport: initial.viewport,
        }))
    }

    fn handle_drop(&mut self, reason: DropReason) -> DndResult<()> {
        let outcome = match &self.state {
            DragState::Collecting(_) => return self.dispatch(Action::DropPending { reason }),
            DragState::Idle(_) => return Ok(()),
            DragState::DropPending(pending) if pending.is_waiting => {
                return Err(DndError::invariant(
                    "A DROP action occurred while DROP_PENDING and still waiting",
                ));
            }
            DragState::Dragging(state) => plan_drop(state, reason, &self.config.drop)?,
            DragState::DropPending(pending) => {
                plan_drop(&pending.dragging, reason, &self.config.drop)?
            }
            DragState::DropAnimating(_) => {
                return Err(DndError::InvalidPhase {
                    action: "DROP",
                    phase: self.state.phase(),
                });
            }
        };

        match outcome {
            DropOutcome::Complete(completed) => self.dispatch(Action::DropComplete { completed }),
            DropOutcome::Animate(args) => {
                tracing::debug!(
                    "Animating drop of {} over {:.2}s",
                    args.completed.result.draggable_id,
                    args.drop_duration
                );
                self.dispatch(Action::DropAnimate(args))
            }
        }
    }

    fn try_pending_drop(&mut self) -> DndResult<()> {
        let DragState::DropPending(pending) = &self.state else {
            return Ok(());
        };
        if pending.is_waiting {
            return Ok(());
        }
        let reason = pending.reason;
        self.dispatch(Action::Drop { reason })
    }

    fn auto_scroll(&mut self, action: Action) -> DndResult<()> {
        if matches!(
            action,
            Action::DropComplete { .. } | Action::DropAnimate(_) | Action::Flush
        ) {
            self.auto_scroller.stop();
            return self.respond(action);
        }

        if matches!(action, Action::InitialPublish(_)) {
            self.respond(action)?;
            let DragState::Dragging(state) = &self.state else {
                return Err(DndError::invariant("Expected to be dragging after INITIAL_PUBLISH"));
            };
            self.auto_scroller.start(state, self.clock.now());
            return Ok(());
        }

        self.respond(action)?;
        let DragState::Dragging(state) = &self.state else {
            return Ok(());
        };
        match self.auto_scroller.scroll(state, self.clock.now())? {
            Some(plan) => self.jump(plan),
            None => Ok(()),
        }
    }

    fn jump(&mut self, plan: JumpPlan) -> DndResult<()> {
        if let Some((id, change)) = plan.droppable_scroll {
            self.marshal.scroll_droppable(&mut self.registry, &id, change);
        }
        if let Some(change) = plan.window_scroll {
            self.window.scroll_by(change);
        }
        match plan.move_to {
            Some(client) => self.dispatch(Action::Move { client }),
            None => Ok(()),
        }
    }

    fn respond(&mut self, action: Action) -> DndResult<()> {
        match action {
            Action::BeforeInitialCapture {
                draggable_id,
                movement_mode,
            } => self
                .publisher
                .before_capture(self.responders.as_mut(), &draggable_id, movement_mode),
            Action::InitialPublish(args) => {
                let critical = args.critical.clone();
                let movement_mode = args.movement_mode;
                self.publisher
                    .before_start(self.responders.as_mut(), &critical, movement_mode)?;
                self.reduce(Action::InitialPublish(args))?;
                self.publisher.start(&critical, movement_mode)
            }
            Action::DropComplete { completed } => {
                let result = completed.result.clone();
                self.publisher.flush(self.responders.as_mut());
                self.reduce(Action::DropComplete { completed })?;
                self.publisher.drop(self.responders.as_mut(), result)
            }
            Action::Flush => {
                self.reduce(Action::Flush)?;
                self.publisher.abort(self.responders.as_mut());
                Ok(())
            }
            action => {
                self.reduce(action)?;
                match &self.state {
                    DragState::Dragging(state) => {
                        self.publisher.update(&state.critical, &state.impact)
                    }
                    _ => Ok(()),
                }
            }
        }
    }

    fn reduce(&mut self, action: Action) -> DndResult<()> {
        let before = self.state.phase();
        let name = action.name();
        self.state = reduce(mem::take(&mut self.state), action)?;

        let after = self.state.phase();
        if before != after {
            tracing::debug!("{}: {} -> {}", name, before, after);
        }
        Ok(())
    }
}
