//! Collects dimensions for a drag and keeps them current.

mod publisher;

use std::cell::RefCell;
use std::rc::Rc;

use astrelis_core::math::Vec2;
use astrelis_core::profiling::profile_function;

use crate::descriptor::{Critical, DraggableDescriptor, DraggableId, DroppableId, DroppableMode};
use crate::dimension::DimensionMap;
use crate::error::DndResult;
use crate::host::{ScrollOptions, WindowHost};
use crate::invariant;
use crate::registry::{Registry, RegistryEvent, SubscriptionId};
use crate::state::{Action, Published};
use crate::viewport::Viewport;

pub use publisher::Publisher;

/// What to collect at lift.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub draggable_id: DraggableId,
    pub scroll_options: ScrollOptions,
}

/// Dimensions captured at lift.
#[derive(Debug, Clone)]
pub struct InitialPublish {
    pub critical: Critical,
    pub dimensions: DimensionMap,
    pub viewport: Viewport,
}

#[derive(Debug)]
struct Collection {
    critical: Critical,
    subscription: SubscriptionId,
}

/// Gathers dimensions from the registry at lift and follows virtual lists
/// while the drag is in progress.
#[derive(Debug, Default)]
pub struct DimensionMarshal {
    collection: Option<Collection>,
    publisher: Publisher,
    inbox: Rc<RefCell<Vec<RegistryEvent>>>,
}

impl DimensionMarshal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_publishing(&self) -> bool {
        self.collection.is_some()
    }

    pub fn start_publishing(
        &mut self,
        registry: &mut Registry,
        window: &dyn WindowHost,
        request: &PublishRequest,
    ) -> DndResult<InitialPublish> {
        profile_function!();
        invariant!(
            self.collection.is_none(),
            "Cannot start capturing critical dimensions as there is already a collection"
        );

        let entry = registry.get_draggable(&request.draggable_id)?;
        let home = registry.get_droppable(&entry.descriptor.droppable_id)?;
        let critical = Critical {
            draggable: entry.descriptor.clone(),
            droppable: home.descriptor.clone(),
        };

        let inbox = Rc::clone(&self.inbox);
        let subscription = registry.subscribe(move |event| inbox.borrow_mut().push(event.clone()));
        self.collection = Some(Collection {
            critical: critical.clone(),
            subscription,
        });

        let viewport = window.viewport();
        let window_scroll = viewport.scroll.current;

        let droppables: Vec<_> = registry
            .droppables_by_type_mut(&critical.droppable.item_type)
            .map(|entry| {
                entry
                    .source
                    .dimension_and_watch_scroll(window_scroll, request.scroll_options)
            })
            .collect();
        let draggables: Vec<_> = registry
            .draggables_by_type(&critical.draggable.item_type)
            .map(|entry| entry.source.dimension(window_scroll))
            .collect();

        tracing::debug!(
            "Collected {} draggables and {} droppables for drag of {}",
            draggables.len(),
            droppables.len(),
            critical.draggable.id
        );

        Ok(InitialPublish {
            critical,
            dimensions: DimensionMap::from_parts(draggables, droppables),
            viewport,
        })
    }

    fn should_publish_update(
        registry: &Registry,
        dragging: &DraggableDescriptor,
        changed: &DraggableDescriptor,
    ) -> bool {
        if changed.id == dragging.id || changed.item_type != dragging.item_type {
            return false;
        }

        let Some(home) = registry.find_droppable(&changed.droppable_id) else {
            tracing::warn!(
                "Draggable {} changed inside unknown droppable {}",
                changed.id,
                changed.droppable_id
            );
            return false;
        };
        if home.descriptor.mode != DroppableMode::Virtual {
            tracing::warn!(
                "Draggable {} was added or removed during a drag in non-virtual droppable {}. \
                 This is only supported for virtual lists",
                changed.id,
                home.descriptor.id
            );
            return false;
        }
        true
    }

    /// Stage registry events received since the last call.
    ///
    /// Returns [`Action::CollectionStarting`] when they open a new batch.
    pub fn process_events(&mut self, registry: &Registry) -> Option<Action> {
        let events = std::mem::take(&mut *self.inbox.borrow_mut());
        let collection = self.collection.as_ref()?;
        let dragging = &collection.critical.draggable;

        let mut started = false;
        for event in &events {
            match event {
                RegistryEvent::Addition(descriptor) => {
                    if Self::should_publish_update(registry, dragging, descriptor) {
                        started |= self.publisher.add(descriptor);
                    }
                }
                RegistryEvent::Removal(descriptor) => {
                    if Self::should_publish_update(registry, dragging, descriptor) {
                        started |= self.publisher.remove(descriptor);
                    }
                }
            }
        }
        started.then_some(Action::CollectionStarting)
    }

    /// Measure the staged batch for this frame.
    pub fn flush(&mut self, registry: &Registry) -> Option<Published> {
        if self.collection.is_none() {
            return None;
        }
        self.publisher.flush(registry)
    }

    pub fn update_droppable_scroll(
        &self,
        registry: &Registry,
        id: &DroppableId,
        new_scroll: Vec2,
    ) -> Option<Action> {
        if !registry.exists_droppable(id) {
            tracing::warn!("Ignoring scroll of unknown droppable {}", id);
            return None;
        }
        self.collection.as_ref()?;
        Some(Action::UpdateDroppableScroll {
            id: id.clone(),
            new_scroll,
        })
    }

    pub fn update_droppable_is_enabled(
        &self,
        registry: &Registry,
        id: &DroppableId,
        is_enabled: bool,
    ) -> DndResult<Option<Action>> {
        registry.get_droppable(id)?;
        Ok(self
            .collection
            .as_ref()
            .map(|_| Action::UpdateDroppableIsEnabled {
                id: id.clone(),
                is_enabled,
            }))
    }

    pub fn update_droppable_is_combine_enabled(
        &self,
        registry: &Registry,
        id: &DroppableId,
        is_combine_enabled: bool,
    ) -> DndResult<Option<Action>> {
        registry.get_droppable(id)?;
        Ok(self
            .collection
            .as_ref()
            .map(|_| Action::UpdateDroppableIsCombineEnabled {
                id: id.clone(),
                is_combine_enabled,
            }))
    }

    /// Ask a droppable to scroll its frame.
    pub fn scroll_droppable(&self, registry: &mut Registry, id: &DroppableId, change: Vec2) {
        if self.collection.is_none() {
            return;
        }
        match registry.get_droppable_mut(id) {
            Ok(entry) => entry.source.scroll(change),
            Err(err) => tracing::warn!("Cannot scroll droppable: {}", err),
        }
    }

    /// Tear down the collection. Does nothing when not publishing.
    pub fn stop_publishing(&mut self, registry: &mut Registry) {
        let Some(collection) = self.collection.take() else {
            return;
        };

        self.publisher.stop();
        self.inbox.borrow_mut().clear();

        let home_type = &collection.critical.droppable.item_type;
        for entry in registry.droppables_by_type_mut(home_type) {
            entry.source.drag_stopped();
        }
        registry.unsubscribe(collection.subscription);
        tracing::debug!("Stopped publishing for {}", collection.critical.draggable.id);
    }
}
