//! Mounted draggables and droppables.

use std::fmt;

use astrelis_core::alloc::IndexMap;

use crate::descriptor::{
    DraggableDescriptor, DraggableId, DroppableDescriptor, DroppableId, ItemType,
};
use crate::error::{DndError, DndResult};
use crate::host::{DraggableSource, DroppableSource};

/// Distinguishes two mounts of the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniqueId(u64);

/// Hands out increasing [`UniqueId`]s.
#[derive(Debug, Default)]
pub struct UniqueIdGenerator {
    next: u64,
}

impl UniqueIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> UniqueId {
        let id = UniqueId(self.next);
        self.next += 1;
        id
    }
}

pub struct DraggableEntry {
    pub unique_id: UniqueId,
    pub descriptor: DraggableDescriptor,
    pub source: Box<dyn DraggableSource>,
}

impl fmt::Debug for DraggableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraggableEntry")
            .field("unique_id", &self.unique_id)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

pub struct DroppableEntry {
    pub unique_id: UniqueId,
    pub descriptor: DroppableDescriptor,
    pub source: Box<dyn DroppableSource>,
}

impl fmt::Debug for DroppableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DroppableEntry")
            .field("unique_id", &self.unique_id)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// A draggable mounted or unmounted.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEvent {
    Addition(DraggableDescriptor),
    Removal(DraggableDescriptor),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&RegistryEvent)>;

/// Every mounted draggable and droppable, keyed by id.
#[derive(Default)]
pub struct Registry {
    draggables: IndexMap<DraggableId, DraggableEntry>,
    droppables: IndexMap<DroppableId, DroppableEntry>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    unique_ids: UniqueIdGenerator,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("draggables", &self.draggables.len())
            .field("droppables", &self.droppables.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_unique_id(&mut self) -> UniqueId {
        self.unique_ids.next_id()
    }

    fn notify(&mut self, event: RegistryEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }

    /// Listen for draggable additions and removals.
    pub fn subscribe(&mut self, listener: impl FnMut(&RegistryEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    pub fn register_draggable(&mut self, entry: DraggableEntry) {
        let descriptor = entry.descriptor.clone();
        self.draggables.insert(descriptor.id.clone(), entry);
        self.notify(RegistryEvent::Addition(descriptor));
    }

    /// Replace the entry previously registered as `last_id`, as long as it is
    /// still the same mount.
    pub fn update_draggable(&mut self, entry: DraggableEntry, last_id: &DraggableId) {
        let Some(current) = self.draggables.get(last_id) else {
            return;
        };
        if current.unique_id != entry.unique_id {
            return;
        }
        self.draggables.shift_remove(last_id);
        self.draggables.insert(entry.descriptor.id.clone(), entry);
    }

    /// Remove a draggable unless it was re-registered by a newer mount.
    pub fn unregister_draggable(&mut self, id: &DraggableId, unique_id: UniqueId) {
        let is_current = self
            .draggables
            .get(id)
            .is_some_and(|current| current.unique_id == unique_id);
        if !is_current {
            return;
        }
        let Some(entry) = self.draggables.shift_remove(id) else {
            return;
        };
        if self.droppables.contains_key(&entry.descriptor.droppable_id) {
            self.notify(RegistryEvent::Removal(entry.descriptor));
        }
    }

    pub fn get_draggable(&self, id: &DraggableId) -> DndResult<&DraggableEntry> {
        self.find_draggable(id)
            .ok_or_else(|| DndError::DraggableNotFound(id.clone()))
    }

    pub fn find_draggable(&self, id: &DraggableId) -> Option<&DraggableEntry> {
        self.draggables.get(id)
    }

    pub fn exists_draggable(&self, id: &DraggableId) -> bool {
        self.draggables.contains_key(id)
    }

    pub fn draggables_by_type<'a>(
        &'a self,
        item_type: &'a ItemType,
    ) -> impl Iterator<Item = &'a DraggableEntry> + 'a {
        self.draggables
            .values()
            .filter(move |entry| &entry.descriptor.item_type == item_type)
    }

    pub fn register_droppable(&mut self, entry: DroppableEntry) {
        self.droppables.insert(entry.descriptor.id.clone(), entry);
    }

    pub fn unregister_droppable(&mut self, id: &DroppableId, unique_id: UniqueId) {
        let is_current = self
            .droppables
            .get(id)
            .is_some_and(|current| current.unique_id == unique_id);
        if is_current {
            self.droppables.shift_remove(id);
        }
    }

    pub fn get_droppable(&self, id: &DroppableId) -> DndResult<&DroppableEntry> {
        self.find_droppable(id)
            .ok_or_else(|| DndError::DroppableNotFound(id.clone()))
    }

    pub fn get_droppable_mut(&mut self, id: &DroppableId) -> DndResult<&mut DroppableEntry> {
        self.droppables
            .get_mut(id)
            .ok_or_else(|| DndError::DroppableNotFound(id.clone()))
    }

    pub fn find_droppable(&self, id: &DroppableId) -> Option<&DroppableEntry> {
        self.droppables.get(id)
    }

    pub fn exists_droppable(&self, id: &DroppableId) -> bool {
        self.droppables.contains_key(id)
    }

    pub fn droppables_by_type<'a>(
        &'a self,
        item_type: &'a ItemType,
    ) -> impl Iterator<Item = &'a DroppableEntry> + 'a {
        self.droppables
            .values()
            .filter(move |entry| &entry.descriptor.item_type == item_type)
    }

    pub fn droppables_by_type_mut<'a>(
        &'a mut self,
        item_type: &'a ItemType,
    ) -> impl Iterator<Item = &'a mut DroppableEntry> + 'a {
        self.droppables
            .values_mut()
            .filter(move |entry| &entry.descriptor.item_type == item_type)
    }

    /// Forget every entry and listener.
    pub fn clean(&mut self) {
        self.draggables.clear();
        self.droppables.clear();
        self.listeners.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use astrelis_core::math::Vec2;

    use super::*;
    use crate::dimension::DraggableDimension;
    use crate::geometry::{BoxModel, Rect};

    struct Fixed(DraggableDescriptor);

    impl DraggableSource for Fixed {
        fn dimension(&self, window_scroll: Vec2) -> DraggableDimension {
            DraggableDimension::new(
                self.0.clone(),
                BoxModel::from_border_box(Rect::from_size(0.0, 0.0, 10.0, 10.0)),
                window_scroll,
            )
        }
    }

    fn entry(registry: &mut Registry, id: &str) -> DraggableEntry {
        let descriptor = DraggableDescriptor::new(id, 0, "list");
        DraggableEntry {
            unique_id: registry.next_unique_id(),
            descriptor: descriptor.clone(),
            source: Box::new(Fixed(descriptor)),
        }
    }

    #[test]
    fn test_stale_unregister_is_ignored() {
        let mut registry = Registry::new();
        let first = entry(&mut registry, "a");
        let first_id = first.unique_id;
        registry.register_draggable(first);

        let remount = entry(&mut registry, "a");
        registry.register_draggable(remount);

        registry.unregister_draggable(&"a".into(), first_id);
        assert!(registry.exists_draggable(&"a".into()));
    }

    #[test]
    fn test_events_reach_subscribers() {
        let mut registry = Registry::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let subscription = registry.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let a = entry(&mut registry, "a");
        let a_id = a.unique_id;
        registry.register_draggable(a);
        // No droppable "list" is registered, so the removal is silent
        registry.unregister_draggable(&"a".into(), a_id);
        assert_eq!(events.borrow().len(), 1);
        assert!(matches!(events.borrow()[0], RegistryEvent::Addition(_)));

        registry.unsubscribe(subscription);
        let b = entry(&mut registry, "b");
        registry.register_draggable(b);
        assert_eq!(events.borrow().len(), 1);
    }
}
