//! Staging of virtual-list changes between frames.

use astrelis_core::alloc::IndexSet;
use astrelis_core::math::Vec2;

use crate::descriptor::{DraggableDescriptor, DraggableId, DroppableId};
use crate::registry::Registry;
use crate::state::{Published, PublishedScroll};

#[derive(Debug, Default)]
struct Staging {
    additions: IndexSet<DraggableId>,
    removals: IndexSet<DraggableId>,
    modified: IndexSet<DroppableId>,
}

/// Collects mounts and unmounts until the next frame.
#[derive(Debug, Default)]
pub struct Publisher {
    staging: Staging,
    scheduled: bool,
}

impl Publisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Stage an addition. Returns `true` when this starts a new batch.
    pub fn add(&mut self, descriptor: &DraggableDescriptor) -> bool {
        let id = &descriptor.id;
        self.staging.additions.insert(id.clone());
        self.staging.modified.insert(descriptor.droppable_id.clone());
        self.staging.removals.shift_remove(id);
        self.schedule()
    }

    /// Stage a removal. Returns `true` when this starts a new batch.
    pub fn remove(&mut self, descriptor: &DraggableDescriptor) -> bool {
        let id = &descriptor.id;
        self.staging.removals.insert(id.clone());
        self.staging.modified.insert(descriptor.droppable_id.clone());
        self.staging.additions.shift_remove(id);
        self.schedule()
    }

    fn schedule(&mut self) -> bool {
        let is_new_batch = !self.scheduled;
        self.scheduled = true;
        is_new_batch
    }

    /// Measure everything staged since the last flush.
    pub fn flush(&mut self, registry: &Registry) -> Option<Published> {
        if !self.scheduled {
            return None;
        }
        self.scheduled = false;
        let staging = std::mem::take(&mut self.staging);

        let mut additions: Vec<_> = staging
            .additions
            .iter()
            .filter_map(|id| match registry.find_draggable(id) {
                Some(entry) => Some(entry.source.dimension(Vec2::ZERO)),
                None => {
                    tracing::warn!("Draggable {} was unmounted before it could be published", id);
                    None
                }
            })
            .collect();
        additions.sort_by_key(|draggable| draggable.descriptor.index);

        let modified = staging
            .modified
            .iter()
            .filter_map(|id| match registry.find_droppable(id) {
                Some(entry) => Some(PublishedScroll {
                    droppable_id: id.clone(),
                    scroll: entry.source.scroll_while_dragging(),
                }),
                None => {
                    tracing::warn!("Droppable {} was unmounted during a collection", id);
                    None
                }
            })
            .collect();

        Some(Published {
            additions,
            removals: staging.removals.into_iter().collect(),
            modified,
        })
    }

    /// Drop anything staged.
    pub fn stop(&mut self) {
        self.scheduled = false;
        self.staging = Staging::default();
    }
}
