//! Identity of draggables and droppables.

use std::fmt;
use std::sync::Arc;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(id: impl AsRef<str>) -> Self {
                Self(Arc::from(id.as_ref()))
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(Arc::from(value))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Id of a draggable item.
    DraggableId
);
string_id!(
    /// Id of a drop container.
    DroppableId
);
string_id!(
    /// Group tag: items can only move between droppables of the same type.
    ItemType
);

impl Default for ItemType {
    fn default() -> Self {
        Self::new("DEFAULT")
    }
}

/// Whether all children of a droppable are always mounted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DroppableMode {
    #[default]
    Standard,
    /// Children may mount and unmount while a drag is in progress.
    Virtual,
}

/// Immutable identity of a draggable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DraggableDescriptor {
    pub id: DraggableId,
    pub index: usize,
    pub droppable_id: DroppableId,
    pub item_type: ItemType,
}

impl DraggableDescriptor {
    pub fn new(
        id: impl Into<DraggableId>,
        index: usize,
        droppable_id: impl Into<DroppableId>,
    ) -> Self {
        Self {
            id: id.into(),
            index,
            droppable_id: droppable_id.into(),
            item_type: ItemType::default(),
        }
    }

    pub fn with_type(mut self, item_type: impl Into<ItemType>) -> Self {
        self.item_type = item_type.into();
        self
    }
}

/// Immutable identity of a droppable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DroppableDescriptor {
    pub id: DroppableId,
    pub item_type: ItemType,
    pub mode: DroppableMode,
}

impl DroppableDescriptor {
    pub fn new(id: impl Into<DroppableId>) -> Self {
        Self {
            id: id.into(),
            item_type: ItemType::default(),
            mode: DroppableMode::Standard,
        }
    }

    pub fn with_type(mut self, item_type: impl Into<ItemType>) -> Self {
        self.item_type = item_type.into();
        self
    }

    pub fn with_mode(mut self, mode: DroppableMode) -> Self {
        self.mode = mode;
        self
    }
}

/// How the dragged item is being moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementMode {
    /// Continuous pointer movement.
    Fluid,
    /// Discrete keyboard steps.
    Snap,
}

impl fmt::Display for MovementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementMode::Fluid => f.write_str("FLUID"),
            MovementMode::Snap => f.write_str("SNAP"),
        }
    }
}

/// Why a drag ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    Drop,
    Cancel,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::Drop => f.write_str("DROP"),
            DropReason::Cancel => f.write_str("CANCEL"),
        }
    }
}

/// A slot inside a droppable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DraggableLocation {
    pub droppable_id: DroppableId,
    pub index: usize,
}

/// The item the dragged item would be merged into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combine {
    pub draggable_id: DraggableId,
    pub droppable_id: DroppableId,
}

/// Origin of a drag. Fixed from lift until the drag ends.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Critical {
    pub draggable: DraggableDescriptor,
    pub droppable: DroppableDescriptor,
}

impl Critical {
    /// Where the dragged item started.
    pub fn home_location(&self) -> DraggableLocation {
        DraggableLocation {
            droppable_id: self.droppable.id.clone(),
            index: self.draggable.index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_compare_by_value() {
        let a = DraggableId::new("item-1");
        let b: DraggableId = String::from("item-1").into();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "item-1");
    }

    #[test]
    fn test_default_item_type() {
        let descriptor = DraggableDescriptor::new("a", 0, "list");
        assert_eq!(descriptor.item_type.as_str(), "DEFAULT");
        assert_eq!(descriptor.with_type("card").item_type.as_str(), "card");
    }
}
