use astrelis_core::alloc::{IndexMap, IndexSet};
use astrelis_core::math::Vec2;

use crate::descriptor::{Combine, DraggableId, DraggableLocation, DroppableId};
use crate::geometry::{Axis, patch};

/// How far displaced items move: the dragged item's margin-box size on the
/// destination main axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DisplacedBy {
    pub value: f32,
    pub point: Vec2,
}

impl DisplacedBy {
    pub fn new(axis: Axis, displace_by: Vec2) -> Self {
        let value = axis.main(displace_by);
        Self {
            value,
            point: patch(axis.line(), value, 0.0),
        }
    }
}

/// A visible displaced item.
#[derive(Debug, Clone, PartialEq)]
pub struct Displacement {
    pub draggable_id: DraggableId,
    pub should_animate: bool,
}

/// Items moved out of the way, split by whether they can be seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplacementGroups {
    /// Every displaced item in list order.
    pub all: Vec<DraggableId>,
    pub visible: IndexMap<DraggableId, Displacement>,
    pub invisible: IndexSet<DraggableId>,
}

impl DisplacementGroups {
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Whether `id` was displaced, visibly or not.
    pub fn contains(&self, id: &DraggableId) -> bool {
        self.visible.contains_key(id) || self.invisible.contains(id)
    }
}

/// Where the dragged item would end up.
#[derive(Debug, Clone, PartialEq)]
pub enum ImpactLocation {
    Reorder { destination: DraggableLocation },
    Combine { combine: Combine },
}

/// The effect of the current drag position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragImpact {
    pub displaced: DisplacementGroups,
    pub displaced_by: DisplacedBy,
    /// `None` when over nothing.
    pub at: Option<ImpactLocation>,
}

impl DragImpact {
    /// Over nothing, moving nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// The droppable being dragged over, if any.
    pub fn dragged_over(&self) -> Option<&DroppableId> {
        match &self.at {
            Some(ImpactLocation::Reorder { destination }) => Some(&destination.droppable_id),
            Some(ImpactLocation::Combine { combine }) => Some(&combine.droppable_id),
            None => None,
        }
    }

    pub fn destination(&self) -> Option<&DraggableLocation> {
        match &self.at {
            Some(ImpactLocation::Reorder { destination }) => Some(destination),
            _ => None,
        }
    }

    pub fn combine(&self) -> Option<&Combine> {
        match &self.at {
            Some(ImpactLocation::Combine { combine }) => Some(combine),
            _ => None,
        }
    }
}

/// Which home-list items started after the dragged item.
///
/// Captured at lift and kept as the baseline for every later impact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiftEffect {
    pub in_virtual_list: bool,
    pub effected: IndexSet<DraggableId>,
    pub displaced_by: DisplacedBy,
}

impl LiftEffect {
    #[inline]
    pub fn did_start_after_critical(&self, id: &DraggableId) -> bool {
        self.effected.contains(id)
    }
}

/// Alias used by the drop result and state payloads.
pub type AfterCritical = LiftEffect;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displaced_by_patches_main_line() {
        let size = Vec2::new(200.0, 50.0);
        assert_eq!(DisplacedBy::new(Axis::Vertical, size).point, Vec2::new(0.0, 50.0));
        assert_eq!(DisplacedBy::new(Axis::Horizontal, size).value, 200.0);
    }

    #[test]
    fn test_dragged_over() {
        let impact = DragImpact {
            at: Some(ImpactLocation::Combine {
                combine: Combine {
                    draggable_id: "a".into(),
                    droppable_id: "list".into(),
                },
            }),
            ..DragImpact::none()
        };
        assert_eq!(impact.dragged_over().map(|id| id.as_str()), Some("list"));
        assert!(impact.destination().is_none());
        assert!(DragImpact::none().dragged_over().is_none());
    }
}
