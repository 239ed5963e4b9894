//! Geometry snapshots of draggables and droppables.

use std::cell::RefCell;
use std::rc::Rc;

use astrelis_core::alloc::IndexMap;
use astrelis_core::math::Vec2;

use crate::descriptor::{DraggableDescriptor, DraggableId, DroppableDescriptor, DroppableId};
use crate::error::{DndError, DndResult};
use crate::geometry::{Axis, BoxModel, Rect, clip, offset};
use crate::memo::Memo;

/// What a host needs to render a placeholder in the dragged item's place.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub client: BoxModel,
    pub tag_name: String,
    pub display: String,
}

/// A draggable measured at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct DraggableDimension {
    pub descriptor: DraggableDescriptor,
    pub placeholder: Placeholder,
    /// Viewport relative box.
    pub client: BoxModel,
    /// Page relative box: `client` plus the window scroll.
    pub page: BoxModel,
    /// How far other items move to make room for this one.
    pub displace_by: Vec2,
}

impl DraggableDimension {
    pub fn new(descriptor: DraggableDescriptor, client: BoxModel, window_scroll: Vec2) -> Self {
        let page = client.with_scroll(window_scroll);
        let margin_box = client.margin_box;

        Self {
            descriptor,
            placeholder: Placeholder {
                client,
                tag_name: "div".to_string(),
                display: "block".to_string(),
            },
            client,
            page,
            displace_by: Vec2::new(margin_box.width(), margin_box.height()),
        }
    }

    #[inline]
    pub fn id(&self) -> &DraggableId {
        &self.descriptor.id
    }

    /// Shift a draggable measured against a stale scroll position.
    pub fn offset_by(&self, change: Vec2, initial_window_scroll: Vec2) -> Self {
        let client = self.client.offset(change);
        let page = client.with_scroll(initial_window_scroll);

        Self {
            descriptor: self.descriptor.clone(),
            placeholder: Placeholder {
                client,
                ..self.placeholder.clone()
            },
            client,
            page,
            displace_by: self.displace_by,
        }
    }
}

/// Scroll change since lift.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollDifference {
    pub value: Vec2,
    /// The negated `value`: what to add to a page position to undo the
    /// scroll.
    pub displacement: Vec2,
}

/// Scroll state of the window or of a scroll container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollDetails {
    pub initial: Vec2,
    pub current: Vec2,
    pub max: Vec2,
    pub diff: ScrollDifference,
}

impl ScrollDetails {
    pub fn new(initial: Vec2, max: Vec2) -> Self {
        Self {
            initial,
            current: initial,
            max,
            diff: ScrollDifference::default(),
        }
    }

    /// Same details after scrolling to `new_scroll`.
    pub fn scrolled_to(&self, new_scroll: Vec2) -> Self {
        let value = new_scroll - self.initial;
        Self {
            initial: self.initial,
            current: new_scroll,
            max: self.max,
            diff: ScrollDifference {
                value,
                displacement: -value,
            },
        }
    }
}

/// Furthest a container of `client_size` can scroll over `scroll_size`.
pub fn get_max_scroll(scroll_size: Vec2, client_size: Vec2) -> Vec2 {
    (scroll_size - client_size).max(Vec2::ZERO)
}

/// The nearest scroll container of a droppable as measured by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestScrollable {
    pub client: BoxModel,
    pub page: BoxModel,
    pub scroll_size: Vec2,
    pub scroll: Vec2,
    pub should_clip_subject: bool,
}

/// The scroll container ("frame") of a droppable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scrollable {
    pub page_margin_box: Rect,
    pub frame_client: BoxModel,
    pub scroll_size: Vec2,
    pub should_clip_subject: bool,
    pub scroll: ScrollDetails,
}

impl Scrollable {
    fn from_closest(closest: &ClosestScrollable) -> Self {
        let max = get_max_scroll(closest.scroll_size, closest.client.padding_box.size());
        Self {
            page_margin_box: closest.page.margin_box,
            frame_client: closest.client,
            scroll_size: closest.scroll_size,
            should_clip_subject: closest.should_clip_subject,
            scroll: ScrollDetails::new(closest.scroll, max),
        }
    }

    pub(crate) fn with_max_scroll(mut self, max: Vec2) -> Self {
        self.scroll.max = max;
        self
    }
}

/// Space added to a foreign droppable to fit the dragged item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderInSubject {
    /// Growth of the subject along the main axis, if any was needed.
    pub increased_by: Option<Vec2>,
    pub placeholder_size: Vec2,
    /// Frame max scroll before the growth was applied.
    pub old_frame_max_scroll: Option<Vec2>,
}

/// The droppable as seen through its frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroppableSubject {
    pub page: BoxModel,
    pub with_placeholder: Option<PlaceholderInSubject>,
    /// Visible hit area, `None` when entirely clipped away.
    pub active: Option<Rect>,
}

impl DroppableSubject {
    /// Derive the active area from the page box, frame scroll and any
    /// placeholder growth.
    pub fn compute(
        page: BoxModel,
        with_placeholder: Option<PlaceholderInSubject>,
        axis: Axis,
        frame: Option<&Scrollable>,
    ) -> Self {
        let displacement = frame.map_or(Vec2::ZERO, |frame| frame.scroll.diff.displacement);
        let displaced = offset(page.margin_box, displacement);

        let grown = match with_placeholder.and_then(|placeholder| placeholder.increased_by) {
            Some(increased_by) => {
                let end = axis.end_of(&displaced) + axis.main(increased_by);
                displaced.with_edge(axis.end(), end)
            }
            None => displaced,
        };

        let active = match frame {
            Some(frame) if frame.should_clip_subject => clip(frame.page_margin_box, grown),
            _ => Some(grown),
        };

        Self {
            page,
            with_placeholder,
            active,
        }
    }
}

/// Everything the host measures about a droppable.
#[derive(Debug, Clone)]
pub struct DroppableDimensionArgs {
    pub descriptor: DroppableDescriptor,
    pub is_enabled: bool,
    pub is_combine_enabled: bool,
    pub is_fixed_on_page: bool,
    pub axis: Axis,
    pub client: BoxModel,
    pub page: BoxModel,
    pub closest: Option<ClosestScrollable>,
}

/// A droppable measured at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppableDimension {
    pub descriptor: DroppableDescriptor,
    pub axis: Axis,
    pub is_enabled: bool,
    pub is_combine_enabled: bool,
    pub is_fixed_on_page: bool,
    pub client: BoxModel,
    pub page: BoxModel,
    pub frame: Option<Scrollable>,
    pub subject: DroppableSubject,
}

impl DroppableDimension {
    pub fn new(args: DroppableDimensionArgs) -> Self {
        let frame = args.closest.as_ref().map(Scrollable::from_closest);
        let subject = DroppableSubject::compute(args.page, None, args.axis, frame.as_ref());

        Self {
            descriptor: args.descriptor,
            axis: args.axis,
            is_enabled: args.is_enabled,
            is_combine_enabled: args.is_combine_enabled,
            is_fixed_on_page: args.is_fixed_on_page,
            client: args.client,
            page: args.page,
            frame,
            subject,
        }
    }

    #[inline]
    pub fn id(&self) -> &DroppableId {
        &self.descriptor.id
    }

    /// Scroll the frame to `new_scroll` and recompute the subject.
    pub fn scroll_to(&mut self, new_scroll: Vec2) -> DndResult<()> {
        let Some(frame) = self.frame.as_mut() else {
            return Err(DndError::invariant(format!(
                "Cannot scroll droppable {} as it has no frame",
                self.descriptor.id
            )));
        };
        frame.scroll = frame.scroll.scrolled_to(new_scroll);
        self.recompute_subject();
        Ok(())
    }

    /// Copy of this droppable scrolled to `new_scroll`.
    pub fn scrolled(&self, new_scroll: Vec2) -> DndResult<Self> {
        let mut scrolled = self.clone();
        scrolled.scroll_to(new_scroll)?;
        Ok(scrolled)
    }

    pub(crate) fn recompute_subject(&mut self) {
        self.subject = DroppableSubject::compute(
            self.subject.page,
            self.subject.with_placeholder,
            self.axis,
            self.frame.as_ref(),
        );
    }

    /// Add the frame scroll displacement to a page position.
    pub fn with_displacement(&self, point: Vec2) -> Vec2 {
        match &self.frame {
            Some(frame) => point + frame.scroll.diff.displacement,
            None => point,
        }
    }

    /// Shift a page rect by the frame scroll since lift.
    pub fn with_scroll(&self, area: Rect) -> Rect {
        match &self.frame {
            Some(frame) => offset(area, frame.scroll.diff.value),
            None => area,
        }
    }

    /// Shift a page rect back by the frame scroll since lift.
    pub fn displaced(&self, area: Rect) -> Rect {
        match &self.frame {
            Some(frame) => offset(area, frame.scroll.diff.displacement),
            None => area,
        }
    }
}

pub type DraggableDimensionMap = IndexMap<DraggableId, DraggableDimension>;
pub type DroppableDimensionMap = IndexMap<DroppableId, DroppableDimension>;

type InsideKey = (DroppableId, u64);

/// All dimensions captured for a drag.
///
/// Mutation goes through methods so that cached lookups stay valid.
#[derive(Debug, Clone, Default)]
pub struct DimensionMap {
    draggables: DraggableDimensionMap,
    droppables: DroppableDimensionMap,
    draggables_generation: u64,
    droppables_generation: u64,
    inside: RefCell<Memo<InsideKey, Rc<[DraggableId]>>>,
}

impl DimensionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        draggables: impl IntoIterator<Item = DraggableDimension>,
        droppables: impl IntoIterator<Item = DroppableDimension>,
    ) -> Self {
        let mut map = Self::new();
        for draggable in draggables {
            map.draggables.insert(draggable.descriptor.id.clone(), draggable);
        }
        for droppable in droppables {
            map.droppables.insert(droppable.descriptor.id.clone(), droppable);
        }
        map
    }

    #[inline]
    pub fn draggables(&self) -> &DraggableDimensionMap {
        &self.draggables
    }

    #[inline]
    pub fn droppables(&self) -> &DroppableDimensionMap {
        &self.droppables
    }

    /// Bumped whenever a draggable is added or removed.
    #[inline]
    pub fn draggables_generation(&self) -> u64 {
        self.draggables_generation
    }

    /// Bumped whenever a droppable is added, removed or changed.
    #[inline]
    pub fn droppables_generation(&self) -> u64 {
        self.droppables_generation
    }

    pub fn draggable(&self, id: &DraggableId) -> DndResult<&DraggableDimension> {
        self.draggables
            .get(id)
            .ok_or_else(|| DndError::DraggableNotFound(id.clone()))
    }

    pub fn droppable(&self, id: &DroppableId) -> DndResult<&DroppableDimension> {
        self.droppables
            .get(id)
            .ok_or_else(|| DndError::DroppableNotFound(id.clone()))
    }

    pub fn droppable_mut(&mut self, id: &DroppableId) -> DndResult<&mut DroppableDimension> {
        self.droppables_generation += 1;
        self.droppables
            .get_mut(id)
            .ok_or_else(|| DndError::DroppableNotFound(id.clone()))
    }

    pub fn insert_draggable(&mut self, draggable: DraggableDimension) {
        self.draggables_generation += 1;
        self.draggables.insert(draggable.descriptor.id.clone(), draggable);
    }

    pub fn remove_draggable(&mut self, id: &DraggableId) -> Option<DraggableDimension> {
        self.draggables_generation += 1;
        self.draggables.shift_remove(id)
    }

    /// Insert or replace a droppable.
    pub fn insert_droppable(&mut self, droppable: DroppableDimension) {
        self.droppables_generation += 1;
        self.droppables.insert(droppable.descriptor.id.clone(), droppable);
    }

    /// Draggables inside a droppable, ordered by index.
    pub fn inside(&self, droppable_id: &DroppableId) -> Vec<&DraggableDimension> {
        let ids = {
            let mut memo = self.inside.borrow_mut();
            let key = (droppable_id.clone(), self.draggables_generation);
            Rc::clone(memo.get_or_compute(key, |(droppable_id, _)| {
                let mut inside: Vec<&DraggableDimension> = self
                    .draggables
                    .values()
                    .filter(|draggable| &draggable.descriptor.droppable_id == droppable_id)
                    .collect();
                inside.sort_by_key(|draggable| draggable.descriptor.index);
                inside.iter().map(|draggable| draggable.descriptor.id.clone()).collect()
            }))
        };

        ids.iter().filter_map(|id| self.draggables.get(id)).collect()
    }

    /// Look up several draggables, skipping unknown ids.
    pub fn draggables_by_ids<'a>(
        &'a self,
        ids: impl IntoIterator<Item = &'a DraggableId>,
    ) -> Vec<&'a DraggableDimension> {
        ids.into_iter()
            .filter_map(|id| self.draggables.get(id))
            .collect()
    }
}
