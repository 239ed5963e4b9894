//! Layouts of items and lists for tests.

use astrelis_core::math::Vec2;
use astrelis_dnd::dimension::ClosestScrollable;
use astrelis_dnd::geometry::offset;
use astrelis_dnd::{
    Axis, BoxModel, DraggableDescriptor, DraggableDimension, DroppableDescriptor,
    DroppableDimension, DroppableDimensionArgs, DroppableMode, Rect,
};

/// A scroll container wrapping a droppable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameFixture {
    /// Visible area of the container in client coordinates.
    pub client: Rect,
    /// Full size of the scrollable content.
    pub scroll_size: Vec2,
}

/// A droppable and its items, laid out end to end along the axis.
#[derive(Debug, Clone)]
pub struct ListFixture {
    pub descriptor: DroppableDescriptor,
    pub axis: Axis,
    /// The droppable in client coordinates with no scroll applied.
    pub client: Rect,
    pub items: Vec<(DraggableDescriptor, Rect)>,
    pub frame: Option<FrameFixture>,
    pub is_enabled: bool,
    pub is_combine_enabled: bool,
    pub is_fixed_on_page: bool,
}

impl ListFixture {
    /// Items of `item_size` stacked downwards from the origin.
    pub fn vertical(id: &str, item_ids: &[&str], item_size: Vec2) -> Self {
        Self::laid_out(id, item_ids, item_size, Axis::Vertical)
    }

    /// Items of `item_size` placed left to right from the origin.
    pub fn horizontal(id: &str, item_ids: &[&str], item_size: Vec2) -> Self {
        Self::laid_out(id, item_ids, item_size, Axis::Horizontal)
    }

    fn laid_out(id: &str, item_ids: &[&str], item_size: Vec2, axis: Axis) -> Self {
        let step = match axis {
            Axis::Vertical => Vec2::new(0.0, item_size.y),
            Axis::Horizontal => Vec2::new(item_size.x, 0.0),
        };
        let items: Vec<_> = item_ids
            .iter()
            .enumerate()
            .map(|(index, item_id)| {
                let origin = step * index as f32;
                (
                    DraggableDescriptor::new(*item_id, index, id),
                    Rect::from_size(origin.x, origin.y, item_size.x, item_size.y),
                )
            })
            .collect();

        let count = item_ids.len().max(1) as f32;
        let extent = match axis {
            Axis::Vertical => Vec2::new(item_size.x, item_size.y * count),
            Axis::Horizontal => Vec2::new(item_size.x * count, item_size.y),
        };

        Self {
            descriptor: DroppableDescriptor::new(id),
            axis,
            client: Rect::from_size(0.0, 0.0, extent.x, extent.y),
            items,
            frame: None,
            is_enabled: true,
            is_combine_enabled: false,
            is_fixed_on_page: false,
        }
    }

    /// Move the whole list so its droppable starts at `origin`.
    pub fn at(mut self, origin: Vec2) -> Self {
        let shift = origin - Vec2::new(self.client.left, self.client.top);
        self.client = offset(self.client, shift);
        for (_, rect) in &mut self.items {
            *rect = offset(*rect, shift);
        }
        self
    }

    /// Clip the list to a scroll container showing `visible` pixels along
    /// the axis.
    pub fn scroll_container(mut self, visible: f32) -> Self {
        let size = match self.axis {
            Axis::Vertical => Vec2::new(self.client.width(), visible),
            Axis::Horizontal => Vec2::new(visible, self.client.height()),
        };
        self.frame = Some(FrameFixture {
            client: Rect::from_size(self.client.left, self.client.top, size.x, size.y),
            scroll_size: self.client.size(),
        });
        self
    }

    pub fn combine_enabled(mut self) -> Self {
        self.is_combine_enabled = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.is_enabled = false;
        self
    }

    pub fn virtual_mode(mut self) -> Self {
        self.descriptor = self.descriptor.with_mode(DroppableMode::Virtual);
        self
    }

    pub fn item_type(mut self, item_type: &str) -> Self {
        self.descriptor = self.descriptor.with_type(item_type);
        for (descriptor, _) in &mut self.items {
            *descriptor = descriptor.clone().with_type(item_type);
        }
        self
    }

    pub fn id(&self) -> &astrelis_dnd::DroppableId {
        &self.descriptor.id
    }

    /// Measure the droppable as a host would with the given scrolls.
    pub fn droppable_dimension(
        &self,
        window_scroll: Vec2,
        frame_scroll: Vec2,
    ) -> DroppableDimension {
        let client = BoxModel::from_border_box(offset(self.client, -frame_scroll));
        let closest = self.frame.map(|frame| {
            let frame_client = BoxModel::from_border_box(frame.client);
            ClosestScrollable {
                client: frame_client,
                page: frame_client.with_scroll(window_scroll),
                scroll_size: frame.scroll_size,
                scroll: frame_scroll,
                should_clip_subject: true,
            }
        });

        DroppableDimension::new(DroppableDimensionArgs {
            descriptor: self.descriptor.clone(),
            is_enabled: self.is_enabled,
            is_combine_enabled: self.is_combine_enabled,
            is_fixed_on_page: self.is_fixed_on_page,
            axis: self.axis,
            client,
            page: client.with_scroll(window_scroll),
            closest,
        })
    }

    /// Measure every item at the given window scroll.
    pub fn draggable_dimensions(&self, window_scroll: Vec2) -> Vec<DraggableDimension> {
        self.items
            .iter()
            .map(|(descriptor, rect)| {
                DraggableDimension::new(
                    descriptor.clone(),
                    BoxModel::from_border_box(*rect),
                    window_scroll,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_layout() {
        let list = ListFixture::vertical("list", &["a", "b", "c"], Vec2::new(200.0, 50.0));
        assert_eq!(list.client, Rect::from_size(0.0, 0.0, 200.0, 150.0));
        assert_eq!(list.items[2].1, Rect::from_size(0.0, 100.0, 200.0, 50.0));
        assert_eq!(list.items[2].0.index, 2);
    }

    #[test]
    fn test_scroll_container() {
        let list = ListFixture::vertical("list", &["a", "b", "c", "d"], Vec2::new(100.0, 50.0))
            .scroll_container(100.0);
        let droppable = list.droppable_dimension(Vec2::ZERO, Vec2::ZERO);
        let frame = droppable.frame.expect("frame");
        assert_eq!(frame.scroll.max, Vec2::new(0.0, 100.0));
        assert_eq!(
            droppable.subject.active,
            Some(Rect::from_size(0.0, 0.0, 100.0, 100.0))
        );
    }
}
