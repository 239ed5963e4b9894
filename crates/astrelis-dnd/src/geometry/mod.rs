//! Geometry primitives used by the drag and drop engine.
//!
//! Everything here is plain value math: rectangles and edge spacings, the CSS
//! style box model, a direction-agnostic [`Axis`], and frame visibility tests.

pub mod axis;
pub mod box_model;
pub mod position;
pub mod rect;
pub mod visibility;

pub use axis::{Axis, Edge, Extent, Line};
pub use box_model::BoxModel;
pub use position::{clean, closest, is_equal, patch};
pub use rect::{Rect, Spacing, clip, expand, offset, shrink};
pub use visibility::{
    is_partially_visible_through_frame, is_position_in_frame, is_totally_visible_through_frame,
    is_totally_visible_through_frame_on_axis,
};
