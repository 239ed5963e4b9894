/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// This module re-exports all types and functions from the [`glam`] crate.
///
/// # Examples
///
/// ```
/// use astrelis_core::math::Vec2;
///
/// let position = Vec2::new(10.0, 20.0);
/// let offset = Vec2::new(1.0, 0.5);
/// assert_eq!(position + offset, Vec2::new(11.0, 20.5));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;
