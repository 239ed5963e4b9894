//! Test utilities for Astrelis drag and drop.
//!
//! This crate provides fixtures and mock hosts for driving
//! [`astrelis_dnd::DragDropEngine`] without a real UI.
//!
//! # Overview
//!
//! - [`ListFixture`] - Lays out a list of fixed-size items inside a droppable
//! - `MockWindow`, `MockDraggable`, `MockDroppable` - Host implementations
//!   that record every call (requires `mock` feature)
//! - `ManualClock` - A clock tests advance by hand (requires `mock` feature)
//! - `RecordingResponders` - Captures responder calls in order (requires
//!   `mock` feature)
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use astrelis_core::math::Vec2;
//! use astrelis_dnd::DragDropEngine;
//! use astrelis_test_utils::{ListFixture, MockWindow};
//!
//! let list = ListFixture::vertical("list", &["a", "b", "c"], Vec2::new(200.0, 50.0));
//! let mut engine = DragDropEngine::new(MockWindow::new(Vec2::new(1000.0, 1000.0)));
//! list.register(&mut engine);
//! assert!(engine.try_get_lock(&"b".into()).is_some());
//! # }
//! ```
//!
//! # Shared handles
//!
//! Every mock is a cheap handle around an `Arc<Mutex<_>>`. Clone one, hand
//! the clone to the engine and keep the original to inspect what the engine
//! did with it.

pub mod fixtures;
#[cfg(feature = "mock")]
pub mod mock;

pub use fixtures::*;
#[cfg(feature = "mock")]
pub use mock::*;
