//! Astrelis Core
//!
//! Shared utilities for the Astrelis crates: hashing collections, math types,
//! logging setup and profiling scopes.

pub mod alloc;
pub mod logging;
pub mod math;
pub mod profiling;
