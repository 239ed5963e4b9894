//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the scope macros expand to nothing.

#[cfg(feature = "profiling")]
use std::sync::OnceLock;

#[cfg(feature = "profiling")]
pub use puffin::{GlobalProfiler, profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __astrelis_noop_profile {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::__astrelis_noop_profile as profile_function;
#[cfg(not(feature = "profiling"))]
pub use crate::__astrelis_noop_profile as profile_scope;

/// Profiling backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Send profiling data to puffin_viewer via HTTP.
    PuffinHttp,
}

/// Global profiling server instance.
#[cfg(feature = "profiling")]
static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

/// Initialize profiling with the specified backend.
///
/// # Example
/// ```no_run
/// use astrelis_core::profiling::{init_profiling, ProfilingBackend};
///
/// init_profiling(ProfilingBackend::PuffinHttp);
/// ```
#[cfg(feature = "profiling")]
pub fn init_profiling(backend: ProfilingBackend) {
    match backend {
        ProfilingBackend::PuffinHttp => {
            puffin::set_scopes_on(true);

            match puffin_http::Server::new("0.0.0.0:8585") {
                Ok(server) => {
                    tracing::info!("Puffin profiler server started on http://0.0.0.0:8585");
                    let _ = PROFILING_SERVER.set(server);
                }
                Err(e) => {
                    tracing::error!("Failed to start puffin server: {}", e);
                }
            }
        }
    }
}

/// Profiling is compiled out; logs once so the caller knows.
#[cfg(not(feature = "profiling"))]
pub fn init_profiling(_backend: ProfilingBackend) {
    tracing::warn!("astrelis-core built without the `profiling` feature");
}

/// Mark the start of a new frame for profiling.
///
/// Call this once per frame in your main loop to organize profiling data by frame.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scoped_work() -> u32 {
        profile_function!();
        let mut total = 0;
        for i in 0..4 {
            profile_scope!("step");
            total += i;
        }
        total
    }

    #[test]
    fn test_scopes_around_frames() {
        new_frame();
        assert_eq!(scoped_work(), 6);
        new_frame();
    }
}
