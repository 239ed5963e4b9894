//! Engine configuration.
//!
//! The numbers here are tuning policy rather than correctness properties, so
//! every one of them can be overridden through the builder setters.

use std::time::Duration;

/// Default fraction of a container's size, from an edge, where fluid
/// auto-scrolling begins.
pub const DEFAULT_START_FROM_PERCENTAGE: f32 = 0.25;
/// Default fraction of a container's size, from an edge, where fluid
/// auto-scrolling reaches full speed.
pub const DEFAULT_MAX_SCROLL_AT_PERCENTAGE: f32 = 0.05;
/// Default fastest fluid scroll, in pixels per frame.
pub const DEFAULT_MAX_PIXEL_SCROLL: f32 = 28.0;
/// The smallest scroll that is ever issued.
pub const MIN_SCROLL: f32 = 1.0;

/// Easing curve for auto-scroll speed.
#[derive(Debug, Clone, Copy, Default)]
pub enum Easing {
    Linear,
    #[default]
    Quadratic,
    Custom(fn(f32) -> f32),
}

impl Easing {
    /// Map a `0..=1` percentage onto the curve.
    pub fn apply(&self, percentage: f32) -> f32 {
        match self {
            Easing::Linear => percentage,
            Easing::Quadratic => percentage * percentage,
            Easing::Custom(ease) => ease(percentage),
        }
    }
}

/// Ramp-up of fluid scroll speed right after a drag starts.
#[derive(Debug, Clone, Copy)]
pub struct DurationDampening {
    /// Before this the scroll is pinned to the minimum.
    pub accelerate_at: Duration,
    /// After this no dampening applies.
    pub stop_dampening_at: Duration,
}

impl Default for DurationDampening {
    fn default() -> Self {
        Self {
            accelerate_at: Duration::from_millis(360),
            stop_dampening_at: Duration::from_millis(1200),
        }
    }
}

/// Fluid auto-scroll tuning.
#[derive(Debug, Clone, Copy)]
pub struct AutoScrollerOptions {
    pub start_from_percentage: f32,
    pub max_scroll_at_percentage: f32,
    pub max_pixel_scroll: f32,
    pub ease: Easing,
    pub duration_dampening: DurationDampening,
    /// Turn fluid auto-scrolling off entirely.
    pub disabled: bool,
}

impl Default for AutoScrollerOptions {
    fn default() -> Self {
        Self {
            start_from_percentage: DEFAULT_START_FROM_PERCENTAGE,
            max_scroll_at_percentage: DEFAULT_MAX_SCROLL_AT_PERCENTAGE,
            max_pixel_scroll: DEFAULT_MAX_PIXEL_SCROLL,
            ease: Easing::default(),
            duration_dampening: DurationDampening::default(),
            disabled: false,
        }
    }
}

impl AutoScrollerOptions {
    pub fn start_from_percentage(mut self, percentage: f32) -> Self {
        self.start_from_percentage = percentage;
        self
    }

    pub fn max_scroll_at_percentage(mut self, percentage: f32) -> Self {
        self.max_scroll_at_percentage = percentage;
        self
    }

    pub fn max_pixel_scroll(mut self, pixels: f32) -> Self {
        self.max_pixel_scroll = pixels;
        self
    }

    pub fn ease(mut self, ease: Easing) -> Self {
        self.ease = ease;
        self
    }

    pub fn duration_dampening(
        mut self,
        accelerate_at: Duration,
        stop_dampening_at: Duration,
    ) -> Self {
        self.duration_dampening = DurationDampening {
            accelerate_at,
            stop_dampening_at,
        };
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Drop animation timing.
#[derive(Debug, Clone, Copy)]
pub struct DropTimings {
    /// Shortest drop animation, in seconds.
    pub min_drop_time: f32,
    /// Longest drop animation, in seconds.
    pub max_drop_time: f32,
    /// Distance in pixels at which the longest animation is used.
    pub max_drop_time_at_distance: f32,
    /// Multiplier applied when the drag was cancelled.
    pub cancel_drop_modifier: f32,
}

impl Default for DropTimings {
    fn default() -> Self {
        Self {
            min_drop_time: 0.33,
            max_drop_time: 0.55,
            max_drop_time_at_distance: 1500.0,
            cancel_drop_modifier: 0.6,
        }
    }
}

impl DropTimings {
    #[inline]
    pub fn drop_time_range(&self) -> f32 {
        self.max_drop_time - self.min_drop_time
    }

    pub fn min_drop_time(mut self, seconds: f32) -> Self {
        self.min_drop_time = seconds;
        self
    }

    pub fn max_drop_time(mut self, seconds: f32) -> Self {
        self.max_drop_time = seconds;
        self
    }

    pub fn max_drop_time_at_distance(mut self, distance: f32) -> Self {
        self.max_drop_time_at_distance = distance;
        self
    }

    pub fn cancel_drop_modifier(mut self, modifier: f32) -> Self {
        self.cancel_drop_modifier = modifier;
        self
    }
}

/// Top level engine configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DndConfig {
    pub auto_scroll: AutoScrollerOptions,
    pub drop: DropTimings,
}

impl DndConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auto_scroll(mut self, options: AutoScrollerOptions) -> Self {
        self.auto_scroll = options;
        self
    }

    pub fn drop_timings(mut self, timings: DropTimings) -> Self {
        self.drop = timings;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing() {
        assert_eq!(Easing::Quadratic.apply(0.5), 0.25);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
        assert_eq!(Easing::Custom(|value| value.sqrt()).apply(0.25), 0.5);
    }

    #[test]
    fn test_builder() {
        let config = DndConfig::new()
            .auto_scroll(AutoScrollerOptions::default().max_pixel_scroll(40.0).disabled(true))
            .drop_timings(DropTimings::default().cancel_drop_modifier(0.5));
        assert_eq!(config.auto_scroll.max_pixel_scroll, 40.0);
        assert!(config.auto_scroll.disabled);
        assert_eq!(config.drop.cancel_drop_modifier, 0.5);
        assert!((config.drop.drop_time_range() - 0.22).abs() < 1e-6);
    }
}
