//! Scroll physics configuration
//!
//! An immutable value passed to each scroller at attach time. There is no
//! process-wide configuration: two scrollers on the same screen can carry
//! different constants without interfering with each other.

use thiserror::Error;

/// Errors raised when a configuration value is outside its valid range
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Deceleration must be strictly positive or momentum never stops
    #[error("deceleration rate must be > 0, got {0}")]
    NonPositiveDeceleration(f32),

    /// Distances and times must be non-negative
    #[error("{name} must be >= 0, got {value}")]
    Negative { name: &'static str, value: f32 },

    /// Damping outside [0, 1] would amplify out-of-bounds dragging
    #[error("overscroll damping must be within 0.0..=1.0, got {0}")]
    DampingOutOfRange(f32),
}

/// Configuration for scroll physics
///
/// All fields are in pixel/millisecond units to match drag-event timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Deceleration applied during momentum, in px/ms². Higher values stop
    /// the coast sooner and travel less.
    pub deceleration_rate: f32,
    /// Maximum distance the content may overshoot an edge during momentum.
    /// 0 disables visible overscroll entirely.
    pub bounce_buffer: f32,
    /// Floor on the bounce-back animation duration (ms), so even a 1px
    /// correction is perceivable.
    pub bounce_back_min_time: f32,
    /// Milliseconds added to the bounce-back duration per pixel of overshoot
    pub bounce_back_distance_multi: f32,
    /// Fraction of a drag delta that still applies while the position is
    /// past an edge (rubber-band resistance). 0.5 halves the drag speed.
    pub overscroll_damping: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            deceleration_rate: 0.001,
            bounce_buffer: 40.0,
            bounce_back_min_time: 200.0,
            bounce_back_distance_multi: 1.5,
            overscroll_damping: 0.5,
        }
    }
}

impl ScrollConfig {
    /// Create a builder for a validated configuration
    pub fn builder() -> ScrollConfigBuilder {
        ScrollConfigBuilder::default()
    }

    /// Config with overscroll disabled: momentum clamps hard at the edges
    pub fn no_bounce() -> Self {
        Self {
            bounce_buffer: 0.0,
            ..Default::default()
        }
    }

    /// Check every field against its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.deceleration_rate > 0.0) || !self.deceleration_rate.is_finite() {
            return Err(ConfigError::NonPositiveDeceleration(self.deceleration_rate));
        }
        for (name, value) in [
            ("bounce_buffer", self.bounce_buffer),
            ("bounce_back_min_time", self.bounce_back_min_time),
            ("bounce_back_distance_multi", self.bounce_back_distance_multi),
        ] {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(ConfigError::Negative { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.overscroll_damping) {
            return Err(ConfigError::DampingOutOfRange(self.overscroll_damping));
        }
        Ok(())
    }

    /// Clamp every field to the nearest valid value
    ///
    /// Used at attach time so a hand-assembled config can never produce a
    /// negative travel time or runaway momentum.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let or_default = |v: f32, d: f32| if v.is_finite() { v } else { d };
        Self {
            deceleration_rate: if self.deceleration_rate.is_finite() && self.deceleration_rate > 0.0
            {
                self.deceleration_rate
            } else {
                defaults.deceleration_rate
            },
            bounce_buffer: or_default(self.bounce_buffer, defaults.bounce_buffer).max(0.0),
            bounce_back_min_time: or_default(self.bounce_back_min_time, defaults.bounce_back_min_time)
                .max(0.0),
            bounce_back_distance_multi: or_default(
                self.bounce_back_distance_multi,
                defaults.bounce_back_distance_multi,
            )
            .max(0.0),
            overscroll_damping: or_default(self.overscroll_damping, defaults.overscroll_damping)
                .clamp(0.0, 1.0),
        }
    }
}

/// Builder for [`ScrollConfig`] that rejects out-of-range values
#[derive(Debug, Clone, Default)]
pub struct ScrollConfigBuilder {
    config: ScrollConfig,
}

impl ScrollConfigBuilder {
    /// Set the momentum deceleration rate (px/ms²)
    pub fn deceleration_rate(mut self, rate: f32) -> Self {
        self.config.deceleration_rate = rate;
        self
    }

    /// Set the maximum overscroll distance (px)
    pub fn bounce_buffer(mut self, buffer: f32) -> Self {
        self.config.bounce_buffer = buffer;
        self
    }

    /// Set the minimum bounce-back duration (ms)
    pub fn bounce_back_min_time(mut self, ms: f32) -> Self {
        self.config.bounce_back_min_time = ms;
        self
    }

    /// Set the bounce-back duration added per pixel of overshoot (ms/px)
    pub fn bounce_back_distance_multi(mut self, ms_per_px: f32) -> Self {
        self.config.bounce_back_distance_multi = ms_per_px;
        self
    }

    /// Set the out-of-bounds drag damping factor (0.0..=1.0)
    pub fn overscroll_damping(mut self, factor: f32) -> Self {
        self.config.overscroll_damping = factor;
        self
    }

    /// Validate and produce the configuration
    pub fn build(self) -> Result<ScrollConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
