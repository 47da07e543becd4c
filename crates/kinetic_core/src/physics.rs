//! Momentum and bounce-back math
//!
//! Momentum is standard constant-deceleration projectile motion: a release at
//! speed `v` coasts `v² / (2 * deceleration)` pixels over `v / deceleration`
//! milliseconds. When the projected rest position lands past an edge it is
//! clamped to at most `bounce_buffer` pixels of overshoot and the travel time
//! is recomputed for the shortened path.

use crate::bounds::out_of_bounds;
use crate::config::ScrollConfig;

/// Result of a momentum projection: where to animate and for how long
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Momentum {
    /// Target position for the coast animation
    pub position: f32,
    /// Animation duration in whole milliseconds, truncated toward zero
    pub duration_ms: f32,
}

impl Momentum {
    /// Zero-velocity momentum: stay where we are
    pub fn rest(position: f32) -> Self {
        Self {
            position,
            duration_ms: 0.0,
        }
    }
}

/// Project the rest position and travel time for a drag release
///
/// `distance` is the net drag displacement (signed pixels) and `duration_ms`
/// the elapsed drag time. A zero or degenerate duration yields zero momentum
/// rather than a division by zero.
pub fn calc_momentum(
    current: f32,
    distance: f32,
    duration_ms: f32,
    extent: f32,
    config: &ScrollConfig,
) -> Momentum {
    if !distance.is_finite() || !duration_ms.is_finite() || duration_ms <= 0.0 {
        return Momentum::rest(current);
    }

    let speed = distance.abs() / duration_ms;
    if speed <= 0.0 {
        return Momentum::rest(current);
    }

    let direction = if distance < 0.0 { -1.0 } else { 1.0 };
    let mut position = current + direction * speed * speed / (2.0 * config.deceleration_rate);
    let mut time = speed / config.deceleration_rate;

    if let Some(overflow) = out_of_bounds(position, extent) {
        if overflow > 0.0 {
            // Past the start edge the overflow equals the position itself,
            // so clamping the overflow clamps the position.
            position = overflow.min(config.bounce_buffer);
        } else {
            position = position.max(-(extent + config.bounce_buffer));
        }
        time = (position - current).abs() / speed;
    }

    Momentum {
        position,
        duration_ms: time.max(0.0).trunc(),
    }
}

/// Duration of the spring-back animation for a given overshoot
///
/// Affine in the overshoot distance: a floor keeps short corrections
/// perceivable, the multiplier scales with how far out the content is.
pub fn bounce_time(how_much_out: f32, config: &ScrollConfig) -> f32 {
    how_much_out.abs() * config.bounce_back_distance_multi + config.bounce_back_min_time
}

/// Rubber-band a drag delta applied while out of bounds
///
/// Truncates toward zero so repeated small deltas cannot creep past the
/// damping factor.
pub fn damped_delta(delta: f32, damping: f32) -> f32 {
    (delta * damping).trunc()
}
