//! The drag-interpretation state machine
//!
//! Pure transition functions: each takes the current phase, a freshly
//! measured [`Snapshot`] of the world, and returns the next phase plus the
//! renderer effects to apply. Keeping the transitions free of renderer
//! references makes every branch unit-testable without animation timing.

use kinetic_core::{bounce_time, calc_momentum, damped_delta, out_of_bounds, DragEvent, ScrollConfig};
use smallvec::SmallVec;

/// Effects the scroller applies to the position renderer, in order
pub type Effects = SmallVec<[Effect; 2]>;

/// What the scroller is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollPhase {
    /// At rest; nothing in flight
    #[default]
    Idle,
    /// A finger is down and moves apply synchronously
    Dragging,
    /// An animation is in flight
    Settling(SettlePhase),
}

/// Which settling animation is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettlePhase {
    /// Post-release coast toward the projected rest position
    Momentum,
    /// Spring-back from past an edge to the nearest valid position
    Bounce,
}

impl ScrollPhase {
    /// True while an animation is in flight
    pub fn is_settling(&self) -> bool {
        matches!(self, ScrollPhase::Settling(_))
    }

    /// True when fully at rest
    pub fn is_idle(&self) -> bool {
        matches!(self, ScrollPhase::Idle)
    }
}

/// A renderer operation produced by a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Halt the in-flight animation; its completion must never fire
    StopAnimation,
    /// Write a position synchronously (live drag tracking)
    SetPosition(f32),
    /// Animate from the current position to a target
    AnimateTo {
        /// Target position
        position: f32,
        /// Animation duration in milliseconds
        duration_ms: f32,
    },
}

/// Freshly measured world state handed to a transition
///
/// The caller re-measures `scroll_extent` at drag start and before every
/// boundary check; within a drag, moves reuse the extent measured at start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// The renderer's current position
    pub position: f32,
    /// Scrollable range; valid resting positions are `[-extent, 0]`
    pub scroll_extent: f32,
    /// Whether the renderer reports an animation in flight
    pub animating: bool,
}

/// Advance the machine for a drag event
pub fn on_drag_event(
    phase: ScrollPhase,
    event: &DragEvent,
    snap: Snapshot,
    config: &ScrollConfig,
) -> (ScrollPhase, Effects) {
    let mut effects = Effects::new();

    match *event {
        DragEvent::Start => {
            // A new drag always wins over an in-flight animation: stop it
            // before the first move so two writers never race the position.
            if phase.is_settling() || snap.animating {
                effects.push(Effect::StopAnimation);
            }
            tracing::trace!(?phase, pos = snap.position, "drag start");
            (ScrollPhase::Dragging, effects)
        }

        DragEvent::Move { delta } => {
            if phase.is_settling() {
                // The drag source emits Start before any Move; a Move here
                // means events arrived out of order. Keep the animation.
                tracing::trace!(delta, "move during settle ignored");
                return (phase, effects);
            }
            let mut candidate = snap.position + delta;
            if out_of_bounds(candidate, snap.scroll_extent).is_some() {
                candidate = snap.position + damped_delta(delta, config.overscroll_damping);
            }
            effects.push(Effect::SetPosition(candidate));
            (ScrollPhase::Dragging, effects)
        }

        DragEvent::End {
            distance,
            duration_ms,
            inactive,
        } => {
            if phase.is_settling() {
                tracing::trace!("end during settle ignored");
                return (phase, effects);
            }

            // Out of bounds or a held-still release: no momentum, just make
            // sure we come to rest inside the bounds.
            if inactive || out_of_bounds(snap.position, snap.scroll_extent).is_some() {
                return snap_back(snap, config);
            }

            let momentum = calc_momentum(
                snap.position,
                distance,
                duration_ms,
                snap.scroll_extent,
                config,
            );
            if momentum.position == snap.position {
                tracing::trace!("release with zero momentum");
                return (ScrollPhase::Idle, effects);
            }

            tracing::trace!(
                target = momentum.position,
                time = momentum.duration_ms,
                "momentum coast"
            );
            effects.push(Effect::AnimateTo {
                position: momentum.position,
                duration_ms: momentum.duration_ms,
            });
            (ScrollPhase::Settling(SettlePhase::Momentum), effects)
        }
    }
}

/// Advance the machine when a settling animation reports completion
///
/// A momentum coast may have stopped inside the bounce buffer, so its
/// completion chains into the boundary check; a bounce completion is final.
pub fn on_settle_complete(
    phase: ScrollPhase,
    snap: Snapshot,
    config: &ScrollConfig,
) -> (ScrollPhase, Effects) {
    match phase {
        ScrollPhase::Settling(SettlePhase::Momentum) => snap_back(snap, config),
        ScrollPhase::Settling(SettlePhase::Bounce) => (ScrollPhase::Idle, Effects::new()),
        // A completion while not settling is stale; the animation it belongs
        // to was already superseded.
        _ => {
            tracing::trace!(?phase, "stale settle completion ignored");
            (phase, Effects::new())
        }
    }
}

/// The boundary-check/snap procedure: the single source of all spring-back
/// animations
fn snap_back(snap: Snapshot, config: &ScrollConfig) -> (ScrollPhase, Effects) {
    let mut effects = Effects::new();
    match out_of_bounds(snap.position, snap.scroll_extent) {
        Some(how_much_out) => {
            let edge = if how_much_out > 0.0 {
                0.0
            } else {
                -snap.scroll_extent
            };
            tracing::trace!(how_much_out, edge, "bounce back");
            effects.push(Effect::AnimateTo {
                position: edge,
                duration_ms: bounce_time(how_much_out, config),
            });
            (ScrollPhase::Settling(SettlePhase::Bounce), effects)
        }
        None => (ScrollPhase::Idle, effects),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ScrollConfig {
        ScrollConfig::default()
    }

    fn snap(position: f32, scroll_extent: f32) -> Snapshot {
        Snapshot {
            position,
            scroll_extent,
            animating: false,
        }
    }

    /// Momentum targets carry f32 rounding, so derived expectations compare
    /// within a tolerance.
    fn assert_close(actual: f32, expected: f32, tolerance: f32) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected ~{expected}, got {actual}"
        );
    }

    #[test]
    fn start_from_idle_has_no_effects() {
        let (phase, effects) =
            on_drag_event(ScrollPhase::Idle, &DragEvent::Start, snap(0.0, 500.0), &config());
        assert_eq!(phase, ScrollPhase::Dragging);
        assert!(effects.is_empty());
    }

    #[test]
    fn start_while_settling_stops_the_animation() {
        let world = Snapshot {
            position: 12.0,
            scroll_extent: 500.0,
            animating: true,
        };
        let (phase, effects) = on_drag_event(
            ScrollPhase::Settling(SettlePhase::Bounce),
            &DragEvent::Start,
            world,
            &config(),
        );
        assert_eq!(phase, ScrollPhase::Dragging);
        assert_eq!(effects.as_slice(), &[Effect::StopAnimation]);
    }

    #[test]
    fn in_bounds_move_applies_full_delta() {
        let (phase, effects) = on_drag_event(
            ScrollPhase::Dragging,
            &DragEvent::Move { delta: -30.0 },
            snap(-100.0, 500.0),
            &config(),
        );
        assert_eq!(phase, ScrollPhase::Dragging);
        assert_eq!(effects.as_slice(), &[Effect::SetPosition(-130.0)]);
    }

    #[test]
    fn out_of_bounds_move_is_damped_to_half_speed() {
        // Dragging 50px past the start edge from position 0 lands at 25.
        let (_, effects) = on_drag_event(
            ScrollPhase::Dragging,
            &DragEvent::Move { delta: 50.0 },
            snap(0.0, 500.0),
            &config(),
        );
        assert_eq!(effects.as_slice(), &[Effect::SetPosition(25.0)]);
    }

    #[test]
    fn damped_move_truncates_toward_zero() {
        let (_, effects) = on_drag_event(
            ScrollPhase::Dragging,
            &DragEvent::Move { delta: 51.0 },
            snap(0.0, 500.0),
            &config(),
        );
        assert_eq!(effects.as_slice(), &[Effect::SetPosition(25.0)]);

        let (_, effects) = on_drag_event(
            ScrollPhase::Dragging,
            &DragEvent::Move { delta: -51.0 },
            snap(-500.0, 500.0),
            &config(),
        );
        assert_eq!(effects.as_slice(), &[Effect::SetPosition(-525.0)]);
    }

    #[test]
    fn custom_damping_factor_is_honored() {
        let config = ScrollConfig::builder()
            .overscroll_damping(0.25)
            .build()
            .unwrap();
        let (_, effects) = on_drag_event(
            ScrollPhase::Dragging,
            &DragEvent::Move { delta: 40.0 },
            snap(0.0, 500.0),
            &config,
        );
        assert_eq!(effects.as_slice(), &[Effect::SetPosition(10.0)]);
    }

    #[test]
    fn release_with_momentum_starts_coast() {
        let (phase, effects) = on_drag_event(
            ScrollPhase::Dragging,
            &DragEvent::End {
                distance: -300.0,
                duration_ms: 300.0,
                inactive: false,
            },
            snap(0.0, 1000.0),
            &config(),
        );
        assert_eq!(phase, ScrollPhase::Settling(SettlePhase::Momentum));
        assert_eq!(effects.len(), 1);
        match effects[0] {
            Effect::AnimateTo {
                position,
                duration_ms,
            } => {
                assert_close(position, -500.0, 1e-3);
                assert_close(duration_ms, 1000.0, 1.0);
            }
            other => panic!("expected a coast animation, got {other:?}"),
        }
    }

    #[test]
    fn fast_release_coasts_into_the_bounce_buffer() {
        let (phase, effects) = on_drag_event(
            ScrollPhase::Dragging,
            &DragEvent::End {
                distance: 300.0,
                duration_ms: 300.0,
                inactive: false,
            },
            snap(0.0, 1000.0),
            &config(),
        );
        assert_eq!(phase, ScrollPhase::Settling(SettlePhase::Momentum));
        assert_eq!(
            effects.as_slice(),
            &[Effect::AnimateTo {
                position: 40.0,
                duration_ms: 40.0,
            }]
        );
    }

    #[test]
    fn inactive_release_in_bounds_goes_straight_to_idle() {
        let (phase, effects) = on_drag_event(
            ScrollPhase::Dragging,
            &DragEvent::End {
                distance: -300.0,
                duration_ms: 300.0,
                inactive: true,
            },
            snap(-100.0, 500.0),
            &config(),
        );
        assert_eq!(phase, ScrollPhase::Idle);
        assert!(effects.is_empty());
    }

    #[test]
    fn inactive_release_out_of_bounds_bounces_back() {
        let cfg = config();
        let (phase, effects) = on_drag_event(
            ScrollPhase::Dragging,
            &DragEvent::End {
                distance: 60.0,
                duration_ms: 300.0,
                inactive: true,
            },
            snap(30.0, 500.0),
            &cfg,
        );
        assert_eq!(phase, ScrollPhase::Settling(SettlePhase::Bounce));
        assert_eq!(
            effects.as_slice(),
            &[Effect::AnimateTo {
                position: 0.0,
                duration_ms: bounce_time(30.0, &cfg),
            }]
        );
    }

    #[test]
    fn release_past_the_end_edge_bounces_to_the_end() {
        let cfg = config();
        let (phase, effects) = on_drag_event(
            ScrollPhase::Dragging,
            &DragEvent::End {
                distance: -60.0,
                duration_ms: 300.0,
                inactive: false,
            },
            snap(-520.0, 500.0),
            &cfg,
        );
        assert_eq!(phase, ScrollPhase::Settling(SettlePhase::Bounce));
        assert_eq!(
            effects.as_slice(),
            &[Effect::AnimateTo {
                position: -500.0,
                duration_ms: bounce_time(-20.0, &cfg),
            }]
        );
    }

    #[test]
    fn zero_duration_release_settles_immediately() {
        let (phase, effects) = on_drag_event(
            ScrollPhase::Dragging,
            &DragEvent::End {
                distance: 100.0,
                duration_ms: 0.0,
                inactive: false,
            },
            snap(-100.0, 500.0),
            &config(),
        );
        assert_eq!(phase, ScrollPhase::Idle);
        assert!(effects.is_empty());
    }

    #[test]
    fn momentum_completion_in_bounds_settles() {
        let (phase, effects) = on_settle_complete(
            ScrollPhase::Settling(SettlePhase::Momentum),
            snap(-250.0, 500.0),
            &config(),
        );
        assert_eq!(phase, ScrollPhase::Idle);
        assert!(effects.is_empty());
    }

    #[test]
    fn momentum_completion_in_the_buffer_chains_a_bounce() {
        let cfg = config();
        let (phase, effects) = on_settle_complete(
            ScrollPhase::Settling(SettlePhase::Momentum),
            snap(40.0, 500.0),
            &cfg,
        );
        assert_eq!(phase, ScrollPhase::Settling(SettlePhase::Bounce));
        assert_eq!(
            effects.as_slice(),
            &[Effect::AnimateTo {
                position: 0.0,
                duration_ms: bounce_time(40.0, &cfg),
            }]
        );
    }

    #[test]
    fn bounce_completion_is_final() {
        let (phase, effects) = on_settle_complete(
            ScrollPhase::Settling(SettlePhase::Bounce),
            snap(0.0, 500.0),
            &config(),
        );
        assert_eq!(phase, ScrollPhase::Idle);
        assert!(effects.is_empty());
    }

    #[test]
    fn stale_completion_is_ignored() {
        for phase in [ScrollPhase::Idle, ScrollPhase::Dragging] {
            let (next, effects) = on_settle_complete(phase, snap(0.0, 500.0), &config());
            assert_eq!(next, phase);
            assert!(effects.is_empty());
        }
    }

    #[test]
    fn move_during_settle_is_ignored() {
        let phase = ScrollPhase::Settling(SettlePhase::Momentum);
        let (next, effects) = on_drag_event(
            phase,
            &DragEvent::Move { delta: 10.0 },
            snap(0.0, 500.0),
            &config(),
        );
        assert_eq!(next, phase);
        assert!(effects.is_empty());
    }
}
