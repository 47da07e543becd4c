//! Position renderer interface
//!
//! The renderer is host-provided: it owns the current offset of the scrolled
//! surface and whatever animation scheduling the platform offers. The
//! scroller only ever talks to it through this trait.

/// Completion callback handed to [`PositionRenderer::animate_to`]
pub type CompletionFn = Box<dyn FnOnce() + Send>;

/// Applies numeric offsets to the visible surface
///
/// # Contract
///
/// - `animate_to` returns immediately; the completion callback is invoked
///   later by the renderer's own scheduling, never re-entrantly from within
///   the call.
/// - `stop` halts an in-flight animation where it is (no rollback) and drops
///   the pending completion without invoking it.
/// - At most one animation is in flight at a time; a new `animate_to`
///   replaces the previous one, whose completion must not fire.
pub trait PositionRenderer: Send + 'static {
    /// The current offset of the surface
    fn position(&self) -> f32;

    /// Whether an animation is in flight
    fn is_animating(&self) -> bool;

    /// Write an offset synchronously, without animation
    fn set_position(&mut self, position: f32);

    /// Animate from the current offset to `position` over `duration_ms`
    fn animate_to(&mut self, position: f32, duration_ms: f32, on_complete: Option<CompletionFn>);

    /// Halt the in-flight animation, suppressing its completion
    fn stop(&mut self);
}
