//! Drag events consumed by the scroller
//!
//! The drag source (pointer/touch plumbing) reduces raw input to these three
//! event kinds. Deltas and distances are pixels along the scroll axis;
//! positive values move the content toward the start edge.

/// A discrete drag event emitted by the host's drag source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// A finger (or pointer) went down and started dragging
    Start,
    /// The pointer moved while dragging
    Move {
        /// Displacement since the previous move event
        delta: f32,
    },
    /// The pointer was released
    End {
        /// Net displacement since the drag started
        distance: f32,
        /// Elapsed drag time in milliseconds
        duration_ms: f32,
        /// True when the pointer paused long enough before release that
        /// momentum should be suppressed
        inactive: bool,
    },
}
