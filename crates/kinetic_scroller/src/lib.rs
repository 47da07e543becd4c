//! Kinetic Scroller
//!
//! Drag-event interpretation for momentum scrolling:
//!
//! - **State Machine**: pure `(phase, event) -> (phase, effects)` transitions
//!   over Idle / Dragging / Settling, testable without a renderer
//! - **Scroller**: applies the effects to a host-provided position renderer
//!   and chases animation completions with fresh boundary checks
//! - **Lifecycle**: slotmap-backed drag-listener registry with synchronous
//!   detach; completions landing after teardown are ignored
//!
//! The physics itself (bounds, momentum, bounce timing) lives in
//! `kinetic_core`.
//!
//! # Example
//!
//! ```ignore
//! use kinetic_core::{DragEvent, ScrollConfig};
//! use kinetic_scroller::{DragDispatcher, Scroller};
//!
//! let source = DragDispatcher::shared();
//! let scroller = Scroller::attach(&source, renderer, geometry, ScrollConfig::default());
//!
//! source.lock().unwrap().emit(DragEvent::Start);
//! source.lock().unwrap().emit(DragEvent::Move { delta: -12.0 });
//! ```

pub mod machine;
pub mod renderer;
pub mod scroller;
pub mod source;

pub use machine::{Effect, ScrollPhase, SettlePhase, Snapshot};
pub use renderer::{CompletionFn, PositionRenderer};
pub use scroller::Scroller;
pub use source::{DragDispatcher, DragListener, DragSource, ListenerId};
