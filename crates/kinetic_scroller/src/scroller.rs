//! The scroller: machine transitions wired to a live renderer
//!
//! Owns the phase, re-measures geometry at the points the physics requires,
//! and turns machine effects into renderer calls. Animation completions are
//! delivered through a `Weak` handle plus a generation counter, so a
//! completion belonging to a cancelled animation — or arriving after the
//! scroller was torn down — is a no-op.

use std::sync::{Arc, Mutex, Weak};

use kinetic_core::{DragEvent, GeometryProvider, ScrollConfig};

use crate::machine::{self, Effect, Effects, ScrollPhase, Snapshot};
use crate::renderer::PositionRenderer;
use crate::source::{DragDispatcher, DragSource, ListenerId};

/// A single-axis momentum scroller bound to one surface
///
/// Created with [`Scroller::attach`] to subscribe to a [`DragDispatcher`],
/// or [`Scroller::new`] when the host delivers events itself via
/// [`Scroller::handle_event`]. Dropping the scroller detaches its listener;
/// an in-flight animation keeps running in the renderer but its completion
/// no longer reaches anyone.
pub struct Scroller<R: PositionRenderer, G: GeometryProvider> {
    inner: Arc<Mutex<Inner<R, G>>>,
    source: Weak<Mutex<DragDispatcher>>,
    listener: Option<ListenerId>,
}

struct Inner<R, G> {
    renderer: R,
    geometry: G,
    config: ScrollConfig,
    phase: ScrollPhase,
    scroll_extent: f32,
    /// Bumped for every animation start and stop; completions carry the
    /// generation they were issued under and are dropped on mismatch.
    generation: u64,
    self_weak: Weak<Mutex<Inner<R, G>>>,
}

impl<R: PositionRenderer, G: GeometryProvider> Scroller<R, G> {
    /// Create a scroller the host feeds events to directly
    pub fn new(renderer: R, geometry: G, config: ScrollConfig) -> Self {
        let inner = Arc::new(Mutex::new(Inner {
            renderer,
            geometry,
            config: config.sanitized(),
            phase: ScrollPhase::Idle,
            scroll_extent: 0.0,
            generation: 0,
            self_weak: Weak::new(),
        }));
        {
            let mut guard = inner.lock().unwrap();
            guard.self_weak = Arc::downgrade(&inner);
            guard.refresh_extent();
        }
        Self {
            inner,
            source: Weak::new(),
            listener: None,
        }
    }

    /// Create a scroller and register it with a drag dispatcher
    pub fn attach(
        source: &Arc<Mutex<DragDispatcher>>,
        renderer: R,
        geometry: G,
        config: ScrollConfig,
    ) -> Self {
        let mut scroller = Self::new(renderer, geometry, config);

        let weak = Arc::downgrade(&scroller.inner);
        let id = source
            .lock()
            .unwrap()
            .add_listener(Box::new(move |event| {
                if let Some(inner) = weak.upgrade() {
                    inner.lock().unwrap().handle_event(event);
                }
            }));

        scroller.source = Arc::downgrade(source);
        scroller.listener = Some(id);
        scroller
    }

    /// Feed a drag event directly (hosts without a dispatcher)
    pub fn handle_event(&self, event: DragEvent) {
        self.inner.lock().unwrap().handle_event(event);
    }

    /// The renderer's current position
    pub fn position(&self) -> f32 {
        self.inner.lock().unwrap().renderer.position()
    }

    /// The current machine phase
    pub fn phase(&self) -> ScrollPhase {
        self.inner.lock().unwrap().phase
    }

    /// The scroll extent as of the last measurement
    pub fn scroll_extent(&self) -> f32 {
        self.inner.lock().unwrap().scroll_extent
    }

    /// Unregister the drag listener. Safe to call more than once; also runs
    /// on drop.
    pub fn detach(&mut self) {
        if let Some(id) = self.listener.take() {
            if let Some(source) = self.source.upgrade() {
                source.lock().unwrap().remove_listener(id);
            }
        }
    }
}

impl<R: PositionRenderer, G: GeometryProvider> Drop for Scroller<R, G> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<R: PositionRenderer, G: GeometryProvider> Inner<R, G> {
    fn handle_event(&mut self, event: DragEvent) {
        // Bounds can change between drags (keyboard, rotation); start and
        // end both re-measure. Moves reuse the extent from drag start.
        if matches!(event, DragEvent::Start | DragEvent::End { .. }) {
            self.refresh_extent();
        }

        let snapshot = self.snapshot();
        let (phase, effects) = machine::on_drag_event(self.phase, &event, snapshot, &self.config);
        self.phase = phase;
        self.apply(effects);
    }

    fn on_animation_complete(&mut self, generation: u64) {
        if generation != self.generation {
            tracing::trace!(generation, current = self.generation, "stale completion");
            return;
        }

        // The boundary check always runs against fresh bounds.
        self.refresh_extent();
        let snapshot = self.snapshot();
        let (phase, effects) = machine::on_settle_complete(self.phase, snapshot, &self.config);
        self.phase = phase;
        self.apply(effects);
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.renderer.position(),
            scroll_extent: self.scroll_extent,
            animating: self.renderer.is_animating(),
        }
    }

    fn refresh_extent(&mut self) {
        self.scroll_extent = self.geometry.measure().scroll_extent();
    }

    fn apply(&mut self, effects: Effects) {
        for effect in effects {
            match effect {
                Effect::StopAnimation => {
                    // Invalidate the pending completion even if the renderer
                    // fails to suppress it.
                    self.generation = self.generation.wrapping_add(1);
                    self.renderer.stop();
                }
                Effect::SetPosition(position) => {
                    self.renderer.set_position(position);
                }
                Effect::AnimateTo {
                    position,
                    duration_ms,
                } => {
                    self.generation = self.generation.wrapping_add(1);
                    let generation = self.generation;
                    let weak = self.self_weak.clone();
                    self.renderer.animate_to(
                        position,
                        duration_ms,
                        Some(Box::new(move || {
                            if let Some(inner) = weak.upgrade() {
                                inner.lock().unwrap().on_animation_complete(generation);
                            }
                        })),
                    );
                }
            }
        }
    }
}
