//! Drag-event dispatch
//!
//! Hosts push [`DragEvent`]s into a [`DragDispatcher`]; each attached
//! scroller registers exactly one listener and removes it on teardown.

use std::sync::{Arc, Mutex};

use kinetic_core::DragEvent;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a registered drag listener
    pub struct ListenerId;
}

/// A registered drag-event consumer
pub type DragListener = Box<dyn FnMut(DragEvent) + Send>;

/// Anything a scroller can subscribe to for drag events
pub trait DragSource {
    /// Register a listener; events are delivered until removal
    fn add_listener(&mut self, listener: DragListener) -> ListenerId;

    /// Remove a listener. Returns false when the id was already gone.
    fn remove_listener(&mut self, id: ListenerId) -> bool;
}

/// Fan-out of drag events to registered listeners
#[derive(Default)]
pub struct DragDispatcher {
    listeners: SlotMap<ListenerId, DragListener>,
}

impl DragDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dispatcher ready to be shared between the host input plumbing and
    /// attached scrollers
    pub fn shared() -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Deliver an event to every registered listener, in registration order
    pub fn emit(&mut self, event: DragEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listeners are registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl DragSource for DragDispatcher {
    fn add_listener(&mut self, listener: DragListener) -> ListenerId {
        self.listeners.insert(listener)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }
}
