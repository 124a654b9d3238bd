use crate::bodies::BodyFlags;
use crate::core::BodyHandle;
use crate::math::Aabb;
use std::collections::VecDeque;

/// Something that changed in the world's set of bodies and shapes
#[derive(Debug, Clone, PartialEq)]
pub enum WorldEvent {
    /// A body (with its shapes) has been added to the world
    EntityAdded {
        body: BodyHandle,
        flags: BodyFlags,
    },

    /// A body (with its shapes) has been removed from the world
    EntityRemoved {
        body: BodyHandle,
    },

    /// The four boundary walls were replaced to match new area bounds
    BoundaryRebuilt {
        bounds: Aabb,
    },
}

/// A queue of world events, drained by whoever displays or logs them
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<WorldEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Adds an event to the queue
    pub fn push(&mut self, event: WorldEvent) {
        self.events.push_back(event);
    }

    /// Gets the next event from the queue
    pub fn next_event(&mut self) -> Option<WorldEvent> {
        self.events.pop_front()
    }

    /// Removes and returns every queued event, oldest first
    pub fn drain(&mut self) -> Vec<WorldEvent> {
        self.events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Gets all events concerning a specific body
    pub fn events_for_body(&self, body: BodyHandle) -> Vec<&WorldEvent> {
        self.events
            .iter()
            .filter(|e| match e {
                WorldEvent::EntityAdded { body: b, .. } | WorldEvent::EntityRemoved { body: b } => *b == body,
                WorldEvent::BoundaryRebuilt { .. } => false,
            })
            .collect()
    }
}
