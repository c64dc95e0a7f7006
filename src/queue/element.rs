//! Element contract for queue payloads

use super::Priority;
use std::any::Any;

/// A type that carries a [`Priority`].
///
/// Implementing this trait is the only requirement for storing a value in a
/// [`PriorityQueue`](super::PriorityQueue); the queue never inspects anything
/// beyond the priority.
pub trait Prioritized {
    /// The element's current priority.
    fn priority(&self) -> Priority;

    /// Reassign the element's priority.
    ///
    /// The queue never calls this itself. An element already stored in a
    /// tier keeps its place until explicitly removed and re-added.
    fn set_priority(&mut self, priority: Priority);
}

/// Object-safe queue element with runtime type recovery.
///
/// Blanket-implemented for every `Prioritized + Any` type, so payloads only
/// implement [`Prioritized`]. The `as_any` family backs the queue's typed
/// accessors, which downcast a stored element and return `None` on a
/// concrete-type mismatch instead of panicking.
pub trait QueueItem: Prioritized + Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Prioritized + Any> QueueItem for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
