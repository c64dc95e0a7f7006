//! Three-tier priority queue for heterogeneous elements.
//!
//! Elements carry one of three priorities (`low < medium < high`) and are
//! served highest priority first, in insertion order within a tier. A single
//! queue may hold many concrete payload types at once; typed accessors
//! recover a concrete type on demand and return `None` on a mismatch.

pub mod queue;

// Public API
pub use queue::{Prioritized, Priority, PriorityQueue, QueueItem};
