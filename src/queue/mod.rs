//! Three-tier priority queue for heterogeneous elements
//!
//! This module provides a coarse-grained priority queue that supports:
//! - Three fixed priority tiers (`low < medium < high`)
//! - Highest tier served first, FIFO order within a tier
//! - Mixed concrete payload types in a single queue
//! - Typed retrieval that fails soft on a concrete-type mismatch
//! - Positional, predicate and identity based removal within a tier

pub mod element;
pub mod manager;
pub mod priority;

pub use element::{Prioritized, QueueItem};
pub use manager::PriorityQueue;
pub use priority::Priority;
