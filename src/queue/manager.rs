//! Three-tier queue engine with typed retrieval

use super::{Priority, QueueItem};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, info};

/// A prioritized element collection.
///
/// Elements are ranked into three tiers by their [`Priority`] and served
/// highest tier first; within a tier elements come out in the order they
/// were added. A single queue may hold many concrete payload types at once.
/// The typed accessors ([`peek_as`](Self::peek_as), [`pop_as`](Self::pop_as),
/// [`remove_at_as`](Self::remove_at_as)) recover a concrete type on demand
/// and return `None` when the stored element is some other type.
///
/// Absence is always a normal outcome here: an empty queue, a predicate with
/// no match, a wrong concrete type or an out-of-range index all yield
/// `None`/`false`, never a panic.
pub struct PriorityQueue {
    /// One FIFO sequence per tier, indexed by `Priority::index()`. Every
    /// element stored in a tier reports that tier's priority.
    tiers: [VecDeque<Box<dyn QueueItem>>; 3],
}

impl PriorityQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            tiers: [VecDeque::new(), VecDeque::new(), VecDeque::new()],
        }
    }

    /// Number of elements across all tiers.
    pub fn len(&self) -> usize {
        self.tiers.iter().map(VecDeque::len).sum()
    }

    /// Whether every tier is empty.
    pub fn is_empty(&self) -> bool {
        self.tiers.iter().all(VecDeque::is_empty)
    }

    /// Number of elements queued at the given priority.
    pub fn len_of(&self, priority: Priority) -> usize {
        self.tiers[priority.index()].len()
    }

    /// Add an element to the tail of its priority tier.
    pub fn add(&mut self, item: Box<dyn QueueItem>) {
        self.insert(item, None);
    }

    /// Add elements in iteration order; each lands at the tail of its tier.
    pub fn add_all(&mut self, items: Vec<Box<dyn QueueItem>>) {
        info!("adding {} items to queue", items.len());
        for item in items {
            self.insert(item, None);
        }
    }

    /// Insert an element into its priority tier.
    ///
    /// With `None` the element is appended, same as [`add`](Self::add). With
    /// `Some(index)` the index is clamped to the tier's current length, so a
    /// past-the-end index appends rather than failing; elements at and after
    /// the position shift back by one.
    pub fn insert(&mut self, item: Box<dyn QueueItem>, index: Option<usize>) {
        let priority = item.priority();
        let tier = &mut self.tiers[priority.index()];

        match index {
            Some(index) => {
                let index = index.min(tier.len());
                debug!("inserting item at index {} of {} tier", index, priority);
                tier.insert(index, item);
            }
            None => {
                debug!("adding item to {} tier", priority);
                tier.push_back(item);
            }
        }
    }

    /// The element that would be served next, without removing it.
    ///
    /// Scans tiers from high to low and returns the head of the first
    /// non-empty one, or `None` when the queue is empty.
    pub fn peek(&self) -> Option<&dyn QueueItem> {
        self.tiers
            .iter()
            .rev()
            .find_map(VecDeque::front)
            .map(|item| item.as_ref())
    }

    /// The element that would be served next, if it is a `T`.
    ///
    /// Returns `None` when the queue is empty or the next element is some
    /// other concrete type. Nothing is removed either way.
    pub fn peek_as<T: QueueItem>(&self) -> Option<&T> {
        self.peek()?.as_any().downcast_ref::<T>()
    }

    /// Remove and return the next element.
    ///
    /// High priority elements are served before medium and medium before
    /// low; within a tier the earliest added element comes out first.
    /// Returns `None` on an empty queue.
    pub fn pop(&mut self) -> Option<Box<dyn QueueItem>> {
        let item = self.tiers.iter_mut().rev().find_map(VecDeque::pop_front);
        if let Some(item) = &item {
            debug!("serving item from {} tier", item.priority());
        }
        item
    }

    /// Remove and return the next element, if it is a `T`.
    ///
    /// The type is checked before removal, so a mismatch leaves the queue
    /// untouched and returns `None`; the element stays at the head.
    pub fn pop_as<T: QueueItem>(&mut self) -> Option<T> {
        if !self.peek()?.as_any().is::<T>() {
            return None;
        }
        self.pop().and_then(Self::unbox)
    }

    /// Drop the next element.
    ///
    /// Returns `true` when an element was removed, `false` on an empty
    /// queue.
    pub fn discard_top(&mut self) -> bool {
        self.pop().is_some()
    }

    /// Ordered view of every element queued at the given priority.
    pub fn items_of(&self, priority: Priority) -> Vec<&dyn QueueItem> {
        self.tiers[priority.index()]
            .iter()
            .map(|item| item.as_ref())
            .collect()
    }

    /// Empty the given tier, returning its elements in their queued order.
    pub fn remove_all_of(&mut self, priority: Priority) -> Vec<Box<dyn QueueItem>> {
        let items: Vec<_> = self.tiers[priority.index()].drain(..).collect();
        info!("removed {} items from {} tier", items.len(), priority);
        items
    }

    /// Remove every element from every tier. Harmless on an already empty
    /// queue.
    pub fn clear(&mut self) {
        info!("clearing queue of {} items", self.len());
        for tier in &mut self.tiers {
            tier.clear();
        }
    }

    /// Remove the first element of the given priority satisfying
    /// `predicate`.
    ///
    /// Only the matching tier is scanned, head to tail. Returns `None` when
    /// nothing matches.
    pub fn remove_where<F>(&mut self, priority: Priority, predicate: F) -> Option<Box<dyn QueueItem>>
    where
        F: Fn(&dyn QueueItem) -> bool,
    {
        Self::remove_from_tier(&mut self.tiers[priority.index()], &predicate)
    }

    /// Remove the first element in overall serving order satisfying
    /// `predicate`.
    ///
    /// Scans the high tier, then medium, then low, each head to tail. When
    /// the element's priority is known,
    /// [`remove_where`](Self::remove_where) avoids scanning the other tiers.
    pub fn remove_first_where<F>(&mut self, predicate: F) -> Option<Box<dyn QueueItem>>
    where
        F: Fn(&dyn QueueItem) -> bool,
    {
        self.tiers
            .iter_mut()
            .rev()
            .find_map(|tier| Self::remove_from_tier(tier, &predicate))
    }

    /// Remove the first element equal to `item` under `T`'s equality.
    ///
    /// The element's own priority selects the tier to scan; stored elements
    /// of other concrete types never compare equal. Returns the removed
    /// payload, or `None` when no stored `T` matches.
    pub fn remove_item<T>(&mut self, item: &T) -> Option<T>
    where
        T: QueueItem + PartialEq,
    {
        let tier = &mut self.tiers[item.priority().index()];
        let position = tier.iter().position(|candidate| {
            candidate
                .as_any()
                .downcast_ref::<T>()
                .map_or(false, |candidate| candidate == item)
        })?;
        tier.remove(position).and_then(Self::unbox)
    }

    /// Remove the element at `index` within the given priority tier.
    ///
    /// An out-of-range index is a normal miss: the tier is left unchanged
    /// and `None` is returned.
    pub fn remove_at(&mut self, index: usize, priority: Priority) -> Option<Box<dyn QueueItem>> {
        self.tiers[priority.index()].remove(index)
    }

    /// Remove the element at `index` within the given priority tier, if it
    /// is a `T`.
    ///
    /// The type is checked before removal: a valid index holding some other
    /// concrete type leaves the tier unchanged and returns `None`.
    pub fn remove_at_as<T: QueueItem>(&mut self, index: usize, priority: Priority) -> Option<T> {
        let tier = &mut self.tiers[priority.index()];
        if !tier.get(index)?.as_any().is::<T>() {
            return None;
        }
        tier.remove(index).and_then(Self::unbox)
    }

    /// Per-tier element counts as human-readable text, highest tier first.
    ///
    /// Diagnostic only; the exact wording is not part of the contract.
    pub fn breakdown(&self) -> String {
        Priority::ALL
            .into_iter()
            .rev()
            .map(|priority| format!("{} {} priority item(s)", self.len_of(priority), priority))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn remove_from_tier<F>(
        tier: &mut VecDeque<Box<dyn QueueItem>>,
        predicate: &F,
    ) -> Option<Box<dyn QueueItem>>
    where
        F: Fn(&dyn QueueItem) -> bool,
    {
        let position = tier.iter().position(|item| predicate(item.as_ref()))?;
        tier.remove(position)
    }

    fn unbox<T: QueueItem>(item: Box<dyn QueueItem>) -> Option<T> {
        item.into_any().downcast::<T>().ok().map(|item| *item)
    }
}

impl Default for PriorityQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PriorityQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue with {} item(s)", self.len())
    }
}

impl fmt::Debug for PriorityQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("high", &self.len_of(Priority::High))
            .field("medium", &self.len_of(Priority::Medium))
            .field("low", &self.len_of(Priority::Low))
            .finish()
    }
}
