//! Bounded FIFO message tracker.
//!
//! Thread-safe via a single `parking_lot::RwLock` around the ordered list and
//! its id index, so readers never observe the two out of step.

use super::list::{Handle, OrderedList};
use super::types::{AddOutcome, Message, TrackerError, TrackerStats};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

#[derive(Debug, Default)]
struct TrackerState {
    order: OrderedList<Arc<Message>>,
    index: HashMap<String, Handle>,
    stats: TrackerStats,
}

/// Remembers the most recently added messages, up to a fixed capacity.
///
/// - duplicate ids are ignored, the first stored copy wins
/// - when full, the oldest message is evicted (insertion order, reads never
///   refresh an entry)
/// - clones share the same underlying state
#[derive(Debug, Clone)]
pub struct MessageTracker {
    max_length: NonZeroUsize,
    inner: Arc<RwLock<TrackerState>>,
}

impl MessageTracker {
    /// Create an empty tracker holding at most `max_length` messages.
    pub fn new(max_length: NonZeroUsize) -> Self {
        Self {
            max_length,
            inner: Arc::new(RwLock::new(TrackerState::default())),
        }
    }

    /// Create an empty tracker from an untyped capacity, rejecting zero.
    pub fn with_capacity(max_length: usize) -> Result<Self, TrackerError> {
        NonZeroUsize::new(max_length)
            .map(Self::new)
            .ok_or(TrackerError::InvalidCapacity {
                capacity: max_length,
            })
    }

    /// Maximum number of messages retained.
    pub fn capacity(&self) -> usize {
        self.max_length.get()
    }

    /// Track `message`, evicting the oldest entry if the tracker is full.
    ///
    /// Adding an id that is already tracked succeeds without touching the
    /// stored entry or its position. The returned outcome describes this call
    /// only, independent of writers on other handles.
    pub fn add(&self, message: Message) -> Result<AddOutcome, TrackerError> {
        if message.id.is_empty() {
            return Err(TrackerError::InvalidMessage {
                reason: "message id is empty",
            });
        }

        let mut state = self.inner.write();
        if state.index.contains_key(&message.id) {
            state.stats.duplicates_total += 1;
            tracing::trace!(id = %message.id, "ignoring already tracked message");
            return Ok(AddOutcome::Duplicate);
        }

        let mut evicted_any = false;
        if state.order.len() >= self.max_length.get() {
            if let Some(evicted) = state.order.pop_front() {
                state.index.remove(&evicted.id);
                state.stats.evictions_total += 1;
                evicted_any = true;
                tracing::debug!(
                    evicted_id = %evicted.id,
                    capacity = self.max_length.get(),
                    "evicted oldest tracked message"
                );
            }
        }

        let id = message.id.clone();
        let handle = state.order.push_back(Arc::new(message));
        state.index.insert(id, handle);
        state.stats.added_total += 1;
        Ok(AddOutcome::Inserted {
            evicted: evicted_any,
        })
    }

    /// Track a message that may be absent; `None` is an invalid message.
    pub fn add_optional(&self, message: Option<Message>) -> Result<AddOutcome, TrackerError> {
        match message {
            Some(message) => self.add(message),
            None => Err(TrackerError::InvalidMessage {
                reason: "message is absent",
            }),
        }
    }

    /// Forget the message with `id`.
    pub fn delete(&self, id: &str) -> Result<(), TrackerError> {
        let mut state = self.inner.write();
        let handle = state
            .index
            .remove(id)
            .ok_or_else(|| TrackerError::MessageNotFound { id: id.to_string() })?;
        state.order.remove(handle);
        state.stats.deletions_total += 1;
        tracing::trace!(id, "deleted tracked message");
        Ok(())
    }

    /// Look up a tracked message by id. Does not affect eviction order.
    pub fn message(&self, id: &str) -> Result<Arc<Message>, TrackerError> {
        let state = self.inner.read();
        state
            .index
            .get(id)
            .and_then(|handle| state.order.get(*handle))
            .cloned()
            .ok_or_else(|| TrackerError::MessageNotFound { id: id.to_string() })
    }

    /// Snapshot of all tracked messages, oldest first.
    pub fn messages(&self) -> Vec<Arc<Message>> {
        let state = self.inner.read();
        state.order.iter().cloned().collect()
    }

    /// Check whether `id` is currently tracked.
    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().index.contains_key(id)
    }

    /// Number of messages currently tracked.
    pub fn len(&self) -> usize {
        self.inner.read().order.len()
    }

    /// True when no message is tracked.
    pub fn is_empty(&self) -> bool {
        self.inner.read().order.is_empty()
    }

    /// Counters accumulated since construction.
    pub fn stats(&self) -> TrackerStats {
        self.inner.read().stats
    }
}
