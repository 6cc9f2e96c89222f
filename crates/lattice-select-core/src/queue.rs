//! Posted input queue for deferred delivery.
//!
//! Signal slots run while their emitter is in the middle of handling an input,
//! so they cannot drive the emitter directly. Instead they post a new input
//! through a [`Poster`]; the owner of the [`PostQueue`] drains it once the
//! current input has been fully processed.
//!
//! # How It Works
//!
//! 1. The widget owns a `PostQueue<I>` and hands out cloneable `Poster<I>`s.
//! 2. An observer captures a poster and calls [`Poster::post`] from a slot.
//! 3. After finishing the current input, the widget pops posted inputs in FIFO
//!    order and handles each one as an independent input.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::logging::targets;

/// FIFO of inputs posted for deferred handling.
pub struct PostQueue<T> {
    pending: Arc<Mutex<VecDeque<T>>>,
}

impl<T> PostQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            pending: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Create a handle that posts into this queue.
    pub fn poster(&self) -> Poster<T> {
        Poster {
            pending: Arc::clone(&self.pending),
        }
    }

    /// Take the oldest posted item, if any.
    ///
    /// The lock is released before returning, so the caller may handle the
    /// item while other posters keep appending.
    pub fn pop(&self) -> Option<T> {
        self.pending.lock().pop_front()
    }

    /// Number of items waiting.
    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    /// Whether nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

impl<T> Default for PostQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for PostQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostQueue")
            .field("pending", &self.len())
            .finish()
    }
}

/// Cloneable handle for posting into a [`PostQueue`].
pub struct Poster<T> {
    pending: Arc<Mutex<VecDeque<T>>>,
}

impl<T> Poster<T> {
    /// Append an item to the queue.
    pub fn post(&self, item: T) {
        let mut pending = self.pending.lock();
        pending.push_back(item);
        tracing::trace!(target: targets::QUEUE, pending = pending.len(), "input posted");
    }
}

impl<T> Clone for Poster<T> {
    fn clone(&self) -> Self {
        Self {
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<T> std::fmt::Debug for Poster<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poster").finish_non_exhaustive()
    }
}
