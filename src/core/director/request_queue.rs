//=========================================================================
// Request Queue
//=========================================================================
//
// FIFO queue of accepted stack requests.
//
// Requests arrive here after synchronous validation. The director drains
// them one at a time, starting the next only after the previous
// transition has completed and its lifecycle hooks have fired.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::VecDeque;
use std::fmt;

//=== Internal Dependencies ===============================================

use super::StackOp;
use crate::core::transition::Transition;

//=== Request =============================================================

/// A validated stack operation waiting for its turn.
pub(crate) struct Request {
    pub op: StackOp,
    pub transition: Option<Box<dyn Transition>>,
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("op", &self.op)
            .field("transition", &self.transition.as_ref().map(|t| t.name()))
            .finish()
    }
}

//=== RequestQueue ========================================================

/// Queue of stack requests in arrival order.
#[derive(Debug, Default)]
pub(crate) struct RequestQueue {
    queue: VecDeque<Request>,
}

impl RequestQueue {
    /// Creates an empty queue with room for `capacity` requests.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a request behind everything already queued.
    pub fn push(&mut self, request: Request) {
        self.queue.push_back(request);
    }

    /// Removes the oldest request.
    pub fn pop(&mut self) -> Option<Request> {
        self.queue.pop_front()
    }

    /// Returns an iterator over queued requests, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Request> {
        self.queue.iter()
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued requests.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all requests, leaving the queue empty.
    pub fn take(&mut self) -> VecDeque<Request> {
        std::mem::take(&mut self.queue)
    }
}

//=== Tests ===============================================================
