use std::cell::RefCell;

/// A queued state transition. Applied exactly once on the next drain, in
/// enqueue order, then dropped.
pub type Action<S> = Box<dyn FnOnce(S) -> S>;

/// Pending reducer actions for one hook slot.
///
/// Append is O(1) and drain applies every action exactly once as a left fold,
/// so `enqueue(a); enqueue(b)` reduces a base state `s` to `b(a(s))`. The
/// queue is cleared atomically as part of the drain: an action enqueued while
/// the fold runs lands in the *next* drain, never the current one.
pub struct UpdateQueue<S> {
    pending: RefCell<Vec<Action<S>>>,
}

impl<S> UpdateQueue<S> {
    pub fn new() -> Self {
        Self {
            pending: RefCell::new(Vec::new()),
        }
    }

    pub fn enqueue(&self, action: Action<S>) {
        self.pending.borrow_mut().push(action);
    }

    /// Folds every pending action over `base` in enqueue order and clears the
    /// queue. Draining an empty queue returns `base` unchanged.
    pub fn drain_into(&self, base: S) -> S {
        let drained = std::mem::take(&mut *self.pending.borrow_mut());
        drained.into_iter().fold(base, |state, action| action(state))
    }

    pub fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl<S> Default for UpdateQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}
