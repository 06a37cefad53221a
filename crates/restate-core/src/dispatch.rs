use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::queue::UpdateQueue;

/// The core-to-trigger edge: a dirty flag plus an optional waker.
///
/// `request()` is fire-and-forget; how re-renders are scheduled, batched, or
/// coalesced is the embedder's business. Polling embedders read the flag via
/// `Instance::needs_render`, push-style embedders install a waker.
pub struct RenderSignal {
    dirty: Cell<bool>,
    waker: RefCell<Option<Box<dyn Fn()>>>,
}

impl RenderSignal {
    pub fn new() -> Self {
        Self {
            dirty: Cell::new(false),
            waker: RefCell::new(None),
        }
    }

    pub fn request(&self) {
        self.dirty.set(true);
        if let Some(waker) = self.waker.borrow().as_deref() {
            waker();
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Consumes the dirty flag, returning whether it was set.
    pub fn take(&self) -> bool {
        self.dirty.replace(false)
    }

    pub fn set_waker(&self, f: impl Fn() + 'static) {
        *self.waker.borrow_mut() = Some(Box::new(f));
    }
}

impl Default for RenderSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Dispatcher handed out by `use_state`, permanently bound to one slot's
/// update queue (never to the transient render cursor), so it stays correctly
/// targeted no matter how many renders happen after it was created.
///
/// Cloneable; every clone feeds the same queue. Dispatches issued between two
/// renders accumulate and are applied, in order, when the next render pass
/// reaches the slot's position.
pub struct SetState<S> {
    queue: Rc<UpdateQueue<S>>,
    signal: Rc<RenderSignal>,
}

impl<S> Clone for SetState<S> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
            signal: self.signal.clone(),
        }
    }
}

impl<S: 'static> SetState<S> {
    pub(crate) fn new(queue: Rc<UpdateQueue<S>>, signal: Rc<RenderSignal>) -> Self {
        Self { queue, signal }
    }

    /// Enqueues a reducer and requests a re-render.
    pub fn dispatch(&self, action: impl FnOnce(S) -> S + 'static) {
        self.queue.enqueue(Box::new(action));
        self.signal.request();
    }

    /// Replaces the state outright on the next render.
    pub fn set(&self, value: S) {
        self.dispatch(move |_| value);
    }

    pub fn pending_len(&self) -> usize {
        self.queue.pending_len()
    }
}
