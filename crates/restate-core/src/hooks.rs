use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::dispatch::{RenderSignal, SetState};
use crate::error::HookError;
use crate::queue::UpdateQueue;

/// One persisted state slot. Allocated on the mount pass at its call position,
/// replayed (state replaced, queue drained) on every later pass at that same
/// position.
pub struct StateSlot<S> {
    state: RefCell<S>,
    queue: Rc<UpdateQueue<S>>,
}

impl<S: Clone + 'static> StateSlot<S> {
    fn new(initial: S) -> Self {
        Self {
            state: RefCell::new(initial),
            queue: Rc::new(UpdateQueue::new()),
        }
    }

    /// Drains the queue into the stored state and returns the reduced value.
    fn reduce_pending(&self) -> S {
        let base = self.state.borrow().clone();
        let next = self.queue.drain_into(base);
        *self.state.borrow_mut() = next.clone();
        next
    }
}

/// The ordered hook slots of one component instance, plus its mount/update
/// mode. Slots are type-erased so one chain can hold hooks of different state
/// types; the Nth `use_state` call always resolves to the Nth slot.
///
/// `has_rendered` is per-instance by design: the whole pass is uniformly
/// mount or uniformly update, and two instances can never interfere through
/// shared mode state.
#[derive(Default)]
pub struct HookChain {
    slots: Vec<Box<dyn Any>>,
    has_rendered: bool,
}

impl HookChain {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn has_rendered(&self) -> bool {
        self.has_rendered
    }

    pub(crate) fn mark_rendered(&mut self) {
        self.has_rendered = true;
    }
}

/// Hook cursor for one render pass.
///
/// Exists only while the component function runs; the cursor starts at the
/// chain head and advances once per `use_state` call. It is an explicit
/// argument to the component rather than ambient state, so concurrently live
/// instances each carry their own.
pub struct Pass<'a> {
    chain: &'a mut HookChain,
    cursor: usize,
    signal: Rc<RenderSignal>,
}

impl<'a> Pass<'a> {
    pub(crate) fn begin(chain: &'a mut HookChain, signal: Rc<RenderSignal>) -> Self {
        Self {
            chain,
            cursor: 0,
            signal,
        }
    }

    /// The state primitive.
    ///
    /// On a mount pass, allocates a fresh slot holding `init()` and appends it
    /// to the chain. On an update pass, resolves the slot at the cursor's
    /// position; `init` is not called. Either way the slot's pending queue is
    /// then drained into its state, and the reduced value is returned together
    /// with a dispatcher bound to that slot's queue.
    ///
    /// The call order must be identical on every render of the same instance
    /// (no conditional hooks). A swapped-but-type-compatible order is not
    /// detectable and silently mixes up state; a changed count or type is
    /// caught, warned about, and recovered by mounting a replacement slot.
    pub fn use_state<S: Clone + 'static>(&mut self, init: impl FnOnce() -> S) -> (S, SetState<S>) {
        let index = self.cursor;
        self.cursor += 1;

        let slot = if !self.chain.has_rendered {
            self.mount_slot(index, init())
        } else {
            match self.existing_slot::<S>(index) {
                Ok(slot) => slot,
                Err(err) => {
                    log::warn!(
                        "use_state: {err}; mounting a replacement slot. If this comes \
                         from conditional composition, make the hook call unconditional."
                    );
                    self.mount_slot(index, init())
                }
            }
        };

        let value = slot.reduce_pending();
        (value, SetState::new(slot.queue.clone(), self.signal.clone()))
    }

    fn mount_slot<S: Clone + 'static>(&mut self, index: usize, initial: S) -> Rc<StateSlot<S>> {
        let slot = Rc::new(StateSlot::new(initial));
        if index < self.chain.slots.len() {
            self.chain.slots[index] = Box::new(slot.clone());
        } else {
            self.chain.slots.push(Box::new(slot.clone()));
        }
        slot
    }

    fn existing_slot<S: 'static>(&self, index: usize) -> Result<Rc<StateSlot<S>>, HookError> {
        let len = self.chain.slots.len();
        let slot = self
            .chain
            .slots
            .get(index)
            .ok_or(HookError::ChainOverrun { index, len })?;
        slot.downcast_ref::<Rc<StateSlot<S>>>()
            .cloned()
            .ok_or(HookError::SlotTypeMismatch {
                index,
                expected: std::any::type_name::<S>(),
            })
    }
}
