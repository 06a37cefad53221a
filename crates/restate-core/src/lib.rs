//! # Positional state hooks
//!
//! Restate is the state-slot core of a hook-style UI runtime: a component is
//! just a function, and the values it needs to keep across re-invocations
//! live in slots attached positionally to a component [`Instance`]. There are
//! three pieces:
//!
//! - `Pass::use_state` — the state primitive; the Nth call in a render pass
//!   always resolves to the Nth persisted slot.
//! - [`SetState`] — a dispatcher bound to one slot's update queue.
//! - [`Instance`] — the per-component host that re-runs the function and
//!   replays the slots.
//!
//! ## Mount, update, dispatch
//!
//! The first render of an instance is its *mount* pass: every `use_state`
//! call allocates a slot. Every later pass is an *update* pass: the same
//! calls, in the same order, resolve to the already-allocated slots.
//! Dispatches queue reducer actions that are folded into the slot's state, in
//! dispatch order, the next time a pass reaches it:
//!
//! ```rust
//! use restate_core::prelude::*;
//!
//! let mut counter = Instance::new();
//! let component = |pass: &mut Pass<'_>| pass.use_state(|| 0);
//!
//! let (count, set_count) = counter.render(component);
//! assert_eq!(count, 0);
//!
//! set_count.dispatch(|n| n + 1);
//! set_count.dispatch(|n| n * 2);
//! assert!(counter.needs_render());
//!
//! let (count, _) = counter.render(component);
//! assert_eq!(count, 2); // (0 + 1) * 2
//! ```
//!
//! ## Several hooks per component
//!
//! Slots are resolved by call position, so one component can hold any number
//! of independently-typed hooks — as long as it calls `use_state` in the same
//! order on every render (no conditional hooks):
//!
//! ```rust
//! use restate_core::prelude::*;
//!
//! let mut instance = Instance::new();
//! let profile = |pass: &mut Pass<'_>| {
//!     let (count, set_count) = pass.use_state(|| 0);
//!     let (name, _set_name) = pass.use_state(|| "ada".to_string());
//!     (count, name, set_count)
//! };
//!
//! let (count, name, set_count) = instance.render(profile);
//! assert_eq!((count, name.as_str()), (0, "ada"));
//!
//! set_count.set(7);
//! let (count, name, _) = instance.render(profile);
//! assert_eq!((count, name.as_str()), (7, "ada"));
//! assert_eq!(instance.hook_count(), 2);
//! ```
//!
//! ## Driving renders
//!
//! The core never schedules anything itself. A dispatch marks the instance
//! dirty and (optionally) fires a waker; the embedder decides when to call
//! `render` again — poll with [`Instance::render_if_needed`] in a frame loop,
//! or install a waker with [`Instance::set_waker`]. Everything is
//! single-threaded and synchronous: a render pass runs to completion before
//! control returns.

pub mod dispatch;
pub mod error;
pub mod hooks;
pub mod prelude;
pub mod queue;
pub mod runtime;
pub mod tests;

pub use dispatch::*;
pub use error::*;
pub use hooks::*;
pub use prelude::*;
pub use queue::*;
pub use runtime::*;
