pub use crate::dispatch::{RenderSignal, SetState};
pub use crate::error::HookError;
pub use crate::hooks::{HookChain, Pass, StateSlot};
pub use crate::queue::{Action, UpdateQueue};
pub use crate::runtime::Instance;
