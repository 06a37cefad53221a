use thiserror::Error;

/// Hook-order diagnostics.
///
/// These are recoverable: `use_state` logs them and mounts a replacement slot
/// instead of failing the render pass. A *consistent* ordering mistake (same
/// count, same types, swapped call sites) is not detectable and silently
/// cross-contaminates state; keeping the call order identical on every render
/// is the caller's obligation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HookError {
    #[error("hook slot {index} holds a different state type than {expected}")]
    SlotTypeMismatch { index: usize, expected: &'static str },

    #[error("hook call {index} ran past the end of a {len}-slot chain")]
    ChainOverrun { index: usize, len: usize },
}
