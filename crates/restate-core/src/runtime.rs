use std::rc::Rc;

use crate::dispatch::RenderSignal;
use crate::hooks::{HookChain, Pass};

/// One component instance: its persisted hook chain and its render signal.
///
/// `render` is the trigger seam. It rewinds the cursor to the chain head,
/// runs the component function synchronously, and flips the chain from mount
/// to update mode only after the first pass has actually completed. A pass is
/// one uninterrupted synchronous execution; re-entering `render` from inside
/// the component is impossible because the pass only borrows the instance.
pub struct Instance {
    chain: HookChain,
    signal: Rc<RenderSignal>,
}

impl Instance {
    pub fn new() -> Self {
        Self {
            chain: HookChain::default(),
            signal: Rc::new(RenderSignal::new()),
        }
    }

    /// Runs one render pass and returns whatever the component produced.
    ///
    /// Consumes the pending render request, if any; a dispatch issued while
    /// the component runs raises it again for the next pass.
    pub fn render<R>(&mut self, component: impl FnOnce(&mut Pass<'_>) -> R) -> R {
        self.signal.take();
        let mut pass = Pass::begin(&mut self.chain, self.signal.clone());
        let out = component(&mut pass);
        self.chain.mark_rendered();
        out
    }

    /// Whether a dispatch has requested a re-render since the last pass.
    pub fn needs_render(&self) -> bool {
        self.signal.is_dirty()
    }

    /// Renders only if a re-render was requested. Poll-style driver loop:
    ///
    /// `while let Some(out) = instance.render_if_needed(component) { … }`
    pub fn render_if_needed<R>(
        &mut self,
        component: impl FnOnce(&mut Pass<'_>) -> R,
    ) -> Option<R> {
        if self.needs_render() {
            Some(self.render(component))
        } else {
            None
        }
    }

    /// Installs a callback invoked on every dispatch, for embedders that want
    /// push notification instead of polling.
    pub fn set_waker(&self, f: impl Fn() + 'static) {
        self.signal.set_waker(f);
    }

    /// Number of hook slots allocated so far. Settles at the mount pass's
    /// call-site count and stays there.
    pub fn hook_count(&self) -> usize {
        self.chain.len()
    }

    pub fn has_rendered(&self) -> bool {
        self.chain.has_rendered()
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self::new()
    }
}
