//! Builder for stacks of decorators
//!
//! Each call to [`with`](DecoratorChain::with) wraps the current head, so the
//! most recently added enhancement is the outermost node. Because every node
//! delegates before applying its effect, effects fire in the order the
//! enhancements were added.

use crate::decorated::{Decorated, Enhancement};
use tuneline_core::PlaybackControl;

/// Chain under construction, headed by `C`
pub struct DecoratorChain<C> {
    head: C,
    depth: usize,
}

impl<C: PlaybackControl> DecoratorChain<C> {
    /// Start a chain over a base control (usually a source adapter)
    pub fn over(base: C) -> Self {
        Self {
            head: base,
            depth: 0,
        }
    }

    /// Wrap the current head in another decorator
    pub fn with<E: Enhancement>(self, enhancement: E) -> DecoratorChain<Decorated<E, C>> {
        tracing::trace!(enhancement = enhancement.name(), depth = self.depth + 1, "wrapping chain head");
        DecoratorChain {
            head: Decorated::new(enhancement, self.head),
            depth: self.depth + 1,
        }
    }

    /// Number of decorators above the base
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Finish, keeping the concrete head type
    pub fn into_head(self) -> C {
        self.head
    }

    /// Finish as a trait object
    pub fn build<'a>(self) -> Box<dyn PlaybackControl + 'a>
    where
        C: 'a,
    {
        Box::new(self.head)
    }
}
