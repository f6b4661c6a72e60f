//! Decorator node and the enhancement trait it applies
//!
//! A [`Decorated`] node owns exactly one inner control value and one
//! [`Enhancement`]. Chains are built by wrapping, so they are acyclic and
//! single-owner by construction.

use tuneline_core::{ControlOp, PlaybackControl, Result};

/// Side effect layered onto a control path
///
/// `apply` runs after the inner `start()` succeeded. The stop/pause hooks
/// default to doing nothing, which makes `stop()` and `pause()` pure
/// delegation unless an enhancement overrides them.
pub trait Enhancement: Send {
    /// Short identifier used in events and logs
    fn name(&self) -> &'static str;

    /// Effect applied after a successful `start()`
    fn apply(&self) -> Result<()>;

    /// Effect applied after a successful `stop()`
    fn after_stop(&self) -> Result<()> {
        Ok(())
    }

    /// Effect applied after a successful `pause()`
    fn after_pause(&self) -> Result<()> {
        Ok(())
    }

    /// Wrap `inner` in a decorator node applying this enhancement
    fn wrap<C: PlaybackControl>(self, inner: C) -> Decorated<Self, C>
    where
        Self: Sized,
    {
        Decorated::new(self, inner)
    }
}

impl<E: Enhancement + ?Sized> Enhancement for Box<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn apply(&self) -> Result<()> {
        (**self).apply()
    }

    fn after_stop(&self) -> Result<()> {
        (**self).after_stop()
    }

    fn after_pause(&self) -> Result<()> {
        (**self).after_pause()
    }
}

/// One decorator node: an enhancement around an inner control value
pub struct Decorated<E, C> {
    enhancement: E,
    inner: C,
}

impl<E: Enhancement, C: PlaybackControl> Decorated<E, C> {
    pub fn new(enhancement: E, inner: C) -> Self {
        Self { enhancement, inner }
    }

    pub fn enhancement(&self) -> &E {
        &self.enhancement
    }

    /// The wrapped node
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap one layer, dropping the enhancement
    pub fn into_inner(self) -> C {
        self.inner
    }

    fn after(&self, op: ControlOp) -> Result<()> {
        tracing::debug!(enhancement = self.enhancement.name(), operation = %op, "inner succeeded");
        match op {
            ControlOp::Start => self.enhancement.apply(),
            ControlOp::Stop => self.enhancement.after_stop(),
            ControlOp::Pause => self.enhancement.after_pause(),
        }
    }
}

impl<E: Enhancement, C: PlaybackControl> PlaybackControl for Decorated<E, C> {
    fn start(&mut self) -> Result<()> {
        // Post-order: the effect never runs if delegation failed
        self.inner.start()?;
        self.after(ControlOp::Start)
    }

    fn stop(&mut self) -> Result<()> {
        self.inner.stop()?;
        self.after(ControlOp::Stop)
    }

    fn pause(&mut self) -> Result<()> {
        self.inner.pause()?;
        self.after(ControlOp::Pause)
    }
}
