//! Caller-facing player handle

use crate::bridge::ControlBridge;
use tuneline_core::{ControlOp, Result};

/// Thin named handle over one control bridge
///
/// The wiring is fixed at construction; there is no way to swap the bridge
/// afterwards. The player keeps no playback state and does no error
/// handling: `play`, `stop` and `pause` forward to the bridge's `start`,
/// `stop` and `pause` and return their results unchanged.
///
/// # Concurrency
///
/// Calls take `&mut self`, so one caller drives a player at a time. The
/// player imposes no ordering between callers; to share one across threads,
/// wrap it in a `Mutex` (any stronger serialization is the backend's job).
///
/// Without a type argument, `Player` holds a boxed bridge, so players over
/// different chains share one type.
pub struct Player<B: ControlBridge = Box<dyn ControlBridge>> {
    bridge: B,
}

impl<B: ControlBridge> Player<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }

    /// Start playback through the bridge
    pub fn play(&mut self) -> Result<()> {
        self.forward(ControlOp::Start)
    }

    pub fn stop(&mut self) -> Result<()> {
        self.forward(ControlOp::Stop)
    }

    pub fn pause(&mut self) -> Result<()> {
        self.forward(ControlOp::Pause)
    }

    /// Read-only view of the wired bridge
    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    fn forward(&mut self, op: ControlOp) -> Result<()> {
        tracing::debug!(operation = %op, "player forwarding");
        let result = self.bridge.perform(op);
        if let Err(err) = &result {
            tracing::warn!(operation = %op, error = %err, "control call failed");
        }
        result
    }
}
