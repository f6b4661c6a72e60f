//! The three-operation control contract

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Uniform playback control contract
///
/// Implemented by source adapters, decorator nodes, and anything a
/// `Player` can be wired to. All three operations are required: a type that
/// cannot provide one of them cannot implement the trait, so a partial
/// implementation never reaches a chain.
///
/// # Concurrency
///
/// Operations take `&mut self` and run synchronously to completion. The
/// pipeline adds no locking or ordering of its own; callers that share one
/// pipeline across threads must serialize access themselves (for example
/// behind a `Mutex`). Any "currently playing" state belongs to the backend.
pub trait PlaybackControl: Send {
    /// Begin (or resume) playback
    fn start(&mut self) -> Result<()>;

    /// Stop playback
    fn stop(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Dispatch by operation
    fn perform(&mut self, op: ControlOp) -> Result<()> {
        match op {
            ControlOp::Start => self.start(),
            ControlOp::Stop => self.stop(),
            ControlOp::Pause => self.pause(),
        }
    }
}

impl<T: PlaybackControl + ?Sized> PlaybackControl for Box<T> {
    fn start(&mut self) -> Result<()> {
        (**self).start()
    }

    fn stop(&mut self) -> Result<()> {
        (**self).stop()
    }

    fn pause(&mut self) -> Result<()> {
        (**self).pause()
    }
}

impl<T: PlaybackControl + ?Sized> PlaybackControl for &mut T {
    fn start(&mut self) -> Result<()> {
        (**self).start()
    }

    fn stop(&mut self) -> Result<()> {
        (**self).stop()
    }

    fn pause(&mut self) -> Result<()> {
        (**self).pause()
    }
}

/// One of the three contract operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlOp {
    /// `start()`
    Start,
    /// `stop()`
    Stop,
    /// `pause()`
    Pause,
}

impl ControlOp {
    /// All operations, in contract order
    pub const ALL: [ControlOp; 3] = [ControlOp::Start, ControlOp::Stop, ControlOp::Pause];

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Pause => "pause",
        }
    }
}

impl fmt::Display for ControlOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
