//! Local file backend

use crate::SourceKind;
use std::sync::Arc;
use tuneline_core::{ControlEvent, ControlOp, EventSink, Result, TracingSink};

/// Native control surface of a local file player
#[cfg_attr(test, mockall::automock)]
pub trait LocalFileBackend: Send + Sync {
    fn play_local_file(&self) -> Result<()>;

    fn stop_local_file(&self) -> Result<()>;

    fn pause_local_file(&self) -> Result<()>;
}

/// Reference local file backend
///
/// Reports each call as a [`ControlEvent::Backend`]; decoding is out of scope.
pub struct LocalFilePlayer {
    sink: Arc<dyn EventSink>,
}

impl LocalFilePlayer {
    /// Create a player that logs through `tracing`
    pub fn new() -> Self {
        Self::with_sink(TracingSink::shared())
    }

    /// Create a player reporting to the given sink
    pub fn with_sink(sink: Arc<dyn EventSink>) -> Self {
        Self { sink }
    }

    fn report(&self, operation: ControlOp, message: &'static str) -> Result<()> {
        self.sink.emit(ControlEvent::backend_with_message(
            SourceKind::LocalFile.label(),
            operation,
            message,
        ));
        Ok(())
    }
}

impl Default for LocalFilePlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalFileBackend for LocalFilePlayer {
    fn play_local_file(&self) -> Result<()> {
        self.report(ControlOp::Start, "Playing music from a local file.")
    }

    fn stop_local_file(&self) -> Result<()> {
        self.report(ControlOp::Stop, "Stopping music from the local file.")
    }

    fn pause_local_file(&self) -> Result<()> {
        self.report(ControlOp::Pause, "Pausing music from the local file.")
    }
}

source_adapter! {
    /// Exposes a [`LocalFileBackend`] through the control contract
    ///
    /// `start` → `play_local_file`, `stop` → `stop_local_file`,
    /// `pause` → `pause_local_file`.
    pub struct LocalFileAdapter for LocalFileBackend (SourceKind::LocalFile) {
        start => play_local_file,
        stop => stop_local_file,
        pause => pause_local_file,
    }
}
