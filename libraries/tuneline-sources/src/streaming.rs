//! Online streaming backend

use crate::SourceKind;
use std::sync::Arc;
use tuneline_core::{ControlEvent, ControlOp, EventSink, Result, TracingSink};

/// Native control surface of an online streaming service
#[cfg_attr(test, mockall::automock)]
pub trait StreamingBackend: Send + Sync {
    fn start_streaming(&self) -> Result<()>;

    fn end_streaming(&self) -> Result<()>;

    fn pause_streaming(&self) -> Result<()>;
}

/// Reference streaming backend
pub struct OnlineStreamingService {
    sink: Arc<dyn EventSink>,
}

impl OnlineStreamingService {
    pub fn new() -> Self {
        Self::with_sink(TracingSink::shared())
    }

    pub fn with_sink(sink: Arc<dyn EventSink>) -> Self {
        Self { sink }
    }

    fn report(&self, operation: ControlOp, message: &'static str) -> Result<()> {
        self.sink.emit(ControlEvent::backend_with_message(
            SourceKind::Streaming.label(),
            operation,
            message,
        ));
        Ok(())
    }
}

impl Default for OnlineStreamingService {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingBackend for OnlineStreamingService {
    fn start_streaming(&self) -> Result<()> {
        self.report(ControlOp::Start, "Starting online streaming service.")
    }

    fn end_streaming(&self) -> Result<()> {
        self.report(ControlOp::Stop, "Ending online streaming service.")
    }

    fn pause_streaming(&self) -> Result<()> {
        self.report(ControlOp::Pause, "Pausing online streaming service.")
    }
}

source_adapter! {
    /// Exposes a [`StreamingBackend`] through the control contract
    ///
    /// `start` → `start_streaming`, `stop` → `end_streaming`,
    /// `pause` → `pause_streaming`.
    pub struct StreamingAdapter for StreamingBackend (SourceKind::Streaming) {
        start => start_streaming,
        stop => end_streaming,
        pause => pause_streaming,
    }
}
