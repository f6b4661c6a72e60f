//! Radio tuner backend

use crate::SourceKind;
use std::sync::Arc;
use tuneline_core::{ControlEvent, ControlOp, EventSink, Result, TracingSink};

/// Native control surface of a radio tuner
#[cfg_attr(test, mockall::automock)]
pub trait RadioBackend: Send + Sync {
    /// Tune in and start receiving
    fn start_radio(&self) -> Result<()>;

    fn stop_radio(&self) -> Result<()>;

    fn pause_radio(&self) -> Result<()>;
}

/// Reference radio backend
pub struct RadioStation {
    sink: Arc<dyn EventSink>,
}

impl RadioStation {
    pub fn new() -> Self {
        Self::with_sink(TracingSink::shared())
    }

    pub fn with_sink(sink: Arc<dyn EventSink>) -> Self {
        Self { sink }
    }

    fn report(&self, operation: ControlOp, message: &'static str) -> Result<()> {
        self.sink.emit(ControlEvent::backend_with_message(
            SourceKind::Radio.label(),
            operation,
            message,
        ));
        Ok(())
    }
}

impl Default for RadioStation {
    fn default() -> Self {
        Self::new()
    }
}

impl RadioBackend for RadioStation {
    fn start_radio(&self) -> Result<()> {
        self.report(ControlOp::Start, "Starting radio station.")
    }

    fn stop_radio(&self) -> Result<()> {
        self.report(ControlOp::Stop, "Stopping radio station.")
    }

    fn pause_radio(&self) -> Result<()> {
        self.report(ControlOp::Pause, "Pausing radio station.")
    }
}

source_adapter! {
    /// Exposes a [`RadioBackend`] through the control contract
    pub struct RadioAdapter for RadioBackend (SourceKind::Radio) {
        start => start_radio,
        stop => stop_radio,
        pause => pause_radio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuneline_core::{ControlError, EventJournal, PlaybackControl};

    #[test]
    fn each_operation_calls_backend_once() {
        let mut backend = MockRadioBackend::new();
        backend.expect_start_radio().times(1).returning(|| Ok(()));
        backend.expect_stop_radio().times(1).returning(|| Ok(()));
        backend.expect_pause_radio().times(1).returning(|| Ok(()));

        let mut adapter = RadioAdapter::new(&backend);
        for op in ControlOp::ALL {
            adapter.perform(op).unwrap();
        }
    }

    #[test]
    fn pause_error_passes_through_unchanged() {
        let mut backend = MockRadioBackend::new();
        backend
            .expect_pause_radio()
            .times(1)
            .returning(|| Err(ControlError::backend("radio", ControlOp::Pause, "no signal")));

        let mut adapter = RadioAdapter::new(&backend);
        assert!(matches!(
            adapter.pause(),
            Err(ControlError::BackendFailure { ref reason, .. }) if reason == "no signal"
        ));
    }

    #[test]
    fn two_adapters_can_share_one_station() {
        let journal = EventJournal::new();
        let station = RadioStation::with_sink(journal.shared());

        let mut first = RadioAdapter::new(&station);
        let mut second = RadioAdapter::new(&station);
        first.start().unwrap();
        second.stop().unwrap();

        assert_eq!(
            journal.messages(),
            vec!["Starting radio station.", "Stopping radio station."]
        );
        assert!(std::ptr::eq(first.backend(), second.backend()));
    }
}
