//! Integration tests for source adapters
//!
//! Drives the reference backends through their adapters as a caller would:
//! through the uniform contract only, with no knowledge of native names.

use std::sync::Once;
use tuneline_core::{ControlError, ControlOp, EventJournal, PlaybackControl, Result};
use tuneline_sources::{
    LocalFileAdapter, LocalFilePlayer, OnlineStreamingService, RadioAdapter, RadioBackend,
    RadioStation, StreamingAdapter,
};

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

// ===== Test Helpers =====

/// Radio that cannot find a signal
struct DeadAirRadio;

impl RadioBackend for DeadAirRadio {
    fn start_radio(&self) -> Result<()> {
        Err(ControlError::backend("radio", ControlOp::Start, "no signal"))
    }

    fn stop_radio(&self) -> Result<()> {
        Ok(())
    }

    fn pause_radio(&self) -> Result<()> {
        Err(ControlError::backend("radio", ControlOp::Pause, "no signal"))
    }
}

// ===== Tests =====

#[test]
fn heterogeneous_backends_share_one_contract() {
    init_logging();
    let journal = EventJournal::new();

    let file = LocalFilePlayer::with_sink(journal.shared());
    let stream = OnlineStreamingService::with_sink(journal.shared());
    let radio = RadioStation::with_sink(journal.shared());

    let mut controls: Vec<Box<dyn PlaybackControl + '_>> = vec![
        Box::new(LocalFileAdapter::new(&file)),
        Box::new(StreamingAdapter::new(&stream)),
        Box::new(RadioAdapter::new(&radio)),
    ];

    for control in &mut controls {
        control.start().unwrap();
    }

    assert_eq!(
        journal.messages(),
        vec![
            "Playing music from a local file.",
            "Starting online streaming service.",
            "Starting radio station.",
        ]
    );
    assert_eq!(journal.origins(), vec!["local-file", "streaming", "radio"]);
}

#[test]
fn every_operation_produces_exactly_one_backend_event() {
    init_logging();
    let journal = EventJournal::new();
    let stream = OnlineStreamingService::with_sink(journal.shared());
    let mut adapter = StreamingAdapter::new(&stream);

    for op in ControlOp::ALL {
        journal.clear();
        adapter.perform(op).unwrap();

        let events = journal.events();
        assert_eq!(events.len(), 1, "{op} should reach the backend once");
        assert_eq!(events[0].operation(), op);
        assert!(events[0].is_backend());
    }
}

#[test]
fn failing_backend_error_reaches_caller_verbatim() {
    init_logging();
    let radio = DeadAirRadio;
    let mut adapter = RadioAdapter::new(&radio);

    assert_eq!(
        adapter.start(),
        Err(ControlError::backend("radio", ControlOp::Start, "no signal"))
    );
    assert_eq!(adapter.stop(), Ok(()));
    assert!(adapter.pause().unwrap_err().is_backend_failure());
}

#[test]
fn adapter_does_not_own_backend() {
    let journal = EventJournal::new();
    let file = LocalFilePlayer::with_sink(journal.shared());

    {
        let mut adapter = LocalFileAdapter::new(&file);
        adapter.start().unwrap();
    }

    // Backend is still usable after the adapter is gone
    let mut again = LocalFileAdapter::new(&file);
    again.stop().unwrap();
    assert_eq!(journal.len(), 2);
}
