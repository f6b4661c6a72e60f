//! Observable side effects of control calls
//!
//! Backends and decorators report what they did as [`ControlEvent`]s through
//! an [`EventSink`]. The default sink logs through `tracing`; tests use an
//! [`EventJournal`] to assert on the exact order of effects.

use crate::control::ControlOp;
use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A single observable effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// A backend performed one of its native operations
    Backend {
        /// Backend label (e.g. "radio")
        backend: &'static str,
        /// Contract operation that reached the backend
        operation: ControlOp,
        /// Human-readable description
        message: Cow<'static, str>,
    },

    /// A decorator applied its side effect
    Enhancement {
        /// Decorator name (e.g. "equalizer")
        name: &'static str,
        /// Contract operation the effect followed
        operation: ControlOp,
        /// Human-readable description
        message: String,
    },
}

impl ControlEvent {
    /// Backend event with a generic message
    pub fn backend(backend: &'static str, operation: ControlOp) -> Self {
        Self::Backend {
            backend,
            operation,
            message: Cow::Owned(format!("{backend}: {operation}")),
        }
    }

    /// Backend event with a fixed message
    pub fn backend_with_message(
        backend: &'static str,
        operation: ControlOp,
        message: &'static str,
    ) -> Self {
        Self::Backend {
            backend,
            operation,
            message: Cow::Borrowed(message),
        }
    }

    /// Decorator event
    pub fn enhancement(name: &'static str, operation: ControlOp, message: impl Into<String>) -> Self {
        Self::Enhancement {
            name,
            operation,
            message: message.into(),
        }
    }

    /// Backend label or decorator name
    pub fn origin(&self) -> &'static str {
        match self {
            Self::Backend { backend, .. } => backend,
            Self::Enhancement { name, .. } => name,
        }
    }

    /// Operation this effect belongs to
    pub fn operation(&self) -> ControlOp {
        match self {
            Self::Backend { operation, .. } | Self::Enhancement { operation, .. } => *operation,
        }
    }

    /// Human-readable description
    pub fn message(&self) -> &str {
        match self {
            Self::Backend { message, .. } => message,
            Self::Enhancement { message, .. } => message,
        }
    }

    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend { .. })
    }
}

impl fmt::Display for ControlEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Receiver of observable effects
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ControlEvent);
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn emit(&self, event: ControlEvent) {
        (**self).emit(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn emit(&self, event: ControlEvent) {
        (**self).emit(event);
    }
}

/// Sink that writes every effect to the `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Shared handle, as stored by backends and decorators
    pub fn shared() -> Arc<dyn EventSink> {
        Arc::new(Self)
    }
}

impl EventSink for TracingSink {
    fn emit(&self, event: ControlEvent) {
        match &event {
            ControlEvent::Backend { backend, operation, message } => {
                tracing::info!(backend = *backend, operation = %operation, "{}", message);
            }
            ControlEvent::Enhancement { name, operation, message } => {
                tracing::info!(enhancement = *name, operation = %operation, "{}", message);
            }
        }
    }
}

/// Recording sink
///
/// Clones share the same underlying log, so a journal can be handed to
/// several backends and decorators and inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct EventJournal {
    events: Arc<Mutex<Vec<ControlEvent>>>,
}

impl EventJournal {
    /// Create an empty journal
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle, as stored by backends and decorators
    pub fn shared(&self) -> Arc<dyn EventSink> {
        Arc::new(self.clone())
    }

    /// Snapshot of recorded events, oldest first
    pub fn events(&self) -> Vec<ControlEvent> {
        self.lock().clone()
    }

    /// Snapshot of recorded messages, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|e| e.message().to_string()).collect()
    }

    /// Snapshot of recorded origins, oldest first
    pub fn origins(&self) -> Vec<&'static str> {
        self.lock().iter().map(ControlEvent::origin).collect()
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all recorded events
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ControlEvent>> {
        // A panic while holding the lock cannot leave a Vec half-pushed
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventSink for EventJournal {
    fn emit(&self, event: ControlEvent) {
        tracing::trace!(origin = event.origin(), "journal: {}", event);
        self.lock().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_clones_share_the_log() {
        let journal = EventJournal::new();
        let handle = journal.clone();

        handle.emit(ControlEvent::backend("radio", ControlOp::Start));
        journal.emit(ControlEvent::enhancement("equalizer", ControlOp::Start, "eq"));

        assert_eq!(journal.len(), 2);
        assert_eq!(handle.origins(), vec!["radio", "equalizer"]);
    }

    #[test]
    fn shared_handle_records_into_journal() {
        let journal = EventJournal::new();
        let sink = journal.shared();
        sink.emit(ControlEvent::backend_with_message(
            "radio",
            ControlOp::Stop,
            "Stopping radio station.",
        ));

        assert_eq!(journal.messages(), vec!["Stopping radio station."]);
    }

    #[test]
    fn clear_empties_journal() {
        let journal = EventJournal::new();
        journal.emit(ControlEvent::backend("file", ControlOp::Pause));
        assert!(!journal.is_empty());

        journal.clear();
        assert!(journal.is_empty());
    }

    #[test]
    fn event_accessors() {
        let event = ControlEvent::enhancement("volume-normalizer", ControlOp::Start, "Adjusting volume control.");
        assert_eq!(event.origin(), "volume-normalizer");
        assert_eq!(event.operation(), ControlOp::Start);
        assert!(!event.is_backend());
        assert_eq!(event.to_string(), "Adjusting volume control.");

        let generic = ControlEvent::backend("tape", ControlOp::Pause);
        assert_eq!(generic.message(), "tape: pause");
        assert!(generic.is_backend());
    }

    #[test]
    fn tracing_sink_accepts_events() {
        // No subscriber installed: emitting must still be a no-op rather than a panic
        let sink = TracingSink::shared();
        sink.emit(ControlEvent::backend("radio", ControlOp::Start));
        sink.emit(ControlEvent::enhancement("equalizer", ControlOp::Start, "eq"));
    }
}
