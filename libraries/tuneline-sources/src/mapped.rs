//! Adapter for backend kinds defined outside this crate

use tuneline_core::{PlaybackControl, Result};

/// Mapping from the three contract operations to a backend's native calls
///
/// All three mappings are required fields, so an incomplete mapping cannot
/// be constructed.
pub struct SourceMapping<B: ?Sized> {
    pub start: fn(&B) -> Result<()>,
    pub stop: fn(&B) -> Result<()>,
    pub pause: fn(&B) -> Result<()>,
}

impl<B: ?Sized> Clone for SourceMapping<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized> Copy for SourceMapping<B> {}

/// Borrowing adapter driven by a [`SourceMapping`]
///
/// # Example
///
/// ```rust
/// use tuneline_core::{PlaybackControl, Result};
/// use tuneline_sources::{MappedAdapter, SourceMapping};
///
/// struct CassetteDeck;
///
/// impl CassetteDeck {
///     fn press_play(&self) -> Result<()> { Ok(()) }
///     fn press_stop(&self) -> Result<()> { Ok(()) }
///     fn press_pause(&self) -> Result<()> { Ok(()) }
/// }
///
/// let deck = CassetteDeck;
/// let mut adapter = MappedAdapter::new(
///     &deck,
///     "cassette",
///     SourceMapping {
///         start: CassetteDeck::press_play,
///         stop: CassetteDeck::press_stop,
///         pause: CassetteDeck::press_pause,
///     },
/// );
/// adapter.start().unwrap();
/// ```
pub struct MappedAdapter<'a, B: ?Sized> {
    backend: &'a B,
    label: &'static str,
    mapping: SourceMapping<B>,
}

impl<'a, B: ?Sized> MappedAdapter<'a, B> {
    pub fn new(backend: &'a B, label: &'static str, mapping: SourceMapping<B>) -> Self {
        Self {
            backend,
            label,
            mapping,
        }
    }

    pub fn backend(&self) -> &'a B {
        self.backend
    }

    /// Label used in logs
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<B: Sync + ?Sized> PlaybackControl for MappedAdapter<'_, B> {
    fn start(&mut self) -> Result<()> {
        tracing::debug!(backend = self.label, "start -> mapped");
        (self.mapping.start)(self.backend)
    }

    fn stop(&mut self) -> Result<()> {
        tracing::debug!(backend = self.label, "stop -> mapped");
        (self.mapping.stop)(self.backend)
    }

    fn pause(&mut self) -> Result<()> {
        tracing::debug!(backend = self.label, "pause -> mapped");
        (self.mapping.pause)(self.backend)
    }
}
