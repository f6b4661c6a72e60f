//! Tuneline - Source Adapters
//!
//! Exposes heterogeneous playback backends through the uniform
//! [`PlaybackControl`](tuneline_core::PlaybackControl) contract.
//!
//! Each backend kind keeps its own native method names:
//!
//! | Backend trait        | start               | stop               | pause               |
//! |----------------------|---------------------|--------------------|---------------------|
//! | [`LocalFileBackend`] | `play_local_file`   | `stop_local_file`  | `pause_local_file`  |
//! | [`StreamingBackend`] | `start_streaming`   | `end_streaming`    | `pause_streaming`   |
//! | [`RadioBackend`]     | `start_radio`       | `stop_radio`       | `pause_radio`       |
//!
//! Adapters borrow their backend and translate names, nothing more: every
//! backend error is returned exactly as the backend produced it. Backends
//! outside this crate can be reached through [`MappedAdapter`] without any
//! change to players or decorators.
//!
//! # Example
//!
//! ```rust
//! use tuneline_core::{EventJournal, PlaybackControl};
//! use tuneline_sources::{RadioAdapter, RadioStation};
//!
//! let journal = EventJournal::new();
//! let station = RadioStation::with_sink(journal.shared());
//!
//! let mut adapter = RadioAdapter::new(&station);
//! adapter.start().unwrap();
//!
//! assert_eq!(journal.messages(), vec!["Starting radio station."]);
//! ```
//!
//! A backend must provide every native operation before an adapter will take
//! it. A tuner without `pause_radio` does not compile:
//!
//! ```compile_fail,E0046
//! use tuneline_core::Result;
//! use tuneline_sources::{RadioAdapter, RadioBackend};
//!
//! struct Crackle;
//!
//! impl RadioBackend for Crackle {
//!     fn start_radio(&self) -> Result<()> { Ok(()) }
//!     fn stop_radio(&self) -> Result<()> { Ok(()) }
//! }
//!
//! let adapter = RadioAdapter::new(&Crackle);
//! ```

#![forbid(unsafe_code)]

#[macro_use]
mod adapter;
mod kind;
mod local_file;
mod mapped;
mod radio;
mod streaming;

pub use kind::SourceKind;
pub use local_file::{LocalFileAdapter, LocalFileBackend, LocalFilePlayer};
pub use mapped::{MappedAdapter, SourceMapping};
pub use radio::{RadioAdapter, RadioBackend, RadioStation};
pub use streaming::{OnlineStreamingService, StreamingAdapter, StreamingBackend};
