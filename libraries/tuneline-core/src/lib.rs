//! Tuneline Core
//!
//! The uniform control contract shared by every stage of a Tuneline
//! playback-control pipeline.
//!
//! # Architecture
//!
//! ```text
//! caller ──► Player ──► Decorator ─► … ─► Decorator ──► SourceAdapter ──► Backend
//!                   (outermost)        (innermost)
//! ```
//!
//! Every stage to the right of the caller implements [`PlaybackControl`].
//! This crate defines:
//! - **Contract**: [`PlaybackControl`] and [`ControlOp`]
//! - **Error Handling**: [`ControlError`] and [`Result`]
//! - **Observable effects**: [`ControlEvent`], [`EventSink`], [`TracingSink`], [`EventJournal`]
//!
//! # Example
//!
//! ```rust
//! use tuneline_core::{ControlEvent, ControlOp, EventJournal, EventSink, PlaybackControl, Result};
//!
//! struct Beeper {
//!     journal: EventJournal,
//! }
//!
//! impl PlaybackControl for Beeper {
//!     fn start(&mut self) -> Result<()> {
//!         self.journal.emit(ControlEvent::backend("beeper", ControlOp::Start));
//!         Ok(())
//!     }
//!
//!     fn stop(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn pause(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let journal = EventJournal::new();
//! let mut beeper = Beeper { journal: journal.clone() };
//! beeper.start().unwrap();
//! assert_eq!(journal.len(), 1);
//! ```

#![forbid(unsafe_code)]

mod control;
pub mod error;
pub mod events;

pub use control::{ControlOp, PlaybackControl};
pub use error::{ControlError, Result};
pub use events::{ControlEvent, EventJournal, EventSink, TracingSink};
