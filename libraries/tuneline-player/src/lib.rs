//! Tuneline - Player
//!
//! The caller-facing end of a playback-control pipeline.
//!
//! A [`Player`] is wired once, at construction, to a single
//! [`ControlBridge`] value: a bare source adapter or the head of a decorator
//! chain. It never names a concrete backend or adapter type and forwards
//! every call verbatim.
//!
//! # Architecture
//!
//! ```text
//! Player::play()  ──► bridge.start()
//! Player::stop()  ──► bridge.stop()
//! Player::pause() ──► bridge.pause()
//! ```
//!
//! # Example: Equalizer over a local file
//!
//! ```rust
//! use tuneline_core::EventJournal;
//! use tuneline_effects::{Enhancement, Equalizer};
//! use tuneline_player::Player;
//! use tuneline_sources::{LocalFileAdapter, LocalFilePlayer};
//!
//! let journal = EventJournal::new();
//! let file = LocalFilePlayer::with_sink(journal.shared());
//!
//! let mut player = Player::new(
//!     Equalizer::with_sink(journal.shared()).wrap(LocalFileAdapter::new(&file)),
//! );
//! player.play().unwrap();
//!
//! assert_eq!(
//!     journal.messages(),
//!     vec!["Playing music from a local file.", "Applying equalizer settings."]
//! );
//! ```
//!
//! # Structural conformance
//!
//! Only values implementing all three contract operations can be wired. A
//! full implementation is accepted:
//!
//! ```rust
//! use tuneline_core::{PlaybackControl, Result};
//! use tuneline_player::Player;
//!
//! struct FullDeck;
//!
//! impl PlaybackControl for FullDeck {
//!     fn start(&mut self) -> Result<()> { Ok(()) }
//!     fn stop(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//! }
//!
//! let mut player = Player::new(FullDeck);
//! player.pause().unwrap();
//! ```
//!
//! Leaving out `pause` is a compile error in the impl itself, so the type
//! never becomes a bridge:
//!
//! ```compile_fail,E0046
//! use tuneline_core::{PlaybackControl, Result};
//! use tuneline_player::Player;
//!
//! struct HalfDeck;
//!
//! impl PlaybackControl for HalfDeck {
//!     fn start(&mut self) -> Result<()> { Ok(()) }
//!     fn stop(&mut self) -> Result<()> { Ok(()) }
//! }
//!
//! let mut player = Player::new(HalfDeck);
//! player.play().unwrap();
//! ```
//!
//! Matching inherent methods are not enough; the contract must be
//! implemented:
//!
//! ```compile_fail,E0277
//! use tuneline_core::Result;
//! use tuneline_player::Player;
//!
//! struct LookAlike;
//!
//! impl LookAlike {
//!     fn start(&mut self) -> Result<()> { Ok(()) }
//!     fn stop(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//! }
//!
//! let player = Player::new(LookAlike);
//! ```

#![forbid(unsafe_code)]

mod bridge;
mod player;

pub use bridge::ControlBridge;
pub use player::Player;
