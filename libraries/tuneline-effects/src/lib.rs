//! Tuneline - Playback Decorators
//!
//! Stackable behaviors wrapped around any
//! [`PlaybackControl`](tuneline_core::PlaybackControl) value.
//!
//! Available enhancements:
//! - **Equalizer**: applies an equalizer preset when playback starts
//! - **VolumeNormalizer**: adjusts volume toward a loudness target when playback starts
//!
//! # Effect ordering
//!
//! A decorator delegates first and applies its own effect afterwards. For
//! `Outer(Inner(Base))`, `start()` therefore produces Base's effect, then
//! Inner's, then Outer's: effects fire from the base outward. A failed
//! delegation returns the error unchanged and skips the effect.
//!
//! ```rust
//! use tuneline_core::{EventJournal, PlaybackControl};
//! use tuneline_effects::{DecoratorChain, Equalizer, VolumeNormalizer};
//! use tuneline_sources::{RadioAdapter, RadioStation};
//!
//! let journal = EventJournal::new();
//! let station = RadioStation::with_sink(journal.shared());
//!
//! let mut chain = DecoratorChain::over(RadioAdapter::new(&station))
//!     .with(Equalizer::with_sink(journal.shared()))
//!     .with(VolumeNormalizer::with_sink(journal.shared()))
//!     .build();
//!
//! chain.start().unwrap();
//! assert_eq!(
//!     journal.messages(),
//!     vec![
//!         "Starting radio station.",
//!         "Applying equalizer settings.",
//!         "Adjusting volume control.",
//!     ]
//! );
//! ```
//!
//! Only [`Enhancement`] values can be layered onto a chain:
//!
//! ```compile_fail,E0277
//! use tuneline_core::EventJournal;
//! use tuneline_effects::Decorated;
//! use tuneline_sources::{RadioAdapter, RadioStation};
//!
//! struct Loudness;
//!
//! let station = RadioStation::with_sink(EventJournal::new().shared());
//! let node = Decorated::new(Loudness, RadioAdapter::new(&station));
//! ```

#![forbid(unsafe_code)]

mod chain;
mod config;
mod decorated;
mod equalizer;
mod volume;

pub use chain::DecoratorChain;
pub use config::{ChainConfig, EnhancementConfig};
pub use decorated::{Decorated, Enhancement};
pub use equalizer::{Equalizer, EqualizerPreset, EqualizerSettings};
pub use volume::{NormalizationMode, NormalizationSettings, VolumeNormalizer};

/// ReplayGain 2.0 reference level
pub const REPLAYGAIN_REFERENCE_LUFS: f64 = -18.0;

/// EBU R128 broadcast reference level
pub const EBU_R128_BROADCAST_LUFS: f64 = -23.0;

/// Streaming platform reference level (Spotify, YouTube)
pub const EBU_R128_STREAMING_LUFS: f64 = -14.0;

/// Lowest accepted pre-amp
pub const MIN_PREAMP_DB: f64 = -12.0;

/// Highest accepted pre-amp
pub const MAX_PREAMP_DB: f64 = 12.0;

/// Reject a pre-amp outside [`MIN_PREAMP_DB`]..=[`MAX_PREAMP_DB`]
pub(crate) fn check_preamp(owner: &str, preamp_db: f64) -> tuneline_core::Result<()> {
    if preamp_db.is_finite() && (MIN_PREAMP_DB..=MAX_PREAMP_DB).contains(&preamp_db) {
        Ok(())
    } else {
        Err(tuneline_core::ControlError::invalid_settings(format!(
            "{owner} preamp {preamp_db} dB outside {MIN_PREAMP_DB}..={MAX_PREAMP_DB} dB"
        )))
    }
}
