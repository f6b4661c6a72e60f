//! Equalizer enhancement

use crate::decorated::Enhancement;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tuneline_core::{ControlEvent, ControlOp, EventSink, Result, TracingSink};

/// Equalizer presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqualizerPreset {
    /// No tonal change
    #[default]
    Flat,
    /// Lifted low end
    BassBoost,
    /// Presence boost for voices
    Vocal,
    /// Lifted high end
    Treble,
}

impl EqualizerPreset {
    pub const ALL: [EqualizerPreset; 4] = [
        EqualizerPreset::Flat,
        EqualizerPreset::BassBoost,
        EqualizerPreset::Vocal,
        EqualizerPreset::Treble,
    ];

    /// Nominal band gains in dB as (low, mid, high)
    ///
    /// Descriptive only: the gains are logged when the effect fires. No
    /// samples pass through this pipeline, so no filter is applied.
    pub fn gains_db(&self) -> (f64, f64, f64) {
        match self {
            Self::Flat => (0.0, 0.0, 0.0),
            Self::BassBoost => (6.0, 0.0, -1.0),
            Self::Vocal => (-2.0, 4.0, 1.0),
            Self::Treble => (-1.0, 0.0, 5.0),
        }
    }

    /// Name as written in a chain config
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::BassBoost => "bass_boost",
            Self::Vocal => "vocal",
            Self::Treble => "treble",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }
}

/// Equalizer configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EqualizerSettings {
    pub preset: EqualizerPreset,
    /// Gain applied before the bands (-12 to +12 dB)
    pub preamp_db: f64,
}

impl EqualizerSettings {
    pub fn preset(preset: EqualizerPreset) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        crate::check_preamp("equalizer", self.preamp_db)
    }
}

/// Applies equalizer settings once playback has started
pub struct Equalizer {
    settings: EqualizerSettings,
    sink: Arc<dyn EventSink>,
}

impl Equalizer {
    /// Create an equalizer, rejecting invalid settings
    pub fn new(settings: EqualizerSettings, sink: Arc<dyn EventSink>) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings, sink })
    }

    /// Flat equalizer reporting to `sink`
    pub fn with_sink(sink: Arc<dyn EventSink>) -> Self {
        Self {
            settings: EqualizerSettings::default(),
            sink,
        }
    }

    pub fn settings(&self) -> &EqualizerSettings {
        &self.settings
    }
}

impl Default for Equalizer {
    fn default() -> Self {
        Self::with_sink(TracingSink::shared())
    }
}

impl Enhancement for Equalizer {
    fn name(&self) -> &'static str {
        "equalizer"
    }

    fn apply(&self) -> Result<()> {
        let (low, mid, high) = self.settings.preset.gains_db();
        tracing::debug!(
            preset = self.settings.preset.name(),
            preamp_db = self.settings.preamp_db,
            low,
            mid,
            high,
            "equalizer bands"
        );
        self.sink.emit(ControlEvent::enhancement(
            self.name(),
            ControlOp::Start,
            "Applying equalizer settings.",
        ));
        Ok(())
    }
}
