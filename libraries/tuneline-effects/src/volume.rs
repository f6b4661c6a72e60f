//! Volume normalization enhancement
//!
//! Adjusts output volume toward a loudness reference once playback has
//! started. The reference levels follow ReplayGain 2.0 and EBU R128.

use crate::decorated::Enhancement;
use crate::{EBU_R128_BROADCAST_LUFS, EBU_R128_STREAMING_LUFS, REPLAYGAIN_REFERENCE_LUFS};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tuneline_core::{ControlEvent, ControlOp, EventSink, Result, TracingSink};

/// Loudness reference to normalize toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// ReplayGain track mode (-18 LUFS)
    #[default]
    ReplayGainTrack,
    /// EBU R128 broadcast level (-23 LUFS)
    EbuR128Broadcast,
    /// EBU R128 streaming level (-14 LUFS)
    EbuR128Streaming,
}

impl NormalizationMode {
    pub const ALL: [NormalizationMode; 3] = [
        NormalizationMode::ReplayGainTrack,
        NormalizationMode::EbuR128Broadcast,
        NormalizationMode::EbuR128Streaming,
    ];

    /// Reference level in LUFS, reported alongside the volume event
    pub fn reference_lufs(&self) -> f64 {
        match self {
            Self::ReplayGainTrack => REPLAYGAIN_REFERENCE_LUFS,
            Self::EbuR128Broadcast => EBU_R128_BROADCAST_LUFS,
            Self::EbuR128Streaming => EBU_R128_STREAMING_LUFS,
        }
    }

    /// Name as written in a chain config
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReplayGainTrack => "replay_gain_track",
            Self::EbuR128Broadcast => "ebu_r128_broadcast",
            Self::EbuR128Streaming => "ebu_r128_streaming",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.name() == name)
    }
}

/// Volume normalization configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationSettings {
    pub mode: NormalizationMode,
    /// Offset added to the reference level (-12 to +12 dB)
    pub preamp_db: f64,
}

impl NormalizationSettings {
    pub fn mode(mode: NormalizationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Loudness target in LUFS
    ///
    /// Descriptive only: it is logged when the effect fires. No samples pass
    /// through this pipeline, so nothing is measured or gained here.
    pub fn target_lufs(&self) -> f64 {
        self.mode.reference_lufs() + self.preamp_db
    }

    pub fn validate(&self) -> Result<()> {
        crate::check_preamp("volume normalizer", self.preamp_db)
    }
}

/// Adjusts volume control once playback has started
pub struct VolumeNormalizer {
    settings: NormalizationSettings,
    sink: Arc<dyn EventSink>,
}

impl VolumeNormalizer {
    /// Create a normalizer, rejecting invalid settings
    pub fn new(settings: NormalizationSettings, sink: Arc<dyn EventSink>) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings, sink })
    }

    /// ReplayGain-track normalizer reporting to `sink`
    pub fn with_sink(sink: Arc<dyn EventSink>) -> Self {
        Self {
            settings: NormalizationSettings::default(),
            sink,
        }
    }

    pub fn settings(&self) -> &NormalizationSettings {
        &self.settings
    }
}

impl Default for VolumeNormalizer {
    fn default() -> Self {
        Self::with_sink(TracingSink::shared())
    }
}

impl Enhancement for VolumeNormalizer {
    fn name(&self) -> &'static str {
        "volume-normalizer"
    }

    fn apply(&self) -> Result<()> {
        tracing::debug!(
            mode = self.settings.mode.name(),
            target_lufs = self.settings.target_lufs(),
            "volume target"
        );
        self.sink.emit(ControlEvent::enhancement(
            self.name(),
            ControlOp::Start,
            "Adjusting volume control.",
        ));
        Ok(())
    }
}
