//! Declarative decorator stacks
//!
//! A [`ChainConfig`] lists enhancements innermost-first. The caller supplies
//! it (typically deserialized from its own settings) and wires it over a
//! base control with [`ChainConfig::build`]. Every entry is validated before
//! any node is created.

use crate::decorated::{Decorated, Enhancement};
use crate::equalizer::{Equalizer, EqualizerSettings};
use crate::volume::{NormalizationSettings, VolumeNormalizer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tuneline_core::{EventSink, PlaybackControl, Result};

/// One enhancement and its settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnhancementConfig {
    Equalizer(EqualizerSettings),
    VolumeNormalizer(NormalizationSettings),
}

impl EnhancementConfig {
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Equalizer(settings) => settings.validate(),
            Self::VolumeNormalizer(settings) => settings.validate(),
        }
    }

    /// Create the enhancement this entry describes
    pub fn instantiate(&self, sink: Arc<dyn EventSink>) -> Result<Box<dyn Enhancement>> {
        let enhancement: Box<dyn Enhancement> = match self {
            Self::Equalizer(settings) => Box::new(Equalizer::new(*settings, sink)?),
            Self::VolumeNormalizer(settings) => Box::new(VolumeNormalizer::new(*settings, sink)?),
        };
        Ok(enhancement)
    }
}

/// Ordered list of enhancements, innermost first
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(default)]
    pub enhancements: Vec<EnhancementConfig>,
}

impl ChainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an enhancement (it becomes the new outermost node)
    pub fn push(mut self, enhancement: EnhancementConfig) -> Self {
        self.enhancements.push(enhancement);
        self
    }

    pub fn len(&self) -> usize {
        self.enhancements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enhancements.is_empty()
    }

    /// Check every entry without building anything
    pub fn validate(&self) -> Result<()> {
        self.enhancements.iter().try_for_each(EnhancementConfig::validate)
    }

    /// Wire the configured enhancements over `base`
    ///
    /// Returns `InvalidSettings` for the first invalid entry; in that case
    /// `base` is dropped and no node is returned.
    pub fn build<'a, C>(&self, base: C, sink: &Arc<dyn EventSink>) -> Result<Box<dyn PlaybackControl + 'a>>
    where
        C: PlaybackControl + 'a,
    {
        let enhancements = self
            .enhancements
            .iter()
            .map(|entry| entry.instantiate(Arc::clone(sink)))
            .collect::<Result<Vec<_>>>()?;

        let mut head: Box<dyn PlaybackControl + 'a> = Box::new(base);
        for enhancement in enhancements {
            tracing::trace!(enhancement = enhancement.name(), "wrapping configured enhancement");
            head = Box::new(Decorated::new(enhancement, head));
        }
        Ok(head)
    }
}
