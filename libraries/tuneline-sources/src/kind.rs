//! Built-in backend kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend kinds shipped with this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Files on local storage
    LocalFile,
    /// Online streaming service
    Streaming,
    /// Radio tuner
    Radio,
}

impl SourceKind {
    /// Label used in events and logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::LocalFile => "local-file",
            Self::Streaming => "streaming",
            Self::Radio => "radio",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
