// ── Sound domain types ──

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SoundDirection {
    Input,
    Output,
}

/// An audio source or sink with its current level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundDevice {
    pub name: String,
    pub description: String,
    pub direction: SoundDirection,
    pub properties: BTreeMap<String, String>,
    /// Level 0-100, `None` until read from the backend.
    pub volume: Option<u8>,
    pub is_muted: bool,
}

impl SoundDevice {
    /// Record a volume reading; a level of zero counts as muted.
    pub fn with_volume(mut self, volume: u8) -> Self {
        self.volume = Some(volume);
        self.is_muted = volume == 0;
        self
    }

    pub fn label(&self) -> &str {
        if self.description.is_empty() {
            &self.name
        } else {
            &self.description
        }
    }
}
