//! User-tunable page settings, loaded from JSON.

use std::collections::BTreeMap;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::capabilities::Capabilities;
use crate::error::ConfigError;
use crate::section::PageLayout;
use crate::sound::{default_clips, SoundClip};

/// Default seed for the loading counter's increments.
pub const DEFAULT_LOADING_SEED: u64 = 0x5eed_ca75;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowroomSettings {
    pub layout: PageLayout,
    pub capabilities: Capabilities,
    pub sounds: BTreeMap<String, SoundClip>,
    /// Whether the debug overlay starts visible. `H` toggles it at runtime.
    pub show_debug: bool,
    pub loading_seed: u64,
}

impl Default for ShowroomSettings {
    fn default() -> Self {
        Self {
            layout: PageLayout::default(),
            capabilities: Capabilities::default(),
            sounds: default_clips(),
            show_debug: false,
            loading_seed: DEFAULT_LOADING_SEED,
        }
    }
}

impl ShowroomSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
