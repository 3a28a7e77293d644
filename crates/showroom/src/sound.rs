//! UI sound effects.
//!
//! [`SoundBank`] owns the named clips and the one-time audio arming flag.
//! It does not touch any audio device: due plays come out of
//! [`SoundBank::advance`] as [`PlaySfx`] values which the plugin forwards as
//! [`PlaySfxEvent`]s for the app's playback system.

use std::collections::BTreeMap;

use bevy::log::{debug, info};
use bevy::prelude::Event;
use serde::{Deserialize, Serialize};

/// Clip played when the pointer enters a navigation item.
pub const SOUND_HOVER: &str = "hover";
/// Clip played when a navigation item is clicked.
pub const SOUND_CLICK: &str = "click";
/// Clip played when a new heading slides in.
pub const SOUND_TEXT_CHANGE: &str = "textChange";

/// Volume used by [`SoundBank::add_sound`] callers that don't care.
pub const DEFAULT_VOLUME: f32 = 0.3;

/// A named audio clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundClip {
    /// Asset path relative to the asset root.
    pub path: String,
    /// Playback volume in `[0, 1]`.
    pub volume: f32,
}

impl SoundClip {
    pub fn new(path: impl Into<String>, volume: f32) -> Self {
        Self {
            path: path.into(),
            volume: volume.clamp(0.0, 1.0),
        }
    }
}

/// The three clips the page ships with.
pub fn default_clips() -> BTreeMap<String, SoundClip> {
    let mut clips = BTreeMap::new();
    clips.insert(
        SOUND_HOVER.to_string(),
        SoundClip::new("sounds/click-reverb.wav", 0.15),
    );
    clips.insert(
        SOUND_CLICK.to_string(),
        SoundClip::new("sounds/shutter-fx.wav", DEFAULT_VOLUME),
    );
    clips.insert(
        SOUND_TEXT_CHANGE.to_string(),
        SoundClip::new("sounds/whoosh-fx.wav", DEFAULT_VOLUME),
    );
    clips
}

/// A clip that is due to start playing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaySfx {
    pub name: String,
    pub path: String,
    pub volume: f32,
}

/// Event consumed by the audio playback system.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PlaySfxEvent(pub PlaySfx);

/// Plays short named clips once the user has interacted with the page.
pub trait SoundPlayer: Send + Sync {
    /// Arm audio playback. Idempotent.
    fn enable(&mut self);

    fn is_enabled(&self) -> bool;

    /// Queue `name` to play after `delay_ms`. Ignored until enabled.
    fn play(&mut self, name: &str, delay_ms: u32);
}

#[derive(Debug, Clone)]
struct PendingPlay {
    remaining: f32,
    name: String,
}

#[derive(Debug, Clone)]
pub struct SoundBank {
    clips: BTreeMap<String, SoundClip>,
    enabled: bool,
    pending: Vec<PendingPlay>,
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::new(default_clips())
    }
}

impl SoundBank {
    pub fn new(clips: BTreeMap<String, SoundClip>) -> Self {
        Self {
            clips,
            enabled: false,
            pending: Vec::new(),
        }
    }

    /// Register another clip, replacing any clip with the same name.
    pub fn add_sound(&mut self, name: impl Into<String>, path: impl Into<String>, volume: f32) {
        self.clips
            .insert(name.into(), SoundClip::new(path, volume));
    }

    pub fn clip(&self, name: &str) -> Option<&SoundClip> {
        self.clips.get(name)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Advance the delay clock and return clips that are due, in the order
    /// they were queued.
    pub fn advance(&mut self, dt: f32) -> Vec<PlaySfx> {
        let mut due = Vec::new();
        let mut keep = Vec::with_capacity(self.pending.len());
        for mut play in self.pending.drain(..) {
            play.remaining -= dt.max(0.0);
            if play.remaining <= 0.0 {
                if let Some(clip) = self.clips.get(&play.name) {
                    due.push(PlaySfx {
                        name: play.name,
                        path: clip.path.clone(),
                        volume: clip.volume,
                    });
                }
            } else {
                keep.push(play);
            }
        }
        self.pending = keep;
        due
    }
}

impl SoundPlayer for SoundBank {
    fn enable(&mut self) {
        if !self.enabled {
            self.enabled = true;
            info!("Audio enabled");
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn play(&mut self, name: &str, delay_ms: u32) {
        if !self.enabled {
            return;
        }
        if !self.clips.contains_key(name) {
            debug!("Sound '{}' is not registered", name);
            return;
        }
        self.pending.push(PendingPlay {
            remaining: delay_ms as f32 / 1000.0,
            name: name.to_string(),
        });
    }
}
