//! Events the front-end sends into the showroom.
//!
//! [`PlaySfxEvent`](crate::sound::PlaySfxEvent) flows the other way and
//! lives next to the sound bank.

use bevy::prelude::*;

/// The user clicked a navigation item.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateRequest {
    pub index: usize,
}

/// Any click or key press. Arms audio playback.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserGesture;

/// The pointer entered a navigation item.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavHovered {
    pub index: usize,
}

/// Organic scroll input in logical pixels, positive is down the page.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ScrollInput {
    pub delta: f32,
}
