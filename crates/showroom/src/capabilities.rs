//! Optional page capabilities and their fallbacks.
//!
//! Each capability has a full implementation and a degraded one. The
//! choice is made once at startup by [`Backends::select`]; the rest of the
//! crate only sees the trait objects.

use bevy::log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::engine::{InstantEngine, TransitionEngine};
use crate::scroll::{InstantScroll, ScrollProvider, SmoothScroll};
use crate::section::PageLayout;
use crate::segmenter::{NoSegmenter, TextSegmenter, WordSegmenter};
use crate::timeline::Timeline;

/// Which optional capabilities are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// Interpolated transitions. Without it values jump to their targets.
    pub tweening: bool,
    /// Eased wheel scrolling and animated scroll assists.
    pub smooth_scroll: bool,
    /// Heading split into words for per-word reveals.
    pub text_split: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            tweening: true,
            smooth_scroll: true,
            text_split: true,
        }
    }
}

/// The selected capability implementations.
pub struct Backends {
    pub engine: Box<dyn TransitionEngine>,
    pub scroll: Box<dyn ScrollProvider>,
    pub segmenter: Box<dyn TextSegmenter>,
}

impl Backends {
    pub fn select(capabilities: Capabilities, layout: &PageLayout) -> Self {
        let engine: Box<dyn TransitionEngine> = if capabilities.tweening {
            Box::new(Timeline::new())
        } else {
            warn!("Tweening unavailable; transitions apply instantly");
            Box::new(InstantEngine::new())
        };

        let scroll: Box<dyn ScrollProvider> = if capabilities.smooth_scroll {
            Box::new(SmoothScroll::new(layout.max_offset()))
        } else {
            warn!("Smooth scrolling unavailable; using instant scrolling");
            Box::new(InstantScroll::new(layout.max_offset()))
        };

        let segmenter: Box<dyn TextSegmenter> = if capabilities.text_split {
            Box::new(WordSegmenter)
        } else {
            warn!("Text splitting unavailable; heading animations are skipped");
            Box::new(NoSegmenter)
        };

        info!(
            "Backends: engine={}, scroll={}, text={}",
            engine.name(),
            scroll.name(),
            segmenter.name()
        );
        Self {
            engine,
            scroll,
            segmenter,
        }
    }
}
