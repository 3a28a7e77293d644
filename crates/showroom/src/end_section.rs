//! Unpinning the fixed section as the closing section scrolls in.

use bevy::prelude::*;

use crate::config::{END_MAX_TRAVEL, END_TWEEN_DURATION, END_UNPIN_THRESHOLD};
use crate::easing::Easing;
use crate::engine::{Animation, Property, Target, TransitionEngine};

/// Whole-page scroll progress in `[0, 1]`.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PageProgress(pub f32);

/// Layout of the pinned container for a given end-region progress.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct EndSectionLayout {
    pub progress: f32,
    /// Side columns, hero and footer are blurred.
    pub blur: bool,
    /// Pinned container height, viewport-height units.
    pub height_vh: f32,
    pub header_y: f32,
    pub content_y: f32,
    pub footer_y: f32,
}

impl Default for EndSectionLayout {
    fn default() -> Self {
        Self::from_progress(0.0)
    }
}

impl EndSectionLayout {
    pub fn from_progress(progress: f32) -> Self {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        if progress <= END_UNPIN_THRESHOLD {
            return Self {
                progress,
                blur: false,
                height_vh: 100.0,
                header_y: 0.0,
                content_y: 0.0,
                footer_y: 0.0,
            };
        }

        let t = (progress - END_UNPIN_THRESHOLD) / (1.0 - END_UNPIN_THRESHOLD);
        let move_y = -t * END_MAX_TRAVEL;
        Self {
            progress,
            blur: true,
            height_vh: (100.0 - t * 100.0).max(0.0),
            header_y: move_y * 1.5,
            content_y: move_y,
            footer_y: move_y * 0.5,
        }
    }

    /// Tween the pinned container and its parts towards this layout.
    pub fn apply(&self, engine: &mut dyn TransitionEngine) {
        let tweens = [
            (Target::PinnedContainer, Property::HeightVh, self.height_vh),
            (Target::Header, Property::OffsetYPx, self.header_y),
            (Target::Body, Property::OffsetYPx, self.content_y),
            (Target::Footer, Property::OffsetYPx, self.footer_y),
        ];
        for (target, property, value) in tweens {
            engine.animate(
                Animation::to([target], property, value, END_TWEEN_DURATION)
                    .easing(Easing::Power1Out),
            );
        }
    }

    pub fn status_line(&self) -> String {
        format!(
            "End Section - Height: {:.1}vh, Progress: {:.2}",
            self.height_vh, self.progress
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{InstantEngine, PropertyKey};

    #[test]
    fn test_below_threshold_stays_pinned() {
        for p in [0.0, 0.05, 0.1] {
            let layout = EndSectionLayout::from_progress(p);
            assert!(!layout.blur);
            assert_eq!(layout.height_vh, 100.0);
            assert_eq!(layout.header_y, 0.0);
            assert_eq!(layout.footer_y, 0.0);
        }
    }

    #[test]
    fn test_halfway() {
        let layout = EndSectionLayout::from_progress(0.55);
        assert!(layout.blur);
        assert!((layout.height_vh - 50.0).abs() < 1e-3);
        assert!((layout.content_y + 100.0).abs() < 1e-3);
        assert!((layout.header_y + 150.0).abs() < 1e-3);
        assert!((layout.footer_y + 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_fully_scrolled() {
        let layout = EndSectionLayout::from_progress(1.0);
        assert_eq!(layout.height_vh, 0.0);
        assert!((layout.content_y + END_MAX_TRAVEL).abs() < 1e-3);
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(
            EndSectionLayout::from_progress(3.0),
            EndSectionLayout::from_progress(1.0)
        );
        assert_eq!(
            EndSectionLayout::from_progress(f32::NAN),
            EndSectionLayout::default()
        );
    }

    #[test]
    fn test_apply_drives_pinned_container() {
        let mut engine = InstantEngine::new();
        EndSectionLayout::from_progress(0.55).apply(&mut engine);
        let height = engine.value(PropertyKey::new(Target::PinnedContainer, Property::HeightVh));
        assert!((height - 50.0).abs() < 1e-3);
        let footer = engine.value(PropertyKey::new(Target::Footer, Property::OffsetYPx));
        assert!((footer + 50.0).abs() < 1e-3);

        EndSectionLayout::from_progress(0.0).apply(&mut engine);
        let height = engine.value(PropertyKey::new(Target::PinnedContainer, Property::HeightVh));
        assert_eq!(height, 100.0);
    }

    #[test]
    fn test_status_line() {
        let layout = EndSectionLayout::from_progress(0.55);
        assert_eq!(layout.status_line(), "End Section - Height: 50.0vh, Progress: 0.55");
    }
}
