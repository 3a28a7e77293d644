//! Transition engine capability.
//!
//! The navigator never interpolates anything itself: it describes property
//! changes as [`Animation`]s and hands them to a [`TransitionEngine`]. The
//! engine reports finished animations as named [`Completion`] values from
//! [`TransitionEngine::advance`], which the caller routes back to the
//! navigator.
//!
//! Two implementations exist: [`Timeline`](crate::timeline::Timeline)
//! interpolates on a virtual clock, [`InstantEngine`] jumps straight to the
//! end values (the no-animation fallback).

use std::collections::HashMap;

use crate::easing::Easing;

// =============================================================================
// Targets and properties
// =============================================================================

/// Something on the page that can be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// A section's heading block.
    Content(usize),
    /// A section's full-screen background.
    Background(usize),
    /// One split word of a section heading.
    Word { section: usize, word: usize },
    LeftNav(usize),
    RightNav(usize),
    ProgressFill,
    LoadingOverlay,
    LoadingText,
    CarBody,
    FrontLamp,
    RearLamp,
    /// The pinned container that shrinks as the end section scrolls in.
    PinnedContainer,
    Header,
    Body,
    Footer,
}

/// An animatable property of a [`Target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    Opacity,
    /// 1.0 visible, 0.0 hidden.
    Visible,
    /// 1.0 when the target carries the active highlight.
    Active,
    /// Horizontal offset in percent of the target's own width.
    OffsetXPercent,
    /// Vertical offset in percent of the target's own height.
    OffsetYPercent,
    /// Vertical offset in logical pixels.
    OffsetYPx,
    /// Clip inset from the top edge, percent.
    ClipTop,
    /// Clip inset from the bottom edge, percent.
    ClipBottom,
    /// Width in percent of the parent.
    WidthPercent,
    /// Height in viewport-height units.
    HeightVh,
}

impl Property {
    /// Value a property has before anything sets it.
    pub fn default_value(self) -> f32 {
        match self {
            Property::Opacity | Property::Visible => 1.0,
            Property::HeightVh => 100.0,
            Property::Active
            | Property::OffsetXPercent
            | Property::OffsetYPercent
            | Property::OffsetYPx
            | Property::ClipTop
            | Property::ClipBottom
            | Property::WidthPercent => 0.0,
        }
    }
}

/// A single animatable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyKey {
    pub target: Target,
    pub property: Property,
}

impl PropertyKey {
    pub const fn new(target: Target, property: Property) -> Self {
        Self { target, property }
    }
}

// =============================================================================
// Completions
// =============================================================================

/// Named completion signals that replace nested animation callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Completion {
    /// The outgoing heading words of `section` finished sliding out.
    TextExited { section: usize },
    /// The outgoing background of `section` finished fading. This is the
    /// authoritative end of a section transition.
    BackgroundFadedOut { section: usize },
    /// A programmatic scroll-assist animation reached its target.
    ScrollSettled,
}

// =============================================================================
// Animation description
// =============================================================================

/// One property tween applied to one or more targets.
///
/// With several targets and a non-zero `stagger`, target `i` starts
/// `i * stagger` seconds later; a negative stagger runs the targets in
/// reverse order. `on_complete` fires once, after the last target finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub targets: Vec<Target>,
    pub property: Property,
    pub from: Option<f32>,
    pub to: f32,
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
    pub stagger: f32,
    pub on_complete: Option<Completion>,
}

impl Animation {
    pub fn to(targets: impl Into<Vec<Target>>, property: Property, to: f32, duration: f32) -> Self {
        Self {
            targets: targets.into(),
            property,
            from: None,
            to,
            duration,
            delay: 0.0,
            easing: Easing::Linear,
            stagger: 0.0,
            on_complete: None,
        }
    }

    pub fn from_value(mut self, from: f32) -> Self {
        self.from = Some(from);
        self
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn on_complete(mut self, completion: Completion) -> Self {
        self.on_complete = Some(completion);
        self
    }

    /// Start offset of the target at `index`, accounting for stagger
    /// direction.
    pub fn stagger_offset(&self, index: usize) -> f32 {
        let n = self.targets.len();
        if n == 0 || self.stagger == 0.0 {
            return 0.0;
        }
        if self.stagger > 0.0 {
            index as f32 * self.stagger
        } else {
            (n - 1 - index) as f32 * -self.stagger
        }
    }

    /// Time from scheduling until the last target finishes.
    pub fn total_duration(&self) -> f32 {
        let spread = self.targets.len().saturating_sub(1) as f32 * self.stagger.abs();
        self.delay + spread + self.duration.max(0.0)
    }
}

// =============================================================================
// Capability trait
// =============================================================================

/// Performs interpolated property changes.
pub trait TransitionEngine: Send + Sync {
    /// Human-readable backend name for logs.
    fn name(&self) -> &'static str;

    /// Set a property immediately.
    fn set(&mut self, key: PropertyKey, value: f32);

    /// Schedule an animation.
    fn animate(&mut self, animation: Animation);

    /// Current value of a property, or its default if never touched.
    fn value(&self, key: PropertyKey) -> f32;

    /// Advance the engine's clock by `dt` seconds and return every
    /// completion that fired, in firing order.
    fn advance(&mut self, dt: f32) -> Vec<Completion>;

    /// `true` when no animation is scheduled or running.
    fn is_idle(&self) -> bool;

    /// Set the same property on several targets.
    fn set_all(&mut self, targets: &[Target], property: Property, value: f32) {
        for &target in targets {
            self.set(PropertyKey::new(target, property), value);
        }
    }
}

// =============================================================================
// Fallback implementation
// =============================================================================

/// Applies end values immediately and reports completions on the next
/// [`advance`](TransitionEngine::advance).
#[derive(Debug, Default)]
pub struct InstantEngine {
    values: HashMap<PropertyKey, f32>,
    pending: Vec<Completion>,
}

impl InstantEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransitionEngine for InstantEngine {
    fn name(&self) -> &'static str {
        "instant"
    }

    fn set(&mut self, key: PropertyKey, value: f32) {
        self.values.insert(key, value);
    }

    fn animate(&mut self, animation: Animation) {
        for &target in &animation.targets {
            self.values
                .insert(PropertyKey::new(target, animation.property), animation.to);
        }
        if let Some(completion) = animation.on_complete {
            self.pending.push(completion);
        }
    }

    fn value(&self, key: PropertyKey) -> f32 {
        self.values
            .get(&key)
            .copied()
            .unwrap_or_else(|| key.property.default_value())
    }

    fn advance(&mut self, _dt: f32) -> Vec<Completion> {
        std::mem::take(&mut self.pending)
    }

    fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> Vec<Target> {
        (0..n).map(|word| Target::Word { section: 0, word }).collect()
    }

    #[test]
    fn test_positive_stagger_runs_in_order() {
        let anim = Animation::to(words(3), Property::Opacity, 1.0, 0.5).stagger(0.1);
        assert_eq!(anim.stagger_offset(0), 0.0);
        assert!((anim.stagger_offset(2) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_negative_stagger_runs_in_reverse() {
        let anim = Animation::to(words(3), Property::Opacity, 1.0, 0.5).stagger(-0.1);
        assert!((anim.stagger_offset(0) - 0.2).abs() < 1e-6);
        assert_eq!(anim.stagger_offset(2), 0.0);
    }

    #[test]
    fn test_total_duration_includes_delay_and_spread() {
        let anim = Animation::to(words(4), Property::Opacity, 1.0, 0.5)
            .delay(0.25)
            .stagger(-0.05);
        assert!((anim.total_duration() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_default_values() {
        assert_eq!(Property::Opacity.default_value(), 1.0);
        assert_eq!(Property::ClipTop.default_value(), 0.0);
        assert_eq!(Property::HeightVh.default_value(), 100.0);
    }

    #[test]
    fn test_instant_engine_jumps_to_end_values() {
        let mut engine = InstantEngine::new();
        engine.animate(
            Animation::to([Target::Background(2)], Property::Opacity, 0.0, 0.64)
                .on_complete(Completion::BackgroundFadedOut { section: 2 }),
        );
        let key = PropertyKey::new(Target::Background(2), Property::Opacity);
        assert_eq!(engine.value(key), 0.0);
        assert!(!engine.is_idle());
        assert_eq!(
            engine.advance(0.0),
            vec![Completion::BackgroundFadedOut { section: 2 }]
        );
        assert!(engine.is_idle());
        assert!(engine.advance(0.0).is_empty());
    }

    #[test]
    fn test_set_all() {
        let mut engine = InstantEngine::new();
        engine.set_all(&[Target::LeftNav(0), Target::LeftNav(1)], Property::Opacity, 0.3);
        assert_eq!(
            engine.value(PropertyKey::new(Target::LeftNav(1), Property::Opacity)),
            0.3
        );
    }
}
