//! Virtual-clock tween scheduler.
//!
//! [`Timeline`] is the interpolating [`TransitionEngine`]. It owns its own
//! elapsed time; nothing moves until [`advance`](TransitionEngine::advance)
//! is called, which makes completion ordering fully deterministic in tests.
//!
//! Tweens start from whatever value the property has when their delay
//! elapses (unless an explicit `from` is given). Several tweens may drive
//! the same property at once; the most recently scheduled one wins.

use std::collections::HashMap;

use crate::easing::Easing;
use crate::engine::{Animation, Completion, PropertyKey, TransitionEngine};

#[derive(Debug, Clone)]
struct Tween {
    key: PropertyKey,
    from: Option<f32>,
    to: f32,
    start_at: f32,
    duration: f32,
    easing: Easing,
    group: Option<u64>,
}

#[derive(Debug, Clone, Copy)]
struct Group {
    remaining: usize,
    completion: Completion,
}

#[derive(Debug, Default)]
pub struct Timeline {
    elapsed: f32,
    values: HashMap<PropertyKey, f32>,
    tweens: Vec<Tween>,
    groups: HashMap<u64, Group>,
    next_group: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    fn current(&self, key: PropertyKey) -> f32 {
        self.values
            .get(&key)
            .copied()
            .unwrap_or_else(|| key.property.default_value())
    }
}

impl TransitionEngine for Timeline {
    fn name(&self) -> &'static str {
        "timeline"
    }

    fn set(&mut self, key: PropertyKey, value: f32) {
        self.values.insert(key, value);
    }

    fn animate(&mut self, animation: Animation) {
        if animation.targets.is_empty() {
            // Nothing to wait for; fire on the next advance.
            if let Some(completion) = animation.on_complete {
                let id = self.next_group;
                self.next_group += 1;
                self.groups.insert(
                    id,
                    Group {
                        remaining: 0,
                        completion,
                    },
                );
            }
            return;
        }

        let group = animation.on_complete.map(|completion| {
            let id = self.next_group;
            self.next_group += 1;
            self.groups.insert(
                id,
                Group {
                    remaining: animation.targets.len(),
                    completion,
                },
            );
            id
        });

        for (i, &target) in animation.targets.iter().enumerate() {
            self.tweens.push(Tween {
                key: PropertyKey::new(target, animation.property),
                from: animation.from,
                to: animation.to,
                start_at: self.elapsed + animation.delay.max(0.0) + animation.stagger_offset(i),
                duration: animation.duration.max(0.0),
                easing: animation.easing,
                group,
            });
        }
    }

    fn value(&self, key: PropertyKey) -> f32 {
        self.current(key)
    }

    fn advance(&mut self, dt: f32) -> Vec<Completion> {
        self.elapsed += dt.max(0.0);
        let now = self.elapsed;

        let mut completions = Vec::new();

        // Groups with no targets complete immediately.
        let mut empty: Vec<u64> = self
            .groups
            .iter()
            .filter(|(_, g)| g.remaining == 0)
            .map(|(&id, _)| id)
            .collect();
        empty.sort_unstable();
        for id in empty {
            if let Some(group) = self.groups.remove(&id) {
                completions.push(group.completion);
            }
        }

        let mut finished_groups = Vec::new();
        let mut i = 0;
        while i < self.tweens.len() {
            if now < self.tweens[i].start_at {
                i += 1;
                continue;
            }

            let key = self.tweens[i].key;
            let from = match self.tweens[i].from {
                Some(v) => v,
                None => {
                    let v = self.current(key);
                    self.tweens[i].from = Some(v);
                    v
                }
            };

            let tween = &self.tweens[i];
            let t = if tween.duration <= 0.0 {
                1.0
            } else {
                ((now - tween.start_at) / tween.duration).min(1.0)
            };
            let value = if t >= 1.0 {
                tween.to
            } else {
                from + (tween.to - from) * tween.easing.ease(t)
            };
            self.values.insert(key, value);

            if t >= 1.0 {
                let done = self.tweens.remove(i);
                if let Some(id) = done.group {
                    if let Some(group) = self.groups.get_mut(&id) {
                        group.remaining = group.remaining.saturating_sub(1);
                        if group.remaining == 0 {
                            finished_groups.push(id);
                        }
                    }
                }
            } else {
                i += 1;
            }
        }

        for id in finished_groups {
            if let Some(group) = self.groups.remove(&id) {
                completions.push(group.completion);
            }
        }
        completions
    }

    fn is_idle(&self) -> bool {
        self.tweens.is_empty() && self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Property, Target};

    fn opacity(target: Target) -> PropertyKey {
        PropertyKey::new(target, Property::Opacity)
    }

    #[test]
    fn test_nothing_moves_without_advance() {
        let mut timeline = Timeline::new();
        timeline.set(opacity(Target::Background(0)), 1.0);
        timeline.animate(Animation::to([Target::Background(0)], Property::Opacity, 0.0, 1.0));
        assert_eq!(timeline.value(opacity(Target::Background(0))), 1.0);
        assert!(!timeline.is_idle());
    }

    #[test]
    fn test_linear_interpolation() {
        let mut timeline = Timeline::new();
        timeline.set(opacity(Target::Background(0)), 0.0);
        timeline.animate(Animation::to([Target::Background(0)], Property::Opacity, 1.0, 1.0));
        timeline.advance(0.25);
        assert!((timeline.value(opacity(Target::Background(0))) - 0.25).abs() < 1e-5);
        timeline.advance(0.25);
        assert!((timeline.value(opacity(Target::Background(0))) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_completion_fires_once_at_end() {
        let mut timeline = Timeline::new();
        timeline.animate(
            Animation::to([Target::Background(3)], Property::Opacity, 0.0, 0.5)
                .on_complete(Completion::BackgroundFadedOut { section: 3 }),
        );
        assert!(timeline.advance(0.49).is_empty());
        assert_eq!(
            timeline.advance(0.02),
            vec![Completion::BackgroundFadedOut { section: 3 }]
        );
        assert!(timeline.advance(1.0).is_empty());
        assert!(timeline.is_idle());
        assert_eq!(timeline.value(opacity(Target::Background(3))), 0.0);
    }

    #[test]
    fn test_delay_postpones_start_and_captures_from_late() {
        let mut timeline = Timeline::new();
        let key = opacity(Target::Background(1));
        timeline.set(key, 1.0);
        timeline.animate(
            Animation::to([Target::Background(1)], Property::Opacity, 0.0, 1.0).delay(0.5),
        );
        timeline.advance(0.4);
        assert_eq!(timeline.value(key), 1.0);
        // Changed before the tween starts: the tween picks up the new value.
        timeline.set(key, 0.8);
        timeline.advance(0.1);
        assert!((timeline.value(key) - 0.8).abs() < 1e-5);
        timeline.advance(0.5);
        assert!((timeline.value(key) - 0.4).abs() < 1e-4);
    }

    #[test]
    fn test_staggered_group_completes_after_last_target() {
        let mut timeline = Timeline::new();
        let targets: Vec<Target> = (0..3).map(|word| Target::Word { section: 0, word }).collect();
        timeline.animate(
            Animation::to(targets, Property::OffsetYPercent, -100.0, 0.2)
                .stagger(0.1)
                .on_complete(Completion::TextExited { section: 0 }),
        );
        // First word finishes at 0.2, last at 0.4.
        assert!(timeline.advance(0.25).is_empty());
        let first = PropertyKey::new(Target::Word { section: 0, word: 0 }, Property::OffsetYPercent);
        assert_eq!(timeline.value(first), -100.0);
        assert!(timeline.advance(0.1).is_empty());
        assert_eq!(
            timeline.advance(0.1),
            vec![Completion::TextExited { section: 0 }]
        );
    }

    #[test]
    fn test_negative_stagger_starts_with_last_target() {
        let mut timeline = Timeline::new();
        let targets: Vec<Target> = (0..3).map(|word| Target::Word { section: 1, word }).collect();
        timeline.animate(Animation::to(targets, Property::Opacity, 0.0, 0.1).stagger(-0.1));
        timeline.advance(0.1);
        let last = opacity(Target::Word { section: 1, word: 2 });
        let first = opacity(Target::Word { section: 1, word: 0 });
        assert_eq!(timeline.value(last), 0.0);
        assert_eq!(timeline.value(first), 1.0);
    }

    #[test]
    fn test_explicit_from_value() {
        let mut timeline = Timeline::new();
        let key = PropertyKey::new(Target::CarBody, Property::OffsetXPercent);
        timeline.animate(
            Animation::to([Target::CarBody], Property::OffsetXPercent, 0.0, 1.0).from_value(160.0),
        );
        timeline.advance(0.0);
        assert_eq!(timeline.value(key), 160.0);
        timeline.advance(1.0);
        assert_eq!(timeline.value(key), 0.0);
    }

    #[test]
    fn test_later_tween_wins_on_same_property() {
        let mut timeline = Timeline::new();
        let key = opacity(Target::LeftNav(0));
        timeline.animate(Animation::to([Target::LeftNav(0)], Property::Opacity, 0.3, 1.0));
        timeline.animate(Animation::to([Target::LeftNav(0)], Property::Opacity, 1.0, 0.1));
        timeline.advance(0.1);
        // The first tween is still running but the second was applied after it.
        assert!((timeline.value(key) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_duration_applies_immediately() {
        let mut timeline = Timeline::new();
        let key = opacity(Target::Footer);
        timeline.animate(
            Animation::to([Target::Footer], Property::Opacity, 0.0, 0.0)
                .on_complete(Completion::ScrollSettled),
        );
        assert_eq!(timeline.advance(0.0), vec![Completion::ScrollSettled]);
        assert_eq!(timeline.value(key), 0.0);
    }

    #[test]
    fn test_empty_targets_still_complete() {
        let mut timeline = Timeline::new();
        timeline.animate(
            Animation::to(Vec::<Target>::new(), Property::Opacity, 0.0, 1.0)
                .on_complete(Completion::TextExited { section: 4 }),
        );
        assert_eq!(
            timeline.advance(0.0),
            vec![Completion::TextExited { section: 4 }]
        );
    }

    #[test]
    fn test_completions_fire_in_finish_order() {
        let mut timeline = Timeline::new();
        timeline.animate(
            Animation::to([Target::Background(0)], Property::Opacity, 0.0, 0.3)
                .on_complete(Completion::BackgroundFadedOut { section: 0 }),
        );
        timeline.animate(
            Animation::to([Target::Word { section: 0, word: 0 }], Property::Opacity, 0.0, 0.1)
                .on_complete(Completion::TextExited { section: 0 }),
        );
        let mut fired = Vec::new();
        for _ in 0..40 {
            fired.extend(timeline.advance(0.01));
        }
        assert_eq!(
            fired,
            vec![
                Completion::TextExited { section: 0 },
                Completion::BackgroundFadedOut { section: 0 },
            ]
        );
    }
}
