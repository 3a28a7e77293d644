//! Section navigator: maps scroll progress to the active section and drives
//! one-section-at-a-time transitions.
//!
//! The navigator owns a [`NavigatorState`] and nothing else mutable. Every
//! side effect goes through the [`Collaborators`] passed into each call:
//! visual changes are scheduled on the [`TransitionEngine`], assisted
//! scrolls on the [`ScrollProvider`], sounds on the [`SoundPlayer`].
//! Finished animations come back as [`Completion`] values through
//! [`SectionNavigator::handle_completion`].
//!
//! State machine:
//!
//! ```text
//!   Idle --(accepted scroll step / navigate_to)--> Transitioning
//!   Transitioning --(BackgroundFadedOut)--> Idle
//! ```
//!
//! Requests that arrive while `Transitioning` (or while an assisted scroll
//! is running) are dropped. The next progress report after the flags clear
//! re-evaluates the target, so the page converges on the section under the
//! scroll position one step at a time.

use bevy::log::{debug, warn};

use crate::config::{
    BACKGROUND_FADE_DELAY, BACKGROUND_FADE_DURATION, BACKGROUND_HIDE_DURATION,
    DIRECTION_THRESHOLD, LAST_SECTION, NAVIGATE_DURATION, NAV_ACTIVE_OPACITY, NAV_FADE_DURATION,
    NAV_INACTIVE_OPACITY, PARALLAX_AMOUNT, SECTION_COUNT, SNAP_DURATION,
    TEXT_CHANGE_SOUND_DELAY_MS, TEXT_ENTER_STAGGER, TEXT_EXIT_DURATION, TEXT_EXIT_STAGGER,
    TRANSITION_DURATION,
};
use crate::easing::Easing;
use crate::engine::{Animation, Completion, Property, PropertyKey, Target, TransitionEngine};
use crate::scroll::{ScrollProvider, ScrollToOptions};
use crate::section::{
    progress_fill_percent, section_label, target_section, PageLayout, ScrollDirection,
};
use crate::segmenter::{SplitText, TextSegmenter};
use crate::sound::{SoundPlayer, SOUND_CLICK, SOUND_TEXT_CHANGE};

// =============================================================================
// State
// =============================================================================

/// Coarse navigator phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorPhase {
    Idle,
    Transitioning,
}

/// Mutable navigator state. Read-only outside this module.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigatorState {
    current_section: usize,
    is_animating: bool,
    is_snapping: bool,
    last_progress: f32,
    scroll_direction: ScrollDirection,
}

impl Default for NavigatorState {
    fn default() -> Self {
        Self {
            current_section: 0,
            is_animating: false,
            is_snapping: false,
            last_progress: 0.0,
            scroll_direction: ScrollDirection::None,
        }
    }
}

impl NavigatorState {
    pub fn current_section(&self) -> usize {
        self.current_section
    }

    /// A section transition is mid-flight.
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// An assisted scroll is mid-flight.
    pub fn is_snapping(&self) -> bool {
        self.is_snapping
    }

    pub fn last_progress(&self) -> f32 {
        self.last_progress
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.scroll_direction
    }

    pub fn phase(&self) -> NavigatorPhase {
        if self.is_animating {
            NavigatorPhase::Transitioning
        } else {
            NavigatorPhase::Idle
        }
    }
}

/// Everything the navigator talks to, borrowed for one call.
pub struct Collaborators<'a> {
    pub scroll: &'a mut dyn ScrollProvider,
    pub engine: &'a mut dyn TransitionEngine,
    pub sound: &'a mut dyn SoundPlayer,
}

// =============================================================================
// Navigator
// =============================================================================

#[derive(Debug, Clone)]
pub struct SectionNavigator {
    state: NavigatorState,
    positions: [f32; SECTION_COUNT],
    splits: Vec<Option<SplitText>>,
    debug_line: String,
}

impl SectionNavigator {
    /// Build a navigator from pre-split headings. `splits` is padded or
    /// truncated to [`SECTION_COUNT`] entries; `None` marks a heading whose
    /// text animation is skipped.
    pub fn new(layout: &PageLayout, mut splits: Vec<Option<SplitText>>) -> Self {
        splits.resize(SECTION_COUNT, None);
        Self {
            state: NavigatorState::default(),
            positions: layout.section_positions(),
            splits,
            debug_line: "Current Section: 0 (Initial)".to_string(),
        }
    }

    /// Split every heading with `segmenter`. Headings that fail to split
    /// are logged and keep working without a text animation.
    pub fn from_headings<'h>(
        layout: &PageLayout,
        headings: impl IntoIterator<Item = &'h str>,
        segmenter: &dyn TextSegmenter,
    ) -> Self {
        let splits = headings
            .into_iter()
            .take(SECTION_COUNT)
            .enumerate()
            .map(|(i, heading)| {
                let split = segmenter.split(heading);
                if split.is_none() {
                    warn!(
                        "Heading {} could not be split by '{}'; its text animation is skipped",
                        i,
                        segmenter.name()
                    );
                }
                split
            })
            .collect();
        Self::new(layout, splits)
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn current_section(&self) -> usize {
        self.state.current_section
    }

    pub fn split(&self, section: usize) -> Option<&SplitText> {
        self.splits.get(section).and_then(Option::as_ref)
    }

    /// Scroll offset at which `section` starts.
    pub fn section_position(&self, section: usize) -> f32 {
        self.positions[section.min(LAST_SECTION)]
    }

    /// Two-digit label of the current section (`"01"`..`"10"`).
    pub fn progress_label(&self) -> String {
        section_label(self.state.current_section)
    }

    /// Last status line for the debug overlay.
    pub fn debug_line(&self) -> &str {
        &self.debug_line
    }

    fn word_targets(&self, section: usize) -> Option<Vec<Target>> {
        self.split(section).map(|split| {
            (0..split.len())
                .map(|word| Target::Word { section, word })
                .collect()
        })
    }

    /// Apply the initial page state: section 0 shown, everything else
    /// hidden, navigation and progress indicator reset.
    pub fn prepare(&self, engine: &mut dyn TransitionEngine) {
        for section in 0..SECTION_COUNT {
            let shown = section == self.state.current_section;
            let flag = if shown { 1.0 } else { 0.0 };

            engine.set(PropertyKey::new(Target::Content(section), Property::Active), flag);
            engine.set(PropertyKey::new(Target::Content(section), Property::Visible), flag);
            engine.set(PropertyKey::new(Target::Content(section), Property::Opacity), flag);
            engine.set(PropertyKey::new(Target::Background(section), Property::Active), flag);
            engine.set(PropertyKey::new(Target::Background(section), Property::Opacity), flag);

            if let Some(words) = self.word_targets(section) {
                engine.set_all(&words, Property::OffsetYPercent, if shown { 0.0 } else { 100.0 });
                engine.set_all(&words, Property::Opacity, flag);
            }

            let nav_opacity = if shown {
                NAV_ACTIVE_OPACITY
            } else {
                NAV_INACTIVE_OPACITY
            };
            for nav in [Target::LeftNav(section), Target::RightNav(section)] {
                engine.set(PropertyKey::new(nav, Property::Active), flag);
                engine.set(PropertyKey::new(nav, Property::Opacity), nav_opacity);
            }
        }
        self.update_progress_fill(engine);
    }

    fn update_progress_fill(&self, engine: &mut dyn TransitionEngine) {
        engine.set(
            PropertyKey::new(Target::ProgressFill, Property::WidthPercent),
            progress_fill_percent(self.state.current_section),
        );
    }

    // -------------------------------------------------------------------------
    // Public operations
    // -------------------------------------------------------------------------

    /// React to a progress report from the scroll provider. Returns `true`
    /// when a transition was started.
    pub fn on_scroll_progress(&mut self, progress: f32, cx: &mut Collaborators<'_>) -> bool {
        if self.state.is_snapping {
            return false;
        }

        let delta = progress - self.state.last_progress;
        if delta.abs() > DIRECTION_THRESHOLD {
            self.state.scroll_direction = if delta > 0.0 {
                ScrollDirection::Down
            } else {
                ScrollDirection::Up
            };
        }

        let target = target_section(progress);
        let mut started = false;
        if target != self.state.current_section && !self.state.is_animating {
            // Never more than one section per crossing.
            let next = if target > self.state.current_section {
                self.state.current_section + 1
            } else {
                self.state.current_section - 1
            };
            started = self.snap_to_section(next, cx);
        }

        self.state.last_progress = progress;
        self.update_progress_fill(cx.engine);
        self.debug_line = format!(
            "Section: {}, Target: {}, Progress: {:.3}, Direction: {}",
            self.state.current_section,
            target,
            progress,
            self.state.scroll_direction.signum()
        );
        started
    }

    /// Jump straight to `index`, e.g. after a navigation click. Returns
    /// `true` when the jump was accepted.
    pub fn navigate_to(&mut self, index: usize, cx: &mut Collaborators<'_>) -> bool {
        if index >= SECTION_COUNT {
            warn!("navigate_to({}) ignored: only {} sections", index, SECTION_COUNT);
            return false;
        }
        if index == self.state.current_section || self.state.is_animating || self.state.is_snapping
        {
            return false;
        }

        cx.sound.enable();
        cx.sound.play(SOUND_CLICK, 0);

        self.state.is_snapping = true;
        self.change_section(index, cx);
        cx.scroll.scroll_to(
            self.positions[index],
            ScrollToOptions {
                duration: NAVIGATE_DURATION,
                easing: Easing::EASE_OUT_CUBIC,
                lock: true,
                on_complete: Some(Completion::ScrollSettled),
            },
        );
        true
    }

    /// Route a finished animation back into the state machine.
    pub fn handle_completion(&mut self, completion: Completion, engine: &mut dyn TransitionEngine) {
        match completion {
            Completion::TextExited { section } => {
                // A quick return to this section may already have re-shown it.
                if section != self.state.current_section {
                    engine.set(PropertyKey::new(Target::Content(section), Property::Active), 0.0);
                    engine.set(PropertyKey::new(Target::Content(section), Property::Visible), 0.0);
                }
            }
            Completion::BackgroundFadedOut { section } => {
                engine.set(
                    PropertyKey::new(Target::Background(section), Property::OffsetYPercent),
                    0.0,
                );
                self.state.is_animating = false;
                debug!("Transition finished on section {}", self.state.current_section);
            }
            Completion::ScrollSettled => {
                self.state.is_snapping = false;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// One scroll-assisted step: transition to `section` and pull the scroll
    /// position onto its start.
    fn snap_to_section(&mut self, section: usize, cx: &mut Collaborators<'_>) -> bool {
        if section >= SECTION_COUNT
            || section == self.state.current_section
            || self.state.is_animating
        {
            return false;
        }
        self.state.is_snapping = true;
        self.change_section(section, cx);
        cx.scroll.scroll_to(
            self.positions[section],
            ScrollToOptions {
                duration: SNAP_DURATION,
                easing: Easing::EASE_OUT_CUBIC,
                lock: true,
                on_complete: Some(Completion::ScrollSettled),
            },
        );
        true
    }

    /// The transition routine. Commits `current_section` before scheduling
    /// any animation.
    fn change_section(&mut self, new_section: usize, cx: &mut Collaborators<'_>) {
        if new_section >= SECTION_COUNT
            || new_section == self.state.current_section
            || self.state.is_animating
        {
            return;
        }
        self.state.is_animating = true;
        let is_down = new_section > self.state.current_section;
        let previous = self.state.current_section;
        self.state.current_section = new_section;

        let engine = &mut *cx.engine;
        self.update_progress_fill(engine);
        self.debug_line = format!(
            "Changing to Section: {} ({})",
            new_section,
            if is_down { "Down" } else { "Up" }
        );

        // Lazily hidden earlier sections would otherwise flicker.
        for section in 0..SECTION_COUNT {
            if section != new_section && section != previous {
                engine.set(PropertyKey::new(Target::Content(section), Property::Active), 0.0);
                engine.set(PropertyKey::new(Target::Content(section), Property::Visible), 0.0);
                engine.set(PropertyKey::new(Target::Content(section), Property::Opacity), 0.0);
            }
        }

        self.exit_text(previous, is_down, engine);
        self.enter_text(new_section, is_down, engine, &mut *cx.sound);
        Self::swap_backgrounds(previous, new_section, is_down, engine);
        Self::highlight_navigation(new_section, engine);
    }

    fn exit_text(&self, section: usize, is_down: bool, engine: &mut dyn TransitionEngine) {
        let Some(words) = self.word_targets(section) else {
            engine.set(PropertyKey::new(Target::Content(section), Property::Active), 0.0);
            engine.set(PropertyKey::new(Target::Content(section), Property::Visible), 0.0);
            return;
        };
        let stagger = if is_down {
            TEXT_EXIT_STAGGER
        } else {
            -TEXT_EXIT_STAGGER
        };
        engine.animate(
            Animation::to(
                words.clone(),
                Property::OffsetYPercent,
                if is_down { -100.0 } else { 100.0 },
                TEXT_EXIT_DURATION,
            )
            .stagger(stagger)
            .easing(Easing::Showroom)
            .on_complete(Completion::TextExited { section }),
        );
        engine.animate(
            Animation::to(words, Property::Opacity, 0.0, TEXT_EXIT_DURATION)
                .stagger(stagger)
                .easing(Easing::Showroom),
        );
    }

    fn enter_text(
        &self,
        section: usize,
        is_down: bool,
        engine: &mut dyn TransitionEngine,
        sound: &mut dyn SoundPlayer,
    ) {
        engine.set(PropertyKey::new(Target::Content(section), Property::Active), 1.0);
        engine.set(PropertyKey::new(Target::Content(section), Property::Visible), 1.0);
        engine.set(PropertyKey::new(Target::Content(section), Property::Opacity), 1.0);

        let Some(words) = self.word_targets(section) else {
            return;
        };
        sound.play(SOUND_TEXT_CHANGE, TEXT_CHANGE_SOUND_DELAY_MS);

        let stagger = if is_down {
            TEXT_ENTER_STAGGER
        } else {
            -TEXT_ENTER_STAGGER
        };
        engine.set_all(
            &words,
            Property::OffsetYPercent,
            if is_down { 100.0 } else { -100.0 },
        );
        engine.set_all(&words, Property::Opacity, 0.0);
        engine.animate(
            Animation::to(words.clone(), Property::OffsetYPercent, 0.0, TRANSITION_DURATION)
                .stagger(stagger)
                .easing(Easing::Showroom),
        );
        engine.animate(
            Animation::to(words, Property::Opacity, 1.0, TRANSITION_DURATION)
                .stagger(stagger)
                .easing(Easing::Showroom),
        );
    }

    fn swap_backgrounds(
        previous: usize,
        new_section: usize,
        is_down: bool,
        engine: &mut dyn TransitionEngine,
    ) {
        for section in 0..SECTION_COUNT {
            let bg = Target::Background(section);
            if section == new_section {
                engine.set(PropertyKey::new(bg, Property::Active), 1.0);
                engine.set(PropertyKey::new(bg, Property::Opacity), 1.0);
                engine.set(PropertyKey::new(bg, Property::OffsetYPercent), 0.0);
                // Wipe in from the edge the content is scrolling towards.
                let (revealing, other) = if is_down {
                    (Property::ClipTop, Property::ClipBottom)
                } else {
                    (Property::ClipBottom, Property::ClipTop)
                };
                engine.set(PropertyKey::new(bg, other), 0.0);
                engine.set(PropertyKey::new(bg, revealing), 100.0);
                engine.animate(
                    Animation::to([bg], revealing, 0.0, TRANSITION_DURATION).easing(Easing::Showroom),
                );
            } else if section == previous {
                engine.set(PropertyKey::new(bg, Property::Active), 0.0);
                engine.animate(
                    Animation::to(
                        [bg],
                        Property::OffsetYPercent,
                        if is_down {
                            PARALLAX_AMOUNT
                        } else {
                            -PARALLAX_AMOUNT
                        },
                        TRANSITION_DURATION,
                    )
                    .easing(Easing::Showroom),
                );
                engine.animate(
                    Animation::to([bg], Property::Opacity, 0.0, BACKGROUND_FADE_DURATION)
                        .delay(BACKGROUND_FADE_DELAY)
                        .easing(Easing::Showroom)
                        .on_complete(Completion::BackgroundFadedOut { section }),
                );
            } else {
                engine.set(PropertyKey::new(bg, Property::Active), 0.0);
                engine.animate(
                    Animation::to([bg], Property::Opacity, 0.0, BACKGROUND_HIDE_DURATION)
                        .easing(Easing::Showroom),
                );
            }
        }
    }

    fn highlight_navigation(new_section: usize, engine: &mut dyn TransitionEngine) {
        for section in 0..SECTION_COUNT {
            let active = section == new_section;
            for nav in [Target::LeftNav(section), Target::RightNav(section)] {
                engine.set(
                    PropertyKey::new(nav, Property::Active),
                    if active { 1.0 } else { 0.0 },
                );
                engine.animate(
                    Animation::to(
                        [nav],
                        Property::Opacity,
                        if active {
                            NAV_ACTIVE_OPACITY
                        } else {
                            NAV_INACTIVE_OPACITY
                        },
                        NAV_FADE_DURATION,
                    )
                    .easing(Easing::Power2Out),
                );
            }
        }
    }
}
