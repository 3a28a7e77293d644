//! Loading overlay: percentage counter, fade, slide-up and a watchdog.
//!
//! Nothing moves until [`STARTUP_DELAY`] has passed; the watchdog clock
//! starts at that point too.
//!
//! ```text
//!   Counting --(counter = 100, +200ms)--> TextFading --(+650ms)--> SlidingUp --(+900ms)--> Hidden
//!       \______________________(6s watchdog)______________________/    (+800ms)
//! ```
//!
//! The intro starts when the overlay hides on the normal path, or as soon
//! as the watchdog forces the slide-up. Never both.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{
    COUNTER_INTERVAL, COUNTER_SETTLE_DELAY, COUNTER_STEP_MAX, COUNTER_STEP_MIN, LOADING_WATCHDOG,
    SLIDE_UP_DURATION, STARTUP_DELAY, TEXT_FADE_DURATION, WATCHDOG_SLIDE_DURATION,
};
use crate::debug::{debug_log, DebugLog};
use crate::easing::Easing;
use crate::engine::{Animation, Property, PropertyKey, Target, TransitionEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Counting,
    TextFading,
    SlidingUp,
    Hidden,
}

/// What happened during one [`LoadingSequence::advance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingTick {
    /// The intro choreography should start now.
    pub start_intro: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct LoadingSequence {
    phase: LoadingPhase,
    counter: f32,
    rng: ChaCha8Rng,
    /// Time left before the page initializes.
    startup_remaining: f32,
    /// Time since the page initialized.
    elapsed: f32,
    since_tick: f32,
    /// Time left until the next phase, once the counter is full.
    phase_timer: Option<f32>,
    watchdog_armed: bool,
    intro_started: bool,
}

impl LoadingSequence {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: LoadingPhase::Counting,
            counter: 0.0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            startup_remaining: STARTUP_DELAY,
            elapsed: 0.0,
            since_tick: 0.0,
            phase_timer: None,
            watchdog_armed: true,
            intro_started: false,
        }
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub fn counter(&self) -> f32 {
        self.counter
    }

    /// Counter text, e.g. `[07]` or `[100]`.
    pub fn label(&self) -> String {
        format!("[{:02}]", self.counter.round() as u32)
    }

    pub fn is_hidden(&self) -> bool {
        self.phase == LoadingPhase::Hidden
    }

    pub fn intro_started(&self) -> bool {
        self.intro_started
    }

    /// Put the overlay into its initial visible state.
    pub fn prepare(&self, engine: &mut dyn TransitionEngine) {
        engine.set(PropertyKey::new(Target::LoadingOverlay, Property::Visible), 1.0);
        engine.set(PropertyKey::new(Target::LoadingOverlay, Property::OffsetYPercent), 0.0);
        engine.set(PropertyKey::new(Target::LoadingText, Property::Opacity), 1.0);
    }

    pub fn advance(
        &mut self,
        dt: f32,
        engine: &mut dyn TransitionEngine,
        log: &mut DebugLog,
    ) -> LoadingTick {
        let mut tick = LoadingTick::default();
        if self.phase == LoadingPhase::Hidden {
            return tick;
        }
        let mut dt = dt.max(0.0);
        if self.startup_remaining > 0.0 {
            self.startup_remaining -= dt;
            if self.startup_remaining > 0.0 {
                return tick;
            }
            dt = -self.startup_remaining;
            self.startup_remaining = 0.0;
            debug_log(log, self.elapsed, "Startup delay elapsed; initializing page");
        }
        self.elapsed += dt;

        let mut timer_dt = dt;
        if self.phase == LoadingPhase::Counting && self.phase_timer.is_none() {
            self.since_tick += dt;
            while self.since_tick >= COUNTER_INTERVAL && self.counter < 100.0 {
                if self.counter == 0.0 {
                    debug_log(log, self.elapsed, "Loading counter started");
                }
                self.since_tick -= COUNTER_INTERVAL;
                self.counter += self.rng.gen_range(COUNTER_STEP_MIN..COUNTER_STEP_MAX);
            }
            if self.counter >= 100.0 {
                self.counter = 100.0;
                self.phase_timer = Some(COUNTER_SETTLE_DELAY);
                timer_dt = self.since_tick;
            }
        }

        if self.watchdog_armed && self.elapsed >= LOADING_WATCHDOG {
            self.watchdog_armed = false;
            warn!("Loading watchdog fired after {:.1}s; forcing overlay away", self.elapsed);
            debug_log(log, self.elapsed, "Loading fallback triggered: forcing overlay hide");
            self.slide_up(WATCHDOG_SLIDE_DURATION, engine);
            tick.start_intro = self.claim_intro();
            return tick;
        }

        if let Some(remaining) = self.phase_timer.as_mut() {
            *remaining -= timer_dt;
        }
        while let Some(remaining) = self.phase_timer {
            if remaining > 0.0 {
                break;
            }
            match self.phase {
                LoadingPhase::Counting => {
                    self.phase = LoadingPhase::TextFading;
                    engine.animate(
                        Animation::to(
                            [Target::LoadingText],
                            Property::Opacity,
                            0.0,
                            TEXT_FADE_DURATION,
                        )
                        .easing(Easing::Power2Out),
                    );
                    self.phase_timer = Some(remaining + TEXT_FADE_DURATION);
                }
                LoadingPhase::TextFading => {
                    self.watchdog_armed = false;
                    self.slide_up(SLIDE_UP_DURATION, engine);
                    if let Some(timer) = self.phase_timer.as_mut() {
                        *timer += remaining;
                    }
                }
                LoadingPhase::SlidingUp => {
                    self.hide(engine);
                    if self.claim_intro() {
                        debug_log(
                            log,
                            self.elapsed,
                            "Loading overlay hidden; starting column animations",
                        );
                        tick.start_intro = true;
                    }
                }
                LoadingPhase::Hidden => self.phase_timer = None,
            }
        }
        tick
    }

    fn slide_up(&mut self, duration: f32, engine: &mut dyn TransitionEngine) {
        self.phase = LoadingPhase::SlidingUp;
        self.phase_timer = Some(duration);
        engine.animate(
            Animation::to(
                [Target::LoadingOverlay],
                Property::OffsetYPercent,
                -100.0,
                duration,
            )
            .easing(Easing::Showroom),
        );
    }

    fn hide(&mut self, engine: &mut dyn TransitionEngine) {
        self.phase = LoadingPhase::Hidden;
        self.phase_timer = None;
        engine.set(PropertyKey::new(Target::LoadingOverlay, Property::Visible), 0.0);
    }

    fn claim_intro(&mut self) -> bool {
        !std::mem::replace(&mut self.intro_started, true)
    }
}
