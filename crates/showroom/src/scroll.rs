//! Scroll position provider capability.
//!
//! Input systems feed wheel deltas into [`ScrollProvider::scroll_by`]; the
//! navigator requests assisted scrolls through
//! [`ScrollProvider::scroll_to`]. Each frame the provider is advanced and
//! reports whether the offset moved plus any finished `scroll_to`
//! completions.
//!
//! [`SmoothScroll`] glides towards the accumulated wheel target with an
//! exponential ease-out over [`SMOOTH_SCROLL_DURATION`], restarting the
//! glide from the current offset on every new input. `scroll_to` runs as a
//! timed, eased animation that can lock out user input. [`InstantScroll`]
//! is the fallback without any smoothing.

use crate::config::SMOOTH_SCROLL_DURATION;
use crate::easing::Easing;
use crate::engine::Completion;

/// Options for an assisted scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollToOptions {
    pub duration: f32,
    pub easing: Easing,
    /// Ignore user input until the scroll completes.
    pub lock: bool,
    pub on_complete: Option<Completion>,
}

/// Result of advancing a provider by one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollTick {
    pub offset_changed: bool,
    pub completions: Vec<Completion>,
}

/// Reports scroll position and performs assisted scrolls.
pub trait ScrollProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Current scroll offset in logical pixels.
    fn offset(&self) -> f32;

    fn max_offset(&self) -> f32;

    /// `true` while a locking `scroll_to` is running.
    fn is_locked(&self) -> bool;

    /// Organic user scroll. Ignored while locked.
    fn scroll_by(&mut self, delta: f32);

    /// Animate to `offset`.
    fn scroll_to(&mut self, offset: f32, options: ScrollToOptions);

    fn advance(&mut self, dt: f32) -> ScrollTick;
}

// =============================================================================
// SmoothScroll
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
    easing: Easing,
    lock: bool,
    on_complete: Option<Completion>,
    /// Started by user input rather than `scroll_to`.
    organic: bool,
}

#[derive(Debug)]
pub struct SmoothScroll {
    offset: f32,
    target: f32,
    max_offset: f32,
    animation: Option<ScrollAnimation>,
    /// Completions of animations interrupted before reaching their target.
    interrupted: Vec<Completion>,
}

impl SmoothScroll {
    pub fn new(max_offset: f32) -> Self {
        Self {
            offset: 0.0,
            target: 0.0,
            max_offset: max_offset.max(0.0),
            animation: None,
            interrupted: Vec::new(),
        }
    }

    fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset)
    }

    fn interrupt(&mut self) {
        if let Some(animation) = self.animation.take() {
            if let Some(completion) = animation.on_complete {
                self.interrupted.push(completion);
            }
        }
    }
}

impl ScrollProvider for SmoothScroll {
    fn name(&self) -> &'static str {
        "smooth"
    }

    fn offset(&self) -> f32 {
        self.offset
    }

    fn max_offset(&self) -> f32 {
        self.max_offset
    }

    fn is_locked(&self) -> bool {
        self.animation.is_some_and(|a| a.lock)
    }

    fn scroll_by(&mut self, delta: f32) {
        if self.is_locked() {
            return;
        }
        if self.animation.is_some_and(|a| !a.organic) {
            // User input takes over an unlocked assisted scroll.
            self.target = self.offset;
            self.interrupt();
        }
        self.target = self.clamp(self.target + delta);
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to: self.target,
            elapsed: 0.0,
            duration: SMOOTH_SCROLL_DURATION,
            easing: Easing::ExpoOut,
            lock: false,
            on_complete: None,
            organic: true,
        });
    }

    fn scroll_to(&mut self, offset: f32, options: ScrollToOptions) {
        self.interrupt();
        let to = self.clamp(offset);
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to,
            elapsed: 0.0,
            duration: options.duration.max(0.0),
            easing: options.easing,
            lock: options.lock,
            on_complete: options.on_complete,
            organic: false,
        });
    }

    fn advance(&mut self, dt: f32) -> ScrollTick {
        let dt = dt.max(0.0);
        let before = self.offset;
        let mut tick = ScrollTick {
            offset_changed: false,
            completions: std::mem::take(&mut self.interrupted),
        };

        if let Some(mut animation) = self.animation.take() {
            animation.elapsed += dt;
            let t = if animation.duration <= 0.0 {
                1.0
            } else {
                (animation.elapsed / animation.duration).min(1.0)
            };
            self.offset = animation.from + (animation.to - animation.from) * animation.easing.ease(t);
            if t >= 1.0 {
                self.offset = animation.to;
                self.target = animation.to;
                if let Some(completion) = animation.on_complete {
                    tick.completions.push(completion);
                }
            } else {
                self.animation = Some(animation);
            }
        }

        tick.offset_changed = self.offset != before;
        tick
    }
}

// =============================================================================
// InstantScroll
// =============================================================================

/// Fallback provider: every scroll lands immediately.
#[derive(Debug)]
pub struct InstantScroll {
    offset: f32,
    reported: f32,
    max_offset: f32,
    pending: Vec<Completion>,
}

impl InstantScroll {
    pub fn new(max_offset: f32) -> Self {
        Self {
            offset: 0.0,
            reported: 0.0,
            max_offset: max_offset.max(0.0),
            pending: Vec::new(),
        }
    }
}

impl ScrollProvider for InstantScroll {
    fn name(&self) -> &'static str {
        "instant"
    }

    fn offset(&self) -> f32 {
        self.offset
    }

    fn max_offset(&self) -> f32 {
        self.max_offset
    }

    fn is_locked(&self) -> bool {
        false
    }

    fn scroll_by(&mut self, delta: f32) {
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset);
    }

    fn scroll_to(&mut self, offset: f32, options: ScrollToOptions) {
        self.offset = offset.clamp(0.0, self.max_offset);
        if let Some(completion) = options.on_complete {
            self.pending.push(completion);
        }
    }

    fn advance(&mut self, _dt: f32) -> ScrollTick {
        let changed = self.offset != self.reported;
        self.reported = self.offset;
        ScrollTick {
            offset_changed: changed,
            completions: std::mem::take(&mut self.pending),
        }
    }
}
