//! Fixed constants for the showroom page.
//!
//! Timing values are in seconds unless the name says otherwise. None of the
//! transition timings are user-configurable; page geometry lives in
//! [`ShowroomSettings`](crate::settings::ShowroomSettings).

/// Number of scroll-bound sections on the page.
pub const SECTION_COUNT: usize = 10;
/// Index of the last section.
pub const LAST_SECTION: usize = SECTION_COUNT - 1;

// =============================================================================
// Section transitions
// =============================================================================

/// Base duration of a section transition.
pub const TRANSITION_DURATION: f32 = 0.64;
/// Outgoing heading words use a shortened duration.
pub const TEXT_EXIT_DURATION: f32 = TRANSITION_DURATION * 0.6;
/// Per-word stagger for the outgoing heading.
pub const TEXT_EXIT_STAGGER: f32 = 0.03;
/// Per-word stagger for the incoming heading.
pub const TEXT_ENTER_STAGGER: f32 = 0.05;
/// Vertical parallax shift of the outgoing background, in percent.
pub const PARALLAX_AMOUNT: f32 = 5.0;
/// Delay before the outgoing background starts fading.
pub const BACKGROUND_FADE_DELAY: f32 = TRANSITION_DURATION * 0.5;
/// Duration of the outgoing background fade.
pub const BACKGROUND_FADE_DURATION: f32 = TRANSITION_DURATION * 0.5;
/// Fade of backgrounds that are neither incoming nor outgoing.
pub const BACKGROUND_HIDE_DURATION: f32 = TRANSITION_DURATION * 0.3;
/// Side navigation opacity fade.
pub const NAV_FADE_DURATION: f32 = 0.3;
/// Opacity of the highlighted navigation item.
pub const NAV_ACTIVE_OPACITY: f32 = 1.0;
/// Opacity of every other navigation item.
pub const NAV_INACTIVE_OPACITY: f32 = 0.3;
/// Delay of the heading whoosh so it doesn't overlap the click sound.
pub const TEXT_CHANGE_SOUND_DELAY_MS: u32 = 250;

// =============================================================================
// Scroll assist
// =============================================================================

/// Scroll-assist duration after an organic boundary crossing.
pub const SNAP_DURATION: f32 = 0.6;
/// Scroll-assist duration after a navigation click.
pub const NAVIGATE_DURATION: f32 = 0.8;
/// Progress deltas at or below this do not change the scroll direction.
pub const DIRECTION_THRESHOLD: f32 = 0.001;
/// Smoothing duration for organic wheel scrolling.
pub const SMOOTH_SCROLL_DURATION: f32 = 1.2;

// =============================================================================
// Loading overlay
// =============================================================================

/// Settling time after launch before the page initializes and counting begins.
pub const STARTUP_DELAY: f32 = 0.5;
/// Interval between loading counter increments.
pub const COUNTER_INTERVAL: f32 = 0.030;
/// Smallest random counter increment.
pub const COUNTER_STEP_MIN: f32 = 1.0;
/// Upper bound (exclusive) of the random counter increment.
pub const COUNTER_STEP_MAX: f32 = 4.0;
/// Pause after the counter reaches 100.
pub const COUNTER_SETTLE_DELAY: f32 = 0.2;
/// Duration of the loading text fade.
pub const TEXT_FADE_DURATION: f32 = 0.65;
/// Duration of the overlay slide-up.
pub const SLIDE_UP_DURATION: f32 = 0.9;
/// The watchdog forces the overlay away after this long.
pub const LOADING_WATCHDOG: f32 = 6.0;
/// Slide-up duration used by the watchdog path.
pub const WATCHDOG_SLIDE_DURATION: f32 = 0.8;

// =============================================================================
// Intro
// =============================================================================

/// Stagger between side navigation items appearing.
pub const COLUMN_STAGGER: f32 = 0.060;
/// Extra delay before the right column starts.
pub const RIGHT_COLUMN_DELAY: f32 = 0.200;
/// Hero car drive-in duration.
pub const CAR_DRIVE_DURATION: f32 = 1.6;
/// Starting horizontal offset of the car body, in percent.
pub const CAR_START_OFFSET: f32 = 160.0;
/// Headlamp fade-in duration.
pub const LAMP_DURATION: f32 = 0.9;
/// Front lamp delay and starting offset.
pub const FRONT_LAMP_DELAY: f32 = 0.25;
pub const FRONT_LAMP_OFFSET: f32 = 40.0;
/// Rear lamp delay and starting offset.
pub const REAR_LAMP_DELAY: f32 = 0.55;
pub const REAR_LAMP_OFFSET: f32 = 60.0;

// =============================================================================
// End section
// =============================================================================

/// Progress into the end region after which the page starts to unpin.
pub const END_UNPIN_THRESHOLD: f32 = 0.1;
/// Maximum upward travel of the pinned content, in pixels.
pub const END_MAX_TRAVEL: f32 = 200.0;
/// Tween duration used for end-section layout updates.
pub const END_TWEEN_DURATION: f32 = 0.1;

// =============================================================================
// Debug overlay
// =============================================================================

/// Maximum number of lines kept in the on-screen debug log.
pub const DEBUG_LOG_CAPACITY: usize = 200;
