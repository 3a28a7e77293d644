//! Navigation, scrolling and input handling through the full plugin.

use bevy::prelude::*;

use crate::capabilities::Capabilities;
use crate::config::{NAV_INACTIVE_OPACITY, SECTION_COUNT};
use crate::engine::{Property, Target};
use crate::events::{NavHovered, NavigateRequest, ScrollInput, UserGesture};
use crate::navigator::NavigatorPhase;
use crate::settings::ShowroomSettings;
use crate::sound::{SoundPlayer, SOUND_CLICK, SOUND_HOVER, SOUND_TEXT_CHANGE};

use super::harness::TestShowroom;

fn settled(s: &TestShowroom) -> bool {
    let state = s.showroom().navigator().state();
    state.phase() == NavigatorPhase::Idle && !state.is_snapping()
}

// ===========================================================================
// Startup
// ===========================================================================

#[test]
fn test_startup_begins_on_first_section() {
    let showroom = TestShowroom::new();
    assert_eq!(showroom.current_section(), 0);
    assert_eq!(showroom.showroom().navigator().progress_label(), "01");
    assert_eq!(showroom.debug_info().status, "Current Section: 0 (Initial)");
    assert!(!showroom.debug_info().visible);
    assert!(showroom
        .debug_log()
        .lines()
        .any(|line| line.ends_with("Showroom initialized")));
    assert_eq!(
        showroom.showroom().value(Target::Content(0), Property::Visible),
        1.0
    );
}

// ===========================================================================
// Navigation clicks
// ===========================================================================

#[test]
fn test_navigate_request_commits_then_settles() {
    let mut showroom = TestShowroom::loaded();
    showroom.send(NavigateRequest { index: 3 });
    showroom.frame();

    assert_eq!(showroom.current_section(), 3);
    assert!(showroom.showroom().navigator().state().is_snapping());

    showroom.run_until(settled, 3.0);
    let layout = *showroom.showroom().layout();
    assert_eq!(showroom.showroom().scroll_offset(), layout.section_start(3));
    let fill = showroom
        .showroom()
        .value(Target::ProgressFill, Property::WidthPercent);
    assert!((fill - 300.0 / 9.0).abs() < 1e-3);
    assert_eq!(showroom.showroom().navigator().progress_label(), "04");
}

#[test]
fn test_navigate_plays_click_then_heading_whoosh() {
    let mut showroom = TestShowroom::loaded();
    showroom.send(NavigateRequest { index: 5 });
    showroom.run_for(1.0);
    assert_eq!(
        showroom.sfx_names(),
        vec![SOUND_CLICK.to_string(), SOUND_TEXT_CHANGE.to_string()]
    );
}

#[test]
fn test_requests_during_a_transition_are_dropped() {
    let mut showroom = TestShowroom::loaded();
    showroom.send(NavigateRequest { index: 2 });
    showroom.frame();
    showroom.send(NavigateRequest { index: 7 });
    showroom.frame();
    assert_eq!(showroom.current_section(), 2);

    showroom.run_until(settled, 3.0);
    assert_eq!(showroom.current_section(), 2);
}

#[test]
fn test_navigate_to_current_section_is_ignored() {
    let mut showroom = TestShowroom::loaded();
    showroom.send(NavigateRequest { index: 0 });
    showroom.run_for(0.5);
    assert!(settled(&showroom));
    assert!(showroom.sfx_names().is_empty());
    assert!(!showroom.showroom().sound().is_enabled());
}

#[test]
fn test_navigation_highlight_follows_section() {
    let mut showroom = TestShowroom::loaded();
    showroom.send(NavigateRequest { index: 6 });
    showroom.run_until(settled, 3.0);
    showroom.run_for(0.5);
    for section in 0..SECTION_COUNT {
        let opacity = showroom
            .showroom()
            .value(Target::LeftNav(section), Property::Opacity);
        if section == 6 {
            assert_eq!(opacity, 1.0);
        } else {
            assert!((opacity - NAV_INACTIVE_OPACITY).abs() < 1e-4);
        }
    }
}

// ===========================================================================
// Organic scrolling
// ===========================================================================

#[test]
fn test_wheel_scroll_steps_one_section_and_snaps() {
    let mut showroom = TestShowroom::loaded();
    showroom.send(ScrollInput { delta: 760.0 });
    showroom.run_until(|s| s.current_section() == 1, 3.0);
    showroom.run_until(settled, 3.0);

    let layout = *showroom.showroom().layout();
    assert_eq!(showroom.showroom().scroll_offset(), layout.section_start(1));
    assert_eq!(showroom.current_section(), 1);
}

#[test]
fn test_scrolling_back_up_returns_to_first_section() {
    let mut showroom = TestShowroom::loaded();
    showroom.send(ScrollInput { delta: 760.0 });
    showroom.run_until(|s| s.current_section() == 1, 3.0);
    showroom.run_until(settled, 3.0);

    showroom.send(ScrollInput { delta: -400.0 });
    showroom.run_until(|s| s.current_section() == 0, 3.0);
    showroom.run_until(settled, 3.0);
    assert_eq!(showroom.showroom().scroll_offset(), 0.0);
}

#[test]
fn test_end_section_unpins_the_page() {
    let mut showroom = TestShowroom::loaded();
    showroom.send(NavigateRequest {
        index: SECTION_COUNT - 1,
    });
    showroom.run_until(settled, 3.0);
    assert!(!showroom.end_layout().blur);

    // Halfway through the end region.
    showroom.send(ScrollInput { delta: 600.0 });
    showroom.run_for(4.0);

    let end = showroom.end_layout();
    assert!(end.blur);
    assert!((end.progress - 0.5).abs() < 1e-3, "progress {}", end.progress);
    assert!(showroom.debug_info().status.starts_with("End Section"));
    assert!(showroom.page_progress() > 0.95);
    let height = showroom
        .showroom()
        .value(Target::PinnedContainer, Property::HeightVh);
    assert!((height - end.height_vh).abs() < 1e-3);
    assert_eq!(showroom.current_section(), SECTION_COUNT - 1);
}

// ===========================================================================
// Input and audio
// ===========================================================================

#[test]
fn test_hover_arms_audio_and_plays_hover() {
    let mut showroom = TestShowroom::loaded();
    showroom.send(NavHovered { index: 4 });
    showroom.run_for(0.1);
    assert!(showroom.showroom().sound().is_enabled());
    assert_eq!(showroom.sfx_names(), vec![SOUND_HOVER.to_string()]);
}

#[test]
fn test_any_gesture_arms_audio_silently() {
    let mut showroom = TestShowroom::new();
    showroom.send(UserGesture);
    showroom.frame();
    assert!(showroom.showroom().sound().is_enabled());
    assert!(showroom.sfx_names().is_empty());
}

#[test]
fn test_h_key_toggles_debug_info() {
    let mut showroom = TestShowroom::new();
    showroom
        .world_mut()
        .insert_resource(ButtonInput::<KeyCode>::default());

    showroom
        .world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyH);
    showroom.frame();
    assert!(showroom.debug_info().visible);

    // Held down: no second toggle.
    showroom
        .world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
    showroom.frame();
    assert!(showroom.debug_info().visible);

    {
        let mut keys = showroom.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release(KeyCode::KeyH);
        keys.press(KeyCode::KeyH);
    }
    showroom.frame();
    assert!(!showroom.debug_info().visible);
}

// ===========================================================================
// Fallback backends
// ===========================================================================

#[test]
fn test_fallback_backends_complete_transitions() {
    let settings = ShowroomSettings {
        capabilities: Capabilities {
            tweening: false,
            smooth_scroll: false,
            text_split: false,
        },
        ..Default::default()
    };
    let mut showroom = TestShowroom::with_settings(settings);
    showroom.send(NavigateRequest { index: 4 });
    showroom.frame();
    assert_eq!(showroom.current_section(), 4);

    showroom.run_for(0.1);
    assert!(settled(&showroom));
    assert!(showroom.showroom().navigator().split(4).is_none());
    assert_eq!(
        showroom.showroom().value(Target::Content(4), Property::Visible),
        1.0
    );
    // No heading animation means no whoosh either.
    assert_eq!(showroom.sfx_names(), vec![SOUND_CLICK.to_string()]);
}
