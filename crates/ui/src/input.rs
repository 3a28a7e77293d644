//! Raw input to showroom events.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use showroom::events::{ScrollInput, UserGesture};

/// Pixels scrolled per wheel line.
pub const LINE_SCROLL_PX: f32 = 100.0;

/// Convert one wheel event to a page delta. Wheel-up scrolls towards the
/// top of the page.
pub fn wheel_delta(unit: MouseScrollUnit, y: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => -y * LINE_SCROLL_PX,
        MouseScrollUnit::Pixel => -y,
    }
}

pub fn wheel_scroll(mut wheel: EventReader<MouseWheel>, mut scroll: EventWriter<ScrollInput>) {
    let delta: f32 = wheel.read().map(|evt| wheel_delta(evt.unit, evt.y)).sum();
    if delta != 0.0 {
        scroll.send(ScrollInput { delta });
    }
}

/// Any mouse button or key press counts as a user gesture.
pub fn detect_gestures(
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut gestures: EventWriter<UserGesture>,
) {
    let clicked = mouse.is_some_and(|m| m.get_just_pressed().next().is_some());
    let typed = keys.is_some_and(|k| k.get_just_pressed().next().is_some());
    if clicked || typed {
        gestures.send(UserGesture);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_lines_scale_to_pixels() {
        assert_eq!(wheel_delta(MouseScrollUnit::Line, -1.0), LINE_SCROLL_PX);
        assert_eq!(wheel_delta(MouseScrollUnit::Line, 2.0), -2.0 * LINE_SCROLL_PX);
    }

    #[test]
    fn test_wheel_pixels_pass_through() {
        assert_eq!(wheel_delta(MouseScrollUnit::Pixel, -37.5), 37.5);
    }
}
