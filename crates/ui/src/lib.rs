use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use showroom::ShowroomSet;

pub mod input;
pub mod overlay;
pub mod page;
pub mod theme;

/// egui front-end for the showroom page. Requires [`showroom::ShowroomPlugin`].
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_showroom_theme)
            .add_systems(
                Update,
                (input::wheel_scroll, input::detect_gestures).before(ShowroomSet::Input),
            )
            .add_systems(
                Update,
                (
                    page::page_ui,
                    overlay::loading_overlay_ui,
                    overlay::debug_window_ui,
                )
                    .chain()
                    .after(ShowroomSet::Output),
            );
    }
}
