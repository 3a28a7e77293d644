//! Foreground overlays: the loading curtain and the debug window.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use showroom::debug::{DebugInfo, DebugLog};
use showroom::engine::{Property, Target};
use showroom::loading::LoadingSequence;
use showroom::Showroom;

use crate::theme;

/// Lines of the debug log shown under the status line.
const DEBUG_LOG_LINES: usize = 12;

/// Renders the loading curtain while it is visible. The curtain swallows
/// input so nothing underneath reacts before the intro.
pub fn loading_overlay_ui(
    mut contexts: EguiContexts,
    showroom: Option<Res<Showroom>>,
    loading: Option<Res<LoadingSequence>>,
) {
    let (Some(showroom), Some(loading)) = (showroom, loading) else {
        return;
    };
    if showroom.value(Target::LoadingOverlay, Property::Visible) < 0.5 {
        return;
    }

    let ctx = contexts.ctx_mut();
    let screen = ctx.screen_rect();
    let slide = screen.height() * showroom.value(Target::LoadingOverlay, Property::OffsetYPercent) / 100.0;
    let curtain = screen.translate(egui::vec2(0.0, slide));
    let text_opacity = showroom.value(Target::LoadingText, Property::Opacity);

    egui::Area::new(egui::Id::new("loading_overlay"))
        .fixed_pos(screen.min)
        .order(egui::Order::Foreground)
        .interactable(true)
        .show(ctx, |ui| {
            let painter = ui.painter();
            painter.rect_filled(curtain, egui::CornerRadius::ZERO, theme::PAGE_BG);
            painter.text(
                curtain.center(),
                egui::Align2::CENTER_CENTER,
                loading.label(),
                egui::FontId::monospace(theme::FONT_COUNTER),
                theme::faded(theme::TEXT, text_opacity),
            );
            ui.allocate_rect(curtain.intersect(screen), egui::Sense::click_and_drag());
        });
}

/// Status line plus the most recent log entries, toggled with `H`.
pub fn debug_window_ui(mut contexts: EguiContexts, info: Res<DebugInfo>, log: Res<DebugLog>) {
    if !info.visible {
        return;
    }
    egui::Window::new("Debug")
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .default_width(360.0)
        .resizable(false)
        .collapsible(true)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(
                egui::RichText::new(&info.status)
                    .monospace()
                    .size(theme::FONT_LABEL)
                    .color(theme::ACCENT),
            );
            ui.separator();
            for line in log.lines().take(DEBUG_LOG_LINES) {
                ui.label(egui::RichText::new(line).monospace().size(theme::FONT_LABEL - 2.0));
            }
            if log.is_empty() {
                ui.weak("No events yet");
            }
        });
}
