use bevy_egui::{egui, EguiContexts};

pub const PAGE_BG: egui::Color32 = egui::Color32::from_rgb(12, 12, 14);
pub const END_BG: egui::Color32 = egui::Color32::from_rgb(236, 232, 224);
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(245, 243, 238);
pub const TEXT_DARK: egui::Color32 = egui::Color32::from_rgb(20, 20, 22);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(230, 72, 46);
pub const TRACK: egui::Color32 = egui::Color32::from_rgb(70, 70, 76);
pub const CAR_BODY: egui::Color32 = egui::Color32::from_rgb(200, 202, 206);
pub const CAR_GLASS: egui::Color32 = egui::Color32::from_rgb(40, 48, 60);
pub const TYRE: egui::Color32 = egui::Color32::from_rgb(18, 18, 20);
pub const FRONT_LAMP: egui::Color32 = egui::Color32::from_rgb(255, 244, 200);
pub const REAR_LAMP: egui::Color32 = egui::Color32::from_rgb(220, 30, 40);

pub const FONT_HERO: f32 = 72.0;
pub const FONT_NAV: f32 = 15.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_COUNTER: f32 = 96.0;

/// Veil drawn over regions that are blurred while the end section is in view.
pub const BLUR_VEIL: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 150);

/// `color` at `opacity`, clamped to `[0, 1]`.
pub fn faded(color: egui::Color32, opacity: f32) -> egui::Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

/// Darkened section accent used as the background fill.
pub fn accent_fill(accent: [u8; 3]) -> egui::Color32 {
    let [r, g, b] = accent;
    egui::Color32::from_rgb(r / 2, g / 2, b / 2)
}

pub fn apply_showroom_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgba_unmultiplied(16, 16, 20, 230);
    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.override_text_color = Some(TEXT);
    style.visuals.selection.bg_fill = ACCENT;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);

    style.visuals.window_corner_radius = egui::CornerRadius::ZERO;
    style.visuals.widgets.noninteractive.corner_radius = egui::CornerRadius::ZERO;
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::ZERO;
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::ZERO;
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::ZERO;

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faded_clamps_opacity() {
        assert_eq!(faded(ACCENT, 2.0), ACCENT);
        assert_eq!(faded(ACCENT, -1.0), egui::Color32::TRANSPARENT);
    }

    #[test]
    fn test_accent_fill_darkens() {
        assert_eq!(accent_fill([200, 100, 50]), egui::Color32::from_rgb(100, 50, 25));
    }
}
