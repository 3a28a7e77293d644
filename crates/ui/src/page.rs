//! The showroom page: backgrounds, hero car, split headings, side
//! navigation, progress bar and the closing section.
//!
//! Everything is painted from engine values; this module never decides
//! what is visible, it only reads what the navigator and intro set.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use showroom::catalog::SectionCatalog;
use showroom::config::SECTION_COUNT;
use showroom::end_section::EndSectionLayout;
use showroom::engine::{Property, Target};
use showroom::events::{NavHovered, NavigateRequest, UserGesture};
use showroom::Showroom;

use crate::theme;

const NAV_MARGIN: f32 = 28.0;
const HEADER_HEIGHT: f32 = 64.0;
const FOOTER_HEIGHT: f32 = 56.0;
const CAR_WIDTH: f32 = 420.0;
const CAR_HEIGHT: f32 = 120.0;

// =============================================================================
// Geometry helpers
// =============================================================================

/// Height of the pinned container in points.
pub fn pinned_height(screen_height: f32, height_vh: f32) -> f32 {
    screen_height * (height_vh / 100.0).clamp(0.0, 1.0)
}

/// `rect` with `top` and `bottom` percent of its height clipped away.
pub fn clip_insets(rect: egui::Rect, top: f32, bottom: f32) -> egui::Rect {
    let h = rect.height();
    let min_y = rect.min.y + h * top.clamp(0.0, 100.0) / 100.0;
    let max_y = (rect.max.y - h * bottom.clamp(0.0, 100.0) / 100.0).max(min_y);
    egui::Rect::from_min_max(egui::pos2(rect.min.x, min_y), egui::pos2(rect.max.x, max_y))
}

/// Effective opacity of a navigation item.
pub fn nav_alpha(visible: f32, opacity: f32) -> f32 {
    if visible < 0.5 {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    }
}

/// Vertical centre of navigation row `index` inside `rect`.
fn nav_row_y(rect: egui::Rect, index: usize) -> f32 {
    let step = rect.height() / SECTION_COUNT as f32;
    rect.min.y + step * (index as f32 + 0.5)
}

// =============================================================================
// System
// =============================================================================

#[allow(clippy::too_many_arguments)]
pub fn page_ui(
    mut contexts: EguiContexts,
    showroom: Option<Res<Showroom>>,
    catalog: Res<SectionCatalog>,
    end: Res<EndSectionLayout>,
    mut hovered: Local<Option<usize>>,
    mut navigate: EventWriter<NavigateRequest>,
    mut gestures: EventWriter<UserGesture>,
    mut hovers: EventWriter<NavHovered>,
) {
    let Some(showroom) = showroom else {
        return;
    };
    let ctx = contexts.ctx_mut();
    let screen = ctx.screen_rect();
    let pinned = egui::Rect::from_min_size(
        screen.min,
        egui::vec2(screen.width(), pinned_height(screen.height(), end.height_vh)),
    );

    egui::Area::new(egui::Id::new("showroom_page"))
        .fixed_pos(screen.min)
        .order(egui::Order::Background)
        .show(ctx, |ui| {
            ui.expand_to_include_rect(screen);
            let painter = ui.painter().clone();

            painter.rect_filled(screen, egui::CornerRadius::ZERO, theme::END_BG);
            painter.rect_filled(pinned, egui::CornerRadius::ZERO, theme::PAGE_BG);

            let pinned_painter = painter.with_clip_rect(pinned);
            draw_backgrounds(&pinned_painter, &showroom, &catalog, pinned);

            let body = pinned.translate(egui::vec2(0.0, showroom.value(Target::Body, Property::OffsetYPx)));
            draw_car(&pinned_painter, &showroom, body);
            draw_headings(&pinned_painter, &showroom, &catalog, body);

            let now_hovered = draw_navigation(
                ui,
                &pinned_painter,
                &showroom,
                &catalog,
                pinned,
                &mut navigate,
                &mut gestures,
            );
            if let Some(index) = now_hovered.filter(|_| now_hovered != *hovered) {
                hovers.send(NavHovered { index });
            }
            *hovered = now_hovered;

            draw_header(&pinned_painter, &showroom, pinned);
            draw_footer(&pinned_painter, &showroom, pinned);

            if end.blur {
                pinned_painter.rect_filled(
                    pinned,
                    egui::CornerRadius::ZERO,
                    theme::faded(theme::BLUR_VEIL, end.progress * 2.0),
                );
            }

            draw_end_section(&painter, screen, pinned);
        });
}

// =============================================================================
// Layers
// =============================================================================

fn draw_backgrounds(
    painter: &egui::Painter,
    showroom: &Showroom,
    catalog: &SectionCatalog,
    pinned: egui::Rect,
) {
    // The active background wipes in over the one fading out.
    let mut order: Vec<usize> = (0..SECTION_COUNT).collect();
    order.sort_by_key(|&section| showroom.value(Target::Background(section), Property::Active) >= 0.5);

    for section in order {
        let bg = Target::Background(section);
        let opacity = showroom.value(bg, Property::Opacity);
        if opacity <= 0.0 {
            continue;
        }
        let shift = pinned.height() * showroom.value(bg, Property::OffsetYPercent) / 100.0;
        let rect = clip_insets(
            pinned.translate(egui::vec2(0.0, shift)),
            showroom.value(bg, Property::ClipTop),
            showroom.value(bg, Property::ClipBottom),
        );
        let accent = catalog.get(section).map(|c| c.accent).unwrap_or([40, 40, 40]);
        painter.rect_filled(
            rect,
            egui::CornerRadius::ZERO,
            theme::faded(theme::accent_fill(accent), opacity),
        );
    }
}

fn draw_car(painter: &egui::Painter, showroom: &Showroom, body: egui::Rect) {
    let shift = |target| CAR_WIDTH * showroom.value(target, Property::OffsetXPercent) / 100.0;
    let base = egui::pos2(
        body.center().x - CAR_WIDTH / 2.0 + shift(Target::CarBody),
        body.max.y - FOOTER_HEIGHT - CAR_HEIGHT - 40.0,
    );

    let hull = egui::Rect::from_min_size(
        base + egui::vec2(0.0, CAR_HEIGHT * 0.4),
        egui::vec2(CAR_WIDTH, CAR_HEIGHT * 0.4),
    );
    let cabin = egui::Rect::from_min_size(
        base + egui::vec2(CAR_WIDTH * 0.25, CAR_HEIGHT * 0.1),
        egui::vec2(CAR_WIDTH * 0.45, CAR_HEIGHT * 0.32),
    );
    painter.rect_filled(cabin, egui::CornerRadius::same(18), theme::CAR_GLASS);
    painter.rect_filled(hull, egui::CornerRadius::same(12), theme::CAR_BODY);
    for wheel_x in [0.2, 0.8] {
        painter.circle_filled(
            egui::pos2(hull.min.x + CAR_WIDTH * wheel_x, hull.max.y),
            CAR_HEIGHT * 0.16,
            theme::TYRE,
        );
    }

    let lamp_y = hull.center().y - 6.0;
    let front = showroom.value(Target::FrontLamp, Property::Opacity);
    let rear = showroom.value(Target::RearLamp, Property::Opacity);
    painter.circle_filled(
        egui::pos2(hull.min.x + 8.0 + shift(Target::FrontLamp), lamp_y),
        7.0,
        theme::faded(theme::FRONT_LAMP, front),
    );
    painter.circle_filled(
        egui::pos2(hull.max.x - 8.0 + shift(Target::RearLamp), lamp_y),
        6.0,
        theme::faded(theme::REAR_LAMP, rear),
    );
}

fn draw_headings(
    painter: &egui::Painter,
    showroom: &Showroom,
    catalog: &SectionCatalog,
    body: egui::Rect,
) {
    let font = egui::FontId::proportional(theme::FONT_HERO);
    let line_top = body.min.y + HEADER_HEIGHT + body.height() * 0.12;

    for section in 0..SECTION_COUNT {
        let content = Target::Content(section);
        if showroom.value(content, Property::Visible) < 0.5 {
            continue;
        }
        let content_opacity = showroom.value(content, Property::Opacity);
        let Some(entry) = catalog.get(section) else {
            continue;
        };

        let Some(split) = showroom.navigator().split(section) else {
            painter.text(
                egui::pos2(body.center().x, line_top),
                egui::Align2::CENTER_TOP,
                &entry.heading,
                font.clone(),
                theme::faded(theme::TEXT, content_opacity),
            );
            continue;
        };

        let space = painter.layout_no_wrap(" ".to_owned(), font.clone(), theme::TEXT).size().x;
        let galleys: Vec<_> = split
            .words
            .iter()
            .map(|word| painter.layout_no_wrap(word.clone(), font.clone(), theme::TEXT))
            .collect();
        let total: f32 = galleys.iter().map(|g| g.size().x).sum::<f32>()
            + space * galleys.len().saturating_sub(1) as f32;
        let line_height = galleys.first().map_or(theme::FONT_HERO, |g| g.size().y);

        let mut x = body.center().x - total / 2.0;
        for (word, galley) in galleys.into_iter().enumerate() {
            let target = Target::Word { section, word };
            let offset = line_height * showroom.value(target, Property::OffsetYPercent) / 100.0;
            let opacity = content_opacity * showroom.value(target, Property::Opacity);
            let width = galley.size().x;
            let mask = egui::Rect::from_min_size(
                egui::pos2(x, line_top),
                egui::vec2(width, line_height),
            );
            painter.with_clip_rect(mask.intersect(painter.clip_rect())).galley(
                egui::pos2(x, line_top + offset),
                galley,
                theme::faded(theme::TEXT, opacity),
            );
            x += width + space;
        }
    }
}

/// Paint both navigation columns and handle clicks. Returns the section
/// whose item is under the pointer.
fn draw_navigation(
    ui: &mut egui::Ui,
    painter: &egui::Painter,
    showroom: &Showroom,
    catalog: &SectionCatalog,
    pinned: egui::Rect,
    navigate: &mut EventWriter<NavigateRequest>,
    gestures: &mut EventWriter<UserGesture>,
) -> Option<usize> {
    let font = egui::FontId::proportional(theme::FONT_NAV);
    let column = egui::Rect::from_min_max(
        egui::pos2(pinned.min.x, pinned.min.y + HEADER_HEIGHT),
        egui::pos2(pinned.max.x, pinned.max.y - FOOTER_HEIGHT),
    );
    let mut under_pointer = None;

    for section in 0..SECTION_COUNT {
        let Some(entry) = catalog.get(section) else {
            continue;
        };
        let y = nav_row_y(column, section);
        let items = [
            (
                Target::LeftNav(section),
                &entry.left_label,
                egui::pos2(column.min.x + NAV_MARGIN, y),
                egui::Align2::LEFT_CENTER,
            ),
            (
                Target::RightNav(section),
                &entry.right_label,
                egui::pos2(column.max.x - NAV_MARGIN, y),
                egui::Align2::RIGHT_CENTER,
            ),
        ];

        for (target, label, anchor, align) in items {
            let alpha = nav_alpha(
                showroom.value(target, Property::Visible),
                showroom.value(target, Property::Opacity),
            );
            if alpha <= 0.0 {
                continue;
            }
            let color = if showroom.value(target, Property::Active) >= 0.5 {
                theme::ACCENT
            } else {
                theme::TEXT
            };
            let rect = painter.text(anchor, align, label, font.clone(), theme::faded(color, alpha));

            let response = ui.interact(
                rect.expand(4.0),
                egui::Id::new(("nav_item", target)),
                egui::Sense::click(),
            );
            if response.hovered() {
                under_pointer = Some(section);
            }
            if response.clicked() {
                gestures.send(UserGesture);
                navigate.send(NavigateRequest { index: section });
            }
        }
    }
    under_pointer
}

fn draw_header(painter: &egui::Painter, showroom: &Showroom, pinned: egui::Rect) {
    let y = pinned.min.y + HEADER_HEIGHT / 2.0 + showroom.value(Target::Header, Property::OffsetYPx);
    painter.text(
        egui::pos2(pinned.min.x + NAV_MARGIN, y),
        egui::Align2::LEFT_CENTER,
        "CARLOT",
        egui::FontId::proportional(theme::FONT_NAV + 3.0),
        theme::TEXT,
    );
    painter.text(
        egui::pos2(pinned.max.x - NAV_MARGIN, y),
        egui::Align2::RIGHT_CENTER,
        "Classic & Collector",
        egui::FontId::proportional(theme::FONT_LABEL),
        theme::faded(theme::TEXT, 0.6),
    );
}

fn draw_footer(painter: &egui::Painter, showroom: &Showroom, pinned: egui::Rect) {
    let y = pinned.max.y - FOOTER_HEIGHT / 2.0 + showroom.value(Target::Footer, Property::OffsetYPx);
    let left = pinned.min.x + NAV_MARGIN;
    let right = pinned.max.x - NAV_MARGIN - 80.0;

    painter.line_segment(
        [egui::pos2(left, y), egui::pos2(right, y)],
        egui::Stroke::new(2.0, theme::TRACK),
    );
    let fill = showroom.value(Target::ProgressFill, Property::WidthPercent).clamp(0.0, 100.0);
    painter.line_segment(
        [egui::pos2(left, y), egui::pos2(left + (right - left) * fill / 100.0, y)],
        egui::Stroke::new(2.0, theme::ACCENT),
    );
    painter.text(
        egui::pos2(pinned.max.x - NAV_MARGIN, y),
        egui::Align2::RIGHT_CENTER,
        format!("{} / {SECTION_COUNT}", showroom.navigator().progress_label()),
        egui::FontId::monospace(theme::FONT_LABEL),
        theme::TEXT,
    );
}

fn draw_end_section(painter: &egui::Painter, screen: egui::Rect, pinned: egui::Rect) {
    if pinned.max.y >= screen.max.y {
        return;
    }
    let area = egui::Rect::from_min_max(egui::pos2(screen.min.x, pinned.max.y), screen.max);
    painter.with_clip_rect(area).text(
        area.center_top() + egui::vec2(0.0, area.height().min(240.0) / 2.0),
        egui::Align2::CENTER_CENTER,
        "Visit the showroom",
        egui::FontId::proportional(theme::FONT_HERO * 0.6),
        theme::TEXT_DARK,
    );
}
