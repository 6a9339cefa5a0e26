//! Palette and chrome for the whole app
//!
//! Dark, warm-neutral surfaces with a single crimson accent. Everything that
//! paints a color imports it from here so the sections stay consistent.

use eframe::egui::{self, Color32, CornerRadius, FontId, Stroke, TextStyle};

// === Surfaces ===
pub const BG_DARK: Color32 = Color32::from_rgb(10, 10, 12); // page background
pub const BG_MID: Color32 = Color32::from_rgb(18, 18, 21); // cards, navbar
pub const BG_LIGHT: Color32 = Color32::from_rgb(28, 28, 32); // borders, inputs
pub const BG_HOVER: Color32 = Color32::from_rgb(38, 38, 43);

// === Text ===
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(237, 234, 228);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(178, 174, 166);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(122, 119, 111);

// === Accent (crimson) ===
pub const ACCENT: Color32 = Color32::from_rgb(201, 42, 14);
pub const ACCENT_DIM: Color32 = Color32::from_rgb(143, 31, 11);
pub const ACCENT_GLOW: Color32 = Color32::from_rgb(240, 74, 42);

// === Status ===
pub const SUCCESS: Color32 = Color32::from_rgb(63, 185, 80);
pub const WARNING: Color32 = Color32::from_rgb(210, 153, 34);

pub fn separator_color() -> Color32 {
    Color32::from_rgb(40, 40, 46)
}

/// Stroke used on the keyboard-focused carousel region
pub fn focus_stroke() -> Stroke {
    Stroke::new(2.0, ACCENT_GLOW)
}

/// Standard card: mid surface, hairline border, rounded
pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(BG_MID)
        .stroke(Stroke::new(1.0, BG_LIGHT))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(16))
}

/// Card that sits above others (carousel container, contact form)
pub fn elevated_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(BG_MID)
        .stroke(Stroke::new(1.0, BG_HOVER))
        .corner_radius(14.0)
        .inner_margin(egui::Margin::same(20))
}

/// Fixed navbar strip
pub fn nav_frame(opaque: bool) -> egui::Frame {
    let fill = if opaque {
        BG_MID
    } else {
        Color32::from_rgba_premultiplied(18, 18, 21, 160)
    };
    egui::Frame::NONE
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(16, 10))
}

/// Install fonts (Phosphor glyphs) and the dark visual style
pub fn apply_theme(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Fill);
    ctx.set_fonts(fonts);

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_DARK;
    visuals.window_fill = BG_MID;
    visuals.extreme_bg_color = BG_DARK;
    visuals.faint_bg_color = BG_MID;
    visuals.hyperlink_color = ACCENT_GLOW;
    visuals.selection.bg_fill = ACCENT_DIM;
    visuals.selection.stroke = Stroke::new(1.0, TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_MID;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BG_LIGHT);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);

    visuals.widgets.inactive.bg_fill = BG_LIGHT;
    visuals.widgets.inactive.weak_bg_fill = BG_LIGHT;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.corner_radius = CornerRadius::same(6);

    visuals.widgets.hovered.bg_fill = BG_HOVER;
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT_DIM);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, TEXT_PRIMARY);
    visuals.widgets.hovered.corner_radius = CornerRadius::same(6);

    visuals.widgets.active.bg_fill = ACCENT_DIM;
    visuals.widgets.active.weak_bg_fill = ACCENT_DIM;
    visuals.widgets.active.fg_stroke = Stroke::new(1.5, TEXT_PRIMARY);
    visuals.widgets.active.corner_radius = CornerRadius::same(6);

    visuals.widgets.open.bg_fill = BG_HOVER;
    visuals.widgets.open.weak_bg_fill = BG_HOVER;

    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.text_styles.insert(TextStyle::Heading, FontId::proportional(30.0));
        style.text_styles.insert(TextStyle::Body, FontId::proportional(15.0));
        style.text_styles.insert(TextStyle::Button, FontId::proportional(15.0));
        style.text_styles.insert(TextStyle::Small, FontId::proportional(12.0));
        style.text_styles.insert(TextStyle::Monospace, FontId::monospace(14.0));
    });
}
