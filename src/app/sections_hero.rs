// Landing section: greeting, animated name, calls to action, drifting blobs

use eframe::egui::{
    self, Align, Align2, Button, Color32, FontId, Label, Layout, Pos2, RichText, Sense, Stroke,
    UiBuilder, Vec2,
};
use egui_phosphor::regular as icons;

use crate::app::app::Folio;
use crate::content;
use crate::ui::components::social_row::social_row;
use crate::ui::motion::ease_out_cubic;
use crate::ui::responsive::LayoutMode;
use crate::ui::theme;
use crate::ui::SectionId;

/// Seconds the avatar takes to slide in after launch.
const ENTRANCE_SECS: f32 = 0.9;

/// Accents cycled across the background blobs.
const BLOB_COLORS: [Color32; 4] = [
    theme::ACCENT,
    Color32::from_rgb(59, 130, 246),
    Color32::from_rgb(139, 92, 246),
    Color32::from_rgb(20, 184, 166),
];

impl Folio {
    pub fn display_section_hero(&mut self, ui: &mut egui::Ui) {
        let mode = LayoutMode::from_ui(ui);
        let height = (self.viewport_height * 0.82).max(420.0);
        let (region, _) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());

        let painter = ui.painter_at(region);
        for (index, blob) in self.blobs.iter().enumerate() {
            let center = blob.center(region, self.clock, self.pointer_parallax);
            let color = BLOB_COLORS[index % BLOB_COLORS.len()];
            painter.circle_filled(center, blob.radius * region.height(), color.gamma_multiply(0.10));
        }

        if !mode.is_narrow() {
            self.display_hero_avatar(ui, region);
        }

        let text_rect = region.shrink2(Vec2::new(28.0, 0.0));
        let mut column = ui.new_child(
            UiBuilder::new()
                .max_rect(text_rect)
                .layout(Layout::top_down(Align::Min)),
        );
        column.add_space(height * 0.18);

        column.label(
            RichText::new("Hi, my name is")
                .size(15.0)
                .strong()
                .color(theme::ACCENT_GLOW),
        );
        column.add_space(6.0);
        display_animated_name(&mut column, mode.hero_title_size());
        column.add_space(2.0);
        column.label(
            RichText::new(content::PROFILE.role)
                .size(22.0)
                .color(theme::TEXT_SECONDARY),
        );
        column.add_space(10.0);
        column.label(
            RichText::new(content::PROFILE.tagline)
                .size(15.0)
                .italics()
                .color(theme::TEXT_MUTED),
        );

        column.add_space(26.0);
        column.horizontal(|ui| {
            let work = ui.add(
                Button::new(
                    RichText::new(format!("{}  View my work", icons::BRIEFCASE))
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .fill(theme::ACCENT)
                .min_size(Vec2::new(150.0, 40.0))
                .corner_radius(20.0),
            );
            if work.clicked() {
                self.scroll_to(SectionId::Projects);
            }

            ui.add_space(6.0);
            let talk = ui.add(
                Button::new(
                    RichText::new(format!("{}  Get in touch", icons::PAPER_PLANE_TILT))
                        .color(theme::TEXT_PRIMARY),
                )
                .fill(theme::BG_LIGHT)
                .stroke(Stroke::new(1.0, theme::ACCENT_DIM))
                .min_size(Vec2::new(150.0, 40.0))
                .corner_radius(20.0),
            );
            if talk.clicked() {
                self.scroll_to(SectionId::Contact);
            }
        });

        column.add_space(18.0);
        column.horizontal(|ui| social_row(ui, 20.0));

        // Bobbing scroll hint at the bottom edge of the region
        let bob = (self.clock * 2.0).sin() * 4.0;
        let hint = Pos2::new(region.center().x, region.bottom() - 26.0 + bob);
        painter.text(
            hint,
            Align2::CENTER_BOTTOM,
            icons::MOUSE_SIMPLE,
            FontId::proportional(22.0),
            theme::TEXT_MUTED,
        );
        painter.text(
            hint + Vec2::new(0.0, 16.0),
            Align2::CENTER_BOTTOM,
            "scroll",
            FontId::proportional(11.0),
            theme::TEXT_MUTED,
        );
    }

    /// Medallion with initials, ring and one orbiting dot, sliding in from
    /// the right on launch.
    fn display_hero_avatar(&self, ui: &egui::Ui, region: egui::Rect) {
        let entrance = ease_out_cubic((self.clock / ENTRANCE_SECS).min(1.0));
        let slide = (1.0 - entrance) * 120.0;
        let radius = (region.height() * 0.22).min(130.0);
        let center = Pos2::new(
            region.right() - radius - region.width() * 0.10 + slide,
            region.center().y - region.height() * 0.06,
        ) + self.pointer_parallax * -10.0;

        let painter = ui.painter_at(region);
        painter.circle_filled(center, radius, theme::BG_MID.gamma_multiply(entrance));
        painter.circle_stroke(
            center,
            radius,
            Stroke::new(3.0, theme::ACCENT.gamma_multiply(entrance)),
        );
        painter.circle_stroke(
            center,
            radius + 12.0,
            Stroke::new(1.0, theme::ACCENT_DIM.gamma_multiply(entrance * 0.6)),
        );

        let initials: String = content::PROFILE
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect();
        painter.text(
            center,
            Align2::CENTER_CENTER,
            initials,
            FontId::proportional(radius * 0.62),
            theme::TEXT_PRIMARY.gamma_multiply(entrance),
        );

        let angle = self.clock * 0.6;
        let orbit = Pos2::new(
            center.x + (radius + 12.0) * angle.cos(),
            center.y + (radius + 12.0) * angle.sin(),
        );
        painter.circle_filled(orbit, 4.0, theme::ACCENT_GLOW.gamma_multiply(entrance));
    }
}

/// The name, one label per letter so each can heat toward the accent color
/// while hovered.
fn display_animated_name(ui: &mut egui::Ui, size: f32) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for (index, letter) in content::PROFILE.name.chars().enumerate() {
            if letter == ' ' {
                ui.add_space(size * 0.28);
                continue;
            }

            let id = ui.id().with(("hero_letter", index));
            let was_hovered = ui.data(|data| data.get_temp::<bool>(id).unwrap_or(false));
            let heat = ui.ctx().animate_bool_with_time(id, was_hovered, 0.15);
            let color = lerp_color(theme::TEXT_PRIMARY, theme::ACCENT_GLOW, heat);

            let response = ui.add(
                Label::new(RichText::new(letter).size(size).strong().color(color))
                    .sense(Sense::hover()),
            );
            ui.data_mut(|data| data.insert_temp(id, response.hovered()));
        }
    });
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}
