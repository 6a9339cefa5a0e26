// Shared section heading: kicker line, title, short accent rule

use eframe::egui::{self, RichText, Sense};

use crate::ui::theme;

pub fn section_header(ui: &mut egui::Ui, kicker: &str, title: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(kicker.to_uppercase())
                .small()
                .strong()
                .color(theme::ACCENT_GLOW),
        );
        ui.add_space(2.0);
        ui.label(
            RichText::new(title)
                .size(30.0)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(8.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(56.0, 3.0), Sense::hover());
        ui.painter().rect_filled(rect, 1.5, theme::ACCENT);
    });
    ui.add_space(28.0);
}
