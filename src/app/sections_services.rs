// Services cards

use eframe::egui::{self, RichText};

use crate::app::app::Folio;
use crate::content;
use crate::ui::components::section_header::section_header;
use crate::ui::responsive::LayoutMode;
use crate::ui::theme;

impl Folio {
    pub fn display_section_services(&mut self, ui: &mut egui::Ui) {
        section_header(ui, "What I can do for you", "Services");

        let mode = LayoutMode::from_ui(ui);
        let columns = mode.columns(3, 2, 1);

        ui.columns(columns, |columns| {
            for (index, service) in content::SERVICES.iter().enumerate() {
                let column = &mut columns[index % columns.len()];
                theme::elevated_frame().show(column, |ui| {
                    ui.set_width(ui.available_width());
                    ui.set_min_height(118.0);
                    ui.label(
                        RichText::new(service.glyph.text())
                            .size(30.0)
                            .color(service.accent),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(service.title)
                            .size(16.0)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(service.blurb)
                            .size(13.0)
                            .color(theme::TEXT_SECONDARY),
                    );
                });
                column.add_space(10.0);
            }
        });
    }
}
