// Skills grid, grouped visually by the category line under each name

use eframe::egui::{self, RichText};

use crate::app::app::Folio;
use crate::content;
use crate::ui::components::section_header::section_header;
use crate::ui::responsive::LayoutMode;
use crate::ui::theme;

impl Folio {
    pub fn display_section_skills(&mut self, ui: &mut egui::Ui) {
        section_header(ui, "What I work with", "Skills");

        let mode = LayoutMode::from_ui(ui);
        let columns = mode.columns(4, 3, 2);

        ui.columns(columns, |columns| {
            for (index, skill) in content::SKILLS.iter().enumerate() {
                let column = &mut columns[index % columns.len()];
                theme::card_frame().show(column, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(skill.glyph.text()).size(24.0).color(skill.accent));
                        ui.add_space(2.0);
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(skill.name)
                                    .size(15.0)
                                    .strong()
                                    .color(theme::TEXT_PRIMARY),
                            );
                            ui.label(
                                RichText::new(skill.category.label())
                                    .small()
                                    .color(theme::TEXT_MUTED),
                            );
                        });
                    });
                });
                column.add_space(8.0);
            }
        });
    }
}
