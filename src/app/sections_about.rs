// About section: bio paragraphs beside the contact facts

use eframe::egui::{self, Button, OpenUrl, RichText};

use crate::app::app::Folio;
use crate::content::{self, Glyph};
use crate::ui::components::section_header::section_header;
use crate::ui::responsive::LayoutMode;
use crate::ui::theme;

impl Folio {
    pub fn display_section_about(&mut self, ui: &mut egui::Ui) {
        section_header(ui, "Who I am", "About me");

        let mode = LayoutMode::from_ui(ui);
        if mode.stacked() {
            display_bio(ui);
            ui.add_space(16.0);
            display_facts(ui);
        } else {
            ui.columns(2, |columns| {
                display_bio(&mut columns[0]);
                display_facts(&mut columns[1]);
            });
        }
    }
}

fn display_bio(ui: &mut egui::Ui) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        for paragraph in content::PROFILE.bio.split("\n\n") {
            ui.label(
                RichText::new(paragraph)
                    .size(15.0)
                    .color(theme::TEXT_SECONDARY),
            );
            ui.add_space(10.0);
        }
    });
}

fn display_facts(ui: &mut egui::Ui) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        display_fact(ui, Glyph::MapPin, "Based in", content::PROFILE.location, None);
        ui.add_space(12.0);
        display_fact(
            ui,
            Glyph::Envelope,
            "Email",
            content::PROFILE.email,
            Some(format!("mailto:{}", content::PROFILE.email)),
        );
        ui.add_space(12.0);
        display_fact(ui, Glyph::Phone, "Phone", content::PROFILE.phone, None);
    });
}

fn display_fact(ui: &mut egui::Ui, glyph: Glyph, label: &str, value: &str, url: Option<String>) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(glyph.text())
                .size(20.0)
                .color(theme::ACCENT_GLOW),
        );
        ui.add_space(4.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(label).small().color(theme::TEXT_MUTED));
            match url {
                Some(url) => {
                    let link = ui.add(
                        Button::new(RichText::new(value).size(15.0).color(theme::TEXT_PRIMARY))
                            .frame(false),
                    );
                    if link.clicked() {
                        ui.ctx().open_url(OpenUrl::new_tab(url));
                    }
                }
                None => {
                    ui.label(RichText::new(value).size(15.0).color(theme::TEXT_PRIMARY));
                }
            }
        });
    });
}
