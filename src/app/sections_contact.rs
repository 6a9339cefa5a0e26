// Contact section: pitch column and the simulated-send form

use eframe::egui::{self, Button, RichText, Spinner, TextEdit, Vec2};
use egui_phosphor::regular as icons;

use crate::app::app::Folio;
use crate::content::{self, Glyph};
use crate::ui::components::contact_form::Submission;
use crate::ui::components::section_header::section_header;
use crate::ui::components::social_row::social_row;
use crate::ui::responsive::LayoutMode;
use crate::ui::theme;

impl Folio {
    pub fn display_section_contact(&mut self, ui: &mut egui::Ui) {
        section_header(ui, "Say hello", "Contact");

        let mode = LayoutMode::from_ui(ui);
        if mode.stacked() {
            self.display_contact_pitch(ui);
            ui.add_space(16.0);
            self.display_contact_form(ui);
        } else {
            ui.columns(2, |columns| {
                self.display_contact_pitch(&mut columns[0]);
                self.display_contact_form(&mut columns[1]);
            });
        }
    }

    fn display_contact_pitch(&mut self, ui: &mut egui::Ui) {
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("Have a project in mind?")
                    .size(19.0)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.add_space(6.0);
            ui.label(
                RichText::new(
                    "I am open for freelance work and interesting collaborations. \
                     Tell me what you are building and I will reply within a day \
                     or two.",
                )
                .size(14.0)
                .color(theme::TEXT_SECONDARY),
            );

            ui.add_space(14.0);
            for (glyph, value) in [
                (Glyph::Envelope, content::PROFILE.email),
                (Glyph::MapPin, content::PROFILE.location),
            ] {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(glyph.text())
                            .size(17.0)
                            .color(theme::ACCENT_GLOW),
                    );
                    ui.label(RichText::new(value).size(14.0).color(theme::TEXT_PRIMARY));
                });
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| social_row(ui, 19.0));
        });
    }

    fn display_contact_form(&mut self, ui: &mut egui::Ui) {
        theme::elevated_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());

            let sending = self.contact.is_sending();

            ui.scope(|ui| {
                if sending {
                    ui.disable();
                }

                ui.label(RichText::new("Name").small().color(theme::TEXT_MUTED));
                ui.add(
                    TextEdit::singleline(&mut self.contact.name)
                        .hint_text("Your name")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                ui.label(RichText::new("Email").small().color(theme::TEXT_MUTED));
                ui.add(
                    TextEdit::singleline(&mut self.contact.email)
                        .hint_text("you@example.org")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                ui.label(RichText::new("Message").small().color(theme::TEXT_MUTED));
                ui.add(
                    TextEdit::multiline(&mut self.contact.message)
                        .hint_text("What are we making?")
                        .desired_rows(5)
                        .desired_width(f32::INFINITY),
                );
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let label = if sending { "Sending" } else { "Send message" };
                let button = ui.add_enabled(
                    !sending,
                    Button::new(
                        RichText::new(format!("{}  {label}", icons::PAPER_PLANE_TILT))
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .fill(theme::ACCENT)
                    .min_size(Vec2::new(140.0, 36.0))
                    .corner_radius(18.0),
                );
                if sending {
                    ui.add(Spinner::new().size(16.0).color(theme::ACCENT_GLOW));
                }
                if button.clicked() && self.contact.submit() {
                    log::info!("contact form accepted, starting simulated send");
                }
            });

            if let Some(error) = self.contact.error {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("{}  {}", icons::WARNING, error.message()))
                        .size(13.0)
                        .color(theme::WARNING),
                );
            }

            if matches!(self.contact.submission(), Submission::Notice { .. }) {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!(
                        "{}  Message sent. I will get back to you soon.",
                        icons::CHECK_CIRCLE
                    ))
                    .size(13.0)
                    .color(theme::SUCCESS),
                );
            }
        });
    }
}
