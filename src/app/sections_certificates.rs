// Certificates carousel

use eframe::egui::{self, Align2, FontId, RichText, Sense, Stroke, Vec2};
use egui_phosphor::fill as icons_fill;

use crate::app::app::Folio;
use crate::content;
use crate::paths::PATH_IMAGES;
use crate::ui::components::carousel::{render_carousel, CarouselSlide};
use crate::ui::components::section_header::section_header;
use crate::ui::theme;

impl Folio {
    pub fn display_section_certificates(&mut self, ui: &mut egui::Ui) {
        section_header(ui, "Proof of study", "Certificates");

        let slides: Vec<CarouselSlide<'_>> = content::CERTIFICATES
            .iter()
            .map(|certificate| CarouselSlide {
                title: certificate.title,
                accent: certificate.accent,
            })
            .collect();

        render_carousel(
            ui,
            "certificates",
            &mut self.certificates_carousel,
            &slides,
            |ui, index| display_certificate_slide(ui, &content::CERTIFICATES[index]),
        );
    }
}

fn display_certificate_slide(ui: &mut egui::Ui, certificate: &content::Certificate) {
    ui.vertical_centered(|ui| {
        display_certificate_visual(ui, certificate);
        ui.add_space(10.0);
        ui.label(
            RichText::new(certificate.title)
                .size(19.0)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        ui.label(
            RichText::new(certificate.issuer)
                .size(14.0)
                .color(theme::TEXT_SECONDARY),
        );
        ui.label(
            RichText::new(certificate.date)
                .small()
                .color(theme::TEXT_MUTED),
        );
    });
}

fn display_certificate_visual(ui: &mut egui::Ui, certificate: &content::Certificate) {
    let path = PATH_IMAGES.join(certificate.image);
    if path.is_file() {
        ui.add(
            egui::Image::new(format!("file://{}", path.display()))
                .fit_to_exact_size(Vec2::new(300.0, 170.0))
                .corner_radius(8.0),
        );
        return;
    }

    // Painted seal in the certificate's accent
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(84.0), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.circle_filled(rect.center(), 38.0, certificate.accent.gamma_multiply(0.16));
    painter.circle_stroke(
        rect.center(),
        38.0,
        Stroke::new(2.0, certificate.accent.gamma_multiply(0.6)),
    );
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        icons_fill::MEDAL,
        FontId::proportional(36.0),
        certificate.accent,
    );
}
