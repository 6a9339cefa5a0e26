// Projects showcase: the main auto-advancing carousel plus thumbnails

use eframe::egui::{
    self, Align2, Button, Color32, FontId, OpenUrl, Rect, RichText, Sense, Stroke, Vec2,
};

use crate::app::app::Folio;
use crate::content;
use crate::paths::PATH_IMAGES;
use crate::ui::components::carousel::{render_carousel, render_thumbnail_strip, CarouselSlide};
use crate::ui::components::section_header::section_header;
use crate::ui::responsive::LayoutMode;
use crate::ui::theme;

impl Folio {
    pub fn display_section_projects(&mut self, ui: &mut egui::Ui) {
        section_header(ui, "Selected work", "Projects");

        let slides: Vec<CarouselSlide<'_>> = content::PROJECTS
            .iter()
            .map(|project| CarouselSlide {
                title: project.title,
                accent: project.accent,
            })
            .collect();

        let mode = LayoutMode::from_ui(ui);
        render_carousel(ui, "projects", &mut self.projects_carousel, &slides, |ui, index| {
            display_project_slide(ui, &content::PROJECTS[index], mode);
        });

        ui.add_space(10.0);
        render_thumbnail_strip(ui, &mut self.projects_carousel, &slides);
    }
}

fn display_project_slide(ui: &mut egui::Ui, project: &content::Project, mode: LayoutMode) {
    if mode.stacked() {
        display_project_visual(ui, project, Vec2::new(ui.available_width() - 8.0, 150.0));
        ui.add_space(8.0);
        display_project_text(ui, project);
    } else {
        ui.horizontal_top(|ui| {
            display_project_visual(ui, project, Vec2::new(260.0, 170.0));
            ui.add_space(14.0);
            ui.vertical(|ui| display_project_text(ui, project));
        });
    }
}

fn display_project_text(ui: &mut egui::Ui, project: &content::Project) {
    ui.label(
        RichText::new(project.title)
            .size(21.0)
            .strong()
            .color(theme::TEXT_PRIMARY),
    );
    ui.add_space(4.0);
    ui.label(
        RichText::new(project.summary)
            .size(14.0)
            .color(theme::TEXT_SECONDARY),
    );

    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        for tag in project.tags {
            display_tag_chip(ui, tag, project.accent);
        }
    });

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        for link in project.links {
            let button = ui.add(
                Button::new(
                    RichText::new(format!("{}  {}", link.kind.glyph().text(), link.kind.label()))
                        .size(13.0)
                        .color(theme::TEXT_PRIMARY),
                )
                .fill(theme::BG_HOVER)
                .corner_radius(14.0),
            );
            if button.clicked() {
                log::info!("opening {}", link.url);
                ui.ctx().open_url(OpenUrl::new_tab(link.url));
            }
        }
    });
}

fn display_tag_chip(ui: &mut egui::Ui, tag: &str, accent: Color32) {
    let text = RichText::new(tag).size(11.5).color(accent);
    let chip = egui::Frame::NONE
        .fill(accent.gamma_multiply(0.12))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 3));
    chip.show(ui, |ui| {
        ui.label(text);
    });
}

/// Screenshot when one is on disk, painted stand-in otherwise.
fn display_project_visual(ui: &mut egui::Ui, project: &content::Project, size: Vec2) {
    let path = PATH_IMAGES.join(project.image);
    if path.is_file() {
        ui.add(
            egui::Image::new(format!("file://{}", path.display()))
                .fit_to_exact_size(size)
                .corner_radius(8.0),
        );
        return;
    }

    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 8.0, project.accent.gamma_multiply(0.16));
    painter.rect_stroke(
        rect,
        8.0,
        Stroke::new(1.0, project.accent.gamma_multiply(0.5)),
        egui::StrokeKind::Inside,
    );
    display_placeholder_glyphs(&painter, rect, project);
}

fn display_placeholder_glyphs(painter: &egui::Painter, rect: Rect, project: &content::Project) {
    let initial = project.title.chars().next().unwrap_or('?');
    painter.text(
        rect.center() - Vec2::new(0.0, 8.0),
        Align2::CENTER_CENTER,
        initial,
        FontId::proportional(rect.height() * 0.38),
        project.accent,
    );
    painter.text(
        rect.center() + Vec2::new(0.0, rect.height() * 0.28),
        Align2::CENTER_CENTER,
        egui_phosphor::regular::IMAGE,
        FontId::proportional(16.0),
        project.accent.gamma_multiply(0.7),
    );
}
