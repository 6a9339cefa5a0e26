// Fixed chrome around the scrolling page: navbar, footer, back-to-top

use eframe::egui::{
    self, Align, Align2, Area, Button, Id, Layout, Order, Rect, RichText, Sense, Stroke, Vec2,
};
use egui_phosphor::regular as icons;

use crate::app::app::Folio;
use crate::content;
use crate::ui::components::social_row::social_row;
use crate::ui::responsive::LayoutMode;
use crate::ui::theme;
use crate::ui::SectionId;

/// Scroll offset past which the back-to-top button appears.
const TOP_BUTTON_AFTER: f32 = 300.0;

impl Folio {
    pub fn display_navbar(&mut self, ui: &mut egui::Ui) {
        let mode = LayoutMode::from_ui(ui);

        ui.horizontal(|ui| {
            ui.add_space(4.0);
            let brand = ui
                .add(
                    Button::new(
                        RichText::new(content::PROFILE.monogram)
                            .size(19.0)
                            .strong()
                            .color(theme::ACCENT_GLOW),
                    )
                    .frame(false),
                )
                .on_hover_text("Back to top");
            if brand.clicked() {
                self.glide.request(self.scroll_offset, 0.0);
            }

            ui.add_space(12.0);

            // Narrow windows keep only the brand and the hire button
            if !mode.is_narrow() {
                for section in SectionId::ALL {
                    self.display_nav_entry(ui, section);
                }
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.add_space(4.0);
                let hire = ui.add(
                    Button::new(RichText::new("Hire me").strong().color(theme::TEXT_PRIMARY))
                        .fill(theme::ACCENT)
                        .min_size(Vec2::new(86.0, 30.0))
                        .corner_radius(15.0),
                );
                if hire.clicked() {
                    self.scroll_to(SectionId::Contact);
                }

                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .small()
                        .weak(),
                );
            });
        });
    }

    /// One navbar label with a read-progress underline beneath it.
    fn display_nav_entry(&mut self, ui: &mut egui::Ui, section: SectionId) {
        let active = self.active_section == section;
        let color = if active {
            theme::TEXT_PRIMARY
        } else {
            theme::TEXT_SECONDARY
        };

        let entry = ui
            .add(
                Button::new(RichText::new(section.label()).size(14.0).color(color)).frame(false),
            )
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        let progress = self.nav_progress[section.index()];
        if progress > 0.0 {
            let base = entry.rect.left_bottom() + Vec2::new(0.0, 1.0);
            let track = Rect::from_min_size(base, Vec2::new(entry.rect.width() * progress, 2.0));
            ui.painter().rect_filled(track, 1.0, theme::ACCENT);
        }

        if entry.clicked() {
            self.scroll_to(section);
        }
    }

    pub fn display_footer(&mut self, ui: &mut egui::Ui) {
        let rule = Rect::from_min_size(
            ui.cursor().left_top(),
            Vec2::new(ui.available_width(), 1.0),
        );
        ui.painter()
            .rect_filled(rule, 0.0, theme::separator_color());
        ui.add_space(28.0);

        let mode = LayoutMode::from_ui(ui);
        let columns = mode.columns(3, 3, 1);

        ui.columns(columns, |columns| {
            columns[0].vertical(|ui| {
                ui.label(
                    RichText::new(content::PROFILE.name)
                        .size(17.0)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.label(
                    RichText::new(content::PROFILE.role)
                        .small()
                        .color(theme::TEXT_MUTED),
                );
            });

            if columns.len() > 1 {
                columns[1].vertical(|ui| {
                    for section in [
                        SectionId::About,
                        SectionId::Projects,
                        SectionId::Certificates,
                        SectionId::Contact,
                    ] {
                        let link = ui.add(
                            Button::new(
                                RichText::new(section.label())
                                    .small()
                                    .color(theme::TEXT_SECONDARY),
                            )
                            .frame(false),
                        );
                        if link.clicked() {
                            self.scroll_to(section);
                        }
                    }
                });

                columns[2].with_layout(Layout::right_to_left(Align::Min), |ui| {
                    social_row(ui, 18.0);
                });
            } else {
                columns[0].add_space(10.0);
                columns[0].horizontal(|ui| social_row(ui, 18.0));
            }
        });

        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(content::PROFILE.copyright)
                    .small()
                    .color(theme::TEXT_MUTED),
            );
        });
        ui.add_space(24.0);
    }

    pub fn display_scroll_top_button(&mut self, ctx: &egui::Context) {
        let visible = self.scroll_offset > TOP_BUTTON_AFTER;
        let alpha = ctx.animate_bool_with_time(Id::new("scroll_top_fade"), visible, 0.2);
        if alpha <= 0.01 {
            return;
        }

        Area::new(Id::new("scroll_top"))
            .order(Order::Foreground)
            .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-24.0, -24.0))
            .show(ctx, |ui| {
                ui.multiply_opacity(alpha);
                let button = ui
                    .add(
                        Button::new(
                            RichText::new(icons::ARROW_UP)
                                .size(18.0)
                                .color(theme::TEXT_PRIMARY),
                        )
                        .fill(theme::BG_LIGHT)
                        .stroke(Stroke::new(1.0, theme::ACCENT_DIM))
                        .min_size(Vec2::splat(44.0))
                        .corner_radius(22.0)
                        .sense(Sense::click()),
                    )
                    .on_hover_text("Back to top");
                if button.clicked() {
                    self.glide.request(self.scroll_offset, 0.0);
                }
            });
    }
}
