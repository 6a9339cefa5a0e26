use eframe::egui::{self, Button, OpenUrl, RichText, WidgetInfo, WidgetType};

use crate::content;

/// Row of social links, sized for wherever it is embedded.
pub fn social_row(ui: &mut egui::Ui, size: f32) {
    for social in content::SOCIALS {
        let button = ui
            .add(
                Button::new(
                    RichText::new(social.glyph.text())
                        .size(size)
                        .color(social.accent),
                )
                .frame(false),
            )
            .on_hover_text(social.name);
        button.widget_info(|| WidgetInfo::labeled(WidgetType::Link, true, social.name));

        if button.clicked() {
            log::info!("opening {}", social.url);
            ui.ctx().open_url(OpenUrl::new_tab(social.url));
        }
    }
}
