// Keyboard shortcuts for moving between sections

use eframe::egui::{self, Key, Modifiers};

use crate::app::app::Folio;
use crate::ui::SectionId;

impl Folio {
    /// Runs after the widgets so a focused text edit keeps its own keys.
    pub fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (page_down, page_up, home, end) = ctx.input_mut(|input| {
            (
                input.consume_key(Modifiers::NONE, Key::PageDown),
                input.consume_key(Modifiers::NONE, Key::PageUp),
                input.consume_key(Modifiers::NONE, Key::Home),
                input.consume_key(Modifiers::NONE, Key::End),
            )
        });

        let current = self.active_section.index();
        if page_down && current + 1 < SectionId::ALL.len() {
            self.scroll_to(SectionId::ALL[current + 1]);
        }
        if page_up && current > 0 {
            self.scroll_to(SectionId::ALL[current - 1]);
        }
        if home {
            self.glide.request(self.scroll_offset, 0.0);
        }
        if end {
            self.scroll_to(SectionId::Contact);
        }
    }
}
