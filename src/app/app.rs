// Core app structure and main update loop

use std::time::Duration;

use eframe::egui::{self, CentralPanel, Frame, LayerId, ScrollArea, TopBottomPanel};

use crate::app::config::{save_cfg, FolioConfig};
use crate::content;
use crate::ui::components::carousel::{CarouselEvent, CarouselState};
use crate::ui::components::contact_form::ContactForm;
use crate::ui::components::noise::NoiseOverlay;
use crate::ui::motion::{self, Blob, Reveal, SmoothScroll};
use crate::ui::theme;
use crate::ui::SectionId;

const SECTION_COUNT: usize = SectionId::ALL.len();

/// Scroll offset past which the navbar turns opaque.
const NAV_SOLID_AFTER: f32 = 50.0;

/// A section starts revealing once its top rises into the lower
/// fifth of the viewport.
const REVEAL_TRIGGER: f32 = 0.8;

pub struct Folio {
    pub options: FolioConfig,

    // Scroll state. Spans are content-space (top, bottom) pairs measured
    // while laying the page out, one frame behind what is on screen.
    pub scroll_offset: f32,
    pub viewport_height: f32,
    pub section_spans: [(f32, f32); SECTION_COUNT],
    pub glide: SmoothScroll,

    // Navbar state derived from the spans each frame
    pub active_section: SectionId,
    pub nav_progress: [f32; SECTION_COUNT],

    // Section entrance animations
    pub reveals: [Reveal; SECTION_COUNT],

    // Auto-advancing showcases
    pub projects_carousel: CarouselState,
    pub certificates_carousel: CarouselState,

    // Contact form machine
    pub contact: ContactForm,

    // Hero decoration
    pub blobs: Vec<Blob>,
    pub clock: f32,
    pub pointer_parallax: egui::Vec2,

    // Film grain overlay, lazily uploaded
    pub grain: NoiseOverlay,
}

impl Folio {
    pub fn new(options: FolioConfig) -> Self {
        content::assert_valid();

        // Reduced motion renders everything settled from the first frame.
        // Otherwise the hero is visible immediately and the rest fades in
        // as it scrolls into view.
        let reveals = if options.reduced_motion {
            [Reveal::shown(); SECTION_COUNT]
        } else {
            core::array::from_fn(|i| if i == 0 { Reveal::shown() } else { Reveal::hidden() })
        };

        Folio {
            scroll_offset: 0.0,
            viewport_height: 720.0,
            section_spans: [(0.0, 0.0); SECTION_COUNT],
            glide: SmoothScroll::default(),
            active_section: SectionId::Home,
            nav_progress: [0.0; SECTION_COUNT],
            reveals,
            projects_carousel: CarouselState::new(
                content::PROJECTS.len(),
                Duration::from_secs_f32(options.projects_cycle_secs),
            ),
            certificates_carousel: CarouselState::new(
                content::CERTIFICATES.len(),
                Duration::from_secs_f32(options.certificates_cycle_secs),
            ),
            contact: ContactForm::default(),
            blobs: motion::scatter_blobs(4),
            clock: 0.0,
            pointer_parallax: egui::Vec2::ZERO,
            grain: NoiseOverlay::new(),
            options,
        }
    }

    /// Begin gliding so that `section` lands just under the navbar.
    pub fn scroll_to(&mut self, section: SectionId) {
        let (top, _) = self.section_spans[section.index()];
        self.glide.request(self.scroll_offset, top - 12.0);
    }

    fn tick_machines(&mut self, dt: Duration, dt_secs: f32) {
        self.clock += dt_secs;

        self.projects_carousel.apply(CarouselEvent::Tick(dt));
        self.certificates_carousel.apply(CarouselEvent::Tick(dt));
        self.contact.tick(dt);

        for (index, reveal) in self.reveals.iter_mut().enumerate() {
            let (top, bottom) = self.section_spans[index];
            let measured = bottom > top;
            if measured && top < self.scroll_offset + self.viewport_height * REVEAL_TRIGGER {
                reveal.trigger();
            }
            reveal.tick(dt_secs);
        }
    }

    fn display_page(&mut self, ui: &mut egui::Ui) {
        let origin_y = ui.min_rect().top();

        for section in SectionId::ALL {
            let top = ui.cursor().top() - origin_y;
            let reveal = self.reveals[section.index()];

            ui.scope(|ui| {
                ui.multiply_opacity(reveal.alpha());

                // Constrain long lines on very wide windows
                let width = ui.available_width().min(1060.0);
                let margin = ((ui.available_width() - width) / 2.0).max(0.0);
                ui.horizontal(|ui| {
                    ui.add_space(margin);
                    ui.vertical(|ui| {
                        ui.set_width(width);
                        match section {
                            SectionId::Home => self.display_section_hero(ui),
                            SectionId::About => self.display_section_about(ui),
                            SectionId::Skills => self.display_section_skills(ui),
                            SectionId::Services => self.display_section_services(ui),
                            SectionId::Projects => self.display_section_projects(ui),
                            SectionId::Certificates => self.display_section_certificates(ui),
                            SectionId::Contact => self.display_section_contact(ui),
                        }
                    });
                });
            });

            let bottom = ui.cursor().top() - origin_y;
            self.section_spans[section.index()] = (top, bottom);

            ui.add_space(72.0);
        }

        self.display_footer(ui);
    }
}

impl eframe::App for Folio {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Injected time for every animation and machine. Clamped so a
        // minimized window does not replay minutes of carousel laps on
        // return.
        let dt_secs = ctx.input(|input| input.stable_dt).min(0.1);
        let dt = Duration::from_secs_f32(dt_secs);

        self.tick_machines(dt, dt_secs);

        // Spans are from the previous layout pass
        self.active_section = SectionId::ALL
            [motion::active_section(self.scroll_offset, self.viewport_height, &self.section_spans)];
        for (index, &(top, bottom)) in self.section_spans.iter().enumerate() {
            self.nav_progress[index] = if bottom > top {
                motion::section_progress(self.scroll_offset, self.viewport_height, top, bottom)
            } else {
                0.0
            };
        }

        if let Some(pos) = ctx.input(|input| input.pointer.latest_pos()) {
            let screen = ctx.screen_rect();
            self.pointer_parallax = egui::vec2(
                (pos.x - screen.center().x) / screen.width().max(1.0),
                (pos.y - screen.center().y) / screen.height().max(1.0),
            );
        }

        // A wheel or drag takes the page back from the glide
        if ctx.input(|input| input.raw_scroll_delta.y != 0.0) {
            self.glide.cancel();
        }

        ctx.layer_painter(LayerId::background()).rect_filled(
            ctx.screen_rect(),
            0.0,
            theme::BG_DARK,
        );

        let navbar_solid = self.scroll_offset > NAV_SOLID_AFTER;
        TopBottomPanel::top("navbar")
            .frame(theme::nav_frame(navbar_solid))
            .show_separator_line(false)
            .show(ctx, |ui| self.display_navbar(ui));

        CentralPanel::default()
            .frame(Frame::NONE.fill(theme::BG_DARK))
            .show(ctx, |ui| {
                self.viewport_height = ui.available_height();

                let mut scroll_area = ScrollArea::vertical().id_salt("page").auto_shrink(false);
                if let Some(offset) = self.glide.tick(dt_secs) {
                    scroll_area = scroll_area.vertical_scroll_offset(offset);
                }

                let output = scroll_area.show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    self.display_page(ui);
                });
                self.scroll_offset = output.state.offset.y;
            });

        self.display_scroll_top_button(ctx);

        if self.options.film_grain {
            self.grain.paint(ctx);
        }

        self.handle_keys(ctx);

        if ctx.input(|input| input.focused) {
            ctx.request_repaint_after(Duration::from_millis(33)); // 30 fps
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(err) = save_cfg(&self.options) {
            log::warn!("could not save settings: {err:#}");
        }
    }
}
