//! Film-grain overlay
//!
//! A small tile of random-alpha white pixels, uploaded once and repeated
//! across the window above all panels. Subtle, but it kills the flatness of
//! large dark fills.

use eframe::egui::{
    self, Color32, ColorImage, Rect, TextureFilter, TextureHandle, TextureOptions,
    TextureWrapMode, pos2,
};

const TILE: usize = 128;
const MAX_GRAIN_ALPHA: u8 = 14;

pub struct NoiseOverlay {
    texture: Option<TextureHandle>,
}

impl NoiseOverlay {
    pub fn new() -> Self {
        Self { texture: None }
    }

    pub fn paint(&mut self, ctx: &egui::Context) {
        let texture = self.texture.get_or_insert_with(|| {
            ctx.load_texture(
                "grain",
                grain_tile(),
                TextureOptions {
                    magnification: TextureFilter::Nearest,
                    minification: TextureFilter::Nearest,
                    wrap_mode: TextureWrapMode::Repeat,
                    mipmap_mode: None,
                },
            )
        });

        let screen = ctx.screen_rect();
        let uv = Rect::from_min_max(
            pos2(0.0, 0.0),
            pos2(screen.width() / TILE as f32, screen.height() / TILE as f32),
        );
        ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("grain_overlay"),
        ))
        .image(texture.id(), screen, uv, Color32::WHITE);
    }
}

fn grain_tile() -> ColorImage {
    let mut rgba = vec![0u8; TILE * TILE * 4];
    for pixel in rgba.chunks_exact_mut(4) {
        let alpha = fastrand::u8(0..=MAX_GRAIN_ALPHA);
        pixel[0] = 255;
        pixel[1] = 255;
        pixel[2] = 255;
        pixel[3] = alpha;
    }
    ColorImage::from_rgba_unmultiplied([TILE, TILE], &rgba)
}
