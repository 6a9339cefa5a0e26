mod app;
mod content;
mod paths;
mod ui;

use eframe::egui;

use crate::app::{load_cfg, Folio};
use crate::paths::PATH_IMAGES;

static USAGE_TEXT: &str = "\
Usage: folio [OPTIONS]

A single-window portfolio for the desktop.

Options:
  --fullscreen       Start in fullscreen
  --reduced-motion   Skip entrance animations and start sections visible
  -h, --help         Show this help and exit
";

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut fullscreen = false;
    let mut reduced_motion = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{USAGE_TEXT}");
                std::process::exit(0);
            }
            "--fullscreen" => fullscreen = true,
            "--reduced-motion" => reduced_motion = true,
            unknown => {
                eprintln!("unknown argument: {unknown}\n\n{USAGE_TEXT}");
                std::process::exit(2);
            }
        }
    }

    // Screenshots dropped in here replace the painted slide stand-ins
    if let Err(err) = std::fs::create_dir_all(&*PATH_IMAGES) {
        log::warn!("could not create {}: {err}", PATH_IMAGES.display());
    }

    let mut config = load_cfg();
    config.reduced_motion |= reduced_motion;

    log::info!("starting folio v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_fullscreen(fullscreen)
            .with_icon(window_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "Mara Voss, Front-End Developer",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            cc.egui_ctx.set_zoom_factor(config.zoom_factor);
            crate::ui::theme::apply_theme(&cc.egui_ctx);
            Ok(Box::new(Folio::new(config)))
        }),
    )
}

/// No binary assets ship, so the window icon is drawn at startup: a crimson
/// tile with rounded corners and a pale diagonal slash.
fn window_icon() -> egui::IconData {
    const SIZE: u32 = 64;
    const CORNER: f32 = 14.0;

    let mut img = image::RgbaImage::new(SIZE, SIZE);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if outside_rounded_corner(x as f32 + 0.5, y as f32 + 0.5, SIZE as f32, CORNER) {
            *pixel = image::Rgba([0, 0, 0, 0]);
            continue;
        }

        let t = y as f32 / (SIZE - 1) as f32;
        let mut color = [
            lerp_u8(240, 143, t),
            lerp_u8(74, 31, t),
            lerp_u8(42, 11, t),
        ];
        let diagonal = x as i32 - y as i32;
        if diagonal.abs() <= 5 {
            for (channel, pale) in color.iter_mut().zip([237u8, 234, 228]) {
                *channel = lerp_u8(*channel, pale, 0.85);
            }
        }
        *pixel = image::Rgba([color[0], color[1], color[2], 255]);
    }

    egui::IconData {
        rgba: img.into_raw(),
        width: SIZE,
        height: SIZE,
    }
}

fn outside_rounded_corner(x: f32, y: f32, size: f32, radius: f32) -> bool {
    let cx = x.min(size - x);
    let cy = y.min(size - y);
    cx < radius && cy < radius && {
        let dx = radius - cx;
        let dy = radius - cy;
        dx * dx + dy * dy > radius * radius
    }
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}
