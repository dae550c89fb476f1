use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use log::{error, info};
use raylib::prelude::*;

mod host;
mod loader;

use image_browser::ImageBrowser;
use image_browser::constants::*;

use crate::host::{Layout, RaylibToolkit};
use crate::loader::load_images;

/// Browse the images of a directory with previous/next buttons and jump-to-index.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory containing png, jpg, bmp or gif images
    image_directory: PathBuf,

    /// Show axis ticks and a frame around the image
    #[arg(long)]
    keep_axis: bool,

    /// Initial window width
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    /// Initial window height
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    // --- Load images before opening the window ---
    let images = load_images(&args.image_directory)?;
    info!("Loaded {} images from {}", images.len(), args.image_directory.display());

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Image Browser")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut toolkit = RaylibToolkit;
    let mut browser = ImageBrowser::new(images, args.keep_axis, &mut toolkit)?;
    let mut last_error: Option<String> = None;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let layout = Layout::for_screen(rl.get_screen_width(), rl.get_screen_height());

        if let Some(action) = browser.controls_mut().poll(&mut rl, layout.bar_origin) {
            match browser.dispatch(action) {
                Ok(_) => last_error = None,
                Err(e) => last_error = Some(e.to_string()),
            }
        }
        browser.surface_mut().sync(&mut rl, &thread)?;

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::WHITE);

        browser.surface().render(&mut d, layout.canvas);
        browser.status().render(&mut d, layout.bar_origin);
        browser.controls().render(&mut d, layout.bar_origin);

        if let Some(message) = &last_error {
            let origin = layout.message_origin;
            d.draw_text(message, origin.x as i32, origin.y as i32, FONT_SIZE - 4, Color::RED);
        }
    }

    Ok(())
}
