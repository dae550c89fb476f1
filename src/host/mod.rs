//! raylib implementation of the browser's toolkit seams.

mod controls;
mod surface;

use raylib::prelude::*;

use image_browser::constants::*;
use image_browser::{ControlBar, SurfaceOptions, Toolkit};

pub use controls::{RaylibControls, RaylibLabel};
pub use surface::RaylibSurface;

/// Height of the bottom bar: one row of controls plus a line for error messages.
pub const BAR_HEIGHT: i32 = CONTROL_HEIGHT + FONT_SIZE + BAR_PADDING * 3;

/// Window regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub canvas: Rectangle,
    pub bar_origin: Vector2,
    pub message_origin: Vector2,
}

impl Layout {
    pub fn for_screen(width: i32, height: i32) -> Self {
        let canvas_height = (height - BAR_HEIGHT).max(0);
        Self {
            canvas: Rectangle::new(0.0, 0.0, width as f32, canvas_height as f32),
            bar_origin: Vector2::new(BAR_PADDING as f32, (canvas_height + BAR_PADDING) as f32),
            message_origin: Vector2::new(
                BAR_PADDING as f32,
                (canvas_height + BAR_PADDING * 2 + CONTROL_HEIGHT) as f32,
            ),
        }
    }
}

pub struct RaylibToolkit;

impl Toolkit for RaylibToolkit {
    type Surface = RaylibSurface;
    type Label = RaylibLabel;
    type Controls = RaylibControls;

    fn create_surface(&mut self, options: SurfaceOptions) -> RaylibSurface {
        RaylibSurface::new(options)
    }

    fn create_label(&mut self, text: &str) -> RaylibLabel {
        RaylibLabel::new(text)
    }

    fn create_controls(&mut self, bar: &ControlBar) -> RaylibControls {
        RaylibControls::new(bar.clone())
    }
}
