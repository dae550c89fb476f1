use anyhow::{Result, anyhow};
use log::debug;
use raylib::prelude::*;

use image_browser::constants::*;
use image_browser::{DecodedImage, RenderSurface, SurfaceOptions};

/// Canvas backed by a single GPU texture.
///
/// `draw`/`set_data` only queue pixels; [`RaylibSurface::sync`] uploads them on the
/// render thread. The texture is reused while image dimensions stay the same.
pub struct RaylibSurface {
    options: SurfaceOptions,
    texture: Option<Texture2D>,
    pending: Option<DecodedImage>,
}

impl RaylibSurface {
    pub fn new(options: SurfaceOptions) -> Self {
        Self {
            options,
            texture: None,
            pending: None,
        }
    }

    pub fn sync(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<()> {
        let Some(image) = self.pending.take() else {
            return Ok(());
        };
        let (width, height) = (image.width() as i32, image.height() as i32);

        let reusable = self
            .texture
            .as_ref()
            .is_some_and(|t| t.width() == width && t.height() == height);
        if !reusable {
            let blank = Image::gen_image_color(width, height, Color::BLANK);
            let texture = rl
                .load_texture_from_image(thread, &blank)
                .map_err(|e| anyhow!("Failed to create {}x{} texture: {}", width, height, e))?;
            debug!("Allocated {}x{} texture", width, height);
            self.texture = Some(texture);
        }

        if let Some(texture) = self.texture.as_mut() {
            texture
                .update_texture(&image.to_rgba())
                .map_err(|e| anyhow!("Failed to upload image pixels: {}", e))?;
        }
        Ok(())
    }

    pub fn render(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        let Some(texture) = &self.texture else {
            return;
        };

        let area = if self.options.keep_axis {
            let margin = AXIS_MARGIN as f32;
            Rectangle::new(
                area.x + margin,
                area.y + margin * 0.5,
                (area.width - margin * 1.5).max(0.0),
                (area.height - margin * 1.5).max(0.0),
            )
        } else {
            area
        };

        let dest = fit_rect(area, texture.width() as f32, texture.height() as f32);
        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );

        if self.options.keep_axis {
            draw_axes(d, dest, texture.width() as u32, texture.height() as u32);
        }
    }
}

impl RenderSurface for RaylibSurface {
    fn draw(&mut self, image: &DecodedImage) {
        self.texture = None;
        self.pending = Some(image.clone());
    }

    fn set_data(&mut self, image: &DecodedImage) {
        self.pending = Some(image.clone());
    }
}

/// Largest rectangle with the image's aspect ratio centered inside `area`.
fn fit_rect(area: Rectangle, width: f32, height: f32) -> Rectangle {
    let scale = (area.width / width).min(area.height / height).max(0.0);
    let (w, h) = (width * scale, height * scale);
    Rectangle::new(
        area.x + (area.width - w) * 0.5,
        area.y + (area.height - h) * 0.5,
        w,
        h,
    )
}

/// Tick values in pixel coordinates: multiples of 1, 2 or 5 times a power of ten.
fn tick_values(extent: u32, target_count: u32) -> Vec<u32> {
    if extent == 0 || target_count == 0 {
        return Vec::new();
    }

    let raw = extent as f64 / target_count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude)
        .max(1.0) as u32;

    (0..extent).step_by(step as usize).collect()
}

fn draw_axes(d: &mut RaylibDrawHandle, dest: Rectangle, width: u32, height: u32) {
    d.draw_rectangle_lines_ex(dest, 1.0, Color::BLACK);

    let font = FONT_SIZE / 2;
    let sx = dest.width / width as f32;
    let sy = dest.height / height as f32;
    let bottom = (dest.y + dest.height) as i32;
    let left = dest.x as i32;

    for v in tick_values(width, TICK_TARGET_COUNT) {
        let x = (dest.x + (v as f32 + 0.5) * sx) as i32;
        d.draw_line(x, bottom, x, bottom + TICK_LENGTH, Color::BLACK);
        d.draw_text(&v.to_string(), x - font / 2, bottom + TICK_LENGTH + 2, font, Color::DARKGRAY);
    }
    for v in tick_values(height, TICK_TARGET_COUNT) {
        let y = (dest.y + (v as f32 + 0.5) * sy) as i32;
        d.draw_line(left - TICK_LENGTH, y, left, y, Color::BLACK);
        d.draw_text(&v.to_string(), left - AXIS_MARGIN + 2, y - font / 2, font, Color::DARKGRAY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_fills_width() {
        let dest = fit_rect(Rectangle::new(0.0, 0.0, 400.0, 400.0), 200.0, 100.0);
        assert_eq!((dest.width, dest.height), (400.0, 200.0));
        assert_eq!((dest.x, dest.y), (0.0, 100.0));
    }

    #[test]
    fn tall_image_fills_height() {
        let dest = fit_rect(Rectangle::new(10.0, 0.0, 300.0, 100.0), 50.0, 100.0);
        assert_eq!((dest.width, dest.height), (50.0, 100.0));
        assert_eq!(dest.x, 10.0 + 125.0);
    }

    #[test]
    fn ticks_use_round_steps() {
        assert_eq!(tick_values(1000, 6), vec![0, 200, 400, 600, 800]);
        assert_eq!(tick_values(64, 6), vec![0, 20, 40, 60]);
        assert_eq!(tick_values(3, 6), vec![0, 1, 2]);
        assert!(tick_values(0, 6).is_empty());
    }

    #[test]
    fn draw_resets_texture_while_set_data_keeps_it() {
        let image = DecodedImage::new(1, 1, image_browser::PixelFormat::Gray, vec![7]).unwrap();
        let mut surface = RaylibSurface::new(SurfaceOptions { keep_axis: false });
        surface.set_data(&image);
        assert_eq!(surface.pending.as_ref(), Some(&image));
        surface.draw(&image);
        assert!(surface.texture.is_none());
    }
}
