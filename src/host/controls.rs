use raylib::prelude::*;

use image_browser::constants::*;
use image_browser::{Action, ButtonSpec, ControlBar, Controls, StatusLabel};

pub struct RaylibLabel {
    text: String,
}

impl RaylibLabel {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    pub fn render(&self, d: &mut RaylibDrawHandle, origin: Vector2) {
        let y = origin.y as i32 + (CONTROL_HEIGHT - FONT_SIZE) / 2;
        d.draw_text(&self.text, origin.x as i32, y, FONT_SIZE, Color::BLACK);
    }
}

impl StatusLabel for RaylibLabel {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Screen rectangles of the bottom bar, after the status label.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BarRects {
    previous: Rectangle,
    next: Rectangle,
    jump_input: Rectangle,
    jump_button: Rectangle,
}

fn bar_rects(bar: &ControlBar, origin: Vector2) -> BarRects {
    let mut x = origin.x + STATUS_WIDTH as f32;
    let mut place = |width: i32, height: i32| {
        let rect = Rectangle::new(x, origin.y, width as f32, height as f32);
        x += (width + CONTROL_SPACING) as f32;
        rect
    };

    BarRects {
        previous: place(bar.previous.width, bar.previous.height),
        next: place(bar.next.width, bar.next.height),
        jump_input: place(bar.jump_input.width, bar.jump_input.height),
        jump_button: place(bar.jump_button.width, bar.jump_button.height),
    }
}

fn icon_glyph(icon: &str) -> &str {
    match icon {
        "arrow-left" => "<",
        "arrow-right" => ">",
        "search" => "Go",
        other => other,
    }
}

/// Previous/next buttons plus the jump text field and its button.
pub struct RaylibControls {
    bar: ControlBar,
    jump_text: String,
    focused: bool,
}

impl RaylibControls {
    pub fn new(bar: ControlBar) -> Self {
        Self {
            bar,
            jump_text: String::new(),
            focused: false,
        }
    }

    fn buttons(&self, rects: &BarRects) -> [(Rectangle, &ButtonSpec); 3] {
        [
            (rects.previous, &self.bar.previous),
            (rects.next, &self.bar.next),
            (rects.jump_button, &self.bar.jump_button),
        ]
    }

    /// Feeds a typed character to the jump field.
    fn type_char(&mut self, c: char) {
        if !c.is_control() && self.jump_text.chars().count() < JUMP_INPUT_MAX_CHARS {
            self.jump_text.push(c);
        }
    }

    /// Reads this frame's input and returns the triggered action, if any.
    pub fn poll(&mut self, rl: &mut RaylibHandle, origin: Vector2) -> Option<Action> {
        let rects = bar_rects(&self.bar, origin);

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse = rl.get_mouse_position();
            self.focused = rects.jump_input.check_collision_point_rec(mouse);
            let clicked = self
                .buttons(&rects)
                .into_iter()
                .find(|(rect, _)| rect.check_collision_point_rec(mouse))
                .map(|(_, spec)| spec.action.clone());
            if clicked.is_some() {
                return clicked;
            }
        }

        if !self.focused {
            return None;
        }

        while let Some(c) = rl.get_char_pressed() {
            self.type_char(c);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE) {
            self.jump_text.pop();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) || rl.is_key_pressed(KeyboardKey::KEY_KP_ENTER) {
            return Some(Action::JumpSubmitted(self.jump_text.clone()));
        }
        None
    }

    pub fn render(&self, d: &mut RaylibDrawHandle, origin: Vector2) {
        let rects = bar_rects(&self.bar, origin);
        let mouse = d.get_mouse_position();
        let text_y = |rect: Rectangle| rect.y as i32 + (rect.height as i32 - FONT_SIZE) / 2;

        for (rect, spec) in self.buttons(&rects) {
            let hovered = rect.check_collision_point_rec(mouse);
            let fill = if hovered { Color::LIGHTGRAY } else { Color::new(238, 238, 238, 255) };
            d.draw_rectangle_rec(rect, fill);
            d.draw_rectangle_lines_ex(rect, 1.0, Color::GRAY);

            let glyph = icon_glyph(spec.icon);
            let glyph_width = glyph.len() as i32 * FONT_SIZE / 2;
            let glyph_x = rect.x as i32 + (rect.width as i32 - glyph_width) / 2;
            d.draw_text(glyph, glyph_x, text_y(rect), FONT_SIZE, Color::BLACK);

            if hovered {
                d.draw_text(spec.tooltip, rect.x as i32, rect.y as i32 - FONT_SIZE, FONT_SIZE / 2 + 4, Color::DARKGRAY);
            }
        }

        let input = rects.jump_input;
        d.draw_rectangle_rec(input, Color::WHITE);
        let outline = if self.focused { Color::SKYBLUE } else { Color::GRAY };
        d.draw_rectangle_lines_ex(input, 1.0, outline);

        let font = FONT_SIZE - 4;
        let (text, color) = if self.jump_text.is_empty() && !self.focused {
            (self.bar.jump_input.placeholder, Color::GRAY)
        } else {
            (self.jump_text.as_str(), Color::BLACK)
        };
        let y = input.y as i32 + (input.height as i32 - font) / 2;
        d.draw_text(text, input.x as i32 + 4, y, font, color);
    }
}

impl Controls for RaylibControls {
    fn jump_text(&self) -> &str {
        &self.jump_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_are_laid_out_left_to_right() {
        let bar = ControlBar::standard();
        let rects = bar_rects(&bar, Vector2::new(8.0, 100.0));

        assert_eq!(rects.previous.x, 8.0 + STATUS_WIDTH as f32);
        assert_eq!(rects.next.x, rects.previous.x + (BUTTON_WIDTH + CONTROL_SPACING) as f32);
        assert_eq!(rects.jump_input.x, rects.next.x + (BUTTON_WIDTH + CONTROL_SPACING) as f32);
        assert_eq!(rects.jump_button.x, rects.jump_input.x + (JUMP_INPUT_WIDTH + CONTROL_SPACING) as f32);
        assert_eq!(rects.jump_input.width, 150.0);
        assert!(
            [rects.previous, rects.next, rects.jump_input, rects.jump_button]
                .iter()
                .all(|r| r.y == 100.0 && r.height == 28.0)
        );
    }

    #[test]
    fn jump_field_filters_and_limits_input() {
        let mut controls = RaylibControls::new(ControlBar::standard());
        assert_eq!(controls.jump_text(), "");

        for c in "12\n3".chars() {
            controls.type_char(c);
        }
        assert_eq!(controls.jump_text(), "123");

        for _ in 0..100 {
            controls.type_char('9');
        }
        assert_eq!(controls.jump_text().len(), JUMP_INPUT_MAX_CHARS);
    }

    #[test]
    fn icon_names_map_to_glyphs() {
        assert_eq!(icon_glyph("arrow-left"), "<");
        assert_eq!(icon_glyph("search"), "Go");
        assert_eq!(icon_glyph("star"), "star");
    }

    #[test]
    fn label_keeps_last_text() {
        let mut label = RaylibLabel::new("Image [1/2]:");
        label.set_text("Image [2/2]:");
        assert_eq!(label.text(), "Image [2/2]:");
    }
}
