//! Seams between the browser and whatever UI toolkit hosts it.
//!
//! The browser never draws anything itself. A host implements [`Toolkit`] to hand
//! out a render surface, a status label and the navigation controls, and turns
//! user input into [`Action`]s that it feeds back to the browser.

use crate::constants::*;
use crate::image::DecodedImage;

/// A user action coming from one of the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    /// The jump button was clicked; the browser reads the text field itself.
    JumpClicked,
    /// The text field was submitted with this text.
    JumpSubmitted(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceOptions {
    /// Show axis ticks and a frame around the image.
    pub keep_axis: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub action: Action,
    pub tooltip: &'static str,
    /// FontAwesome-style icon name, hosts may map it to a glyph.
    pub icon: &'static str,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputSpec {
    pub placeholder: &'static str,
    pub width: i32,
    pub height: i32,
}

/// Layout of the bottom bar, left to right after the status label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlBar {
    pub previous: ButtonSpec,
    pub next: ButtonSpec,
    pub jump_input: TextInputSpec,
    pub jump_button: ButtonSpec,
}

impl ControlBar {
    pub fn standard() -> Self {
        let button = |action: Action, tooltip: &'static str, icon: &'static str| ButtonSpec {
            action,
            tooltip,
            icon,
            width: BUTTON_WIDTH,
            height: CONTROL_HEIGHT,
        };

        Self {
            previous: button(Action::Previous, PREVIOUS_TOOLTIP, "arrow-left"),
            next: button(Action::Next, NEXT_TOOLTIP, "arrow-right"),
            jump_input: TextInputSpec {
                placeholder: JUMP_PLACEHOLDER,
                width: JUMP_INPUT_WIDTH,
                height: CONTROL_HEIGHT,
            },
            jump_button: button(Action::JumpClicked, JUMP_TOOLTIP, "search"),
        }
    }

    pub fn buttons(&self) -> [&ButtonSpec; 3] {
        [&self.previous, &self.next, &self.jump_button]
    }
}

/// The visible canvas that shows the current image.
pub trait RenderSurface {
    /// Full initial draw, including axes when they are kept.
    fn draw(&mut self, image: &DecodedImage);

    /// Swaps the displayed pixels without rebuilding axes or layout.
    fn set_data(&mut self, image: &DecodedImage);
}

pub trait StatusLabel {
    fn set_text(&mut self, text: &str);
    fn text(&self) -> &str;
}

pub trait Controls {
    /// Current contents of the jump-to-index text field.
    fn jump_text(&self) -> &str;
}

/// Factory for the UI elements a browser needs.
pub trait Toolkit {
    type Surface: RenderSurface;
    type Label: StatusLabel;
    type Controls: Controls;

    fn create_surface(&mut self, options: SurfaceOptions) -> Self::Surface;
    fn create_label(&mut self, text: &str) -> Self::Label;
    fn create_controls(&mut self, bar: &ControlBar) -> Self::Controls;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bar_matches_control_geometry() {
        let bar = ControlBar::standard();
        for button in bar.buttons() {
            assert_eq!((button.width, button.height), (80, 28));
        }
        assert_eq!((bar.jump_input.width, bar.jump_input.height), (150, 28));
        assert_eq!(bar.jump_input.placeholder, "Type in image index");
    }

    #[test]
    fn buttons_are_wired_to_their_actions() {
        let bar = ControlBar::standard();
        let actions: Vec<_> = bar.buttons().iter().map(|b| b.action.clone()).collect();
        assert_eq!(actions, vec![Action::Previous, Action::Next, Action::JumpClicked]);
        assert_eq!(bar.previous.icon, "arrow-left");
        assert_eq!(bar.jump_button.tooltip, "Skip to image.");
    }
}
