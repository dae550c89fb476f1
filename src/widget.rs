use std::num::{IntErrorKind, NonZeroUsize};

use log::{debug, info, trace, warn};

use crate::error::{BrowserError, Result};
use crate::image::DecodedImage;
use crate::index::{IndexChange, NavigableImageIndex};
use crate::toolkit::{Action, ControlBar, Controls, RenderSurface, StatusLabel, SurfaceOptions, Toolkit};

/// Label text for the zero-based `index` out of `len` images.
pub fn status_text(index: usize, len: usize) -> String {
    format!("Image [{}/{}]:", index + 1, len)
}

/// Parses jump text as a one-based index. Out-of-range integers saturate.
fn parse_jump_text(text: &str) -> Result<i64> {
    match text.trim().parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(BrowserError::InvalidIndexInput {
                text: text.to_string(),
                source: e,
            }),
        },
    }
}

/// Browses a fixed list of images with previous/next buttons and a jump-to-index field.
///
/// Every move that actually changes the position pushes the new image to the
/// render surface and rewrites the status label; moves that clamp to the current
/// position leave both untouched.
pub struct ImageBrowser<T: Toolkit> {
    images: Vec<DecodedImage>,
    index: NavigableImageIndex,
    keep_axis: bool,

    surface: T::Surface,
    status: T::Label,
    controls: T::Controls,
}

impl<T: Toolkit> ImageBrowser<T> {
    /// Builds the UI through `toolkit` and shows the first image.
    ///
    /// An empty `images` fails before any UI element is created.
    pub fn new(images: Vec<DecodedImage>, keep_axis: bool, toolkit: &mut T) -> Result<Self> {
        let len = NonZeroUsize::new(images.len())
            .ok_or_else(|| BrowserError::invalid_input("list of images cannot be empty"))?;
        let index = NavigableImageIndex::new(len);

        // The initial draw covers the first frame, later moves go through `render_current`.
        let mut surface = toolkit.create_surface(SurfaceOptions { keep_axis });
        surface.draw(&images[0]);
        let status = toolkit.create_label(&status_text(0, len.get()));
        let controls = toolkit.create_controls(&ControlBar::standard());

        info!("Image browser ready with {} images (keep_axis: {})", len, keep_axis);
        Ok(Self {
            images,
            index,
            keep_axis,
            surface,
            status,
            controls,
        })
    }

    pub fn on_previous(&mut self) -> IndexChange {
        let change = self.index.step(-1);
        self.apply(change)
    }

    pub fn on_next(&mut self) -> IndexChange {
        let change = self.index.step(1);
        self.apply(change)
    }

    /// Jumps to the one-based index typed by the user.
    ///
    /// Text that is not an integer fails with [`BrowserError::InvalidIndexInput`]
    /// and leaves the position, image and label as they were.
    pub fn on_jump_submit(&mut self, raw_text: &str) -> Result<IndexChange> {
        let one_based = parse_jump_text(raw_text)?;
        let change = self.index.jump(one_based.saturating_sub(1));
        Ok(self.apply(change))
    }

    /// Jump button handler: submits whatever the text field currently holds.
    pub fn on_jump_clicked(&mut self) -> Result<IndexChange> {
        let text = self.controls.jump_text().to_string();
        self.on_jump_submit(&text)
    }

    /// Routes a host action to its handler. Errors are logged and handed back to
    /// the host for display, the browser stays usable either way.
    pub fn dispatch(&mut self, action: Action) -> Result<IndexChange> {
        let result = match action {
            Action::Previous => Ok(self.on_previous()),
            Action::Next => Ok(self.on_next()),
            Action::JumpClicked => self.on_jump_clicked(),
            Action::JumpSubmitted(text) => self.on_jump_submit(&text),
        };

        if let Err(e) = &result {
            warn!("{}", e);
        }
        result
    }

    /// Pushes the current image to the surface in place and refreshes the label.
    pub fn render_current(&mut self) {
        let current = self.index.current();
        self.surface.set_data(&self.images[current]);
        self.status.set_text(&status_text(current, self.images.len()));
        debug!("Showing image {}/{}", current + 1, self.images.len());
    }

    fn apply(&mut self, change: IndexChange) -> IndexChange {
        if change.changed {
            self.render_current();
        } else {
            trace!("Index stays at {}", change.index);
        }
        change
    }

    pub fn current_index(&self) -> usize {
        self.index.current()
    }

    pub fn current_image(&self) -> &DecodedImage {
        &self.images[self.index.current()]
    }

    pub fn status_text(&self) -> &str {
        self.status.text()
    }

    pub fn keep_axis(&self) -> bool {
        self.keep_axis
    }

    pub fn surface(&self) -> &T::Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut T::Surface {
        &mut self.surface
    }

    pub fn status(&self) -> &T::Label {
        &self.status
    }

    pub fn controls(&self) -> &T::Controls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut T::Controls {
        &mut self.controls
    }
}
