//! A small image browser: previous/next navigation, jump-to-index and a status label
//! over a fixed list of decoded images, hosted by any toolkit that implements
//! [`toolkit::Toolkit`].

pub mod constants;
pub mod error;
pub mod image;
pub mod index;
pub mod toolkit;
pub mod widget;

pub use error::{BrowserError, Result};
pub use image::{DecodedImage, PixelFormat};
pub use index::{IndexChange, NavigableImageIndex};
pub use toolkit::{
    Action, ButtonSpec, ControlBar, Controls, RenderSurface, StatusLabel, SurfaceOptions, TextInputSpec,
    Toolkit,
};
pub use widget::{ImageBrowser, status_text};
