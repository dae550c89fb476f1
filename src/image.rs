use std::fmt;
use std::sync::Arc;

use crate::error::{BrowserError, Result};

/// Channel layout of a decoded pixel buffer. Always 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Gray,
    Rgb,
    Rgba,
}

impl PixelFormat {
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Gray => 1,
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }

    /// Maps a channel count to a format. Anything other than 1, 3 or 4 is not a displayable image.
    pub fn from_channels(channels: usize) -> Option<Self> {
        match channels {
            1 => Some(PixelFormat::Gray),
            3 => Some(PixelFormat::Rgb),
            4 => Some(PixelFormat::Rgba),
            _ => None,
        }
    }
}

/// An in-memory, row-major pixel buffer that is ready to be rendered.
///
/// The only way to obtain one is through a validating constructor, so holding a
/// `DecodedImage` is proof that the buffer matches its declared dimensions.
/// Pixels are shared, so cloning is cheap.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    format: PixelFormat,
    pixels: Arc<[u8]>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(BrowserError::invalid_input(format!(
                "image dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }

        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(BrowserError::invalid_input(format!(
                "image dimensions {}x{} exceed {}",
                width,
                height,
                i32::MAX
            )));
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(format.channels()))
            .ok_or_else(|| {
                BrowserError::invalid_input(format!(
                    "{}x{} {:?} image is too large to address",
                    width, height, format
                ))
            })?;
        if pixels.len() != expected {
            return Err(BrowserError::invalid_input(format!(
                "{}x{} {:?} image needs {} bytes, buffer has {}",
                width,
                height,
                format,
                expected,
                pixels.len()
            )));
        }

        Ok(Self {
            width,
            height,
            format,
            pixels: pixels.into(),
        })
    }

    /// Interprets a raw `height x width x channels` byte array as an image.
    ///
    /// Fails unless the channel count is 1, 3 or 4 and the length matches.
    pub fn from_raw(width: u32, height: u32, channels: usize, pixels: Vec<u8>) -> Result<Self> {
        let format = PixelFormat::from_channels(channels).ok_or_else(|| {
            BrowserError::invalid_input(format!(
                "{} channels is not a decoded image layout",
                channels
            ))
        })?;
        Self::new(width, height, format, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Expands the buffer to RGBA8, the layout GPU textures expect.
    pub fn to_rgba(&self) -> Vec<u8> {
        match self.format {
            PixelFormat::Rgba => self.pixels.to_vec(),
            PixelFormat::Rgb => self
                .pixels
                .chunks_exact(3)
                .flat_map(|px| [px[0], px[1], px[2], u8::MAX])
                .collect(),
            PixelFormat::Gray => self
                .pixels
                .iter()
                .flat_map(|&v| [v, v, v, u8::MAX])
                .collect(),
        }
    }
}

// Pixels omitted
impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}
