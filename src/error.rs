//! Error types for the image browser.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors raised while building or driving an [`ImageBrowser`](crate::ImageBrowser).
#[derive(Error, Debug)]
pub enum BrowserError {
    /// The image sequence is empty or a buffer is not a decoded image.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input
        reason: String,
    },

    /// The jump-to-index text is not an integer.
    #[error("Invalid index input '{text}': {source}")]
    InvalidIndexInput {
        /// The rejected text, as typed
        text: String,
        #[source]
        source: ParseIntError,
    },
}

impl BrowserError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BrowserError>;
