//! Decoding collaborator: turns a file on disk into an RGBA `PixelGrid`.
//!
//! Any format the `image` crate was built with is accepted; the pixels are
//! always expanded to 8-bit RGBA before they reach the processing core.
use std::path::Path;

use image::{ImageError, ImageReader};
use thiserror::Error;

use crate::core::grid::PixelGrid;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    #[error("file is truncated")]
    Truncated,

    #[error("unsupported format: {0}")]
    Unsupported(String),

    #[error("malformed image data: {0}")]
    Malformed(String),

    #[error("image exceeds decoder limits: {0}")]
    Limits(String),
}

impl From<ImageError> for DecodeError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                DecodeError::Truncated
            }
            ImageError::IoError(e) => DecodeError::Io(e),
            ImageError::Unsupported(e) => DecodeError::Unsupported(e.to_string()),
            ImageError::Limits(e) => DecodeError::Limits(e.to_string()),
            other => DecodeError::Malformed(other.to_string()),
        }
    }
}

/// Source of decoded RGBA grids, addressed by path.
pub trait GridReader {
    fn decode(&self, path: &Path) -> Result<PixelGrid, DecodeError>;
}

/// `GridReader` backed by the `image` crate, sniffing the format from content.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDecoder;

impl GridReader for FileDecoder {
    fn decode(&self, path: &Path) -> Result<PixelGrid, DecodeError> {
        let rgba = ImageReader::open(path)
            .map_err(DecodeError::Io)?
            .with_guessed_format()
            .map_err(DecodeError::Io)?
            .decode()?
            .into_rgba8();
        PixelGrid::try_from(rgba).map_err(|e| DecodeError::Malformed(e.to_string()))
    }
}
