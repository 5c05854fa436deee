use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};
use thiserror::Error;

use crate::core::grid::PixelGrid;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoder error: {0}")]
    Codec(String),
}

impl From<ImageError> for EncodeError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(e) => EncodeError::Io(e),
            other => EncodeError::Codec(other.to_string()),
        }
    }
}

/// Sink accepting a finished grid and a destination path.
pub trait GridWriter {
    fn encode(&self, grid: &PixelGrid, output: &Path) -> Result<(), EncodeError>;
}

/// Writes RGBA8 PNG files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngWriter;

impl GridWriter for PngWriter {
    fn encode(&self, grid: &PixelGrid, output: &Path) -> Result<(), EncodeError> {
        write_rgba_png(output, grid)
    }
}

pub fn write_rgba_png(output: &Path, grid: &PixelGrid) -> Result<(), EncodeError> {
    let pixels = grid.as_array().as_standard_layout();
    let data = pixels
        .as_slice()
        .ok_or_else(|| EncodeError::Codec("pixel buffer is not contiguous".to_string()))?;

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    PngEncoder::new(&mut writer).write_image(
        data,
        grid.width(),
        grid.height(),
        ExtendedColorType::Rgba8,
    )?;
    writer.flush()?;
    Ok(())
}
