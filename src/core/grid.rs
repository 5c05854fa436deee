//! Owned RGBA pixel grid shared by every processing stage.
//!
//! Pixels live in an `ndarray::Array3<u8>` shaped `(height, width, 4)` in
//! standard (row-major) layout, channels ordered R, G, B, A.
use image::RgbaImage;
use ndarray::{Array3, ArrayView2, Axis};

use crate::error::{Error, Result};
use crate::types::Extent;

/// Index of the alpha channel in the innermost axis.
pub const ALPHA: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Array3<u8>,
    extent: Extent,
}

fn dim_to_u32(value: usize, axis: &str) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| Error::Processing(format!("{axis} {value} does not fit in 32 bits")))
}

impl PixelGrid {
    /// Fully transparent grid of the given extent (every channel zero).
    pub fn transparent(extent: Extent) -> Self {
        Self {
            pixels: Array3::zeros((extent.height() as usize, extent.width() as usize, 4)),
            extent,
        }
    }

    /// Wrap raw interleaved RGBA bytes, row-major.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let extent = Extent::new(width, height)?;
        let pixels = Array3::from_shape_vec((height as usize, width as usize, 4), data)
            .map_err(|e| Error::Processing(format!("RGBA buffer does not match {extent}: {e}")))?;
        Ok(Self { pixels, extent })
    }

    /// Wrap an existing array. The innermost axis must hold four channels.
    pub fn from_array(pixels: Array3<u8>) -> Result<Self> {
        let (rows, cols, channels) = pixels.dim();
        if channels != 4 {
            return Err(Error::Processing(format!(
                "expected 4 channels, got {channels}"
            )));
        }
        let extent = Extent::new(dim_to_u32(cols, "width")?, dim_to_u32(rows, "height")?)?;
        Ok(Self { pixels, extent })
    }

    pub fn width(&self) -> u32 {
        self.extent.width()
    }

    pub fn height(&self) -> u32 {
        self.extent.height()
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// RGBA value at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let (x, y) = (x as usize, y as usize);
        [
            self.pixels[[y, x, 0]],
            self.pixels[[y, x, 1]],
            self.pixels[[y, x, 2]],
            self.pixels[[y, x, 3]],
        ]
    }

    /// Alpha plane as a `(height, width)` view.
    pub fn alpha(&self) -> ArrayView2<'_, u8> {
        self.pixels.index_axis(Axis(2), ALPHA)
    }

    pub fn as_array(&self) -> &Array3<u8> {
        &self.pixels
    }

    /// Convert into an `image` buffer for encoding.
    pub fn into_rgba_image(self) -> Result<RgbaImage> {
        let (width, height) = (self.width(), self.height());
        let data = if self.pixels.is_standard_layout() {
            self.pixels.into_raw_vec()
        } else {
            self.pixels.as_standard_layout().into_owned().into_raw_vec()
        };
        RgbaImage::from_raw(width, height, data).ok_or_else(|| {
            Error::Processing(format!("pixel buffer too small for {width}x{height}"))
        })
    }
}

impl TryFrom<RgbaImage> for PixelGrid {
    type Error = Error;

    fn try_from(image: RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::from_rgba(width, height, image.into_raw())
    }
}
