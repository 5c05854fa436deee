use ndarray::{Array3, s};
use tracing::debug;

use crate::core::grid::PixelGrid;
use crate::error::{Error, Result};
use crate::types::{BoundingBox, Extent};

/// Offsets that center `content` inside `target`.
///
/// Floor division on both axes: an odd leftover puts the extra pixel on the
/// right/bottom side.
pub fn centering_offset(content: Extent, target: Extent) -> Result<(u32, u32)> {
    if !target.contains(content) {
        return Err(exceeds(content, target));
    }
    Ok((
        (target.width() - content.width()) / 2,
        (target.height() - content.height()) / 2,
    ))
}

/// Copy the `bbox` region of `grid` into a new fully transparent canvas of
/// `target` size, centered. Pixels are copied verbatim.
///
/// Fails if the box falls outside the grid or does not fit `target`.
pub fn composite_centered(grid: &PixelGrid, bbox: BoundingBox, target: Extent) -> Result<PixelGrid> {
    if bbox.right > grid.width() || bbox.bottom > grid.height() {
        return Err(Error::Processing(format!(
            "bounding box {:?} outside {}x{} grid",
            bbox,
            grid.width(),
            grid.height()
        )));
    }
    let content = bbox.extent()?;
    let (offset_x, offset_y) = centering_offset(content, target)?;

    debug!(
        "Compositing {} content into {} canvas at offset ({}, {})",
        content, target, offset_x, offset_y
    );

    let (left, top, right, bottom) = (
        bbox.left as usize,
        bbox.top as usize,
        bbox.right as usize,
        bbox.bottom as usize,
    );
    let (ox, oy) = (offset_x as usize, offset_y as usize);
    let (cw, ch) = (content.width() as usize, content.height() as usize);

    let mut canvas = Array3::<u8>::zeros((target.height() as usize, target.width() as usize, 4));
    canvas
        .slice_mut(s![oy..oy + ch, ox..ox + cw, ..])
        .assign(&grid.as_array().slice(s![top..bottom, left..right, ..]));

    PixelGrid::from_array(canvas)
}

fn exceeds(content: Extent, target: Extent) -> Error {
    Error::ContentExceedsTarget {
        content_width: content.width(),
        content_height: content.height(),
        target_width: target.width(),
        target_height: target.height(),
    }
}
