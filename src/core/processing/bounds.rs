use ndarray::ArrayView2;
use tracing::debug;

use crate::core::grid::PixelGrid;
use crate::types::BoundingBox;

/// Tight bounding box of all pixels with alpha > 0, or `None` when the
/// grid is fully transparent.
///
/// Builds the row and column alpha projections in a single pass over the
/// grid, then reads the first/last occupied index from each projection.
pub fn detect_content_bounds(grid: &PixelGrid) -> Option<BoundingBox> {
    let (rows, cols) = alpha_projections(grid.alpha());

    let top = rows.iter().position(|&hit| hit)?;
    let bottom = rows.iter().rposition(|&hit| hit)? + 1;
    let left = cols.iter().position(|&hit| hit)?;
    let right = cols.iter().rposition(|&hit| hit)? + 1;

    let bbox = BoundingBox {
        left: left as u32,
        top: top as u32,
        right: right as u32,
        bottom: bottom as u32,
    };
    debug!(
        "Content bounds in {}x{} grid: {:?}",
        grid.width(),
        grid.height(),
        bbox
    );
    Some(bbox)
}

/// Per-row and per-column "contains a content pixel" flags.
fn alpha_projections(alpha: ArrayView2<'_, u8>) -> (Vec<bool>, Vec<bool>) {
    let (height, width) = alpha.dim();
    let mut rows = vec![false; height];
    let mut cols = vec![false; width];

    for (y, row) in alpha.outer_iter().enumerate() {
        for (x, &a) in row.iter().enumerate() {
            if a > 0 {
                rows[y] = true;
                cols[x] = true;
            }
        }
    }

    (rows, cols)
}
