use tracing::debug;

use crate::core::grid::PixelGrid;
use crate::core::processing::bounds::detect_content_bounds;
use crate::core::processing::pow2::fit_power_of_two;
use crate::error::Result;
use crate::types::{BoundingBox, Extent, UniformRounding};

/// Running per-axis maxima of content extents across a batch.
///
/// Images without content never contribute. Width and height are tracked
/// independently, so the two maxima may come from different images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSizePlanner {
    max_width: u32,
    max_height: u32,
    observed: usize,
}

impl BatchSizePlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one image's detected bounds into the maxima.
    pub fn observe(&mut self, bounds: Option<BoundingBox>) {
        if let Some(bbox) = bounds {
            self.max_width = self.max_width.max(bbox.width());
            self.max_height = self.max_height.max(bbox.height());
            self.observed += 1;
        }
    }

    /// Detect bounds in `grid` and fold them in.
    pub fn observe_grid(&mut self, grid: &PixelGrid) {
        self.observe(detect_content_bounds(grid));
    }

    /// Raw `(max_width, max_height)`; `(0, 0)` until some content is observed.
    pub fn max_content(&self) -> (u32, u32) {
        (self.max_width, self.max_height)
    }

    /// Number of images that contributed content.
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Shared target extent, or `None` when no image had content.
    pub fn target_extent(&self, rounding: UniformRounding) -> Result<Option<Extent>> {
        if self.observed == 0 {
            return Ok(None);
        }
        let exact = Extent::new(self.max_width, self.max_height)?;
        let target = match rounding {
            UniformRounding::Exact => exact,
            UniformRounding::PowerOfTwo => fit_power_of_two(exact)?,
        };
        debug!(
            "Batch maxima {}x{} over {} images -> {} target {}",
            self.max_width, self.max_height, self.observed, rounding, target
        );
        Ok(Some(target))
    }
}

/// Per-axis maximum content extent over `grids`, skipping empty images.
pub fn plan_content_extent<'a, I>(grids: I) -> (u32, u32)
where
    I: IntoIterator<Item = &'a PixelGrid>,
{
    let mut planner = BatchSizePlanner::new();
    for grid in grids {
        planner.observe_grid(grid);
    }
    planner.max_content()
}
