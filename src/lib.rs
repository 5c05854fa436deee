#![doc = r#"
alphacrop — crop RGBA images to their visible content and repack it.

The crate finds the tight bounding box of every pixel with non-zero alpha,
then copies that region into a fresh, fully transparent canvas whose size
follows a sizing policy:

- **individual**: each image gets its own canvas, every axis rounded up to
  the next power of two.
- **uniform**: every image in a batch shares one canvas derived from the
  largest content width and height across the batch, either exact or
  power-of-two rounded.

Content is centered with floor division, so an odd amount of padding puts
the extra pixel on the right/bottom side. Fully transparent images are
skipped, not errors.

Add dependency
--------------
```toml
[dependencies]
alphacrop = "0.1"
```

Crop one in-memory grid
-----------------------
```rust
use alphacrop::{Outcome, PixelGrid, SizingPolicy, process_grid};

fn main() -> alphacrop::Result<()> {
    // 40x20 canvas with a single opaque pixel at (12, 5)
    let mut data = vec![0u8; 40 * 20 * 4];
    let idx = (5 * 40 + 12) * 4;
    data[idx..idx + 4].copy_from_slice(&[255, 0, 0, 255]);
    let grid = PixelGrid::from_rgba(40, 20, data)?;

    match process_grid(&grid, SizingPolicy::PerImagePowerOfTwo) {
        Outcome::Produced(cropped) => assert_eq!(cropped.grid.extent().to_string(), "1x1"),
        Outcome::SkippedEmpty => unreachable!(),
        Outcome::Failed(e) => return Err(e),
    }
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use alphacrop::{ProcessingParams, SizingMode, process_directory_to_path};

fn main() -> alphacrop::Result<()> {
    let params = ProcessingParams {
        mode: SizingMode::Uniform,
        exact: false,
        ..Default::default()
    };

    let report = process_directory_to_path(Path::new("sprites"), Path::new("sprites/cropped"), &params)?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Error handling
--------------
Per-image failures surface as `Outcome::Failed(Error)` and are collected in
`BatchReport::failures`; only setup problems (creating the output directory,
listing the input directory) are returned as `Err`.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — the pixel grid and the detection/fitting/compositing primitives.
- [`types`] — `Extent`, `BoundingBox`, `SizingMode`, `SizingPolicy`.
- [`io`] — decoding, PNG encoding and directory enumeration.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::grid::PixelGrid;
pub use core::params::ProcessingParams;
pub use error::{Error, Result};
pub use types::{BoundingBox, Extent, SizingMode, SizingPolicy, UniformRounding};

// Primitives
pub use core::processing::bounds::detect_content_bounds;
pub use core::processing::composite::{centering_offset, composite_centered};
pub use core::processing::pipeline::{CroppedImage, ImageProcessor, Outcome, process_grid};
pub use core::processing::planner::{BatchSizePlanner, plan_content_extent};
pub use core::processing::pow2::{fit_power_of_two, next_power_of_two};

// Collaborators
pub use io::{DecodeError, EncodeError, FileDecoder, GridReader, GridWriter, PngWriter};

// High-level API re-exports
pub use api::{
    BatchReport, FailedImage, ResolvedPolicy, UniformPlan, plan_uniform_target,
    process_directory_to_path, process_image_to_path, process_images, resolve_policy,
};
