use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::grid::PixelGrid;
use crate::core::processing::bounds::detect_content_bounds;
use crate::core::processing::composite::{centering_offset, composite_centered};
use crate::core::processing::pow2::fit_power_of_two;
use crate::error::{Error, Result};
use crate::io::{GridReader, GridWriter};
use crate::types::{BoundingBox, Extent, SizingPolicy};

/// A repacked image plus the geometry that produced it.
#[derive(Debug, Clone)]
pub struct CroppedImage {
    pub grid: PixelGrid,
    pub source: Extent,
    pub content: BoundingBox,
    pub offset: (u32, u32),
}

/// Terminal state of one image. Empty content is a normal outcome, not an error.
#[derive(Debug)]
pub enum Outcome {
    Produced(CroppedImage),
    SkippedEmpty,
    Failed(Error),
}

impl Outcome {
    pub fn is_produced(&self) -> bool {
        matches!(self, Outcome::Produced(_))
    }
}

/// Canvas size for `content` under `policy`.
pub fn target_extent(content: Extent, policy: SizingPolicy) -> Result<Extent> {
    match policy {
        SizingPolicy::PerImagePowerOfTwo => fit_power_of_two(content),
        SizingPolicy::FixedTarget(target) => Ok(target),
    }
}

/// Detect, size and composite one decoded grid. No I/O.
pub fn process_grid(grid: &PixelGrid, policy: SizingPolicy) -> Outcome {
    let Some(content) = detect_content_bounds(grid) else {
        return Outcome::SkippedEmpty;
    };
    match crop_to_policy(grid, content, policy) {
        Ok(cropped) => Outcome::Produced(cropped),
        Err(e) => Outcome::Failed(e),
    }
}

fn crop_to_policy(grid: &PixelGrid, content: BoundingBox, policy: SizingPolicy) -> Result<CroppedImage> {
    let content_extent = content.extent()?;
    let target = target_extent(content_extent, policy)?;
    let offset = centering_offset(content_extent, target)?;
    let output = composite_centered(grid, content, target)?;
    Ok(CroppedImage {
        grid: output,
        source: grid.extent(),
        content,
        offset,
    })
}

/// Destination for `input` inside `output_dir`: same stem, `.png` extension.
pub fn output_path_for(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| Error::InvalidArgument {
        arg: "input",
        value: input.display().to_string(),
    })?;
    let mut name = stem.to_os_string();
    name.push(".png");
    Ok(output_dir.join(name))
}

/// Report one image's outcome: produced and skipped at info, failures at warn.
pub fn log_outcome(input: &Path, outcome: &Outcome) {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());

    match outcome {
        Outcome::Produced(cropped) => info!(
            "Processed {}: {} -> {}",
            name,
            cropped.source,
            cropped.grid.extent()
        ),
        Outcome::SkippedEmpty => info!("Skipping {} - completely transparent", name),
        Outcome::Failed(e) => warn!("Error processing {:?}: {}", input, e),
    }
}

/// Per-image orchestration: decode, detect, size, composite, encode.
///
/// Holds the run's read-only sizing policy and its codec collaborators.
/// Every failure is captured in the returned `Outcome`.
#[derive(Debug, Clone)]
pub struct ImageProcessor<R, W> {
    reader: R,
    writer: W,
    policy: SizingPolicy,
}

impl<R: GridReader, W: GridWriter> ImageProcessor<R, W> {
    pub fn new(reader: R, writer: W, policy: SizingPolicy) -> Self {
        Self {
            reader,
            writer,
            policy,
        }
    }

    pub fn policy(&self) -> SizingPolicy {
        self.policy
    }

    /// Process `input` and write the result into `output_dir`.
    pub fn process(&self, input: &Path, output_dir: &Path) -> Outcome {
        let outcome = match output_path_for(input, output_dir) {
            Ok(output) => self.process_to(input, &output),
            Err(e) => Outcome::Failed(e),
        };
        log_outcome(input, &outcome);
        outcome
    }

    /// Process `input` and write the result to exactly `output`.
    pub fn process_to(&self, input: &Path, output: &Path) -> Outcome {
        let grid = match self.reader.decode(input) {
            Ok(grid) => grid,
            Err(source) => {
                return Outcome::Failed(Error::Decode {
                    path: input.to_path_buf(),
                    source,
                });
            }
        };

        let outcome = process_grid(&grid, self.policy);
        drop(grid);

        if let Outcome::Produced(cropped) = &outcome {
            debug!(
                "{:?}: content {:?} placed at {:?} in {}",
                input,
                cropped.content,
                cropped.offset,
                cropped.grid.extent()
            );
            if let Err(source) = self.writer.encode(&cropped.grid, output) {
                return Outcome::Failed(Error::Encode {
                    path: output.to_path_buf(),
                    source,
                });
            }
        }
        outcome
    }
}
