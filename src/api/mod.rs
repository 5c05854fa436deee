//! High-level, ergonomic library API: crop a single file, plan a uniform
//! batch size, and process whole directories into an output directory.
//! Prefer these entrypoints over the low-level processing modules when
//! integrating alphacrop.
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::core::params::ProcessingParams;
use crate::core::processing::pipeline::{ImageProcessor, Outcome, log_outcome, output_path_for};
use crate::core::processing::planner::BatchSizePlanner;
use crate::error::{Error, Result};
use crate::io::{FileDecoder, GridReader, GridWriter, PngWriter, list_source_images};
use crate::types::{Extent, SizingMode, SizingPolicy, UniformRounding};

/// One image that could not be processed.
#[derive(Debug, Clone, Serialize)]
pub struct FailedImage {
    pub path: PathBuf,
    pub reason: String,
}

/// Batch processing report
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub mode: SizingMode,
    /// Shared canvas in uniform mode; `None` in individual mode or when no image had content
    pub target: Option<Extent>,
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub failures: Vec<FailedImage>,
}

impl BatchReport {
    fn record(&mut self, path: &Path, outcome: Outcome) {
        match outcome {
            Outcome::Produced(_) => self.processed += 1,
            Outcome::SkippedEmpty => self.skipped += 1,
            Outcome::Failed(e) => {
                self.errors += 1;
                self.failures.push(FailedImage {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }
}

/// Crop a single file to `output` under `policy` using the default codecs.
pub fn process_image_to_path(input: &Path, output: &Path, policy: SizingPolicy) -> Outcome {
    ImageProcessor::new(FileDecoder, PngWriter, policy).process_to(input, output)
}

/// Result of the uniform planning pass.
#[derive(Debug, Default)]
pub struct UniformPlan {
    /// Shared target, or `None` if no decodable file has content
    pub target: Option<Extent>,
    /// Files that could not be decoded while measuring
    pub failures: Vec<(PathBuf, Error)>,
}

/// Measure `files` and derive the shared uniform target.
///
/// Files that fail to decode are logged, left out of the maxima and
/// returned in `UniformPlan::failures`.
pub fn plan_uniform_target<R: GridReader>(
    files: &[PathBuf],
    reader: &R,
    rounding: UniformRounding,
) -> Result<UniformPlan> {
    let mut planner = BatchSizePlanner::new();
    let mut failures = Vec::new();
    for path in files {
        match reader.decode(path) {
            Ok(grid) => planner.observe_grid(&grid),
            Err(source) => {
                warn!("Error processing {:?} during size calculation: {}", path, source);
                failures.push((
                    path.clone(),
                    Error::Decode {
                        path: path.clone(),
                        source,
                    },
                ));
            }
        }
    }
    Ok(UniformPlan {
        target: planner.target_extent(rounding)?,
        failures,
    })
}

/// Sizing policy for a run, plus any files that already failed while planning.
#[derive(Debug, Default)]
pub struct ResolvedPolicy {
    /// `None` means uniform mode found no content anywhere and the batch is skipped
    pub policy: Option<SizingPolicy>,
    pub planning_failures: Vec<(PathBuf, Error)>,
}

/// Resolve `params` into the run's sizing policy.
pub fn resolve_policy<R: GridReader>(
    files: &[PathBuf],
    params: &ProcessingParams,
    reader: &R,
) -> Result<ResolvedPolicy> {
    match params.mode {
        SizingMode::Individual => Ok(ResolvedPolicy {
            policy: Some(SizingPolicy::PerImagePowerOfTwo),
            planning_failures: Vec::new(),
        }),
        SizingMode::Uniform => {
            let rounding = params.rounding();
            let plan = plan_uniform_target(files, reader, rounding)?;
            if let Some(target) = plan.target {
                info!("Using uniform size {} for all images: {}", rounding, target);
            }
            Ok(ResolvedPolicy {
                policy: plan.target.map(SizingPolicy::FixedTarget),
                planning_failures: plan.failures,
            })
        }
    }
}

/// Case-insensitive key for an output path, so `a.png` and `A.PNG` collide.
fn destination_key(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}

/// Process `files` into `output_dir` with explicit codec collaborators.
///
/// Per-image failures are recorded in the report and never abort the batch.
/// Two sources mapping to the same output name (`a.png`, `a.PNG`, `a.webp`)
/// never overwrite each other: the later one fails with `DuplicateOutput`.
pub fn process_images<R, W>(
    files: &[PathBuf],
    output_dir: &Path,
    params: &ProcessingParams,
    reader: R,
    writer: W,
) -> Result<BatchReport>
where
    R: GridReader,
    W: GridWriter,
{
    let mut report = BatchReport {
        mode: params.mode,
        ..Default::default()
    };

    let resolved = resolve_policy(files, params, &reader)?;
    let Some(policy) = resolved.policy else {
        warn!(
            "No image in the batch has visible content; skipping {} files",
            files.len()
        );
        let failed = resolved.planning_failures.len();
        for (path, e) in resolved.planning_failures {
            report.record(&path, Outcome::Failed(e));
        }
        report.skipped = files.len() - failed;
        return Ok(report);
    };
    if let SizingPolicy::FixedTarget(target) = policy {
        report.target = Some(target);
    }

    let processor = ImageProcessor::new(reader, writer, policy);
    let mut claimed = HashSet::new();
    for path in files {
        let outcome = match output_path_for(path, output_dir) {
            Ok(output) if claimed.contains(&destination_key(&output)) => {
                Outcome::Failed(Error::DuplicateOutput { path: output })
            }
            Ok(output) => {
                let outcome = processor.process_to(path, &output);
                if outcome.is_produced() {
                    claimed.insert(destination_key(&output));
                }
                outcome
            }
            Err(e) => Outcome::Failed(e),
        };
        log_outcome(path, &outcome);
        report.record(path, outcome);
    }
    Ok(report)
}

/// Process every matching image in `input_dir` into `output_dir` using `params`.
///
/// Creating the output directory or listing the input directory are the only
/// fatal failures.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
) -> Result<BatchReport> {
    std::fs::create_dir_all(output_dir)?;
    let files = list_source_images(input_dir, &params.extensions)?;
    info!("Found {} images in {:?}", files.len(), input_dir);
    process_images(&files, output_dir, params, FileDecoder, PngWriter)
}
