use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

use alphacrop::{BatchReport, ProcessingParams, SizingMode, process_directory_to_path};

use super::args::{CliArgs, ModeArgs};
use super::errors::AppError;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Merge the optional config file with the mode given on the command line.
fn resolve_params(config: Option<&Path>, mode: Option<ModeArgs>) -> Result<ProcessingParams, AppError> {
    let mut params = match config {
        Some(path) => ProcessingParams::from_json_file(path)?,
        None => ProcessingParams::default(),
    };

    match mode {
        Some(ModeArgs::Individual) => params.mode = SizingMode::Individual,
        Some(ModeArgs::Uniform { exact }) => {
            params.mode = SizingMode::Uniform;
            params.exact |= exact;
        }
        None => {}
    }
    Ok(params)
}

fn resolve_output_dir(input_dir: &Path, output_dir: Option<PathBuf>) -> PathBuf {
    output_dir.unwrap_or_else(|| input_dir.join("cropped"))
}

fn write_report(path: &Path, report: &BatchReport) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(args.log);

    let params = resolve_params(args.config.as_deref(), args.mode)?;

    if !args.input_dir.is_dir() {
        return Err(AppError::MissingInputDir {
            path: args.input_dir,
        }
        .into());
    }
    let output_dir = resolve_output_dir(&args.input_dir, args.output_dir);
    fs::create_dir_all(&output_dir).map_err(|source| AppError::OutputDir {
        path: output_dir.clone(),
        source,
    })?;

    info!("Starting {} cropping from directory: {:?}", params.mode, args.input_dir);
    info!("Output directory: {:?}", output_dir);

    let report =
        process_directory_to_path(&args.input_dir, &output_dir, &params).map_err(AppError::from)?;

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);

    if let Some(path) = &args.report {
        write_report(path, &report)?;
        info!("Report written to {:?}", path);
    }

    Ok(())
}
