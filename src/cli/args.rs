use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "alphacrop",
    version,
    about = "Crop transparent images to (optional) power-of-two dimensions"
)]
pub struct CliArgs {
    /// Directory containing the source images
    #[arg(short, long, default_value = ".")]
    pub input_dir: PathBuf,

    /// Output directory (defaults to <input-dir>/cropped)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// JSON file with processing parameters; the mode on the command line wins
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a JSON batch report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Cropping mode (individual when omitted)
    #[command(subcommand)]
    pub mode: Option<ModeArgs>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArgs {
    /// Crop each image independently
    Individual,
    /// Make all output images the same size based on the largest content
    Uniform {
        /// Use exact dimensions instead of rounding to power of 2
        #[arg(long, default_value_t = false)]
        exact: bool,
    },
}
