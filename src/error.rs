//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Wraps the codec collaborators' typed errors with the offending path, and
//! provides semantic variants for sizing and compositing preconditions.
use std::path::PathBuf;

use thiserror::Error;

use crate::io::{DecodeError, EncodeError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: EncodeError,
    },

    #[error("{} was already written by an earlier image in this run", path.display())]
    DuplicateOutput { path: PathBuf },

    #[error("Extent must be positive on both axes, got: {width}x{height}")]
    ZeroExtent { width: u32, height: u32 },

    #[error("Content {content_width}x{content_height} does not fit target {target_width}x{target_height}")]
    ContentExceedsTarget {
        content_width: u32,
        content_height: u32,
        target_width: u32,
        target_height: u32,
    },

    #[error("No power of two >= {value} fits in 32 bits")]
    DimensionOverflow { value: u32 },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),
}
