//! Encoding collaborators. Output is always lossless.
pub mod png;

pub use png::{EncodeError, GridWriter, PngWriter, write_rgba_png};
