//! I/O layer: the `reader` decoding collaborator, `writers` for lossless
//! output, and `enumerate` for listing a batch of source images.
pub mod enumerate;
pub use enumerate::list_source_images;

pub mod reader;
pub use reader::{DecodeError, FileDecoder, GridReader};

pub mod writers;
pub use writers::{EncodeError, GridWriter, PngWriter};
