//! Core processing building blocks: the pixel grid, content-bounds detection,
//! power-of-two fitting, centered compositing, batch planning and the
//! per-image pipeline. These are consumed by the high-level `api` module.
pub mod grid;
pub mod params;
pub mod processing;
