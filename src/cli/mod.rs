//! Command Line Interface (CLI) layer for alphacrop.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the individual and uniform
//! batch modes. It wires user-provided options to the underlying library
//! functionality exposed via `alphacrop::api`.
//!
//! If you are embedding alphacrop into another application, prefer using
//! the high-level `alphacrop::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
