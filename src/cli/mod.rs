//! Command Line Interface (CLI) layer for HLSCOG.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for granule translation. It
//! wires user-provided options to the underlying library functionality
//! exposed via `hlscog::api`.
//!
//! If you are embedding HLSCOG into another application, prefer using
//! the high-level `hlscog::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
