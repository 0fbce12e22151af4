//! # helper - Developer Task Automation for elmobd
//!
//! A small automation tool for the routine chores of the elmobd project,
//! following the [xtask pattern](https://github.com/matklad/cargo-xtask):
//! quality checks (formatting, vetting, building) and the full test cycle
//! (unit tests plus every example program) behind one command-line surface.
//!
//! Every task is a straight-line sequence of external toolchain invocations.
//! The first failing invocation ends the run; the process exit status is the
//! failing tool's own exit status.
//!
//! ## Usage as a Library
//!
//! While primarily designed as a binary tool, the task bodies are callable
//! directly:
//!
//! ```rust,no_run
//! use helper::commands;
//! use helper::utils::{Level, Logger};
//!
//! fn main() -> helper::Result<()> {
//!     let logger = Logger::new(Level::Info);
//!
//!     commands::check::check_project(&logger)?;
//!     commands::test::run_tests(&logger)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`commands`] - the task bodies (`check`, `test`)
//! - [`utils`] - command execution, example discovery, logging, directory
//!   scoping
//! - [`error`] - the error type shared by all of the above

/// Task bodies selected by the command-line subcommand
pub mod commands;

/// Error type and result alias
pub mod error;

/// Utility functions and helpers
pub mod utils;

// Re-export commonly used types
pub use error::{Error, Result};
