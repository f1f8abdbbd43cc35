//! # hwid-cli — Hardware ID Command-Line Interface
//!
//! Provides the `hardwareid` binary, a thin wrapper around `hwid-core`:
//!
//! ```bash
//! hardwareid                       # raw ID, e.g. 02:42:ac:11:00:02
//! hardwareid --appid Corp.SomeApp  # protected ID, 64 hex characters
//! hardwareid --strategy composite  # Windows: BIOS/disk/CPU composite
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from identifier logic, which lives in
//!   `hwid-core`.
//! - Stdout carries only the identifier; diagnostics go to stderr via
//!   `tracing`.

pub mod config;
pub mod identify;
