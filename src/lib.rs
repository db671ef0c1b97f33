//! Zigfetch - Zig compiler toolchain provisioning
//!
//! This library ensures a specific version of the Zig toolchain is available
//! on the machine: it checks for a locally cached install, falls back to a
//! system-installed binary matching the required version, and otherwise
//! downloads and extracts the correct platform/architecture archive.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (resolution, platform naming, probing)
//! - [`infra`] - Infrastructure layer (network, filesystem, archives)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
