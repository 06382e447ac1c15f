//! Shared test utilities for the scatter-layer workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Canonical hideout and feature fixtures
//! - Randomized station-feature generators
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
